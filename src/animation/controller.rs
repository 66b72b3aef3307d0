use crate::animation::channels::{ChannelDrivers, ChannelOutputs};
use crate::animation::clock::{PhaseClock, PhaseEvent, PhaseStatus};
use crate::animation::curve::Curve;
use crate::animation::presets::PresetLibrary;
use crate::animation::progress::{ProgressEvaluator, ProgressSample};
use crate::errors::{Result, TimelapseError};
use crate::input::InputSource;
use crate::scene::actuators::EnvironmentTargets;
use crate::settings::TimelapseSettings;

/// Everything the controller published on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelapseFrame {
    pub status: PhaseStatus,
    pub event: Option<PhaseEvent>,
    /// `None` when the clock did not run this tick.
    pub progress: Option<ProgressSample>,
    pub outputs: ChannelOutputs,
}

impl TimelapseFrame {
    fn idle(status: PhaseStatus, event: Option<PhaseEvent>) -> Self {
        Self {
            status,
            event,
            progress: None,
            outputs: ChannelOutputs::default(),
        }
    }
}

/// Drives sun rotation, cloud drift and water speed from one timeline.
///
/// Each tick runs clock → progress → channels. Configuration methods
/// (`select_preset`, `set_curve`) must not be interleaved with a tick in
/// progress; `&mut self` on both enforces this.
///
/// ```rust,ignore
/// let mut controller = TimelapseController::new(TimelapseSettings::default())?;
/// controller.start(&mut environment);
///
/// // per frame
/// input.start_frame();
/// let frame = controller.tick(dt, &mut environment, &input);
/// ```
#[derive(Debug, Clone)]
pub struct TimelapseController {
    settings: TimelapseSettings,
    curve: Curve,
    selected_preset: Option<&'static str>,
    clock: PhaseClock,
    channels: ChannelDrivers,
    started: bool,
}

impl TimelapseController {
    pub fn new(settings: TimelapseSettings) -> Result<Self> {
        settings.validate()?;
        let (curve, selected_preset) = settings.resolve_curve()?;
        let clock = PhaseClock::new(settings.cycle_duration, settings.mode)?;
        let channels = ChannelDrivers::new(
            &settings.sun,
            &settings.clouds,
            &settings.water,
            settings.mode.repeats(),
        );

        Ok(Self {
            settings,
            curve,
            selected_preset,
            clock,
            channels,
            started: false,
        })
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Copies the preset curve at `index` into the controller.
    pub fn select_preset(&mut self, index: usize) -> Result<()> {
        let entry =
            PresetLibrary::get(index).ok_or_else(|| TimelapseError::PresetIndexOutOfBounds {
                index,
                len: PresetLibrary::presets().len(),
            })?;
        self.curve = entry.curve.clone();
        self.selected_preset = Some(entry.name);
        self.settings.preset = Some(entry.name.to_string());
        self.settings.curve = None;
        Ok(())
    }

    pub fn select_preset_by_name(&mut self, name: &str) -> Result<()> {
        let index = PresetLibrary::find_index_by_name(name)
            .ok_or_else(|| TimelapseError::PresetNotFound(name.to_string()))?;
        self.select_preset(index)
    }

    /// Replaces the speed curve with a custom one.
    pub fn set_curve(&mut self, curve: Curve) {
        self.settings.curve = Some(curve.clone());
        self.settings.preset = None;
        self.curve = curve;
        self.selected_preset = None;
    }

    #[must_use]
    pub fn selected_preset_name(&self) -> Option<&'static str> {
        self.selected_preset
    }

    #[must_use]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    #[must_use]
    pub fn settings(&self) -> &TimelapseSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> &PhaseClock {
        &self.clock
    }

    #[must_use]
    pub fn channels(&self) -> &ChannelDrivers {
        &self.channels
    }

    #[must_use]
    pub fn status(&self) -> PhaseStatus {
        self.clock.status()
    }

    // ========================================================================
    // Runtime
    // ========================================================================

    /// Captures actuator baselines. Runs once; `tick` calls it implicitly.
    pub fn start(&mut self, targets: &mut dyn EnvironmentTargets) {
        if self.started {
            return;
        }
        self.started = true;
        self.channels.capture_baselines(targets);
        log::debug!(
            "Timelapse started: {:?}, cycle {:.2}s, curve {}",
            self.settings.mode,
            self.settings.cycle_duration,
            self.selected_preset.unwrap_or("custom")
        );
    }

    /// Programmatic equivalent of pressing the trigger key.
    pub fn trigger(&mut self, targets: &mut dyn EnvironmentTargets) -> TimelapseFrame {
        self.start(targets);
        match self.clock.trigger() {
            Some(PhaseEvent::Started) => {
                // Publish the start pose without advancing time.
                self.publish(0.0, targets, Some(PhaseEvent::Started))
            }
            Some(PhaseEvent::Reset) => {
                let mut frame = TimelapseFrame::idle(self.clock.status(), Some(PhaseEvent::Reset));
                frame.outputs.water_rate = self.channels.restore_water(targets);
                frame
            }
            event => TimelapseFrame::idle(self.clock.status(), event),
        }
    }

    /// Advances the timelapse by `dt` seconds and drives every channel.
    pub fn tick(
        &mut self,
        dt: f32,
        targets: &mut dyn EnvironmentTargets,
        input: &dyn InputSource,
    ) -> TimelapseFrame {
        self.start(targets);

        if self.clock.mode().is_triggered()
            && input.was_key_pressed_this_frame(self.settings.trigger_key)
        {
            return self.trigger(targets);
        }

        if !self.clock.advance(dt) {
            return TimelapseFrame::idle(self.clock.status(), None);
        }

        let mut frame = self.publish(dt, targets, None);

        if let Some(event) = self.clock.finish_frame() {
            if event == PhaseEvent::Completed
                && let Some(rate) = self.channels.restore_water(targets)
            {
                frame.outputs.water_rate = Some(rate);
            }
            frame.status = self.clock.status();
            frame.event = Some(event);
        }

        frame
    }

    fn publish(
        &mut self,
        dt: f32,
        targets: &mut dyn EnvironmentTargets,
        event: Option<PhaseEvent>,
    ) -> TimelapseFrame {
        let state = self.clock.state();
        let sample = ProgressEvaluator::evaluate(
            state.timer,
            state.cycle_duration,
            &self.curve,
            state.last_shaped_value,
            dt,
        );
        self.clock.record_shaped_value(sample.shaped_t);

        let outputs = self.channels.apply(&sample, targets);

        TimelapseFrame {
            status: self.clock.status(),
            event,
            progress: Some(sample),
            outputs,
        }
    }
}
