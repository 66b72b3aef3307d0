use serde::{Deserialize, Serialize};

use crate::errors::{Result, TimelapseError};

/// How the cycle behaves once the timer reaches the cycle duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimingMode {
    /// Start immediately, wrap back to zero at the end of each cycle.
    #[default]
    Loop,
    /// Start immediately, play a single cycle and hold the final pose.
    OneShot,
    /// Wait for a trigger. While running, `repeat` selects loop or one-shot
    /// behaviour; a second trigger resets to idle.
    Triggered { repeat: bool },
}

impl TimingMode {
    /// Whether the cycle wraps instead of completing.
    #[must_use]
    pub fn repeats(self) -> bool {
        matches!(self, Self::Loop | Self::Triggered { repeat: true })
    }

    #[must_use]
    pub fn is_triggered(self) -> bool {
        matches!(self, Self::Triggered { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    /// Waiting for a trigger (triggered mode only).
    Idle,
    Running,
    /// A non-repeating cycle reached its end. Terminal until a trigger reset.
    Completed,
}

/// Transition reported by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Started,
    Wrapped,
    Completed,
    Reset,
}

/// Mutable timing state of one controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseState {
    pub timer: f32,
    pub cycle_duration: f32,
    pub mode: TimingMode,
    pub status: PhaseStatus,
    /// Shaped progress published on the previous frame, used for the derivative.
    pub last_shaped_value: f32,
}

/// Elapsed-time accumulation and the Loop / OneShot / Triggered state machine.
///
/// The timer only grows through [`advance`](Self::advance) and is only zeroed
/// by a wrap or a trigger reset.
#[derive(Debug, Clone)]
pub struct PhaseClock {
    state: PhaseState,
}

pub(crate) fn validate_cycle_duration(cycle_duration: f32) -> Result<()> {
    if cycle_duration.is_finite() && cycle_duration > 0.0 {
        Ok(())
    } else {
        Err(TimelapseError::InvalidConfiguration(format!(
            "cycle duration must be a positive number of seconds, got {cycle_duration}"
        )))
    }
}

impl PhaseClock {
    pub fn new(cycle_duration: f32, mode: TimingMode) -> Result<Self> {
        validate_cycle_duration(cycle_duration)?;

        let status = if mode.is_triggered() {
            PhaseStatus::Idle
        } else {
            PhaseStatus::Running
        };

        Ok(Self {
            state: PhaseState {
                timer: 0.0,
                cycle_duration,
                mode,
                status,
                last_shaped_value: 0.0,
            },
        })
    }

    #[must_use]
    pub fn state(&self) -> &PhaseState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> PhaseStatus {
        self.state.status
    }

    #[must_use]
    pub fn mode(&self) -> TimingMode {
        self.state.mode
    }

    #[must_use]
    pub fn timer(&self) -> f32 {
        self.state.timer
    }

    #[must_use]
    pub fn cycle_duration(&self) -> f32 {
        self.state.cycle_duration
    }

    #[must_use]
    pub fn last_shaped_value(&self) -> f32 {
        self.state.last_shaped_value
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.status == PhaseStatus::Running
    }

    /// Accumulates `dt` while running. Returns `false` when the clock is idle
    /// or completed and the frame should not be evaluated.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        if dt.is_finite() && dt > 0.0 {
            self.state.timer += dt;
        }
        true
    }

    pub fn record_shaped_value(&mut self, shaped: f32) {
        self.state.last_shaped_value = shaped;
    }

    /// Applies the end-of-cycle rule after a frame has been published.
    pub fn finish_frame(&mut self) -> Option<PhaseEvent> {
        if !self.is_running() || self.state.timer < self.state.cycle_duration {
            return None;
        }

        if self.state.mode.repeats() {
            self.state.timer = 0.0;
            self.state.last_shaped_value = 0.0;
            log::debug!("Timelapse cycle wrapped");
            Some(PhaseEvent::Wrapped)
        } else {
            self.state.status = PhaseStatus::Completed;
            log::debug!("Timelapse cycle completed after {:.3}s", self.state.timer);
            Some(PhaseEvent::Completed)
        }
    }

    /// Toggles a triggered clock between idle and running. Ignored in the
    /// other modes.
    pub fn trigger(&mut self) -> Option<PhaseEvent> {
        if !self.state.mode.is_triggered() {
            return None;
        }

        self.state.timer = 0.0;
        self.state.last_shaped_value = 0.0;

        match self.state.status {
            PhaseStatus::Idle => {
                self.state.status = PhaseStatus::Running;
                log::debug!("Timelapse started by trigger");
                Some(PhaseEvent::Started)
            }
            PhaseStatus::Running | PhaseStatus::Completed => {
                self.state.status = PhaseStatus::Idle;
                log::debug!("Timelapse reset by trigger");
                Some(PhaseEvent::Reset)
            }
        }
    }
}
