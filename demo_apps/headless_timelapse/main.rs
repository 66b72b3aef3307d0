use anyhow::Context;
use timelapse::animation::clock::{PhaseStatus, TimingMode};
use timelapse::{
    CloudVolume, Environment, Input, SunLight, TimelapseController, TimelapseSettings,
    WaterSurface,
};

/// Simulated frame rate.
const FRAME_DT: f32 = 1.0 / 30.0;
/// Log every Nth frame.
const LOG_EVERY: u32 = 30;

/// Headless timelapse run
///
/// Usage: `headless_timelapse [settings.json]`
///
/// Without a settings file, runs the default 60 second loop for one cycle.
/// Triggered timelapses are started on the first frame.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading settings from {path}"))?;
            TimelapseSettings::from_json_str(&json)
                .with_context(|| format!("parsing settings from {path}"))?
        }
        None => TimelapseSettings::default(),
    };

    let mut environment = Environment::new()
        .with_sun(SunLight::new())
        .with_clouds(CloudVolume::default())
        .with_water(WaterSurface::default());

    let mut controller = TimelapseController::new(settings)?;
    controller.start(&mut environment);

    if matches!(controller.settings().mode, TimingMode::Triggered { .. }) {
        controller.trigger(&mut environment);
    }

    let total_frames = (controller.settings().cycle_duration / FRAME_DT).ceil() as u32 + 1;
    let input = Input::new();

    for frame_index in 1..=total_frames {
        let frame = controller.tick(FRAME_DT, &mut environment, &input);

        if let Some(event) = frame.event {
            log::info!("frame {frame_index}: {event:?}");
        }

        if frame_index % LOG_EVERY == 0
            && let Some(progress) = frame.progress
        {
            let sun = environment
                .sun
                .as_ref()
                .map(SunLight::rotation_euler_degrees)
                .unwrap_or_default();
            let clouds = environment
                .clouds
                .as_ref()
                .map(|c| c.shape_offset)
                .unwrap_or_default();
            let water = environment.water.as_ref().map_or(0.0, |w| w.time_multiplier);

            log::info!(
                "frame {frame_index}: raw {:.3} shaped {:.3} | sun {sun:.1} | clouds {clouds:.1} | water {water:.3}",
                progress.raw_t,
                progress.shaped_t,
            );
        }

        if frame.status == PhaseStatus::Completed {
            break;
        }
    }

    log::info!("speed curve:\n{}", controller.curve().to_keyframe_code());
    Ok(())
}
