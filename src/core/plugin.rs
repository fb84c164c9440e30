//! CorePlugin wires the UI clock, configuration and logging utilities.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

use super::config::AppConfig;

/// Largest delta applied in one tick.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Tracks the time that drives widget timers (typing delays, guide pauses, notices).
#[derive(Resource, Debug, Default)]
pub struct UiClock {
    last_delta: Duration,
    elapsed: Duration,
}

impl UiClock {
    /// Delta applied on the most recent tick.
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Total time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Applies a frame delta, clamping long stalls.
    pub fn tick(&mut self, real_delta: Duration) {
        self.last_delta = real_delta.min(MAX_FRAME_DELTA);
        self.elapsed += self.last_delta;
    }
}

/// Registers the clock and the loaded configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AppConfig::load_or_default())
            .init_resource::<UiClock>()
            .add_systems(Startup, log_startup_config)
            .add_systems(PreUpdate, update_ui_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_clock_ticks);
        }
    }
}

fn update_ui_clock(mut clock: ResMut<UiClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_config(config: Res<AppConfig>) {
    info!(
        "CorePlugin initialised: storage at {:?}, chat delay {:.2}s, notice lifetime {:.2}s",
        config.storage.file_path(),
        config.assistant.response_delay_seconds,
        config.notices.lifetime_seconds
    );
}

#[cfg(feature = "core_debug")]
fn log_clock_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<UiClock>) {
    if timer.timer.tick(clock.last_delta()).just_finished() {
        info!(
            target: "core_debug",
            "UI elapsed: {:.2}s | dt: {:.4}s",
            clock.elapsed().as_secs_f32(),
            clock.last_delta().as_secs_f32(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates_deltas() {
        let mut clock = UiClock::default();
        clock.tick(Duration::from_millis(100));
        clock.tick(Duration::from_millis(50));

        assert_eq!(clock.last_delta(), Duration::from_millis(50));
        assert_eq!(clock.elapsed(), Duration::from_millis(150));
    }

    #[test]
    fn clock_clamps_stalled_frames() {
        let mut clock = UiClock::default();
        clock.tick(Duration::from_secs(5));

        assert_eq!(clock.last_delta(), MAX_FRAME_DELTA);
        assert_eq!(clock.elapsed(), MAX_FRAME_DELTA);
    }
}
