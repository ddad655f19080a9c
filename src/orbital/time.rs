//! Simulation clock with present and static time modes

use bevy::prelude::*;
use chrono::{DateTime, TimeZone, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Simulated days advanced per real second in static mode.
pub const DEFAULT_STATIC_SPEED: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeMode {
    /// Days derived from wall-clock time every frame.
    #[default]
    Present,
    /// Days accumulated from frame deltas.
    Static,
}

/// Request to switch the active time mode.
#[derive(Message, Clone, Copy, Debug)]
pub struct TimeModeRequest(pub TimeMode);

/// Simulation time resource
#[derive(Resource, Debug)]
pub struct SimulationTime {
    pub mode: TimeMode,
    /// Real seconds spent in static mode. Kept across mode switches.
    pub static_seconds: f64,
    pub static_speed: f64,
    pub epoch: DateTime<Utc>,
    /// Simulated day count for the current frame.
    pub days: f64,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self::new(DEFAULT_STATIC_SPEED)
    }
}

impl SimulationTime {
    pub fn new(static_speed: f64) -> Self {
        Self {
            mode: TimeMode::Present,
            static_seconds: 0.0,
            static_speed,
            epoch: model_epoch(),
            days: 0.0,
        }
    }

    pub fn set_mode(&mut self, mode: TimeMode) {
        self.mode = mode;
    }

    /// Advance by one frame. `now` is only read in present mode, `delta_secs`
    /// only in static mode.
    pub fn tick(&mut self, now: DateTime<Utc>, delta_secs: f64) -> f64 {
        self.days = match self.mode {
            TimeMode::Present => days_since(self.epoch, now),
            TimeMode::Static => {
                self.static_seconds += delta_secs.max(0.0);
                self.static_seconds * self.static_speed
            }
        };
        self.days
    }
}

/// Midnight UTC, 1 January 2000.
pub fn model_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

pub fn days_since(epoch: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    now.signed_duration_since(epoch).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// System to apply time mode requests
pub fn apply_time_mode_requests(
    mut requests: MessageReader<TimeModeRequest>,
    mut sim_time: ResMut<SimulationTime>,
) {
    for TimeModeRequest(mode) in requests.read() {
        if sim_time.mode != *mode {
            info!("Time mode: {:?} -> {:?}", sim_time.mode, mode);
        }
        sim_time.set_mode(*mode);
    }
}

/// System to advance the simulated day count
pub fn advance_simulation_clock(time: Res<Time>, mut sim_time: ResMut<SimulationTime>) {
    sim_time.tick(Utc::now(), time.delta_secs_f64());
}
