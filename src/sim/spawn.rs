//! Per-kind spawn timers
//!
//! Every obstacle kind has its own timer; there is no shared spawn clock.
//! A timer fires at most once per frame no matter how long the frame was,
//! and restarts from zero when it fires (a stalled frame delays the next
//! spawn instead of bursting).

use serde::{Deserialize, Serialize};

use super::state::ObstacleKind;
use crate::tuning::Tuning;

/// Periodic timer for one obstacle kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub kind: ObstacleKind,
    /// Seconds between spawns
    pub period: f32,
    /// Seconds accumulated since the last spawn
    pub elapsed: f32,
}

impl SpawnTimer {
    pub fn new(kind: ObstacleKind, period: f32) -> Self {
        Self {
            kind,
            period,
            elapsed: 0.0,
        }
    }

    /// Accumulate `dt`; returns true if the timer fired this frame
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

/// All spawn timers, one per obstacle kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnScheduler {
    timers: [SpawnTimer; ObstacleKind::COUNT],
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timers: ObstacleKind::ALL
                .map(|kind| SpawnTimer::new(kind, tuning.obstacle(kind).spawn_period)),
        }
    }

    /// Advance every timer by `dt` and return the kinds due this frame,
    /// in tier order, each at most once
    pub fn advance(&mut self, dt: f32) -> Vec<ObstacleKind> {
        self.timers
            .iter_mut()
            .filter_map(|timer| timer.advance(dt).then_some(timer.kind))
            .collect()
    }

    pub fn timer(&self, kind: ObstacleKind) -> &SpawnTimer {
        &self.timers[kind.index()]
    }

    pub fn timers(&self) -> &[SpawnTimer] {
        &self.timers
    }

    /// Zero every timer
    pub fn reset(&mut self) {
        for timer in &mut self.timers {
            timer.elapsed = 0.0;
        }
    }
}
