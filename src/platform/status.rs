//! Minimal status-text renderer
//!
//! Logs a one-line summary once per simulated second of play and whenever
//! the run ends or restarts. Reads state only.

use super::Renderer;
use crate::sim::{GameEvent, GamePhase, GameState};

/// One-line status summary
pub fn status_line(state: &GameState) -> String {
    let phase = match state.phase {
        GamePhase::Playing => "PLAYING",
        GamePhase::GameOver => "GAME OVER",
    };
    format!(
        "{} | score {} | best {} | run {} | {:.1}s | obstacles {} | shots {}",
        phase,
        state.score,
        state.stats.best_score,
        state.stats.runs,
        state.stats.run_time,
        state.obstacles.len(),
        state.projectiles.len()
    )
}

#[derive(Debug, Clone, Default)]
pub struct StatusRenderer {
    frames: u64,
    /// Whole seconds of `run_time` at the previous frame
    last_second: u64,
    last_line: String,
}

impl StatusRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent line that was logged
    pub fn last_line(&self) -> &str {
        &self.last_line
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for StatusRenderer {
    fn render(&mut self, state: &GameState) {
        self.frames += 1;

        let mut notable = false;
        for event in &state.events {
            match event {
                GameEvent::GameOver { .. } | GameEvent::Restarted => notable = true,
                GameEvent::ObstacleDestroyed { kind, points, .. } => {
                    log::trace!("+{} {}", points, kind.as_str());
                }
                GameEvent::ObstacleEscaped { kind, penalty, .. } => {
                    log::trace!("-{} {} got through", penalty, kind.as_str());
                }
                _ => {}
            }
        }

        let second = state.stats.run_time.floor() as u64;
        let crossed = second != self.last_second;
        self.last_second = second;

        if notable || crossed {
            self.last_line = status_line(state);
            log::info!("{}", self.last_line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_status_line() {
        let mut state = GameState::new(1);
        state.score = -4;
        let line = status_line(&state);
        assert!(line.starts_with("PLAYING | score -4 | best 0"));

        state.phase = GamePhase::GameOver;
        assert!(status_line(&state).starts_with("GAME OVER"));
    }

    #[test]
    fn test_reports_once_per_simulated_second() {
        let mut state = GameState::new(1);
        let mut renderer = StatusRenderer::new();
        // Quarter-second frames sum exactly, so the fourth one crosses 1.0s
        for _ in 0..3 {
            tick(&mut state, &TickInput::default(), 0.25);
            renderer.render(&state);
        }
        assert!(renderer.last_line().is_empty());

        tick(&mut state, &TickInput::default(), 0.25);
        renderer.render(&state);
        assert!(renderer.last_line().starts_with("PLAYING"));
        assert!(renderer.last_line().contains("| 1.0s |"));
        assert_eq!(renderer.frames(), 4);
    }

    #[test]
    fn test_frame_count_does_not_drive_reports() {
        let mut state = GameState::new(1);
        let mut renderer = StatusRenderer::new();
        // Sixty short frames are far less than a simulated second
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), 0.001);
            renderer.render(&state);
        }
        assert!(renderer.last_line().is_empty());
    }
}
