//! Platform abstraction layer
//!
//! The simulation only talks to the outside world through three seams:
//! - `Clock`: frame time and viewport bounds
//! - `InputSource`: thrust / fire / retry / close signals
//! - `Renderer`: read-only consumer of the state after each frame
//!
//! `run_frame` wires one loop iteration through them.

pub mod input;
pub mod status;
pub mod time;

pub use input::{Autopilot, ScriptedInput};
pub use status::{StatusRenderer, status_line};
pub use time::{ClockMode, FrameClock};

use crate::Viewport;
use crate::sim::{GameState, TickInput, tick};

/// Source of frame timing and viewport bounds
pub trait Clock {
    /// Seconds since the previous call
    fn elapsed_since_last_frame(&mut self) -> f32;

    fn viewport(&self) -> Viewport;

    fn viewport_width(&self) -> f32 {
        self.viewport().width
    }

    fn viewport_height(&self) -> f32 {
        self.viewport().height
    }
}

/// Discrete player signals, sampled once per frame
pub trait InputSource {
    /// Refresh signals for the coming frame. Called once per frame before
    /// any query; the state is the one the frame will advance.
    fn poll(&mut self, _state: &GameState) {}

    fn is_thrust_held(&self) -> bool;

    /// True for exactly one frame per press
    fn is_fire_pressed(&self) -> bool;

    /// True for exactly one frame per press
    fn is_retry_pressed(&self) -> bool;

    fn is_close_requested(&self) -> bool;
}

/// Consumer of simulation state; must not mutate it
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Run one loop iteration: time → input → tick → render.
/// Returns false once the input source asks to close; the frame that
/// observed the request has still been completed.
pub fn run_frame<C, I, R>(
    state: &mut GameState,
    clock: &mut C,
    input: &mut I,
    renderer: &mut R,
) -> bool
where
    C: Clock + ?Sized,
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    let dt = clock.elapsed_since_last_frame();
    state.viewport = clock.viewport();

    input.poll(state);
    let frame_input = TickInput {
        thrust: input.is_thrust_held(),
        fire: input.is_fire_pressed(),
        retry: input.is_retry_pressed(),
    };

    tick(state, &frame_input, dt);
    renderer.render(state);

    !input.is_close_requested()
}
