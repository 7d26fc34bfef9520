//! Decorative transitions requested by the navigator.
//!
//! Requests are fire-and-forget. State changes are applied before the
//! request is handed over and never wait on it. A driver receiving a new
//! request should drop any transition still in flight.

use std::time::Duration;

use crate::{
    Direction,
    consts::{JUMP_DELAY_MS, JUMP_FADE_IN_MS, JUMP_FADE_OUT_MS, MONTH_TRANSITION_MS},
};

/// What the driver should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Month bar and grid fade out while sliding toward `direction`, then reset.
    MonthSlide { direction: Direction, duration: Duration },
    /// Grid fades out, reloads after `delay`, then fades in again.
    Jump {
        fade_out: Duration,
        delay:    Duration,
        fade_in:  Duration,
    },
}

impl Transition {
    pub const fn month_slide(direction: Direction) -> Self {
        Self::MonthSlide {
            direction,
            duration: Duration::from_millis(MONTH_TRANSITION_MS),
        }
    }

    pub const fn jump() -> Self {
        Self::Jump {
            fade_out: Duration::from_millis(JUMP_FADE_OUT_MS),
            delay:    Duration::from_millis(JUMP_DELAY_MS),
            fade_in:  Duration::from_millis(JUMP_FADE_IN_MS),
        }
    }
}

/// One request. A higher `generation` supersedes every lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRequest {
    pub transition: Transition,
    pub generation: u64,
}

pub trait AnimationDriver {
    fn start(&mut self, request: AnimationRequest);
}

/// Driver that plays nothing. Used when animation is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAnimation;

impl AnimationDriver for NoAnimation {
    fn start(&mut self, _request: AnimationRequest) {}
}

/// Keeps every request, for hosts that replay them later and for tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingAnimation {
    pub requests: Vec<AnimationRequest>,
}

impl RecordingAnimation {
    /// The request a driver should currently be playing.
    pub fn current(&self) -> Option<&AnimationRequest> {
        self.requests.iter().max_by_key(|request| request.generation)
    }
}

impl AnimationDriver for RecordingAnimation {
    fn start(&mut self, request: AnimationRequest) {
        self.requests.push(request);
    }
}

impl<T: AnimationDriver + ?Sized> AnimationDriver for Box<T> {
    fn start(&mut self, request: AnimationRequest) {
        (**self).start(request);
    }
}
