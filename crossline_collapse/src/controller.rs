// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable frame scheduling.
//!
//! ## Overview
//!
//! The host owns the real frame primitive (for example `requestAnimationFrame`).
//! The animator asks for a frame by handing out a [`FrameToken`]; the host fires it back
//! through [`Collapser::on_frame`](crate::Collapser::on_frame).
//!
//! Every token captures the controller's generation. [`AnimationController::cancel`]
//! bumps the generation, so a callback that was already queued by the host can no
//! longer act even if the host failed to cancel it. At most one token is outstanding.

/// Handle for one scheduled animation frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FrameToken {
    generation: u64,
    serial: u64,
}

impl FrameToken {
    /// Generation the token was scheduled in.
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Generation counter plus the single outstanding frame.
#[derive(Clone, Debug, Default)]
pub struct AnimationController {
    generation: u64,
    serial: u64,
    outstanding: Option<FrameToken>,
}

impl AnimationController {
    /// Create a controller with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The frame waiting to fire, if any.
    pub fn outstanding(&self) -> Option<FrameToken> {
        self.outstanding
    }

    /// Schedule the next frame, replacing any outstanding one.
    pub fn schedule(&mut self) -> FrameToken {
        self.serial = self.serial.wrapping_add(1);
        let token = FrameToken {
            generation: self.generation,
            serial: self.serial,
        };
        self.outstanding = Some(token);
        token
    }

    /// Invalidate every token handed out so far.
    ///
    /// Returns the outstanding token so the host can cancel its platform callback.
    pub fn cancel(&mut self) -> Option<FrameToken> {
        self.generation = self.generation.wrapping_add(1);
        self.outstanding.take()
    }

    /// Consume `token` if it is the outstanding frame of the current generation.
    ///
    /// Returns `false` for stale tokens: cancelled, superseded, or already fired.
    pub fn accept(&mut self, token: FrameToken) -> bool {
        if token.generation == self.generation && self.outstanding == Some(token) {
            self.outstanding = None;
            true
        } else {
            false
        }
    }
}
