// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas errors.

use crossline_collapse::CollapseError;
use crossline_scene::SceneError;

/// Errors surfaced by [`Canvas`](crate::Canvas).
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CanvasError {
    /// A drawing operation was invalid in the current state.
    #[error(transparent)]
    Scene(#[from] SceneError),
    /// A collapse could not start.
    #[error(transparent)]
    Collapse(#[from] CollapseError),
}
