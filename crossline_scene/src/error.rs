// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene errors.

use crate::types::{Operation, Phase};

/// Errors raised by [`Scene`](crate::Scene) mutations.
///
/// These signal a wiring bug in the caller: the operation is not valid in the
/// current drawing state. Mutations while the scene is frozen for collapse are
/// not errors; they are ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// The operation is not valid in the current drawing phase.
    #[error("cannot {op} while {state}")]
    InvalidTransition {
        /// The rejected operation.
        op: Operation,
        /// The phase the scene was in.
        state: Phase,
    },
}
