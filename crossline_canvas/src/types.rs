// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input and output types for the canvas: pointer events, outcomes, and commands.

use crossline_collapse::FrameToken;
use kurbo::Point;

/// Kind of pointer event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerKind {
    /// A button was pressed.
    Down,
    /// A button was released.
    Up,
    /// The pointer moved.
    Move,
    /// The platform is about to open a context menu over the surface.
    ContextMenu,
}

/// Mouse button associated with a pointer event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Middle or any other button.
    Auxiliary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            2 => Self::Secondary,
            _ => Self::Auxiliary,
        }
    }
}

/// A pointer event in client (host pixel) coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Button for `Down`/`Up`; `None` for moves.
    pub button: Option<PointerButton>,
    /// Position in client coordinates, mapped through the canvas's
    /// [`CoordinateMap`](crate::CoordinateMap).
    pub position: Point,
}

impl PointerEvent {
    /// A move to `position`.
    pub fn moved(position: Point) -> Self {
        Self {
            kind: PointerKind::Move,
            button: None,
            position,
        }
    }

    /// A press of `button` at `position`.
    pub fn down(button: PointerButton, position: Point) -> Self {
        Self {
            kind: PointerKind::Down,
            button: Some(button),
            position,
        }
    }

    /// A release of `button` at `position`.
    pub fn up(button: PointerButton, position: Point) -> Self {
        Self {
            kind: PointerKind::Up,
            button: Some(button),
            position,
        }
    }

    /// A context-menu request at `position`.
    pub fn context_menu(position: Point) -> Self {
        Self {
            kind: PointerKind::ContextMenu,
            button: None,
            position,
        }
    }
}

/// What the canvas did with an event.
///
/// Returned by [`Canvas::handle_pointer`](crate::Canvas::handle_pointer). Hosts use it
/// to decide whether to suppress the platform default.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The event had no effect.
    Ignored,
    /// The event was consumed.
    Handled,
    /// The event was handled and the platform default must be suppressed.
    PreventDefault,
}

/// Frames for the host to cancel and schedule after [`Canvas::collapse`](crate::Canvas::collapse).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CollapseCommand {
    /// A frame from an interrupted collapse that the host should cancel.
    pub cancel: Option<FrameToken>,
    /// The first frame of the collapse; `None` when there was nothing to collapse.
    pub schedule: Option<FrameToken>,
}
