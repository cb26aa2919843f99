// Copyright 2025 the Crossline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas controller.
//!
//! ## Overview
//!
//! Routes pointer events into [`Scene`] transitions, renders after every change, and
//! owns the [`Collapser`] that erases the scene on demand.
//!
//! ## Input mapping
//!
//! - Primary release: idle → arm at the pointer; armed → commit.
//! - Secondary release while armed: discard the live segment.
//! - Move: update the live end when armed, then redraw.
//! - Press: consumed, no effect. Releases drive the toggle.
//! - Context menu: the platform default is always suppressed.
//!
//! While a collapse runs, every other input is ignored and nothing is rendered.

use crossline_collapse::{CollapseParams, Collapser, FrameOutcome, FrameToken};
use crossline_scene::{Scene, SceneStyle, Surface};
use kurbo::{Point, Rect, Size};

use crate::error::CanvasError;
use crate::transform::{CoordinateMap, Identity};
use crate::types::{CollapseCommand, Outcome, PointerButton, PointerEvent, PointerKind};

/// Canvas configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Drawing buffer size; the render pass clears this whole area.
    pub viewport: Size,
    /// Segment and marker styling.
    pub style: SceneStyle,
    /// Collapse animation parameters.
    pub collapse: CollapseParams,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(800.0, 600.0),
            style: SceneStyle::default(),
            collapse: CollapseParams::default(),
        }
    }
}

/// Interactive segment canvas.
///
/// ## Usage
///
/// - Construct with [`Canvas::new`] when client coordinates already are canvas
///   coordinates (or the map has a sensible `Default`), or with [`Canvas::with_map`]
///   to supply a [`CoordinateMap`].
/// - Forward every pointer event to [`Canvas::handle_pointer`]. When it returns
///   [`Outcome::PreventDefault`], suppress the platform default.
/// - Call [`Canvas::collapse`] from the trigger control. Cancel the returned
///   `cancel` frame, if any, and schedule the `schedule` frame.
/// - When a scheduled frame fires, pass its token to [`Canvas::on_frame`] and schedule
///   the next token on [`FrameOutcome::Continue`].
pub struct Canvas<M: CoordinateMap = Identity> {
    scene: Scene,
    collapser: Collapser,
    config: CanvasConfig,
    map: M,
}

impl<M: CoordinateMap> core::fmt::Debug for Canvas<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("scene", &self.scene)
            .field("collapser", &self.collapser)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<M: CoordinateMap + Default> Canvas<M> {
    /// Create a canvas with a default coordinate map.
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_map(config, M::default())
    }
}

impl<M: CoordinateMap + Default> Default for Canvas<M> {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl<M: CoordinateMap> Canvas<M> {
    /// Create a canvas that maps client positions through `map`.
    pub fn with_map(config: CanvasConfig, map: M) -> Self {
        Self {
            scene: Scene::new(),
            collapser: Collapser::new(config.collapse),
            config,
            map,
        }
    }

    /// The scene being drawn.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The collapse driver.
    pub fn collapser(&self) -> &Collapser {
        &self.collapser
    }

    /// Configuration in use.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The coordinate map.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Replace the coordinate map, for example after a layout change.
    pub fn set_map(&mut self, map: M) {
        self.map = map;
    }

    /// The area cleared by each render.
    pub fn viewport(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.config.viewport)
    }

    /// True while a collapse is erasing the scene.
    pub fn is_collapsing(&self) -> bool {
        self.scene.is_collapsing()
    }

    /// Apply one pointer event and redraw if anything changed.
    pub fn handle_pointer<S: Surface + ?Sized>(
        &mut self,
        event: PointerEvent,
        surface: &mut S,
    ) -> Result<Outcome, CanvasError> {
        if event.kind == PointerKind::ContextMenu {
            return Ok(Outcome::PreventDefault);
        }
        if self.scene.is_collapsing() {
            tracing::trace!(?event.kind, "input ignored while collapsing");
            return Ok(Outcome::Ignored);
        }
        let at = self.map.to_canvas(event.position);
        let armed = self.scene.state().is_armed();
        match (event.kind, event.button) {
            (PointerKind::Down, _) => return Ok(Outcome::Handled),
            (PointerKind::Up, Some(PointerButton::Primary)) => {
                if armed {
                    self.scene.commit()?;
                } else {
                    self.scene.arm(at)?;
                }
            }
            (PointerKind::Up, Some(PointerButton::Secondary)) if armed => {
                self.scene.discard()?;
            }
            (PointerKind::Move, _) => {
                if armed {
                    self.scene.update_live_end(at)?;
                }
            }
            _ => return Ok(Outcome::Ignored),
        }
        self.render(surface);
        Ok(Outcome::Handled)
    }

    /// Start erasing the scene, cancelling any collapse already running.
    ///
    /// An empty scene is left alone and nothing is scheduled. Fails with
    /// [`CollapseError::Armed`](crossline_collapse::CollapseError::Armed) while a
    /// segment is being drawn.
    pub fn collapse(&mut self) -> Result<CollapseCommand, CanvasError> {
        let restart = self.collapser.restart(&mut self.scene)?;
        Ok(CollapseCommand {
            cancel: restart.cancelled,
            schedule: restart.frame,
        })
    }

    /// Advance the collapse for a frame fired at `now` (milliseconds).
    ///
    /// Once the collapse completes the emptied scene is rendered.
    pub fn on_frame<S: Surface + ?Sized>(
        &mut self,
        token: FrameToken,
        now: f64,
        surface: &mut S,
    ) -> FrameOutcome {
        let outcome = self
            .collapser
            .on_frame(token, now, &mut self.scene, surface);
        if outcome == FrameOutcome::Completed {
            self.render(surface);
        }
        outcome
    }

    /// Draw the scene into `surface`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.scene
            .render(surface, self.viewport(), &self.config.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::ClientRect;
    use alloc::vec::Vec;
    use crossline_collapse::CollapseError;
    use crossline_scene::{Color, DrawCommand, Operation, Phase, Recording, SceneError};
    use kurbo::Line;

    fn click(c: &mut Canvas, s: &mut Recording, x: f64, y: f64) -> Outcome {
        let p = Point::new(x, y);
        c.handle_pointer(PointerEvent::down(PointerButton::Primary, p), s)
            .unwrap();
        c.handle_pointer(PointerEvent::up(PointerButton::Primary, p), s)
            .unwrap()
    }

    fn move_to(c: &mut Canvas, s: &mut Recording, x: f64, y: f64) -> Outcome {
        c.handle_pointer(PointerEvent::moved(Point::new(x, y)), s)
            .unwrap()
    }

    fn draw(c: &mut Canvas, s: &mut Recording, from: (f64, f64), to: (f64, f64)) {
        click(c, s, from.0, from.1);
        move_to(c, s, to.0, to.1);
        click(c, s, to.0, to.1);
    }

    fn run_collapse(c: &mut Canvas, s: &mut Recording) -> usize {
        let mut token = c.collapse().unwrap().schedule.unwrap();
        let mut now = 0.0;
        for frame in 1..=10_000 {
            now += c.config().collapse.frame_duration;
            match c.on_frame(token, now, s) {
                FrameOutcome::Continue(next) => token = next,
                FrameOutcome::Completed => return frame,
                FrameOutcome::Stale => panic!("unexpected stale frame"),
            }
        }
        panic!("collapse did not finish");
    }

    #[test]
    fn release_toggles_arm_and_commit() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        assert_eq!(click(&mut c, &mut s, 0.0, 0.0), Outcome::Handled);
        assert!(c.scene().state().is_armed());
        move_to(&mut c, &mut s, 10.0, 0.0);
        assert_eq!(click(&mut c, &mut s, 10.0, 0.0), Outcome::Handled);
        assert!(!c.scene().state().is_armed());
        assert_eq!(
            c.scene().segments(),
            &[Line::new((0.0, 0.0), (10.0, 0.0))]
        );
    }

    #[test]
    fn press_alone_changes_nothing() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        let out = c
            .handle_pointer(
                PointerEvent::down(PointerButton::Primary, Point::new(1.0, 1.0)),
                &mut s,
            )
            .unwrap();
        assert_eq!(out, Outcome::Handled);
        assert!(!c.scene().state().is_armed());
        assert!(s.commands.is_empty());
    }

    #[test]
    fn crossing_draws_marker() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        draw(&mut c, &mut s, (0.0, 0.0), (10.0, 0.0));
        click(&mut c, &mut s, 5.0, -5.0);
        s.take();
        move_to(&mut c, &mut s, 5.0, 5.0);
        let circles: Vec<_> = s.circles().collect();
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].center, Point::new(5.0, 0.0));
        assert_eq!(circles[0].radius, 5.0);
        assert_eq!(c.scene().markers().len(), 1);
    }

    #[test]
    fn every_render_clears_the_viewport_first() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        move_to(&mut c, &mut s, 3.0, 3.0);
        assert_eq!(
            s.commands.first(),
            Some(&DrawCommand::Clear(Rect::new(0.0, 0.0, 800.0, 600.0)))
        );
    }

    #[test]
    fn secondary_release_discards_only_when_armed() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        let right = PointerEvent::up(PointerButton::Secondary, Point::new(4.0, 4.0));
        assert_eq!(c.handle_pointer(right, &mut s).unwrap(), Outcome::Ignored);

        click(&mut c, &mut s, 0.0, 0.0);
        move_to(&mut c, &mut s, 9.0, 9.0);
        assert_eq!(c.handle_pointer(right, &mut s).unwrap(), Outcome::Handled);
        assert!(!c.scene().state().is_armed());
        assert!(c.scene().is_empty());
    }

    #[test]
    fn context_menu_is_always_suppressed() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        let menu = PointerEvent::context_menu(Point::new(1.0, 1.0));
        assert_eq!(c.handle_pointer(menu, &mut s).unwrap(), Outcome::PreventDefault);
        draw(&mut c, &mut s, (0.0, 0.0), (10.0, 0.0));
        c.collapse().unwrap();
        assert_eq!(c.handle_pointer(menu, &mut s).unwrap(), Outcome::PreventDefault);
    }

    #[test]
    fn auxiliary_release_is_ignored() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        let mid = PointerEvent::up(PointerButton::Auxiliary, Point::new(1.0, 1.0));
        assert_eq!(c.handle_pointer(mid, &mut s).unwrap(), Outcome::Ignored);
        assert!(s.commands.is_empty());
    }

    #[test]
    fn positions_go_through_the_map() {
        let map = ClientRect::new(
            Rect::new(100.0, 100.0, 500.0, 400.0),
            Size::new(800.0, 600.0),
        );
        let mut c = Canvas::with_map(CanvasConfig::default(), map);
        let mut s = Recording::new();
        let up = |x, y| PointerEvent::up(PointerButton::Primary, Point::new(x, y));
        c.handle_pointer(up(100.0, 100.0), &mut s).unwrap();
        c.handle_pointer(PointerEvent::moved(Point::new(300.0, 250.0)), &mut s)
            .unwrap();
        c.handle_pointer(up(300.0, 250.0), &mut s).unwrap();
        assert_eq!(
            c.scene().segments(),
            &[Line::new((0.0, 0.0), (400.0, 300.0))]
        );
    }

    #[test]
    fn collapse_while_drawing_is_rejected() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        draw(&mut c, &mut s, (0.0, 0.0), (10.0, 0.0));
        click(&mut c, &mut s, 2.0, 2.0);
        assert_eq!(
            c.collapse(),
            Err(CanvasError::Collapse(CollapseError::Armed))
        );
        assert!(!c.is_collapsing());
    }

    #[test]
    fn collapse_of_empty_canvas_schedules_nothing() {
        let mut c: Canvas = Canvas::default();
        assert_eq!(c.collapse().unwrap(), CollapseCommand::default());
        assert!(!c.is_collapsing());
    }

    #[test]
    fn input_is_ignored_while_collapsing() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        draw(&mut c, &mut s, (0.0, 0.0), (10.0, 0.0));
        c.collapse().unwrap();
        s.take();
        assert_eq!(click(&mut c, &mut s, 3.0, 3.0), Outcome::Ignored);
        assert_eq!(move_to(&mut c, &mut s, 4.0, 4.0), Outcome::Ignored);
        assert!(s.commands.is_empty());
        assert!(!c.scene().state().is_armed());
    }

    #[test]
    fn completed_collapse_renders_empty_scene() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        draw(&mut c, &mut s, (0.0, 0.0), (10.0, 0.0));
        draw(&mut c, &mut s, (5.0, -5.0), (5.0, 5.0));
        s.take();
        run_collapse(&mut c, &mut s);
        assert!(c.scene().is_empty());
        assert!(c.scene().markers().is_empty());
        assert!(c.scene().pinned_markers().is_empty());
        assert!(!c.is_collapsing());
        assert!(s.lines_with(Color::WHITE).count() > 0);
        assert_eq!(
            s.commands.last(),
            Some(&DrawCommand::Clear(c.viewport())),
            "the final render clears and draws nothing else"
        );
        // Drawing works again afterwards.
        assert_eq!(click(&mut c, &mut s, 1.0, 1.0), Outcome::Handled);
    }

    #[test]
    fn retrigger_hands_back_the_frame_to_cancel() {
        let mut c: Canvas = Canvas::default();
        let mut s = Recording::new();
        draw(&mut c, &mut s, (0.0, 0.0), (10.0, 0.0));
        let first = c.collapse().unwrap();
        assert_eq!(first.cancel, None);
        let first_frame = first.schedule.unwrap();
        let second = c.collapse().unwrap();
        assert_eq!(second.cancel, Some(first_frame));
        assert_eq!(c.on_frame(first_frame, 16.0, &mut s), FrameOutcome::Stale);
        assert!(c.is_collapsing());
    }

    #[test]
    fn scene_errors_convert() {
        let e: CanvasError = SceneError::InvalidTransition {
            op: Operation::Commit,
            state: Phase::Idle,
        }
        .into();
        assert!(matches!(e, CanvasError::Scene(_)));
    }
}
