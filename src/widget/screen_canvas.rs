//! ScreenCanvas widget: feedback markers over a screen image
//!
//! This widget handles:
//! - Rendering markers for the current screen's feedback points
//! - Rendering the pending marker while a comment is being written
//! - Clicks on the image and on markers (right click removes a marker)
//! - Pointer hover tracking
//!
//! It sits directly on top of the screen image and has the image's size, so
//! its layout bounds are the image bounds.

use cosmic::{
    Element,
    iced::{Color, mouse},
    iced_core::{
        Clipboard, Layout, Length, Point, Rectangle, Shell, Size, Widget, event, layout,
        widget::{Tree, tree},
    },
};

use crate::{
    annotations::tooltip::marker_under,
    config::MarkerColor,
    domain::{FeedbackPoint, ImageBounds, LocalPoint, PointId},
    widget::drawing::{draw_marker, draw_pending_marker},
};

/// Events emitted by the ScreenCanvas
#[derive(Clone, Debug)]
pub enum CanvasEvent {
    /// Click on the image away from any marker, in raw window coordinates
    Pressed { x: f32, y: f32, bounds: ImageBounds },
    /// Click on a marker
    MarkerPressed(PointId),
    /// Right click on a marker
    MarkerDismissed(PointId),
    /// Pointer moved over the image (image-local coordinates)
    PointerMoved(f32, f32),
    /// Pointer left the image
    PointerLeft,
}

/// What a left press at a canvas-local position lands on
#[derive(Clone, Copy, Debug, PartialEq)]
enum PressTarget {
    /// Covered by the open dialog; the dialog handles it
    Shielded,
    Marker(PointId),
    Image,
}

#[derive(Debug, Default)]
struct CanvasState {
    pointer_inside: bool,
}

pub struct ScreenCanvas<'a, Msg> {
    points: &'a [FeedbackPoint],
    hovered: Option<PointId>,
    pending: Option<LocalPoint>,
    shield: Option<ImageBounds>,
    color: MarkerColor,
    marker_radius: f32,
    width: f32,
    height: f32,
    on_event: Option<Box<dyn Fn(CanvasEvent) -> Msg + 'a>>,
}

impl<'a, Msg> ScreenCanvas<'a, Msg> {
    /// Create a canvas covering a `width` x `height` image
    pub fn new(points: &'a [FeedbackPoint], width: f32, height: f32) -> Self {
        Self {
            points,
            hovered: None,
            pending: None,
            shield: None,
            color: MarkerColor::default(),
            marker_radius: crate::session::state::DEFAULT_MARKER_RADIUS,
            width,
            height,
            on_event: None,
        }
    }

    pub fn hovered(mut self, hovered: Option<PointId>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Position of the comment being written, if any
    pub fn pending(mut self, pending: Option<LocalPoint>) -> Self {
        self.pending = pending;
        self
    }

    /// Canvas-local area covered by a popup; presses there are ignored
    pub fn shield(mut self, shield: Option<ImageBounds>) -> Self {
        self.shield = shield;
        self
    }

    pub fn color(mut self, color: MarkerColor) -> Self {
        self.color = color;
        self
    }

    pub fn marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Set event handler
    pub fn on_event(mut self, handler: impl Fn(CanvasEvent) -> Msg + 'a) -> Self {
        self.on_event = Some(Box::new(handler));
        self
    }

    fn press_target(&self, local: Point) -> PressTarget {
        if self.shield.is_some_and(|s| s.contains(local.x, local.y)) {
            return PressTarget::Shielded;
        }
        match self.marker_at(local) {
            Some(point) => PressTarget::Marker(point.id),
            None => PressTarget::Image,
        }
    }

    fn marker_at(&self, local: Point) -> Option<&FeedbackPoint> {
        marker_under(
            self.points,
            LocalPoint::new(local.x, local.y),
            self.marker_radius,
        )
    }
}

impl<'a, Msg: Clone + 'static> Widget<Msg, cosmic::Theme, cosmic::Renderer> for ScreenCanvas<'a, Msg> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(self.width), Length::Fixed(self.height))
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<CanvasState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(CanvasState::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![]
    }

    fn diff(&mut self, _tree: &mut Tree) {}

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &cosmic::Renderer,
        _limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(Size::new(self.width, self.height))
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut cosmic::Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced_core::renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let color: Color = self.color.into();

        for (index, point) in self.points.iter().enumerate() {
            let center = Point::new(bounds.x + point.x, bounds.y + point.y);
            draw_marker(
                renderer,
                center,
                self.marker_radius,
                color,
                &(index + 1).to_string(),
                self.hovered == Some(point.id),
            );
        }

        if let Some(pending) = self.pending {
            let center = Point::new(bounds.x + pending.x, bounds.y + pending.y);
            draw_pending_marker(renderer, center, self.marker_radius, color);
        }
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: cosmic::iced_core::Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &cosmic::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Msg>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let Some(on_event) = &self.on_event else {
            return event::Status::Ignored;
        };

        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<CanvasState>();

        match event {
            cosmic::iced_core::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(pos) = cursor.position_over(bounds) {
                    let local = Point::new(pos.x - bounds.x, pos.y - bounds.y);
                    let msg = match self.press_target(local) {
                        PressTarget::Shielded => return event::Status::Ignored,
                        PressTarget::Marker(id) => on_event(CanvasEvent::MarkerPressed(id)),
                        PressTarget::Image => on_event(CanvasEvent::Pressed {
                            x: pos.x,
                            y: pos.y,
                            bounds: ImageBounds::new(bounds.x, bounds.y, bounds.width, bounds.height),
                        }),
                    };
                    shell.publish(msg);
                    return event::Status::Captured;
                }
            }
            cosmic::iced_core::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)) => {
                if let Some(local) = cursor.position_in(bounds)
                    && let PressTarget::Marker(id) = self.press_target(local)
                {
                    shell.publish(on_event(CanvasEvent::MarkerDismissed(id)));
                    return event::Status::Captured;
                }
            }
            cosmic::iced_core::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(local) = cursor.position_in(bounds) {
                    state.pointer_inside = true;
                    shell.publish(on_event(CanvasEvent::PointerMoved(local.x, local.y)));
                } else if state.pointer_inside {
                    state.pointer_inside = false;
                    shell.publish(on_event(CanvasEvent::PointerLeft));
                }
            }
            cosmic::iced_core::Event::Mouse(mouse::Event::CursorLeft) => {
                if state.pointer_inside {
                    state.pointer_inside = false;
                    shell.publish(on_event(CanvasEvent::PointerLeft));
                }
            }
            _ => {}
        }

        event::Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &cosmic::Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();
        match cursor.position_in(bounds) {
            Some(local) if self.marker_at(local).is_some() => mouse::Interaction::Pointer,
            Some(_) => mouse::Interaction::Crosshair,
            None => mouse::Interaction::default(),
        }
    }
}

impl<'a, Msg: Clone + 'static> From<ScreenCanvas<'a, Msg>> for Element<'a, Msg> {
    fn from(canvas: ScreenCanvas<'a, Msg>) -> Self {
        Self::new(canvas)
    }
}
