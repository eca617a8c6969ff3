//! Shared drawing utilities for widget rendering
//!
//! Marker primitives used by the screen canvas.

use cosmic::iced_core::{
    Background, Border, Color, Point, Rectangle, Renderer as _, Shadow, Size, renderer::Quad,
};

/// Square bounds of a circle
fn circle_bounds(center: Point, radius: f32) -> Rectangle {
    Rectangle::new(
        Point::new(center.x - radius, center.y - radius),
        Size::new(radius * 2.0, radius * 2.0),
    )
}

/// Draw a feedback marker: a filled disc with a white rim and its number
///
/// Hovered markers are drawn slightly larger with a drop shadow.
pub fn draw_marker(
    renderer: &mut cosmic::Renderer,
    center: Point,
    radius: f32,
    color: Color,
    label: &str,
    hovered: bool,
) {
    use cosmic::iced_core::text::{Renderer as TextRenderer, Text};

    let radius = if hovered { radius * 1.15 } else { radius };
    let bounds = circle_bounds(center, radius);

    renderer.fill_quad(
        Quad {
            bounds,
            border: Border {
                radius: radius.into(),
                width: 2.0,
                color: Color::WHITE,
            },
            shadow: if hovered {
                Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                    offset: cosmic::iced::Vector::new(0.0, 2.0),
                    blur_radius: 6.0,
                }
            } else {
                Shadow::default()
            },
        },
        Background::Color(color),
    );

    renderer.fill_text(
        Text {
            content: label.to_string(),
            bounds: bounds.size(),
            size: cosmic::iced_core::Pixels(radius),
            line_height: cosmic::iced_core::text::LineHeight::Relative(1.0),
            font: cosmic::iced_core::Font {
                weight: cosmic::iced_core::font::Weight::Bold,
                ..Default::default()
            },
            horizontal_alignment: cosmic::iced::alignment::Horizontal::Center,
            vertical_alignment: cosmic::iced::alignment::Vertical::Center,
            shaping: cosmic::iced_core::text::Shaping::Advanced,
            wrapping: cosmic::iced_core::text::Wrapping::None,
        },
        center,
        Color::WHITE,
        bounds,
    );
}

/// Draw the outline of a comment that is still being written
pub fn draw_pending_marker(renderer: &mut cosmic::Renderer, center: Point, radius: f32, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds: circle_bounds(center, radius),
            border: Border {
                radius: radius.into(),
                width: 2.0,
                color,
            },
            shadow: Shadow::default(),
        },
        Background::Color(Color { a: 0.25, ..color }),
    );
}
