//! Review viewer layout
//!
//! Layers, bottom to top: bezel, screen image, marker canvas, tooltip,
//! dialog. The bezel sits below the screen so it never receives clicks meant
//! for the image.

use cosmic::Element;
use cosmic::iced::{ContentFit, Length, Padding};
use cosmic::iced_widget::{Stack, column, row};
use cosmic::widget::{button, container, icon, image, text};

use crate::config::ReviewConfig;
use crate::fl;
use crate::session::messages::{FeedbackMsg, Msg, PointerMsg};
use crate::session::state::ReviewOverlay;
use crate::widget::feedback_dialog::{
    TOOLTIP_OFFSET, TOOLTIP_SIZE, build_dialog, build_tooltip, dialog_origin, dialog_shield,
};
use crate::widget::screen_canvas::{CanvasEvent, ScreenCanvas};

fn canvas_msg(event: CanvasEvent) -> Msg {
    match event {
        CanvasEvent::Pressed { x, y, bounds } => {
            Msg::Feedback(FeedbackMsg::CanvasPressed { x, y, bounds })
        }
        CanvasEvent::MarkerPressed(id) => Msg::Feedback(FeedbackMsg::MarkerPressed(id)),
        CanvasEvent::MarkerDismissed(id) => Msg::Feedback(FeedbackMsg::DismissMarker(id)),
        CanvasEvent::PointerMoved(x, y) => Msg::Pointer(PointerMsg::Moved(x, y)),
        CanvasEvent::PointerLeft => Msg::Pointer(PointerMsg::Left),
    }
}

/// Place `content` at a frame position inside a full-frame layer
fn positioned<'a>(content: Element<'a, Msg>, (x, y): (f32, f32)) -> Element<'a, Msg> {
    container(content)
        .padding(Padding {
            top: y,
            right: 0.0,
            bottom: 0.0,
            left: x,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build the framed screen with markers and popups
pub fn build_frame<'a>(
    overlay: &'a ReviewOverlay,
    config: &'a ReviewConfig,
    bezel: Option<&'a image::Handle>,
) -> Element<'a, Msg> {
    let layout = config.frame_layout();
    let (screen_x, screen_y) = layout.screen_offset();
    let (screen_w, screen_h) = layout.screen_size();
    let screen = overlay.current_screen();

    let screen_image = image::Image::new(screen.image.handle.clone())
        .content_fit(ContentFit::Fill)
        .width(Length::Fixed(screen_w))
        .height(Length::Fixed(screen_h));

    let pending = match overlay.dialog() {
        crate::annotations::dialog::DialogState::Creating { at, .. } => Some(*at),
        _ => None,
    };

    let shield = overlay
        .dialog_anchor()
        .map(|anchor| dialog_shield(&layout, anchor));

    let canvas = ScreenCanvas::new(overlay.current_points(), screen_w, screen_h)
        .hovered(overlay.hovered())
        .pending(pending)
        .shield(shield)
        .color(config.marker_color)
        .marker_radius(overlay.marker_radius())
        .on_event(canvas_msg);

    let screen_stack: Stack<'a, Msg, cosmic::Theme, cosmic::Renderer> =
        Stack::new().push(screen_image).push(canvas);
    let screen_layer = positioned(screen_stack.into(), (screen_x, screen_y));

    let mut layers: Stack<'a, Msg, cosmic::Theme, cosmic::Renderer> = Stack::new();
    if let Some(handle) = bezel {
        layers = layers.push(
            image::Image::new(handle.clone())
                .content_fit(ContentFit::Fill)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }
    layers = layers.push(screen_layer);

    // Tooltip is hidden while the dialog is open
    if let (Some(point), None) = (overlay.tooltip(), overlay.dialog_anchor()) {
        let origin = layout.place_popup(point.position(), TOOLTIP_OFFSET, TOOLTIP_SIZE);
        layers = layers.push(positioned(build_tooltip(point), origin));
    }

    if let (Some(dialog), Some(anchor)) = (build_dialog(overlay.dialog()), overlay.dialog_anchor()) {
        layers = layers.push(positioned(dialog, dialog_origin(&layout, anchor)));
    }

    layers
        .width(Length::Fixed(config.frame_width))
        .height(Length::Fixed(config.frame_height))
        .into()
}

/// Build the whole review view: title, frame, hint and navigation
pub fn build_view<'a>(
    overlay: &'a ReviewOverlay,
    config: &'a ReviewConfig,
    bezel: Option<&'a image::Handle>,
    product_name: Option<&'a str>,
) -> Element<'a, Msg> {
    let title: Element<'a, Msg> = match product_name {
        Some(product) => text::title3(fl!("review-title", product = product)).into(),
        None => text::title3(fl!("app-title")).into(),
    };

    let hint = row![
        icon::Icon::from(icon::from_name("dialog-information-symbolic").size(16)),
        text::caption(fl!("add-feedback-hint")),
    ]
    .spacing(8)
    .align_y(cosmic::iced_core::Alignment::Center);

    let counter = text::body(fl!(
        "screen-counter",
        current = overlay.current_index() + 1,
        total = overlay.screen_count()
    ));
    let comments = text::caption(fl!("comment-count", count = overlay.current_points().len()));

    let nav = row![
        button::standard(fl!("previous"))
            .leading_icon(icon::from_name("go-previous-symbolic").handle())
            .on_press(Msg::previous()),
        column![counter, comments]
            .align_x(cosmic::iced_core::Alignment::Center)
            .spacing(2),
        button::standard(fl!("next"))
            .trailing_icon(icon::from_name("go-next-symbolic").handle())
            .on_press(Msg::next()),
    ]
    .spacing(16)
    .align_y(cosmic::iced_core::Alignment::Center);

    let actions = row![
        button::destructive(fl!("clear-screen"))
            .on_press_maybe((!overlay.current_points().is_empty()).then(Msg::clear_screen)),
        button::suggested(fl!("finish-review")).on_press(Msg::finish()),
    ]
    .spacing(8);

    let content = column![
        title,
        build_frame(overlay, config, bezel),
        hint,
        nav,
        actions
    ]
    .spacing(16)
    .align_x(cosmic::iced_core::Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(24)
        .into()
}
