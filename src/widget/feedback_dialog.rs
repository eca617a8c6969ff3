//! Comment dialog and hover tooltip popups

use std::sync::LazyLock;

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::{Background, Border};
use cosmic::iced_widget::{column, row};
use cosmic::widget::{button, container, text, text_input};

use crate::annotations::dialog::DialogState;
use crate::domain::{FeedbackPoint, FrameLayout, ImageBounds, LocalPoint};
use crate::fl;
use crate::session::messages::Msg;

/// Width of the comment dialog in logical pixels
pub const DIALOG_WIDTH: f32 = 200.0;
/// Approximate height of the comment dialog, used to keep it in frame
pub const DIALOG_HEIGHT: f32 = 110.0;
/// Dialog offset to the right of its anchor
pub const DIALOG_OFFSET: (f32, f32) = (40.0, 0.0);

/// Tooltip offset from the hovered marker
pub const TOOLTIP_OFFSET: (f32, f32) = (10.0, -30.0);
/// Approximate tooltip size, used to keep it in frame
pub const TOOLTIP_SIZE: (f32, f32) = (180.0, 36.0);

/// Id of the comment text field, focused whenever the dialog opens
pub static DRAFT_INPUT_ID: LazyLock<cosmic::widget::Id> =
    LazyLock::new(|| cosmic::widget::Id::new("feedback-draft"));

/// Frame position of the dialog anchored at a screen-local point
pub fn dialog_origin(layout: &FrameLayout, anchor: LocalPoint) -> (f32, f32) {
    layout.place_popup(anchor, DIALOG_OFFSET, (DIALOG_WIDTH, DIALOG_HEIGHT))
}

/// Area the dialog covers, relative to the screen image
///
/// The canvas below ignores presses here.
pub fn dialog_shield(layout: &FrameLayout, anchor: LocalPoint) -> ImageBounds {
    let (x, y) = dialog_origin(layout, anchor);
    let (screen_x, screen_y) = layout.screen_offset();
    ImageBounds::new(x - screen_x, y - screen_y, DIALOG_WIDTH, DIALOG_HEIGHT)
}

fn popup_style(theme: &cosmic::Theme) -> cosmic::iced::widget::container::Style {
    let cosmic_theme = theme.cosmic();
    cosmic::iced::widget::container::Style {
        background: Some(Background::Color(
            cosmic_theme.background.component.base.into(),
        )),
        text_color: Some(cosmic_theme.background.component.on.into()),
        border: Border {
            radius: cosmic_theme.corner_radii.radius_s.into(),
            width: 1.0,
            color: cosmic_theme.background.component.divider.into(),
        },
        ..Default::default()
    }
}

/// Build the comment dialog for the current dialog state
///
/// Returns `None` while the dialog is closed.
pub fn build_dialog(state: &DialogState) -> Option<Element<'_, Msg>> {
    let (draft, creating) = match state {
        DialogState::Closed => return None,
        DialogState::Creating { draft, .. } => (draft.as_str(), true),
        DialogState::Editing { draft, .. } => (draft.as_str(), false),
    };

    let placeholder = if creating {
        fl!("feedback-placeholder")
    } else {
        fl!("feedback-edit-placeholder")
    };

    let mut input = text_input(placeholder, draft)
        .id(DRAFT_INPUT_ID.clone())
        .on_input(Msg::draft_changed)
        .width(Length::Fill);
    if creating {
        input = input.on_submit(|_| Msg::submit());
    }

    let cancel = button::text(fl!("cancel")).on_press(Msg::cancel());
    // Editing only offers removal; existing comments are never rewritten
    let confirm = if creating {
        button::suggested(fl!("submit")).on_press(Msg::submit())
    } else {
        button::destructive(fl!("remove")).on_press(Msg::remove())
    };

    let actions = row![cosmic::widget::horizontal_space(), cancel, confirm]
        .spacing(8)
        .align_y(cosmic::iced_core::Alignment::Center);

    let content = column![input, actions]
        .spacing(8)
        .padding(8)
        .width(Length::Fixed(DIALOG_WIDTH));

    // Opaque so presses on padding or gaps never reach the canvas below
    Some(cosmic::iced_widget::opaque(
        container(content).class(cosmic::theme::Container::Custom(Box::new(popup_style))),
    ))
}

/// Build the hover bubble showing a marker's comment
pub fn build_tooltip(point: &FeedbackPoint) -> Element<'_, Msg> {
    container(text::body(point.text.as_str()))
        .padding([4, 8])
        .max_width(TOOLTIP_SIZE.0)
        .class(cosmic::theme::Container::Custom(Box::new(popup_style)))
        .into()
}
