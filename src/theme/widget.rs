//! Reusable UI widget constructors.

use bevy::prelude::*;

use super::interaction::InteractionTint;
use super::palette;

/// Full-screen flex container that centers its children.
/// Use as root for simple screens like the loading text.
pub fn ui_root(name: impl Into<std::borrow::Cow<'static, str>>) -> impl Bundle {
    (
        Name::new(name),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(20.0),
            ..default()
        },
    )
}

/// Hover prompt text (prompt size, white).
pub fn prompt_text(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(palette::FONT_SIZE_PROMPT),
        TextColor(palette::PROMPT_TEXT),
    )
}

/// Donation amount text (amount size, black on a light field).
pub fn amount_text(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(palette::FONT_SIZE_AMOUNT),
        TextColor(palette::AMOUNT_TEXT),
    )
}

/// Clickable button drawn from a texture atlas region.
/// Handlers query a marker component for `Interaction::Pressed`;
/// callers provide the marker and the node geometry alongside.
pub fn sprite_button(name: impl Into<std::borrow::Cow<'static, str>>, image: ImageNode) -> impl Bundle {
    (
        Name::new(name),
        Button,
        image,
        InteractionTint {
            none: palette::SPRITE_NONE,
            hovered: palette::SPRITE_HOVERED,
            pressed: palette::SPRITE_PRESSED,
        },
    )
}
