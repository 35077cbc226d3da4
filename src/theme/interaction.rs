//! Button hover/press visual feedback.

use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use bevy::ui::Pressed;

/// Defines tints for none/hovered/pressed button states.
/// Add alongside `Button` and `ImageNode` on clickable sprite buttons.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
#[require(Hovered)]
pub struct InteractionTint {
    pub none: Color,
    pub hovered: Color,
    pub pressed: Color,
}

fn apply_interaction_tint(
    mut tint_query: Query<
        (Has<Pressed>, &Hovered, &InteractionTint, &mut ImageNode),
        Changed<Interaction>,
    >,
) {
    for (pressed, Hovered(hovered), tint, mut image) in &mut tint_query {
        image.color = match (pressed, hovered) {
            (true, _) => tint.pressed,
            (false, true) => tint.hovered,
            (false, false) => tint.none,
        };
    }
}

pub fn plugin(app: &mut App) {
    app.register_type::<InteractionTint>();
    app.add_systems(Update, apply_interaction_tint);
}
