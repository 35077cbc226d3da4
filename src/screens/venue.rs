//! Venue dressing: backdrop and stage sprites behind the jars.

use bevy::prelude::*;

use crate::theme::palette;
use crate::{GameState, Z_BACKDROP, Z_STAGE};

/// Stage platform size in world units.
const STAGE_SIZE: Vec2 = Vec2::new(560.0, 200.0);
/// Stage center offset from the origin.
const STAGE_OFFSET: Vec2 = Vec2::new(0.0, 40.0);
/// Backdrop extends well past any reasonable window.
const BACKDROP_SIZE: Vec2 = Vec2::new(4096.0, 2304.0);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_venue);
}

fn spawn_venue(mut commands: Commands) {
    commands.spawn((
        Name::new("Backdrop"),
        Sprite::from_color(palette::BACKGROUND, BACKDROP_SIZE),
        Transform::from_translation(Vec2::ZERO.extend(Z_BACKDROP)),
        DespawnOnExit(GameState::Playing),
    ));

    commands.spawn((
        Name::new("Stage"),
        Sprite::from_color(palette::STAGE, STAGE_SIZE),
        Transform::from_translation(STAGE_OFFSET.extend(Z_STAGE)),
        DespawnOnExit(GameState::Playing),
    ));
}
