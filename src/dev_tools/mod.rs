//! Development tools — only included with the `dev` feature.
//!
//! Debug keybindings go here; the world inspector is added by the
//! binary so the library never depends on a window.

use bevy::prelude::*;

use crate::donation::jar::TipJar;
use crate::donation::{ActiveJar, DonationOverlay};
use crate::{GameSet, GameState};

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        debug_open_first_jar
            .in_set(GameSet::Input)
            .run_if(in_state(GameState::Playing)),
    );
}

/// `T` opens the overlay for the first jar without needing a precise
/// click on its collider.
fn debug_open_first_jar(
    keyboard: Res<ButtonInput<KeyCode>>,
    jars: Query<Entity, With<TipJar>>,
    mut active: ResMut<ActiveJar>,
    mut next_overlay: ResMut<NextState<DonationOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyT) {
        return;
    }

    let Some(jar) = jars.iter().next() else {
        return;
    };

    info!("debug: opening donation overlay for jar {jar}");
    active.0 = Some(jar);
    next_overlay.set(DonationOverlay::Open);
}
