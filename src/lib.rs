//! Tip Jar: a small venue scene with a clickable donation box.
//!
//! The scene places one or more tip jars in front of a stage. Clicking a
//! jar's collider opens a donation overlay (amount field plus accept/cancel
//! buttons); accepting hands the transfer to the wallet seam in
//! [`wallet`] and closes the overlay without waiting for the outcome.

pub mod donation;
pub mod screens;
pub mod theme;
pub mod wallet;

mod third_party;

#[cfg(feature = "dev")]
pub mod dev_tools;
#[cfg(test)]
pub mod testing;

use bevy::prelude::*;

/// Primary screen states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Initial state: queue asset loads and wait for them to resolve.
    #[default]
    Loading,
    /// The venue scene is live and the jars are clickable.
    Playing,
}

/// `Update` system sets, run in order each frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Cursor tracking, clicks, keyboard entry.
    Input,
    /// Domain logic (transfer bookkeeping).
    Logic,
    /// Text/visibility refresh from state.
    Ui,
}

// === World Z Layers ===

pub const Z_BACKDROP: f32 = 0.0;
pub const Z_STAGE: f32 = 1.0;
pub const Z_JAR: f32 = 2.0;

/// Composition root: states, system sets, the shared camera, and every
/// sub-plugin except the scene configuration itself. Scene content (jar
/// positions, recipient addresses) is injected separately through
/// [`donation::DonationPlugin`] so no part of the crate reaches for a
/// process-wide singleton.
pub fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.configure_sets(
        Update,
        (GameSet::Input, GameSet::Logic, GameSet::Ui).chain(),
    );

    app.register_type::<SceneCamera>();
    app.add_systems(Startup, spawn_camera);

    app.add_plugins((
        third_party::plugin,
        theme::plugin,
        wallet::plugin,
        screens::plugin,
        donation::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}

/// Marker for the global 2D camera. Persists across all states
/// (do NOT add `DespawnOnExit`).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct SceneCamera;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Scene Camera"), SceneCamera, Camera2d));
}
