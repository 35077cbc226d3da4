//! Shared test helpers. Only compiled for tests.

use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::donation::{DonationBoxConfig, DonationConfig, DonationOverlay};
use crate::screens::DonationAssets;
use crate::{GameSet, GameState};

/// Baseline headless app: schedules, both states, system set ordering,
/// physics, the dry-run wallet, input resources, and default asset
/// handles. No windowing or rendering; tests add the plugins under test
/// and drive input by hand.
///
/// `InputPlugin` is deliberately absent so `just_pressed` survives
/// across updates; tests press, update, then release.
pub fn create_base_test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app.init_state::<DonationOverlay>();
    app.configure_sets(
        Update,
        (GameSet::Input, GameSet::Logic, GameSet::Ui).chain(),
    );

    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<ButtonInput<MouseButton>>();
    app.add_message::<KeyboardInput>();

    app.insert_resource(DonationAssets::default());
    app.add_plugins((crate::third_party::plugin, crate::wallet::plugin));
    app
}

/// Flips to `Playing` and settles the transition.
pub fn transition_to_playing(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();
    app.update();
}

/// Asserts the number of entities matching filter `F`.
pub fn assert_entity_count<F: bevy::ecs::query::QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<(), F>();
    let count = query.iter(app.world()).count();
    assert_eq!(count, expected, "expected {expected} entities, found {count}");
}

/// A `DonationConfig` with `count` spaced-out boxes, default amount 10.
#[must_use]
pub fn sample_config(count: usize) -> DonationConfig {
    DonationConfig {
        boxes: (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let x = 200.0 * i as f32;
                DonationBoxConfig {
                    position: Vec2::new(x, -120.0),
                    scale: Vec2::ONE,
                    rotation: 0.0,
                    address: format!("0xjar{i}"),
                    default_amount: 10.0,
                }
            })
            .collect(),
    }
}
