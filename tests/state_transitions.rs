//! Tests for app wiring and screen state transitions.

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use pretty_assertions::assert_eq;
use tip_jar::GameState;
use tip_jar::donation::jar::{JarCollider, TipJar};
use tip_jar::donation::overlay::DonationRoot;
use tip_jar::donation::{DonationBoxConfig, DonationOverlay, DonationPlugin};

fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(InputPlugin);
    app.add_plugins(tip_jar::plugin);
    app.add_plugins(DonationPlugin::new(vec![DonationBoxConfig {
        position: Vec2::new(260.0, -120.0),
        scale: Vec2::ONE,
        rotation: 0.0,
        address: "0xperformer".to_string(),
        default_amount: 10.0,
    }]));
    app
}

#[test]
fn game_initializes_in_loading_state() {
    let app = create_game_app();
    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::Loading);
}

#[test]
fn headless_loading_resolves_to_playing() {
    let mut app = create_game_app();
    app.update();
    app.update();

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::Playing);
}

#[test]
fn overlay_starts_closed() {
    let app = create_game_app();
    let state = app.world().resource::<State<DonationOverlay>>();
    assert_eq!(*state.get(), DonationOverlay::Closed);
}

#[test]
fn venue_spawns_configured_jars() {
    let mut app = create_game_app();
    app.update();
    app.update();
    app.update();

    let mut jars = app.world_mut().query_filtered::<(), With<TipJar>>();
    assert_eq!(jars.iter(app.world()).count(), 1);

    let mut colliders = app.world_mut().query_filtered::<(), With<JarCollider>>();
    assert_eq!(colliders.iter(app.world()).count(), 1);

    let mut overlays = app.world_mut().query_filtered::<(), With<DonationRoot>>();
    assert_eq!(overlays.iter(app.world()).count(), 1);
}
