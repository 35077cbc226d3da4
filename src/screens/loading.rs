//! Loading screen: queue the image loads, flip to `Playing` when ready.

use bevy::prelude::*;

use crate::GameState;
use crate::theme::widget;

/// Handles for the two images the venue needs.
#[derive(Resource, Debug, Clone, Default)]
pub struct DonationAssets {
    /// 1024x512 sheet carrying the overlay panel and both button faces.
    pub atlas: Handle<Image>,
    /// Jar sprite drawn in the venue.
    pub jar: Handle<Image>,
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::Loading),
        (queue_asset_loads, spawn_loading_screen),
    );
    app.add_systems(
        Update,
        finish_when_loaded.run_if(in_state(GameState::Loading)),
    );
}

fn spawn_loading_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Loading Screen"),
        DespawnOnExit(GameState::Loading),
        children![widget::prompt_text("Loading...")],
    ));
}

/// Starts the image loads. Headless apps carry no `AssetServer`; they
/// get default handles and move on immediately.
fn queue_asset_loads(mut commands: Commands, asset_server: Option<Res<AssetServer>>) {
    let assets = match asset_server {
        Some(server) => DonationAssets {
            atlas: server.load("ui/donations_atlas.png"),
            jar: server.load("sprites/tip_jar.png"),
        },
        None => DonationAssets::default(),
    };
    commands.insert_resource(assets);
}

fn finish_when_loaded(
    assets: Option<Res<DonationAssets>>,
    asset_server: Option<Res<AssetServer>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(assets) = assets else {
        return;
    };

    let ready = match asset_server {
        Some(server) => {
            server.is_loaded_with_dependencies(&assets.atlas)
                && server.is_loaded_with_dependencies(&assets.jar)
        }
        None => true,
    };

    if ready {
        info!("venue assets ready");
        next_state.set(GameState::Playing);
    }
}
