//! Tip Jar entry point.

use bevy::prelude::*;
use tip_jar::donation::{DonationBoxConfig, DonationPlugin};

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Tip Jar".to_string(),
                    resolution: (1280, 720).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    );

    app.add_plugins((
        tip_jar::plugin,
        // Scene content is plain data handed to the plugin; swap the
        // address for the performer's real wallet before deploying.
        DonationPlugin::new(vec![DonationBoxConfig {
            position: Vec2::new(260.0, -120.0),
            scale: Vec2::splat(1.0),
            rotation: 0.0,
            address: "0x000000000000000000000000000000000000dEaD".to_string(),
            default_amount: 10.0,
        }]),
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(bevy_inspector_egui::quick::WorldInspectorPlugin::new());

    app.run();
}
