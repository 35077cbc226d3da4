//! Screen plugins for each game state.

pub mod loading;
pub mod venue;

pub use loading::DonationAssets;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((loading::plugin, venue::plugin));
}
