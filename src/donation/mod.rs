//! Donation domain: clickable tip jars, the donation overlay, amount
//! entry, and fire-and-forget transfer dispatch.
//!
//! One overlay serves every jar in the scene. Clicking a jar's collider
//! stamps it into [`ActiveJar`] and opens [`DonationOverlay::Open`];
//! accepting parses the entered amount, hands the transfer to
//! [`crate::wallet::Wallet`] on a background task, and closes without
//! waiting for the outcome. The task's result is logged when it resolves
//! and never reopens the overlay.

pub mod amount;
pub mod atlas;
pub mod jar;
pub mod overlay;
pub mod transfer;

use bevy::prelude::*;

// === Constants ===

/// Prompt shown while the cursor rests on a jar's collider.
pub const HOVER_PROMPT: &str = "Tip Performer";

/// Jar sprite footprint in world units, before per-box scale.
pub const JAR_SPRITE_SIZE: Vec2 = Vec2::new(64.0, 64.0);

/// Clickable collider box, slightly tighter than the sprite so clicks
/// land on the jar art rather than its margins.
pub const JAR_COLLIDER_SIZE: Vec2 = Vec2::new(48.0, 48.0);

// === Scene Configuration ===

/// Where one jar sits and where its donations go.
#[derive(Debug, Clone, Reflect)]
pub struct DonationBoxConfig {
    /// World position of the jar and its collider.
    pub position: Vec2,
    /// Per-axis scale applied to the sprite and the collider.
    pub scale: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Recipient wallet address.
    pub address: String,
    /// Amount seeded into the overlay until the visitor submits another.
    pub default_amount: f64,
}

/// All donation boxes for the current scene. Injected through
/// [`DonationPlugin`]; empty when no scene configuration was provided.
#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct DonationConfig {
    pub boxes: Vec<DonationBoxConfig>,
}

/// The jar the overlay is currently serving. `None` while closed.
#[derive(Resource, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Resource)]
pub struct ActiveJar(pub Option<Entity>);

/// Donation overlay states. Orthogonal to `GameState` — the overlay
/// sits on top of the venue while `GameState::Playing` is active.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DonationOverlay {
    /// Overlay hidden; jars accept clicks.
    #[default]
    Closed,
    /// Overlay visible for the jar in [`ActiveJar`].
    Open,
}

/// Hands the scene's donation boxes to the app. Constructed explicitly
/// by the binary (or a test) so nothing in the crate reads global state.
#[derive(Debug)]
pub struct DonationPlugin {
    boxes: Vec<DonationBoxConfig>,
}

impl DonationPlugin {
    #[must_use]
    pub fn new(boxes: Vec<DonationBoxConfig>) -> Self {
        Self { boxes }
    }
}

impl Plugin for DonationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DonationConfig {
            boxes: self.boxes.clone(),
        });
    }
}

pub(super) fn plugin(app: &mut App) {
    app.init_state::<DonationOverlay>();
    app.init_resource::<DonationConfig>();
    app.init_resource::<ActiveJar>();
    app.register_type::<DonationConfig>();
    app.register_type::<ActiveJar>();

    app.add_plugins((
        jar::plugin,
        overlay::plugin,
        amount::plugin,
        transfer::plugin,
    ));
}
