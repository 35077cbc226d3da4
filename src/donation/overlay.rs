//! The donation overlay: panel, amount field, accept/cancel buttons.
//!
//! The tree is spawned once when the venue loads and toggled with
//! `Display` so its state survives open/close cycles. Geometry is
//! viewport-proportional, matching the overlay art's canvas layout.

use bevy::prelude::*;

use super::amount::AmountInput;
use super::jar::TipJar;
use super::{ActiveJar, DonationOverlay, amount, atlas, transfer};
use crate::screens::DonationAssets;
use crate::theme::{palette, widget};
use crate::wallet::Wallet;
use crate::{GameSet, GameState};

// === Layout ===

/// Panel footprint: width tracks height at the art's aspect, height is
/// 32% of the viewport, offset 30% from the top and centered.
const PANEL_WIDTH: Val = Val::Vh(100.0 * 2.1 / 2.6);
const PANEL_HEIGHT: Val = Val::Vh(32.0);
const PANEL_TOP: Val = Val::Percent(30.0);

/// Amount field box and its placement inside the panel.
const FIELD_WIDTH: Val = Val::Vh(10.0);
const FIELD_HEIGHT: Val = Val::Vh(6.0);
const FIELD_LEFT: Val = Val::Percent(39.0);
const FIELD_TOP: Val = Val::Percent(34.0);

/// Button boxes anchored along the bottom edge of the panel: accept on
/// the left, cancel mirrored on the right.
const BUTTON_WIDTH: Val = Val::Vh(36.0);
const BUTTON_HEIGHT: Val = Val::Vh(6.0);
const BUTTON_BOTTOM: Val = Val::Percent(22.0);
const BUTTON_INSET: Val = Val::Percent(4.0);

// === Markers ===

/// Root of the overlay tree; its `Display` is the open/closed toggle.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DonationRoot;

/// Text entity inside the amount field.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AmountDisplay;

/// The accept (tip) button.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AcceptButton;

/// The cancel button.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CancelButton;

/// Overlay chrome that swallows world clicks underneath it.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PointerBlocker;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<DonationRoot>();
    app.register_type::<AmountDisplay>();
    app.register_type::<AcceptButton>();
    app.register_type::<CancelButton>();
    app.register_type::<PointerBlocker>();

    app.add_systems(OnEnter(GameState::Playing), spawn_overlay);
    app.add_systems(OnEnter(DonationOverlay::Open), show_overlay);
    app.add_systems(
        OnExit(DonationOverlay::Open),
        (hide_overlay, clear_active_jar),
    );
    app.add_systems(
        Update,
        (
            close_on_escape
                .in_set(GameSet::Input)
                .run_if(in_state(DonationOverlay::Open)),
            (
                seed_amount_for_active_jar.run_if(
                    in_state(DonationOverlay::Open).and(resource_changed::<ActiveJar>),
                ),
                handle_accept.run_if(in_state(DonationOverlay::Open)),
                handle_cancel.run_if(in_state(DonationOverlay::Open)),
            )
                .chain()
                .in_set(GameSet::Logic),
            update_amount_text
                .in_set(GameSet::Ui)
                .run_if(in_state(DonationOverlay::Open)),
        ),
    );
}

/// Builds the hidden overlay tree. Runs once per venue load.
fn spawn_overlay(mut commands: Commands, assets: Res<DonationAssets>) {
    commands.spawn((
        Name::new("Donation Overlay"),
        DonationRoot,
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::FlexStart,
            display: Display::None,
            ..default()
        },
        GlobalZIndex(2),
        DespawnOnExit(GameState::Playing),
        children![(
            Name::new("Donation Panel"),
            ImageNode {
                image: assets.atlas.clone(),
                rect: Some(atlas::BACKGROUND.rect()),
                ..default()
            },
            Node {
                top: PANEL_TOP,
                width: PANEL_WIDTH,
                height: PANEL_HEIGHT,
                ..default()
            },
            Interaction::default(),
            PointerBlocker,
            children![
                amount_field(),
                accept_button(&assets),
                cancel_button(&assets)
            ],
        )],
    ));
}

fn amount_field() -> impl Bundle {
    (
        Name::new("Amount Field"),
        Node {
            position_type: PositionType::Absolute,
            left: FIELD_LEFT,
            top: FIELD_TOP,
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            overflow: Overflow::clip(),
            ..default()
        },
        BackgroundColor(palette::AMOUNT_FIELD_BACKGROUND),
        children![(AmountDisplay, widget::amount_text(""))],
    )
}

fn accept_button(assets: &DonationAssets) -> impl Bundle {
    (
        widget::sprite_button(
            "Accept Button",
            ImageNode {
                image: assets.atlas.clone(),
                rect: Some(atlas::ACCEPT_BUTTON.rect()),
                ..default()
            },
        ),
        AcceptButton,
        PointerBlocker,
        Node {
            position_type: PositionType::Absolute,
            left: BUTTON_INSET,
            bottom: BUTTON_BOTTOM,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            ..default()
        },
    )
}

fn cancel_button(assets: &DonationAssets) -> impl Bundle {
    (
        widget::sprite_button(
            "Cancel Button",
            ImageNode {
                image: assets.atlas.clone(),
                rect: Some(atlas::CANCEL_BUTTON.rect()),
                ..default()
            },
        ),
        CancelButton,
        PointerBlocker,
        Node {
            position_type: PositionType::Absolute,
            right: BUTTON_INSET,
            bottom: BUTTON_BOTTOM,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            ..default()
        },
    )
}

fn show_overlay(mut root: Single<&mut Node, With<DonationRoot>>) {
    root.display = Display::Flex;
}

fn hide_overlay(mut root: Single<&mut Node, With<DonationRoot>>) {
    root.display = Display::None;
}

fn clear_active_jar(mut active: ResMut<ActiveJar>) {
    active.0 = None;
}

/// Reseeds the amount field whenever a jar is stamped while the overlay
/// is open: value and placeholder both become the jar's pending amount.
fn seed_amount_for_active_jar(
    active: Res<ActiveJar>,
    jars: Query<&TipJar>,
    mut input: ResMut<AmountInput>,
) {
    let Some(entity) = active.0 else {
        return;
    };
    let Ok(jar) = jars.get(entity) else {
        return;
    };

    let seeded = amount::format_amount(jar.pending);
    debug!("seeding amount field with {seeded}");
    input.placeholder.clone_from(&seeded);
    input.value = seeded;
}

/// Accept: commit the field, dispatch the pending amount, close. The
/// dispatch is fire-and-forget; the overlay never waits on it.
fn handle_accept(
    mut commands: Commands,
    accept: Query<&Interaction, (Changed<Interaction>, With<AcceptButton>)>,
    wallet: Res<Wallet>,
    input: Res<AmountInput>,
    active: Res<ActiveJar>,
    mut jars: Query<&mut TipJar>,
    mut next_overlay: ResMut<NextState<DonationOverlay>>,
) {
    if !accept
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed)
    {
        return;
    }

    if let Some(entity) = active.0 {
        if let Ok(mut jar) = jars.get_mut(entity) {
            amount::commit(&input, &mut jar);
            transfer::queue_transfer(&mut commands, &wallet, jar.address.clone(), jar.pending);
        }
    }
    next_overlay.set(DonationOverlay::Closed);
}

/// Cancel: close without touching the jar or the wallet.
fn handle_cancel(
    cancel: Query<&Interaction, (Changed<Interaction>, With<CancelButton>)>,
    mut next_overlay: ResMut<NextState<DonationOverlay>>,
) {
    if cancel
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed)
    {
        info!("donation cancelled");
        next_overlay.set(DonationOverlay::Closed);
    }
}

/// Escape takes the cancel path.
fn close_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_overlay: ResMut<NextState<DonationOverlay>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("donation cancelled");
        next_overlay.set(DonationOverlay::Closed);
    }
}

/// Mirrors the field into the display text; the placeholder shows
/// through while the value is empty.
fn update_amount_text(
    input: Res<AmountInput>,
    mut display: Single<&mut Text, With<AmountDisplay>>,
) {
    if !input.is_changed() {
        return;
    }

    let shown = if input.value.is_empty() {
        &input.placeholder
    } else {
        &input.value
    };
    display.0.clone_from(shown);
}
