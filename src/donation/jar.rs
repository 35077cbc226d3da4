//! Tip jar scene entities: sprite, click collider, hover prompt, click-to-open.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::overlay::PointerBlocker;
use super::{
    ActiveJar, DonationConfig, DonationOverlay, HOVER_PROMPT, JAR_COLLIDER_SIZE, JAR_SPRITE_SIZE,
};
use crate::screens::DonationAssets;
use crate::theme::{palette, widget};
use crate::{GameSet, GameState, SceneCamera, Z_JAR};

/// Cursor offset for the hover prompt, in logical pixels.
const PROMPT_OFFSET: Vec2 = Vec2::new(18.0, 18.0);

/// A donation box in the venue.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct TipJar {
    /// Recipient wallet address.
    pub address: String,
    /// Amount seeded into the overlay before any submit.
    pub default_amount: f64,
    /// Last submitted amount; dispatched on accept.
    pub pending: f64,
}

/// Click target for a jar. A separate entity so the clickable box can be
/// sized independently of the sprite.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct JarCollider {
    pub jar: Entity,
}

/// The jar under the cursor this tick, if any.
#[derive(Resource, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Resource)]
pub struct HoveredJar(pub Option<Entity>);

/// Tooltip that follows the cursor while it rests on a jar.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HoverPrompt;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<HoveredJar>();
    app.register_type::<TipJar>();
    app.register_type::<JarCollider>();
    app.register_type::<HoveredJar>();
    app.register_type::<HoverPrompt>();

    app.add_systems(
        OnEnter(GameState::Playing),
        (spawn_tip_jars, spawn_hover_prompt),
    );
    app.add_systems(
        Update,
        (
            (track_jar_hover, open_on_click)
                .chain()
                .in_set(GameSet::Input),
            update_hover_prompt.in_set(GameSet::Ui),
        )
            .run_if(in_state(GameState::Playing)),
    );
}

/// Spawns one sprite and one collider entity per configured box.
/// Both persist for the scene's lifetime.
fn spawn_tip_jars(
    mut commands: Commands,
    config: Res<DonationConfig>,
    assets: Res<DonationAssets>,
) {
    for box_config in &config.boxes {
        let transform = Transform {
            translation: box_config.position.extend(Z_JAR),
            rotation: Quat::from_rotation_z(box_config.rotation),
            ..default()
        };

        let jar = commands
            .spawn((
                Name::new("Tip Jar"),
                TipJar {
                    address: box_config.address.clone(),
                    default_amount: box_config.default_amount,
                    pending: box_config.default_amount,
                },
                Sprite {
                    image: assets.jar.clone(),
                    custom_size: Some(JAR_SPRITE_SIZE * box_config.scale),
                    ..default()
                },
                transform,
                DespawnOnExit(GameState::Playing),
            ))
            .id();

        commands.spawn((
            Name::new("Tip Jar Collider"),
            JarCollider { jar },
            RigidBody::Static,
            Collider::rectangle(
                JAR_COLLIDER_SIZE.x * box_config.scale.x,
                JAR_COLLIDER_SIZE.y * box_config.scale.y,
            ),
            transform,
            DespawnOnExit(GameState::Playing),
        ));
    }

    info!("spawned {} tip jar(s)", config.boxes.len());
}

fn spawn_hover_prompt(mut commands: Commands) {
    commands.spawn((
        Name::new("Hover Prompt"),
        HoverPrompt,
        Node {
            position_type: PositionType::Absolute,
            display: Display::None,
            padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
            ..default()
        },
        BackgroundColor(palette::PROMPT_BACKGROUND),
        GlobalZIndex(3),
        DespawnOnExit(GameState::Playing),
        children![widget::prompt_text(HOVER_PROMPT)],
    ));
}

/// Resolves the cursor to a world point, point-tests the jar colliders,
/// and records the hit in [`HoveredJar`].
fn track_jar_hover(
    window: Single<&Window>,
    camera: Single<(&Camera, &GlobalTransform), With<SceneCamera>>,
    spatial: SpatialQuery,
    colliders: Query<&JarCollider>,
    mut hovered: ResMut<HoveredJar>,
) {
    let (camera, camera_global) = *camera;

    let jar = window
        .cursor_position()
        .and_then(|screen_pos| camera.viewport_to_world_2d(camera_global, screen_pos).ok())
        .and_then(|world_pos| {
            spatial
                .point_intersections(world_pos, &SpatialQueryFilter::default())
                .into_iter()
                .find_map(|entity| colliders.get(entity).ok().map(|collider| collider.jar))
        });

    let previous = hovered.0;
    hovered.0 = jar;

    if previous != jar {
        if let Some(jar) = jar {
            debug!("cursor over jar {jar}");
        }
    }
}

/// Opens the overlay for the hovered jar on left click. No debouncing:
/// clicking while already open restamps the jar, which reseeds the
/// amount field.
fn open_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    hovered: Res<HoveredJar>,
    blockers: Query<&Interaction, With<PointerBlocker>>,
    mut active: ResMut<ActiveJar>,
    mut next_overlay: ResMut<NextState<DonationOverlay>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Some(jar) = hovered.0 else {
        return;
    };

    // The overlay panel swallows clicks that land on it.
    if blockers
        .iter()
        .any(|interaction| *interaction != Interaction::None)
    {
        return;
    }

    info!("opening donation overlay for jar {jar}");
    active.0 = Some(jar);
    next_overlay.set(DonationOverlay::Open);
}

/// Shows the prompt beside the cursor while a jar is hovered.
fn update_hover_prompt(
    hovered: Res<HoveredJar>,
    window: Single<&Window>,
    mut prompt: Single<&mut Node, With<HoverPrompt>>,
) {
    match (hovered.0, window.cursor_position()) {
        (Some(_), Some(cursor)) => {
            prompt.display = Display::Flex;
            prompt.left = Val::Px(cursor.x + PROMPT_OFFSET.x);
            prompt.top = Val::Px(cursor.y + PROMPT_OFFSET.y);
        }
        _ => prompt.display = Display::None,
    }
}
