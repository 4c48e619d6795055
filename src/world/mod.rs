//! World domain plugin for Gatito Garden.
//!
//! Responsible for:
//! - Spawning the shed, table, world tools and player sprites
//! - Mirroring the world model onto sprite transforms every tick
//! - Spawning and despawning sprites for dropped items
//! - Swapping table and player art, and tinting engaged locations
//!
//! No game logic lives here; every system only reads the world model.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_garden)
            .add_systems(
                Update,
                (
                    sync_player_sprite,
                    sync_pickup_sprites,
                    sync_table_art,
                    sync_dropped_sprites,
                    tint_engaged_locations,
                )
                    .chain()
                    .in_set(GardenSet::Render)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

const Z_BUILDING: f32 = 1.0;
const Z_PICKUP: f32 = 2.0;
const Z_DROPPED: f32 = 3.0;
const Z_PLAYER: f32 = 5.0;

/// Translation of a canvas box's centre in world space. The camera sits at
/// the world origin, which is the canvas centre, and world y points up.
pub fn canvas_to_world(layout: &CanvasLayout, bounds: &Bounds, z: f32) -> Vec3 {
    Vec3::new(
        bounds.x + bounds.width / 2.0 - layout.width / 2.0,
        layout.height / 2.0 - bounds.y - bounds.height / 2.0,
        z,
    )
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWNING
// ═══════════════════════════════════════════════════════════════════════

#[allow(clippy::too_many_arguments)]
fn spawn_garden(
    mut commands: Commands,
    sprites: Res<SpriteAssets>,
    layout: Res<CanvasLayout>,
    player: Res<PlayerState>,
    inventory: Res<Inventory>,
    pickups: Res<WorldPickups>,
    table: Res<SeedTable>,
    shed: Res<Shed>,
) {
    commands.spawn((
        sprites.sprite(SpriteKey::Shed, shed.bounds.size()),
        Transform::from_translation(canvas_to_world(&layout, &shed.bounds, Z_BUILDING)),
        ShedSprite,
    ));

    commands.spawn((
        sprites.sprite(SpriteKey::for_table(table.art), table.bounds.size()),
        Transform::from_translation(canvas_to_world(&layout, &table.bounds, Z_BUILDING)),
        TableSprite,
    ));

    for pickup in &pickups.items {
        let visibility = if pickup.collected {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        commands.spawn((
            sprites.sprite(SpriteKey::for_item(ItemKind::Tool(pickup.tool)), pickup.bounds.size()),
            Transform::from_translation(canvas_to_world(&layout, &pickup.bounds, Z_PICKUP)),
            visibility,
            PickupSprite(pickup.tool),
        ));
    }

    commands.spawn((
        sprites.sprite(SpriteKey::for_look(inventory.look()), player.size),
        Transform::from_translation(canvas_to_world(&layout, &player.bounds(), Z_PLAYER)),
        Player,
    ));

    info!("[World] garden spawned");
}

// ═══════════════════════════════════════════════════════════════════════
// SYNC
// ═══════════════════════════════════════════════════════════════════════

fn sync_player_sprite(
    player: Res<PlayerState>,
    inventory: Res<Inventory>,
    layout: Res<CanvasLayout>,
    sprites: Res<SpriteAssets>,
    mut query: Query<(&mut Transform, &mut Sprite), With<Player>>,
    mut shown: Local<Option<PlayerLook>>,
) {
    let Ok((mut transform, mut sprite)) = query.get_single_mut() else {
        return;
    };
    if player.is_changed() {
        transform.translation = canvas_to_world(&layout, &player.bounds(), Z_PLAYER);
    }

    let look = inventory.look();
    if *shown != Some(look) {
        *sprite = sprites.sprite(SpriteKey::for_look(look), player.size);
        *shown = Some(look);
    }
}

fn sync_pickup_sprites(
    pickups: Res<WorldPickups>,
    mut query: Query<(&PickupSprite, &mut Visibility)>,
) {
    if !pickups.is_changed() {
        return;
    }
    for (marker, mut visibility) in &mut query {
        if !pickups.is_available(marker.0) {
            *visibility = Visibility::Hidden;
        }
    }
}

fn sync_table_art(
    table: Res<SeedTable>,
    sprites: Res<SpriteAssets>,
    mut query: Query<&mut Sprite, With<TableSprite>>,
    mut shown: Local<Option<TableArt>>,
) {
    if *shown == Some(table.art) {
        return;
    }
    for mut sprite in &mut query {
        *sprite = sprites.sprite(SpriteKey::for_table(table.art), table.bounds.size());
    }
    debug!("[World] table art is now {:?}", table.art);
    *shown = Some(table.art);
}

/// Keep exactly one sprite per item on the ground.
fn sync_dropped_sprites(
    mut commands: Commands,
    dropped: Res<DroppedItems>,
    layout: Res<CanvasLayout>,
    sprites: Res<SpriteAssets>,
    query: Query<(Entity, &DroppedSprite)>,
) {
    if !dropped.is_changed() {
        return;
    }

    let mut present = HashSet::new();
    for (entity, marker) in &query {
        if dropped.get(marker.0).is_some() {
            present.insert(marker.0);
        } else {
            commands.entity(entity).despawn_recursive();
        }
    }

    for item in dropped.items.iter().filter(|item| !present.contains(&item.id)) {
        commands.spawn((
            sprites.sprite(SpriteKey::for_item(item.kind), item.bounds.size()),
            Transform::from_translation(canvas_to_world(&layout, &item.bounds, Z_DROPPED)),
            DroppedSprite(item.id),
        ));
    }
}

/// Engaged locations are drawn slightly faded until the player walks off.
fn tint_engaged_locations(
    engagement: Res<Engagement>,
    table: Res<SeedTable>,
    sprites: Res<SpriteAssets>,
    mut query: Query<(
        &mut Sprite,
        Option<&TableSprite>,
        Option<&ShedSprite>,
        Option<&PickupSprite>,
    )>,
) {
    if !engagement.is_changed() && !table.is_changed() {
        return;
    }
    for (mut sprite, table_marker, shed_marker, pickup_marker) in &mut query {
        let (location, key) = if table_marker.is_some() {
            (Location::Table, SpriteKey::for_table(table.art))
        } else if shed_marker.is_some() {
            (Location::Shed, SpriteKey::Shed)
        } else if let Some(pickup) = pickup_marker {
            (
                pickup.0.location(),
                SpriteKey::for_item(ItemKind::Tool(pickup.0)),
            )
        } else {
            continue;
        };

        let base = if sprites.image(key).is_some() {
            Color::WHITE
        } else {
            key.fallback_color()
        };
        sprite.color = if engagement.is_engaged(location) {
            base.with_alpha(0.7)
        } else {
            base
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_origin_maps_to_top_left_of_world() {
        let layout = CanvasLayout::default();
        let corner = Bounds::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(canvas_to_world(&layout, &corner, 0.0), Vec3::new(-400.0, 300.0, 0.0));
    }

    #[test]
    fn box_centre_is_used() {
        let layout = CanvasLayout::default();
        let shed = Bounds::new(20.0, 15.0, 150.0, 80.0);
        assert_eq!(
            canvas_to_world(&layout, &shed, 1.0),
            Vec3::new(20.0 + 75.0 - 400.0, 300.0 - 15.0 - 40.0, 1.0)
        );
    }
}
