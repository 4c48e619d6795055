use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct InventoryBarRoot;

#[derive(Component)]
pub struct InventorySlot;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_inventory_bar(mut commands: Commands, layout: Res<CanvasLayout>) {
    commands.spawn((
        InventoryBarRoot,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(INVENTORY_BAR_LEFT),
            top: Val::Px(layout.inventory_bar_top),
            width: Val::Px(INVENTORY_BAR_WIDTH),
            height: Val::Px(INVENTORY_BAR_HEIGHT),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE: slots are rebuilt whenever the inventory changes
// ═══════════════════════════════════════════════════════════════════════

pub fn rebuild_inventory_slots(
    mut commands: Commands,
    inventory: Res<Inventory>,
    layout: Res<CanvasLayout>,
    sprites: Res<SpriteAssets>,
    roots: Query<Entity, With<InventoryBarRoot>>,
    mut built: Local<bool>,
) {
    if *built && !inventory.is_changed() {
        return;
    }
    let Ok(root) = roots.get_single() else {
        return;
    };
    *built = true;

    commands.entity(root).despawn_descendants();
    commands.entity(root).with_children(|bar| {
        for (slot, item) in inventory.bar_items().into_iter().enumerate() {
            let hit_box = layout.slot_bounds(slot);
            let node = Node {
                position_type: PositionType::Absolute,
                left: Val::Px(hit_box.x - INVENTORY_BAR_LEFT),
                top: Val::Px(hit_box.y - layout.inventory_bar_top),
                width: Val::Px(hit_box.width),
                height: Val::Px(hit_box.height),
                ..default()
            };
            let key = SpriteKey::for_item(item);
            let mut icon = match sprites.image(key) {
                Some(image) => bar.spawn((InventorySlot, node, ImageNode::new(image))),
                None => bar.spawn((
                    InventorySlot,
                    node,
                    BackgroundColor(key.fallback_color()),
                )),
            };

            if let ItemKind::Seed(kind) = item {
                let count = inventory.seed_count(kind);
                icon.with_children(|badge| {
                    badge.spawn((
                        Text::new(count.to_string()),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        Node {
                            position_type: PositionType::Absolute,
                            right: Val::Px(1.0),
                            bottom: Val::Px(0.0),
                            ..default()
                        },
                    ));
                });
            }
        }
    });
}
