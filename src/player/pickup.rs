//! Putting things into the player's hands.

use bevy::prelude::*;
use crate::shared::*;

/// Equip `tool`. A different tool already in hand is dropped where the
/// player stands.
pub fn equip_tool(
    inventory: &mut Inventory,
    dropped: &mut DroppedItems,
    player_position: Vec2,
    tool: ToolKind,
) -> Option<DroppedItemId> {
    let swapped = match inventory.tool {
        Some(held) if held != tool => {
            let id = dropped.drop_at(ItemKind::Tool(held), player_position);
            debug!("[Player] swapped out {} ({:?})", held.label(), id);
            Some(id)
        }
        _ => None,
    };
    inventory.tool = Some(tool);
    swapped
}

/// Collect a dropped item. The item is consumed even when a seed stack is
/// already full.
pub fn pick_up_dropped(
    inventory: &mut Inventory,
    dropped: &mut DroppedItems,
    player_position: Vec2,
    id: DroppedItemId,
) -> bool {
    let Some(item) = dropped.remove(id) else {
        return false;
    };
    match item.kind {
        ItemKind::Tool(tool) => {
            equip_tool(inventory, dropped, player_position, tool);
        }
        ItemKind::Seed(kind) => {
            if !inventory.add_seed(kind) {
                debug!("[Player] {} seeds already full", kind.label());
            }
        }
    }
    info!("[Player] picked up {}", item.kind.label());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_drops_old_tool_at_player() {
        let mut inventory = Inventory {
            tool: Some(ToolKind::WateringCan),
            ..default()
        };
        let mut dropped = DroppedItems::default();
        let position = Vec2::new(120.0, 220.0);

        let id = equip_tool(&mut inventory, &mut dropped, position, ToolKind::Shovel)
            .expect("old tool dropped");

        assert_eq!(inventory.tool, Some(ToolKind::Shovel));
        let item = dropped.get(id).expect("dropped item exists");
        assert_eq!(item.kind, ItemKind::Tool(ToolKind::WateringCan));
        assert_eq!(item.bounds.position(), position);
        assert_eq!(dropped.items.len(), 1);
    }

    #[test]
    fn equipping_the_same_tool_drops_nothing() {
        let mut inventory = Inventory {
            tool: Some(ToolKind::Shovel),
            ..default()
        };
        let mut dropped = DroppedItems::default();
        assert!(equip_tool(&mut inventory, &mut dropped, Vec2::ZERO, ToolKind::Shovel).is_none());
        assert!(dropped.items.is_empty());
    }

    #[test]
    fn full_seed_stack_still_consumes_item() {
        let mut inventory = Inventory::default();
        for _ in 0..MAX_SEEDS_PER_KIND {
            inventory.add_seed(SeedKind::Carrot);
        }
        let mut dropped = DroppedItems::default();
        let id = dropped.drop_at(ItemKind::Seed(SeedKind::Carrot), Vec2::ZERO);

        assert!(pick_up_dropped(&mut inventory, &mut dropped, Vec2::ZERO, id));
        assert_eq!(inventory.seed_count(SeedKind::Carrot), MAX_SEEDS_PER_KIND);
        assert!(dropped.items.is_empty());
    }

    #[test]
    fn picking_up_a_dropped_tool_swaps() {
        let mut inventory = Inventory {
            tool: Some(ToolKind::Shovel),
            ..default()
        };
        let mut dropped = DroppedItems::default();
        let can = dropped.drop_at(ItemKind::Tool(ToolKind::WateringCan), Vec2::new(40.0, 40.0));

        assert!(pick_up_dropped(&mut inventory, &mut dropped, Vec2::new(10.0, 10.0), can));
        assert_eq!(inventory.tool, Some(ToolKind::WateringCan));
        assert_eq!(dropped.items.len(), 1);
        assert_eq!(dropped.items[0].kind, ItemKind::Tool(ToolKind::Shovel));
        assert_eq!(dropped.items[0].bounds.position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn stale_id_is_a_no_op() {
        let mut inventory = Inventory::default();
        let mut dropped = DroppedItems::default();
        assert!(!pick_up_dropped(&mut inventory, &mut dropped, Vec2::ZERO, DroppedItemId(7)));
        assert_eq!(inventory.tool, None);
    }
}
