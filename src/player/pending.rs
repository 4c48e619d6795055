//! Deferred interactions: the player walks first, the action fires on arrival.

use bevy::prelude::*;
use crate::popup::menus::{open_shed_menu, open_table_menu};
use crate::shared::*;
use super::pickup::{equip_tool, pick_up_dropped};

/// Fire the pending action once the player's box overlaps its target.
/// Targets that no longer exist drop the pending action silently.
#[allow(clippy::too_many_arguments)]
pub fn resolve_pending_action(
    mut pending: ResMut<PendingAction>,
    player: Res<PlayerState>,
    shed: Res<Shed>,
    mut inventory: ResMut<Inventory>,
    mut dropped: ResMut<DroppedItems>,
    mut pickups: ResMut<WorldPickups>,
    mut table: ResMut<SeedTable>,
    mut popup: ResMut<PopupState>,
    mut engagement: ResMut<Engagement>,
) {
    let Some(kind) = pending.kind else {
        return;
    };
    let body = player.bounds();

    match kind {
        PendingKind::DroppedItem(id) => {
            let Some(item) = dropped.get(id) else {
                debug!("[Pending] dropped item {:?} is gone", id);
                pending.clear();
                return;
            };
            if body.overlaps(&item.bounds) {
                pick_up_dropped(&mut inventory, &mut dropped, player.position, id);
                pending.clear();
            }
        }
        PendingKind::WorldTool(tool) => {
            let Some(pickup) = pickups.get_mut(tool).filter(|pickup| !pickup.collected) else {
                pending.clear();
                return;
            };
            if body.overlaps(&pickup.bounds) {
                pickup.collected = true;
                equip_tool(&mut inventory, &mut dropped, player.position, tool);
                info!("[Pending] collected the {}", tool.label());
                pending.clear();
            }
        }
        PendingKind::Table => {
            if body.overlaps(&table.bounds) && !popup.is_active() {
                open_table_menu(&mut popup, &mut table);
                engagement.engage(Location::Table);
                pending.clear();
            }
        }
        PendingKind::Shed => {
            if body.overlaps(&shed.bounds) && !popup.is_active() {
                open_shed_menu(&mut popup);
                engagement.engage(Location::Shed);
                pending.clear();
            }
        }
    }
}
