use bevy::prelude::*;
use bevy::ui::UiSystem;
use bevy::window::PrimaryWindow;
use crate::popup::menus::open_shovel_prompt;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CanvasPointerEvent>()
            .init_resource::<PointerTracker>();
        app.add_systems(
            PreUpdate,
            (track_pointer_over_ui, sample_pointer)
                .chain()
                .after(UiSystem::Focus),
        );
        app.add_systems(
            Update,
            route_pointer_events
                .in_set(GardenSet::Input)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Hands out press ids and remembers which press is still held.
#[derive(Resource, Debug, Default)]
pub struct PointerTracker {
    next: u32,
    held: Option<PressId>,
}

impl PointerTracker {
    fn begin(&mut self) -> PressId {
        let id = PressId(self.next);
        self.next = self.next.wrapping_add(1);
        self.held = Some(id);
        id
    }
}

/// Popup buttons report hover/press through `Interaction` once UI focus has run.
fn track_pointer_over_ui(
    buttons: Query<&Interaction, With<Button>>,
    mut over_ui: ResMut<PointerOverUi>,
) {
    let hovering = buttons
        .iter()
        .any(|interaction| *interaction != Interaction::None);
    if over_ui.0 != hovering {
        over_ui.0 = hovering;
    }
}

/// The single point where the mouse becomes canvas pointer events. A press
/// that starts on a popup button produces neither a down nor a click.
fn sample_pointer(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    over_ui: Res<PointerOverUi>,
    mut tracker: ResMut<PointerTracker>,
    mut events: EventWriter<CanvasPointerEvent>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let cursor = window.cursor_position();

    if mouse.just_pressed(MouseButton::Left) {
        if over_ui.0 {
            tracker.held = None;
        } else if let Some(position) = cursor {
            let press = tracker.begin();
            events.send(CanvasPointerEvent {
                press,
                phase: PointerPhase::Down,
                position,
            });
        }
    }

    if mouse.just_released(MouseButton::Left) {
        if let (Some(press), Some(position)) = (tracker.held.take(), cursor) {
            events.send(CanvasPointerEvent {
                press,
                phase: PointerPhase::Click,
                position,
            });
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// HIT TESTING
// ═══════════════════════════════════════════════════════════════════════

/// What a canvas click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRoute {
    WorldTool(ToolKind),
    Shed,
    DroppedItem(DroppedItemId),
    Table,
}

/// First interaction region under `point`, with the bounds the player walks
/// to. Order: watering can, shovel, shed, dropped items, table.
pub fn classify_click(
    point: Vec2,
    pickups: &WorldPickups,
    shed: &Shed,
    dropped: &DroppedItems,
    table: &SeedTable,
) -> Option<(ClickRoute, Bounds)> {
    for tool in ToolKind::ALL {
        if let Some(pickup) = pickups.get(tool) {
            if !pickup.collected && pickup.bounds.contains(point) {
                return Some((ClickRoute::WorldTool(tool), pickup.bounds));
            }
        }
    }
    if shed.bounds.contains(point) {
        return Some((ClickRoute::Shed, shed.bounds));
    }
    if let Some(item) = dropped.hit(point) {
        return Some((ClickRoute::DroppedItem(item.id), item.bounds));
    }
    if table.bounds.contains(point) {
        return Some((ClickRoute::Table, table.bounds));
    }
    None
}

/// The inventory-bar icon under `point`, if any.
pub fn inventory_slot_at(layout: &CanvasLayout, inventory: &Inventory, point: Vec2) -> Option<ItemKind> {
    inventory
        .bar_items()
        .into_iter()
        .enumerate()
        .find(|(slot, _)| layout.slot_bounds(*slot).contains(point))
        .map(|(_, item)| item)
}

/// Take one unit of `item` out of the inventory and put it on the ground at
/// `position`.
pub fn drop_from_inventory(
    inventory: &mut Inventory,
    dropped: &mut DroppedItems,
    position: Vec2,
    item: ItemKind,
) -> Option<DroppedItemId> {
    let removed = match item {
        ItemKind::Tool(tool) if inventory.has_tool(tool) => {
            inventory.tool = None;
            true
        }
        ItemKind::Tool(_) => false,
        ItemKind::Seed(kind) => inventory.remove_seed(kind),
    };
    removed.then(|| dropped.drop_at(item, position))
}

// ═══════════════════════════════════════════════════════════════════════
// ROUTER
// ═══════════════════════════════════════════════════════════════════════

#[allow(clippy::too_many_arguments)]
pub fn route_pointer_events(
    mut events: EventReader<CanvasPointerEvent>,
    layout: Res<CanvasLayout>,
    pickups: Res<WorldPickups>,
    shed: Res<Shed>,
    table: Res<SeedTable>,
    mut popup: ResMut<PopupState>,
    mut player: ResMut<PlayerState>,
    mut inventory: ResMut<Inventory>,
    mut dropped: ResMut<DroppedItems>,
    mut pending: ResMut<PendingAction>,
    mut engagement: ResMut<Engagement>,
    mut suppression: ResMut<ClickSuppression>,
) {
    for event in events.read() {
        match event.phase {
            PointerPhase::Down => {
                if !layout.in_inventory_bar(event.position) {
                    continue;
                }
                let Some(item) = inventory_slot_at(&layout, &inventory, event.position) else {
                    continue;
                };
                let origin = player.position;
                if let Some(id) = drop_from_inventory(&mut inventory, &mut dropped, origin, item) {
                    info!("[Input] dropped {} ({:?})", item.label(), id);
                    suppression.press = Some(event.press);
                }
            }
            PointerPhase::Click => {
                if suppression.press == Some(event.press) {
                    suppression.press = None;
                    continue;
                }
                if layout.in_inventory_bar(event.position) {
                    continue;
                }

                let hit = if popup.is_active() {
                    None
                } else {
                    classify_click(event.position, &pickups, &shed, &dropped, &table)
                };

                match hit {
                    Some((ClickRoute::WorldTool(ToolKind::Shovel), _)) => {
                        engagement.engage(Location::Shovel);
                        open_shovel_prompt(&mut popup);
                    }
                    Some((route, bounds)) => {
                        let kind = match route {
                            ClickRoute::WorldTool(tool) => {
                                engagement.engage(tool.location());
                                PendingKind::WorldTool(tool)
                            }
                            ClickRoute::Shed => PendingKind::Shed,
                            ClickRoute::DroppedItem(id) => PendingKind::DroppedItem(id),
                            ClickRoute::Table => PendingKind::Table,
                        };
                        debug!("[Input] walking to {:?}", kind);
                        pending.set(kind);
                        player.walk_to(bounds.position());
                    }
                    None => player.walk_to(event.position),
                }
            }
        }
    }
}
