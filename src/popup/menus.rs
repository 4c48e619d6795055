//! Menu contents and transitions for every popup in the game.

use bevy::prelude::*;
use crate::shared::*;
use super::{close, present, refresh};

pub const SHOVEL_MESSAGE: &str = "Oh look a shovel! Pick up?";
pub const TABLE_MESSAGE: &str = "There are seeds on the table. Which would you like?";
pub const TABLE_EMPTY_MESSAGE: &str = "No more seeds on the table!";
pub const SHED_MESSAGE: &str = "Shed: store or retrieve tools?";
pub const NOTHING_TO_STORE_MESSAGE: &str = "Nothing to store";
pub const SHED_EMPTY_MESSAGE: &str = "Nothing is in the shed";
pub const RETRIEVE_MESSAGE: &str = "Which tool to retrieve?";

/// The world-model slices a popup choice may touch.
pub struct MenuContext<'a> {
    pub player: &'a mut PlayerState,
    pub inventory: &'a mut Inventory,
    pub table: &'a mut SeedTable,
    pub shed: &'a mut Shed,
    pub pending: &'a mut PendingAction,
    pub pickups: &'a WorldPickups,
}

// ═══════════════════════════════════════════════════════════════════════
// OPENERS
// ═══════════════════════════════════════════════════════════════════════

pub fn open_shovel_prompt(popup: &mut PopupState) -> bool {
    present(
        popup,
        PopupMenu::ShovelPickup,
        SHOVEL_MESSAGE,
        vec![PopupOption::new(ChoiceId::Yes, "Yes")],
        false,
    )
}

fn table_seed_options(table: &SeedTable) -> Vec<PopupOption> {
    table
        .available()
        .into_iter()
        .map(|kind| PopupOption::new(ChoiceId::Seed(kind), kind.label()))
        .collect()
}

/// Seed picker, or the "no more seeds" notice when the table is bare.
pub fn open_table_menu(popup: &mut PopupState, table: &mut SeedTable) -> bool {
    let options = table_seed_options(table);
    if options.is_empty() {
        table.art = TableArt::Empty;
        return present(popup, PopupMenu::TableEmpty, TABLE_EMPTY_MESSAGE, Vec::new(), false);
    }
    present(popup, PopupMenu::TableSeeds, TABLE_MESSAGE, options, true)
}

pub fn open_shed_menu(popup: &mut PopupState) -> bool {
    present(
        popup,
        PopupMenu::ShedRoot,
        SHED_MESSAGE,
        vec![
            PopupOption::new(ChoiceId::Store, "Store"),
            PopupOption::new(ChoiceId::Retrieve, "Retrieve"),
        ],
        false,
    )
}

fn open_back_notice(popup: &mut PopupState, menu: PopupMenu, message: &str) {
    present(
        popup,
        menu,
        message,
        vec![PopupOption::new(ChoiceId::Back, "Back")],
        false,
    );
}

// ═══════════════════════════════════════════════════════════════════════
// TRANSITIONS
// ═══════════════════════════════════════════════════════════════════════

/// Apply one popup response. Options that are no longer on offer are
/// ignored. Leaving any shed menu without finishing it clears the pending
/// action.
pub fn apply_response(popup: &mut PopupState, response: PopupResponse, ctx: &mut MenuContext) {
    let Some(active) = popup.active.clone() else {
        return;
    };

    let choice = match response {
        PopupResponse::Cancel => {
            close(popup);
            if active.menu.is_shed() {
                ctx.pending.clear();
            }
            return;
        }
        PopupResponse::Choose(choice) => choice,
    };

    if !active.options.iter().any(|option| option.id == choice) {
        debug!("[Popup] {:?} is not offered by {:?}", choice, active.menu);
        return;
    }

    if !active.keep_open {
        close(popup);
    }

    match (active.menu, choice) {
        (PopupMenu::ShovelPickup, ChoiceId::Yes) => {
            if let Some(shovel) = ctx.pickups.get(ToolKind::Shovel).filter(|p| !p.collected) {
                ctx.pending.set(PendingKind::WorldTool(ToolKind::Shovel));
                ctx.player.walk_to(shovel.bounds.position());
            }
        }
        (PopupMenu::TableSeeds, ChoiceId::Seed(kind)) => {
            pick_seed(popup, kind, ctx);
        }
        (PopupMenu::ShedRoot, ChoiceId::Store) => match ctx.inventory.tool {
            None => open_back_notice(popup, PopupMenu::ShedNothingToStore, NOTHING_TO_STORE_MESSAGE),
            Some(tool) => {
                present(
                    popup,
                    PopupMenu::ShedStoreConfirm(tool),
                    format!("Store {}?", tool.label()),
                    vec![PopupOption::new(ChoiceId::Yes, "Yes")],
                    false,
                );
            }
        },
        (PopupMenu::ShedRoot, ChoiceId::Retrieve) => {
            let stored = ctx.shed.stored_tools();
            if stored.is_empty() {
                open_back_notice(popup, PopupMenu::ShedEmpty, SHED_EMPTY_MESSAGE);
            } else {
                let options = stored
                    .into_iter()
                    .map(|tool| PopupOption::new(ChoiceId::Tool(tool), tool.label()))
                    .collect();
                present(popup, PopupMenu::ShedRetrieve, RETRIEVE_MESSAGE, options, false);
            }
        }
        (PopupMenu::ShedNothingToStore | PopupMenu::ShedEmpty, ChoiceId::Back) => {
            open_shed_menu(popup);
        }
        (PopupMenu::ShedStoreConfirm(tool), ChoiceId::Yes) => {
            // The tool may have been dropped while the confirmation was up.
            if !ctx.inventory.has_tool(tool) {
                open_back_notice(popup, PopupMenu::ShedNothingToStore, NOTHING_TO_STORE_MESSAGE);
                return;
            }
            ctx.inventory.tool = None;
            ctx.shed.store(tool);
            info!("[Shed] stored {}", tool.label());
            present(
                popup,
                PopupMenu::ShedStored(tool),
                format!("{} stored in shed!", tool.label()),
                Vec::new(),
                false,
            );
        }
        (PopupMenu::ShedRetrieve, ChoiceId::Tool(tool)) => {
            retrieve_from_shed(tool, ctx);
            ctx.pending.clear();
        }
        (menu, choice) => {
            warn!("[Popup] {:?} has no transition for {:?}", menu, choice);
        }
    }
}

/// Move one seed from the table into the inventory, then refresh the
/// still-open picker.
fn pick_seed(popup: &mut PopupState, kind: SeedKind, ctx: &mut MenuContext) {
    if ctx.inventory.seed_count(kind) < MAX_SEEDS_PER_KIND && ctx.table.take(kind) {
        ctx.inventory.add_seed(kind);
        info!(
            "[Table] took {} seed ({} left on table)",
            kind.label(),
            ctx.table.remaining(kind)
        );
    }

    let options = table_seed_options(ctx.table);
    if options.is_empty() {
        refresh(popup, PopupMenu::TableEmpty, TABLE_EMPTY_MESSAGE, Vec::new());
    } else {
        refresh(popup, PopupMenu::TableSeeds, TABLE_MESSAGE, options);
    }
}

/// Shed exchange: the held tool (if any) goes straight into the shed.
fn retrieve_from_shed(tool: ToolKind, ctx: &mut MenuContext) {
    if !ctx.shed.retrieve(tool) {
        return;
    }
    if let Some(held) = ctx.inventory.tool.filter(|&held| held != tool) {
        ctx.shed.store(held);
    }
    ctx.inventory.tool = Some(tool);
    info!("[Shed] retrieved {}", tool.label());
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEM
// ═══════════════════════════════════════════════════════════════════════

pub fn handle_popup_responses(
    mut events: EventReader<PopupResponseEvent>,
    mut popup: ResMut<PopupState>,
    mut player: ResMut<PlayerState>,
    mut inventory: ResMut<Inventory>,
    mut table: ResMut<SeedTable>,
    mut shed: ResMut<Shed>,
    mut pending: ResMut<PendingAction>,
    pickups: Res<WorldPickups>,
) {
    for event in events.read() {
        let mut ctx = MenuContext {
            player: &mut player,
            inventory: &mut inventory,
            table: &mut table,
            shed: &mut shed,
            pending: &mut pending,
            pickups: &pickups,
        };
        apply_response(&mut popup, event.response, &mut ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        popup: PopupState,
        player: PlayerState,
        inventory: Inventory,
        table: SeedTable,
        shed: Shed,
        pending: PendingAction,
        pickups: WorldPickups,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                popup: PopupState::default(),
                player: PlayerState::new(Vec2::new(100.0, 200.0), Vec2::splat(60.0), 3.0),
                inventory: Inventory::default(),
                table: SeedTable::new(Bounds::new(420.0, 180.0, 60.0, 60.0), [3, 3, 3]),
                shed: Shed::new(Bounds::new(20.0, 15.0, 150.0, 80.0)),
                pending: PendingAction::default(),
                pickups: WorldPickups {
                    items: vec![WorldPickup {
                        tool: ToolKind::Shovel,
                        bounds: Bounds::new(50.0, 200.0, 30.0, 30.0),
                        collected: false,
                    }],
                },
            }
        }

        fn respond(&mut self, response: PopupResponse) {
            let mut ctx = MenuContext {
                player: &mut self.player,
                inventory: &mut self.inventory,
                table: &mut self.table,
                shed: &mut self.shed,
                pending: &mut self.pending,
                pickups: &self.pickups,
            };
            apply_response(&mut self.popup, response, &mut ctx);
        }

        fn choose(&mut self, choice: ChoiceId) {
            self.respond(PopupResponse::Choose(choice));
        }

        fn option_ids(&self) -> Vec<ChoiceId> {
            self.popup
                .active
                .as_ref()
                .map(|p| p.options.iter().map(|o| o.id).collect())
                .unwrap_or_default()
        }
    }

    #[test]
    fn shovel_yes_registers_pending_and_target() {
        let mut f = Fixture::new();
        assert!(open_shovel_prompt(&mut f.popup));
        f.choose(ChoiceId::Yes);

        assert!(!f.popup.is_active());
        assert!(f.pending.is(PendingKind::WorldTool(ToolKind::Shovel)));
        assert_eq!(f.player.target, Vec2::new(20.0, 170.0));
    }

    #[test]
    fn shovel_cancel_leaves_everything_alone() {
        let mut f = Fixture::new();
        f.pending.set(PendingKind::Table);
        open_shovel_prompt(&mut f.popup);
        f.respond(PopupResponse::Cancel);

        assert!(!f.popup.is_active());
        assert!(f.pending.is(PendingKind::Table));
    }

    #[test]
    fn table_offers_only_available_kinds_and_refreshes() {
        let mut f = Fixture::new();
        f.table.stock = [1, 0, 2];
        assert!(open_table_menu(&mut f.popup, &mut f.table));
        assert_eq!(
            f.option_ids(),
            vec![ChoiceId::Seed(SeedKind::Tomato), ChoiceId::Seed(SeedKind::Carrot)]
        );

        f.choose(ChoiceId::Seed(SeedKind::Tomato));
        f.choose(ChoiceId::Seed(SeedKind::Tomato));

        assert_eq!(f.inventory.seed_count(SeedKind::Tomato), 1);
        assert_eq!(f.table.remaining(SeedKind::Tomato), 0);
        assert_eq!(f.option_ids(), vec![ChoiceId::Seed(SeedKind::Carrot)]);
        assert_eq!(f.popup.menu(), Some(PopupMenu::TableSeeds));
    }

    #[test]
    fn table_pick_stops_at_inventory_cap() {
        let mut f = Fixture::new();
        for _ in 0..3 {
            f.inventory.add_seed(SeedKind::Sunflower);
        }
        open_table_menu(&mut f.popup, &mut f.table);
        f.choose(ChoiceId::Seed(SeedKind::Sunflower));

        assert_eq!(f.inventory.seed_count(SeedKind::Sunflower), 3);
        assert_eq!(f.table.remaining(SeedKind::Sunflower), 3);
    }

    #[test]
    fn emptying_the_table_swaps_art_and_message() {
        let mut f = Fixture::new();
        f.table.stock = [0, 1, 0];
        open_table_menu(&mut f.popup, &mut f.table);
        f.choose(ChoiceId::Seed(SeedKind::Sunflower));

        assert_eq!(f.table.art, TableArt::Empty);
        let active = f.popup.active.as_ref().expect("keep-open popup stays up");
        assert_eq!(active.menu, PopupMenu::TableEmpty);
        assert_eq!(active.message, TABLE_EMPTY_MESSAGE);
        assert!(active.options.is_empty());
    }

    #[test]
    fn bare_table_shows_notice() {
        let mut f = Fixture::new();
        f.table.stock = [0, 0, 0];
        open_table_menu(&mut f.popup, &mut f.table);
        assert_eq!(f.popup.menu(), Some(PopupMenu::TableEmpty));
        assert_eq!(f.table.art, TableArt::Empty);
    }

    #[test]
    fn store_with_empty_hands_then_back_returns_to_root() {
        let mut f = Fixture::new();
        open_shed_menu(&mut f.popup);
        f.choose(ChoiceId::Store);
        assert_eq!(f.popup.menu(), Some(PopupMenu::ShedNothingToStore));

        f.choose(ChoiceId::Back);
        assert_eq!(f.popup.menu(), Some(PopupMenu::ShedRoot));
    }

    #[test]
    fn store_confirm_moves_tool_into_shed() {
        let mut f = Fixture::new();
        f.inventory.tool = Some(ToolKind::WateringCan);
        open_shed_menu(&mut f.popup);
        f.choose(ChoiceId::Store);
        assert_eq!(
            f.popup.menu(),
            Some(PopupMenu::ShedStoreConfirm(ToolKind::WateringCan))
        );

        f.choose(ChoiceId::Yes);
        assert!(f.shed.has(ToolKind::WateringCan));
        assert_eq!(f.inventory.tool, None);
        assert_eq!(f.inventory.look(), PlayerLook::Bare);
        assert_eq!(
            f.popup.active.as_ref().map(|p| p.message.as_str()),
            Some("Watering Can stored in shed!")
        );
    }

    #[test]
    fn store_confirm_after_dropping_the_tool_stores_nothing() {
        let mut f = Fixture::new();
        f.inventory.tool = Some(ToolKind::Shovel);
        open_shed_menu(&mut f.popup);
        f.choose(ChoiceId::Store);
        f.inventory.tool = None;
        f.choose(ChoiceId::Yes);

        assert!(f.shed.stored.is_empty());
        assert_eq!(f.popup.menu(), Some(PopupMenu::ShedNothingToStore));
    }

    #[test]
    fn retrieve_swaps_held_tool_into_shed() {
        let mut f = Fixture::new();
        f.inventory.tool = Some(ToolKind::WateringCan);
        f.shed.store(ToolKind::Shovel);
        f.pending.set(PendingKind::Shed);

        open_shed_menu(&mut f.popup);
        f.choose(ChoiceId::Retrieve);
        assert_eq!(f.option_ids(), vec![ChoiceId::Tool(ToolKind::Shovel)]);
        f.choose(ChoiceId::Tool(ToolKind::Shovel));

        assert!(!f.shed.has(ToolKind::Shovel));
        assert!(f.shed.has(ToolKind::WateringCan));
        assert_eq!(f.inventory.tool, Some(ToolKind::Shovel));
        assert!(f.pending.kind.is_none());
        assert!(!f.popup.is_active());
    }

    #[test]
    fn retrieve_from_empty_shed_offers_back() {
        let mut f = Fixture::new();
        open_shed_menu(&mut f.popup);
        f.choose(ChoiceId::Retrieve);
        assert_eq!(f.popup.menu(), Some(PopupMenu::ShedEmpty));
        assert_eq!(f.option_ids(), vec![ChoiceId::Back]);
    }

    #[test]
    fn cancelling_a_shed_menu_clears_pending() {
        let mut f = Fixture::new();
        f.pending.set(PendingKind::Shed);
        open_shed_menu(&mut f.popup);
        f.choose(ChoiceId::Store);
        f.respond(PopupResponse::Cancel);

        assert!(!f.popup.is_active());
        assert!(f.pending.kind.is_none());
    }

    #[test]
    fn unoffered_choice_is_ignored() {
        let mut f = Fixture::new();
        open_shed_menu(&mut f.popup);
        f.choose(ChoiceId::Yes);
        assert_eq!(f.popup.menu(), Some(PopupMenu::ShedRoot));
    }
}
