mod inventory_bar;
mod popup_panel;

use bevy::prelude::*;
use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── INVENTORY BAR: present for the whole session ───
        app.add_systems(OnEnter(GameState::Playing), inventory_bar::spawn_inventory_bar);
        app.add_systems(
            Update,
            inventory_bar::rebuild_inventory_slots
                .in_set(GardenSet::Render)
                .run_if(in_state(GameState::Playing)),
        );

        // ─── POPUP: button presses feed the popup controller ───
        app.add_systems(
            Update,
            popup_panel::popup_button_clicks
                .in_set(GardenSet::Input)
                .run_if(in_state(GameState::Playing)),
        );
        app.add_systems(
            Update,
            (
                popup_panel::sync_popup_panel,
                popup_panel::highlight_popup_buttons,
            )
                .chain()
                .in_set(GardenSet::Render)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
