mod movement;
pub mod pending;
pub mod pickup;

pub use movement::{move_player, release_engagements, step_toward};

use bevy::prelude::*;
use crate::shared::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // -- Per-tick logic, after input and popup responses --
        app.add_systems(
            Update,
            (move_player, release_engagements)
                .chain()
                .in_set(GardenSet::Movement)
                .run_if(in_state(GameState::Playing)),
        );
        app.add_systems(
            Update,
            pending::resolve_pending_action
                .in_set(GardenSet::Pending)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
