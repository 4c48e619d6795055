//! Popup/choice controller.
//!
//! One modal popup at a time. Each popup carries a `PopupMenu` state; a
//! chosen option is interpreted by that state instead of a stored callback,
//! so every transition between menus is listed in `menus.rs`.

pub mod menus;

use bevy::prelude::*;
use crate::shared::*;

pub struct PopupPlugin;

impl Plugin for PopupPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PopupResponseEvent>();
        app.add_systems(
            Update,
            menus::handle_popup_responses
                .in_set(GardenSet::Popup)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Open a popup. Refused (and logged) while another one is showing; callers
/// are expected to check `PopupState::is_active` first.
pub fn present(
    popup: &mut PopupState,
    menu: PopupMenu,
    message: impl Into<String>,
    options: Vec<PopupOption>,
    keep_open: bool,
) -> bool {
    if let Some(current) = &popup.active {
        warn!(
            "[Popup] {:?} refused: {:?} is already open",
            menu, current.menu
        );
        return false;
    }

    let message = message.into();
    debug!("[Popup] open {:?}: {}", menu, message);
    popup.active = Some(ActivePopup {
        menu,
        message,
        options,
        keep_open,
    });
    true
}

/// Replace the content of an open popup in place (keep-open menus).
pub fn refresh(
    popup: &mut PopupState,
    menu: PopupMenu,
    message: impl Into<String>,
    options: Vec<PopupOption>,
) {
    if let Some(active) = popup.active.as_mut() {
        active.menu = menu;
        active.message = message.into();
        active.options = options;
    }
}

pub fn close(popup: &mut PopupState) -> Option<ActivePopup> {
    let closed = popup.active.take();
    if let Some(ref closed) = closed {
        debug!("[Popup] close {:?}", closed.menu);
    }
    closed
}
