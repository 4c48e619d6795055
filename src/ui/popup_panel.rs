//! The modal popup: message, one button per option, and a trailing Cancel.

use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct PopupRoot;

/// The response a popup button sends when pressed.
#[derive(Component, Debug, Clone, Copy)]
pub struct PopupButton(pub PopupResponse);

const BUTTON_NORMAL: Color = Color::srgb(0.25, 0.2, 0.15);
const BUTTON_HOVERED: Color = Color::srgb(0.4, 0.32, 0.22);

// ═══════════════════════════════════════════════════════════════════════
// SPAWN / DESPAWN: follows PopupState
// ═══════════════════════════════════════════════════════════════════════

pub fn sync_popup_panel(
    mut commands: Commands,
    popup: Res<PopupState>,
    existing: Query<Entity, With<PopupRoot>>,
) {
    if !popup.is_changed() {
        return;
    }
    for entity in &existing {
        commands.entity(entity).despawn_recursive();
    }
    let Some(active) = popup.active.as_ref() else {
        return;
    };

    commands
        .spawn((
            PopupRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        min_width: Val::Px(320.0),
                        max_width: Val::Px(520.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(16.0)),
                        row_gap: Val::Px(12.0),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.08, 0.06, 0.05, 0.92)),
                    BorderColor(Color::srgb(0.8, 0.7, 0.5)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(active.message.clone()),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.95, 0.8)),
                    ));

                    panel
                        .spawn(Node {
                            flex_direction: FlexDirection::Row,
                            flex_wrap: FlexWrap::Wrap,
                            justify_content: JustifyContent::Center,
                            column_gap: Val::Px(8.0),
                            row_gap: Val::Px(8.0),
                            ..default()
                        })
                        .with_children(|row| {
                            for option in &active.options {
                                spawn_popup_button(
                                    row,
                                    &option.label,
                                    PopupResponse::Choose(option.id),
                                );
                            }
                            spawn_popup_button(row, "Cancel", PopupResponse::Cancel);
                        });
                });
        });
}

fn spawn_popup_button(parent: &mut ChildBuilder, label: &str, response: PopupResponse) {
    parent
        .spawn((
            Button,
            PopupButton(response),
            Node {
                padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_NORMAL),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACTION
// ═══════════════════════════════════════════════════════════════════════

pub fn popup_button_clicks(
    buttons: Query<(&Interaction, &PopupButton), Changed<Interaction>>,
    mut responses: EventWriter<PopupResponseEvent>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            responses.send(PopupResponseEvent { response: button.0 });
        }
    }
}

pub fn highlight_popup_buttons(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (With<PopupButton>, Changed<Interaction>)>,
) {
    for (interaction, mut color) in &mut buttons {
        color.0 = match interaction {
            Interaction::None => BUTTON_NORMAL,
            Interaction::Hovered | Interaction::Pressed => BUTTON_HOVERED,
        };
    }
}
