use bevy::prelude::*;
use crate::shared::*;

/// One fixed step from `current` toward `target`. Returns `current`
/// unchanged once within the arrival threshold, and never steps past the
/// target.
pub fn step_toward(current: Vec2, target: Vec2, step: f32, arrival_threshold: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= arrival_threshold {
        return current;
    }
    if step >= distance {
        return target;
    }
    current + delta / distance * step
}

/// Whether a step into `next` is blocked by the shed. The shed is solid
/// unless the player is walking there on purpose; a player already standing
/// in it after a visit may always walk back out.
pub fn shed_blocks(player: &PlayerState, next: Vec2, shed: &Shed, pending: &PendingAction) -> bool {
    if pending.is(PendingKind::Shed) || player.bounds().overlaps(&shed.bounds) {
        return false;
    }
    Bounds::at(next, player.size).overlaps(&shed.bounds)
}

/// Advance the player one step toward its target.
pub fn move_player(mut player: ResMut<PlayerState>, shed: Res<Shed>, pending: Res<PendingAction>) {
    if player.is_at_target() {
        return;
    }

    let next = step_toward(player.position, player.target, player.speed, ARRIVAL_EPSILON);
    if shed_blocks(&player, next, &shed, &pending) {
        return;
    }
    player.position = next;
}

/// Whether a pending action or an open prompt still targets `location`.
pub fn is_awaited(location: Location, pending: &PendingAction, popup: &PopupState) -> bool {
    let by_pending = match pending.kind {
        Some(PendingKind::WorldTool(tool)) => tool.location() == location,
        Some(PendingKind::Table) => location == Location::Table,
        Some(PendingKind::Shed) => location == Location::Shed,
        Some(PendingKind::DroppedItem(_)) | None => false,
    };
    by_pending || (location == Location::Shovel && popup.menu() == Some(PopupMenu::ShovelPickup))
}

/// Drop the engaged flag of every location the player has walked off or
/// stopped heading for.
pub fn release_engagements(
    player: Res<PlayerState>,
    pickups: Res<WorldPickups>,
    table: Res<SeedTable>,
    shed: Res<Shed>,
    pending: Res<PendingAction>,
    popup: Res<PopupState>,
    mut engagement: ResMut<Engagement>,
) {
    let body = player.bounds();
    let mut places = vec![(Location::Table, table.bounds), (Location::Shed, shed.bounds)];
    places.extend(
        pickups
            .items
            .iter()
            .map(|pickup| (pickup.tool.location(), pickup.bounds)),
    );

    for (location, bounds) in places {
        if !engagement.is_engaged(location) {
            continue;
        }
        let awaited = is_awaited(location, &pending, &popup);
        engagement.settle(location, body.overlaps(&bounds), awaited);
        if !engagement.is_engaged(location) {
            debug!("[Movement] released {:?}", location);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_by_fixed_amount() {
        let next = step_toward(Vec2::ZERO, Vec2::new(10.0, 0.0), 3.0, 1.0);
        assert!((next.x - 3.0).abs() < 0.0001);
        assert!(next.y.abs() < 0.0001);
    }

    #[test]
    fn step_is_clamped_to_remaining_distance() {
        let next = step_toward(Vec2::ZERO, Vec2::new(2.0, 0.0), 3.0, 1.0);
        assert_eq!(next, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn no_step_inside_arrival_threshold() {
        let start = Vec2::new(5.0, 5.0);
        let next = step_toward(start, Vec2::new(5.5, 5.5), 3.0, 1.0);
        assert_eq!(next, start);
    }

    #[test]
    fn shed_blocks_entry_but_not_exit() {
        let shed = Shed::new(Bounds::new(20.0, 15.0, 150.0, 80.0));
        let mut pending = PendingAction::default();

        let outside = PlayerState::new(Vec2::new(100.0, 97.0), Vec2::splat(60.0), 3.0);
        assert!(shed_blocks(&outside, Vec2::new(100.0, 94.0), &shed, &pending));
        assert!(!shed_blocks(&outside, Vec2::new(100.0, 100.0), &shed, &pending));

        pending.set(PendingKind::Shed);
        assert!(!shed_blocks(&outside, Vec2::new(100.0, 94.0), &shed, &pending));

        pending.clear();
        let inside = PlayerState::new(Vec2::new(-10.0, -15.0), Vec2::splat(60.0), 3.0);
        assert!(!shed_blocks(&inside, Vec2::new(-10.0, -12.0), &shed, &pending));
    }

    #[test]
    fn engagement_outlives_the_walk_until_the_player_leaves() {
        let mut engagement = Engagement::default();
        engagement.engage(Location::WateringCan);

        // Still walking over: not overlapping, but a pickup is on the way.
        engagement.settle(Location::WateringCan, false, true);
        assert!(engagement.is_engaged(Location::WateringCan));

        engagement.settle(Location::WateringCan, true, false);
        assert!(engagement.is_engaged(Location::WateringCan));

        engagement.settle(Location::WateringCan, false, false);
        assert!(!engagement.is_engaged(Location::WateringCan));
    }

    #[test]
    fn engagement_without_a_destination_is_released() {
        let mut engagement = Engagement::default();
        engagement.engage(Location::Shovel);
        engagement.settle(Location::Shovel, false, false);
        assert!(!engagement.is_engaged(Location::Shovel));
    }

    #[test]
    fn shovel_is_awaited_while_its_prompt_is_open() {
        let pending = PendingAction::default();
        let mut popup = PopupState::default();
        assert!(!is_awaited(Location::Shovel, &pending, &popup));

        crate::popup::menus::open_shovel_prompt(&mut popup);
        assert!(is_awaited(Location::Shovel, &pending, &popup));
        assert!(!is_awaited(Location::WateringCan, &pending, &popup));

        let mut pending = PendingAction::default();
        pending.set(PendingKind::WorldTool(ToolKind::WateringCan));
        assert!(is_awaited(Location::WateringCan, &pending, &PopupState::default()));
    }

    #[test]
    fn diagonal_step_keeps_length() {
        let next = step_toward(Vec2::ZERO, Vec2::new(30.0, 40.0), 5.0, 1.0);
        assert!((next.length() - 5.0).abs() < 0.0001);
        assert!((next.x - 3.0).abs() < 0.0001);
    }
}
