//! Asset gate.
//!
//! Requests every sprite image on entering `GameState::Loading`, then moves
//! to `GameState::Playing` once each request has settled. An image that
//! fails to load is remembered so it can be drawn as a colour block.

use bevy::asset::LoadState;
use bevy::prelude::*;
use crate::shared::*;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteAssets>();
        app.add_systems(OnEnter(GameState::Loading), request_sprites);
        app.add_systems(
            Update,
            wait_for_sprites.run_if(in_state(GameState::Loading)),
        );
    }
}

fn request_sprites(asset_server: Res<AssetServer>, mut sprites: ResMut<SpriteAssets>) {
    for key in SpriteKey::ALL {
        sprites.handles.insert(key, asset_server.load(key.path()));
    }
    info!("[Loading] requested {} sprite images", sprites.handles.len());
}

/// How far the gate has got: settled images out of the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateProgress {
    pub settled: usize,
    pub total: usize,
}

impl GateProgress {
    pub fn is_complete(&self) -> bool {
        self.settled == self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Pending,
    Ready,
    Failed,
}

impl From<Option<LoadState>> for ImageStatus {
    fn from(state: Option<LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => ImageStatus::Ready,
            Some(LoadState::Failed(_)) => ImageStatus::Failed,
            _ => ImageStatus::Pending,
        }
    }
}

/// Count settled images, recording failures along the way.
pub fn settle_sprites(
    sprites: &mut SpriteAssets,
    mut status_of: impl FnMut(&Handle<Image>) -> ImageStatus,
) -> GateProgress {
    let mut settled = 0;
    let mut newly_failed = Vec::new();
    for (key, handle) in &sprites.handles {
        match status_of(handle) {
            ImageStatus::Ready => settled += 1,
            ImageStatus::Failed => {
                settled += 1;
                if !sprites.failed.contains(key) {
                    newly_failed.push(*key);
                }
            }
            ImageStatus::Pending => {}
        }
    }
    for key in newly_failed {
        warn!("[Loading] {} failed to load, drawing a placeholder", key.path());
        sprites.failed.insert(key);
    }
    GateProgress {
        settled,
        total: sprites.handles.len(),
    }
}

fn wait_for_sprites(
    asset_server: Res<AssetServer>,
    mut sprites: ResMut<SpriteAssets>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let progress = settle_sprites(&mut sprites, |handle| {
        ImageStatus::from(asset_server.get_load_state(handle.id()))
    });
    if progress.is_complete() {
        info!(
            "[Loading] {} of {} sprites ready, entering garden",
            progress.total - sprites.failed.len(),
            progress.total
        );
        next_state.set(GameState::Playing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_all(sprites: &mut SpriteAssets) -> Vec<Handle<Image>> {
        SpriteKey::ALL
            .into_iter()
            .map(|key| {
                let handle = Handle::<Image>::weak_from_u128(key as u128 + 1);
                sprites.handles.insert(key, handle.clone());
                handle
            })
            .collect()
    }

    #[test]
    fn gate_waits_for_pending_images() {
        let mut sprites = SpriteAssets::default();
        let all = register_all(&mut sprites);
        let still_loading = all[0].id();

        let progress = settle_sprites(&mut sprites, |handle| {
            if handle.id() == still_loading {
                ImageStatus::Pending
            } else {
                ImageStatus::Ready
            }
        });
        assert_eq!(progress.settled, SpriteKey::ALL.len() - 1);
        assert!(!progress.is_complete());
    }

    #[test]
    fn failed_images_settle_and_fall_back() {
        let mut sprites = SpriteAssets::default();
        let all = register_all(&mut sprites);
        let broken = all[5].id();

        let progress = settle_sprites(&mut sprites, |handle| {
            if handle.id() == broken {
                ImageStatus::Failed
            } else {
                ImageStatus::Ready
            }
        });
        assert!(progress.is_complete());
        assert!(sprites.image(SpriteKey::Table).is_none());
        assert!(sprites.image(SpriteKey::Shed).is_some());
    }

    #[test]
    fn unknown_load_state_counts_as_pending() {
        assert_eq!(ImageStatus::from(None), ImageStatus::Pending);
        assert_eq!(ImageStatus::from(Some(LoadState::Loading)), ImageStatus::Pending);
        assert_eq!(ImageStatus::from(Some(LoadState::Loaded)), ImageStatus::Ready);
    }
}
