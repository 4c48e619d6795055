//! Garden layout configuration.
//!
//! The default layout ships embedded in the binary so the browser build
//! needs no file access. Native builds may point `GATITO_GARDEN_CONFIG` at
//! another RON file. A file that fails to parse is reported and ignored.

use bevy::prelude::*;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::fs;

use crate::shared::*;

pub const CONFIG_ENV_VAR: &str = "GATITO_GARDEN_CONFIG";
const DEFAULT_CONFIG: &str = include_str!("../../assets/config/garden.ron");

// ═══════════════════════════════════════════════════════════════════════
// CONFIG TYPES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlayerConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SeedStockConfig {
    pub tomato: u8,
    pub sunflower: u8,
    pub carrot: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub canvas: CanvasConfig,
    pub player: PlayerConfig,
    pub watering_can: RectConfig,
    pub shovel: RectConfig,
    pub table: RectConfig,
    pub shed: RectConfig,
    pub table_seeds: SeedStockConfig,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig {
                width: CANVAS_WIDTH,
                height: CANVAS_HEIGHT,
            },
            player: PlayerConfig {
                x: 100.0,
                y: 200.0,
                width: 60.0,
                height: 60.0,
                speed: 3.0,
            },
            watering_can: RectConfig {
                x: 300.0,
                y: 200.0,
                width: 30.0,
                height: 30.0,
            },
            shovel: RectConfig {
                x: 50.0,
                y: 200.0,
                width: 30.0,
                height: 30.0,
            },
            table: RectConfig {
                x: 420.0,
                y: 180.0,
                width: 60.0,
                height: 60.0,
            },
            shed: RectConfig {
                x: 20.0,
                y: 15.0,
                width: 150.0,
                height: 80.0,
            },
            table_seeds: SeedStockConfig {
                tomato: MAX_SEEDS_PER_KIND,
                sunflower: MAX_SEEDS_PER_KIND,
                carrot: MAX_SEEDS_PER_KIND,
            },
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════

pub fn parse_config(source: &str) -> Result<GardenConfig, String> {
    let config: GardenConfig =
        ron::from_str(source).map_err(|e| format!("Invalid garden config: {}", e))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &GardenConfig) -> Result<(), String> {
    if config.canvas.width <= 0.0 || config.canvas.height <= INVENTORY_BAR_OFFSET {
        return Err(format!(
            "Canvas {}x{} is too small for the inventory bar",
            config.canvas.width, config.canvas.height
        ));
    }
    if config.player.speed <= 0.0 {
        return Err(format!("Player speed must be positive, got {}", config.player.speed));
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_override() -> Option<Result<String, String>> {
    let path = std::env::var(CONFIG_ENV_VAR).ok()?;
    Some(fs::read_to_string(&path).map_err(|e| format!("Failed to read {}: {}", path, e)))
}

#[cfg(target_arch = "wasm32")]
fn read_override() -> Option<Result<String, String>> {
    None
}

/// Where the active layout came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    BuiltIn,
    Override,
    /// The override or built-in layout was rejected for this reason.
    Fallback(String),
}

/// Pick the layout from an optional override source. Nothing is logged
/// here; the caller reports the origin once logging is up.
pub fn resolve_layout(override_source: Option<Result<String, String>>) -> (GardenConfig, ConfigOrigin) {
    let mut rejected = None;
    if let Some(source) = override_source {
        match source.and_then(|text| parse_config(&text)) {
            Ok(config) => return (config, ConfigOrigin::Override),
            Err(e) => rejected = Some(e),
        }
    }

    match (parse_config(DEFAULT_CONFIG), rejected) {
        (Ok(config), None) => (config, ConfigOrigin::BuiltIn),
        (Ok(config), Some(reason)) => (config, ConfigOrigin::Fallback(reason)),
        (Err(e), _) => (
            GardenConfig::default(),
            ConfigOrigin::Fallback(format!("built-in layout rejected: {}", e)),
        ),
    }
}

/// Resolve the active config: the override file if one is set and valid,
/// otherwise the embedded default.
pub fn load_config() -> (GardenConfig, ConfigOrigin) {
    resolve_layout(read_override())
}

/// Insert every world-model resource described by `config`, replacing
/// whatever was there.
pub fn insert_garden_resources(app: &mut App, config: &GardenConfig) {
    let seeds = config.table_seeds;
    if [seeds.tomato, seeds.sunflower, seeds.carrot]
        .iter()
        .any(|&count| count > MAX_SEEDS_PER_KIND)
    {
        warn!(
            "[Config] Table stock is capped at {} per kind",
            MAX_SEEDS_PER_KIND
        );
    }

    let player = config.player;
    app.insert_resource(CanvasLayout {
        width: config.canvas.width,
        height: config.canvas.height,
        inventory_bar_top: config.canvas.height - INVENTORY_BAR_OFFSET,
    })
    .insert_resource(PlayerState::new(
        Vec2::new(player.x, player.y),
        Vec2::new(player.width, player.height),
        player.speed,
    ))
    .insert_resource(WorldPickups {
        items: vec![
            WorldPickup {
                tool: ToolKind::WateringCan,
                bounds: config.watering_can.bounds(),
                collected: false,
            },
            WorldPickup {
                tool: ToolKind::Shovel,
                bounds: config.shovel.bounds(),
                collected: false,
            },
        ],
    })
    .insert_resource(SeedTable::new(
        config.table.bounds(),
        [seeds.tomato, seeds.sunflower, seeds.carrot],
    ))
    .insert_resource(Shed::new(config.shed.bounds()));
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

/// Seeds the world model from a layout resolved once in `main`.
pub struct ConfigPlugin {
    pub config: GardenConfig,
    pub origin: ConfigOrigin,
}

impl ConfigPlugin {
    pub fn resolve() -> Self {
        let (config, origin) = load_config();
        Self { config, origin }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        match &self.origin {
            ConfigOrigin::BuiltIn => debug!("[Config] Using the built-in garden layout"),
            ConfigOrigin::Override => {
                info!("[Config] Loaded garden layout from {}", CONFIG_ENV_VAR)
            }
            ConfigOrigin::Fallback(reason) => {
                warn!("[Config] {}; falling back to the built-in layout", reason)
            }
        }
        insert_garden_resources(app, &self.config);
        app.init_resource::<Inventory>()
            .init_resource::<DroppedItems>()
            .init_resource::<PendingAction>()
            .init_resource::<PopupState>()
            .init_resource::<Engagement>()
            .init_resource::<ClickSuppression>()
            .init_resource::<PointerOverUi>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_layout_matches_defaults() {
        let parsed = parse_config(DEFAULT_CONFIG).expect("embedded config parses");
        assert_eq!(parsed, GardenConfig::default());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed = parse_config("(player: (x: 10.0, y: 20.0, width: 60.0, height: 60.0, speed: 5.0))")
            .expect("partial config parses");
        assert_eq!(parsed.player.speed, 5.0);
        assert_eq!(parsed.shed, GardenConfig::default().shed);
    }

    #[test]
    fn rejects_non_positive_speed() {
        let err = parse_config("(player: (x: 0.0, y: 0.0, width: 60.0, height: 60.0, speed: 0.0))")
            .unwrap_err();
        assert!(err.contains("speed"), "unexpected error: {err}");
    }

    #[test]
    fn no_override_uses_the_built_in_layout() {
        let (config, origin) = resolve_layout(None);
        assert_eq!(origin, ConfigOrigin::BuiltIn);
        assert_eq!(config, GardenConfig::default());
    }

    #[test]
    fn valid_override_replaces_the_layout() {
        let source = "(player: (x: 10.0, y: 20.0, width: 60.0, height: 60.0, speed: 5.0))";
        let (config, origin) = resolve_layout(Some(Ok(source.to_string())));
        assert_eq!(origin, ConfigOrigin::Override);
        assert_eq!(config.player.speed, 5.0);
    }

    #[test]
    fn unreadable_override_falls_back_with_its_reason() {
        let (config, origin) =
            resolve_layout(Some(Err("Failed to read garden.ron: not found".to_string())));
        assert_eq!(config, GardenConfig::default());
        match origin {
            ConfigOrigin::Fallback(reason) => assert!(reason.contains("not found")),
            other => panic!("expected a fallback, got {other:?}"),
        }
    }

    #[test]
    fn plugin_seeds_the_world_model_from_its_layout() {
        let mut config = GardenConfig::default();
        config.player.speed = 7.0;
        let mut app = App::new();
        app.add_plugins(ConfigPlugin {
            config,
            origin: ConfigOrigin::Override,
        });
        assert_eq!(app.world().resource::<PlayerState>().speed, 7.0);
        assert!(app.world().contains_resource::<Engagement>());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_config("not ron at all").is_err());
    }
}
