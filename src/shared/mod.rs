//! Shared components, resources, events, and states for Gatito Garden.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.
//!
//! All positions are canvas coordinates: origin at the top-left corner,
//! x grows right, y grows down, one unit per logical pixel.

use bevy::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    /// Waiting for every sprite image to settle (loaded or failed).
    #[default]
    Loading,
    Playing,
}

/// Ordering of the per-tick game logic. Rendering reads the result after
/// `Pending`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GardenSet {
    Input,
    Popup,
    Movement,
    Pending,
    Render,
}

impl GardenSet {
    pub fn configure(app: &mut App) {
        app.configure_sets(
            Update,
            (
                GardenSet::Input,
                GardenSet::Popup,
                GardenSet::Movement,
                GardenSet::Pending,
                GardenSet::Render,
            )
                .chain(),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// GEOMETRY
// ═══════════════════════════════════════════════════════════════════════

/// Axis-aligned box in canvas coordinates. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn at(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Strict overlap on all four sides: boxes that merely touch do not collide.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Point hit test, inclusive on every edge.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ITEMS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToolKind {
    WateringCan,
    Shovel,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::WateringCan, ToolKind::Shovel];

    pub fn label(self) -> &'static str {
        match self {
            ToolKind::WateringCan => "Watering Can",
            ToolKind::Shovel => "Shovel",
        }
    }

    pub fn location(self) -> Location {
        match self {
            ToolKind::WateringCan => Location::WateringCan,
            ToolKind::Shovel => Location::Shovel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeedKind {
    Tomato,
    Sunflower,
    Carrot,
}

impl SeedKind {
    pub const ALL: [SeedKind; 3] = [SeedKind::Tomato, SeedKind::Sunflower, SeedKind::Carrot];

    pub fn index(self) -> usize {
        match self {
            SeedKind::Tomato => 0,
            SeedKind::Sunflower => 1,
            SeedKind::Carrot => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeedKind::Tomato => "Tomato",
            SeedKind::Sunflower => "Sunflower",
            SeedKind::Carrot => "Carrot",
        }
    }
}

/// Anything that can sit in the inventory bar or lie on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Tool(ToolKind),
    Seed(SeedKind),
}

impl ItemKind {
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Tool(tool) => tool.label(),
            ItemKind::Seed(seed) => seed.label(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

/// Marker for the player sprite entity.
#[derive(Component, Debug, Clone, Default)]
pub struct Player;

/// Logical player body. The sprite only mirrors this.
#[derive(Resource, Debug, Clone)]
pub struct PlayerState {
    pub position: Vec2,
    pub size: Vec2,
    pub target: Vec2,
    /// Distance covered per tick.
    pub speed: f32,
}

impl PlayerState {
    pub fn new(position: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            position,
            size,
            target: position,
            speed,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.position, self.size)
    }

    /// Aim the player so its centre lands on `point`.
    pub fn walk_to(&mut self, point: Vec2) {
        self.target = point - self.size / 2.0;
    }

    pub fn is_at_target(&self) -> bool {
        self.position.distance(self.target) <= ARRIVAL_EPSILON
    }
}

/// Which player sprite variant is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerLook {
    Bare,
    WithCan,
    WithShovel,
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedStack {
    pub kind: SeedKind,
    pub count: u8,
}

/// Carried items. Holding a single `Option<ToolKind>` keeps the
/// one-tool-at-a-time rule structural.
#[derive(Resource, Debug, Clone, Default)]
pub struct Inventory {
    pub tool: Option<ToolKind>,
    /// Seed stacks in first-acquired order. Empty stacks keep their place.
    pub seeds: Vec<SeedStack>,
}

impl Inventory {
    pub fn has_tool(&self, tool: ToolKind) -> bool {
        self.tool == Some(tool)
    }

    pub fn seed_count(&self, kind: SeedKind) -> u8 {
        self.seeds
            .iter()
            .find(|stack| stack.kind == kind)
            .map(|stack| stack.count)
            .unwrap_or(0)
    }

    /// Add one seed. Returns `false` when that kind is already at the cap.
    pub fn add_seed(&mut self, kind: SeedKind) -> bool {
        match self.seeds.iter_mut().find(|stack| stack.kind == kind) {
            Some(stack) if stack.count >= MAX_SEEDS_PER_KIND => false,
            Some(stack) => {
                stack.count += 1;
                true
            }
            None => {
                self.seeds.push(SeedStack { kind, count: 1 });
                true
            }
        }
    }

    /// Remove one seed. Returns `false` when there was none.
    pub fn remove_seed(&mut self, kind: SeedKind) -> bool {
        match self.seeds.iter_mut().find(|stack| stack.kind == kind) {
            Some(stack) if stack.count > 0 => {
                stack.count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn look(&self) -> PlayerLook {
        match self.tool {
            None => PlayerLook::Bare,
            Some(ToolKind::WateringCan) => PlayerLook::WithCan,
            Some(ToolKind::Shovel) => PlayerLook::WithShovel,
        }
    }

    /// Items in inventory-bar order: the tool first, then every non-empty
    /// seed stack.
    pub fn bar_items(&self) -> Vec<ItemKind> {
        self.tool
            .map(ItemKind::Tool)
            .into_iter()
            .chain(
                self.seeds
                    .iter()
                    .filter(|stack| stack.count > 0)
                    .map(|stack| ItemKind::Seed(stack.kind)),
            )
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD ENTITIES
// ═══════════════════════════════════════════════════════════════════════

/// A tool placed in the world at startup. Collected at most once.
#[derive(Debug, Clone)]
pub struct WorldPickup {
    pub tool: ToolKind,
    pub bounds: Bounds,
    pub collected: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct WorldPickups {
    pub items: Vec<WorldPickup>,
}

impl WorldPickups {
    pub fn get(&self, tool: ToolKind) -> Option<&WorldPickup> {
        self.items.iter().find(|pickup| pickup.tool == tool)
    }

    pub fn get_mut(&mut self, tool: ToolKind) -> Option<&mut WorldPickup> {
        self.items.iter_mut().find(|pickup| pickup.tool == tool)
    }

    pub fn is_available(&self, tool: ToolKind) -> bool {
        self.get(tool).is_some_and(|pickup| !pickup.collected)
    }
}

/// Stable identity for a dropped item; survives removal of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DroppedItemId(pub u32);

#[derive(Debug, Clone)]
pub struct DroppedItem {
    pub id: DroppedItemId,
    pub kind: ItemKind,
    pub bounds: Bounds,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DroppedItems {
    pub items: Vec<DroppedItem>,
    next_id: u32,
}

impl DroppedItems {
    /// Place an item on the ground with its top-left corner at `position`.
    pub fn drop_at(&mut self, kind: ItemKind, position: Vec2) -> DroppedItemId {
        let id = DroppedItemId(self.next_id);
        self.next_id += 1;
        self.items.push(DroppedItem {
            id,
            kind,
            bounds: Bounds::at(position, Vec2::splat(DROPPED_ITEM_SIZE)),
        });
        id
    }

    pub fn get(&self, id: DroppedItemId) -> Option<&DroppedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn remove(&mut self, id: DroppedItemId) -> Option<DroppedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// First item (in drop order) under `point`.
    pub fn hit(&self, point: Vec2) -> Option<&DroppedItem> {
        self.items.iter().find(|item| item.bounds.contains(point))
    }

    pub fn count_of(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableArt {
    Full,
    Empty,
}

/// The seed table. Stock only ever goes down.
#[derive(Resource, Debug, Clone)]
pub struct SeedTable {
    pub bounds: Bounds,
    pub stock: [u8; 3],
    pub art: TableArt,
}

impl SeedTable {
    pub fn new(bounds: Bounds, stock: [u8; 3]) -> Self {
        let stock = stock.map(|count| count.min(MAX_SEEDS_PER_KIND));
        let mut table = Self {
            bounds,
            stock,
            art: TableArt::Full,
        };
        if table.total() == 0 {
            table.art = TableArt::Empty;
        }
        table
    }

    pub fn remaining(&self, kind: SeedKind) -> u8 {
        self.stock[kind.index()]
    }

    pub fn total(&self) -> u32 {
        self.stock.iter().map(|&count| count as u32).sum()
    }

    /// Seed kinds with stock left, in display order.
    pub fn available(&self) -> Vec<SeedKind> {
        SeedKind::ALL
            .into_iter()
            .filter(|&kind| self.remaining(kind) > 0)
            .collect()
    }

    /// Take one seed off the table. Switches the art once everything is gone.
    pub fn take(&mut self, kind: SeedKind) -> bool {
        let slot = &mut self.stock[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        if self.total() == 0 {
            self.art = TableArt::Empty;
        }
        true
    }
}

/// The tool shed.
#[derive(Resource, Debug, Clone)]
pub struct Shed {
    pub bounds: Bounds,
    pub stored: BTreeSet<ToolKind>,
}

impl Shed {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            stored: BTreeSet::new(),
        }
    }

    pub fn has(&self, tool: ToolKind) -> bool {
        self.stored.contains(&tool)
    }

    pub fn store(&mut self, tool: ToolKind) {
        self.stored.insert(tool);
    }

    pub fn retrieve(&mut self, tool: ToolKind) -> bool {
        self.stored.remove(&tool)
    }

    /// Stored tools, watering can first.
    pub fn stored_tools(&self) -> Vec<ToolKind> {
        self.stored.iter().copied().collect()
    }
}

/// Marker components for world sprites.
#[derive(Component, Debug)]
pub struct ShedSprite;

#[derive(Component, Debug)]
pub struct TableSprite;

#[derive(Component, Debug)]
pub struct PickupSprite(pub ToolKind);

#[derive(Component, Debug)]
pub struct DroppedSprite(pub DroppedItemId);

// ═══════════════════════════════════════════════════════════════════════
// INTERACTION STATE
// ═══════════════════════════════════════════════════════════════════════

/// What the player is walking towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingKind {
    DroppedItem(DroppedItemId),
    WorldTool(ToolKind),
    Table,
    Shed,
}

/// At most one deferred interaction, fired once the player arrives.
#[derive(Resource, Debug, Clone, Default)]
pub struct PendingAction {
    pub kind: Option<PendingKind>,
}

impl PendingAction {
    pub fn set(&mut self, kind: PendingKind) {
        self.kind = Some(kind);
    }

    pub fn clear(&mut self) {
        self.kind = None;
    }

    pub fn is(&self, kind: PendingKind) -> bool {
        self.kind == Some(kind)
    }
}

/// Interactable places that track whether the player is engaged with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Table,
    WateringCan,
    Shovel,
    Shed,
}

/// Per-location engagement. A location is engaged when the player interacts
/// with it and released once the player has stood on it and walked off, or
/// once nothing is heading there any more.
#[derive(Resource, Debug, Clone, Default)]
pub struct Engagement {
    /// Engaged locations, each with whether the player has reached it yet.
    engaged: HashMap<Location, bool>,
}

impl Engagement {
    pub fn engage(&mut self, location: Location) {
        self.engaged.entry(location).or_insert(false);
    }

    pub fn release(&mut self, location: Location) {
        self.engaged.remove(&location);
    }

    pub fn is_engaged(&self, location: Location) -> bool {
        self.engaged.contains_key(&location)
    }

    /// Update one location from the player's overlap this tick. `awaited`
    /// says whether a pending action or open prompt still targets it.
    pub fn settle(&mut self, location: Location, overlapping: bool, awaited: bool) {
        let Some(reached) = self.engaged.get_mut(&location) else {
            return;
        };
        if overlapping {
            *reached = true;
        } else if *reached || !awaited {
            self.engaged.remove(&location);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// POPUP
// ═══════════════════════════════════════════════════════════════════════

/// Identifier carried by a popup option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceId {
    Yes,
    Back,
    Store,
    Retrieve,
    Tool(ToolKind),
    Seed(SeedKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupOption {
    pub id: ChoiceId,
    pub label: String,
}

impl PopupOption {
    pub fn new(id: ChoiceId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Every menu the popup can show. The active variant decides how a chosen
/// option is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupMenu {
    ShovelPickup,
    TableSeeds,
    TableEmpty,
    ShedRoot,
    ShedNothingToStore,
    ShedStoreConfirm(ToolKind),
    ShedStored(ToolKind),
    ShedEmpty,
    ShedRetrieve,
}

impl PopupMenu {
    pub fn is_shed(self) -> bool {
        matches!(
            self,
            PopupMenu::ShedRoot
                | PopupMenu::ShedNothingToStore
                | PopupMenu::ShedStoreConfirm(_)
                | PopupMenu::ShedStored(_)
                | PopupMenu::ShedEmpty
                | PopupMenu::ShedRetrieve
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivePopup {
    pub menu: PopupMenu,
    pub message: String,
    pub options: Vec<PopupOption>,
    /// Selecting an option leaves the popup open.
    pub keep_open: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct PopupState {
    pub active: Option<ActivePopup>,
}

impl PopupState {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn menu(&self) -> Option<PopupMenu> {
        self.active.as_ref().map(|popup| popup.menu)
    }
}

/// What the player did with the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupResponse {
    Choose(ChoiceId),
    Cancel,
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// Identity of one physical press; the pointer-down and the click it
/// produces share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PressId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Click,
}

/// The click whose press performed an inventory drop gets discarded.
#[derive(Resource, Debug, Clone, Default)]
pub struct ClickSuppression {
    pub press: Option<PressId>,
}

/// Set by the UI while the cursor is over a popup button, so canvas input
/// ignores presses meant for the popup.
#[derive(Resource, Debug, Clone, Default)]
pub struct PointerOverUi(pub bool);

/// Canvas geometry that input and rendering agree on.
#[derive(Resource, Debug, Clone)]
pub struct CanvasLayout {
    pub width: f32,
    pub height: f32,
    pub inventory_bar_top: f32,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            inventory_bar_top: CANVAS_HEIGHT - INVENTORY_BAR_OFFSET,
        }
    }
}

impl CanvasLayout {
    pub fn in_inventory_bar(&self, point: Vec2) -> bool {
        point.y >= self.inventory_bar_top
            && point.y <= self.inventory_bar_top + INVENTORY_BAR_HEIGHT
    }

    /// Hit box of the `slot`-th icon in the inventory bar.
    pub fn slot_bounds(&self, slot: usize) -> Bounds {
        Bounds::new(
            INVENTORY_SLOT_START_X + slot as f32 * INVENTORY_SLOT_PITCH,
            self.inventory_bar_top + INVENTORY_SLOT_TOP_OFFSET,
            INVENTORY_SLOT_SIZE,
            INVENTORY_SLOT_SIZE,
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPRITES
// ═══════════════════════════════════════════════════════════════════════

/// Every image the game draws. Failed images fall back to `fallback_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Player,
    PlayerWithCan,
    PlayerWithShovel,
    WateringCan,
    Shovel,
    Table,
    TableSeedless,
    Shed,
    SeedTomato,
    SeedSunflower,
    SeedCarrot,
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 11] = [
        SpriteKey::Player,
        SpriteKey::PlayerWithCan,
        SpriteKey::PlayerWithShovel,
        SpriteKey::WateringCan,
        SpriteKey::Shovel,
        SpriteKey::Table,
        SpriteKey::TableSeedless,
        SpriteKey::Shed,
        SpriteKey::SeedTomato,
        SpriteKey::SeedSunflower,
        SpriteKey::SeedCarrot,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SpriteKey::Player => "sprites/Gatito_sprite.png",
            SpriteKey::PlayerWithCan => "sprites/Gatito_sprite_Can.png",
            SpriteKey::PlayerWithShovel => "sprites/Gatito_sprite_shovel.png",
            SpriteKey::WateringCan => "sprites/watering_can.png",
            SpriteKey::Shovel => "sprites/shovel.png",
            SpriteKey::Table => "sprites/table.png",
            SpriteKey::TableSeedless => "sprites/table_seedless.png",
            SpriteKey::Shed => "sprites/shed.png",
            SpriteKey::SeedTomato => "sprites/seed_tomato.png",
            SpriteKey::SeedSunflower => "sprites/seed_sunflower.png",
            SpriteKey::SeedCarrot => "sprites/seed_carrot.png",
        }
    }

    pub fn fallback_color(self) -> Color {
        match self {
            SpriteKey::Player => Color::srgb(0.95, 0.65, 0.3),
            SpriteKey::PlayerWithCan => Color::srgb(0.4, 0.6, 0.95),
            SpriteKey::PlayerWithShovel => Color::srgb(0.6, 0.45, 0.3),
            SpriteKey::WateringCan => Color::srgb(0.2, 0.45, 0.9),
            SpriteKey::Shovel => Color::srgb(0.55, 0.55, 0.6),
            SpriteKey::Table => Color::srgb(0.6, 0.4, 0.2),
            SpriteKey::TableSeedless => Color::srgb(0.45, 0.32, 0.2),
            SpriteKey::Shed => Color::srgb(0.5, 0.3, 0.25),
            SpriteKey::SeedTomato => Color::srgb(0.9, 0.2, 0.2),
            SpriteKey::SeedSunflower => Color::srgb(0.95, 0.85, 0.2),
            SpriteKey::SeedCarrot => Color::srgb(0.95, 0.5, 0.1),
        }
    }

    pub fn for_item(item: ItemKind) -> Self {
        match item {
            ItemKind::Tool(ToolKind::WateringCan) => SpriteKey::WateringCan,
            ItemKind::Tool(ToolKind::Shovel) => SpriteKey::Shovel,
            ItemKind::Seed(SeedKind::Tomato) => SpriteKey::SeedTomato,
            ItemKind::Seed(SeedKind::Sunflower) => SpriteKey::SeedSunflower,
            ItemKind::Seed(SeedKind::Carrot) => SpriteKey::SeedCarrot,
        }
    }

    pub fn for_look(look: PlayerLook) -> Self {
        match look {
            PlayerLook::Bare => SpriteKey::Player,
            PlayerLook::WithCan => SpriteKey::PlayerWithCan,
            PlayerLook::WithShovel => SpriteKey::PlayerWithShovel,
        }
    }

    pub fn for_table(art: TableArt) -> Self {
        match art {
            TableArt::Full => SpriteKey::Table,
            TableArt::Empty => SpriteKey::TableSeedless,
        }
    }
}

/// Image handles by key, plus the keys whose image failed to load.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteAssets {
    pub handles: HashMap<SpriteKey, Handle<Image>>,
    pub failed: HashSet<SpriteKey>,
}

impl SpriteAssets {
    /// The usable image for `key`, or `None` when a colour block should be
    /// drawn instead.
    pub fn image(&self, key: SpriteKey) -> Option<Handle<Image>> {
        if self.failed.contains(&key) {
            return None;
        }
        self.handles.get(&key).cloned()
    }

    /// A sprite of the given size showing `key`.
    pub fn sprite(&self, key: SpriteKey, size: Vec2) -> Sprite {
        match self.image(key) {
            Some(image) => Sprite {
                image,
                custom_size: Some(size),
                ..default()
            },
            None => Sprite::from_color(key.fallback_color(), size),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone, Copy)]
pub struct CanvasPointerEvent {
    pub press: PressId,
    pub phase: PointerPhase,
    pub position: Vec2,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PopupResponseEvent {
    pub response: PopupResponse,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

pub const INVENTORY_BAR_OFFSET: f32 = 50.0; // bar top = canvas height - offset
pub const INVENTORY_BAR_HEIGHT: f32 = 40.0;
pub const INVENTORY_BAR_LEFT: f32 = 10.0;
pub const INVENTORY_BAR_WIDTH: f32 = 250.0;
pub const INVENTORY_SLOT_START_X: f32 = 20.0;
pub const INVENTORY_SLOT_TOP_OFFSET: f32 = 8.0;
pub const INVENTORY_SLOT_SIZE: f32 = 30.0;
pub const INVENTORY_SLOT_PITCH: f32 = 32.0;

pub const MAX_SEEDS_PER_KIND: u8 = 3;
pub const DROPPED_ITEM_SIZE: f32 = 30.0;
pub const ARRIVAL_EPSILON: f32 = 1.0;
