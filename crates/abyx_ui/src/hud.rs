//! # HUD
//!
//! Immediate-mode overlay drawn in logical screen units (origin bottom-left):
//!
//! ```text
//!            Tab                      C
//!   None <--------> Inventory   None <------> Structures
//!                                               | click on an icon
//!                                               v
//!   None <--------------------------------- Place(kind)
//!           click in the world: structure spawned on the snapped tile
//! ```
//!
//! Hovering a structure icon claims the frame's hover so the world selection
//! skips the click. The inventory bar never claims hover.

use abyx_core::{snap_to_tile_grid, Approach, Entity, EntityHandle, EntityStore};
use abyx_economy::ResourceLedger;
use abyx_shared::{GameConfig, Range2, StructureKind, Vec2};
use tracing::{debug, warn};

use crate::assets::SpriteAtlas;
use crate::input::{InputSource, Key};
use crate::render::{Color, Renderer, Space, Transform2D};

/// Inventory slot edge length.
pub const SLOT_SIZE: f32 = 16.0;
/// Slots in the inventory bar.
pub const INVENTORY_SLOTS: usize = 8;
/// Bottom edge of the inventory bar.
pub const INVENTORY_Y: f32 = 30.0;
/// Bottom edge of the structure palette.
pub const PALETTE_Y: f32 = 10.0;
/// Gap between palette icons.
pub const PALETTE_PADDING: f32 = 4.0;
/// Scale of a hovered inventory icon.
pub const HOVER_SCALE: f32 = 1.3;

const SLOT_BG: Color = Color::new(1.0, 1.0, 1.0, 0.2);
const GHOST_TINT: Color = Color::new(1.0, 1.0, 1.0, 0.2);
const TOOLTIP_SIZE: Vec2 = Vec2::new(30.0, 12.5);
const TEXT_SCALE: f32 = 0.1;

/// Which HUD panel is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameMode {
    /// Nothing open.
    #[default]
    None,
    /// Inventory bar open.
    Inventory,
    /// Structure palette open.
    Structures,
    /// Ghost of a structure follows the cursor.
    Place(StructureKind),
}

/// Everything the HUD reads or mutates during one tick.
pub struct HudFrame<'a> {
    /// Input, for toggles and clicks.
    pub input: &'a mut dyn InputSource,
    /// Draw target.
    pub renderer: &'a mut dyn Renderer,
    /// Sprites.
    pub atlas: &'a SpriteAtlas,
    /// Counts shown in the inventory bar.
    pub ledger: &'a ResourceLedger,
    /// Receives placed structures.
    pub store: &'a mut EntityStore,
    /// Cursor in world units.
    pub cursor_world: Vec2,
    /// Tunables.
    pub config: &'a GameConfig,
    /// Seconds since the previous tick.
    pub dt: f32,
}

/// What the HUD did this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HudOutput {
    /// The cursor is over an interactive HUD element.
    pub hover_consumed: bool,
    /// A structure was placed.
    pub placed: Option<(EntityHandle, StructureKind)>,
}

/// HUD state carried across ticks.
#[derive(Clone, Debug)]
pub struct Hud {
    mode: GameMode,
    inventory_fade: Approach,
    palette_fade: Approach,
}

impl Hud {
    /// Creates a closed HUD whose panels fade at `fade_rate`.
    #[must_use]
    pub fn new(fade_rate: f32) -> Self {
        Self {
            mode: GameMode::None,
            inventory_fade: Approach::new(0.0, fade_rate),
            palette_fade: Approach::new(0.0, fade_rate),
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Inventory panel opacity in `[0, 1]`.
    #[must_use]
    pub fn inventory_alpha(&self) -> f32 {
        self.inventory_fade.value()
    }

    /// Structure palette opacity in `[0, 1]`.
    #[must_use]
    pub fn palette_alpha(&self) -> f32 {
        self.palette_fade.value()
    }

    /// Handles toggles, draws the panels and runs placement.
    pub fn update(&mut self, frame: &mut HudFrame<'_>) -> HudOutput {
        let mut output = HudOutput::default();
        let cursor = hud_cursor(&*frame.input, frame.config);

        frame.renderer.push_layer(frame.config.hud_layer);
        frame.renderer.set_space(Space::Screen);

        self.inventory(frame, cursor);
        self.palette(frame, cursor, &mut output);
        self.placement(frame, &mut output);

        frame.renderer.set_space(Space::World);
        frame.renderer.pop_layer();
        output
    }

    fn toggle(&mut self, input: &mut dyn InputSource, key: Key, mode: GameMode) {
        if input.is_key_just_pressed(key) {
            input.consume(key);
            self.mode = if self.mode == mode { GameMode::None } else { mode };
            debug!(mode = ?self.mode, "hud mode changed");
        }
    }

    fn inventory(&mut self, frame: &mut HudFrame<'_>, cursor: Option<Vec2>) {
        self.toggle(frame.input, Key::Tab, GameMode::Inventory);

        let target = if self.mode == GameMode::Inventory { 1.0 } else { 0.0 };
        self.inventory_fade.set_target(target);
        self.inventory_fade.update(frame.dt);
        let alpha = self.inventory_fade.value();
        if target == 0.0 && alpha == 0.0 {
            return;
        }
        let enabled = target == 1.0;

        let slot = Vec2::splat(SLOT_SIZE);
        #[allow(clippy::cast_precision_loss)]
        let width = INVENTORY_SLOTS as f32 * SLOT_SIZE;
        let origin = Vec2::new(frame.config.screen_width * 0.5 - width * 0.5, INVENTORY_Y);
        let renderer = &mut *frame.renderer;

        renderer.submit_rect(origin, Vec2::new(width, SLOT_SIZE), Color::PANEL.fade(alpha));

        for (i, (kind, count)) in frame.ledger.stocked().take(INVENTORY_SLOTS).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let pos = origin + Vec2::new(i as f32 * SLOT_SIZE, 0.0);
            let bounds = Range2::from_pos_size(pos, slot);
            let hovered = enabled && cursor.is_some_and(|c| bounds.contains(c));

            renderer.submit_rect(pos, slot, SLOT_BG.fade(alpha));

            let sprite = frame.atlas.get(kind.sprite());
            let mut xform = Transform2D::from_translation(pos).translate(slot * 0.5);
            if hovered {
                xform = xform.scaled(HOVER_SCALE);
            }
            xform = xform.translate(-(sprite.size * 0.5));
            renderer.submit_image(sprite.image, xform, sprite.size, Color::WHITE.fade(alpha));

            if hovered {
                let mid = bounds.mid();
                let tooltip = mid + Vec2::new(-SLOT_SIZE * 0.5, -TOOLTIP_SIZE.y - SLOT_SIZE * 0.5);
                renderer.submit_rect(tooltip, TOOLTIP_SIZE, Color::PANEL);
                renderer.submit_text(
                    kind.name(),
                    tooltip + Vec2::new(2.0, 7.0),
                    TEXT_SCALE,
                    Color::WHITE,
                );
                renderer.submit_text(
                    &format!("x{count}"),
                    tooltip + Vec2::new(2.0, 1.5),
                    TEXT_SCALE,
                    Color::WHITE,
                );
            }
        }
    }

    fn palette(&mut self, frame: &mut HudFrame<'_>, cursor: Option<Vec2>, output: &mut HudOutput) {
        self.toggle(frame.input, Key::C, GameMode::Structures);

        let target = if self.mode == GameMode::Structures { 1.0 } else { 0.0 };
        self.palette_fade.set_target(target);
        self.palette_fade.update(frame.dt);
        let alpha = self.palette_fade.value();
        if target == 0.0 && alpha == 0.0 {
            return;
        }
        let enabled = target == 1.0;

        let icon = Vec2::splat(SLOT_SIZE);
        #[allow(clippy::cast_precision_loss)]
        let count = StructureKind::ALL.len() as f32;
        let width = icon.x * count + PALETTE_PADDING * (count - 1.0);
        let start_x = frame.config.screen_width * 0.5 - width * 0.5;

        for (i, kind) in StructureKind::ALL.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let pos = Vec2::new(start_x + i as f32 * (icon.x + PALETTE_PADDING), PALETTE_Y);
            let sprite = frame.atlas.get(kind.sprite());
            frame.renderer.submit_image(
                sprite.image,
                Transform2D::from_translation(pos),
                icon,
                Color::RED.fade(alpha),
            );

            let bounds = Range2::from_pos_size(pos, icon);
            if !enabled || !cursor.is_some_and(|c| bounds.contains(c)) {
                continue;
            }
            output.hover_consumed = true;
            if frame.input.is_key_just_pressed(Key::MouseLeft) {
                frame.input.consume(Key::MouseLeft);
                self.mode = GameMode::Place(kind);
                debug!(structure = kind.name(), "placement started");
            }
        }
    }

    fn placement(&mut self, frame: &mut HudFrame<'_>, output: &mut HudOutput) {
        let GameMode::Place(kind) = self.mode else {
            return;
        };
        let tile = frame.config.tile_size;
        let snapped = snap_to_tile_grid(frame.cursor_world, tile);
        let sprite = frame.atlas.get(kind.sprite());

        // same offsets as world rendering, so the ghost sits where the structure will
        frame.renderer.set_space(Space::World);
        let xform = Transform2D::from_translation(snapped)
            .translate(Vec2::new(0.0, -tile * 0.5))
            .translate(Vec2::new(-sprite.size.x * 0.5, 0.0));
        frame
            .renderer
            .submit_image(sprite.image, xform, sprite.size, GHOST_TINT);

        if frame.input.is_key_just_pressed(Key::MouseLeft) {
            frame.input.consume(Key::MouseLeft);
            match frame.store.allocate(Entity::structure(kind, snapped)) {
                Ok(handle) => {
                    debug!(
                        %handle,
                        structure = kind.name(),
                        x = snapped.x,
                        y = snapped.y,
                        "structure placed"
                    );
                    output.placed = Some((handle, kind));
                }
                Err(err) => warn!(structure = kind.name(), %err, "placement skipped"),
            }
            self.mode = GameMode::None;
        }
        frame.renderer.set_space(Space::Screen);
    }
}

/// Cursor in logical HUD units, or `None` before the window has a size.
fn hud_cursor(input: &dyn InputSource, config: &GameConfig) -> Option<Vec2> {
    let window = input.window_size();
    if window.x <= 0.0 || window.y <= 0.0 {
        return None;
    }
    let cursor = input.cursor();
    Some(Vec2::new(
        cursor.x / window.x * config.screen_width,
        cursor.y / window.y * config.screen_height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetManifest;
    use crate::input::InputState;
    use crate::render::{DrawCommand, DrawList};
    use abyx_shared::ResourceKind;

    struct Fixture {
        input: InputState,
        draw: DrawList,
        atlas: SpriteAtlas,
        ledger: ResourceLedger,
        store: EntityStore,
        config: GameConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let config = GameConfig::default();
            let atlas = SpriteAtlas::load(&mut AssetManifest::with_all_sprites(16, 16)).unwrap();
            Self {
                input: InputState::new(Vec2::new(config.window_width, config.window_height)),
                draw: DrawList::new(),
                atlas,
                ledger: ResourceLedger::new(),
                store: EntityStore::new(8),
                config,
            }
        }

        /// Puts the cursor on a logical HUD point.
        fn point_at(&mut self, hud: Vec2) {
            let scale = self.config.window_width / self.config.screen_width;
            self.input.set_cursor(hud * scale);
        }

        fn tick(&mut self, hud: &mut Hud, cursor_world: Vec2) -> HudOutput {
            let mut frame = HudFrame {
                input: &mut self.input,
                renderer: &mut self.draw,
                atlas: &self.atlas,
                ledger: &self.ledger,
                store: &mut self.store,
                cursor_world,
                config: &self.config,
                dt: 1.0 / 60.0,
            };
            let output = hud.update(&mut frame);
            self.input.begin_frame();
            output
        }
    }

    fn oven_icon_center(config: &GameConfig) -> Vec2 {
        let width = SLOT_SIZE * 2.0 + PALETTE_PADDING;
        Vec2::new(
            config.screen_width * 0.5 - width * 0.5 + SLOT_SIZE * 0.5,
            PALETTE_Y + SLOT_SIZE * 0.5,
        )
    }

    #[test]
    fn test_toggles() {
        let mut fx = Fixture::new();
        let mut hud = Hud::new(15.0);

        fx.input.press(Key::Tab);
        fx.tick(&mut hud, Vec2::ZERO);
        assert_eq!(hud.mode(), GameMode::Inventory);
        assert!(!fx.input.is_key_just_pressed(Key::Tab));

        fx.input.release(Key::Tab);
        fx.input.press(Key::C);
        fx.tick(&mut hud, Vec2::ZERO);
        assert_eq!(hud.mode(), GameMode::Structures);

        fx.input.release(Key::C);
        fx.input.press(Key::C);
        fx.tick(&mut hud, Vec2::ZERO);
        assert_eq!(hud.mode(), GameMode::None);
    }

    #[test]
    fn test_inventory_fades_in() {
        let mut fx = Fixture::new();
        let mut hud = Hud::new(15.0);
        fx.input.press(Key::Tab);
        fx.tick(&mut hud, Vec2::ZERO);
        let first = hud.inventory_alpha();
        assert!(first > 0.0 && first < 1.0);

        for _ in 0..120 {
            fx.tick(&mut hud, Vec2::ZERO);
        }
        assert_eq!(hud.inventory_alpha(), 1.0);
    }

    #[test]
    fn test_closed_hud_draws_nothing() {
        let mut fx = Fixture::new();
        let mut hud = Hud::new(15.0);
        let output = fx.tick(&mut hud, Vec2::ZERO);
        assert_eq!(output, HudOutput::default());
        assert!(fx.draw.is_empty());
    }

    #[test]
    fn test_hovered_slot_shows_tooltip() {
        let mut fx = Fixture::new();
        let mut hud = Hud::new(15.0);
        fx.ledger.credit(ResourceKind::Wood);
        fx.ledger.credit(ResourceKind::Wood);
        fx.input.press(Key::Tab);
        fx.tick(&mut hud, Vec2::ZERO);

        let first_slot = Vec2::new(
            fx.config.screen_width * 0.5 - 64.0 + 8.0,
            INVENTORY_Y + 8.0,
        );
        fx.point_at(first_slot);
        fx.draw.clear();
        let output = fx.tick(&mut hud, Vec2::ZERO);
        assert!(!output.hover_consumed);

        let texts: Vec<_> = fx
            .draw
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, space, layer, .. } => {
                    assert_eq!(*space, Space::Screen);
                    assert_eq!(*layer, fx.config.hud_layer);
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Wood", "x2"]);

        let scaled = fx.draw.commands().iter().any(|command| {
            matches!(
                command,
                DrawCommand::Image { transform, .. } if transform.scale == Vec2::splat(HOVER_SCALE)
            )
        });
        assert!(scaled);
    }

    #[test]
    fn test_palette_claims_hover_and_enters_place() {
        let mut fx = Fixture::new();
        let mut hud = Hud::new(15.0);
        fx.input.press(Key::C);
        fx.tick(&mut hud, Vec2::ZERO);

        let icon = oven_icon_center(&fx.config);
        fx.point_at(icon);
        let output = fx.tick(&mut hud, Vec2::ZERO);
        assert!(output.hover_consumed);
        assert_eq!(hud.mode(), GameMode::Structures);

        fx.input.press(Key::MouseLeft);
        let output = fx.tick(&mut hud, Vec2::ZERO);
        assert!(output.hover_consumed);
        assert_eq!(hud.mode(), GameMode::Place(StructureKind::Oven));
    }

    #[test]
    fn test_closed_palette_fades_out_without_taking_clicks() {
        let mut fx = Fixture::new();
        let mut hud = Hud::new(15.0);
        fx.input.press(Key::C);
        for _ in 0..120 {
            fx.tick(&mut hud, Vec2::ZERO);
        }
        assert_eq!(hud.palette_alpha(), 1.0);

        fx.input.release(Key::C);
        fx.input.press(Key::C);
        fx.tick(&mut hud, Vec2::ZERO);
        assert_eq!(hud.mode(), GameMode::None);

        fx.point_at(oven_icon_center(&fx.config));
        fx.input.press(Key::MouseLeft);
        fx.draw.clear();
        let output = fx.tick(&mut hud, Vec2::ZERO);
        let alpha = hud.palette_alpha();
        assert!(alpha > 0.0 && alpha < 1.0);
        assert!(!output.hover_consumed);
        assert_eq!(hud.mode(), GameMode::None);

        let icons = fx
            .draw
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Image { .. }))
            .count();
        assert_eq!(icons, StructureKind::ALL.len());

        for _ in 0..120 {
            fx.tick(&mut hud, Vec2::ZERO);
        }
        assert_eq!(hud.palette_alpha(), 0.0);
        fx.draw.clear();
        fx.tick(&mut hud, Vec2::ZERO);
        assert!(fx.draw.is_empty());
    }

    #[test]
    fn test_place_spawns_on_snapped_tile() {
        let mut fx = Fixture::new();
        let mut hud = Hud::new(15.0);
        hud.mode = GameMode::Place(StructureKind::Alter);

        let output = fx.tick(&mut hud, Vec2::new(23.0, -9.0));
        assert_eq!(output.placed, None);
        let ghost = fx.draw.commands().iter().any(|command| {
            matches!(
                command,
                DrawCommand::Image { tint, space: Space::World, .. } if *tint == GHOST_TINT
            )
        });
        assert!(ghost);

        fx.input.press(Key::MouseLeft);
        let output = fx.tick(&mut hud, Vec2::new(23.0, -9.0));
        let (handle, kind) = output.placed.unwrap();
        assert_eq!(kind, StructureKind::Alter);
        assert_eq!(fx.store.get(handle).unwrap().position, Vec2::new(16.0, -16.0));
        assert_eq!(hud.mode(), GameMode::None);
        assert_eq!(fx.draw.current_space(), Space::World);
    }

    #[test]
    fn test_place_with_full_pool_returns_to_none() {
        let mut fx = Fixture::new();
        fx.store = EntityStore::new(1);
        fx.store.allocate(Entity::player()).unwrap();
        let mut hud = Hud::new(15.0);
        hud.mode = GameMode::Place(StructureKind::Oven);

        fx.input.press(Key::MouseLeft);
        let output = fx.tick(&mut hud, Vec2::ZERO);
        assert_eq!(output.placed, None);
        assert_eq!(hud.mode(), GameMode::None);
        assert_eq!(fx.store.alive_count(), 1);
    }
}
