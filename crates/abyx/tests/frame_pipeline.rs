//! # Frame Pipeline Scenarios
//!
//! Whole ticks through `Game::tick` with a feedable input and a recording
//! draw list. Each scenario builds a small hand-placed world around a player
//! standing at the origin, so the camera stays put and cursor pixels map
//! straight to world positions.

use abyx::{FrameReport, Game, GameError, GameEvent, Phase, TickContext, World};
use abyx_core::{Entity, EntityHandle, EntityKind};
use abyx_economy::StrikeOutcome;
use abyx_shared::{GameConfig, ResourceKind, SpriteId, StructureKind, Vec2};
use abyx_ui::hud::{PALETTE_PADDING, PALETTE_Y, SLOT_SIZE};
use abyx_ui::{
    AssetManifest, Color, DrawCommand, DrawList, GameMode, InputSource, InputState, Key,
    SpriteAtlas, UiError,
};

const DT: f32 = 1.0 / 60.0;

struct Harness {
    game: Game,
    input: InputState,
    draw: DrawList,
}

impl Harness {
    fn new(setup: impl FnOnce(&mut World)) -> Self {
        let config = GameConfig::default();
        let mut world = World::empty(&config).unwrap();
        setup(&mut world);
        let atlas = SpriteAtlas::load(&mut AssetManifest::with_all_sprites(16, 16)).unwrap();
        let window = Vec2::new(config.window_width, config.window_height);
        Self {
            game: Game::with_world(config, world, atlas),
            input: InputState::new(window),
            draw: DrawList::new(),
        }
    }

    fn point_at_world(&mut self, world: Vec2) {
        let view = self.game.world().camera.view(self.input.window_size());
        self.input.set_cursor(view.world_to_screen(world));
    }

    fn point_at_hud(&mut self, hud: Vec2) {
        let config = self.game.config();
        let scale = Vec2::new(
            config.window_width / config.screen_width,
            config.window_height / config.screen_height,
        );
        self.input.set_cursor(hud.mul_elem(scale));
    }

    fn tap(&mut self, key: Key) {
        self.input.release(key);
        self.input.press(key);
    }

    fn tick_with(&mut self, dt: f32) -> FrameReport {
        self.draw.clear();
        let report = self.game.tick(&mut TickContext {
            input: &mut self.input,
            renderer: &mut self.draw,
            dt,
            now: 0.0,
        });
        self.input.begin_frame();
        self.input.release(Key::MouseLeft);
        report
    }

    fn tick(&mut self) -> FrameReport {
        self.tick_with(DT)
    }

    fn health(&self, handle: EntityHandle) -> Option<i32> {
        self.game.world().store.get(handle).and_then(Entity::health)
    }
}

fn oven_icon() -> Vec2 {
    let width = SLOT_SIZE * 2.0 + PALETTE_PADDING;
    Vec2::new(
        GameConfig::default().screen_width * 0.5 - width * 0.5 + SLOT_SIZE * 0.5,
        PALETTE_Y + SLOT_SIZE * 0.5,
    )
}

#[test]
fn test_every_tick_runs_the_nine_phases_in_order() {
    let mut h = Harness::new(|_| {});
    let report = h.tick();
    assert_eq!(report.phases, Phase::ORDER.to_vec());
    assert_eq!(h.game.tick_count(), 1);
}

#[test]
fn test_tree_and_rock_scenario() {
    let tree_pos = Vec2::new(48.0, 48.0);
    let rock_pos = Vec2::new(-48.0, 48.0);
    let mut tree = None;
    let mut rock = None;
    let mut h = Harness::new(|world| {
        tree = Some(world.store.allocate(Entity::tree(tree_pos, 3)).unwrap());
        rock = Some(world.store.allocate(Entity::rock(rock_pos, 3)).unwrap());
    });
    let (tree, rock) = (tree.unwrap(), rock.unwrap());
    let events = h.game.events();

    // hovering selects and highlights the tree, not the rock
    h.point_at_world(tree_pos);
    let report = h.tick();
    assert_eq!(report.selected, Some(tree));
    assert_eq!(report.drawn, 3);
    let tree_image = h.game.atlas().get(SpriteId::Tree0).image;
    let highlighted: Vec<_> = h
        .draw
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Image { image, tint, .. } if *tint == Color::GREEN => Some(*image),
            _ => None,
        })
        .collect();
    assert_eq!(highlighted, vec![tree_image]);

    // three clicks: 3 -> 2 -> 1 -> gone
    h.tap(Key::MouseLeft);
    let report = h.tick();
    assert_eq!(report.strike, Some((tree, StrikeOutcome::Damaged { remaining: 2 })));
    assert_eq!(h.health(tree), Some(2));

    h.tap(Key::MouseLeft);
    h.tick();
    assert_eq!(h.health(tree), Some(1));

    h.tap(Key::MouseLeft);
    let report = h.tick();
    let Some((_, StrikeOutcome::Depleted { kind, position, drop: Some(drop) })) = report.strike
    else {
        panic!("third click should fell the tree: {:?}", report.strike);
    };
    assert_eq!(kind, ResourceKind::Wood);
    assert_eq!(position, tree_pos);
    assert!(!h.game.world().store.is_alive(tree));

    let wood = h.game.world().store.get(drop).unwrap();
    assert_eq!(wood.kind, EntityKind::Resource(ResourceKind::Wood));
    assert_eq!(wood.position, tree_pos);

    // the rock was never touched
    assert_eq!(h.health(rock), Some(3));

    let events = events.drain();
    assert_eq!(
        events,
        vec![
            GameEvent::EntityDamaged { handle: tree, health_remaining: 2 },
            GameEvent::EntityDamaged { handle: tree, health_remaining: 1 },
            GameEvent::EntityDepleted {
                handle: tree,
                position: tree_pos,
                yield_kind: ResourceKind::Wood,
                drop: Some(drop),
            },
            GameEvent::EntitySpawned {
                handle: drop,
                kind: EntityKind::Resource(ResourceKind::Wood),
                position: tree_pos,
            },
        ]
    );
}

#[test]
fn test_rock_drops_stone() {
    let rock_pos = Vec2::new(-64.0, 0.0);
    let mut h = Harness::new(|world| {
        world.store.allocate(Entity::rock(rock_pos, 1)).unwrap();
    });
    h.point_at_world(rock_pos);
    h.tap(Key::MouseLeft);
    let report = h.tick();
    assert!(matches!(
        report.strike,
        Some((_, StrikeOutcome::Depleted { kind: ResourceKind::Stone, drop: Some(_), .. }))
    ));
}

#[test]
fn test_click_on_empty_ground_does_nothing() {
    let mut h = Harness::new(|world| {
        world.store.allocate(Entity::tree(Vec2::new(100.0, 100.0), 3)).unwrap();
    });
    h.point_at_world(Vec2::new(-100.0, -100.0));
    h.tap(Key::MouseLeft);
    let report = h.tick();
    assert_eq!(report.selected, None);
    assert_eq!(report.strike, None);
}

#[test]
fn test_pickup_radius_is_strict_and_follows_the_player() {
    let mut near = None;
    let mut far = None;
    let mut h = Harness::new(|world| {
        near = Some(
            world
                .store
                .allocate(Entity::resource(ResourceKind::Wood, Vec2::new(39.0, 0.0)))
                .unwrap(),
        );
        far = Some(
            world
                .store
                .allocate(Entity::resource(ResourceKind::Wood, Vec2::new(41.0, 0.0)))
                .unwrap(),
        );
    });
    let (near, far) = (near.unwrap(), far.unwrap());

    let report = h.tick();
    assert_eq!(report.pickups.len(), 1);
    assert_eq!(report.pickups[0].handle, near);
    assert_eq!(h.game.world().ledger.count(ResourceKind::Wood), 1);

    for _ in 0..5 {
        assert!(h.tick().pickups.is_empty());
    }
    assert!(h.game.world().store.is_alive(far));

    // walk two units right; collected on the following tick
    h.input.press(Key::D);
    assert!(h.tick_with(0.02).pickups.is_empty());
    h.input.release(Key::D);
    let report = h.tick();
    assert_eq!(report.pickups.len(), 1);
    assert_eq!(report.pickups[0].handle, far);
    assert_eq!(h.game.world().ledger.count(ResourceKind::Wood), 2);
}

#[test]
fn test_equidistant_candidates_lowest_slot_wins() {
    let mut first = None;
    let mut h = Harness::new(|world| {
        first = Some(world.store.allocate(Entity::tree(Vec2::new(10.0, 0.0), 3)).unwrap());
        world.store.allocate(Entity::tree(Vec2::new(-10.0, 0.0), 3)).unwrap();
    });
    h.point_at_world(Vec2::ZERO);
    let report = h.tick();
    assert_eq!(report.selected, first);
}

#[test]
fn test_palette_hover_claims_the_click() {
    let mut h = Harness::new(|_| {});
    h.tap(Key::C);
    h.tick();
    assert_eq!(h.game.world().hud.mode(), GameMode::Structures);

    // a tree right under the oven icon
    h.point_at_hud(oven_icon());
    let view = h.game.world().camera.view(h.input.window_size());
    let under_icon = view.screen_to_world(h.input.cursor());
    let tree = h
        .game
        .world_mut()
        .store
        .allocate(Entity::tree(under_icon, 3))
        .unwrap();

    h.tap(Key::MouseLeft);
    let report = h.tick();
    assert!(report.hover_consumed);
    assert_eq!(report.selected, None);
    assert_eq!(report.strike, None);
    assert_eq!(h.health(tree), Some(3));
    assert_eq!(h.game.world().hud.mode(), GameMode::Place(StructureKind::Oven));
}

#[test]
fn test_placement_spawns_on_snapped_tile_and_eats_the_click() {
    let tree_pos = Vec2::new(32.0, 32.0);
    let mut tree = None;
    let mut h = Harness::new(|world| {
        tree = Some(world.store.allocate(Entity::tree(tree_pos, 3)).unwrap());
    });
    let tree = tree.unwrap();
    let events = h.game.events();

    h.tap(Key::C);
    h.tick();
    h.point_at_hud(oven_icon());
    h.tap(Key::MouseLeft);
    h.tick();
    assert_eq!(h.game.world().hud.mode(), GameMode::Place(StructureKind::Oven));

    h.point_at_world(Vec2::new(35.0, 30.0));
    h.tap(Key::MouseLeft);
    let report = h.tick();

    let (oven, kind) = report.placed.unwrap();
    assert_eq!(kind, StructureKind::Oven);
    let placed = h.game.world().store.get(oven).unwrap();
    assert_eq!(placed.kind, EntityKind::Oven);
    assert_eq!(placed.position, tree_pos);
    assert_eq!(h.game.world().hud.mode(), GameMode::None);

    // the tree under the cursor is selected but not struck
    assert_eq!(report.selected, Some(tree));
    assert_eq!(report.strike, None);
    assert_eq!(h.health(tree), Some(3));

    assert!(events.drain().contains(&GameEvent::StructurePlaced {
        handle: oven,
        kind: StructureKind::Oven,
        position: tree_pos,
    }));
}

#[test]
fn test_movement_is_normalized_and_right_up_win() {
    let mut h = Harness::new(|_| {});
    h.input.press(Key::W);
    h.input.press(Key::D);
    h.tick_with(0.1);
    let pos = h.game.world().player_position();
    let expected = 10.0 / 2.0_f32.sqrt();
    assert!((pos.x - expected).abs() < 1e-4 && (pos.y - expected).abs() < 1e-4);

    h.input.release(Key::W);
    h.input.press(Key::A);
    h.tick_with(0.1);
    let next = h.game.world().player_position();
    assert!((next.x - (pos.x + 10.0)).abs() < 1e-4);
    assert!((next.y - pos.y).abs() < 1e-6);
}

#[test]
fn test_escape_finishes_the_tick_then_requests_close() {
    let mut h = Harness::new(|_| {});
    h.input.press(Key::Escape);
    h.input.press(Key::D);
    let report = h.tick_with(0.1);
    assert!(report.close_requested);
    assert_eq!(report.phases.len(), 9);
    assert!(h.game.world().player_position().x > 0.0);
}

#[test]
fn test_new_game_seeds_the_world() {
    let mut assets = AssetManifest::with_all_sprites(16, 16);
    let game = Game::new(GameConfig::default(), &mut assets).unwrap();
    assert_eq!(game.world().store.alive_count(), 22);
    assert_eq!(game.world().store.capacity(), 1024);
}

#[test]
fn test_missing_sprite_fails_startup() {
    let mut assets = AssetManifest::with_all_sprites(16, 16);
    assets.remove(SpriteId::Player.path());
    let result = Game::new(GameConfig::default(), &mut assets);
    assert!(matches!(
        result,
        Err(GameError::Ui(UiError::MissingAsset { ref path })) if path == SpriteId::Player.path()
    ));
}

#[test]
fn test_invalid_config_fails_startup() {
    let mut assets = AssetManifest::with_all_sprites(16, 16);
    let config = GameConfig {
        click_radius: 0.0,
        ..GameConfig::default()
    };
    assert!(matches!(
        Game::new(config, &mut assets),
        Err(GameError::Config(_))
    ));
}

#[test]
fn test_negative_spawn_spread_fails_startup_without_panicking() {
    let mut assets = AssetManifest::with_all_sprites(16, 16);
    let config = GameConfig {
        spawn_spread: -5.0,
        ..GameConfig::default()
    };
    assert!(matches!(
        Game::new(config, &mut assets),
        Err(GameError::Config(_))
    ));
}
