//! # Frame Pipeline
//!
//! One tick is nine phases run in a fixed order. Each phase sees every
//! mutation made by the phases before it.
//!
//! ```text
//! ResetFrame → Camera → Hud → Select → Background → Pickup → Interact → Render → Movement
//! ```
//!
//! The HUD runs before selection so its hover claim can veto a world click.
//! A drop spawned by the interact phase is collected next tick at the
//! earliest.

use abyx_core::{
    checkerboard, select_nearest, sin_bob, Entity, EntityHandle, EntityKind, TileCoord,
};
use abyx_economy::{collect_pickups, strike, Pickup, StrikeOutcome};
use abyx_shared::constants::{BACKGROUND_TILE_RADIUS_X, BACKGROUND_TILE_RADIUS_Y};
use abyx_shared::{StructureKind, Vec2};
use abyx_ui::{Color, HudFrame, InputSource, Key, Renderer, Space, Transform2D};
use tracing::{debug, info};

use crate::events::GameEvent;
use crate::game::Game;

/// Checkerboard tile tint.
const BACKGROUND_TILE: Color = Color::new(1.0, 1.0, 1.0, 0.1);
/// Height of the resource bob, world units.
const BOB_HEIGHT: f32 = 2.0;
/// Resource bob frequency, radians per second.
const BOB_RATE: f64 = 5.0;

/// One step of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Clears the world frame.
    ResetFrame,
    /// Camera follows the player; cursor mapped to the world.
    Camera,
    /// HUD toggles, panels and placement.
    Hud,
    /// Entity under the cursor, unless the HUD claimed hover.
    Select,
    /// Checkerboard around the player.
    Background,
    /// Drops near the player are collected.
    Pickup,
    /// A click strikes the selected entity.
    Interact,
    /// Every live entity is drawn.
    Render,
    /// WASD moves the player.
    Movement,
}

impl Phase {
    /// Execution order.
    pub const ORDER: [Self; 9] = [
        Self::ResetFrame,
        Self::Camera,
        Self::Hud,
        Self::Select,
        Self::Background,
        Self::Pickup,
        Self::Interact,
        Self::Render,
        Self::Movement,
    ];

    /// Name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ResetFrame => "reset_frame",
            Self::Camera => "camera",
            Self::Hud => "hud",
            Self::Select => "select",
            Self::Background => "background",
            Self::Pickup => "pickup",
            Self::Interact => "interact",
            Self::Render => "render",
            Self::Movement => "movement",
        }
    }

    /// Runs this phase against `game`.
    pub fn run(self, game: &mut Game, ctx: &mut TickContext<'_>, report: &mut FrameReport) {
        match self {
            Self::ResetFrame => reset_frame(game),
            Self::Camera => camera(game, ctx),
            Self::Hud => hud(game, ctx, report),
            Self::Select => select(game, report),
            Self::Background => background(game, ctx),
            Self::Pickup => pickup(game, report),
            Self::Interact => interact(game, ctx, report),
            Self::Render => render(game, ctx, report),
            Self::Movement => movement(game, ctx, report),
        }
        report.phases.push(self);
    }
}

/// Collaborators and timing for one tick.
pub struct TickContext<'a> {
    /// Input for this tick.
    pub input: &'a mut dyn InputSource,
    /// Draw target for this tick.
    pub renderer: &'a mut dyn Renderer,
    /// Seconds since the previous tick, already clamped.
    pub dt: f32,
    /// Seconds since startup, for idle animation.
    pub now: f64,
}

/// What one tick did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Phases in the order they ran.
    pub phases: Vec<Phase>,
    /// Entity selected by the select phase.
    pub selected: Option<EntityHandle>,
    /// The HUD claimed the cursor.
    pub hover_consumed: bool,
    /// Drops collected.
    pub pickups: Vec<Pickup>,
    /// Strike applied by the interact phase.
    pub strike: Option<(EntityHandle, StrikeOutcome)>,
    /// Structure placed by the HUD.
    pub placed: Option<(EntityHandle, StructureKind)>,
    /// Entities drawn by the render phase.
    pub drawn: usize,
    /// Escape was pressed; the loop should stop after this tick.
    pub close_requested: bool,
}

fn reset_frame(game: &mut Game) {
    game.frame.reset();
}

fn camera(game: &mut Game, ctx: &mut TickContext<'_>) {
    let target = game.world.player_position();
    game.world.camera.follow(target, ctx.dt);
    game.frame.view = game.world.camera.view(ctx.input.window_size());
    game.frame.cursor_world = game.frame.view.screen_to_world(ctx.input.cursor());
}

fn hud(game: &mut Game, ctx: &mut TickContext<'_>, report: &mut FrameReport) {
    let world = &mut game.world;
    let output = world.hud.update(&mut HudFrame {
        input: &mut *ctx.input,
        renderer: &mut *ctx.renderer,
        atlas: &game.atlas,
        ledger: &world.ledger,
        store: &mut world.store,
        cursor_world: game.frame.cursor_world,
        config: &game.config,
        dt: ctx.dt,
    });

    game.frame.hover_consumed |= output.hover_consumed;
    report.hover_consumed = game.frame.hover_consumed;

    if let Some((handle, kind)) = output.placed {
        if let Some(entity) = game.world.store.get(handle) {
            game.emit(GameEvent::StructurePlaced {
                handle,
                kind,
                position: entity.position,
            });
        }
        report.placed = Some((handle, kind));
    }
}

fn select(game: &mut Game, report: &mut FrameReport) {
    if game.frame.hover_consumed {
        return;
    }
    game.frame.selected = select_nearest(
        &game.world.store,
        game.frame.cursor_world,
        game.config.click_radius,
        Entity::is_destructible,
    );
    report.selected = game.frame.selected;
}

fn background(game: &Game, ctx: &mut TickContext<'_>) {
    let tile = game.config.tile_size;
    let center = TileCoord::from_world(game.world.player_position(), tile);
    let half = Vec2::splat(tile * 0.5);

    ctx.renderer.push_layer(game.config.world_layer);
    ctx.renderer.set_space(Space::World);
    for coord in checkerboard(center, BACKGROUND_TILE_RADIUS_X, BACKGROUND_TILE_RADIUS_Y) {
        ctx.renderer
            .submit_rect(coord.to_world(tile) - half, Vec2::splat(tile), BACKGROUND_TILE);
    }
    ctx.renderer.pop_layer();
}

fn pickup(game: &mut Game, report: &mut FrameReport) {
    let player = game.world.player_position();
    let picked = collect_pickups(
        &mut game.world.store,
        &mut game.world.ledger,
        player,
        game.config.pickup_radius,
    );
    for collected in &picked {
        game.emit(GameEvent::ResourceCollected {
            handle: collected.handle,
            kind: collected.kind,
            total: collected.total,
        });
    }
    report.pickups = picked;
}

fn interact(game: &mut Game, ctx: &mut TickContext<'_>, report: &mut FrameReport) {
    if !ctx.input.is_key_just_pressed(Key::MouseLeft) {
        return;
    }
    ctx.input.consume(Key::MouseLeft);

    let Some(target) = game.frame.selected else {
        return;
    };
    let outcome = strike(&mut game.world.store, target);
    match outcome {
        StrikeOutcome::Damaged { remaining } => {
            game.emit(GameEvent::EntityDamaged {
                handle: target,
                health_remaining: remaining,
            });
        }
        StrikeOutcome::Depleted {
            kind,
            position,
            drop,
        } => {
            game.emit(GameEvent::EntityDepleted {
                handle: target,
                position,
                yield_kind: kind,
                drop,
            });
            if let Some(handle) = drop {
                game.emit(GameEvent::EntitySpawned {
                    handle,
                    kind: EntityKind::Resource(kind),
                    position,
                });
            }
        }
        StrikeOutcome::Indestructible | StrikeOutcome::Stale => {
            debug!(%target, ?outcome, "strike had no effect");
        }
    }
    report.strike = Some((target, outcome));
}

fn render(game: &Game, ctx: &mut TickContext<'_>, report: &mut FrameReport) {
    let tile = game.config.tile_size;
    let bob = BOB_HEIGHT * sin_bob(ctx.now, BOB_RATE);

    ctx.renderer.push_layer(game.config.world_layer);
    ctx.renderer.set_space(Space::World);
    for (handle, entity) in game.world.store.iter() {
        let sprite = game.atlas.get(entity.sprite);
        let lift = if entity.is_resource() { bob } else { 0.0 };
        let xform = Transform2D::from_translation(entity.position)
            .translate(Vec2::new(-sprite.size.x * 0.5, lift - tile * 0.5));
        let tint = if game.frame.selected == Some(handle) {
            Color::GREEN
        } else {
            Color::WHITE
        };
        ctx.renderer.submit_image(sprite.image, xform, sprite.size, tint);
        report.drawn += 1;
    }
    ctx.renderer.pop_layer();
}

fn movement(game: &mut Game, ctx: &mut TickContext<'_>, report: &mut FrameReport) {
    if ctx.input.is_key_just_pressed(Key::Escape) {
        info!("close requested");
        report.close_requested = true;
    }

    let input = &*ctx.input;
    let mut axis = Vec2::ZERO;
    if input.is_key_down(Key::A) {
        axis.x = -1.0;
    }
    if input.is_key_down(Key::D) {
        axis.x = 1.0;
    }
    if input.is_key_down(Key::S) {
        axis.y = -1.0;
    }
    if input.is_key_down(Key::W) {
        axis.y = 1.0;
    }

    let step = axis.normalize_or_zero() * (game.config.player_speed * ctx.dt);
    if let Some(player) = game.world.store.get_mut(game.world.player) {
        player.position += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_fixed() {
        assert_eq!(Phase::ORDER.len(), 9);
        assert_eq!(Phase::ORDER[0], Phase::ResetFrame);
        assert_eq!(Phase::ORDER[2], Phase::Hud);
        assert_eq!(Phase::ORDER[3], Phase::Select);
        assert_eq!(Phase::ORDER[8], Phase::Movement);
        let names: Vec<_> = Phase::ORDER.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            [
                "reset_frame",
                "camera",
                "hud",
                "select",
                "background",
                "pickup",
                "interact",
                "render",
                "movement",
            ]
        );
    }
}
