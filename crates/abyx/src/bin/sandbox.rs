//! # ABYX Sandbox
//!
//! Headless session: an autopilot drives the input, the simulation runs on
//! the main thread and a render thread receives every finished draw list
//! through the frame fence.
//!
//! The autopilot chops the nearest tree, walks onto the wood it drops,
//! builds an oven next to the player and presses Escape.
//!
//! Run with: `cargo run --bin abyx_sandbox -- [config.toml]`
//! Log level: `RUST_LOG=abyx=debug`

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use abyx::{
    frame_fence, FrameReport, FrameStats, Game, GameError, GameLoop, GameLoopConfig, GameResult,
    TickContext,
};
use abyx_core::{EntityHandle, EntityKind};
use abyx_economy::StrikeOutcome;
use abyx_shared::{GameConfig, ResourceKind, SpriteId, Vec2};
use abyx_ui::hud::{PALETTE_PADDING, PALETTE_Y, SLOT_SIZE};
use abyx_ui::{AssetManifest, DrawList, GameMode, InputSource, InputState, Key};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Frames in flight between simulation and render thread.
const FENCE_DEPTH: usize = 2;
/// Give up after this many frames.
const FRAME_LIMIT: u64 = 60 * 60;
/// Frames between autopilot clicks.
const CLICK_EVERY: u64 = 6;
/// Close enough when walking to a point.
const ARRIVE_DISTANCE: f32 = 2.0;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("abyx=info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "sandbox failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> GameResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading configuration");
            GameConfig::load(path)?
        }
        None => GameConfig::default(),
    };

    let mut assets = AssetManifest::with_all_sprites(16, 16);
    assets.insert(SpriteId::Player.path(), 10, 14);
    assets.insert(SpriteId::Stone.path(), 8, 8);
    assets.insert(SpriteId::Wood.path(), 8, 8);

    let window = Vec2::new(config.window_width, config.window_height);
    let mut game_loop = GameLoop::new(GameLoopConfig::from_game_config(&config));
    let mut game = Game::new(config, &mut assets)?;
    let events = game.events();

    let (submitter, consumer) = frame_fence(FENCE_DEPTH);
    let render = thread::spawn(move || {
        let mut frames = 0_u64;
        let mut commands = 0_usize;
        for frame in consumer.frames() {
            frames += 1;
            commands += frame.draw_list.len();
        }
        (frames, commands)
    });

    let mut input = InputState::new(window);
    let mut pilot = Autopilot::new(&game);

    loop {
        let time = game_loop.begin_frame();
        input.begin_frame();
        pilot.drive(&game, time.index, &mut input);

        let mut draw_list = DrawList::new();
        let started = Instant::now();
        let report = game.tick(&mut TickContext {
            input: &mut input,
            renderer: &mut draw_list,
            dt: time.dt,
            now: time.now,
        });
        let tick_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        pilot.observe(&report);
        if !submitter.submit(time.index, draw_list) {
            warn!("render thread gone");
            break;
        }
        game_loop.end_frame(FrameStats {
            frame: time.index,
            tick_us,
            drawn: report.drawn,
        });

        if report.close_requested {
            break;
        }
        if time.index >= FRAME_LIMIT {
            warn!(frames = FRAME_LIMIT, step = ?pilot.step, "frame limit reached");
            break;
        }
    }

    drop(submitter);
    let (frames, commands) = render.join().map_err(|_| GameError::RenderThread)?;

    let ledger = &game.world().ledger;
    info!(
        frames,
        commands,
        events = events.pending_count(),
        stone = ledger.count(ResourceKind::Stone),
        wood = ledger.count(ResourceKind::Wood),
        entities = game.world().store.alive_count(),
        "session finished"
    );
    game_loop.stats().log_summary();
    Ok(())
}

/// What the autopilot is doing.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    /// Clicking a tree until it falls.
    Chop(EntityHandle),
    /// Walking to a point until something is picked up.
    Collect(Vec2),
    /// Opening the structure palette.
    OpenPalette,
    /// Clicking the oven icon.
    PickOven,
    /// Clicking next to the player to place it.
    Place,
    /// Pressing Escape.
    Quit,
}

struct Autopilot {
    step: Step,
}

impl Autopilot {
    fn new(game: &Game) -> Self {
        let player = game.world().player_position();
        let nearest_tree = game
            .world()
            .store
            .iter()
            .filter(|(_, entity)| matches!(entity.kind, EntityKind::Tree { .. }))
            .min_by(|(_, a), (_, b)| {
                a.position
                    .distance(player)
                    .total_cmp(&b.position.distance(player))
            })
            .map(|(handle, _)| handle);

        let step = nearest_tree.map_or(Step::OpenPalette, Step::Chop);
        info!(?step, "autopilot engaged");
        Self { step }
    }

    /// Sets this frame's input.
    fn drive(&mut self, game: &Game, frame: u64, input: &mut InputState) {
        for key in [Key::A, Key::D, Key::S, Key::W, Key::MouseLeft, Key::C] {
            input.release(key);
        }
        let view = game.world().camera.view(input.window_size());
        let click = frame % CLICK_EVERY == 0;

        match self.step {
            Step::Chop(tree) => {
                let Some(entity) = game.world().store.get(tree) else {
                    self.step = Step::OpenPalette;
                    return;
                };
                input.set_cursor(view.world_to_screen(entity.position));
                if click {
                    input.press(Key::MouseLeft);
                }
            }
            Step::Collect(target) => {
                let offset = target - game.world().player_position();
                if offset.x > ARRIVE_DISTANCE {
                    input.press(Key::D);
                } else if offset.x < -ARRIVE_DISTANCE {
                    input.press(Key::A);
                }
                if offset.y > ARRIVE_DISTANCE {
                    input.press(Key::W);
                } else if offset.y < -ARRIVE_DISTANCE {
                    input.press(Key::S);
                }
            }
            Step::OpenPalette => {
                input.press(Key::C);
                self.step = Step::PickOven;
            }
            Step::PickOven => {
                if matches!(game.world().hud.mode(), GameMode::Place(_)) {
                    self.step = Step::Place;
                    return;
                }
                let config = game.config();
                let width = SLOT_SIZE * 2.0 + PALETTE_PADDING;
                let icon = Vec2::new(
                    config.screen_width * 0.5 - width * 0.5 + SLOT_SIZE * 0.5,
                    PALETTE_Y + SLOT_SIZE * 0.5,
                );
                let scale = Vec2::new(
                    config.window_width / config.screen_width,
                    config.window_height / config.screen_height,
                );
                input.set_cursor(icon.mul_elem(scale));
                if click {
                    input.press(Key::MouseLeft);
                }
            }
            Step::Place => {
                let spot = game.world().player_position() + Vec2::new(32.0, 0.0);
                input.set_cursor(view.world_to_screen(spot));
                if click {
                    input.press(Key::MouseLeft);
                }
            }
            Step::Quit => input.press(Key::Escape),
        }
    }

    /// Advances on what the tick reported.
    fn observe(&mut self, report: &FrameReport) {
        let next = match (self.step, report) {
            (
                Step::Chop(_),
                FrameReport {
                    strike: Some((_, StrikeOutcome::Depleted { position, .. })),
                    ..
                },
            ) => Some(Step::Collect(*position)),
            (Step::Collect(_), report) if !report.pickups.is_empty() => Some(Step::OpenPalette),
            (Step::Place, FrameReport { placed: Some(_), .. }) => Some(Step::Quit),
            _ => None,
        };
        if let Some(next) = next {
            info!(from = ?self.step, to = ?next, "autopilot step");
            self.step = next;
        }
    }
}
