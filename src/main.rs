//! Endless Runner entry point
//!
//! Native builds run the simulation headless: a simple autopilot plays one
//! session at a fixed 60 FPS cadence and the outcome is logged. Windowed and
//! web frontends drive `endless_runner::sim::Run` the same way, feeding it
//! input from `platform::InputState` and drawing its `Snapshot`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use endless_runner::Tuning;
    use endless_runner::platform::storage::BEST_SCORE_FILE;
    use endless_runner::platform::{Clock, FileScoreStore, FixedClock};
    use endless_runner::sim::{GamePhase, MenuChoice, Run};
    use endless_runner::tuning::TUNING_ENV_VAR;

    /// Give up on a session that survives this long
    const TIME_LIMIT_MS: u64 = 5 * 60 * 1000;

    env_logger::init();
    log::info!("Endless Runner (headless) starting...");

    let tuning = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(TUNING_ENV_VAR).ok())
        .map(Tuning::load_or_default)
        .unwrap_or_default();

    let mut run = Run::new(tuning, FileScoreStore::new(BEST_SCORE_FILE));
    let mut clock = FixedClock::at_fps(60);

    run.choose_menu(MenuChoice::Start);
    while run.phase() == GamePhase::Playing && run.state().elapsed_ms < TIME_LIMIT_MS {
        let input = autopilot::decide(run.state());
        run.tick(&input, clock.tick());
    }

    match run.last_death() {
        Some(report) => {
            let marker = if report.new_best { " (new best!)" } else { "" };
            println!("Score: {}  Best: {}{}", report.score, report.best_score, marker);
        }
        None => println!(
            "Survived {}s with score {}",
            run.state().elapsed_ms / 1000,
            run.state().score.score
        ),
    }

    run.quit();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web frontends embed the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use endless_runner::sim::{CollisionBox, GameState, TickInput};

    /// How far ahead of the collision box to look for ground (pixels)
    const LOOK_AHEAD: f32 = 40.0;

    /// Jump when the ground ends just ahead, and spend the double jump when
    /// falling with nothing underneath.
    pub fn decide(state: &GameState) -> TickInput {
        let player = &state.player;
        let hitbox = CollisionBox::for_player(player);
        let platforms = &state.platforms;

        let ground_ahead = platforms
            .ground_under(hitbox.right(), hitbox.right() + LOOK_AHEAD)
            .is_some();
        let ground_below = platforms.ground_under(hitbox.x, hitbox.right()).is_some();

        let jump_pressed = if player.on_ground {
            !ground_ahead
        } else {
            player.vel.y > 0.0 && !ground_below && player.can_jump()
        };

        TickInput {
            jump_pressed,
            // Lean into the scroll so the next platform arrives sooner
            move_right_held: !player.on_ground && !ground_below,
            ..Default::default()
        }
    }
}
