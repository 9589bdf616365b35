//! Run state machine: MENU -> PLAYING -> DEAD
//!
//! [`Run`] owns the current [`GameState`] and replaces it wholesale whenever
//! a PLAYING session begins, so player, platforms, pickup and score are
//! always reset together. MENU and DEAD are plain states: the caller reads
//! [`Run::phase`], presents the matching screen and reports the choice.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;
use super::state::{GamePhase, GameState};
use super::tick::{TickInput, tick};
use crate::highscores::{ScoreStore, submit_score};
use crate::tuning::Tuning;

/// Choices on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuChoice {
    Start,
    Quit,
}

/// Choices on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadChoice {
    Restart,
    Menu,
    Quit,
}

/// What the game-over screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathReport {
    pub score: u64,
    pub best_score: u64,
    pub new_best: bool,
}

/// The run: phase, current session and the best-score store
pub struct Run<S: ScoreStore> {
    phase: GamePhase,
    state: GameState,
    tuning: Tuning,
    store: S,
    /// Source of per-session course seeds
    seeds: Pcg32,
    last_death: Option<DeathReport>,
    terminated: bool,
    sessions: u32,
}

impl<S: ScoreStore> Run<S> {
    /// New run in the MENU phase. Course seeds derive from `tuning.seed`, or
    /// from OS entropy when unset.
    pub fn new(tuning: Tuning, store: S) -> Self {
        let tuning = tuning.sanitized();
        let run_seed = tuning.seed.unwrap_or_else(|| rand::rng().random());
        let mut seeds = Pcg32::seed_from_u64(run_seed);
        let state = GameState::new(seeds.random(), tuning.clone());
        log::info!("Run created (seed {})", run_seed);

        Self {
            phase: GamePhase::Menu,
            state,
            tuning,
            store,
            seeds,
            last_death: None,
            terminated: false,
            sessions: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current (or most recent) session
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Outcome of the most recent death
    pub fn last_death(&self) -> Option<&DeathReport> {
        self.last_death.as_ref()
    }

    /// A quit was requested; no further transitions happen
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Number of PLAYING sessions started so far
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Handle a start-screen choice. Ignored outside MENU.
    pub fn choose_menu(&mut self, choice: MenuChoice) {
        if self.terminated || self.phase != GamePhase::Menu {
            log::debug!("Ignoring menu choice {:?} in {:?}", choice, self.phase);
            return;
        }
        match choice {
            MenuChoice::Start => self.begin_session(),
            MenuChoice::Quit => self.quit(),
        }
    }

    /// Handle a game-over choice. Ignored outside DEAD.
    pub fn choose_dead(&mut self, choice: DeadChoice) {
        if self.terminated || self.phase != GamePhase::Dead {
            log::debug!("Ignoring game-over choice {:?} in {:?}", choice, self.phase);
            return;
        }
        match choice {
            DeadChoice::Restart => self.begin_session(),
            DeadChoice::Menu => {
                log::info!("Back to menu");
                self.phase = GamePhase::Menu;
            }
            DeadChoice::Quit => self.quit(),
        }
    }

    /// Global quit signal, valid in any phase
    pub fn quit(&mut self) {
        if !self.terminated {
            log::info!("Quit requested in {:?}", self.phase);
            self.terminated = true;
        }
    }

    /// Advance one frame. Only PLAYING simulates; the quit signal is honored
    /// everywhere. Returns the phase after the tick.
    pub fn tick(&mut self, input: &TickInput, dt_ms: u32) -> GamePhase {
        if input.quit {
            self.quit();
        }
        if self.terminated || self.phase != GamePhase::Playing {
            return self.phase;
        }

        tick(&mut self.state, input, dt_ms);

        if self.state.player_fell() {
            self.die();
        }
        self.phase
    }

    /// Read-only view for the render sink
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.phase, &self.state, self.last_death)
    }

    fn begin_session(&mut self) {
        let seed = self.seeds.random();
        self.state = GameState::new(seed, self.tuning.clone());
        self.phase = GamePhase::Playing;
        self.sessions += 1;
        log::info!("Session {} started (course seed {})", self.sessions, seed);
    }

    fn die(&mut self) {
        let score = self.state.score.score;
        let submission = submit_score(&mut self.store, score);
        self.last_death = Some(DeathReport {
            score,
            best_score: submission.best,
            new_best: submission.new_best,
        });
        self.phase = GamePhase::Dead;
        log::info!(
            "Player died: score {}, best {} after {:.1}s",
            score,
            submission.best,
            self.state.elapsed_ms as f64 / 1000.0
        );
    }
}
