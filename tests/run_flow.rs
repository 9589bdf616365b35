//! End-to-end runs through the public API: input provider, clock, run
//! state machine and score store together.

use endless_runner::platform::{Clock, FixedClock, InputState, Key};
use endless_runner::sim::{DeadChoice, GameEvent, GamePhase, JumpKind, MenuChoice, Run};
use endless_runner::{MemoryScoreStore, Tuning};

/// One continuous strip of ground: nobody ever falls
fn flat_course() -> Tuning {
    Tuning {
        gap_min: 0,
        gap_max: 0,
        platform_height_min: 80,
        platform_height_max: 80,
        seed: Some(2024),
        ..Default::default()
    }
}

fn play_until<F>(
    run: &mut Run<MemoryScoreStore>,
    input: &mut InputState,
    max_ms: u64,
    mut done: F,
) where
    F: FnMut(&Run<MemoryScoreStore>) -> bool,
{
    let mut clock = FixedClock::at_fps(60);
    let mut elapsed = 0u64;
    while !done(run) && elapsed < max_ms {
        let dt = clock.tick();
        run.tick(&input.take_tick_input(), dt);
        elapsed += dt as u64;
    }
}

#[test]
fn idle_player_dies_and_records_best_once() {
    let tuning = Tuning {
        seed: Some(77),
        ..Default::default()
    };
    let mut run = Run::new(tuning, MemoryScoreStore::with_best(0));
    let mut input = InputState::new();

    run.choose_menu(MenuChoice::Start);
    play_until(&mut run, &mut input, 120_000, |r| r.phase() != GamePhase::Playing);

    assert_eq!(run.phase(), GamePhase::Dead);
    let report = *run.last_death().expect("death report");
    assert_eq!(report.score, run.state().score.score);
    assert!(run.state().player.pos.y > run.tuning().screen_height);
    assert_eq!(run.store().loads.get(), 1);
    assert_eq!(run.store().writes, u32::from(report.new_best));

    // Dead is modal: more frames change nothing
    play_until(&mut run, &mut input, 1_000, |_| false);
    assert_eq!(run.store().loads.get(), 1);
}

#[test]
fn restart_matches_a_fresh_session() {
    let tuning = Tuning {
        seed: Some(31),
        ..Default::default()
    };
    let mut run = Run::new(tuning, MemoryScoreStore::default());
    run.choose_menu(MenuChoice::Start);
    let fresh = run.state().player.clone();
    let first_seed = run.state().seed;

    let mut input = InputState::new();
    input.key_down(Key::Right);
    play_until(&mut run, &mut input, 120_000, |r| r.phase() == GamePhase::Dead);
    assert_eq!(run.phase(), GamePhase::Dead);

    run.choose_dead(DeadChoice::Restart);
    assert_eq!(run.phase(), GamePhase::Playing);
    assert_eq!(run.state().player, fresh);
    assert_ne!(run.state().seed, first_seed);
    assert_eq!(run.state().score.score, 0);
    assert_eq!(run.state().pickups.next_spawn_threshold, 10);
    assert_eq!(run.sessions(), 2);
}

#[test]
fn missed_pickup_moves_threshold_once() {
    // Pickup floats far above the runner's reach
    let tuning = Tuning {
        pickup_height_offset: 400.0,
        ..flat_course()
    };
    let mut run = Run::new(tuning, MemoryScoreStore::default());
    let mut input = InputState::new();
    run.choose_menu(MenuChoice::Start);

    let mut spawned = 0;
    let mut expired = 0;
    let mut clock = FixedClock::new(20);
    while run.state().score.score < 19 {
        run.tick(&input.take_tick_input(), clock.tick());
        for event in &run.state().events {
            match event {
                GameEvent::PickupSpawned => spawned += 1,
                GameEvent::PickupExpired => expired += 1,
                _ => {}
            }
        }
    }

    assert_eq!(run.phase(), GamePhase::Playing);
    assert_eq!(spawned, 1);
    assert_eq!(expired, 1);
    assert_eq!(run.state().pickups.next_spawn_threshold, 20);
    assert!(!run.state().player.double_jump_available);
}

#[test]
fn collected_pickup_enables_double_jump() {
    let mut run = Run::new(flat_course(), MemoryScoreStore::default());
    let mut input = InputState::new();
    run.choose_menu(MenuChoice::Start);

    play_until(&mut run, &mut input, 30_000, |r| {
        r.state().player.double_jump_available
    });
    assert!(run.state().player.double_jump_available);
    assert!(run.state().pickups.active().is_none());

    // Ground jump, then a second press mid-air
    input.key_down(Key::Jump);
    run.tick(&input.take_tick_input(), 16);
    input.key_up(Key::Jump);
    run.tick(&input.take_tick_input(), 16);
    input.key_down(Key::Jump);
    run.tick(&input.take_tick_input(), 16);
    assert!(run.state().events.contains(&GameEvent::Jumped(JumpKind::Double)));

    // A third press does nothing until landing
    input.key_up(Key::Jump);
    input.key_down(Key::Jump);
    run.tick(&input.take_tick_input(), 16);
    assert!(
        !run.state()
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Jumped(_)))
    );
}

#[test]
fn dead_to_menu_to_quit() {
    let tuning = Tuning {
        seed: Some(5),
        ..Default::default()
    };
    let mut run = Run::new(tuning, MemoryScoreStore::with_best(1_000));
    let mut input = InputState::new();
    run.choose_menu(MenuChoice::Start);
    play_until(&mut run, &mut input, 120_000, |r| r.phase() == GamePhase::Dead);

    let report = run.last_death().copied().expect("died");
    assert!(!report.new_best);
    assert_eq!(report.best_score, 1_000);
    assert_eq!(run.store().writes, 0);

    run.choose_dead(DeadChoice::Menu);
    assert_eq!(run.phase(), GamePhase::Menu);
    assert_eq!(run.snapshot().phase, GamePhase::Menu);

    input.request_quit();
    run.tick(&input.take_tick_input(), 16);
    assert!(run.is_terminated());
}
