//! Scripted scenario verification: every line kind plus the draw sweep.

use gridmatch::{
    GamePhase, GameSession, LineTarget, Outcome, PlayerId, ScenarioRunner, ScenarioStatus, Symbol,
};

fn session_with_size(size: usize, seed: u64) -> GameSession {
    let mut session = GameSession::new(seed);
    session
        .configure(size, [Symbol('X'), Symbol('O')])
        .unwrap();
    session.start();
    session
}

#[test]
fn test_line_scenarios_for_all_line_kinds_and_sizes() {
    for size in [3usize, 4] {
        let mut targets = vec![LineTarget::MainDiagonal, LineTarget::AntiDiagonal];
        for index in 0..size {
            targets.push(LineTarget::Row(index));
            targets.push(LineTarget::Column(index));
        }

        for target in targets {
            for player in [PlayerId::new(0), PlayerId::new(1)] {
                let mut session = session_with_size(size, 42);
                let runner =
                    ScenarioRunner::begin_line_test(&mut session, player, target).unwrap();
                let report = runner.run(&mut session);

                assert_eq!(
                    report.outcome,
                    Some(Outcome::Winner(player)),
                    "{} scenario for {} on {}x{}",
                    target,
                    player,
                    size,
                    size
                );
                assert_eq!(report.moves_played, 2 * size - 1);
                assert_eq!(session.state(), GamePhase::Ended);

                // The winner owns every cell of the target line
                for (row, column) in target.cells(size) {
                    assert_eq!(session.board().occupant(row, column), Some(player));
                }
            }
        }
    }
}

#[test]
fn test_line_scenario_fillers_stay_off_the_line() {
    for seed in [1u64, 2, 3, 4, 5] {
        let mut session = session_with_size(3, seed);
        let target = LineTarget::Row(1);
        let runner =
            ScenarioRunner::begin_line_test(&mut session, PlayerId::new(0), target).unwrap();
        runner.run(&mut session);

        for record in session.move_history() {
            if record.player == PlayerId::new(1) {
                assert!(
                    !target.contains(3, record.row, record.column),
                    "filler at ({}, {}) landed on the target line",
                    record.row,
                    record.column
                );
            }
        }
    }
}

#[test]
fn test_draw_scenario_fills_3x3() {
    let mut session = session_with_size(3, 42);
    let runner = ScenarioRunner::begin_draw_test(&mut session).unwrap();
    let report = runner.run(&mut session);

    assert_eq!(report.moves_played, 9);
    assert_eq!(report.outcome, Some(Outcome::Draw));
    assert_eq!(session.state(), GamePhase::Ended);
    assert_eq!(session.claimed_count(), 9);
}

#[test]
fn test_draw_scenario_fills_4x4() {
    let mut session = session_with_size(4, 42);
    let runner = ScenarioRunner::begin_draw_test(&mut session).unwrap();
    let report = runner.run(&mut session);

    assert_eq!(report.moves_played, 16);
    assert_eq!(report.outcome, Some(Outcome::Draw));
    assert_eq!(session.claimed_count(), 16);
}

#[test]
fn test_scenarios_are_reproducible_per_seed() {
    let run = |seed: u64| {
        let mut session = session_with_size(3, seed);
        let runner =
            ScenarioRunner::begin_line_test(&mut session, PlayerId::new(1), LineTarget::Column(1))
                .unwrap();
        let report = runner.run(&mut session);
        (report, session.move_history().clone())
    };

    let (report_a, history_a) = run(99);
    let (report_b, history_b) = run(99);

    assert_eq!(report_a, report_b);
    assert_eq!(history_a, history_b);
}

#[test]
fn test_cooperative_stepping_yields_between_moves() {
    let mut session = session_with_size(3, 42);
    let mut runner =
        ScenarioRunner::begin_line_test(&mut session, PlayerId::new(0), LineTarget::Row(0))
            .unwrap();

    // Each step places exactly one tile; the caller gets control back in
    // between and can observe intermediate board states.
    let mut counts = Vec::new();
    loop {
        let status = runner.step(&mut session);
        counts.push(session.claimed_count());
        if matches!(status, ScenarioStatus::Finished(_)) {
            break;
        }
    }

    assert_eq!(counts, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_session_restart_cancels_draw_scenario() {
    let mut session = session_with_size(4, 42);
    let mut runner = ScenarioRunner::begin_draw_test(&mut session).unwrap();

    runner.step(&mut session);
    runner.step(&mut session);
    session.restart();

    let status = runner.step(&mut session);
    match status {
        ScenarioStatus::Finished(report) => {
            assert_eq!(report.moves_played, 2);
            assert_eq!(report.outcome, None);
        }
        ScenarioStatus::Running => panic!("cancelled scenario kept running"),
    }
    assert!(!session.scenario_active());
}

#[test]
fn test_only_one_scenario_at_a_time() {
    let mut session = session_with_size(3, 42);
    let mut first = ScenarioRunner::begin_draw_test(&mut session).unwrap();
    first.step(&mut session);

    assert!(ScenarioRunner::begin_draw_test(&mut session).is_none());
    assert!(
        ScenarioRunner::begin_line_test(&mut session, PlayerId::new(0), LineTarget::Row(0))
            .is_none()
    );

    // The original scenario still completes as a draw
    let mut status = ScenarioStatus::Running;
    while status == ScenarioStatus::Running {
        status = first.step(&mut session);
    }
    assert_eq!(session.outcome(), Some(Outcome::Draw));
}
