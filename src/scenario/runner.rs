//! Scripted move sequences exercising win and draw detection.
//!
//! A `ScenarioRunner` drives a `GameSession` through a deterministic
//! "target player fills a line, opponent fills elsewhere" sequence, or
//! through the draw sweep. It is a verification and demo harness, not
//! gameplay.
//!
//! ## Cooperative stepping
//!
//! Each `step` call plays exactly one move and returns, so a host loop can
//! interleave animation or other work between moves. The caller owns the
//! scheduler; the runner never blocks. Cancellation is observed by polling
//! the session phase once per step: if the session has been restarted or
//! has ended, the next step finishes the scenario.
//!
//! ## Mutual exclusion
//!
//! Only one runner may be active against a session at a time. A second
//! `begin_*` call while one is running returns `None` silently, with no
//! effect on the running scenario.

use crate::board::LineTarget;
use crate::core::{GameRng, PlayerId};
use crate::session::{GamePhase, GameSession, Outcome};

use super::sweep::DrawSweep;

/// Result of a finished scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Moves successfully played before the scenario stopped.
    pub moves_played: usize,
    /// How the game ended, if it did. `None` means the scenario hit its
    /// move budget without the session ending.
    pub outcome: Option<Outcome>,
}

/// Outcome of a single scheduler step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioStatus {
    /// More moves remain; call `step` again.
    Running,
    /// The scenario finished and released the session.
    Finished(ScenarioReport),
}

#[derive(Clone, Debug)]
enum ScenarioKind {
    /// The target player fills `target`; the opponent fills elsewhere.
    Line {
        player: PlayerId,
        target: LineTarget,
        /// Next cell of the target line to claim, in increasing index order.
        cursor: usize,
        /// Total move budget: `2 * size - 1`, the minimum at which an
        /// N-line filled by alternating turns is guaranteed complete.
        budget: usize,
    },
    /// Deterministic whole-board tiling aiming for a draw.
    Draw { order: DrawSweep },
}

enum StepAction {
    Place(usize, usize),
    Exhausted,
}

/// Drives one scripted scenario against a session, one move per step.
#[derive(Clone, Debug)]
pub struct ScenarioRunner {
    kind: ScenarioKind,
    rng: GameRng,
    moves_played: usize,
    done: bool,
}

impl ScenarioRunner {
    /// Start a line-filling scenario: `player` claims along `target` on
    /// their turns while the opponent claims random off-line cells.
    ///
    /// Resets the session into the scenario phase with `player` to move
    /// first. Returns `None`, silently and without side effects, if a
    /// scenario is already running against this session.
    pub fn begin_line_test(
        session: &mut GameSession,
        player: PlayerId,
        target: LineTarget,
    ) -> Option<Self> {
        if session.scenario_active() {
            return None;
        }

        let rng = session.fork_rng();
        session.begin_scenario(player);
        session.acquire_scenario_guard();
        tracing::debug!(%player, %target, "starting line scenario");

        Some(Self {
            kind: ScenarioKind::Line {
                player,
                target,
                cursor: 0,
                budget: 2 * session.grid_size() - 1,
            },
            rng,
            moves_played: 0,
            done: false,
        })
    }

    /// Start a draw scenario: tile the whole board in sweep order with a
    /// random opening player.
    ///
    /// Returns `None` silently if a scenario is already running. The sweep
    /// is a heuristic anti-win tiling; if a line completes incidentally the
    /// scenario ends early with that win as its outcome.
    pub fn begin_draw_test(session: &mut GameSession) -> Option<Self> {
        if session.scenario_active() {
            return None;
        }

        let mut rng = session.fork_rng();
        let first = PlayerId::new(rng.gen_bool(0.5) as u8);
        session.begin_scenario(first);
        session.acquire_scenario_guard();
        tracing::debug!(%first, "starting draw scenario");

        Some(Self {
            kind: ScenarioKind::Draw {
                order: DrawSweep::new(session.grid_size()),
            },
            rng,
            moves_played: 0,
            done: false,
        })
    }

    /// Play one move and yield control back to the caller.
    ///
    /// Stepping a finished scenario reports the final status again without
    /// touching the session.
    pub fn step(&mut self, session: &mut GameSession) -> ScenarioStatus {
        if self.done {
            return ScenarioStatus::Finished(self.report(session));
        }
        // Cancellation check: restart/end pulls the session out of the
        // scenario phase between steps.
        if session.state() != GamePhase::Scenario {
            return self.finish(session);
        }

        let action = match &mut self.kind {
            ScenarioKind::Line {
                player,
                target,
                cursor,
                budget,
            } => {
                if self.moves_played >= *budget {
                    StepAction::Exhausted
                } else if session.current_player().id == *player {
                    let size = session.grid_size();
                    match target.cells(size).nth(*cursor) {
                        Some((row, column)) => {
                            *cursor += 1;
                            StepAction::Place(row, column)
                        }
                        None => StepAction::Exhausted,
                    }
                } else {
                    let size = session.grid_size();
                    // Re-sample until the cell is off the target line and
                    // unoccupied; off-line cells always outnumber the
                    // opponent's claims, so this terminates.
                    let (row, column) = loop {
                        let row = self.rng.gen_range_usize(0..size);
                        let column = self.rng.gen_range_usize(0..size);
                        if !target.contains(size, row, column)
                            && !session.board().is_occupied(row, column)
                        {
                            break (row, column);
                        }
                    };
                    StepAction::Place(row, column)
                }
            }
            ScenarioKind::Draw { order } => match order.next() {
                Some((row, column)) => StepAction::Place(row, column),
                None => StepAction::Exhausted,
            },
        };

        match action {
            StepAction::Place(row, column) => {
                if let Err(error) = session.submit_move(row, column) {
                    tracing::warn!(%error, row, column, "scripted move rejected");
                    return self.finish(session);
                }
                self.moves_played += 1;

                let budget_spent = match &self.kind {
                    ScenarioKind::Line { budget, .. } => self.moves_played >= *budget,
                    ScenarioKind::Draw { .. } => false,
                };
                if budget_spent || session.state() != GamePhase::Scenario {
                    self.finish(session)
                } else {
                    ScenarioStatus::Running
                }
            }
            StepAction::Exhausted => self.finish(session),
        }
    }

    /// Drive the scenario to completion in a tight loop.
    ///
    /// Convenience for callers that do not interleave other work between
    /// moves.
    pub fn run(mut self, session: &mut GameSession) -> ScenarioReport {
        loop {
            if let ScenarioStatus::Finished(report) = self.step(session) {
                return report;
            }
        }
    }

    /// Moves played so far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    fn finish(&mut self, session: &mut GameSession) -> ScenarioStatus {
        self.done = true;
        session.release_scenario_guard();
        let report = self.report(session);
        tracing::debug!(
            moves = report.moves_played,
            outcome = ?report.outcome,
            "scenario finished"
        );
        ScenarioStatus::Finished(report)
    }

    fn report(&self, session: &GameSession) -> ScenarioReport {
        ScenarioReport {
            moves_played: self.moves_played,
            outcome: session.outcome(),
        }
    }
}
