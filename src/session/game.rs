//! The game session: lifecycle orchestration, move validation, bookkeeping.
//!
//! `GameSession` owns the board, the turn controller, both players, and the
//! move log. It is the single mutator path into the board; collaborators
//! (presentation, scenario runner) submit moves through it and read results
//! back out.
//!
//! ## Lifecycle
//!
//! `MainMenu` → `configure` → `start` → `Playing` → moves → `Ended`, with
//! `restart` looping back into `Playing` and `begin_scenario` entering the
//! scripted `Scenario` phase instead.
//!
//! ## Events
//!
//! Outbound notifications (`TurnChanged`, `GameOver`) accumulate in an event
//! queue the presentation layer drains after each call. The core never
//! renders; it only classifies and reports.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, GridSize};
use crate::core::{GameError, GameRng, Player, PlayerId, PlayerPair, Symbol};

use super::turn::{FirstPlayer, TurnController};

/// Session phase. Exactly one per session; transitions only through the
/// explicit lifecycle calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Configuring; no game in progress.
    MainMenu,
    /// A game is running and accepting moves in turn order.
    Playing,
    /// The game finished with a win or a draw.
    Ended,
    /// A scripted scenario is driving the board; turn gating is relaxed.
    Scenario,
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The given player completed a line.
    Winner(PlayerId),
    /// The board filled with no completed line.
    Draw,
}

impl Outcome {
    /// The winning player, or `None` for a draw.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

/// Result of one accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game continues; the turn has advanced.
    Continue,
    /// This move completed a line; the game is over.
    Win(PlayerId),
    /// This move filled the board with no line completed.
    Draw,
}

/// Outbound notification to presentation collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new player is to move.
    TurnChanged(PlayerId),
    /// The game ended; `Some` is the winner, `None` a draw.
    GameOver(Option<PlayerId>),
}

/// One entry of the append-only move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number within the game.
    pub sequence: u32,
    /// Who moved.
    pub player: PlayerId,
    /// Claimed row.
    pub row: usize,
    /// Claimed column.
    pub column: usize,
    /// Whether this move completed a winning line.
    pub winning: bool,
    /// The mark the player was using.
    pub symbol: Symbol,
}

/// Pre-game configuration: board size and the two player marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Validated board dimension.
    pub grid_size: GridSize,
    /// Marks for player 0 and player 1. Must be distinct.
    pub symbols: [Symbol; 2],
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            symbols: [Symbol('X'), Symbol('O')],
        }
    }
}

/// One complete play-through: configure → start → moves → end/restart.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    players: PlayerPair<Player>,
    board: Board,
    turn: TurnController,
    phase: GamePhase,
    outcome: Option<Outcome>,
    history: Vector<MoveRecord>,
    events: Vec<SessionEvent>,
    rng: GameRng,
    /// Mutual-exclusion guard: at most one scenario runs per session.
    scenario_active: bool,
}

impl GameSession {
    /// Create a session in the main-menu phase with the default
    /// configuration (3×3, marks `X` and `O`).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let config = SessionConfig::default();
        Self {
            players: Self::players_for(&config),
            board: Board::new(config.grid_size),
            config,
            turn: TurnController::new(),
            phase: GamePhase::MainMenu,
            outcome: None,
            history: Vector::new(),
            events: Vec::new(),
            rng: GameRng::new(seed),
            scenario_active: false,
        }
    }

    fn players_for(config: &SessionConfig) -> PlayerPair<Player> {
        PlayerPair::new(
            Player::new(PlayerId::new(0), config.symbols[0]),
            Player::new(PlayerId::new(1), config.symbols[1]),
        )
    }

    /// Store the grid size and player marks for the next game.
    ///
    /// An out-of-range grid size degrades to the default rather than
    /// failing, matching the board's tolerant validation. Identical marks
    /// are the one configuration that cannot be degraded around and fail
    /// with [`GameError::InvalidConfiguration`], as does reconfiguring
    /// while a game is in progress.
    pub fn configure(&mut self, grid_size: usize, symbols: [Symbol; 2]) -> Result<(), GameError> {
        if matches!(self.phase, GamePhase::Playing | GamePhase::Scenario) {
            return Err(GameError::InvalidConfiguration {
                reason: "cannot reconfigure while a game is in progress".into(),
            });
        }
        if symbols[0] == symbols[1] {
            return Err(GameError::InvalidConfiguration {
                reason: format!("both players picked the mark '{}'", symbols[0]),
            });
        }

        self.config = SessionConfig {
            grid_size: GridSize::new(grid_size),
            symbols,
        };
        self.players = Self::players_for(&self.config);
        Ok(())
    }

    /// Begin a game: fresh board, cleared move log, random opening player.
    ///
    /// Idempotent; calling it again restarts. Cancels any running scenario,
    /// which observes the phase change on its next step.
    pub fn start(&mut self) {
        self.begin(FirstPlayer::Random, GamePhase::Playing);
    }

    /// Clear the board and begin again.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Enter the scripted scenario phase with a chosen opening player.
    ///
    /// In this phase turn gating is relaxed: [`force_claim`] may place
    /// claims for either player out of turn order. Board validation still
    /// applies.
    ///
    /// [`force_claim`]: GameSession::force_claim
    pub fn begin_scenario(&mut self, first: PlayerId) {
        self.begin(FirstPlayer::Fixed(first), GamePhase::Scenario);
    }

    /// Leave the scenario phase and restart into normal play.
    pub fn end_scenario(&mut self) {
        self.start();
    }

    fn begin(&mut self, first: FirstPlayer, phase: GamePhase) {
        self.board.initialize(self.config.grid_size);
        self.history = Vector::new();
        self.outcome = None;
        self.scenario_active = false;
        self.turn.start(first, &mut self.rng);
        self.phase = phase;
        self.events.push(SessionEvent::TurnChanged(self.turn.current()));
        tracing::debug!(
            size = self.board.size(),
            first = %self.turn.current(),
            ?phase,
            "game started"
        );
    }

    /// Submit a move for the current player: the central operation.
    ///
    /// Validation failures ([`GameError::SessionNotActive`],
    /// [`GameError::InvalidPosition`], [`GameError::AlreadyClaimed`]) leave
    /// board, turn, and history untouched. On success the move is logged
    /// and the game either continues with the turn advanced, or ends. A
    /// winning claim on the final cell reports a win, not a draw: the win
    /// check runs first, and the winner stays the current player.
    pub fn submit_move(&mut self, row: usize, column: usize) -> Result<MoveOutcome, GameError> {
        if !matches!(self.phase, GamePhase::Playing | GamePhase::Scenario) {
            return Err(GameError::SessionNotActive);
        }
        self.apply_claim(row, column, self.turn.current())
    }

    /// Place a claim for an arbitrary player, out of normal turn order.
    ///
    /// Only valid in the scenario phase; the turn passes to the other
    /// player afterwards so alternation resumes from the forced claim.
    pub fn force_claim(
        &mut self,
        row: usize,
        column: usize,
        player: PlayerId,
    ) -> Result<MoveOutcome, GameError> {
        if self.phase != GamePhase::Scenario {
            return Err(GameError::SessionNotActive);
        }
        self.apply_claim(row, column, player)
    }

    fn apply_claim(
        &mut self,
        row: usize,
        column: usize,
        player: PlayerId,
    ) -> Result<MoveOutcome, GameError> {
        let winning = self.board.claim(row, column, player)?;

        self.history.push_back(MoveRecord {
            sequence: self.board.claimed_count() as u32,
            player,
            row,
            column,
            winning,
            symbol: self.players[player].symbol,
        });

        if winning {
            // The winner stays current; the turn does not advance.
            self.turn.set_current(player);
            self.finish(Outcome::Winner(player));
            Ok(MoveOutcome::Win(player))
        } else if self.board.is_full() {
            self.finish(Outcome::Draw);
            Ok(MoveOutcome::Draw)
        } else {
            if self.turn.current() == player {
                self.turn.advance();
            } else {
                // Forced claim out of turn: alternation resumes from the
                // claimant.
                self.turn.set_current(player.other());
            }
            self.events.push(SessionEvent::TurnChanged(self.turn.current()));
            Ok(MoveOutcome::Continue)
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.phase = GamePhase::Ended;
        self.scenario_active = false;
        self.events.push(SessionEvent::GameOver(outcome.winner()));
        match outcome.winner() {
            Some(winner) => tracing::debug!(%winner, "game over"),
            None => tracing::debug!("game over: draw"),
        }
    }

    // === Queries ===

    /// Current session phase.
    #[must_use]
    pub fn state(&self) -> GamePhase {
        self.phase
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.players[self.turn.current()]
    }

    /// Look up a configured player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Player {
        self.players[id]
    }

    /// How the last game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The ordered move log of the current game.
    #[must_use]
    pub fn move_history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The active board dimension.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.board.size()
    }

    /// Number of occupied cells on the board.
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.board.claimed_count()
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Drain pending outbound notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Fork an independent RNG branch off the session stream.
    #[must_use]
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    // === Scenario guard ===

    /// Try to mark a scenario as running. Returns false if one already is.
    pub(crate) fn acquire_scenario_guard(&mut self) -> bool {
        if self.scenario_active {
            return false;
        }
        self.scenario_active = true;
        true
    }

    /// Mark the running scenario as finished.
    pub(crate) fn release_scenario_guard(&mut self) {
        self.scenario_active = false;
    }

    /// Whether a scenario is currently running against this session.
    #[must_use]
    pub fn scenario_active(&self) -> bool {
        self.scenario_active
    }
}
