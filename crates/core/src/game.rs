//! Game module - the timed state machine over the board
//!
//! This module ties the pieces together: board, detector, enumerator,
//! resolver and scoring, sequenced by a tick-driven state machine. An
//! external driver calls [`Game::tick`] once per frame with elapsed
//! milliseconds; all transitions happen synchronously inside that call.
//!
//! The machine has two top-level states. `Ready` accepts swap requests (from
//! a human adapter or the built-in bot). `Resolving` steps through the four
//! timed sub-phases of a committed swap: the swap animation (`SwapIn`),
//! cluster scoring and clearing (`ClusterCheck`), compaction and refill
//! (`Shifting`), and the rewind of a fruitless swap (`SwapOut`). Each
//! sub-phase advances when the phase timer crosses the configured duration;
//! the logical board mutation is instantaneous at the crossing, and the
//! renderer interpolates using [`Game::phase_progress`] and the per-tile
//! fall distances.
//!
//! The whole simulation state lives in this one struct; there are no
//! globals, and a `u32` seed fully determines a game.

use match3_types::{Cluster, GameState, Move, ResolveStep};

use crate::board::Board;
use crate::cluster::find_clusters;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::moves::{find_moves, is_adjacent};
use crate::resolver::{generate_board, remove_clusters, shift_tiles};
use crate::rng::SimpleRng;
use crate::scoring::score_clusters;
use crate::snapshot::GameSnapshot;

/// Complete simulation state for one game session.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    rng: SimpleRng,
    /// Clusters found by the last refresh (rendering hint).
    clusters: Vec<Cluster>,
    /// Legal swaps found by the last refresh (rendering hint, game-over test).
    moves: Vec<Move>,
    current_move: Option<Move>,
    selection: Option<(u8, u8)>,
    score: u32,
    state: GameState,
    step: ResolveStep,
    phase_timer_ms: u32,
    bot_timer_ms: u32,
    show_moves: bool,
    ai_bot: bool,
    game_over: bool,
}

impl Game {
    /// Create a game with a legal starting board.
    ///
    /// Validates the configuration, then runs the full new-game sequence, so
    /// the returned game is immediately playable.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.columns, config.rows);
        let mut game = Self {
            config,
            board,
            rng: SimpleRng::new(seed),
            clusters: Vec::new(),
            moves: Vec::new(),
            current_move: None,
            selection: None,
            score: 0,
            state: GameState::Ready,
            step: ResolveStep::ClusterCheck,
            phase_timer_ms: 0,
            bot_timer_ms: 0,
            show_moves: false,
            ai_bot: false,
            game_over: false,
        };
        game.new_game();
        Ok(game)
    }

    /// Reset score and flags and regenerate a legal board in place.
    pub fn new_game(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.state = GameState::Ready;
        self.step = ResolveStep::ClusterCheck;
        self.current_move = None;
        self.selection = None;
        self.phase_timer_ms = 0;
        self.bot_timer_ms = 0;

        let attempts = generate_board(&mut self.board, &mut self.rng, &self.config);
        self.refresh_hints();
        tracing::debug!(attempts, "new game started");
    }

    /// Advance the state machine by `elapsed_ms` milliseconds.
    ///
    /// Returns true when a phase transition fired or the bot acted.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.state {
            GameState::Ready => {
                if self.moves.is_empty() && !self.game_over {
                    self.game_over = true;
                    tracing::debug!(score = self.score, "no moves left, game over");
                }

                if self.ai_bot {
                    self.bot_timer_ms += elapsed_ms;
                    if self.bot_timer_ms >= self.config.bot_delay_ms {
                        self.bot_timer_ms = 0;
                        return self.play_bot_move();
                    }
                }
                false
            }
            GameState::Resolving => {
                self.phase_timer_ms += elapsed_ms;
                if self.phase_timer_ms >= self.config.phase_ms {
                    self.advance_phase();
                    return true;
                }
                false
            }
        }
    }

    /// Request the swap of two adjacent cells, as a player action.
    ///
    /// Honored only while `Ready`; rejected requests leave the game
    /// untouched and return false. Both cells must lie on the board and be
    /// orthogonal unit-distance neighbors.
    pub fn request_swap(&mut self, column1: u8, row1: u8, column2: u8, row2: u8) -> bool {
        if self.state != GameState::Ready {
            return false;
        }
        if !self.board.contains(column1, row1) || !self.board.contains(column2, row2) {
            return false;
        }
        if !self.can_swap(column1, row1, column2, row2) {
            return false;
        }

        self.begin_swap(Move {
            column1,
            row1,
            column2,
            row2,
        });
        true
    }

    /// True iff the two cells are orthogonal unit-distance neighbors.
    pub fn can_swap(&self, column1: u8, row1: u8, column2: u8, row2: u8) -> bool {
        is_adjacent(column1, row1, column2, row2)
    }

    /// Record the player's selected cell. A coordinate off the board clears
    /// the selection instead, mirroring a click outside the grid.
    pub fn set_selection(&mut self, column: u8, row: u8) {
        if self.board.contains(column, row) {
            self.selection = Some((column, row));
        } else {
            self.selection = None;
        }
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Toggle the move-hint overlay flag. Returns the new value.
    pub fn toggle_show_moves(&mut self) -> bool {
        self.show_moves = !self.show_moves;
        self.show_moves
    }

    /// Toggle the autonomous player. Returns the new value.
    pub fn toggle_ai_bot(&mut self) -> bool {
        self.ai_bot = !self.ai_bot;
        self.bot_timer_ms = 0;
        self.ai_bot
    }

    /// Record the move and enter the swap-in phase.
    fn begin_swap(&mut self, mv: Move) {
        self.current_move = Some(mv);
        self.selection = None;
        self.state = GameState::Resolving;
        self.step = ResolveStep::SwapIn;
        self.phase_timer_ms = 0;
    }

    /// Pick a random legal move and submit it like a human swap.
    fn play_bot_move(&mut self) -> bool {
        self.moves = find_moves(&self.board);
        if self.moves.is_empty() {
            return false;
        }
        let pick = self.rng.next_range(self.moves.len() as u32) as usize;
        let mv = self.moves[pick];
        tracing::trace!(?mv, "bot move");
        self.begin_swap(mv);
        true
    }

    /// Fire the transition for the current sub-phase.
    fn advance_phase(&mut self) {
        match self.step {
            ResolveStep::SwapIn => {
                // The animation is over: commit the swap and see what it made.
                let Some(mv) = self.current_move else {
                    // SwapIn is only entered with a recorded move.
                    self.state = GameState::Ready;
                    self.phase_timer_ms = 0;
                    return;
                };
                self.board.swap(mv.column1, mv.row1, mv.column2, mv.row2);
                if find_clusters(&self.board).is_empty() {
                    self.step = ResolveStep::SwapOut;
                } else {
                    self.step = ResolveStep::ClusterCheck;
                }
            }
            ResolveStep::SwapOut => {
                // Fruitless swap: put the tiles back and hand control over.
                if let Some(mv) = self.current_move {
                    self.board.swap(mv.column1, mv.row1, mv.column2, mv.row2);
                }
                self.current_move = None;
                self.state = GameState::Ready;
            }
            ResolveStep::ClusterCheck => {
                let clusters = find_clusters(&self.board);
                if clusters.is_empty() {
                    self.current_move = None;
                    self.state = GameState::Ready;
                } else {
                    self.score += score_clusters(&clusters);
                    remove_clusters(&mut self.board, &clusters);
                    self.step = ResolveStep::Shifting;
                }
            }
            ResolveStep::Shifting => {
                shift_tiles(&mut self.board, &mut self.rng, self.config.palette_size);
                self.step = ResolveStep::ClusterCheck;
                // No fresh clusters after the refill means the cascade is
                // done; skip the extra wait and return to input.
                if find_clusters(&self.board).is_empty() {
                    self.current_move = None;
                    self.state = GameState::Ready;
                }
            }
        }

        self.phase_timer_ms = 0;
        self.refresh_hints();
    }

    /// Recompute the cached cluster and move lists.
    ///
    /// A read-only refresh for rendering hints and game-over detection, run
    /// after every board mutation.
    fn refresh_hints(&mut self) {
        self.clusters = find_clusters(&self.board);
        self.moves = find_moves(&self.board);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn resolve_step(&self) -> ResolveStep {
        self.step
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn current_move(&self) -> Option<Move> {
        self.current_move
    }

    pub fn selection(&self) -> Option<(u8, u8)> {
        self.selection
    }

    pub fn show_moves(&self) -> bool {
        self.show_moves
    }

    pub fn ai_bot(&self) -> bool {
        self.ai_bot
    }

    /// Current RNG state, enough to replay the rest of the game.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Normalized progress through the current resolve phase.
    pub fn phase_progress(&self) -> f32 {
        match self.state {
            GameState::Ready => 0.0,
            GameState::Resolving => {
                (self.phase_timer_ms as f32 / self.config.phase_ms as f32).min(1.0)
            }
        }
    }

    /// Fill `out` with the current state, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.columns = self.board.columns();
        out.rows = self.board.rows();

        out.tiles.clear();
        out.tiles.extend(self.board.tiles().iter().map(|t| t.color));
        out.shifts.clear();
        out.shifts.extend(self.board.tiles().iter().map(|t| t.shift));

        out.score = self.score;
        out.game_over = self.game_over;
        out.state = self.state;
        out.step = self.step;
        out.phase_progress = self.phase_progress();
        out.current_move = self.current_move;
        out.selection = self.selection;

        out.clusters.clear();
        out.clusters.extend_from_slice(&self.clusters);
        out.moves.clear();
        out.moves.extend_from_slice(&self.moves);

        out.show_moves = self.show_moves;
        out.ai_bot = self.ai_bot;
        out.seed = self.rng.state();
    }

    /// Allocate a fresh snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
