//! Renderer-facing snapshot of the simulation state.
//!
//! Everything a drawing adapter needs to paint a frame: tile colors, fall
//! distances, the in-flight move, normalized phase progress and the cached
//! hint lists. Snapshots are plain data; refreshing one with
//! [`snapshot_into`](crate::game::Game::snapshot_into) reuses its buffers.

use match3_types::{Cell, Cluster, GameState, Move, ResolveStep};

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub columns: u8,
    pub rows: u8,
    /// Tile colors in row-major order (row * columns + column).
    pub tiles: Vec<Cell>,
    /// Gravity-fall distances in row-major order.
    pub shifts: Vec<u8>,
    pub score: u32,
    pub game_over: bool,
    pub state: GameState,
    pub step: ResolveStep,
    /// Normalized progress through the current resolve phase, 0..=1.
    pub phase_progress: f32,
    pub current_move: Option<Move>,
    pub selection: Option<(u8, u8)>,
    pub clusters: Vec<Cluster>,
    pub moves: Vec<Move>,
    pub show_moves: bool,
    pub ai_bot: bool,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.columns = 0;
        self.rows = 0;
        self.tiles.clear();
        self.shifts.clear();
        self.score = 0;
        self.game_over = false;
        self.state = GameState::Ready;
        self.step = ResolveStep::ClusterCheck;
        self.phase_progress = 0.0;
        self.current_move = None;
        self.selection = None;
        self.clusters.clear();
        self.moves.clear();
        self.show_moves = false;
        self.ai_bot = false;
        self.seed = 0;
    }

    /// Tile color at (column, row).
    pub fn tile(&self, column: u8, row: u8) -> Cell {
        self.tiles[usize::from(row) * usize::from(self.columns) + usize::from(column)]
    }

    /// Fall distance at (column, row).
    pub fn shift(&self, column: u8, row: u8) -> u8 {
        self.shifts[usize::from(row) * usize::from(self.columns) + usize::from(column)]
    }

    /// True while the simulation accepts swap requests.
    pub fn ready(&self) -> bool {
        self.state == GameState::Ready
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            columns: 0,
            rows: 0,
            tiles: Vec::new(),
            shifts: Vec::new(),
            score: 0,
            game_over: false,
            state: GameState::Ready,
            step: ResolveStep::ClusterCheck,
            phase_progress: 0.0,
            current_move: None,
            selection: None,
            clusters: Vec::new(),
            moves: Vec::new(),
            show_moves: false,
            ai_bot: false,
            seed: 0,
        }
    }
}
