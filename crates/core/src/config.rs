use std::path::Path;

use match3_types::{
    TileColor, DEFAULT_COLUMNS, DEFAULT_MAX_GENERATE_ATTEMPTS, DEFAULT_ROWS, MAX_BOARD_DIM,
    MIN_BOARD_DIM, MIN_PALETTE_SIZE, PHASE_MS,
};

use crate::error::ConfigError;

/// Simulation configuration, loadable from TOML.
///
/// The defaults are the reference setup: an 8x8 board, the full 7-color
/// palette and 300 ms resolve phases.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in tiles.
    pub columns: u8,
    /// Board height in tiles.
    pub rows: u8,
    /// Number of palette colors tiles are sampled from.
    pub palette_size: u8,
    /// Duration of each resolve phase in milliseconds.
    pub phase_ms: u32,
    /// Idle time before the autonomous player acts, in milliseconds.
    pub bot_delay_ms: u32,
    /// Cap on full randomize-and-resolve retries during board generation.
    pub max_generate_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            palette_size: TileColor::COUNT,
            phase_ms: PHASE_MS,
            bot_delay_ms: PHASE_MS,
            max_generate_attempts: DEFAULT_MAX_GENERATE_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < MIN_BOARD_DIM || self.columns > MAX_BOARD_DIM {
            return Err(ConfigError::Validation(format!(
                "columns must be in {MIN_BOARD_DIM}..={MAX_BOARD_DIM}"
            )));
        }
        if self.rows < MIN_BOARD_DIM || self.rows > MAX_BOARD_DIM {
            return Err(ConfigError::Validation(format!(
                "rows must be in {MIN_BOARD_DIM}..={MAX_BOARD_DIM}"
            )));
        }
        if self.palette_size < MIN_PALETTE_SIZE || self.palette_size > TileColor::COUNT {
            return Err(ConfigError::Validation(format!(
                "palette_size must be in {MIN_PALETTE_SIZE}..={}",
                TileColor::COUNT
            )));
        }
        if self.phase_ms == 0 {
            return Err(ConfigError::Validation("phase_ms must be > 0".into()));
        }
        if self.bot_delay_ms == 0 {
            return Err(ConfigError::Validation("bot_delay_ms must be > 0".into()));
        }
        if self.max_generate_attempts == 0 {
            return Err(ConfigError::Validation(
                "max_generate_attempts must be > 0".into(),
            ));
        }
        Ok(())
    }
}
