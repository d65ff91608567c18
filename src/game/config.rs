use std::fmt;
use std::str::FromStr;

// The ball runs at the same speed on every difficulty; the presets differ
// in paddle size, starting lives and grid dimensions only.
const BALL_SPEED: f32 = 3.0;

/// Selectable difficulty presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// Fixed settings applied when a new game starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    pub paddle_width: f32,
    pub lives: u32,
    pub rows: usize,
    pub columns: usize,
    pub ball_speed: f32,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Normal, Difficulty::Hard]
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                paddle_width: 120.0,
                lives: 5,
                rows: 3,
                columns: 5,
                ball_speed: BALL_SPEED,
            },
            Difficulty::Normal => DifficultyConfig {
                paddle_width: 100.0,
                lives: 3,
                rows: 5,
                columns: 8,
                ball_speed: BALL_SPEED,
            },
            Difficulty::Hard => DifficultyConfig {
                paddle_width: 80.0,
                lives: 1,
                rows: 7,
                columns: 10,
                ball_speed: BALL_SPEED,
            },
        }
    }
}

/// A difficulty name the input side sent that none of the presets match.
/// The selection is rejected outright; starting a game without a valid
/// preset would leave the paddle and grid dimensions undefined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDifficulty(pub String);

impl fmt::Display for InvalidDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty {:?}", self.0)
    }
}

impl std::error::Error for InvalidDifficulty {}

impl FromStr for Difficulty {
    type Err = InvalidDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(InvalidDifficulty(other.to_string())),
        }
    }
}
