pub mod chart;
pub mod combat;
pub mod lane;
pub mod note;
pub mod score;
pub mod session;
pub mod timeline;

use crate::config::{WIN_SCORE_LEVEL_1, WIN_SCORE_LEVEL_2, WIN_SCORE_LEVEL_3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    /// Score at which the level is won, checked on every grading event.
    pub fn win_threshold(self) -> i32 {
        match self {
            Level::One => WIN_SCORE_LEVEL_1,
            Level::Two => WIN_SCORE_LEVEL_2,
            Level::Three => WIN_SCORE_LEVEL_3,
        }
    }

    /// The Special lane and its notes only exist from level 2 up.
    pub fn shows_special_lane(self) -> bool {
        !matches!(self, Level::One)
    }

    /// Enemies, the guardian and arrows only run at level 3.
    pub fn has_combat(self) -> bool {
        matches!(self, Level::Three)
    }
}
