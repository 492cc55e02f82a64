//! Logical input, sampled once per frame as an immutable snapshot.
//!
//! The host binds whatever physical device it likes; the core only sees
//! press/release edges for the five gameplay actions plus the menu actions.
//! All entities read the same snapshot, so simultaneous actions in one frame
//! are honored independently.

use crate::game::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaneAction {
    Down,
    Up,
    Left,
    Right,
    Special,
}

impl LaneAction {
    pub const ALL: [LaneAction; 5] = [
        LaneAction::Down,
        LaneAction::Up,
        LaneAction::Left,
        LaneAction::Right,
        LaneAction::Special,
    ];

    /// Lane names double as action names in the level file.
    pub fn from_lane_name(name: &str) -> Option<LaneAction> {
        match name {
            "Down" => Some(LaneAction::Down),
            "Up" => Some(LaneAction::Up),
            "Left" => Some(LaneAction::Left),
            "Right" => Some(LaneAction::Right),
            "Special" => Some(LaneAction::Special),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            LaneAction::Down => 0,
            LaneAction::Up => 1,
            LaneAction::Left => 2,
            LaneAction::Right => 3,
            LaneAction::Special => 4,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InputSnapshot {
    pressed: [bool; 5],
    released: [bool; 5],
    pub level_select: Option<Level>,
    pub confirm: bool,
    pub fire: bool,
    pub quit: bool,
}

impl InputSnapshot {
    /// A frame with no input at all.
    pub fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    /// A frame with a single press edge.
    pub fn press(action: LaneAction) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default();
        snapshot.set_pressed(action);
        snapshot
    }

    /// A frame with a single release edge.
    pub fn release(action: LaneAction) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default();
        snapshot.set_released(action);
        snapshot
    }

    pub fn select_level(level: Level) -> InputSnapshot {
        InputSnapshot { level_select: Some(level), ..InputSnapshot::default() }
    }

    pub fn set_pressed(&mut self, action: LaneAction) {
        self.pressed[action.index()] = true;
    }

    pub fn set_released(&mut self, action: LaneAction) {
        self.released[action.index()] = true;
    }

    pub fn was_pressed(&self, action: LaneAction) -> bool {
        self.pressed[action.index()]
    }

    pub fn was_released(&self, action: LaneAction) -> bool {
        self.released[action.index()]
    }
}
