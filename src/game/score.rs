use crate::config::{
    BAD_RADIUS, GOOD_RADIUS, MESSAGE_FRAMES, MULTIPLIER_FRAMES, PERFECT_RADIUS,
};
use log::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Judgment {
    Perfect,
    Good,
    Bad,
    Miss,
}

impl Judgment {
    pub fn label(self) -> &'static str {
        match self {
            Judgment::Perfect => "PERFECT",
            Judgment::Good => "GOOD",
            Judgment::Bad => "BAD",
            Judgment::Miss => "MISS",
        }
    }

    pub fn points(self) -> i32 {
        match self {
            Judgment::Perfect => 10,
            Judgment::Good => 5,
            Judgment::Bad => -1,
            Judgment::Miss => -5,
        }
    }
}

/// Grades a timing distance. Distances at or below zero produce no judgment
/// at all: no score change and an empty message. Boundaries are inclusive on
/// the lower branch (15.0 is still a PERFECT).
pub fn judge(distance: f32) -> Option<Judgment> {
    if distance <= 0.0 {
        None
    } else if distance <= PERFECT_RADIUS {
        Some(Judgment::Perfect)
    } else if distance <= GOOD_RADIUS {
        Some(Judgment::Good)
    } else if distance <= BAD_RADIUS {
        Some(Judgment::Bad)
    } else {
        Some(Judgment::Miss)
    }
}

/// Score, multiplier and transient message state for one session.
///
/// The win flag is latched here on grading events and applied to the state
/// machine by the caller; it never un-latches.
#[derive(Clone, Debug)]
pub struct ScoreBoard {
    pub points: i32,
    pub multiplier: i32,
    multiplier_frames: u32,
    pub message: String,
    message_frames: u32,
    pub win_threshold: i32,
    pub won: bool,
}

impl ScoreBoard {
    pub fn new(win_threshold: i32) -> ScoreBoard {
        ScoreBoard {
            points: 0,
            multiplier: 1,
            multiplier_frames: 0,
            message: String::new(),
            message_frames: 0,
            win_threshold,
            won: false,
        }
    }

    /// Grades a distance and applies it: score delta times the current
    /// multiplier, transient message, then the win latch. The latch runs on
    /// every call, including the no-judgment branch.
    pub fn apply_grade(&mut self, distance: f32) -> Option<Judgment> {
        let judgment = judge(distance);
        let delta = judgment.map_or(0, Judgment::points) * self.multiplier;
        self.points += delta;
        self.set_message(judgment.map_or("", Judgment::label));
        debug!(
            "graded distance {:.1}: {:?} ({:+}), score {}",
            distance, judgment, delta, self.points
        );
        if self.points >= self.win_threshold {
            self.won = true;
        }
        judgment
    }

    /// Direct score adjustment: no multiplier, no message, no win check.
    pub fn add_points(&mut self, delta: i32) {
        self.points += delta;
    }

    pub fn set_multiplier(&mut self, multiplier: i32) {
        self.multiplier = multiplier;
        self.multiplier_frames = 0;
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
        self.message_frames = 0;
    }

    /// Advances the transient timers. Runs once per PLAY frame, before any
    /// note interaction, so a message set at frame F clears exactly at
    /// F+30 and a multiplier set at F reverts exactly at F+480.
    pub fn tick(&mut self) {
        self.message_frames += 1;
        self.multiplier_frames += 1;
        if self.message_frames >= MESSAGE_FRAMES && !self.message.is_empty() {
            self.set_message("");
        }
        if self.multiplier_frames >= MULTIPLIER_FRAMES && self.multiplier != 1 {
            self.set_multiplier(1);
        }
    }
}
