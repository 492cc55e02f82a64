use crate::config::{
    ACTIVATE_RADIUS, FORCED_MISS_DISTANCE, HOLD_GRIP_OFFSET, HOLD_SPAWN_Y, NOTE_SPAWN_Y,
    SPECIAL_POINTS, TARGET_Y, WINDOW_HEIGHT,
};
use crate::game::Level;
use crate::game::score::ScoreBoard;
use crate::input::{InputSnapshot, LaneAction};
use crate::render::{RenderCmd, SpriteKey};
use crate::utils::math::distance;
use log::debug;

/// Special notes always live in this lane, whatever their subtype.
pub const SPECIAL_LANE: &str = "Special";

pub const SUBTYPE_SPEED_UP: &str = "SpeedUp";
pub const SUBTYPE_SLOW_DOWN: &str = "SlowDown";
pub const SUBTYPE_DOUBLE_SCORE: &str = "2x";

/// Structural effect a note raises mid-pass; the timeline applies it before
/// visiting the next note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteEffect {
    None,
    /// A bomb went off: clear every other eligible note in its lane.
    ClearLane,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NoteKind {
    Normal {
        /// False once an enemy steals the note; it then neither renders nor
        /// grades, but keeps scrolling.
        alive: bool,
        scored: bool,
    },
    Hold {
        pressed_distance: f32,
        released_distance: f32,
        scored: bool,
    },
    Bomb {
        active: bool,
    },
    Special {
        /// Literal type string from the level file ("SpeedUp", "SlowDown",
        /// "2x", or anything else, which activates with no effect).
        subtype: String,
        active: bool,
    },
}

#[derive(Clone, Debug)]
pub struct Note {
    pub kind: NoteKind,
    pub spawn_frame: u32,
    pub lane: String,
    pub x: i32,
    pub y: i32,
    pub cleared: bool,
}

impl Note {
    pub fn normal(lane: &str, x: i32, spawn_frame: u32) -> Note {
        Note {
            kind: NoteKind::Normal { alive: true, scored: false },
            spawn_frame,
            lane: lane.to_string(),
            x,
            y: NOTE_SPAWN_Y,
            cleared: false,
        }
    }

    pub fn hold(lane: &str, x: i32, spawn_frame: u32) -> Note {
        Note {
            kind: NoteKind::Hold {
                pressed_distance: 0.0,
                released_distance: 0.0,
                scored: false,
            },
            spawn_frame,
            lane: lane.to_string(),
            x,
            y: HOLD_SPAWN_Y,
            cleared: false,
        }
    }

    pub fn bomb(lane: &str, x: i32, spawn_frame: u32) -> Note {
        Note {
            kind: NoteKind::Bomb { active: false },
            spawn_frame,
            lane: lane.to_string(),
            x,
            y: HOLD_SPAWN_Y,
            cleared: false,
        }
    }

    pub fn special(subtype: &str, x: i32, spawn_frame: u32) -> Note {
        Note {
            kind: NoteKind::Special { subtype: subtype.to_string(), active: false },
            spawn_frame,
            lane: SPECIAL_LANE.to_string(),
            x,
            y: NOTE_SPAWN_Y,
            cleared: false,
        }
    }

    /// A note takes part in the frame iff it has spawned, is still on
    /// screen, and has not been cleared.
    pub fn is_eligible(&self, frame_count: u32) -> bool {
        frame_count >= self.spawn_frame && self.y <= WINDOW_HEIGHT && !self.cleared
    }

    /// Renders the note and services this frame's input edges. The sprite is
    /// pushed before input is checked, so a note still renders on the frame
    /// that grades or activates it.
    pub fn interact(
        &mut self,
        input: &InputSnapshot,
        board: &mut ScoreBoard,
        scroll_speed: &mut i32,
        level: Level,
        commands: &mut Vec<RenderCmd>,
    ) -> NoteEffect {
        let xf = self.x as f32;
        let yf = self.y as f32;
        let action = LaneAction::from_lane_name(&self.lane);

        match &mut self.kind {
            NoteKind::Normal { alive, scored } => {
                if !*alive {
                    return NoteEffect::None;
                }
                commands.push(RenderCmd::sprite(SpriteKey::Note(self.lane.clone()), xf, yf));
                if action.is_some_and(|a| input.was_pressed(a)) && !*scored {
                    // note x equals its lane's x after load, so the target
                    // point sits straight below it
                    let dis = distance(xf, yf, xf, TARGET_Y as f32);
                    board.apply_grade(dis);
                    *scored = true;
                }
                if !*scored && self.y > WINDOW_HEIGHT - 1 {
                    board.apply_grade(FORCED_MISS_DISTANCE);
                    *scored = true;
                }
                NoteEffect::None
            }
            NoteKind::Hold { pressed_distance, released_distance, scored } => {
                commands.push(RenderCmd::sprite(
                    SpriteKey::HoldNote(self.lane.clone()),
                    xf,
                    yf,
                ));
                let grip = HOLD_GRIP_OFFSET as f32;
                if !*scored {
                    if action.is_some_and(|a| input.was_pressed(a)) {
                        *pressed_distance = distance(xf, yf + grip, xf, TARGET_Y as f32);
                    }
                    if action.is_some_and(|a| input.was_released(a)) {
                        *released_distance = distance(xf, yf - grip, xf, TARGET_Y as f32);
                        board.apply_grade((*pressed_distance - *released_distance).abs());
                        *pressed_distance = 0.0;
                        *released_distance = 0.0;
                        *scored = true;
                    }
                }
                if !*scored
                    && self.y - HOLD_GRIP_OFFSET > WINDOW_HEIGHT - 1 - HOLD_GRIP_OFFSET
                {
                    // scored stays unset, so a release landing on a later
                    // frame can still produce the real grade
                    board.apply_grade(FORCED_MISS_DISTANCE);
                }
                NoteEffect::None
            }
            NoteKind::Bomb { active } => {
                if *active {
                    return NoteEffect::None;
                }
                commands.push(RenderCmd::sprite(SpriteKey::BombNote, xf, yf));
                if input.was_pressed(LaneAction::Special) {
                    let dis = distance(xf, yf, xf, TARGET_Y as f32);
                    if dis <= ACTIVATE_RADIUS {
                        *active = true;
                        board.set_message("LANE CLEAR");
                        debug!("bomb in lane {} went off", self.lane);
                        return NoteEffect::ClearLane;
                    }
                }
                NoteEffect::None
            }
            NoteKind::Special { subtype, active } => {
                if *active {
                    return NoteEffect::None;
                }
                if !level.shows_special_lane() {
                    return NoteEffect::None;
                }
                commands.push(RenderCmd::sprite(
                    SpriteKey::SpecialNote(subtype.clone()),
                    xf,
                    yf,
                ));
                if input.was_pressed(LaneAction::Special) {
                    let dis = distance(xf, yf, xf, TARGET_Y as f32);
                    if dis <= ACTIVATE_RADIUS {
                        *active = true;
                        match subtype.as_str() {
                            SUBTYPE_SPEED_UP => {
                                board.set_message("SPEED UP");
                                board.add_points(SPECIAL_POINTS);
                                *scroll_speed += 1;
                            }
                            SUBTYPE_SLOW_DOWN => {
                                board.set_message("SLOW DOWN");
                                board.add_points(SPECIAL_POINTS);
                                *scroll_speed -= 1;
                            }
                            SUBTYPE_DOUBLE_SCORE => {
                                board.set_message("DOUBLE SCORE");
                                board.set_multiplier(2);
                            }
                            other => {
                                debug!("special note subtype '{}' has no effect", other);
                            }
                        }
                    }
                }
                NoteEffect::None
            }
        }
    }
}
