use crate::config::{ENEMY_SPAWN_INTERVAL, LANE_Y};
use crate::game::Level;
use crate::game::chart::ChartData;
use crate::game::combat::{self, Arrow, Enemy};
use crate::game::lane::LaneRegistry;
use crate::game::note::{Note, SPECIAL_LANE};
use crate::game::score::ScoreBoard;
use crate::game::timeline;
use crate::input::InputSnapshot;
use crate::render::{RenderCmd, SpriteKey};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Start,
    Play,
    Win,
    Lose,
}

/// One run through the game, from the level-select screen to WIN or LOSE.
/// Holds a private copy of the chart's notes so a restart starts pristine.
pub struct GameSession {
    pub state: GameState,
    pub level: Level,
    pub frame_count: u32,
    pub scroll_speed: i32,
    pub board: ScoreBoard,
    pub lanes: LaneRegistry,
    pub notes: Vec<Note>,
    pub enemies: Vec<Enemy>,
    pub arrows: Vec<Arrow>,
    rng: StdRng,
}

impl GameSession {
    /// A fixed seed makes enemy spawns reproducible; `None` seeds from the OS.
    pub fn new(chart: &ChartData, base_scroll_speed: i32, seed: Option<u64>) -> GameSession {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GameSession {
            state: GameState::Start,
            level: Level::One,
            frame_count: 0,
            scroll_speed: base_scroll_speed,
            board: ScoreBoard::new(Level::One.win_threshold()),
            lanes: chart.lanes.clone(),
            notes: chart.notes.clone(),
            enemies: Vec::new(),
            arrows: Vec::new(),
            rng,
        }
    }

    /// Locks in the chosen level and enters play. The frame counter restarts
    /// so note spawn frames and the enemy cadence count from play start.
    pub fn select_level(&mut self, level: Level) {
        self.level = level;
        self.board.win_threshold = level.win_threshold();
        self.frame_count = 0;
        self.state = GameState::Play;
        info!("Level {} selected, win threshold {}.", level.number(), self.board.win_threshold);
    }

    /// One gameplay frame: lanes, the note timeline, the win/lose switch,
    /// then combat. Combat still runs on the frame the state flips, and a
    /// same-frame loss overrides a win.
    pub fn play_frame(&mut self, input: &InputSnapshot, commands: &mut Vec<RenderCmd>) {
        self.render_lanes(commands);

        let lost = timeline::advance_notes(
            &mut self.notes,
            &mut self.board,
            &mut self.scroll_speed,
            self.frame_count,
            self.level,
            input,
            commands,
        );
        if self.board.won {
            info!("Win threshold reached with {} points.", self.board.points);
            self.state = GameState::Win;
        }
        if lost {
            info!("Last note left the screen with {} points.", self.board.points);
            self.state = GameState::Lose;
        }

        if self.level.has_combat() {
            if self.frame_count % ENEMY_SPAWN_INTERVAL == 0 {
                self.enemies.push(Enemy::spawn(&mut self.rng));
            }
            combat::update_enemies(&mut self.enemies, &mut self.notes, self.frame_count, commands);
            combat::update_guardian(input, &self.enemies, &mut self.arrows, commands);
            combat::update_arrows(&mut self.arrows, &mut self.enemies, commands);
        }
    }

    fn render_lanes(&self, commands: &mut Vec<RenderCmd>) {
        for (name, x) in self.lanes.iter() {
            if name == SPECIAL_LANE && !self.level.shows_special_lane() {
                continue;
            }
            commands.push(RenderCmd::sprite(SpriteKey::Lane(name.to_string()), x as f32, LANE_Y));
        }
    }
}
