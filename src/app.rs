use crate::config::{
    CENTER_MSG_Y, LOSE_HINT_Y, SCORE_X, SCORE_Y, SELECT_HINT_X, SELECT_HINT_Y, SELECT_KEYS_X,
    SELECT_KEYS_Y, SELECT_LIST_X, SELECT_LIST_Y, TITLE_X, TITLE_Y, WINDOW_HEIGHT, WINDOW_TITLE,
    WINDOW_WIDTH,
};
use crate::game::chart::{ChartData, ChartError};
use crate::game::session::{GameSession, GameState};
use crate::input::InputSnapshot;
use crate::render::{FontId, RenderCmd, SpriteKey};
use crate::settings::Settings;
use log::info;
use std::sync::Arc;

/// What the host loop should do after presenting a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameAction {
    #[default]
    None,
    Quit,
}

/// Everything one call to [`App::advance_frame`] produced: the draw list for
/// this frame, in draw order, plus the action the host should take.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub commands: Vec<RenderCmd>,
    pub action: GameAction,
}

/// Top-level frame driver. The host owns the window, clock and key mapping;
/// this owns every rule. One `advance_frame` call per display frame.
pub struct App {
    settings: Settings,
    chart: Arc<ChartData>,
    session: GameSession,
    seed: Option<u64>,
}

impl App {
    /// Loads the chart named by the settings and opens a fresh session.
    pub fn new(settings: Settings) -> Result<App, ChartError> {
        let chart = Arc::new(ChartData::load(&settings.chart_path)?);
        Ok(App::from_parts(settings, chart, None))
    }

    /// Builds on an already-parsed chart, for hosts that load their own.
    pub fn from_chart(settings: Settings, chart: ChartData) -> App {
        App::from_parts(settings, Arc::new(chart), None)
    }

    /// Like [`App::from_chart`] with a fixed RNG seed, so enemy spawns are
    /// reproducible.
    pub fn seeded(settings: Settings, chart: ChartData, seed: u64) -> App {
        App::from_parts(settings, Arc::new(chart), Some(seed))
    }

    fn from_parts(settings: Settings, chart: Arc<ChartData>, seed: Option<u64>) -> App {
        info!("{} starting at {} Hz.", WINDOW_TITLE, settings.refresh_rate_hz);
        let session = GameSession::new(&chart, settings.base_scroll_speed(), seed);
        App { settings, chart, session, seed }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    /// Runs exactly one frame. The background and the current state's UI are
    /// emitted first, then the frame counter advances, and only then does
    /// gameplay run, so the level chosen this frame starts playing on this
    /// same call.
    pub fn advance_frame(&mut self, input: &InputSnapshot) -> FrameOutput {
        let mut commands = Vec::new();
        let action = if input.quit { GameAction::Quit } else { GameAction::None };

        commands.push(RenderCmd::sprite(
            SpriteKey::Background,
            WINDOW_WIDTH as f32 / 2.0,
            WINDOW_HEIGHT as f32 / 2.0,
        ));

        match self.session.state {
            GameState::Start => {
                if let Some(level) = input.level_select {
                    self.session.select_level(level);
                }
                commands.push(RenderCmd::text(FontId::Title, WINDOW_TITLE, TITLE_X, TITLE_Y));
                commands.push(RenderCmd::text(
                    FontId::Info,
                    "SELECT LEVELS WITH",
                    SELECT_HINT_X,
                    SELECT_HINT_Y,
                ));
                commands.push(RenderCmd::text(
                    FontId::Info,
                    "NUMBER KEYS",
                    SELECT_KEYS_X,
                    SELECT_KEYS_Y,
                ));
                commands.push(RenderCmd::text(FontId::Info, "1 2 3", SELECT_LIST_X, SELECT_LIST_Y));
            }
            GameState::Play => {
                commands.push(RenderCmd::text(
                    FontId::Score,
                    format!("SCORE {}", self.session.board.points),
                    SCORE_X,
                    SCORE_Y,
                ));
                if !self.session.board.message.is_empty() {
                    commands.push(RenderCmd::centered_text(
                        FontId::Judgment,
                        self.session.board.message.clone(),
                        CENTER_MSG_Y,
                    ));
                }
            }
            GameState::Win => {
                commands.push(RenderCmd::centered_text(FontId::Title, "CLEAR!", CENTER_MSG_Y));
            }
            GameState::Lose => {
                commands.push(RenderCmd::centered_text(FontId::Title, "TRY AGAIN", CENTER_MSG_Y));
                commands.push(RenderCmd::centered_text(
                    FontId::Info,
                    "PRESS SPACE TO RETURN TO LEVEL SELECTION",
                    LOSE_HINT_Y,
                ));
                if input.confirm {
                    info!("Returning to level selection.");
                    self.session = GameSession::new(
                        &self.chart,
                        self.settings.base_scroll_speed(),
                        self.seed,
                    );
                }
            }
        }

        self.session.frame_count = self.session.frame_count.wrapping_add(1);

        if self.session.state == GameState::Play {
            self.session.play_frame(input, &mut commands);
        }

        FrameOutput { commands, action }
    }
}
