// Window
pub const WINDOW_TITLE: &str = "SHADOW DANCE";
pub const WINDOW_WIDTH: i32 = 1024;
pub const WINDOW_HEIGHT: i32 = 768;

// Judgment
pub const TARGET_Y: i32 = 657; // y of the grading target point in every lane
pub const PERFECT_RADIUS: f32 = 15.0;
pub const GOOD_RADIUS: f32 = 50.0;
pub const BAD_RADIUS: f32 = 100.0;
pub const FORCED_MISS_DISTANCE: f32 = 300.0; // fed to the grader when a note scrolls out
pub const ACTIVATE_RADIUS: f32 = 50.0; // bomb / special trigger range
pub const SPECIAL_POINTS: i32 = 15; // flat bonus for SpeedUp / SlowDown, never multiplied

// Notes
pub const NOTE_SPAWN_Y: i32 = 100; // normal + special
pub const HOLD_SPAWN_Y: i32 = 24; // hold + bomb
pub const HOLD_GRIP_OFFSET: i32 = 82; // press/release sample points sit this far from the note center

// Score timers
pub const MESSAGE_FRAMES: u32 = 30;
pub const MULTIPLIER_FRAMES: u32 = 480;

// Win thresholds
pub const WIN_SCORE_LEVEL_1: i32 = 150;
pub const WIN_SCORE_LEVEL_2: i32 = 400;
pub const WIN_SCORE_LEVEL_3: i32 = 350;

// Combat (level 3)
pub const ENEMY_SPAWN_INTERVAL: u32 = 600;
pub const ENEMY_SPAWN_X_MIN: i32 = 100;
pub const ENEMY_SPAWN_X_MAX: i32 = 1000;
pub const ENEMY_SPAWN_Y_MIN: i32 = 100;
pub const ENEMY_SPAWN_Y_MAX: i32 = 600;
pub const ENEMY_LEFT_BOUND: i32 = 100;
pub const ENEMY_RIGHT_BOUND: i32 = 900;
pub const STEAL_RADIUS: f32 = 104.0;
pub const GUARDIAN_X: f32 = 800.0;
pub const GUARDIAN_Y: f32 = 600.0;
pub const ARROW_SPEED: f32 = 6.0;
pub const ARROW_HIT_RADIUS: f32 = 62.0;

// --- UI Layout ---
pub const LANE_Y: f32 = 384.0;
pub const TITLE_X: f32 = 220.0;
pub const TITLE_Y: f32 = 186.0;
pub const SELECT_HINT_X: f32 = 340.0;
pub const SELECT_HINT_Y: f32 = 352.0;
pub const SELECT_KEYS_X: f32 = 405.0;
pub const SELECT_KEYS_Y: f32 = 392.0;
pub const SELECT_LIST_X: f32 = 465.0;
pub const SELECT_LIST_Y: f32 = 472.0;
pub const SCORE_X: f32 = 35.0;
pub const SCORE_Y: f32 = 35.0;
pub const CENTER_MSG_Y: f32 = WINDOW_HEIGHT as f32 / 2.0 - 20.0;
pub const LOSE_HINT_Y: f32 = 500.0;
