use shadowdance::app::{App, FrameOutput, GameAction};
use shadowdance::config::CENTER_MSG_Y;
use shadowdance::game::Level;
use shadowdance::game::chart::ChartData;
use shadowdance::game::session::{GameSession, GameState};
use shadowdance::input::{InputSnapshot, LaneAction};
use shadowdance::render::{FontId, RenderCmd, SpriteKey};
use shadowdance::settings::Settings;

fn app_with(chart_text: &str) -> App {
    let _ = env_logger::builder().is_test(true).try_init();
    let chart = ChartData::parse(chart_text).unwrap();
    App::seeded(Settings::default(), chart, 42)
}

fn has_text(out: &FrameOutput, needle: &str) -> bool {
    out.commands
        .iter()
        .any(|c| matches!(c, RenderCmd::Text { content, .. } if content == needle))
}

fn has_sprite(out: &FrameOutput, want: &SpriteKey) -> bool {
    out.commands
        .iter()
        .any(|c| matches!(c, RenderCmd::Sprite { key, .. } if key == want))
}

#[test]
fn test_start_screen_layout() {
    let mut app = app_with("Lane,Down,325\nDown,Normal,1\n");

    let out = app.advance_frame(&InputSnapshot::idle());

    assert_eq!(app.state(), GameState::Start);
    assert_eq!(out.action, GameAction::None);
    assert_eq!(out.commands[0], RenderCmd::sprite(SpriteKey::Background, 512.0, 384.0));
    assert!(out.commands.contains(&RenderCmd::text(FontId::Title, "SHADOW DANCE", 220.0, 186.0)));
    assert!(out.commands.contains(&RenderCmd::text(
        FontId::Info,
        "SELECT LEVELS WITH",
        340.0,
        352.0
    )));
    assert!(out.commands.contains(&RenderCmd::text(FontId::Info, "NUMBER KEYS", 405.0, 392.0)));
    assert!(out.commands.contains(&RenderCmd::text(FontId::Info, "1 2 3", 465.0, 472.0)));
}

#[test]
fn test_level_select_starts_play_on_the_same_frame() {
    let mut app = app_with("Lane,Down,325\nLane,Special,665\nDown,Normal,1\n");

    let out = app.advance_frame(&InputSnapshot::select_level(Level::Two));

    assert_eq!(app.state(), GameState::Play);
    assert_eq!(app.session().level, Level::Two);
    // the start screen was still drawn on the transition frame
    assert!(has_text(&out, "SHADOW DANCE"));
    // and gameplay already ran underneath it
    assert!(has_sprite(&out, &SpriteKey::Lane("Down".to_string())));
}

#[test]
fn test_level_select_restarts_the_frame_counter() {
    let mut app = app_with("Lane,Down,325\nDown,Normal,1\n");

    app.advance_frame(&InputSnapshot::idle());
    app.advance_frame(&InputSnapshot::idle());
    app.advance_frame(&InputSnapshot::select_level(Level::One));

    assert_eq!(app.session().frame_count, 1);
}

#[test]
fn test_score_line_appears_in_play() {
    let mut app = app_with("Lane,Down,325\nDown,Normal,1\n");

    app.advance_frame(&InputSnapshot::select_level(Level::One));
    let out = app.advance_frame(&InputSnapshot::idle());

    assert!(has_text(&out, "SCORE 0"));
}

#[test]
fn test_perfect_press_end_to_end() {
    let mut app = app_with("Lane,Down,325\nDown,Normal,1\n");

    app.advance_frame(&InputSnapshot::select_level(Level::One));
    for _ in 2..140 {
        app.advance_frame(&InputSnapshot::idle());
    }
    // the note sits one pixel above the target on frame 140
    app.advance_frame(&InputSnapshot::press(LaneAction::Down));
    assert_eq!(app.session().board.points, 10);

    let out = app.advance_frame(&InputSnapshot::idle());
    assert!(has_text(&out, "SCORE 10"));
    assert!(out.commands.contains(&RenderCmd::centered_text(
        FontId::Judgment,
        "PERFECT",
        CENTER_MSG_Y
    )));
}

#[test]
fn test_lose_screen_and_restart() {
    let mut app = app_with("Lane,Down,325\nDown,Normal,1\n");

    app.advance_frame(&InputSnapshot::select_level(Level::One));
    // the unplayed note leaves the window on frame 168
    for _ in 2..=168 {
        app.advance_frame(&InputSnapshot::idle());
    }
    assert_eq!(app.state(), GameState::Lose);
    assert_eq!(app.session().board.points, -5); // the forced miss on the way out

    let out = app.advance_frame(&InputSnapshot::idle());
    assert!(has_text(&out, "TRY AGAIN"));
    assert!(has_text(&out, "PRESS SPACE TO RETURN TO LEVEL SELECTION"));

    let mut confirm = InputSnapshot::idle();
    confirm.confirm = true;
    app.advance_frame(&confirm);

    assert_eq!(app.state(), GameState::Start);
    assert_eq!(app.session().board.points, 0);
    assert_eq!(app.session().notes[0].y, 100); // pristine chart copy

    // the start screen is back and a new run can begin
    let out = app.advance_frame(&InputSnapshot::idle());
    assert!(has_text(&out, "SHADOW DANCE"));
    app.advance_frame(&InputSnapshot::select_level(Level::Three));
    assert_eq!(app.state(), GameState::Play);
}

#[test]
fn test_win_shows_clear_and_is_terminal() {
    // fifteen well-spaced notes: one PERFECT each reaches the level-1
    // threshold of 150 exactly on the last press
    let mut chart_text = String::from("Lane,Down,325\n");
    for k in 0..15u32 {
        chart_text.push_str(&format!("Down,Normal,{}\n", 1 + 150 * k));
    }
    let mut app = app_with(&chart_text);

    app.advance_frame(&InputSnapshot::select_level(Level::One));
    for pass in 2..=2240u32 {
        let input = if pass >= 140 && (pass - 140) % 150 == 0 {
            InputSnapshot::press(LaneAction::Down)
        } else {
            InputSnapshot::idle()
        };
        app.advance_frame(&input);
    }

    assert_eq!(app.state(), GameState::Win);
    assert_eq!(app.session().board.points, 150);

    let out = app.advance_frame(&InputSnapshot::idle());
    assert!(out.commands.contains(&RenderCmd::centered_text(
        FontId::Title,
        "CLEAR!",
        CENTER_MSG_Y
    )));

    // WIN is terminal: neither confirm nor more presses leave it
    let mut confirm = InputSnapshot::idle();
    confirm.confirm = true;
    app.advance_frame(&confirm);
    app.advance_frame(&InputSnapshot::press(LaneAction::Down));
    assert_eq!(app.state(), GameState::Win);
}

#[test]
fn test_same_frame_win_and_loss_ends_in_lose() {
    let _ = env_logger::builder().is_test(true).try_init();
    let chart = ChartData::parse("Lane,Down,325\nDown,Normal,1\nDown,Normal,1\n").unwrap();
    let mut session = GameSession::new(&chart, 4, Some(42));
    session.select_level(Level::One);

    // one PERFECT short of the threshold while the last note is about to
    // leave the window
    session.frame_count = 10;
    session.board.points = 140;
    session.notes[0].y = 656;
    session.notes[1].y = 768;

    let mut commands = Vec::new();
    session.play_frame(&InputSnapshot::press(LaneAction::Down), &mut commands);

    // the press grades PERFECT (latching the win) and MISS on the way out
    assert!(session.board.won);
    assert_eq!(session.board.points, 145);
    assert_eq!(session.state, GameState::Lose);
}

#[test]
fn test_quit_is_reported_from_any_state() {
    let mut app = app_with("Lane,Down,325\nDown,Normal,1\n");
    let mut quit = InputSnapshot::idle();
    quit.quit = true;

    let out = app.advance_frame(&quit);
    assert_eq!(out.action, GameAction::Quit);
    assert_eq!(app.state(), GameState::Start);

    app.advance_frame(&InputSnapshot::select_level(Level::One));
    let out = app.advance_frame(&quit);
    assert_eq!(out.action, GameAction::Quit);
    assert_eq!(app.state(), GameState::Play);
}

#[test]
fn test_level_one_hides_the_special_lane() {
    let chart = "Lane,Down,325\nLane,Special,665\nSpecial,SpeedUp,1\nDown,Normal,1\n";

    let mut app = app_with(chart);
    let out = app.advance_frame(&InputSnapshot::select_level(Level::One));
    assert!(has_sprite(&out, &SpriteKey::Lane("Down".to_string())));
    assert!(!has_sprite(&out, &SpriteKey::Lane("Special".to_string())));
    assert!(!has_sprite(&out, &SpriteKey::SpecialNote("SpeedUp".to_string())));

    let mut app = app_with(chart);
    let out = app.advance_frame(&InputSnapshot::select_level(Level::Two));
    assert!(has_sprite(&out, &SpriteKey::Lane("Special".to_string())));
    assert!(has_sprite(&out, &SpriteKey::SpecialNote("SpeedUp".to_string())));
}

#[test]
fn test_hidden_special_note_still_decides_the_loss() {
    let mut app = app_with("Lane,Special,665\nSpecial,SpeedUp,1\n");

    app.advance_frame(&InputSnapshot::select_level(Level::One));
    for _ in 2..=168 {
        app.advance_frame(&InputSnapshot::idle());
    }

    assert_eq!(app.state(), GameState::Lose);
}

#[test]
fn test_enemies_spawn_on_the_level_three_cadence() {
    // the lone note spawns late enough to keep the run alive past frame 600
    let mut app = app_with("Lane,Down,325\nDown,Normal,1000\n");

    app.advance_frame(&InputSnapshot::select_level(Level::Three));
    let mut first_enemy_pass = None;
    for pass in 2..=600u32 {
        let out = app.advance_frame(&InputSnapshot::idle());
        if first_enemy_pass.is_none() && has_sprite(&out, &SpriteKey::Enemy) {
            first_enemy_pass = Some(pass);
        }
    }

    assert_eq!(first_enemy_pass, Some(600));
    assert_eq!(app.session().enemies.len(), 1);

    // the guardian answers the fire key the following frame
    let mut fire = InputSnapshot::idle();
    fire.fire = true;
    let out = app.advance_frame(&fire);
    assert_eq!(app.session().arrows.len(), 1);
    assert!(has_sprite(&out, &SpriteKey::Arrow));
}

#[test]
fn test_guardian_stands_watch_on_level_three_only() {
    let mut app = app_with("Lane,Down,325\nDown,Normal,1000\n");
    app.advance_frame(&InputSnapshot::select_level(Level::Three));
    let out = app.advance_frame(&InputSnapshot::idle());
    assert!(has_sprite(&out, &SpriteKey::Guardian));

    let mut app = app_with("Lane,Down,325\nDown,Normal,1000\n");
    app.advance_frame(&InputSnapshot::select_level(Level::Two));
    let out = app.advance_frame(&InputSnapshot::idle());
    assert!(!has_sprite(&out, &SpriteKey::Guardian));
}

#[test]
fn test_no_enemies_outside_level_three() {
    let mut app = app_with("Lane,Down,325\nDown,Normal,1000\n");

    app.advance_frame(&InputSnapshot::select_level(Level::Two));
    for _ in 2..=601 {
        app.advance_frame(&InputSnapshot::idle());
    }

    assert!(app.session().enemies.is_empty());
}
