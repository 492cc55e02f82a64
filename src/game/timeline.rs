use crate::config::WINDOW_HEIGHT;
use crate::game::Level;
use crate::game::note::{Note, NoteEffect};
use crate::game::score::ScoreBoard;
use crate::input::InputSnapshot;
use crate::render::RenderCmd;

/// Runs one frame of the note timeline. Score timers tick first, then every
/// eligible note renders, reacts to input, and scrolls. Bomb activations
/// clear the rest of their lane before the pass moves on, so a note later in
/// file order never reacts on the frame it was cleared.
///
/// Returns true when the lose condition fired: the final note of the chart
/// has scrolled past the bottom of the window.
pub fn advance_notes(
    notes: &mut [Note],
    board: &mut ScoreBoard,
    scroll_speed: &mut i32,
    frame_count: u32,
    level: Level,
    input: &InputSnapshot,
    commands: &mut Vec<RenderCmd>,
) -> bool {
    board.tick();

    for i in 0..notes.len() {
        if !notes[i].is_eligible(frame_count) {
            continue;
        }
        let effect = notes[i].interact(input, board, scroll_speed, level, commands);
        if effect == NoteEffect::ClearLane {
            clear_lane(notes, i, frame_count);
        }
        // Cleared notes are skipped above, so their position stays frozen.
        notes[i].y += *scroll_speed;
    }

    notes.last().is_some_and(|last| last.y > WINDOW_HEIGHT)
}

/// Marks every other currently eligible note in the bomb's lane as cleared.
/// The bomb itself keeps scrolling.
fn clear_lane(notes: &mut [Note], bomb_index: usize, frame_count: u32) {
    let lane = notes[bomb_index].lane.clone();
    for (j, note) in notes.iter_mut().enumerate() {
        if j != bomb_index && note.lane == lane && note.is_eligible(frame_count) {
            note.cleared = true;
        }
    }
}
