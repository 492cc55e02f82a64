use crate::config::{
    ARROW_HIT_RADIUS, ARROW_SPEED, ENEMY_LEFT_BOUND, ENEMY_RIGHT_BOUND, ENEMY_SPAWN_X_MAX,
    ENEMY_SPAWN_X_MIN, ENEMY_SPAWN_Y_MAX, ENEMY_SPAWN_Y_MIN, GUARDIAN_X, GUARDIAN_Y, STEAL_RADIUS,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::game::note::{Note, NoteKind};
use crate::input::InputSnapshot;
use crate::render::{RenderCmd, SpriteKey};
use crate::utils::math::distance;
use log::debug;
use rand::Rng;

/// Level-3 patrol enemy. Walks horizontally between the patrol bounds and
/// steals any normal note it passes close to.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    /// -1 walks left, 1 walks right.
    pub direction: i32,
    /// Set once an arrow lands; a fired enemy is inert and never drawn.
    pub fired: bool,
}

impl Enemy {
    pub fn spawn(rng: &mut impl Rng) -> Enemy {
        Enemy {
            x: rng.random_range(ENEMY_SPAWN_X_MIN..ENEMY_SPAWN_X_MAX),
            y: rng.random_range(ENEMY_SPAWN_Y_MIN..ENEMY_SPAWN_Y_MAX),
            direction: if rng.random_range(0..2) == 0 { -1 } else { 1 },
            fired: false,
        }
    }
}

/// Projectile loosed by the guardian. Flies along a heading frozen at spawn;
/// it never retargets.
#[derive(Clone, Debug)]
pub struct Arrow {
    pub x: f32,
    pub y: f32,
    /// Heading in radians, also the sprite rotation.
    pub rotation: f32,
    /// Set on impact or when the arrow leaves the window.
    pub fired: bool,
}

impl Arrow {
    /// Spawns at the guardian's post, aimed at where the target stands right
    /// now.
    pub fn aimed_at(target_x: i32, target_y: i32) -> Arrow {
        let dx = target_x as f32 - GUARDIAN_X;
        let dy = target_y as f32 - GUARDIAN_Y;
        Arrow { x: GUARDIAN_X, y: GUARDIAN_Y, rotation: dy.atan2(dx), fired: false }
    }
}

/// Per-frame enemy pass: draw, bounce at the patrol bounds, take a step,
/// then steal notes in range. Fired enemies are skipped entirely.
pub fn update_enemies(
    enemies: &mut [Enemy],
    notes: &mut [Note],
    frame_count: u32,
    commands: &mut Vec<RenderCmd>,
) {
    for enemy in enemies.iter_mut() {
        if enemy.fired {
            continue;
        }
        commands.push(RenderCmd::sprite(SpriteKey::Enemy, enemy.x as f32, enemy.y as f32));
        if enemy.x < ENEMY_LEFT_BOUND {
            enemy.direction = 1;
        } else if enemy.x > ENEMY_RIGHT_BOUND {
            enemy.direction = -1;
        }
        enemy.x += enemy.direction;
        steal_notes(enemy, notes, frame_count);
    }
}

/// An enemy silently absorbs every eligible normal note within the steal
/// radius. Stolen notes keep scrolling but no longer render or grade.
fn steal_notes(enemy: &Enemy, notes: &mut [Note], frame_count: u32) {
    for note in notes.iter_mut() {
        if !note.is_eligible(frame_count) {
            continue;
        }
        if let NoteKind::Normal { alive, .. } = &mut note.kind {
            if *alive
                && distance(note.x as f32, note.y as f32, enemy.x as f32, enemy.y as f32)
                    <= STEAL_RADIUS
            {
                *alive = false;
                debug!("Enemy at ({}, {}) stole a note in lane {}.", enemy.x, enemy.y, note.lane);
            }
        }
    }
}

/// Fires an arrow at the nearest live enemy on the frame the fire key goes
/// down, then draws the guardian at its post. The new arrow is drawn and
/// advanced by the arrow pass later this same frame.
pub fn update_guardian(
    input: &InputSnapshot,
    enemies: &[Enemy],
    arrows: &mut Vec<Arrow>,
    commands: &mut Vec<RenderCmd>,
) {
    if input.fire {
        if let Some(enemy) = nearest_enemy(enemies) {
            debug!("Guardian fires at enemy ({}, {}).", enemy.x, enemy.y);
            arrows.push(Arrow::aimed_at(enemy.x, enemy.y));
        }
    }
    commands.push(RenderCmd::sprite(SpriteKey::Guardian, GUARDIAN_X, GUARDIAN_Y));
}

/// Nearest live enemy to the guardian; the first one encountered wins ties,
/// so targeting is deterministic.
fn nearest_enemy(enemies: &[Enemy]) -> Option<&Enemy> {
    let mut nearest: Option<(&Enemy, f32)> = None;
    for enemy in enemies {
        if enemy.fired {
            continue;
        }
        let dist = distance(enemy.x as f32, enemy.y as f32, GUARDIAN_X, GUARDIAN_Y);
        if nearest.is_none_or(|(_, best)| dist < best) {
            nearest = Some((enemy, dist));
        }
    }
    nearest.map(|(enemy, _)| enemy)
}

/// Per-frame arrow pass: draw, advance along the frozen heading, then
/// resolve the first collision before culling at the window edge.
pub fn update_arrows(arrows: &mut [Arrow], enemies: &mut [Enemy], commands: &mut Vec<RenderCmd>) {
    for arrow in arrows.iter_mut() {
        if arrow.fired {
            continue;
        }
        commands.push(RenderCmd::rotated_sprite(SpriteKey::Arrow, arrow.x, arrow.y, arrow.rotation));
        arrow.x += ARROW_SPEED * arrow.rotation.cos();
        arrow.y += ARROW_SPEED * arrow.rotation.sin();
        for enemy in enemies.iter_mut() {
            if !enemy.fired
                && distance(enemy.x as f32, enemy.y as f32, arrow.x, arrow.y) <= ARROW_HIT_RADIUS
            {
                enemy.fired = true;
                arrow.fired = true;
                debug!("Arrow hit enemy at ({}, {}).", enemy.x, enemy.y);
                break;
            }
        }
        if arrow.x < 0.0
            || arrow.x > (WINDOW_WIDTH - 1) as f32
            || arrow.y < 0.0
            || arrow.y > (WINDOW_HEIGHT - 1) as f32
        {
            arrow.fired = true;
        }
    }
}
