//! Render commands emitted by the core.
//!
//! The core never draws; each frame it returns a list of `RenderCmd` values
//! and the host maps sprite keys and fonts onto its own assets. Horizontal
//! centering is expressed with `TextAlign::Center` so the host does the text
//! measuring.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Logical fonts, with the pixel size the reference assets were tuned for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontId {
    Title,
    Info,
    Score,
    Judgment,
}

impl FontId {
    pub fn px(self) -> f32 {
        match self {
            FontId::Title => 64.0,
            FontId::Info => 24.0,
            FontId::Score => 30.0,
            FontId::Judgment => 40.0,
        }
    }
}

/// Identifies a sprite the way the game's asset set is keyed. Lane-bound
/// sprites carry the lane name, special notes carry their subtype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpriteKey {
    Background,
    Lane(String),
    Note(String),
    HoldNote(String),
    BombNote,
    SpecialNote(String),
    Guardian,
    Enemy,
    Arrow,
}

impl SpriteKey {
    /// Asset stem for this sprite, e.g. `laneLeft`, `noteUp`, `note2x`.
    pub fn asset_name(&self) -> String {
        match self {
            SpriteKey::Background => "background".to_string(),
            SpriteKey::Lane(name) => format!("lane{}", name),
            SpriteKey::Note(lane) => format!("note{}", lane),
            SpriteKey::HoldNote(lane) => format!("holdNote{}", lane),
            SpriteKey::BombNote => "noteBomb".to_string(),
            SpriteKey::SpecialNote(subtype) => format!("note{}", subtype),
            SpriteKey::Guardian => "guardian".to_string(),
            SpriteKey::Enemy => "enemy".to_string(),
            SpriteKey::Arrow => "arrow".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCmd {
    Sprite {
        key: SpriteKey,
        x: f32,
        y: f32,
        rotation: f32,
    },
    Text {
        font: FontId,
        content: String,
        x: f32,
        y: f32,
        align: TextAlign,
    },
}

impl RenderCmd {
    pub fn sprite(key: SpriteKey, x: f32, y: f32) -> Self {
        RenderCmd::Sprite { key, x, y, rotation: 0.0 }
    }

    pub fn rotated_sprite(key: SpriteKey, x: f32, y: f32, rotation: f32) -> Self {
        RenderCmd::Sprite { key, x, y, rotation }
    }

    pub fn text(font: FontId, content: impl Into<String>, x: f32, y: f32) -> Self {
        RenderCmd::Text { font, content: content.into(), x, y, align: TextAlign::Left }
    }

    pub fn centered_text(font: FontId, content: impl Into<String>, y: f32) -> Self {
        RenderCmd::Text {
            font,
            content: content.into(),
            x: crate::config::WINDOW_WIDTH as f32 / 2.0,
            y,
            align: TextAlign::Center,
        }
    }
}
