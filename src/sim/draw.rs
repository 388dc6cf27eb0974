//! Per-frame draw request
//!
//! A snapshot of everything a renderer needs. Renderers never look at
//! [`GameState`] directly.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{GameState, PipeRole};

/// Score text placement
pub const SCORE_TEXT_X: f64 = 10.0;
pub const SCORE_TEXT_Y: f64 = 35.0;
pub const SCORE_FONT_PX: f64 = 32.0;

/// The four static images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Background,
    Bird,
    TopPipe,
    BottomPipe,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [
        Sprite::Background,
        Sprite::Bird,
        Sprite::TopPipe,
        Sprite::BottomPipe,
    ];

    /// Asset file name, relative to the page
    pub fn file_name(&self) -> &'static str {
        match self {
            Sprite::Background => "flappybirdbg.png",
            Sprite::Bird => "flappybird.png",
            Sprite::TopPipe => "toppipe.png",
            Sprite::BottomPipe => "bottompipe.png",
        }
    }
}

impl From<PipeRole> for Sprite {
    fn from(role: PipeRole) -> Self {
        match role {
            PipeRole::Top => Sprite::TopPipe,
            PipeRole::Bottom => Sprite::BottomPipe,
        }
    }
}

/// One draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Image {
        sprite: Sprite,
        rect: Rect,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        size_px: f64,
    },
}

/// Renderable snapshot of a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRequest {
    /// Full-board background
    pub background: Rect,
    pub bird: Rect,
    /// Pipes in spawn order
    pub pipes: Vec<(PipeRole, Rect)>,
    /// Whole points
    pub score: u32,
    pub game_over: bool,
}

impl DrawRequest {
    pub fn from_state(state: &GameState) -> Self {
        let t = &state.tuning;
        Self {
            background: Rect::new(0.0, 0.0, t.board_width, t.board_height),
            bird: state.bird.rect(),
            pipes: state.pipes.iter().map(|p| (p.role, p.rect())).collect(),
            score: state.display_score(),
            game_over: state.game_over,
        }
    }

    /// Overlay text: the score, prefixed once the run is over
    pub fn score_text(&self) -> String {
        if self.game_over {
            format!("Game Over: {}", self.score)
        } else {
            self.score.to_string()
        }
    }

    /// Draw calls in paint order: background, bird, pipes, score
    pub fn commands(&self) -> Vec<DrawCommand> {
        let mut cmds = Vec::with_capacity(self.pipes.len() + 3);
        cmds.push(DrawCommand::Image {
            sprite: Sprite::Background,
            rect: self.background,
        });
        cmds.push(DrawCommand::Image {
            sprite: Sprite::Bird,
            rect: self.bird,
        });
        for &(role, rect) in &self.pipes {
            cmds.push(DrawCommand::Image {
                sprite: role.into(),
                rect,
            });
        }
        cmds.push(DrawCommand::Text {
            text: self.score_text(),
            x: SCORE_TEXT_X,
            y: SCORE_TEXT_Y,
            size_px: SCORE_FONT_PX,
        });
        cmds
    }
}
