//! Rendering module
//!
//! Replays a frame's [`DrawRequest`] onto a [`DrawTarget`]. The browser
//! build draws to a Canvas 2D context; tests and the native runner record
//! the calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasTarget;

use crate::sim::{DrawCommand, DrawRequest, Rect, Sprite};

/// Something that can draw sprites and text
pub trait DrawTarget {
    type Error;

    /// Draw a sprite stretched to `rect`
    fn draw_image(&mut self, sprite: Sprite, rect: Rect) -> Result<(), Self::Error>;

    /// Draw white overlay text with its baseline at (`x`, `y`)
    fn fill_text(&mut self, text: &str, x: f64, y: f64, size_px: f64) -> Result<(), Self::Error>;
}

/// Paint a frame. Stops at the first failed draw call.
pub fn render<T: DrawTarget>(request: &DrawRequest, target: &mut T) -> Result<(), T::Error> {
    for cmd in request.commands() {
        match cmd {
            DrawCommand::Image { sprite, rect } => target.draw_image(sprite, rect)?,
            DrawCommand::Text {
                text,
                x,
                y,
                size_px,
            } => target.fill_text(&text, x, y, size_px)?,
        }
    }
    Ok(())
}

/// Target that just records the calls it receives
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub commands: Vec<DrawCommand>,
}

impl DrawTarget for RecordingTarget {
    type Error = std::convert::Infallible;

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Image { sprite, rect });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, size_px: f64) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size_px,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, place_pair};
    use crate::tuning::Tuning;

    struct FailOnPipes {
        drawn: usize,
    }

    impl DrawTarget for FailOnPipes {
        type Error = Sprite;

        fn draw_image(&mut self, sprite: Sprite, _rect: Rect) -> Result<(), Sprite> {
            if sprite == Sprite::TopPipe {
                return Err(sprite);
            }
            self.drawn += 1;
            Ok(())
        }

        fn fill_text(&mut self, _: &str, _: f64, _: f64, _: f64) -> Result<(), Sprite> {
            self.drawn += 1;
            Ok(())
        }
    }

    #[test]
    fn test_recording_matches_commands() {
        let mut state = GameState::new(Tuning::default(), 5);
        place_pair(&mut state, 0.3);
        let req = DrawRequest::from_state(&state);

        let mut target = RecordingTarget::default();
        render(&req, &mut target).unwrap();
        assert_eq!(target.commands, req.commands());
    }

    #[test]
    fn test_stops_on_error() {
        let mut state = GameState::new(Tuning::default(), 5);
        place_pair(&mut state, 0.3);
        let req = DrawRequest::from_state(&state);

        let mut target = FailOnPipes { drawn: 0 };
        assert_eq!(render(&req, &mut target), Err(Sprite::TopPipe));
        // Background and bird made it out
        assert_eq!(target.drawn, 2);
    }
}
