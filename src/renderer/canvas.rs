//! Canvas 2D draw target for the browser build

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::DrawTarget;
use crate::sim::{Rect, Sprite};

/// Draws onto a canvas with the four decoded sprite images
pub struct CanvasTarget {
    ctx: CanvasRenderingContext2d,
    /// Shared, read-only image per sprite
    images: HashMap<Sprite, HtmlImageElement>,
}

impl CanvasTarget {
    /// Grab the 2D context and decode every sprite under `asset_root`.
    /// Fails if any image cannot be loaded.
    pub async fn new(canvas: &HtmlCanvasElement, asset_root: &str) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut images = HashMap::with_capacity(Sprite::ALL.len());
        for sprite in Sprite::ALL {
            let img = HtmlImageElement::new()?;
            img.set_src(&format!("{}{}", asset_root, sprite.file_name()));
            JsFuture::from(img.decode()).await?;
            log::info!("Loaded sprite {}", sprite.file_name());
            images.insert(sprite, img);
        }

        Ok(Self { ctx, images })
    }
}

impl DrawTarget for CanvasTarget {
    type Error = JsValue;

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) -> Result<(), JsValue> {
        let img = self
            .images
            .get(&sprite)
            .ok_or_else(|| JsValue::from_str(sprite.file_name()))?;
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            rect.pos.x,
            rect.pos.y,
            rect.size.x,
            rect.size.y,
        )
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, size_px: f64) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str("white");
        self.ctx.set_font(&format!("{}px sans-serif", size_px));
        self.ctx.fill_text(text, x, y)
    }
}
