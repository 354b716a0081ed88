//! Rendering: draws the board to a drawing surface.
//!
//! [`draw`] is written against the [`Surface`] trait and never mutates board
//! state. [`CanvasSurface`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]; its fallible calls propagate
//! `JsValue` errors to the caller ([`crate::engine::Engine::render`]).

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::geom::Viewport;
use crate::rects::RectStore;

/// Drawing commands the board needs from a host.
pub trait Surface {
    type Error;

    /// Blit the background image scaled to cover `viewport` from the origin.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the blit fails.
    fn draw_background(&mut self, viewport: Viewport) -> Result<(), Self::Error>;

    /// Fill an axis-aligned rectangle with a solid color.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the fill fails.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) -> Result<(), Self::Error>;
}

/// Draw the full frame: background first, then every rectangle in store order.
///
/// # Errors
///
/// Stops at and returns the first surface error.
pub fn draw<S: Surface>(surface: &mut S, rects: &RectStore, viewport: Viewport, fill: &str) -> Result<(), S::Error> {
    surface.draw_background(viewport)?;
    for rect in rects.iter() {
        let (x, y, w, h) = rect.bounds();
        surface.fill_rect(x, y, w, h, fill)?;
    }
    Ok(())
}

/// [`Surface`] backed by a browser 2D context and a decoded background image.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    background: &'a HtmlImageElement,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, background: &'a HtmlImageElement) -> Self {
        Self { ctx, background }
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn draw_background(&mut self, viewport: Viewport) -> Result<(), JsValue> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(self.background, 0.0, 0.0, viewport.width, viewport.height)
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill_rect(x, y, w, h);
        Ok(())
    }
}
