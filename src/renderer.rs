// Canvas 2d implementation of `Surface`. Holds on to the canvas element so
// the field can query its current size after the page resizes it.

use crate::color::Color;
use crate::error::HostError;
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasRenderer {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or(HostError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HostError::NoContext)?;
        Ok(CanvasRenderer { canvas, context })
    }

    // Match the canvas backing store to the window, as the page's full-screen
    // background expects. Changing the size also wipes the canvas.
    pub fn fit_to_window(&self, window: &web_sys::Window) -> Result<[f64; 2], JsValue> {
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or(HostError::WindowSize("innerWidth"))?;
        let height = window
            .inner_height()?
            .as_f64()
            .ok_or(HostError::WindowSize("innerHeight"))?;
        if self.canvas.width() != width as u32 {
            self.canvas.set_width(width as u32);
        }
        if self.canvas.height() != height as u32 {
            self.canvas.set_height(height as u32);
        }
        Ok(self.size())
    }
}

impl Surface for CanvasRenderer {
    type Error = JsValue;

    fn size(&self) -> [f64; 2] {
        [self.canvas.width() as f64, self.canvas.height() as f64]
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(x, y, width, height);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: [f64; 2],
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0)?;
        self.context
            .set_fill_style(&JsValue::from_str(&color.rgba_css(alpha)));
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        color: Color,
        alpha: f64,
        width: f64,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context
            .set_stroke_style(&JsValue::from_str(&color.rgba_css(alpha)));
        self.context.set_line_width(width);
        self.context.stroke();
        Ok(())
    }
}
