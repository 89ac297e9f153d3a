//! 2D canvas render sink (web)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{RenderSink, Shapes};
use crate::sim::{Court, GameState};

const FILL_COLOR: &str = "#0095DD";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl RenderSink for CanvasRenderer {
    fn draw(&mut self, state: &GameState, court: &Court) {
        let shapes = Shapes::from_state(state, court);
        let ctx = &self.ctx;

        ctx.clear_rect(0.0, 0.0, court.width() as f64, court.height() as f64);
        ctx.set_fill_style_str(FILL_COLOR);

        ctx.begin_path();
        if let Err(e) = ctx.arc(
            shapes.ball.center.x as f64,
            shapes.ball.center.y as f64,
            shapes.ball.radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Ball draw failed: {:?}", e);
        }
        ctx.fill();
        ctx.close_path();

        ctx.begin_path();
        ctx.rect(
            shapes.paddle.origin.x as f64,
            shapes.paddle.origin.y as f64,
            shapes.paddle.size.x as f64,
            shapes.paddle.size.y as f64,
        );
        ctx.fill();
        ctx.close_path();
    }
}
