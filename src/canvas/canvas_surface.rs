use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use moodmap_core::draw::{DrawCommand, Paint, RadialGradient, Surface};

const TAU: f64 = std::f64::consts::TAU;

pub fn get_canvas_ctx(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()?
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Executes draw commands on a 2D canvas context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, g: &RadialGradient) -> Option<web_sys::CanvasGradient> {
        let grad = match self.ctx.create_radial_gradient(
            g.center.x, g.center.y, g.inner_radius,
            g.center.x, g.center.y, g.outer_radius,
        ) {
            Ok(grad) => grad,
            Err(e) => {
                // Negative or non-finite radii end up here.
                log::error!("Failed to create radial gradient: {e:?}");
                return None;
            }
        };
        for stop in &g.stops {
            let _ = grad.add_color_stop(stop.offset as f32, &stop.color.to_css());
        }
        Some(grad)
    }

    /// Set the fill style. Returns false if nothing should be filled.
    fn set_fill(&self, paint: &Paint) -> bool {
        match paint {
            Paint::Solid(c) => {
                self.ctx.set_fill_style_str(&c.to_css());
                true
            }
            Paint::Radial(g) => match self.gradient(g) {
                Some(grad) => {
                    self.ctx.set_fill_style_canvas_gradient(&grad);
                    true
                }
                None => false,
            },
        }
    }
}

impl Surface for CanvasSurface<'_> {
    fn draw(&mut self, cmd: &DrawCommand) {
        let ctx = self.ctx;
        match cmd {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width, *height);
            }
            DrawCommand::FillRect { x, y, width, height, paint } => {
                if self.set_fill(paint) {
                    ctx.fill_rect(*x, *y, *width, *height);
                }
            }
            DrawCommand::FillCircle { center, radius, paint } => {
                if self.set_fill(paint) {
                    ctx.begin_path();
                    let _ = ctx.arc(center.x, center.y, *radius, 0.0, TAU);
                    ctx.fill();
                }
            }
            DrawCommand::StrokeCircle { center, radius, color, line_width } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*line_width);
                ctx.begin_path();
                let _ = ctx.arc(center.x, center.y, *radius, 0.0, TAU);
                ctx.stroke();
            }
            DrawCommand::StrokeLine { from, to, color, line_width } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*line_width);
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
            DrawCommand::FillText { text, at, font, color } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(&color.to_css());
                let _ = ctx.fill_text(text, at.x, at.y);
            }
        }
    }
}
