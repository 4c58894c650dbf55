//! Layered frame construction for the mood map.
//!
//! Layers, bottom to top: background, grid, cluster halos with labels, cluster
//! links, track points. Every frame is rebuilt from its inputs; nothing is
//! carried over between frames.

use crate::cluster::{aggregate, Cluster};
use crate::color::{self, mood_color, GLOW_ALPHA, HALO_ALPHA, LINK_ALPHA};
use crate::coords::to_pixel;
use crate::draw::{DrawCommand, Paint, RadialGradient, Surface};
use crate::types::{Dimensions, PixelPoint, Track};

pub const GRID_DIVISIONS: u32 = 10;
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const LINK_LINE_WIDTH: f64 = 1.0;

pub const POINT_RADIUS: f64 = 5.0;
pub const HOVERED_POINT_RADIUS: f64 = 7.0;
pub const SELECTED_POINT_RADIUS: f64 = 8.0;
pub const HOVER_GLOW_RADIUS: f64 = 12.0;
pub const SELECTED_GLOW_RADIUS: f64 = 16.0;
pub const SELECTED_RING_RADIUS: f64 = 9.0;
pub const SELECTED_RING_WIDTH: f64 = 2.0;

pub const LABEL_FONT: &str = "bold 16px Inter, sans-serif";
/// Label anchor relative to the top of a cluster halo.
const LABEL_DX: f64 = -30.0;
const LABEL_DY: f64 = -10.0;

/// Background gradient reaches this fraction of the surface width.
const BACKGROUND_SPAN: f64 = 1.0 / 1.5;

/// Everything one frame depends on.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub tracks: &'a [Track],
    pub hovered: Option<&'a Track>,
    pub selected: Option<&'a Track>,
    pub dims: Dimensions,
}

fn is_same(candidate: Option<&Track>, track: &Track) -> bool {
    candidate.is_some_and(|c| c.same_track(track))
}

fn draw_background(out: &mut Vec<DrawCommand>, w: f64, h: f64) {
    let center = PixelPoint::new(w / 2.0, h / 2.0);
    out.push(DrawCommand::Clear { width: w, height: h });
    out.push(DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width: w,
        height: h,
        paint: Paint::Radial(RadialGradient::new(
            center,
            w * BACKGROUND_SPAN,
            color::BACKGROUND_INNER,
            color::BACKGROUND_OUTER,
        )),
    });
}

fn draw_grid(out: &mut Vec<DrawCommand>, w: f64, h: f64) {
    let line = |from, to| DrawCommand::StrokeLine {
        from,
        to,
        color: color::GRID,
        line_width: GRID_LINE_WIDTH,
    };
    // Positions are k * size / n rather than accumulated steps so the last
    // line lands exactly on the far edge.
    let n = GRID_DIVISIONS as f64;
    for k in 0..=GRID_DIVISIONS {
        let y = k as f64 * h / n;
        out.push(line(PixelPoint::new(0.0, y), PixelPoint::new(w, y)));
    }
    for k in 0..=GRID_DIVISIONS {
        let x = k as f64 * w / n;
        out.push(line(PixelPoint::new(x, 0.0), PixelPoint::new(x, h)));
    }
}

fn draw_halos(out: &mut Vec<DrawCommand>, clusters: &[Cluster<'_>], dims: Dimensions) {
    for cluster in clusters {
        let base = mood_color(&cluster.mood);
        let center = cluster.pixel_centroid(dims);
        out.push(DrawCommand::FillCircle {
            center,
            radius: cluster.radius,
            paint: Paint::Radial(RadialGradient::new(
                center,
                cluster.radius,
                base.with_alpha(HALO_ALPHA),
                base.with_alpha(0.0),
            )),
        });
        out.push(DrawCommand::FillText {
            text: cluster.mood.label(),
            at: PixelPoint::new(center.x + LABEL_DX, center.y - cluster.radius + LABEL_DY),
            font: LABEL_FONT,
            color: base,
        });
    }
}

/// Consecutive members only (i → i+1), not a complete graph.
fn draw_links(out: &mut Vec<DrawCommand>, clusters: &[Cluster<'_>], dims: Dimensions) {
    for cluster in clusters.iter().filter(|c| c.len() > 1) {
        let color = mood_color(&cluster.mood).with_alpha(LINK_ALPHA);
        for pair in cluster.members.windows(2) {
            out.push(DrawCommand::StrokeLine {
                from: to_pixel(pair[0].coordinates, dims),
                to: to_pixel(pair[1].coordinates, dims),
                color,
                line_width: LINK_LINE_WIDTH,
            });
        }
    }
}

fn draw_points(out: &mut Vec<DrawCommand>, frame: &Frame<'_>) {
    for track in frame.tracks {
        let at = to_pixel(track.coordinates, frame.dims);
        let base = mood_color(&track.mood);
        let selected = is_same(frame.selected, track);
        let hovered = is_same(frame.hovered, track);

        if selected || hovered {
            let radius = if selected { SELECTED_GLOW_RADIUS } else { HOVER_GLOW_RADIUS };
            out.push(DrawCommand::FillCircle {
                center: at,
                radius,
                paint: Paint::Solid(base.with_alpha(GLOW_ALPHA)),
            });
        }

        let radius = if selected {
            SELECTED_POINT_RADIUS
        } else if hovered {
            HOVERED_POINT_RADIUS
        } else {
            POINT_RADIUS
        };
        out.push(DrawCommand::FillCircle { center: at, radius, paint: Paint::Solid(base) });

        if selected {
            out.push(DrawCommand::StrokeCircle {
                center: at,
                radius: SELECTED_RING_RADIUS,
                color: color::WHITE,
                line_width: SELECTED_RING_WIDTH,
            });
        }
    }
}

/// Build the ordered command list for `frame`. A zero-sized surface yields an
/// empty list.
pub fn build_frame(frame: &Frame<'_>) -> Vec<DrawCommand> {
    let mut out = Vec::new();
    if frame.dims.is_degenerate() {
        log::debug!("skipping render on {}x{} surface", frame.dims.width, frame.dims.height);
        return out;
    }
    let w = frame.dims.width as f64;
    let h = frame.dims.height as f64;

    draw_background(&mut out, w, h);
    draw_grid(&mut out, w, h);

    if frame.tracks.is_empty() {
        return out;
    }

    let clusters = aggregate(frame.tracks, frame.dims);
    draw_halos(&mut out, &clusters, frame.dims);
    draw_links(&mut out, &clusters, frame.dims);
    draw_points(&mut out, frame);
    out
}

/// Render `frame` onto `surface`. Returns the number of commands issued.
pub fn render<S: Surface + ?Sized>(surface: &mut S, frame: &Frame<'_>) -> usize {
    let commands = build_frame(frame);
    for cmd in &commands {
        surface.draw(cmd);
    }
    commands.len()
}
