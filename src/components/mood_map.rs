use std::sync::Arc;
use leptos::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};
use moodmap_core::color::mood_color;
use moodmap_core::interaction::{InteractionController, Redraw, SelectCallback};
use moodmap_core::render;
use moodmap_core::types::{Dimensions, PixelPoint, Track};
use crate::canvas::canvas_surface::{get_canvas_ctx, CanvasSurface};
use crate::canvas::resize::{client_size, ResizeWatcher};

// The observed surface has a fixed height so the canvas backing store can
// follow it without feeding back into the element's own size.
const SURFACE_STYLE: &str = "position: relative; width: 100%; height: 600px; padding: 0; border: 0; overflow: hidden;";
const CANVAS_STYLE: &str = "display: block; position: absolute; inset: 0; width: 100%; height: 100%;";

fn tooltip_style(at: PixelPoint) -> String {
    format!("position: absolute; left: {}px; top: {}px; pointer-events: none;", at.x, at.y)
}

/// Apply an event to the controller, notifying subscribers only when the
/// controller asks for a redraw.
fn dispatch(
    controller: RwSignal<InteractionController>,
    event: impl FnOnce(&mut InteractionController) -> Redraw,
) {
    controller.maybe_update(|c| event(c) == Redraw::Needed);
}

/// Interactive valence × energy map of `tracks`.
///
/// Hovering a point shows a tooltip (unless a track is selected); clicking a
/// point passes it to `on_select`. The selection itself is owned by the caller.
#[component]
pub fn MoodMap(
    #[prop(into)] tracks: Signal<Arc<Vec<Track>>>,
    #[prop(into)] selected: Signal<Option<Track>>,
    on_select: Callback<Track>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let select: SelectCallback = Arc::new(move |t: &Track| on_select.run(t.clone()));
    let controller = RwSignal::new(InteractionController::new(tracks.get_untracked(), select));

    // A new track list clears hover.
    Effect::new(move || {
        let list = tracks.get();
        dispatch(controller, |c| c.set_tracks(list));
    });

    // Redraw whenever tracks, selection, hover, or size change.
    Effect::new(move || {
        let selected = selected.get();
        let Some(canvas_el) = canvas_ref.get() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();

        controller.with(|c| {
            let dims = c.dimensions();
            if dims.is_degenerate() {
                return;
            }
            if canvas.width() != dims.width { canvas.set_width(dims.width); }
            if canvas.height() != dims.height { canvas.set_height(dims.height); }

            let Some(ctx) = get_canvas_ctx(canvas) else {
                log::error!("2d canvas context unavailable");
                return;
            };
            render::render(&mut CanvasSurface::new(&ctx), &c.frame(selected.as_ref()));
        });
    });

    // Track the surface size for as long as the map is mounted.
    let watcher = StoredValue::new_local(None::<ResizeWatcher>);
    Effect::new(move || {
        let Some(container) = container_ref.get() else { return };
        if watcher.with_value(|w| w.is_some()) {
            return;
        }
        let el: &web_sys::Element = container.as_ref();
        let size = client_size(el);
        dispatch(controller, |c| c.on_resize(size.width, size.height));

        let on_size = move |d: Dimensions| dispatch(controller, |c| c.on_resize(d.width, d.height));
        match ResizeWatcher::observe(el, on_size) {
            Ok(w) => watcher.set_value(Some(w)),
            Err(e) => log::error!("Failed to observe map container: {e:?}"),
        }
    });
    on_cleanup(move || watcher.dispose());

    // ── Pointer handlers ──────────────────────────────────────────────────────

    let pointer_pos = move |ev: &MouseEvent| -> Option<PixelPoint> {
        let canvas_el = canvas_ref.get_untracked()?;
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        let rect = canvas.get_bounding_client_rect();
        Some(PixelPoint::new(
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
        ))
    };

    let on_mousemove = move |ev: MouseEvent| {
        if let Some(p) = pointer_pos(&ev) {
            dispatch(controller, |c| c.on_pointer_move(p));
        }
    };

    let on_mouseleave = move |_: MouseEvent| {
        dispatch(controller, |c| c.on_pointer_leave());
    };

    let on_click = move |ev: MouseEvent| {
        let Some(p) = pointer_pos(&ev) else { return };
        controller.with_untracked(|c| {
            c.on_click(p);
        });
    };

    let tooltip = Memo::new(move |_| {
        let selected = selected.get();
        controller.with(|c| c.tooltip(selected.as_ref()))
    });

    view! {
        <div class="mood-canvas">
            <div node_ref=container_ref class="mood-surface" style=SURFACE_STYLE>
                <canvas
                    node_ref=canvas_ref
                    style=CANVAS_STYLE
                    on:click=on_click
                    on:mousemove=on_mousemove
                    on:mouseleave=on_mouseleave
                />

                {move || tooltip.get().map(|tip| {
                    let badge = format!("background: {};", mood_color(&tip.mood).to_css());
                    view! {
                        <div class="mood-tooltip" style=tooltip_style(tip.at)>
                            <div class="mood-tooltip-title">{tip.title}</div>
                            <div class="mood-tooltip-artist">{tip.artist}</div>
                            <span class="mood-badge" style=badge>{tip.mood.key().to_string()}</span>
                        </div>
                    }
                })}
            </div>

            <div class="mood-axes">
                <div class="mood-axis">"Horizontal axis: Valence (negative to positive emotion)"</div>
                <div class="mood-axis">"Vertical axis: Energy (calm to energetic)"</div>
            </div>
        </div>
    }
}
