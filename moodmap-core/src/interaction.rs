//! Hover/selection state machine driven by pointer and resize events.
//!
//! The controller owns the hovered track and the surface size. The selected
//! track belongs to the caller: it is only read here, and changed by way of the
//! selection callback.

use std::fmt;
use std::sync::Arc;

use crate::coords::to_pixel;
use crate::hit_test::{classify_click, classify_hover};
use crate::render::Frame;
use crate::types::{Dimensions, Mood, PixelPoint, Track};

/// Called once per successful click-hit.
pub type SelectCallback = Arc<dyn Fn(&Track) + Send + Sync>;

/// Tooltip anchor offset from the hovered point, in pixels.
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// Whether the host should render a new frame after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    Needed,
    Skip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub artist: String,
    pub mood: Mood,
    /// Top-left corner in surface pixels.
    pub at: PixelPoint,
}

#[derive(Clone)]
pub struct InteractionController {
    tracks: Arc<Vec<Track>>,
    /// Index into `tracks`.
    hovered: Option<usize>,
    dims: Dimensions,
    on_select: SelectCallback,
}

impl fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("tracks", &self.tracks.len())
            .field("hovered", &self.hovered)
            .field("dims", &self.dims)
            .finish_non_exhaustive()
    }
}

impl InteractionController {
    pub fn new(tracks: Arc<Vec<Track>>, on_select: SelectCallback) -> Self {
        Self {
            tracks,
            hovered: None,
            dims: Dimensions::default(),
            on_select,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn hovered(&self) -> Option<&Track> {
        self.hovered.and_then(|i| self.tracks.get(i))
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Replace the track list. A different list (by reference) clears hover.
    pub fn set_tracks(&mut self, tracks: Arc<Vec<Track>>) -> Redraw {
        if Arc::ptr_eq(&self.tracks, &tracks) {
            return Redraw::Skip;
        }
        self.tracks = tracks;
        self.hovered = None;
        Redraw::Needed
    }

    pub fn on_pointer_move(&mut self, px: PixelPoint) -> Redraw {
        self.hovered = classify_hover(&self.tracks, px, self.dims)
            .and_then(|hit| self.tracks.iter().position(|t| std::ptr::eq(t, hit)));
        Redraw::Needed
    }

    pub fn on_pointer_leave(&mut self) -> Redraw {
        self.hovered = None;
        Redraw::Needed
    }

    /// Forward a click-hit to the selection callback. Returns the selected
    /// track, or `None` when the click missed.
    pub fn on_click(&self, px: PixelPoint) -> Option<&Track> {
        let hit = classify_click(&self.tracks, px, self.dims)?;
        log::debug!("selected track {} ({})", hit.id, hit.title);
        (self.on_select)(hit);
        Some(hit)
    }

    /// Store the newest container size. Stale sizes are simply overwritten.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Redraw {
        let dims = Dimensions::new(width, height);
        if dims != self.dims {
            log::debug!(
                "mood map resized {}x{} -> {}x{}",
                self.dims.width, self.dims.height, width, height
            );
        }
        self.dims = dims;
        Redraw::Needed
    }

    /// Inputs for the next frame.
    pub fn frame<'a>(&'a self, selected: Option<&'a Track>) -> Frame<'a> {
        Frame {
            tracks: &self.tracks,
            hovered: self.hovered(),
            selected,
            dims: self.dims,
        }
    }

    /// Hover tooltip, shown only while nothing is selected.
    pub fn tooltip(&self, selected: Option<&Track>) -> Option<Tooltip> {
        if selected.is_some() {
            return None;
        }
        let track = self.hovered()?;
        Some(Tooltip {
            title: track.title.clone(),
            artist: track.artist.clone(),
            mood: track.mood.clone(),
            at: to_pixel(track.coordinates, self.dims).offset(TOOLTIP_OFFSET, TOOLTIP_OFFSET),
        })
    }
}
