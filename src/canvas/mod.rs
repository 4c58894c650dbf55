pub mod canvas_surface;
pub mod resize;
