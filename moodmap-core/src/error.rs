use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// A surface with zero width or height cannot be mapped back to data space.
    #[error("degenerate surface {width}x{height}")]
    DegenerateSurface { width: u32, height: u32 },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
