//! Linear mapping between data space [-1, 1]² and pixel space [0, W]×[0, H].
//!
//! Pixel coordinates grow rightwards and downwards from the surface origin, so
//! data `y = -1` is the top edge.

use crate::error::MapError;
use crate::types::{DataPoint, Dimensions, PixelPoint};

/// Data → pixel. Defined for any input; no clamping.
pub fn to_pixel(p: DataPoint, dims: Dimensions) -> PixelPoint {
    PixelPoint {
        x: (p.x + 1.0) / 2.0 * dims.width as f64,
        y: (p.y + 1.0) / 2.0 * dims.height as f64,
    }
}

/// Pixel → data, the exact inverse of [`to_pixel`].
pub fn to_data(p: PixelPoint, dims: Dimensions) -> Result<DataPoint, MapError> {
    if dims.is_degenerate() {
        return Err(MapError::DegenerateSurface {
            width: dims.width,
            height: dims.height,
        });
    }
    Ok(DataPoint {
        x: (p.x / dims.width as f64) * 2.0 - 1.0,
        y: (p.y / dims.height as f64) * 2.0 - 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_center() {
        let dims = Dimensions::new(800, 600);
        assert_eq!(to_pixel(DataPoint::new(-1.0, -1.0), dims), PixelPoint::new(0.0, 0.0));
        assert_eq!(to_pixel(DataPoint::new(1.0, 1.0), dims), PixelPoint::new(800.0, 600.0));
        assert_eq!(to_pixel(DataPoint::new(0.0, 0.0), dims), PixelPoint::new(400.0, 300.0));
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let dims = Dimensions::new(100, 100);
        assert_eq!(to_pixel(DataPoint::new(2.0, -3.0), dims), PixelPoint::new(150.0, -100.0));
    }

    #[test]
    fn test_round_trip() {
        let sizes = [(1, 1), (800, 600), (400, 300), (1337, 17)];
        for &(w, h) in &sizes {
            let dims = Dimensions::new(w, h);
            for i in 0..=20 {
                for j in 0..=20 {
                    let p = DataPoint::new(-1.0 + i as f64 * 0.1, -1.0 + j as f64 * 0.1);
                    let back = to_data(to_pixel(p, dims), dims).unwrap();
                    assert!((back.x - p.x).abs() < 1e-9, "{p:?} -> {back:?} at {w}x{h}");
                    assert!((back.y - p.y).abs() < 1e-9, "{p:?} -> {back:?} at {w}x{h}");
                }
            }
        }
    }

    #[test]
    fn test_degenerate_surface() {
        let err = to_data(PixelPoint::new(1.0, 1.0), Dimensions::new(0, 600));
        assert!(matches!(err, Err(MapError::DegenerateSurface { width: 0, height: 600 })));
        assert!(to_data(PixelPoint::new(1.0, 1.0), Dimensions::new(800, 0)).is_err());
    }
}
