use crate::types::Mood;

/// An sRGB color with a straight (non-premultiplied) alpha in 0.0–1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color, alpha replaced.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Same color, alpha multiplied by `factor`.
    pub fn scale_alpha(self, factor: f64) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// CSS color string for the canvas API.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

/// Cluster halo at its centroid (`#rrggbb40`).
pub const HALO_ALPHA: f64 = 64.0 / 255.0;
/// Lines between consecutive cluster members (`#rrggbb30`).
pub const LINK_ALPHA: f64 = 48.0 / 255.0;
/// Disc behind a hovered or selected point (`#rrggbb40`).
pub const GLOW_ALPHA: f64 = 64.0 / 255.0;

pub const BACKGROUND_INNER: Rgba = Rgba::rgba(30, 27, 45, 0.8);
pub const BACKGROUND_OUTER: Rgba = Rgba::rgba(15, 13, 22, 1.0);
pub const GRID: Rgba = Rgba::rgba(255, 255, 255, 0.05);

/// Base flat color for a mood. Unrecognized moods fall back to white.
pub fn mood_color(mood: &Mood) -> Rgba {
    match mood {
        Mood::Chill => Rgba::rgb(0x3b, 0x82, 0xf6),      // blue
        Mood::Energetic => Rgba::rgb(0xef, 0x44, 0x44),  // red
        Mood::Happy => Rgba::rgb(0xf5, 0x9e, 0x0b),      // amber
        Mood::Melancholy => Rgba::rgb(0x8b, 0x5c, 0xf6), // purple
        Mood::Focus => Rgba::rgb(0x10, 0xb9, 0x81),      // green
        Mood::Other(_) => WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette() {
        assert_eq!(mood_color(&Mood::Chill), Rgba::rgb(59, 130, 246));
        assert_eq!(mood_color(&Mood::Focus), Rgba::rgb(16, 185, 129));
        assert_eq!(mood_color(&Mood::Other("gloomy".into())), WHITE);
    }

    #[test]
    fn test_alpha_blending() {
        let c = Rgba::rgb(10, 20, 30).with_alpha(0.5).scale_alpha(0.5);
        assert!((c.a - 0.25).abs() < 1e-12);
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha(4.0).a, 1.0);
    }

    #[test]
    fn test_hex_alpha_constants() {
        assert!((HALO_ALPHA - 0.25).abs() < 0.01);
        assert!((LINK_ALPHA - 0.19).abs() < 0.01);
    }

    #[test]
    fn test_css() {
        assert_eq!(Rgba::rgba(30, 27, 45, 0.8).to_css(), "rgba(30, 27, 45, 0.8)");
        assert_eq!(WHITE.to_css(), "rgba(255, 255, 255, 1)");
    }
}
