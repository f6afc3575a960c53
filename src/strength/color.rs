//! Severity-to-color mapping for strength display.

/// An RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

const CHANNEL_MAX: f64 = 255.0;

/// Maps a severity fraction to a color between full red (weak, 0.0) and
/// full green (strong, 1.0).
///
/// Componentwise linear interpolation; blue stays 0, alpha fully opaque.
/// Out-of-range fractions are clamped.
///
/// # Returns
/// The interpolated [`SeverityColor`]: `(255, 0, 0, 255)` at 0.0,
/// `(0, 255, 0, 255)` at 1.0.
pub fn color_for(fraction: f64) -> SeverityColor {
    let t = fraction.clamp(0.0, 1.0);
    SeverityColor {
        r: interpolate(CHANNEL_MAX, 0.0, t) as u8,
        g: interpolate(0.0, CHANNEL_MAX, t) as u8,
        b: 0,
        a: u8::MAX,
    }
}

fn interpolate(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_weak_endpoint() {
        let color = color_for(0.0);
        assert_eq!(
            color,
            SeverityColor {
                r: 255,
                g: 0,
                b: 0,
                a: 255
            }
        );
    }

    #[test]
    fn test_color_for_strong_endpoint() {
        let color = color_for(1.0);
        assert_eq!(
            color,
            SeverityColor {
                r: 0,
                g: 255,
                b: 0,
                a: 255
            }
        );
    }

    #[test]
    fn test_color_for_midpoint() {
        let color = color_for(0.5);
        assert_eq!(color.r, 127);
        assert_eq!(color.g, 127);
        assert_eq!(color.b, 0);
        assert_eq!(color.a, 255);
    }

    #[test]
    fn test_color_for_clamps_out_of_range() {
        assert_eq!(color_for(-0.3), color_for(0.0));
        assert_eq!(color_for(1.7), color_for(1.0));
    }
}
