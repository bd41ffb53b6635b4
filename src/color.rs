use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Cluster colour palette
// ---------------------------------------------------------------------------

/// Size of the fixed cluster palette.
pub const PALETTE_SIZE: usize = 10;

/// Plain RGB triple; the engine has no rendering dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Rgb {
                r: (rgb.red * 255.0) as u8,
                g: (rgb.green * 255.0) as u8,
                b: (rgb.blue * 255.0) as u8,
            }
        })
        .collect()
}

/// Colour for a cluster index: `index % PALETTE_SIZE` into the fixed palette,
/// so the same cluster keeps the same colour across recomputation.
pub fn cluster_color(cluster: usize) -> Rgb {
    // The palette is a pure function of PALETTE_SIZE, hence deterministic.
    generate_palette(PALETTE_SIZE)[cluster % PALETTE_SIZE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_deterministic() {
        assert_eq!(generate_palette(PALETTE_SIZE), generate_palette(PALETTE_SIZE));
    }

    #[test]
    fn test_cluster_color_wraps_modulo_palette() {
        assert_eq!(cluster_color(3), cluster_color(13));
        assert_ne!(cluster_color(0), cluster_color(1));
    }
}
