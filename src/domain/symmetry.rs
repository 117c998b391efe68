//! Mirrored read-out of the grid.
//!
//! The renderer and the pointer input both go through [`mirror`], so what is
//! drawn at a display coordinate is always the cell a click there edits.

/// Coordinate reflection policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MirrorMode {
    #[default]
    None,
    /// Right half reflects the left half
    Horizontal,
    /// Bottom half reflects the top half
    Vertical,
    /// Both reflections applied independently
    Both,
}

impl MirrorMode {
    /// Get all modes in control-panel order
    pub fn all() -> Vec<MirrorMode> {
        vec![
            MirrorMode::None,
            MirrorMode::Horizontal,
            MirrorMode::Both,
            MirrorMode::Vertical,
        ]
    }

    /// Map a control-panel index (0 none, 1 horizontal, 2 both, 3 vertical),
    /// clamping anything out of range to the nearest end
    pub fn from_index(index: i64) -> Self {
        match index {
            i64::MIN..=0 => MirrorMode::None,
            1 => MirrorMode::Horizontal,
            2 => MirrorMode::Both,
            _ => MirrorMode::Vertical,
        }
    }

    /// Next mode in control-panel order, wrapping around
    pub fn next(self) -> Self {
        match self {
            MirrorMode::None => MirrorMode::Horizontal,
            MirrorMode::Horizontal => MirrorMode::Both,
            MirrorMode::Both => MirrorMode::Vertical,
            MirrorMode::Vertical => MirrorMode::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MirrorMode::None => "None",
            MirrorMode::Horizontal => "Horizontal",
            MirrorMode::Vertical => "Vertical",
            MirrorMode::Both => "Both",
        }
    }

    const fn reflects_x(self) -> bool {
        matches!(self, MirrorMode::Horizontal | MirrorMode::Both)
    }

    const fn reflects_y(self) -> bool {
        matches!(self, MirrorMode::Vertical | MirrorMode::Both)
    }
}

/// Map a display coordinate to the stored cell it shows.
///
/// A coordinate past the midline (`x > width / 2`) reflects to `width - x`.
/// Coordinates outside the extents come back unchanged so the grid accessor
/// can report them as out of bounds.
pub fn mirror(x: u32, y: u32, width: u32, height: u32, mode: MirrorMode) -> (u32, u32) {
    let mx = if mode.reflects_x() { reflect(x, width) } else { x };
    let my = if mode.reflects_y() { reflect(y, height) } else { y };
    (mx, my)
}

#[inline]
const fn reflect(coord: u32, extent: u32) -> u32 {
    // 2 * coord > extent is coord > extent / 2 without integer truncation
    if coord < extent && coord as u64 * 2 > extent as u64 {
        extent - coord
    } else {
        coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity() {
        assert_eq!(mirror(7, 9, 10, 10, MirrorMode::None), (7, 9));
    }

    #[test]
    fn test_horizontal_reflects_right_half() {
        assert_eq!(mirror(6, 8, 10, 10, MirrorMode::Horizontal), (4, 8));
        assert_eq!(mirror(9, 1, 10, 10, MirrorMode::Horizontal), (1, 1));
        // the midline itself stays put
        assert_eq!(mirror(5, 1, 10, 10, MirrorMode::Horizontal), (5, 1));
        // odd width: 5 / 2 = 2.5, so 3 and 4 reflect
        assert_eq!(mirror(3, 0, 5, 5, MirrorMode::Horizontal), (2, 0));
        assert_eq!(mirror(2, 0, 5, 5, MirrorMode::Horizontal), (2, 0));
    }

    #[test]
    fn test_vertical_and_both() {
        assert_eq!(mirror(8, 7, 10, 10, MirrorMode::Vertical), (8, 3));
        assert_eq!(mirror(8, 7, 10, 10, MirrorMode::Both), (2, 3));
    }

    #[test]
    fn test_mirror_is_idempotent() {
        let (w, h) = (11, 8);
        for mode in MirrorMode::all() {
            for y in 0..h {
                for x in 0..w {
                    let (mx, my) = mirror(x, y, w, h, mode);
                    assert!(mx < w && my < h, "{:?} left the grid at ({}, {})", mode, x, y);
                    assert_eq!(
                        mirror(mx, my, w, h, mode),
                        (mx, my),
                        "{:?} not idempotent at ({}, {})", mode, x, y
                    );
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_passes_through() {
        assert_eq!(mirror(12, 3, 10, 10, MirrorMode::Both), (12, 3));
    }

    #[test]
    fn test_from_index_clamps() {
        assert_eq!(MirrorMode::from_index(-4), MirrorMode::None);
        assert_eq!(MirrorMode::from_index(1), MirrorMode::Horizontal);
        assert_eq!(MirrorMode::from_index(2), MirrorMode::Both);
        assert_eq!(MirrorMode::from_index(99), MirrorMode::Vertical);
    }

    #[test]
    fn test_next_cycles_all_modes() {
        let mut mode = MirrorMode::None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, MirrorMode::None);
        assert_eq!(seen, MirrorMode::all());
    }
}
