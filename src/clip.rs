//! Thin wrapper over the boolean overlay engine.
//!
//! All raw union/difference overlays go through here. The engine works on
//! float paths; callers convert contours at this boundary and interpret the
//! resulting shape list (`shapes[i][0]` is the outer ring of shape `i`, the
//! rest are its holes).
//!
//! Everything uses positive fill: winding is semantic, so overlapping
//! same-direction rings merge instead of cancelling.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

pub(crate) type FloatPath = Vec<[f64; 2]>;
pub(crate) type FloatShapes = Vec<Vec<FloatPath>>;

/// Positive-fill union of subject and clip paths.
pub(crate) fn union(subject: &[FloatPath], clip: &[FloatPath]) -> FloatShapes {
    subject.overlay(&clip, OverlayRule::Union, FillRule::Positive)
}

/// Positive-fill difference (subject minus clip).
pub(crate) fn difference(subject: &[FloatPath], clip: &[FloatPath]) -> FloatShapes {
    subject.overlay(&clip, OverlayRule::Difference, FillRule::Positive)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, side: f64) -> FloatPath {
        vec![[x, y], [x + side, y], [x + side, y + side], [x, y + side]]
    }

    #[test]
    fn test_union_merges_overlapping_squares() {
        let subject = vec![square(0.0, 0.0, 10.0)];
        let clip = vec![square(5.0, 0.0, 10.0)];
        let shapes = union(&subject, &clip);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].len(), 1);
    }

    #[test]
    fn test_union_keeps_disjoint_squares_separate() {
        let subject = vec![square(0.0, 0.0, 10.0)];
        let clip = vec![square(20.0, 0.0, 10.0)];
        let shapes = union(&subject, &clip);
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_difference_punches_hole() {
        let subject = vec![square(0.0, 0.0, 10.0)];
        let clip = vec![square(2.0, 2.0, 6.0)];
        let shapes = difference(&subject, &clip);
        assert_eq!(shapes.len(), 1);
        // Outer ring plus one hole ring.
        assert_eq!(shapes[0].len(), 2);
    }

    #[test]
    fn test_difference_to_nothing() {
        let subject = vec![square(2.0, 2.0, 4.0)];
        let clip = vec![square(0.0, 0.0, 10.0)];
        let shapes = difference(&subject, &clip);
        assert!(shapes.is_empty());
    }
}
