//! Popup placement relative to a trigger anchor.

use ratatui::layout::Rect;

/// Corner-anchored position of the popup relative to its trigger area.
///
/// The popup is placed flush against the anchor's top or bottom edge, with
/// its left or right edge aligned to the anchor's matching edge. No
/// viewport-edge collision avoidance is performed: a popup near a screen
/// edge may extend past it (the terminal clips it). Arithmetic saturates at
/// the origin only because cell coordinates are unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Below the anchor, left edges aligned (default).
    #[default]
    BelowLeft,
    /// Below the anchor, right edges aligned.
    BelowRight,
    /// Above the anchor, left edges aligned.
    AboveLeft,
    /// Above the anchor, right edges aligned.
    AboveRight,
}

impl Placement {
    /// Resolve the popup rect for this placement given the anchor and the
    /// popup's desired size.
    pub fn resolve(self, anchor: Rect, width: u16, height: u16) -> Rect {
        let x = match self {
            Placement::BelowLeft | Placement::AboveLeft => anchor.x,
            Placement::BelowRight | Placement::AboveRight => {
                (anchor.x + anchor.width).saturating_sub(width)
            }
        };
        let y = match self {
            Placement::BelowLeft | Placement::BelowRight => anchor.y + anchor.height,
            Placement::AboveLeft | Placement::AboveRight => anchor.y.saturating_sub(height),
        };
        Rect::new(x, y, width, height)
    }

    /// Whether the popup opens above the anchor.
    pub fn is_above(self) -> bool {
        matches!(self, Placement::AboveLeft | Placement::AboveRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Rect = Rect {
        x: 10,
        y: 10,
        width: 8,
        height: 1,
    };

    #[test]
    fn below_left_sits_under_anchor() {
        let r = Placement::BelowLeft.resolve(ANCHOR, 12, 4);
        assert_eq!(r, Rect::new(10, 11, 12, 4));
    }

    #[test]
    fn below_right_aligns_right_edges() {
        let r = Placement::BelowRight.resolve(ANCHOR, 12, 4);
        // anchor right edge = 18, popup right edge must match
        assert_eq!(r, Rect::new(6, 11, 12, 4));
    }

    #[test]
    fn above_left_sits_over_anchor() {
        let r = Placement::AboveLeft.resolve(ANCHOR, 12, 4);
        assert_eq!(r, Rect::new(10, 6, 12, 4));
    }

    #[test]
    fn above_right_aligns_right_edges() {
        let r = Placement::AboveRight.resolve(ANCHOR, 12, 4);
        assert_eq!(r, Rect::new(6, 6, 12, 4));
    }

    #[test]
    fn saturates_at_origin() {
        let anchor = Rect::new(0, 1, 4, 1);
        // Popup taller than the space above: y saturates to 0, no collision
        // handling beyond that
        let r = Placement::AboveLeft.resolve(anchor, 10, 5);
        assert_eq!(r.y, 0);
        let r = Placement::BelowRight.resolve(anchor, 10, 2);
        assert_eq!(r.x, 0);
    }
}
