//! Horizontal category chip strip.
//!
//! Whenever the active selection changes, the matching chip is scrolled into
//! the strip's visible bounds. Already-visible chips are left alone.

use crate::layout::Rect;
use crate::scroll_spy::Selection;

/// Gap kept between a revealed chip and the strip edge.
pub const CHIP_REVEAL_MARGIN: f64 = 16.0;

/// What the chip strip needs from the layout.
pub trait ChipStripSurface {
    /// Viewport box of the chip for `selection`, if rendered.
    fn chip_rect(&self, selection: Selection) -> Option<Rect>;

    /// Viewport box of the scrollable strip.
    fn strip_rect(&self) -> Rect;

    /// Current horizontal scroll offset of the strip.
    fn strip_scroll_left(&self) -> f64;

    /// Smoothly scroll the strip to a horizontal offset.
    fn scroll_strip_to(&mut self, left: f64);
}

/// Scroll offset that brings `chip` inside `strip`, or `None` if it is
/// already fully visible.
pub fn reveal_offset(chip: Rect, strip: Rect, scroll_left: f64, margin: f64) -> Option<f64> {
    if chip.left < strip.left {
        Some((scroll_left + (chip.left - strip.left) - margin).max(0.0))
    } else if chip.right() > strip.right() {
        Some(scroll_left + (chip.right() - strip.right()) + margin)
    } else {
        None
    }
}

/// Bring the chip for `selection` into view. Returns the offset scrolled to.
pub fn reveal_chip<S: ChipStripSurface + ?Sized>(surface: &mut S, selection: Selection) -> Option<f64> {
    let chip = surface.chip_rect(selection)?;
    let target = reveal_offset(
        chip,
        surface.strip_rect(),
        surface.strip_scroll_left(),
        CHIP_REVEAL_MARGIN,
    )?;
    surface.scroll_strip_to(target);
    Some(target)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::menu::SectionId;

    struct Strip {
        chips: HashMap<Selection, Rect>,
        rect: Rect,
        left: f64,
        scrolls: Vec<f64>,
    }

    impl ChipStripSurface for Strip {
        fn chip_rect(&self, selection: Selection) -> Option<Rect> {
            self.chips.get(&selection).copied()
        }

        fn strip_rect(&self) -> Rect {
            self.rect
        }

        fn strip_scroll_left(&self) -> f64 {
            self.left
        }

        fn scroll_strip_to(&mut self, left: f64) {
            self.scrolls.push(left);
            self.left = left;
        }
    }

    fn strip() -> Strip {
        let mut chips = HashMap::new();
        chips.insert(Selection::Section(SectionId::Category(1)), Rect::new(-40.0, 0.0, 80.0, 32.0));
        chips.insert(Selection::Section(SectionId::Category(2)), Rect::new(100.0, 0.0, 80.0, 32.0));
        chips.insert(Selection::Section(SectionId::Category(3)), Rect::new(290.0, 0.0, 80.0, 32.0));
        Strip {
            chips,
            rect: Rect::new(0.0, 0.0, 320.0, 40.0),
            left: 120.0,
            scrolls: Vec::new(),
        }
    }

    #[test]
    fn chip_left_of_viewport_scrolls_left() {
        let mut s = strip();
        assert_eq!(reveal_chip(&mut s, Selection::Section(SectionId::Category(1))), Some(64.0));
    }

    #[test]
    fn chip_right_of_viewport_scrolls_right() {
        let mut s = strip();
        assert_eq!(reveal_chip(&mut s, Selection::Section(SectionId::Category(3))), Some(186.0));
    }

    #[test]
    fn visible_or_missing_chip_is_a_no_op() {
        let mut s = strip();
        assert_eq!(reveal_chip(&mut s, Selection::Section(SectionId::Category(2))), None);
        assert_eq!(reveal_chip(&mut s, Selection::All), None);
        assert!(s.scrolls.is_empty());
    }

    #[test]
    fn reveal_never_goes_negative() {
        let chip = Rect::new(-10.0, 0.0, 50.0, 30.0);
        let strip = Rect::new(0.0, 0.0, 300.0, 30.0);
        assert_eq!(reveal_offset(chip, strip, 5.0, CHIP_REVEAL_MARGIN), Some(0.0));
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut s = strip();
        let target = Selection::Section(SectionId::Category(3));
        reveal_chip(&mut s, target);
        // The chip moved into view by the amount scrolled.
        let moved = s.scrolls[0] - 120.0;
        s.chips.insert(target, Rect::new(290.0 - moved, 0.0, 80.0, 32.0));
        assert_eq!(reveal_chip(&mut s, target), None);
    }
}
