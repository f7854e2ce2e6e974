//! Document- and viewport-space geometry.
//!
//! All coordinates are CSS pixels. Document space has its origin at the top
//! of the page; viewport space is document space shifted up by the current
//! scroll offset.

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// The same rectangle shifted by (dx, dy).
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    /// Overlap with `other`, or `None` when the rectangles share no area.
    #[must_use]
    pub fn overlap(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > left && bottom > top {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Fraction of this rectangle covered by `root`, in [0, 1].
    /// Zero-area rectangles have ratio 0.
    #[must_use]
    pub fn visible_ratio(&self, root: &Rect) -> f64 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.overlap(root).map_or(0.0, |o| (o.area() / area).clamp(0.0, 1.0))
    }
}

/// Visible screen dimensions.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport-space rectangle (origin at the top-left of the screen).
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Fractional vertical insets that shrink an observation root.
///
/// `top: 0.22, bottom: 0.45` excludes the top 22% and bottom 45% of the
/// viewport, biasing "visible" toward the upper-center band of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct RootInsets {
    pub top: f64,
    pub bottom: f64,
}

impl RootInsets {
    pub const NONE: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    #[must_use]
    pub fn shrink(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Apply the insets to a root rectangle. A degenerate result collapses to
    /// zero height rather than inverting.
    #[must_use]
    pub fn apply(&self, root: Rect) -> Rect {
        let inset_top = root.height * self.top;
        let inset_bottom = root.height * self.bottom;
        let height = (root.height - inset_top - inset_bottom).max(0.0);
        Rect::new(root.left, root.top + inset_top, root.width, height)
    }
}
