//! Responsive Layout System
//!
//! `LayoutContext` encapsulates terminal dimensions and provides fluid sizing
//! calculations for responsive UI rendering.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
}

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let dialog_width = ctx.bounded_width(50, 40, 72);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    ///
    /// # Example
    /// ```ignore
    /// let ctx = LayoutContext::new(200, 40);
    /// // 30% of 200 = 60, but clamped to max of 50
    /// assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    /// ```
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Check if the terminal is in a "narrow" state (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is extra small (very constrained space).
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }
}
