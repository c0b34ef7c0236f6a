//! Local UI state owned by a mounted navbar.

/// Vertical offset (px) past which the navbar switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Widths below this render the mobile menu unless configured otherwise.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Two independent flags; every combination is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarState {
    pub is_menu_open: bool,
    pub is_scrolled: bool,
}

impl NavbarState {
    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }

    /// Returns `true` when the scrolled flag changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = past_scroll_threshold(offset);
        let changed = scrolled != self.is_scrolled;
        self.is_scrolled = scrolled;
        changed
    }
}

pub fn past_scroll_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Which menu variant the navbar renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn from_width(width: f64, mobile_breakpoint_px: f64) -> Self {
        if width < mobile_breakpoint_px {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}
