//! Light/dark theme selection.
//!
//! The page carries the mode as a `dark` class on the document root (the
//! stylesheet keys off it); the canvas loop reads the same flag each frame
//! to pick its clear color.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Canvas clear color for this mode.
    pub fn background(self) -> &'static str {
        match self {
            Self::Dark => "#000000",
            Self::Light => "#f3f4f6",
        }
    }

    /// Glyph shown on the footer toggle button.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}
