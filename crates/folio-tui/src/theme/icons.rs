//! Icon glyphs with an ASCII fallback.

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Standard Unicode symbols (default).
    #[default]
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Collapsed accordion chevron.
    pub fn collapsed(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "▸",
            IconMode::Ascii => ">",
        }
    }

    /// Expanded accordion chevron.
    pub fn expanded(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "▾",
            IconMode::Ascii => "v",
        }
    }

    /// Timeline entry marker.
    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "•",
            IconMode::Ascii => "o",
        }
    }

    /// Link row marker.
    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "↗",
            IconMode::Ascii => "->",
        }
    }

    /// Cursor marker for the selected interactive row.
    pub fn cursor(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "❯",
            IconMode::Ascii => ">",
        }
    }

    pub fn help(&self) -> &'static str {
        "?"
    }
}
