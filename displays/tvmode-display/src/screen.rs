//! Screen buffer types
//!
//! Provides a character-based screen buffer for the TV console.

use heapless::String;

use crate::backend::{DisplayBackend, DisplayError};

/// Number of character rows on the TV console
pub const SCREEN_ROWS: usize = 18;

/// Number of character columns on the TV console
pub const SCREEN_COLS: usize = 64;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// Holds the whole frame as text and can be presented to any
/// `DisplayBackend` implementation.
#[derive(Clone)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Set the content of a specific row
    ///
    /// Text beyond [`LINE_LEN`] bytes is cut at the last whole character.
    pub fn set_line(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear();
            let _ = line.push_str(truncate(text, LINE_LEN));
            self.dirty = true;
        }
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Draw the screen to `backend` and flip, if anything changed
    ///
    /// Empty rows are skipped. Rows beyond the backend's dimensions are
    /// not drawn.
    pub fn present<B: DisplayBackend>(&mut self, backend: &mut B) -> Result<(), DisplayError> {
        if !self.dirty {
            return Ok(());
        }
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        let (_, rows) = backend.dimensions();
        backend.clear()?;
        for (row, line) in self.lines.iter().enumerate().take(rows as usize) {
            if !line.is_empty() {
                backend.draw_text(row as u8, 0, line)?;
            }
        }
        backend.flip()?;

        self.dirty = false;
        Ok(())
    }
}

fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
