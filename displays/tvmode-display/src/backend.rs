//! Display backend traits
//!
//! Defines the interface to the platform's text console and its screen
//! memory.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Screen memory could not be allocated
    OutOfMemory,
    /// Buffers not acquired, or display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for a double-buffered text
/// console. Drawing goes to the back buffer; `flip` makes it visible.
/// Implementations mirror every frame to all attached screens (TV and
/// GamePad).
pub trait DisplayBackend {
    /// Clear the back buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Swap front and back buffers
    fn flip(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}

/// Screen memory owned by the tool while it is in the foreground
///
/// The host may take the foreground away; buffers must then be released
/// and acquired again on return.
pub trait ScreenBuffers {
    /// Allocate and attach the screen buffers
    fn acquire(&mut self) -> Result<(), DisplayError>;

    /// Detach and free the screen buffers
    fn release(&mut self);
}
