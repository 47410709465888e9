//! Resolution catalog
//!
//! The catalog is the only source of selectable resolutions. Its order is
//! the navigation order, and the state machine stores positions in it
//! (indices), never raw device codes.

use crate::types::{Direction, ResolutionCode};

/// One selectable resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolutionEntry {
    /// Name shown to the user
    pub name: &'static str,
    /// Code passed to the AV device
    pub code: ResolutionCode,
}

impl ResolutionEntry {
    pub const fn new(name: &'static str, code: u32) -> Self {
        Self {
            name,
            code: ResolutionCode(code),
        }
    }
}

/// Resolutions the AV device accepts, in device code order
///
/// Codes 0, 8 and 9 are unused by the device and have no entry. The 50Hz
/// HD modes distort the GamePad mirror; their names say so.
pub const STANDARD_ENTRIES: [ResolutionEntry; 12] = [
    ResolutionEntry::new("576i PAL50", 1),
    ResolutionEntry::new("480i", 2),
    ResolutionEntry::new("480p", 3),
    ResolutionEntry::new("720p", 4),
    ResolutionEntry::new("720p 3D?", 5),
    ResolutionEntry::new("1080i", 6),
    ResolutionEntry::new("1080p", 7),
    ResolutionEntry::new("480i PAL60", 10),
    ResolutionEntry::new("576p", 11),
    ResolutionEntry::new("720p 50Hz (glitchy GamePad)", 12),
    ResolutionEntry::new("1080i 50Hz (glitchy GamePad)", 13),
    ResolutionEntry::new("1080p 50Hz (glitchy GamePad)", 14),
];

/// Catalog construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// A catalog needs at least one entry
    Empty,
}

/// Ordered, non-empty list of selectable resolutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Catalog {
    entries: &'static [ResolutionEntry],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Catalog {
    /// The device's built-in resolution list
    pub const STANDARD: Catalog = Catalog {
        entries: &STANDARD_ENTRIES,
    };

    /// Create a catalog over `entries`
    pub fn new(entries: &'static [ResolutionEntry]) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. The state machine only holds
    /// wrapped indices, so a bad index here is a bug.
    pub fn entry(&self, index: usize) -> &'static ResolutionEntry {
        &self.entries[index]
    }

    /// Position of the entry with `code`, if the catalog has one
    pub fn index_of(&self, code: ResolutionCode) -> Option<usize> {
        self.iter().position(|e| e.code == code)
    }

    /// Step `index` one entry in `direction`, wrapping at both ends
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        direction.step_index(index, self.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ResolutionEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SMALL: [ResolutionEntry; 3] = [
        ResolutionEntry::new("480i", 2),
        ResolutionEntry::new("480p", 3),
        ResolutionEntry::new("720p", 4),
    ];

    #[test]
    fn test_empty_catalog_rejected() {
        static NONE: [ResolutionEntry; 0] = [];
        assert_eq!(Catalog::new(&NONE), Err(CatalogError::Empty));
    }

    #[test]
    fn test_step_wraps() {
        let catalog = Catalog::new(&SMALL).unwrap();
        assert_eq!(catalog.step(0, Direction::Backward), 2);
        assert_eq!(catalog.step(2, Direction::Forward), 0);
        assert_eq!(catalog.step(1, Direction::Forward), 2);
    }

    #[test]
    fn test_index_of() {
        let catalog = Catalog::new(&SMALL).unwrap();
        assert_eq!(catalog.index_of(ResolutionCode(3)), Some(1));
        assert_eq!(catalog.index_of(ResolutionCode(10)), None);
    }

    #[test]
    fn test_standard_catalog_codes_unique() {
        let catalog = Catalog::STANDARD;
        for (i, entry) in catalog.iter().enumerate() {
            assert_eq!(catalog.index_of(entry.code), Some(i));
        }
        // Unused device codes are not selectable
        for unused in [0, 8, 9] {
            assert_eq!(catalog.index_of(ResolutionCode(unused)), None);
        }
    }

    #[test]
    fn test_50hz_hd_modes_flag_gamepad() {
        let catalog = Catalog::STANDARD;
        for code in [12, 13, 14] {
            let index = catalog.index_of(ResolutionCode(code)).unwrap();
            assert!(catalog.entry(index).name.ends_with("50Hz (glitchy GamePad)"));
        }
    }

    #[test]
    #[should_panic]
    fn test_entry_out_of_range_panics() {
        let catalog = Catalog::new(&SMALL).unwrap();
        let _ = catalog.entry(3);
    }
}
