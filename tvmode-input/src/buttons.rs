//! Abstract buttons

use core::ops::{BitOr, BitOrAssign};

/// Abstract button, independent of the controller that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Button {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    /// Primary action button (A)
    Confirm = 4,
    /// Secondary action button (B)
    Back = 5,
    X = 6,
    Y = 7,
    L = 8,
    R = 9,
    ZL = 10,
    ZR = 11,
    Plus = 12,
    Minus = 13,
    /// Dedicated exit button
    Home = 14,
}

impl Button {
    /// Every button, in bit order
    pub const ALL: [Button; 15] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Confirm,
        Button::Back,
        Button::X,
        Button::Y,
        Button::L,
        Button::R,
        Button::ZL,
        Button::ZR,
        Button::Plus,
        Button::Minus,
        Button::Home,
    ];

    /// Bit used for this button inside a [`ButtonSet`]
    pub const fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

// One bit per entry in `Button::ALL`
const ALL_BITS: u16 = 0x7FFF;

/// Set of buttons newly pressed during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(u16);

impl ButtonSet {
    /// No buttons pressed
    pub const EMPTY: ButtonSet = ButtonSet(0);

    /// Create an empty set
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a set from raw bits, dropping bits that name no button
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & ALL_BITS)
    }

    /// Raw bit representation
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Check whether `button` is in the set
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    /// Add a button to the set
    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    /// Builder-style [`insert`](Self::insert)
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.bit())
    }

    /// Union of two sets
    pub const fn union(self, other: ButtonSet) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of buttons in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the buttons in the set, in bit order
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl From<Button> for ButtonSet {
    fn from(button: Button) -> Self {
        Self(button.bit())
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = ButtonSet::new();
        for button in iter {
            set.insert(button);
        }
        set
    }
}

impl BitOr for ButtonSet {
    type Output = ButtonSet;

    fn bitor(self, rhs: ButtonSet) -> ButtonSet {
        self.union(rhs)
    }
}

impl BitOr<Button> for ButtonSet {
    type Output = ButtonSet;

    fn bitor(self, rhs: Button) -> ButtonSet {
        self.with(rhs)
    }
}

impl BitOrAssign for ButtonSet {
    fn bitor_assign(&mut self, rhs: ButtonSet) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bits_are_unique() {
        let mut seen = 0u16;
        for button in Button::ALL {
            assert_eq!(seen & button.bit(), 0);
            seen |= button.bit();
        }
        assert_eq!(seen, ALL_BITS);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set = ButtonSet::new();
        assert!(set.is_empty());

        set.insert(Button::Confirm);
        set.insert(Button::Left);

        assert!(set.contains(Button::Confirm));
        assert!(set.contains(Button::Left));
        assert!(!set.contains(Button::Right));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_iter_is_in_bit_order() {
        let set = ButtonSet::from(Button::Home) | Button::Up | Button::Confirm;
        let mut iter = set.iter();
        assert_eq!(iter.next(), Some(Button::Up));
        assert_eq!(iter.next(), Some(Button::Confirm));
        assert_eq!(iter.next(), Some(Button::Home));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_from_bits_truncate_drops_unknown_bits() {
        let set = ButtonSet::from_bits_truncate(0xFFFF);
        assert_eq!(set.len(), Button::ALL.len());
    }

    proptest! {
        #[test]
        fn prop_collect_matches_membership(bits in any::<u16>()) {
            let set = ButtonSet::from_bits_truncate(bits);
            let rebuilt: ButtonSet = set.iter().collect();
            prop_assert_eq!(set, rebuilt);
        }
    }
}
