//! Condition flags set by comparison.

/// Flags register, laid out as `00000LGE`.
///
/// Only CMP writes it; JEQ and JNE read the equal bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    pub const EQUAL: u8 = 0b0000_0001;
    pub const GREATER: u8 = 0b0000_0010;
    pub const LESS: u8 = 0b0000_0100;

    /// Flags describing how `a` relates to `b`.
    pub fn compare(a: u8, b: u8) -> Self {
        Self(match a.cmp(&b) {
            std::cmp::Ordering::Less => Self::LESS,
            std::cmp::Ordering::Equal => Self::EQUAL,
            std::cmp::Ordering::Greater => Self::GREATER,
        })
    }

    pub fn equal(self) -> bool {
        self.0 & Self::EQUAL != 0
    }

    pub fn greater(self) -> bool {
        self.0 & Self::GREATER != 0
    }

    pub fn less(self) -> bool {
        self.0 & Self::LESS != 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}
