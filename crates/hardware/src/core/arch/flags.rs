//! Condition Flag Register.
//!
//! `CMP` writes exactly one of three mutually exclusive bits, laid out as
//! `00000LGE`. The flags persist until the next compare and are only read by
//! the conditional jumps. Before the first compare no bit is set.

use std::fmt;

/// Less-than bit.
pub const FLAG_LESS: u8 = 0b0000_0100;
/// Greater-than bit.
pub const FLAG_GREATER: u8 = 0b0000_0010;
/// Equal bit.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// The LS-8 flag register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Flags produced by comparing `a` against `b`.
    pub const fn compare(a: u8, b: u8) -> Self {
        let bits = if a < b {
            FLAG_LESS
        } else if a > b {
            FLAG_GREATER
        } else {
            FLAG_EQUAL
        };
        Self(bits)
    }

    /// Raw register value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the equal bit is set.
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Whether the less-than bit is set.
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }

    /// Whether the greater-than bit is set.
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
