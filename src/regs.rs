//! Bank addressing for the PCA953x/PCA957x register file.
//!
//! The chips expose each logical register as one 8-bit "bank" per group of 8
//! pins.  Variants with more than 8 pins multiplex the logical register
//! number and the bank index into a single command byte:
//!
//! ```text
//! physical = (register_number << bank_shift) + bank
//! ```
//!
//! where `bank_shift` is the smallest shift such that `1 << bank_shift`
//! covers the bank count.  Variants with 24 or more pins additionally
//! support reading/writing all banks in one transaction by setting the
//! auto-increment bit (0x80) in the command byte.
//!
//! Everything in this module is pure; no bus access happens here.

/// Pins per register bank.
pub const BANK_SIZE: u8 = 8;

/// Largest number of banks in the family (PCA9505/PCA9698, 40 pins).
pub const MAX_BANKS: usize = 5;

/// Auto-increment flag, OR'd into the command byte for block transfers.
pub(crate) const REG_ADDR_AI: u8 = 0x80;

/// The two register-numbering schemes used across the chip family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// PCA953x scheme: input 0, output 1, polarity 2, direction 3.
    Pca953x,
    /// PCA957x scheme: input 0, polarity 1, direction (CFG) 4, output 5.
    ///
    /// Chips with this layout do not support 16-bit word transactions; a
    /// two-bank write is issued as two dependent single-byte writes.
    Pca957x,
}

/// Logical register kinds of the pin-operation core.
///
/// The PCA957x scheme has additional registers (bus-hold, pull-up/down,
/// interrupt mask/status) which are not part of this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Input,
    Output,
    Polarity,
    Direction,
}

impl Layout {
    pub(crate) fn register_number(self, reg: Register) -> u8 {
        match self {
            Layout::Pca953x => match reg {
                Register::Input => 0,
                Register::Output => 1,
                Register::Polarity => 2,
                Register::Direction => 3,
            },
            Layout::Pca957x => match reg {
                Register::Input => 0,
                Register::Polarity => 1,
                Register::Direction => 4,
                Register::Output => 5,
            },
        }
    }
}

/// Closed set of pin counts found in the chip family.
///
/// The 4-pin variants (PCA9536/PCA9537) occupy a single partial bank; all
/// other counts are whole multiples of [`BANK_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCount {
    P4,
    P8,
    P16,
    P24,
    P40,
}

impl PinCount {
    /// Number of I/O pins.
    pub const fn pins(self) -> u8 {
        match self {
            PinCount::P4 => 4,
            PinCount::P8 => 8,
            PinCount::P16 => 16,
            PinCount::P24 => 24,
            PinCount::P40 => 40,
        }
    }

    /// Number of 8-bit register banks.
    pub const fn banks(self) -> usize {
        match self {
            PinCount::P4 | PinCount::P8 => 1,
            PinCount::P16 => 2,
            PinCount::P24 => 3,
            PinCount::P40 => 5,
        }
    }

    /// Shift multiplexing register number and bank index into the command
    /// byte: smallest `s` with `1 << s >= banks()`.
    pub const fn bank_shift(self) -> u8 {
        match self {
            PinCount::P4 | PinCount::P8 => 0,
            PinCount::P16 => 1,
            PinCount::P24 => 2,
            PinCount::P40 => 3,
        }
    }

    /// Look up a pin count from raw chip identification data.
    pub const fn from_pins(ngpio: u8) -> Option<Self> {
        match ngpio {
            4 => Some(PinCount::P4),
            8 => Some(PinCount::P8),
            16 => Some(PinCount::P16),
            24 => Some(PinCount::P24),
            40 => Some(PinCount::P40),
            _ => None,
        }
    }
}

/// Command byte addressing a single bank of a logical register.
pub(crate) fn bank_address(pins: PinCount, register_number: u8, bank: usize) -> u8 {
    (register_number << pins.bank_shift()) + bank as u8
}

/// Command byte for an auto-increment block transfer covering all banks.
pub(crate) fn block_address(pins: PinCount, register_number: u8) -> u8 {
    (register_number << pins.bank_shift()) | REG_ADDR_AI
}
