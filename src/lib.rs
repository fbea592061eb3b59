//! Register-access core for the `PCA953x`/`PCA957x` family of I2C
//! port-expanders (4 to 40 pins, two register layouts).
//!
//! The crate translates pin-level operations into the correct register
//! transfers for the attached chip variant: single-byte accesses on the
//! small chips, 16-bit words or dependent byte pairs on the 16-pin chips,
//! and auto-increment block transfers on the 24- and 40-pin chips.  Output,
//! direction and polarity state is shadowed locally and only committed when
//! the bus transfer succeeded.
//!
//! All operations on one chip are serialized through a [`PortMutex`], so
//! pin handles can be used from concurrent contexts.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod bus;
mod common;
pub mod dev;
mod driver;
mod error;
mod mutex;
mod pin;
mod regs;

pub use bus::I2cBus;
pub use common::mode;
pub use common::{
    Direction, PortDriver, PortDriverBroadcast, PortDriverPolarity, PortDriverTotemPole,
};
pub use driver::{ChipInfo, Driver};
pub use error::{Access, Error};
pub use mutex::PortMutex;
pub use pin::Pin;
pub use regs::{Layout, PinCount, Register};

pub use dev::pca9505::Pca9505;
pub use dev::pca9536::Pca9536;
pub use dev::pca9554::Pca9554;
pub use dev::pca9555::Pca9555;
pub use dev::pca9575::Pca9575;
pub use dev::tca6424a::Tca6424a;

pub(crate) use bus::I2cExt;
