//! The device module contains the per-chip entry points for the supported
//! port expanders.
//!
//! All of them share the register core in this crate; each module only
//! encodes one chip's identification data (pin count, register layout,
//! interrupt capability, I2C address scheme) and names its pins.

pub mod pca9505;
pub mod pca9536;
pub mod pca9554;
pub mod pca9555;
pub mod pca9575;
pub mod tca6424a;
