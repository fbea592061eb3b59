//! Chip state and the register transfer engine shared by every device in
//! the family.
//!
//! A [`Driver`] owns the bus handle, the chip metadata and a local shadow of
//! the output, direction and polarity registers (one byte per bank).  Pin
//! operations are read-modify-write sequences on a shadow byte; the shadow
//! is only committed after the bus transfer succeeded, so on failure it
//! still reflects the last value known to be on the device.
//!
//! The transfer shape depends on the pin count:
//!
//! * up to 8 pins: single-byte transfers at the bare register number,
//! * 16 pins: both banks in one 16-bit little-endian transaction on the
//!   PCA953x layout; the PCA957x layout has no word access and issues two
//!   dependent single-byte transactions instead (see
//!   [`Error::PartialWrite`]),
//! * 24 pins and more: one auto-increment block transfer covering all
//!   banks.
//!
//! Single-bank writes (the per-pin operations) are always plain byte
//! transfers at `(register_number << bank_shift) + bank`.

use crate::common::Direction;
use crate::error::Error;
use crate::regs::{bank_address, block_address, Layout, PinCount, Register, BANK_SIZE, MAX_BANKS};
use crate::I2cExt;

/// Immutable description of one chip variant, supplied at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipInfo {
    pins: PinCount,
    layout: Layout,
    interrupt: bool,
}

impl ChipInfo {
    pub const fn new(pins: PinCount, layout: Layout, interrupt: bool) -> Self {
        Self {
            pins,
            layout,
            interrupt,
        }
    }

    /// Build chip metadata from raw identification data (platform data,
    /// device-tree properties, enumeration tables).
    pub fn from_raw(ngpio: u8, layout: Layout, interrupt: bool) -> Result<Self, Error> {
        match PinCount::from_pins(ngpio) {
            Some(pins) => Ok(Self::new(pins, layout, interrupt)),
            None => Err(Error::UnsupportedPinCount(ngpio)),
        }
    }

    pub const fn pin_count(&self) -> PinCount {
        self.pins
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Whether this variant has an interrupt output.  The register core
    /// does not use it; the flag is carried for interrupt-handling
    /// collaborators.
    pub const fn has_interrupts(&self) -> bool {
        self.interrupt
    }
}

/// Register-access driver for one chip instance.
///
/// Wrap it in a [`PortMutex`][crate::PortMutex] before handing pin handles
/// out; the device types in [`dev`][crate::dev] do this for you.
pub struct Driver<I2C> {
    i2c: I2C,
    addr: u8,
    info: ChipInfo,
    out: [u8; MAX_BANKS],
    dir: [u8; MAX_BANKS],
    pol: [u8; MAX_BANKS],
}

impl<I2C> Driver<I2C> {
    pub fn new(i2c: I2C, addr: u8, info: ChipInfo) -> Self {
        Self {
            i2c,
            addr,
            info,
            // power-on reset state: outputs high, all pins inputs, no
            // polarity inversion
            out: [0xff; MAX_BANKS],
            dir: [0xff; MAX_BANKS],
            pol: [0x00; MAX_BANKS],
        }
    }

    pub fn chip_info(&self) -> &ChipInfo {
        &self.info
    }
}

impl<I2C: crate::I2cBus> Driver<I2C> {
    fn pin_bits(&self, pin: u8) -> Result<(usize, u8), Error<I2C::BusError>> {
        if pin >= self.info.pins.pins() {
            return Err(Error::InvalidPinIndex(pin));
        }
        Ok(((pin / BANK_SIZE) as usize, 1 << (pin % BANK_SIZE)))
    }

    /// Write a single bank of a logical register.
    fn write_bank(
        &mut self,
        reg: Register,
        bank: usize,
        value: u8,
    ) -> Result<(), Error<I2C::BusError>> {
        let number = self.info.layout.register_number(reg);
        let address = bank_address(self.info.pins, number, bank);
        self.i2c
            .write_reg(self.addr, address, value)
            .map_err(|e| Error::write(address, e))
    }

    /// Read a logical register into `buf`, one byte per bank.
    fn read_regs(
        &mut self,
        reg: Register,
        buf: &mut [u8; MAX_BANKS],
    ) -> Result<(), Error<I2C::BusError>> {
        let pins = self.info.pins;
        let number = self.info.layout.register_number(reg);
        match pins.banks() {
            1 => {
                buf[0] = self
                    .i2c
                    .read_reg(self.addr, number)
                    .map_err(|e| Error::read(number, e))?;
            }
            2 => {
                let address = number << 1;
                self.i2c
                    .read_block(self.addr, address, &mut buf[..2])
                    .map_err(|e| Error::read(address, e))?;
            }
            n => {
                let address = block_address(pins, number);
                self.i2c
                    .read_block(self.addr, address, &mut buf[..n])
                    .map_err(|e| Error::read(address, e))?;
            }
        }
        Ok(())
    }

    /// Write all banks of a logical register.
    fn write_regs(&mut self, reg: Register, values: &[u8]) -> Result<(), Error<I2C::BusError>> {
        let pins = self.info.pins;
        let number = self.info.layout.register_number(reg);
        debug_assert_eq!(values.len(), pins.banks());
        match pins.banks() {
            1 => self
                .i2c
                .write_reg(self.addr, number, values[0])
                .map_err(|e| Error::write(number, e)),
            2 => {
                let address = number << 1;
                match self.info.layout {
                    // both banks as one 16-bit little-endian transaction
                    Layout::Pca953x => self
                        .i2c
                        .write_block(self.addr, address, values)
                        .map_err(|e| Error::write(address, e)),
                    // no word access on this layout; two dependent byte
                    // writes, the second of which can leave the device in a
                    // half-updated state
                    Layout::Pca957x => {
                        self.i2c
                            .write_reg(self.addr, address, values[0])
                            .map_err(|e| Error::write(address, e))?;
                        self.i2c
                            .write_reg(self.addr, address + 1, values[1])
                            .map_err(|_| Error::PartialWrite {
                                register: address + 1,
                            })
                    }
                }
            }
            _ => {
                let address = block_address(pins, number);
                self.i2c
                    .write_block(self.addr, address, values)
                    .map_err(|e| Error::write(address, e))
            }
        }
    }

    /// Re-read the output, direction and polarity registers into the local
    /// shadows.
    ///
    /// Required after an [`Error::PartialWrite`] before any further
    /// shadow-based decision; also useful at attach time when the device is
    /// not in its power-on state.
    pub fn resync(&mut self) -> Result<(), Error<I2C::BusError>> {
        let mut buf = [0x00; MAX_BANKS];
        self.read_regs(Register::Output, &mut buf)?;
        self.out = buf;
        let mut buf = [0x00; MAX_BANKS];
        self.read_regs(Register::Direction, &mut buf)?;
        self.dir = buf;
        let mut buf = [0x00; MAX_BANKS];
        self.read_regs(Register::Polarity, &mut buf)?;
        self.pol = buf;
        Ok(())
    }
}

impl<I2C: crate::I2cBus> crate::PortDriver for Driver<I2C> {
    type Error = Error<I2C::BusError>;

    fn set_output(&mut self, pin: u8, level: bool) -> Result<(), Self::Error> {
        let (bank, bit) = self.pin_bits(pin)?;
        let value = if level {
            self.out[bank] | bit
        } else {
            self.out[bank] & !bit
        };
        self.write_bank(Register::Output, bank, value)?;
        self.out[bank] = value;
        Ok(())
    }

    fn is_output_set(&mut self, pin: u8) -> Result<bool, Self::Error> {
        let (bank, bit) = self.pin_bits(pin)?;
        Ok(self.out[bank] & bit != 0)
    }

    fn read_input(&mut self, pin: u8) -> Result<bool, Self::Error> {
        let (bank, bit) = self.pin_bits(pin)?;
        let mut buf = [0x00; MAX_BANKS];
        self.read_regs(Register::Input, &mut buf)?;
        Ok(buf[bank] & bit != 0)
    }
}

impl<I2C: crate::I2cBus> crate::PortDriverTotemPole for Driver<I2C> {
    fn set_direction(
        &mut self,
        pin: u8,
        dir: Direction,
        state: bool,
    ) -> Result<(), Self::Error> {
        let (bank, bit) = self.pin_bits(pin)?;
        // set state before switching direction to prevent glitch
        if dir == Direction::Output {
            crate::PortDriver::set_output(self, pin, state)?;
        }
        let value = match dir {
            Direction::Input => self.dir[bank] | bit,
            Direction::Output => self.dir[bank] & !bit,
        };
        self.write_bank(Register::Direction, bank, value)?;
        self.dir[bank] = value;
        Ok(())
    }
}

impl<I2C: crate::I2cBus> crate::PortDriverPolarity for Driver<I2C> {
    fn set_polarity(&mut self, pin: u8, inverted: bool) -> Result<(), Self::Error> {
        let (bank, bit) = self.pin_bits(pin)?;
        let value = if inverted {
            self.pol[bank] | bit
        } else {
            self.pol[bank] & !bit
        };
        self.write_bank(Register::Polarity, bank, value)?;
        self.pol[bank] = value;
        Ok(())
    }
}

impl<I2C: crate::I2cBus> crate::PortDriverBroadcast for Driver<I2C> {
    fn broadcast_output(&mut self, value: u8) -> Result<(), Self::Error> {
        let banks = self.info.pins.banks();
        let values = [value; MAX_BANKS];
        self.write_regs(Register::Output, &values[..banks])?;
        self.out[..banks].fill(value);
        Ok(())
    }

    fn broadcast_direction(&mut self, value: u8) -> Result<(), Self::Error> {
        let banks = self.info.pins.banks();
        let values = [value; MAX_BANKS];
        self.write_regs(Register::Direction, &values[..banks])?;
        self.dir[..banks].fill(value);
        Ok(())
    }
}
