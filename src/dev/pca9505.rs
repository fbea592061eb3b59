//! Support for the `PCA9505` "40-bit parallel input/output port expander"
//!
//! The largest member of the family: five register banks per logical
//! register, whole-port accesses as 5-byte auto-increment block transfers.
use crate::{ChipInfo, Driver, Layout, PinCount, PortDriverBroadcast};

/// `PCA9505` "40-bit parallel input/output port expander"
pub struct Pca9505<M>(M);

const CHIP: ChipInfo = ChipInfo::new(PinCount::P40, Layout::Pca953x, true);

impl<I2C> Pca9505<core::cell::RefCell<Driver<I2C>>>
where
    I2C: crate::I2cBus,
{
    pub fn new(i2c: I2C, a0: bool, a1: bool, a2: bool) -> Self {
        Self::with_mutex(i2c, a0, a1, a2)
    }
}

impl<I2C, M> Pca9505<M>
where
    I2C: crate::I2cBus,
    M: crate::PortMutex<Port = Driver<I2C>>,
{
    pub fn with_mutex(i2c: I2C, a0: bool, a1: bool, a2: bool) -> Self {
        let addr = 0x20 | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8);
        Self(crate::PortMutex::create(Driver::new(i2c, addr, CHIP)))
    }

    pub fn split(&mut self) -> Parts<'_, I2C, M> {
        Parts {
            io0_0: crate::Pin::new(0, &self.0),
            io0_1: crate::Pin::new(1, &self.0),
            io0_2: crate::Pin::new(2, &self.0),
            io0_3: crate::Pin::new(3, &self.0),
            io0_4: crate::Pin::new(4, &self.0),
            io0_5: crate::Pin::new(5, &self.0),
            io0_6: crate::Pin::new(6, &self.0),
            io0_7: crate::Pin::new(7, &self.0),
            io1_0: crate::Pin::new(8, &self.0),
            io1_1: crate::Pin::new(9, &self.0),
            io1_2: crate::Pin::new(10, &self.0),
            io1_3: crate::Pin::new(11, &self.0),
            io1_4: crate::Pin::new(12, &self.0),
            io1_5: crate::Pin::new(13, &self.0),
            io1_6: crate::Pin::new(14, &self.0),
            io1_7: crate::Pin::new(15, &self.0),
            io2_0: crate::Pin::new(16, &self.0),
            io2_1: crate::Pin::new(17, &self.0),
            io2_2: crate::Pin::new(18, &self.0),
            io2_3: crate::Pin::new(19, &self.0),
            io2_4: crate::Pin::new(20, &self.0),
            io2_5: crate::Pin::new(21, &self.0),
            io2_6: crate::Pin::new(22, &self.0),
            io2_7: crate::Pin::new(23, &self.0),
            io3_0: crate::Pin::new(24, &self.0),
            io3_1: crate::Pin::new(25, &self.0),
            io3_2: crate::Pin::new(26, &self.0),
            io3_3: crate::Pin::new(27, &self.0),
            io3_4: crate::Pin::new(28, &self.0),
            io3_5: crate::Pin::new(29, &self.0),
            io3_6: crate::Pin::new(30, &self.0),
            io3_7: crate::Pin::new(31, &self.0),
            io4_0: crate::Pin::new(32, &self.0),
            io4_1: crate::Pin::new(33, &self.0),
            io4_2: crate::Pin::new(34, &self.0),
            io4_3: crate::Pin::new(35, &self.0),
            io4_4: crate::Pin::new(36, &self.0),
            io4_5: crate::Pin::new(37, &self.0),
            io4_6: crate::Pin::new(38, &self.0),
            io4_7: crate::Pin::new(39, &self.0),
        }
    }

    /// Write `value` to all five output banks, overriding every pin's
    /// output state at once.  See [`PortDriverBroadcast`].
    pub fn broadcast_output(&mut self, value: u8) -> Result<(), crate::Error<I2C::BusError>> {
        self.0.lock(|drv| drv.broadcast_output(value))
    }

    /// Write `value` to all five configuration banks, overriding every
    /// pin's direction at once.  See [`PortDriverBroadcast`].
    pub fn broadcast_direction(&mut self, value: u8) -> Result<(), crate::Error<I2C::BusError>> {
        self.0.lock(|drv| drv.broadcast_direction(value))
    }

    /// Re-read the device registers into the local shadows.
    pub fn resync(&mut self) -> Result<(), crate::Error<I2C::BusError>> {
        self.0.lock(|drv| drv.resync())
    }
}

pub struct Parts<'a, I2C, M = core::cell::RefCell<Driver<I2C>>>
where
    I2C: crate::I2cBus,
    M: crate::PortMutex<Port = Driver<I2C>>,
{
    pub io0_0: crate::Pin<'a, crate::mode::Input, M>,
    pub io0_1: crate::Pin<'a, crate::mode::Input, M>,
    pub io0_2: crate::Pin<'a, crate::mode::Input, M>,
    pub io0_3: crate::Pin<'a, crate::mode::Input, M>,
    pub io0_4: crate::Pin<'a, crate::mode::Input, M>,
    pub io0_5: crate::Pin<'a, crate::mode::Input, M>,
    pub io0_6: crate::Pin<'a, crate::mode::Input, M>,
    pub io0_7: crate::Pin<'a, crate::mode::Input, M>,
    pub io1_0: crate::Pin<'a, crate::mode::Input, M>,
    pub io1_1: crate::Pin<'a, crate::mode::Input, M>,
    pub io1_2: crate::Pin<'a, crate::mode::Input, M>,
    pub io1_3: crate::Pin<'a, crate::mode::Input, M>,
    pub io1_4: crate::Pin<'a, crate::mode::Input, M>,
    pub io1_5: crate::Pin<'a, crate::mode::Input, M>,
    pub io1_6: crate::Pin<'a, crate::mode::Input, M>,
    pub io1_7: crate::Pin<'a, crate::mode::Input, M>,
    pub io2_0: crate::Pin<'a, crate::mode::Input, M>,
    pub io2_1: crate::Pin<'a, crate::mode::Input, M>,
    pub io2_2: crate::Pin<'a, crate::mode::Input, M>,
    pub io2_3: crate::Pin<'a, crate::mode::Input, M>,
    pub io2_4: crate::Pin<'a, crate::mode::Input, M>,
    pub io2_5: crate::Pin<'a, crate::mode::Input, M>,
    pub io2_6: crate::Pin<'a, crate::mode::Input, M>,
    pub io2_7: crate::Pin<'a, crate::mode::Input, M>,
    pub io3_0: crate::Pin<'a, crate::mode::Input, M>,
    pub io3_1: crate::Pin<'a, crate::mode::Input, M>,
    pub io3_2: crate::Pin<'a, crate::mode::Input, M>,
    pub io3_3: crate::Pin<'a, crate::mode::Input, M>,
    pub io3_4: crate::Pin<'a, crate::mode::Input, M>,
    pub io3_5: crate::Pin<'a, crate::mode::Input, M>,
    pub io3_6: crate::Pin<'a, crate::mode::Input, M>,
    pub io3_7: crate::Pin<'a, crate::mode::Input, M>,
    pub io4_0: crate::Pin<'a, crate::mode::Input, M>,
    pub io4_1: crate::Pin<'a, crate::mode::Input, M>,
    pub io4_2: crate::Pin<'a, crate::mode::Input, M>,
    pub io4_3: crate::Pin<'a, crate::mode::Input, M>,
    pub io4_4: crate::Pin<'a, crate::mode::Input, M>,
    pub io4_5: crate::Pin<'a, crate::mode::Input, M>,
    pub io4_6: crate::Pin<'a, crate::mode::Input, M>,
    pub io4_7: crate::Pin<'a, crate::mode::Input, M>,
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[test]
    fn pca9505() {
        let expectations = [
            // pin setup io0_0 (output 0x08, configuration 0x18)
            mock_i2c::Transaction::write(0x20, vec![0x08, 0xfe]),
            mock_i2c::Transaction::write(0x20, vec![0x18, 0xfe]),
            // pin setup io3_4 (bank 3)
            mock_i2c::Transaction::write(0x20, vec![0x0b, 0xef]),
            mock_i2c::Transaction::write(0x20, vec![0x1b, 0xef]),
            // input io4_5 (pin 37): one 5-byte block read, bit 5 of bank 4
            mock_i2c::Transaction::write_read(
                0x20,
                vec![0x80],
                vec![0x00, 0x00, 0x00, 0x00, 0x20],
            ),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut pca = super::Pca9505::new(bus.clone(), false, false, false);
        let pca_pins = pca.split();

        let _io0_0 = pca_pins.io0_0.into_output().unwrap();
        let _io3_4 = pca_pins.io3_4.into_output().unwrap();

        assert!(pca_pins.io4_5.is_high().unwrap());

        bus.done();
    }

    #[test]
    fn pca9505_broadcast_direction() {
        let expectations = [
            // all five configuration banks in one auto-increment transaction
            mock_i2c::Transaction::write(0x24, vec![0x98, 0x00, 0x00, 0x00, 0x00, 0x00]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut pca = super::Pca9505::new(bus.clone(), false, false, true);
        pca.broadcast_direction(0x00).unwrap();

        bus.done();
    }
}
