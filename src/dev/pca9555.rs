//! Support for the `PCA9555` "16-bit I2C-bus and SMBus I/O port with interrupt"
use crate::{ChipInfo, Driver, Layout, PinCount, PortDriverBroadcast};

/// `PCA9555` "16-bit I2C-bus and SMBus I/O port with interrupt"
pub struct Pca9555<M>(M);

const CHIP: ChipInfo = ChipInfo::new(PinCount::P16, Layout::Pca953x, true);

impl<I2C> Pca9555<core::cell::RefCell<Driver<I2C>>>
where
    I2C: crate::I2cBus,
{
    pub fn new(i2c: I2C, a0: bool, a1: bool, a2: bool) -> Self {
        Self::with_mutex(i2c, a0, a1, a2)
    }
}

impl<I2C, M> Pca9555<M>
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
        }
    }

    /// Write `value` to both output banks, overriding every pin's output
    /// state at once.  See [`PortDriverBroadcast`].
    pub fn broadcast_output(&mut self, value: u8) -> Result<(), crate::Error<I2C::BusError>> {
        self.0.lock(|drv| drv.broadcast_output(value))
    }

    /// Write `value` to both direction banks, overriding every pin's
    /// direction at once.  See [`PortDriverBroadcast`].
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
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[test]
    fn pca9555() {
        let expectations = [
            // pin setup io0_0
            mock_i2c::Transaction::write(0x22, vec![0x02, 0xfe]),
            mock_i2c::Transaction::write(0x22, vec![0x06, 0xfe]),
            // pin setup io1_0
            mock_i2c::Transaction::write(0x22, vec![0x03, 0xfe]),
            mock_i2c::Transaction::write(0x22, vec![0x07, 0xfe]),
            // output io0_0, io1_0
            mock_i2c::Transaction::write(0x22, vec![0x02, 0xff]),
            mock_i2c::Transaction::write(0x22, vec![0x03, 0xff]),
            // input io0_7, io1_7 (full word read each time)
            mock_i2c::Transaction::write_read(0x22, vec![0x00], vec![0x80, 0x00]),
            mock_i2c::Transaction::write_read(0x22, vec![0x00], vec![0x7f, 0xff]),
            mock_i2c::Transaction::write_read(0x22, vec![0x00], vec![0x00, 0x80]),
            mock_i2c::Transaction::write_read(0x22, vec![0x00], vec![0xff, 0x7f]),
            // polarity io0_7, io1_7
            mock_i2c::Transaction::write(0x22, vec![0x04, 0x80]),
            mock_i2c::Transaction::write(0x22, vec![0x04, 0x00]),
            mock_i2c::Transaction::write(0x22, vec![0x05, 0x80]),
            mock_i2c::Transaction::write(0x22, vec![0x05, 0x00]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut pca = super::Pca9555::new(bus.clone(), false, true, false);
        let pca_pins = pca.split();

        let mut io0_0 = pca_pins.io0_0.into_output().unwrap();
        let mut io1_0 = pca_pins.io1_0.into_output().unwrap();

        io0_0.set_high().unwrap();
        io1_0.set_high().unwrap();

        let io0_7 = pca_pins.io0_7;
        let io1_7 = pca_pins.io1_7;
        assert!(io0_7.is_high().unwrap());
        assert!(io0_7.is_low().unwrap());
        assert!(io1_7.is_high().unwrap());
        assert!(io1_7.is_low().unwrap());

        let mut io0_7 = io0_7.into_inverted().unwrap();
        io0_7.set_inverted(false).unwrap();
        let mut io1_7 = io1_7.into_inverted().unwrap();
        io1_7.set_inverted(false).unwrap();

        bus.done();
    }

    #[test]
    fn pca9555_broadcast_direction() {
        let expectations = [
            // both configuration banks in one word transaction
            mock_i2c::Transaction::write(0x20, vec![0x06, 0x00, 0x00]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut pca = super::Pca9555::new(bus.clone(), false, false, false);
        pca.broadcast_direction(0x00).unwrap();

        bus.done();
    }
}
