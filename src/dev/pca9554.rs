//! Support for the `PCA9554` "8-bit I2C-bus and SMBus I/O port with interrupt"
use crate::{ChipInfo, Driver, Layout, PinCount, PortDriverBroadcast};

/// `PCA9554` "8-bit I2C-bus and SMBus I/O port with interrupt"
pub struct Pca9554<M>(M);

const CHIP: ChipInfo = ChipInfo::new(PinCount::P8, Layout::Pca953x, true);

impl<I2C> Pca9554<core::cell::RefCell<Driver<I2C>>>
where
    I2C: crate::I2cBus,
{
    pub fn new(i2c: I2C, addr: u8) -> Self {
        Self::with_mutex(i2c, addr)
    }
}

impl<I2C, M> Pca9554<M>
where
    I2C: crate::I2cBus,
    M: crate::PortMutex<Port = Driver<I2C>>,
{
    pub fn with_mutex(i2c: I2C, addr: u8) -> Self {
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
        }
    }

    /// Write `value` to the output register, overriding every pin's output
    /// state at once.  See [`PortDriverBroadcast`].
    pub fn broadcast_output(&mut self, value: u8) -> Result<(), crate::Error<I2C::BusError>> {
        self.0.lock(|drv| drv.broadcast_output(value))
    }

    /// Write `value` to the direction register, overriding every pin's
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
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[test]
    fn pca9554() {
        let expectations = [
            // io0_3 as output (driven low first), then back to input
            mock_i2c::Transaction::write(0x38, vec![0x01, 0xf7]),
            mock_i2c::Transaction::write(0x38, vec![0x03, 0xf7]),
            mock_i2c::Transaction::write(0x38, vec![0x03, 0xff]),
            // io0_7 reads
            mock_i2c::Transaction::write_read(0x38, vec![0x00], vec![0x80]),
            mock_i2c::Transaction::write_read(0x38, vec![0x00], vec![0x7f]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut pca = super::Pca9554::new(bus.clone(), 0x38);
        let pca_pins = pca.split();

        let io0_3 = pca_pins.io0_3.into_output().unwrap();
        let _io0_3 = io0_3.into_input().unwrap();

        assert!(pca_pins.io0_7.is_high().unwrap());
        assert!(pca_pins.io0_7.is_low().unwrap());

        bus.done();
    }

    #[test]
    fn pca9554_broadcast_overrides_all_pins() {
        let expectations = [
            // io0_0 set up as output driving high
            mock_i2c::Transaction::write(0x38, vec![0x01, 0xff]),
            mock_i2c::Transaction::write(0x38, vec![0x03, 0xfe]),
            // broadcast clears every output latch, including io0_0's
            mock_i2c::Transaction::write(0x38, vec![0x01, 0x00]),
            // a following per-pin operation starts from the broadcast value
            mock_i2c::Transaction::write(0x38, vec![0x01, 0x00]),
            mock_i2c::Transaction::write(0x38, vec![0x03, 0xfe]),
            mock_i2c::Transaction::write(0x38, vec![0x01, 0x01]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut pca = super::Pca9554::new(bus.clone(), 0x38);

        {
            let pca_pins = pca.split();
            let _io0_0 = pca_pins.io0_0.into_output_high().unwrap();
        }

        pca.broadcast_output(0x00).unwrap();

        let mut io0_0 = pca.split().io0_0.into_output().unwrap();
        io0_0.set_high().unwrap();

        bus.done();
    }
}
