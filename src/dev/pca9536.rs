//! Support for the `PCA9536` "4-bit I2C-bus and SMBus I/O port"
use crate::{ChipInfo, Driver, Layout, PinCount, PortDriverBroadcast};

/// `PCA9536` "4-bit I2C-bus and SMBus I/O port"
pub struct Pca9536<M>(M);

const ADDRESS: u8 = 0x41;
const CHIP: ChipInfo = ChipInfo::new(PinCount::P4, Layout::Pca953x, false);

impl<I2C> Pca9536<core::cell::RefCell<Driver<I2C>>>
where
    I2C: crate::I2cBus,
{
    pub fn new(i2c: I2C) -> Self {
        Self::with_mutex(i2c)
    }
}

impl<I2C, M> Pca9536<M>
where
    I2C: crate::I2cBus,
    M: crate::PortMutex<Port = Driver<I2C>>,
{
    pub fn with_mutex(i2c: I2C) -> Self {
        Self(crate::PortMutex::create(Driver::new(i2c, ADDRESS, CHIP)))
    }

    pub fn split(&mut self) -> Parts<'_, I2C, M> {
        Parts {
            io0: crate::Pin::new(0, &self.0),
            io1: crate::Pin::new(1, &self.0),
            io2: crate::Pin::new(2, &self.0),
            io3: crate::Pin::new(3, &self.0),
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
    pub io0: crate::Pin<'a, crate::mode::Input, M>,
    pub io1: crate::Pin<'a, crate::mode::Input, M>,
    pub io2: crate::Pin<'a, crate::mode::Input, M>,
    pub io3: crate::Pin<'a, crate::mode::Input, M>,
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[test]
    fn pca9536() {
        let expectations = [
            // pin setup io0
            mock_i2c::Transaction::write(super::ADDRESS, vec![0x01, 0xfe]),
            mock_i2c::Transaction::write(super::ADDRESS, vec![0x03, 0xfe]),
            // pin setup io1
            mock_i2c::Transaction::write(super::ADDRESS, vec![0x01, 0xfc]),
            mock_i2c::Transaction::write(super::ADDRESS, vec![0x03, 0xfc]),
            // pin setup io0 as input
            mock_i2c::Transaction::write(super::ADDRESS, vec![0x03, 0xfd]),
            // io1 writes
            mock_i2c::Transaction::write(super::ADDRESS, vec![0x01, 0xfe]),
            mock_i2c::Transaction::write(super::ADDRESS, vec![0x01, 0xfc]),
            mock_i2c::Transaction::write(super::ADDRESS, vec![0x01, 0xfe]),
            // io0 reads
            mock_i2c::Transaction::write_read(super::ADDRESS, vec![0x00], vec![0x01]),
            mock_i2c::Transaction::write_read(super::ADDRESS, vec![0x00], vec![0x00]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut pca = super::Pca9536::new(bus.clone());
        let pca_pins = pca.split();

        let io0 = pca_pins.io0.into_output().unwrap();
        let mut io1 = pca_pins.io1.into_output().unwrap();

        let io0 = io0.into_input().unwrap();

        io1.set_high().unwrap();
        io1.set_low().unwrap();
        io1.toggle().unwrap();

        assert!(io0.is_high().unwrap());
        assert!(io0.is_low().unwrap());

        bus.done();
    }
}
