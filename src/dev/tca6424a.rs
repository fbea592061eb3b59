//! Support for the `TCA6424A` "24-bit I2C-bus and SMBus I/O expander with interrupt"
//!
//! With three register banks per logical register, all whole-port accesses
//! on this chip use auto-increment block transfers.
use crate::{ChipInfo, Driver, Layout, PinCount, PortDriverBroadcast};

/// `TCA6424A` "24-bit I2C-bus and SMBus I/O expander with interrupt"
pub struct Tca6424a<M>(M);

const CHIP: ChipInfo = ChipInfo::new(PinCount::P24, Layout::Pca953x, true);

impl<I2C> Tca6424a<core::cell::RefCell<Driver<I2C>>>
where
    I2C: crate::I2cBus,
{
    pub fn new(i2c: I2C, addr: bool) -> Self {
        Self::with_mutex(i2c, addr)
    }
}

impl<I2C, M> Tca6424a<M>
where
    I2C: crate::I2cBus,
    M: crate::PortMutex<Port = Driver<I2C>>,
{
    pub fn with_mutex(i2c: I2C, addr: bool) -> Self {
        let addr = 0x22 | (addr as u8);
        Self(crate::PortMutex::create(Driver::new(i2c, addr, CHIP)))
    }

    pub fn split(&mut self) -> Parts<'_, I2C, M> {
        Parts {
            p00: crate::Pin::new(0, &self.0),
            p01: crate::Pin::new(1, &self.0),
            p02: crate::Pin::new(2, &self.0),
            p03: crate::Pin::new(3, &self.0),
            p04: crate::Pin::new(4, &self.0),
            p05: crate::Pin::new(5, &self.0),
            p06: crate::Pin::new(6, &self.0),
            p07: crate::Pin::new(7, &self.0),
            p10: crate::Pin::new(8, &self.0),
            p11: crate::Pin::new(9, &self.0),
            p12: crate::Pin::new(10, &self.0),
            p13: crate::Pin::new(11, &self.0),
            p14: crate::Pin::new(12, &self.0),
            p15: crate::Pin::new(13, &self.0),
            p16: crate::Pin::new(14, &self.0),
            p17: crate::Pin::new(15, &self.0),
            p20: crate::Pin::new(16, &self.0),
            p21: crate::Pin::new(17, &self.0),
            p22: crate::Pin::new(18, &self.0),
            p23: crate::Pin::new(19, &self.0),
            p24: crate::Pin::new(20, &self.0),
            p25: crate::Pin::new(21, &self.0),
            p26: crate::Pin::new(22, &self.0),
            p27: crate::Pin::new(23, &self.0),
        }
    }

    /// Write `value` to all three output banks, overriding every pin's
    /// output state at once.  See [`PortDriverBroadcast`].
    pub fn broadcast_output(&mut self, value: u8) -> Result<(), crate::Error<I2C::BusError>> {
        self.0.lock(|drv| drv.broadcast_output(value))
    }

    /// Write `value` to all three configuration banks, overriding every
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
    pub p00: crate::Pin<'a, crate::mode::Input, M>,
    pub p01: crate::Pin<'a, crate::mode::Input, M>,
    pub p02: crate::Pin<'a, crate::mode::Input, M>,
    pub p03: crate::Pin<'a, crate::mode::Input, M>,
    pub p04: crate::Pin<'a, crate::mode::Input, M>,
    pub p05: crate::Pin<'a, crate::mode::Input, M>,
    pub p06: crate::Pin<'a, crate::mode::Input, M>,
    pub p07: crate::Pin<'a, crate::mode::Input, M>,
    pub p10: crate::Pin<'a, crate::mode::Input, M>,
    pub p11: crate::Pin<'a, crate::mode::Input, M>,
    pub p12: crate::Pin<'a, crate::mode::Input, M>,
    pub p13: crate::Pin<'a, crate::mode::Input, M>,
    pub p14: crate::Pin<'a, crate::mode::Input, M>,
    pub p15: crate::Pin<'a, crate::mode::Input, M>,
    pub p16: crate::Pin<'a, crate::mode::Input, M>,
    pub p17: crate::Pin<'a, crate::mode::Input, M>,
    pub p20: crate::Pin<'a, crate::mode::Input, M>,
    pub p21: crate::Pin<'a, crate::mode::Input, M>,
    pub p22: crate::Pin<'a, crate::mode::Input, M>,
    pub p23: crate::Pin<'a, crate::mode::Input, M>,
    pub p24: crate::Pin<'a, crate::mode::Input, M>,
    pub p25: crate::Pin<'a, crate::mode::Input, M>,
    pub p26: crate::Pin<'a, crate::mode::Input, M>,
    pub p27: crate::Pin<'a, crate::mode::Input, M>,
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[test]
    fn tca6424a() {
        let expectations = [
            // pin setup p00 (output 0x04, configuration 0x0c)
            mock_i2c::Transaction::write(0x22, vec![0x04, 0xfe]),
            mock_i2c::Transaction::write(0x22, vec![0x0c, 0xfe]),
            // pin setup p10 (bank 1)
            mock_i2c::Transaction::write(0x22, vec![0x05, 0xfe]),
            mock_i2c::Transaction::write(0x22, vec![0x0d, 0xfe]),
            // output p00
            mock_i2c::Transaction::write(0x22, vec![0x04, 0xff]),
            // input p22 (pin 18): one block read of all three banks
            mock_i2c::Transaction::write_read(0x22, vec![0x80], vec![0x00, 0x00, 0x04]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut tca = super::Tca6424a::new(bus.clone(), false);
        let tca_pins = tca.split();

        let mut p00 = tca_pins.p00.into_output().unwrap();
        let _p10 = tca_pins.p10.into_output().unwrap();

        p00.set_high().unwrap();

        assert!(tca_pins.p22.is_high().unwrap());

        bus.done();
    }

    #[test]
    fn tca6424a_broadcast_block_write() {
        let expectations = [
            // all three output banks in one auto-increment transaction
            mock_i2c::Transaction::write(0x23, vec![0x84, 0x00, 0x00, 0x00]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut tca = super::Tca6424a::new(bus.clone(), true);
        tca.broadcast_output(0x00).unwrap();

        bus.done();
    }
}
