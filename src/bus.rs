use crate::regs::MAX_BANKS;
use embedded_hal::i2c as hal_i2c;

/// Blanket trait for types implementing `i2c::I2c`
pub trait I2cBus: hal_i2c::I2c {
    type BusError: From<Self::Error> + hal_i2c::Error;
}

impl<T, E> I2cBus for T
where
    T: hal_i2c::I2c<Error = E>,
    E: hal_i2c::Error,
{
    type BusError = E;
}

/// Raw transfer primitives on top of an [`I2cBus`].
///
/// These take fully computed register addresses (bank offset and
/// auto-increment bit already applied) and perform no address interpretation
/// of their own.
pub(crate) trait I2cExt {
    type Error;

    fn write_reg(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error>;
    fn read_reg(&mut self, addr: u8, reg: u8) -> Result<u8, Self::Error>;
    fn write_block(&mut self, addr: u8, reg: u8, values: &[u8]) -> Result<(), Self::Error>;
    fn read_block(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<I2C: I2cBus> I2cExt for I2C {
    type Error = I2C::BusError;

    fn write_reg(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.write(addr, &[reg, value])?;
        Ok(())
    }

    fn read_reg(&mut self, addr: u8, reg: u8) -> Result<u8, Self::Error> {
        let mut buf = [0x00];
        self.write_read(addr, &[reg], &mut buf)?;
        Ok(buf[0])
    }

    fn write_block(&mut self, addr: u8, reg: u8, values: &[u8]) -> Result<(), Self::Error> {
        let mut buf = [0x00; MAX_BANKS + 1];
        buf[0] = reg;
        buf[1..1 + values.len()].copy_from_slice(values);
        self.write(addr, &buf[..1 + values.len()])?;
        Ok(())
    }

    fn read_block(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.write_read(addr, &[reg], buf)?;
        Ok(())
    }
}
