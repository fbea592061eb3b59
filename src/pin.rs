use core::marker::PhantomData;
use embedded_hal::digital as hal_digital;

/// Representation of a port-expander pin.
///
/// `Pin` is not constructed directly, this type is created by instanciating
/// a port-expander and then getting access to all its pins using the
/// `.split()` method.
pub struct Pin<'a, MODE, MUTEX> {
    pin: u8,
    port_driver: &'a MUTEX,
    _m: PhantomData<MODE>,
}

impl<'a, MODE, MUTEX, PD> Pin<'a, MODE, MUTEX>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
{
    pub(crate) fn new(pin: u8, port_driver: &'a MUTEX) -> Self {
        assert!(pin < crate::regs::MAX_BANKS as u8 * crate::regs::BANK_SIZE);
        Self {
            pin,
            port_driver,
            _m: PhantomData,
        }
    }

    /// Zero-based index of this pin on its chip.
    pub fn pin_index(&self) -> u8 {
        self.pin
    }
}

impl<'a, MODE, MUTEX, PD> Pin<'a, MODE, MUTEX>
where
    PD: crate::PortDriverTotemPole,
    MUTEX: crate::PortMutex<Port = PD>,
{
    /// Configure this pin as an input.
    ///
    /// The exact electrical details depend on the port-expander device.
    pub fn into_input(self) -> Result<Pin<'a, crate::mode::Input, MUTEX>, PD::Error> {
        self.port_driver
            .lock(|drv| drv.set_direction(self.pin, crate::Direction::Input, false))?;
        Ok(Pin {
            pin: self.pin,
            port_driver: self.port_driver,
            _m: PhantomData,
        })
    }

    /// Configure this pin as an output, driving it LOW initially.
    ///
    /// The LOW level is configured before the pin becomes an output to
    /// prevent an electrical glitch.
    pub fn into_output(self) -> Result<Pin<'a, crate::mode::Output, MUTEX>, PD::Error> {
        self.port_driver
            .lock(|drv| drv.set_direction(self.pin, crate::Direction::Output, false))?;
        Ok(Pin {
            pin: self.pin,
            port_driver: self.port_driver,
            _m: PhantomData,
        })
    }

    /// Configure this pin as an output, driving it HIGH initially.
    ///
    /// The HIGH level is configured before the pin becomes an output to
    /// prevent an electrical glitch.
    pub fn into_output_high(self) -> Result<Pin<'a, crate::mode::Output, MUTEX>, PD::Error> {
        self.port_driver
            .lock(|drv| drv.set_direction(self.pin, crate::Direction::Output, true))?;
        Ok(Pin {
            pin: self.pin,
            port_driver: self.port_driver,
            _m: PhantomData,
        })
    }
}

impl<'a, MODE, MUTEX, PD> Pin<'a, MODE, MUTEX>
where
    PD: crate::PortDriverPolarity,
    MUTEX: crate::PortMutex<Port = PD>,
{
    /// Turn on hardware polarity inversion for this pin.
    pub fn into_inverted(self) -> Result<Self, PD::Error> {
        self.port_driver
            .lock(|drv| drv.set_polarity(self.pin, true))?;
        Ok(self)
    }

    /// Set hardware polarity inversion for this pin.
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), PD::Error> {
        self.port_driver
            .lock(|drv| drv.set_polarity(self.pin, inverted))
    }
}

impl<'a, MODE: crate::mode::HasInput, MUTEX, PD> Pin<'a, MODE, MUTEX>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
{
    /// Read the pin's input state and return `true` if it is HIGH.
    pub fn is_high(&self) -> Result<bool, PD::Error> {
        self.port_driver.lock(|drv| drv.read_input(self.pin))
    }

    /// Read the pin's input state and return `true` if it is LOW.
    pub fn is_low(&self) -> Result<bool, PD::Error> {
        self.is_high().map(|v| !v)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, PD> Pin<'a, MODE, MUTEX>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
{
    /// Set the pin's output state to HIGH.
    ///
    /// Note that this can have different electrical meanings depending on
    /// the port-expander chip.
    pub fn set_high(&mut self) -> Result<(), PD::Error> {
        self.port_driver.lock(|drv| drv.set_output(self.pin, true))
    }

    /// Set the pin's output state to LOW.
    ///
    /// Note that this can have different electrical meanings depending on
    /// the port-expander chip.
    pub fn set_low(&mut self) -> Result<(), PD::Error> {
        self.port_driver.lock(|drv| drv.set_output(self.pin, false))
    }

    /// Return `true` if the pin's output state is HIGH.
    ///
    /// This method does **not** read the pin's electrical state.
    pub fn is_set_high(&self) -> Result<bool, PD::Error> {
        self.port_driver.lock(|drv| drv.is_output_set(self.pin))
    }

    /// Return `true` if the pin's output state is LOW.
    ///
    /// This method does **not** read the pin's electrical state.
    pub fn is_set_low(&self) -> Result<bool, PD::Error> {
        self.is_set_high().map(|v| !v)
    }

    /// Toggle the pin's output state.
    pub fn toggle(&mut self) -> Result<(), PD::Error> {
        self.port_driver.lock(|drv| drv.toggle_output(self.pin))
    }
}

impl<'a, MODE, MUTEX, PD> hal_digital::ErrorType for Pin<'a, MODE, MUTEX>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
    PD::Error: hal_digital::Error,
{
    type Error = PD::Error;
}

impl<'a, MODE: crate::mode::HasInput, MUTEX, PD> hal_digital::InputPin for Pin<'a, MODE, MUTEX>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
    PD::Error: hal_digital::Error,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Pin::is_high(self)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Pin::is_low(self)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, PD> hal_digital::OutputPin for Pin<'a, MODE, MUTEX>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
    PD::Error: hal_digital::Error,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_high(self)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, PD> hal_digital::StatefulOutputPin
    for Pin<'a, MODE, MUTEX>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
    PD::Error: hal_digital::Error,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_high(self)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_low(self)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Pin::toggle(self)
    }
}
