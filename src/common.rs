/// Core pin operations every chip in the family supports.
///
/// All pin indices are zero-based and validated against the chip's pin
/// count before any bus activity.
pub trait PortDriver {
    type Error;

    /// Drive the output latch of `pin` to `level`.
    ///
    /// This is a read-modify-write on the locally shadowed output byte of
    /// the pin's bank; all other pins of the bank keep their shadowed value.
    fn set_output(&mut self, pin: u8, level: bool) -> Result<(), Self::Error>;

    /// Check whether the output latch of `pin` was set high.
    ///
    /// Answered from the local shadow, without bus activity.
    fn is_output_set(&mut self, pin: u8) -> Result<bool, Self::Error>;

    /// Read the live input level of `pin` from the device.
    ///
    /// There is no shadow for the input registers; this always performs a
    /// full read of the input banks.
    fn read_input(&mut self, pin: u8) -> Result<bool, Self::Error>;

    fn toggle_output(&mut self, pin: u8) -> Result<(), Self::Error> {
        let level = self.is_output_set(pin)?;
        self.set_output(pin, !level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

pub trait PortDriverTotemPole: PortDriver {
    /// Set the direction of `pin`.
    ///
    /// To prevent electrical glitches, when making a pin an output, `state`
    /// is driven onto the output latch before the direction switches.
    fn set_direction(&mut self, pin: u8, dir: Direction, state: bool)
        -> Result<(), Self::Error>;
}

pub trait PortDriverPolarity: PortDriver {
    /// Set the input polarity of `pin` either `inverted` or not.
    fn set_polarity(&mut self, pin: u8, inverted: bool) -> Result<(), Self::Error>;
}

/// Legacy mass-configuration surface.
///
/// These operations write one byte value replicated across *every* bank of
/// the respective register.  They override the state of all pins at once,
/// including pins owned by other [`Pin`][crate::Pin] handles, and exist for
/// compatibility with controllers that configure whole ports in one stroke.
/// They are deliberately separate from the per-pin API; prefer the per-pin
/// operations unless you really mean all pins.
pub trait PortDriverBroadcast: PortDriver {
    /// Write `value` to every output bank.
    fn broadcast_output(&mut self, value: u8) -> Result<(), Self::Error>;

    /// Write `value` to every direction bank.
    fn broadcast_direction(&mut self, value: u8) -> Result<(), Self::Error>;
}

/// Pin Modes
pub mod mode {
    /// Trait for pin-modes which can be used to set a logic level.
    pub trait HasOutput {}
    /// Trait for pin-modes which can be used to read a logic level.
    pub trait HasInput {}

    /// Pin configured as an input.
    pub struct Input;
    impl HasInput for Input {}

    /// Pin configured as an output.
    pub struct Output;
    impl HasOutput for Output {}
}
