use core::convert::Infallible;
use core::fmt;

/// Direction of a failed register transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Errors returned by pin operations.
///
/// `E` is the error type of the underlying bus.  Operations which cannot
/// touch the bus (pure validation) use the default `Infallible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E = Infallible> {
    /// Pin index is outside `0..pin_count`.  Rejected before any bus
    /// activity.
    InvalidPinIndex(u8),
    /// Chip identification data carried a pin count that is not part of the
    /// family.  Rejected before any bus activity.
    UnsupportedPinCount(u8),
    /// The bus transfer for `register` failed.  No shadow state was
    /// modified.
    Bus { access: Access, register: u8, source: E },
    /// A two-bank write on a PCA957x-layout chip committed its first byte
    /// but failed on the second one (at `register`).
    ///
    /// The device and the local shadows may now disagree; issue a
    /// [`resync()`][crate::Driver::resync] before relying on shadow state
    /// again.
    PartialWrite { register: u8 },
}

impl<E> Error<E> {
    pub(crate) fn read(register: u8, source: E) -> Self {
        Error::Bus {
            access: Access::Read,
            register,
            source,
        }
    }

    pub(crate) fn write(register: u8, source: E) -> Self {
        Error::Bus {
            access: Access::Write,
            register,
            source,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPinIndex(pin) => write!(f, "invalid pin index {}", pin),
            Error::UnsupportedPinCount(ngpio) => {
                write!(f, "unsupported pin count {}", ngpio)
            }
            Error::Bus {
                access: Access::Read,
                register,
                source,
            } => write!(f, "failed reading register {:#04x}: {:?}", register, source),
            Error::Bus {
                access: Access::Write,
                register,
                source,
            } => write!(f, "failed writing register {:#04x}: {:?}", register, source),
            Error::PartialWrite { register } => {
                write!(f, "partial write, register {:#04x} not committed", register)
            }
        }
    }
}

impl<E: fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_contains_register_address() {
        let err: Error<&str> = Error::write(0x0a, "nak");
        assert_eq!(format!("{}", err), "failed writing register 0x0a: \"nak\"");

        let err: Error = Error::PartialWrite { register: 0x09 };
        assert_eq!(
            format!("{}", err),
            "partial write, register 0x09 not committed"
        );
    }
}
