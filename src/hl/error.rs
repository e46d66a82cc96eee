use crate::ll;
use core::fmt;

/// An error that can occur when controlling the AD9832
///
/// `E` is the error type of the [`Bus`] the driver talks through.
///
/// [`Bus`]: ../bus/trait.Bus.html
pub enum Error<E> {
    /// Error occured while using the bus
    ///
    /// If this happened in the middle of a frequency or phase write, the
    /// target register holds a mix of old and new bytes. Repeat the whole
    /// operation to get to a known state.
    Bus(E),

    /// A value or register index was outside its valid range
    ///
    /// Nothing was sent.
    OutOfRange,

    /// Text could not be parsed into the expected value
    ///
    /// Nothing was sent.
    InvalidInput,
}

impl<E> From<ll::OutOfRange> for Error<E> {
    fn from(_: ll::OutOfRange) -> Self {
        Error::OutOfRange
    }
}

// We can't derive this implementation, as `E` might not implement `Debug`.
impl<E> fmt::Debug for Error<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Bus(error) => write!(f, "Bus({:?})", error),
            Error::OutOfRange => write!(f, "OutOfRange"),
            Error::InvalidInput => write!(f, "InvalidInput"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E>
where
    E: defmt::Format,
{
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Bus(error) => defmt::write!(f, "Bus({})", error),
            Error::OutOfRange => defmt::write!(f, "OutOfRange"),
            Error::InvalidInput => defmt::write!(f, "InvalidInput"),
        }
    }
}
