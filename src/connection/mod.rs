//! Request/response framing and the transport seam.
//!
//! Everything that talks to a management controller goes through an
//! [`IpmiConnection`]: one request out, one response back, strictly in
//! that order.

mod completion_code;
pub use completion_code::{CompletionErrorCode, ResponseUnavailableReason};

#[cfg(feature = "unix-file")]
mod file;
#[cfg(feature = "unix-file")]
pub use file::{File, FileError};

mod netfn;
pub use netfn::NetFn;

mod request;
pub use request::Request;

mod response;
pub use response::Response;

use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalUnit {
    Zero,
    One,
    Two,
    Three,
}

impl LogicalUnit {
    /// Construct a `LogicalUnit` from the two lowest bits of `value`,
    /// ignoring all other bits.
    pub fn from_low_bits(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::Zero,
            0b01 => Self::One,
            0b10 => Self::Two,
            _ => Self::Three,
        }
    }

    pub fn value(&self) -> u8 {
        match self {
            LogicalUnit::Zero => 0,
            LogicalUnit::One => 1,
            LogicalUnit::Two => 2,
            LogicalUnit::Three => 3,
        }
    }
}

impl TryFrom<u8> for LogicalUnit {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 0b11 {
            Ok(Self::from_low_bits(value))
        } else {
            Err(())
        }
    }
}

impl From<LogicalUnit> for u8 {
    fn from(value: LogicalUnit) -> Self {
        value.value()
    }
}

/// A half-duplex channel to a management controller.
///
/// Implementations send `request` and block until the matching response
/// arrives (or their own timeout expires). Timeouts and cancellation are
/// entirely the connection's business; callers propagate whatever error
/// it reports without interpreting it.
pub trait IpmiConnection {
    type Error: core::fmt::Debug;

    fn send_recv(&mut self, request: &Request) -> Result<Response, Self::Error>;
}

impl<T> IpmiConnection for &mut T
where
    T: IpmiConnection,
{
    type Error = T::Error;

    fn send_recv(&mut self, request: &Request) -> Result<Response, Self::Error> {
        (**self).send_recv(request)
    }
}

/// A typed IPMI command.
///
/// The command encodes itself into a [`Request`] and decodes the data
/// of a successful response (completion code `0x00`, already stripped).
pub trait IpmiCommand: Into<Request> {
    type Output;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, ParseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_unit_bits() {
        assert_eq!(LogicalUnit::from_low_bits(0xFE), LogicalUnit::Two);
        assert_eq!(LogicalUnit::try_from(3), Ok(LogicalUnit::Three));
        assert_eq!(LogicalUnit::try_from(4), Err(()));
        assert_eq!(u8::from(LogicalUnit::One), 1);
    }
}
