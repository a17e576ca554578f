//! Reserve SDR Repository (IPMI 2.0 section 33.11) and the reservation
//! id it returns. The id is shared with Reserve SEL.

use crate::{
    connection::{IpmiCommand, NetFn, Request},
    cursor::ByteCursor,
    error::ParseError,
};

/// A reservation guarding a multi-part read.
///
/// A reservation stays valid until the repository is modified or
/// somebody else takes a new one. After that, reads carrying it fail
/// with completion code `0xC5` and the read has to start over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationId(u16);

impl ReservationId {
    /// "No reservation". Accepted for reads that start at offset 0.
    pub const NONE: Self = Self(0);

    pub fn new_raw(value: u16) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub(crate) fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let mut cursor = ByteCursor::new(data);
        Ok(Self(cursor.pop_u16()?))
    }
}

pub struct ReserveSdrRepository;

impl From<ReserveSdrRepository> for Request {
    fn from(_: ReserveSdrRepository) -> Self {
        Request::new(NetFn::Storage, 0x22, Vec::new())
    }
}

impl IpmiCommand for ReserveSdrRepository {
    type Output = ReservationId;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, ParseError> {
        ReservationId::parse(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reservation() {
        assert_eq!(
            ReserveSdrRepository::parse_success_response(&[0x34, 0x12]),
            Ok(ReservationId::new_raw(0x1234))
        );
        assert!(ReserveSdrRepository::parse_success_response(&[0x34]).is_err());

        let request: Request = ReserveSdrRepository.into();
        assert_eq!(request.netfn(), NetFn::Storage);
        assert_eq!(request.cmd(), 0x22);
        assert!(request.data().is_empty());
    }
}
