use nonmax::NonMaxU8;

use crate::{
    connection::{IpmiCommand, NetFn, Request},
    cursor::ByteCursor,
    error::ParseError,
};

use super::{RecordId, ReservationId};

/// Get SDR: read (part of) a single repository record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GetSdr {
    reservation_id: ReservationId,
    record_id: RecordId,
    offset: u8,
    bytes_to_read: Option<NonMaxU8>,
}

impl GetSdr {
    /// Read the whole record in one go.
    pub fn new(reservation_id: ReservationId, record_id: RecordId) -> Self {
        Self {
            reservation_id,
            record_id,
            offset: 0,
            bytes_to_read: None,
        }
    }

    /// Read `len` bytes of the record, starting at `offset`.
    pub fn chunk(reservation_id: ReservationId, record_id: RecordId, offset: u8, len: u8) -> Self {
        Self {
            reservation_id,
            record_id,
            offset,
            bytes_to_read: NonMaxU8::new(len),
        }
    }
}

impl From<GetSdr> for Request {
    fn from(value: GetSdr) -> Self {
        let mut data = Vec::with_capacity(6);

        data.extend_from_slice(&value.reservation_id.value().to_le_bytes());
        data.extend_from_slice(&value.record_id.value().to_le_bytes());
        data.push(value.offset);
        // 0xFF: read the entire record
        data.push(value.bytes_to_read.map(|v| v.get()).unwrap_or(0xFF));

        Request::new(NetFn::Storage, 0x23, data)
    }
}

/// The next record id in the repository, and the bytes that were read.
#[derive(Debug, Clone, PartialEq)]
pub struct SdrChunk {
    pub next_id: RecordId,
    pub data: Vec<u8>,
}

impl IpmiCommand for GetSdr {
    type Output = SdrChunk;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, ParseError> {
        let mut cursor = ByteCursor::new(data);
        let next_id = RecordId::new_raw(cursor.pop_u16()?);

        Ok(SdrChunk {
            next_id,
            data: cursor.rest().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_chunk_request() {
        let request: Request =
            GetSdr::chunk(ReservationId::new_raw(0xBEEF), RecordId::new_raw(0x0102), 0, 5).into();

        assert_eq!(request.netfn(), NetFn::Storage);
        assert_eq!(request.cmd(), 0x23);
        assert_eq!(request.data(), &[0xEF, 0xBE, 0x02, 0x01, 0x00, 0x05]);
    }

    #[test]
    fn whole_record_request() {
        let request: Request = GetSdr::new(ReservationId::NONE, RecordId::FIRST).into();
        assert_eq!(request.data(), &[0x00, 0x00, 0x00, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn parse_chunk() {
        let chunk = GetSdr::parse_success_response(&[0xFF, 0xFF, 0x01, 0x02]).unwrap();
        assert!(chunk.next_id.is_last());
        assert_eq!(chunk.data, vec![0x01, 0x02]);

        assert!(GetSdr::parse_success_response(&[0xFF]).is_err());
    }
}
