use crate::{
    connection::{IpmiCommand, NetFn, Request},
    cursor::ByteCursor,
    error::ParseError,
    fmt::LogItem,
    Loggable,
};

use super::{Entry, RecordId};

/// Get SEL Entry, always reading the whole entry.
///
/// Partial reads are never issued, so no reservation is required and
/// the reservation id field is left at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct GetEntry {
    record_id: RecordId,
}

impl GetEntry {
    pub fn new(record_id: RecordId) -> Self {
        Self { record_id }
    }
}

/// The raw bytes of an entry and the id of the entry that follows it.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryInfo {
    pub next_entry: RecordId,
    pub raw: Vec<u8>,
}

impl EntryInfo {
    pub fn entry(&self) -> Result<Entry, ParseError> {
        Entry::parse(&self.raw)
    }
}

impl Loggable for EntryInfo {
    fn as_log(&self) -> Vec<LogItem> {
        let mut log_output = match self.entry() {
            Ok(entry) => entry.as_log(),
            Err(e) => crate::log_vec![
                (0, "SEL entry"),
                (1, "Raw", format!("{:02X?}", self.raw)),
                (1, "Error", e),
            ],
        };

        let value = format!("0x{:04X}", self.next_entry.value());
        log_output.push((1, "Next entry", value).into());
        log_output
    }
}

impl IpmiCommand for GetEntry {
    type Output = EntryInfo;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, ParseError> {
        let mut cursor = ByteCursor::new(data);
        let next_entry = RecordId::new_raw(cursor.pop_u16()?);

        // Decoded separately, so that an entry of the wrong length does
        // not lose the next id.
        let raw = cursor.rest().to_vec();

        Ok(EntryInfo { next_entry, raw })
    }
}

impl From<GetEntry> for Request {
    fn from(value: GetEntry) -> Self {
        let mut data = vec![0u8; 6];

        data[2..4].copy_from_slice(&value.record_id.value().to_le_bytes());
        data[4] = 0;
        data[5] = 0xFF;

        Request::new(NetFn::Storage, 0x43, data)
    }
}
