//! The System Event Log.

use crate::{
    connection::LogicalUnit,
    cursor::ByteCursor,
    error::ParseError,
    fmt::{LogItem, Loggable},
};

use super::Timestamp;

pub mod catalog;
pub use catalog::{EventCatalog, EventDescriptor};

mod tables;

mod get_entry;
pub use get_entry::{EntryInfo as SelEntryInfo, GetEntry as GetSelEntry};

mod get_info;
pub use get_info::{Command as SelCommand, GetInfo as GetSelInfo, Info as SelInfo};

mod reserve;
pub use reserve::ReserveSel;

mod walk;
pub use walk::SelWalk;

/// Every SEL entry is exactly this long.
pub const ENTRY_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(u16);

impl RecordId {
    pub const FIRST: Self = Self(0x0000);
    pub const LAST: Self = Self(0xFFFF);

    pub fn new_raw(id: u16) -> Self {
        RecordId(id)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn is_first(&self) -> bool {
        self == &Self::FIRST
    }

    pub fn is_last(&self) -> bool {
        self == &Self::LAST
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventGenerator {
    RqSAAndLun {
        i2c_addr: u8,
        channel_number: u8,
        lun: LogicalUnit,
    },
    SoftwareId {
        software_id: u8,
        channel_number: u8,
    },
}

impl From<u16> for EventGenerator {
    fn from(value: u16) -> Self {
        let [addr, channel] = value.to_le_bytes();

        let is_software_id = (addr & 0x1) == 0x1;
        let i2c_or_sid = (addr >> 1) & 0x7F;
        let channel_number = (channel >> 4) & 0xF;

        if is_software_id {
            Self::SoftwareId {
                software_id: i2c_or_sid,
                channel_number,
            }
        } else {
            Self::RqSAAndLun {
                i2c_addr: i2c_or_sid,
                channel_number,
                lun: LogicalUnit::from_low_bits(channel),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMessageRevision {
    V2_0,
    V1_0,
    Unknown(u8),
}

impl From<u8> for EventMessageRevision {
    fn from(value: u8) -> Self {
        match value {
            0x04 => Self::V2_0,
            0x03 => Self::V1_0,
            v => Self::Unknown(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDirection {
    Asserted,
    Deasserted,
}

impl EventDirection {
    pub fn name(&self) -> &'static str {
        match self {
            EventDirection::Asserted => "Asserted",
            EventDirection::Deasserted => "Deasserted",
        }
    }
}

/// A system event record, the only standard SEL record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardRecord {
    pub timestamp: Timestamp,
    pub generator: EventGenerator,
    pub event_message_revision: EventMessageRevision,
    pub sensor_type: u8,
    pub sensor_number: u8,
    pub event_type: u8,
    pub direction: EventDirection,
    pub event_data: [u8; 3],
}

impl StandardRecord {
    /// `<sensor type> [#0x<number>] | <event description> | <direction>`.
    pub fn description(&self, catalog: &EventCatalog, oem_id: u32) -> String {
        let mut sensor = catalog::sensor_type_name(self.sensor_type).to_string();
        if self.sensor_number != 0 {
            sensor.push_str(&format!(" #0x{:02x}", self.sensor_number));
        }

        let event = catalog
            .resolve(
                self.sensor_type,
                self.event_type,
                oem_id,
                &self.event_data,
            )
            .unwrap_or("");

        format!("{sensor} | {event} | {}", self.direction.name())
    }

    pub fn event_type_name(&self) -> &'static str {
        catalog::event_type_name(self.event_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OemTimestampedRecord {
    pub timestamp: Timestamp,
    pub manufacturer_id: u32,
    pub data: [u8; 6],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OemNonTimestampedRecord {
    pub data: [u8; 13],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryVariant {
    Standard(StandardRecord),
    OemTimestamped(OemTimestampedRecord),
    OemNonTimestamped(OemNonTimestampedRecord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub record_id: RecordId,
    pub record_type: u8,
    pub variant: EntryVariant,
}

fn hex_string(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

impl Entry {
    /// Decode a raw 16-byte SEL entry.
    ///
    /// Record types below `0xC0` are decoded as system event records,
    /// `0xC0..=0xDF` as timestamped OEM records and everything above as
    /// non-timestamped OEM records.
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        if data.len() != ENTRY_LEN {
            return Err(ParseError::InvalidLength {
                expected: ENTRY_LEN,
                actual: data.len(),
            });
        }

        let mut cursor = ByteCursor::new(data);

        let record_id = RecordId::new_raw(cursor.pop_u16()?);
        let record_type = cursor.pop_u8()?;

        let variant = match record_type {
            0x00..=0xBF => {
                let timestamp = Timestamp::from(cursor.pop_u32()?);
                let generator = EventGenerator::from(cursor.pop_u16()?);
                let event_message_revision = EventMessageRevision::from(cursor.pop_u8()?);
                let sensor_type = cursor.pop_u8()?;
                let sensor_number = cursor.pop_u8()?;
                let event_dir_type = cursor.pop_u8()?;

                let direction = if (event_dir_type & 0x80) == 0x80 {
                    EventDirection::Deasserted
                } else {
                    EventDirection::Asserted
                };

                let mut event_data = [0u8; 3];
                event_data.copy_from_slice(cursor.pop_slice(3)?);

                EntryVariant::Standard(StandardRecord {
                    timestamp,
                    generator,
                    event_message_revision,
                    sensor_type,
                    sensor_number,
                    event_type: event_dir_type & 0x7F,
                    direction,
                    event_data,
                })
            }
            0xC0..=0xDF => {
                let timestamp = Timestamp::from(cursor.pop_u32()?);
                let manufacturer_id = cursor.pop_u24()?;

                let mut data = [0u8; 6];
                data.copy_from_slice(cursor.pop_slice(6)?);

                EntryVariant::OemTimestamped(OemTimestampedRecord {
                    timestamp,
                    manufacturer_id,
                    data,
                })
            }
            0xE0..=0xFF => {
                let mut data = [0u8; 13];
                data.copy_from_slice(cursor.pop_slice(13)?);

                EntryVariant::OemNonTimestamped(OemNonTimestampedRecord { data })
            }
        };

        Ok(Self {
            record_id,
            record_type,
            variant,
        })
    }

    pub fn timestamp(&self) -> Option<Timestamp> {
        match &self.variant {
            EntryVariant::Standard(r) => Some(r.timestamp),
            EntryVariant::OemTimestamped(r) => Some(r.timestamp),
            EntryVariant::OemNonTimestamped(_) => None,
        }
    }

    /// A single-line, human-readable description of the entry.
    ///
    /// `oem_id` is the manufacturer of the controller that logged the
    /// entry. It selects OEM event tables.
    pub fn description(&self, catalog: &EventCatalog, oem_id: u32) -> String {
        match &self.variant {
            EntryVariant::Standard(r) => r.description(catalog, oem_id),
            EntryVariant::OemTimestamped(r) => format!(
                "OEM record {:02x} |  {:06x}  | {}",
                self.record_type,
                r.manufacturer_id,
                hex_string(&r.data)
            ),
            EntryVariant::OemNonTimestamped(r) => {
                format!("OEM record {:02x} | {}", self.record_type, hex_string(&r.data))
            }
        }
    }
}

impl Loggable for Entry {
    fn as_log(&self) -> Vec<LogItem> {
        let record_id = format!("0x{:04X}", self.record_id.value());

        match &self.variant {
            EntryVariant::Standard(r) => {
                let format = match r.event_message_revision {
                    EventMessageRevision::V2_0 => "2.0".into(),
                    EventMessageRevision::V1_0 => "1.0".into(),
                    EventMessageRevision::Unknown(v) => format!("Unknown (0x{:02X})", v),
                };

                crate::log_vec![
                    (0, "SEL entry"),
                    (1, "Record type", format!("System (0x{:02X})", self.record_type)),
                    (1, "Record ID", record_id),
                    (1, "Time", r.timestamp),
                    (1, "Generator", format!("{:?}", r.generator)),
                    (1, "Format revision", format),
                    (1, "Sensor type", format!("0x{:02X}", r.sensor_type)),
                    (1, "Sensor number", format!("0x{:02X}", r.sensor_number)),
                    (1, "Assertion state", r.direction.name()),
                    (1, "Event type", r.event_type_name()),
                    (1, "Data", format!("{:02X?}", r.event_data)),
                ]
            }
            EntryVariant::OemTimestamped(r) => crate::log_vec![
                (0, "SEL entry"),
                (
                    1,
                    "Record type",
                    format!("Timestamped OEM (0x{:02X})", self.record_type)
                ),
                (1, "Record ID", record_id),
                (1, "Time", r.timestamp),
                (1, "Manufacturer ID", r.manufacturer_id),
                (1, "Data", format!("{:02X?}", r.data)),
            ],
            EntryVariant::OemNonTimestamped(r) => crate::log_vec![
                (0, "SEL entry"),
                (
                    1,
                    "Record type",
                    format!("Non-timestamped OEM (0x{:02X})", self.record_type)
                ),
                (1, "Record ID", record_id),
                (1, "Data", format!("{:02X?}", r.data)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(record_type: u8) -> Vec<u8> {
        let mut data = hex::decode("3412").unwrap();
        data.push(record_type);
        data.extend_from_slice(&hex::decode("00e1f505200004080197060102").unwrap());
        data
    }

    #[test]
    fn standard_record() {
        let entry = Entry::parse(&entry(0x02)).unwrap();

        assert_eq!(entry.record_id, RecordId::new_raw(0x1234));
        assert_eq!(entry.record_type, 0x02);
        assert_eq!(entry.timestamp(), Some(Timestamp::from(100_000_000)));

        let EntryVariant::Standard(record) = &entry.variant else {
            panic!("expected a standard record, got {entry:?}");
        };

        assert_eq!(
            record.generator,
            EventGenerator::RqSAAndLun {
                i2c_addr: 0x10,
                channel_number: 0,
                lun: LogicalUnit::Zero,
            }
        );
        assert_eq!(record.event_message_revision, EventMessageRevision::V2_0);
        assert_eq!(record.sensor_type, 0x08);
        assert_eq!(record.sensor_number, 0x01);
        assert_eq!(record.event_type, 0x17);
        assert_eq!(record.direction, EventDirection::Deasserted);
        assert_eq!(record.event_data, [0x06, 0x01, 0x02]);
    }

    #[test]
    fn oem_timestamped_record() {
        let entry = Entry::parse(&entry(0xC5)).unwrap();

        let EntryVariant::OemTimestamped(record) = &entry.variant else {
            panic!("expected a timestamped OEM record, got {entry:?}");
        };

        assert_eq!(record.manufacturer_id, 0x040020);
        assert_eq!(record.data, [0x08, 0x01, 0x97, 0x06, 0x01, 0x02]);
        assert_eq!(
            entry.description(&EventCatalog::default(), 0),
            "OEM record c5 |  040020  | 080197060102"
        );
    }

    #[test]
    fn oem_non_timestamped_record() {
        let entry = Entry::parse(&entry(0xE5)).unwrap();

        assert!(matches!(entry.variant, EntryVariant::OemNonTimestamped(_)));
        assert_eq!(entry.timestamp(), None);
    }

    #[test]
    fn exact_length_required() {
        let mut data = entry(0x02);
        data.push(0);
        assert_eq!(
            Entry::parse(&data),
            Err(ParseError::InvalidLength {
                expected: 16,
                actual: 17
            })
        );

        assert_eq!(
            Entry::parse(&data[..15]),
            Err(ParseError::InvalidLength {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn standard_description() {
        let data = hex::decode("01000200e1f50520000408016f060100").unwrap();
        let entry = Entry::parse(&data).unwrap();

        assert_eq!(
            entry.description(&EventCatalog::default(), 0),
            "Power Supply #0x01 | Config Error: Revision Mismatch | Asserted"
        );
    }

    #[test]
    fn description_without_sensor_number() {
        let data = hex::decode("01000200000000200004010001020000").unwrap();
        let entry = Entry::parse(&data).unwrap();

        assert_eq!(
            entry.description(&EventCatalog::default(), 0),
            "Temperature | Lower Critical going low | Asserted"
        );
    }
}
