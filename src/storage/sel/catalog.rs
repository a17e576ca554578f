//! Resolution of SEL events to descriptive text.

use super::tables::{GENERIC_EVENT_TYPES, KONTRON_EVENT_TYPES, SENSOR_SPECIFIC_EVENT_TYPES};
use crate::storage::sdr::SensorType;

/// Event/reading type of sensor-specific discrete events.
pub const SENSOR_SPECIFIC_EVENT_TYPE: u8 = 0x6F;

/// IANA enterprise number of Kontron.
pub const KONTRON_OEM_ID: u32 = 15000;

/// Data byte value of an [`EventDescriptor`] that matches any data.
pub const ANY_DATA: u8 = 0xFF;

/// One row of an event description table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDescriptor {
    /// The event type, or the sensor type for sensor-specific events.
    pub code: u8,
    pub offset: u8,
    /// Event data 2, or [`ANY_DATA`].
    pub data: u8,
    pub text: &'static str,
}

impl EventDescriptor {
    fn matches(&self, offset: u8, data: Option<u8>) -> bool {
        self.offset == offset && (self.data == ANY_DATA || data == Some(self.data))
    }
}

/// Lookup of event descriptions by sensor type, event type and event data.
#[derive(Debug, Clone, Copy)]
pub struct EventCatalog {
    generic: &'static [EventDescriptor],
    kontron: &'static [EventDescriptor],
    sensor_specific: &'static [EventDescriptor],
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl EventCatalog {
    pub const STANDARD: Self = Self {
        generic: GENERIC_EVENT_TYPES,
        kontron: KONTRON_EVENT_TYPES,
        sensor_specific: SENSOR_SPECIFIC_EVENT_TYPES,
    };

    /// Find the description of an event.
    ///
    /// Sensor-specific events (event type `0x6F`) are looked up by sensor
    /// type, in the Kontron table for OEM sensor types of Kontron
    /// controllers. All other events are looked up by event type.
    ///
    /// The low nibble of event data 1 is the offset. Event data 2 is
    /// compared to the entry's data byte if event data 1 flags it as
    /// present, or if it is anything other than `0xFF`.
    pub fn resolve(
        &self,
        sensor_type: u8,
        event_type: u8,
        oem_id: u32,
        event_data: &[u8],
    ) -> Option<&'static str> {
        let (table, code) = if event_type == SENSOR_SPECIFIC_EVENT_TYPE {
            let table = if (0xC0..=0xF0).contains(&sensor_type) && oem_id == KONTRON_OEM_ID {
                self.kontron
            } else {
                self.sensor_specific
            };
            (table, sensor_type)
        } else {
            (self.generic, event_type)
        };

        let ed1 = event_data.first().copied().unwrap_or(0);
        let ed2 = event_data.get(1).copied().unwrap_or(ANY_DATA);

        let offset = ed1 & 0x0F;
        let data = if (ed1 & 0xC0) != 0 || ed2 != ANY_DATA {
            Some(ed2)
        } else {
            None
        };

        table
            .iter()
            .find(|e| e.code == code && e.matches(offset, data))
            .map(|e| e.text)
    }
}

/// Class of an event/reading type code.
pub fn event_type_name(event_type: u8) -> &'static str {
    match event_type {
        0x00 => "Unspecified",
        0x01 => "Threshold",
        0x02..=0x0B => "Generic Discrete",
        SENSOR_SPECIFIC_EVENT_TYPE => "Sensor-specific Discrete",
        0x70..=0x7F => "OEM",
        _ => "Reserved",
    }
}

/// Name of a sensor type as used in event descriptions.
pub fn sensor_type_name(sensor_type: u8) -> &'static str {
    match SensorType::from(sensor_type) {
        SensorType::Reserved(0) => "reserved",
        SensorType::Reserved(_) | SensorType::OemReserved(_) => "Unknown",
        ty => ty.name(),
    }
}
