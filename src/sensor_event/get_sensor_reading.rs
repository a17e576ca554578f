use crate::{
    connection::{IpmiCommand, LogicalUnit, NetFn, Request},
    cursor::ByteCursor,
    error::ParseError,
    storage::sdr::record::SensorKey,
};

/// Get Sensor Reading (IPMI 2.0 section 35.14).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSensorReading {
    sensor_number: u8,
    lun: LogicalUnit,
}

impl GetSensorReading {
    pub fn new(sensor_number: u8, lun: LogicalUnit) -> Self {
        Self { sensor_number, lun }
    }

    /// Read the sensor described by `key`, addressed to its owner LUN.
    pub fn for_sensor(key: &SensorKey) -> Self {
        Self::new(key.sensor_number, key.owner_lun)
    }
}

impl From<GetSensorReading> for Request {
    fn from(value: GetSensorReading) -> Self {
        Request::new(NetFn::SensorEvent, 0x2D, vec![value.sensor_number]).with_lun(value.lun)
    }
}

/// The state bits that follow the reading, if the controller sent any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorStates {
    Eight(u8),
    Sixteen(u16),
}

impl SensorStates {
    pub fn bits(&self) -> u16 {
        match self {
            SensorStates::Eight(v) => *v as u16,
            SensorStates::Sixteen(v) => *v,
        }
    }

    /// Interpret the first state byte as the comparison status of a
    /// threshold sensor.
    pub fn threshold_status(&self) -> ThresholdStatus {
        let d = self.bits() as u8;

        ThresholdStatus {
            at_or_above_upper_non_recoverable: (d & 0x20) == 0x20,
            at_or_above_upper_critical: (d & 0x10) == 0x10,
            at_or_above_upper_non_critical: (d & 0x08) == 0x08,
            at_or_below_lower_non_recoverable: (d & 0x04) == 0x04,
            at_or_below_lower_critical: (d & 0x02) == 0x02,
            at_or_below_lower_non_critical: (d & 0x01) == 0x01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdStatus {
    pub at_or_above_upper_non_recoverable: bool,
    pub at_or_above_upper_critical: bool,
    pub at_or_above_upper_non_critical: bool,
    pub at_or_below_lower_non_recoverable: bool,
    pub at_or_below_lower_critical: bool,
    pub at_or_below_lower_non_critical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorReading {
    /// The raw reading. `None` if scanning is disabled or the reading
    /// is not available yet.
    pub reading: Option<u8>,
    pub all_event_messages_disabled: bool,
    pub scanning_disabled: bool,
    pub reading_unavailable: bool,
    pub states: Option<SensorStates>,
}

impl SensorReading {
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let mut cursor = ByteCursor::new(data);

        let raw = cursor.pop_u8()?;
        let config = cursor.pop_u8()?;

        let all_event_messages_disabled = (config & 0x80) == 0;
        // Bit 6 is set while scanning is enabled
        let scanning_disabled = (config & 0x40) == 0;
        let reading_unavailable = (config & 0x20) == 0x20;

        // Scanning disabled wins over the unavailable bit, but either
        // one means there is no reading.
        let reading = if scanning_disabled || reading_unavailable {
            None
        } else {
            Some(raw)
        };

        let states = match (cursor.pop_u8().ok(), cursor.pop_u8().ok()) {
            (Some(s1), Some(s2)) => Some(SensorStates::Sixteen(u16::from_le_bytes([s1, s2]))),
            (Some(s1), None) => Some(SensorStates::Eight(s1)),
            _ => None,
        };

        Ok(Self {
            reading,
            all_event_messages_disabled,
            scanning_disabled,
            reading_unavailable,
            states,
        })
    }
}

impl IpmiCommand for GetSensorReading {
    type Output = SensorReading;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, ParseError> {
        SensorReading::parse(data)
    }
}
