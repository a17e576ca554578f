mod full_sensor_record;
pub use full_sensor_record::{AnalogCharacteristics, FullSensorRecord, Hysteresis, ThresholdValues};

mod compact_sensor_record;
pub use compact_sensor_record::{CompactSensorRecord, IdStringModifier, RecordSharing};

mod id_string;
pub use id_string::{IdStringEncoding, SensorId};

use crate::{
    connection::LogicalUnit,
    cursor::ByteCursor,
    error::ParseError,
    fmt::{LogItem, Loggable},
};

use super::{RecordId, SensorType, Unit};

/// Record type of a Full Sensor Record.
pub const FULL_SENSOR_RECORD: u8 = 0x01;
/// Record type of a Compact Sensor Record.
pub const COMPACT_SENSOR_RECORD: u8 = 0x02;

/// Accessors shared by every sensor record type.
pub trait SensorRecord {
    fn common(&self) -> &SensorRecordCommon;

    fn capabilities(&self) -> &SensorCapabilities {
        &self.common().capabilities
    }

    fn id_string(&self) -> &SensorId {
        &self.common().sensor_id
    }

    fn direction(&self) -> Option<Direction>;

    fn sensor_number(&self) -> u8 {
        self.common().key.sensor_number
    }

    fn entity_id(&self) -> u8 {
        self.common().entity_id
    }

    fn key_data(&self) -> &SensorKey {
        &self.common().key
    }

    fn sensor_type(&self) -> SensorType {
        self.common().ty
    }

    fn units(&self) -> &SensorUnits {
        &self.common().sensor_units
    }
}

/// A converted reading together with the units it is expressed in.
#[derive(Debug)]
pub struct Value {
    units: SensorUnits,
    value: f64,
}

impl Value {
    pub fn new(units: SensorUnits, value: f64) -> Self {
        Self { units, value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn display(&self, short: bool) -> String {
        if self.units.is_percentage {
            return format!("{:.2} %", self.value);
        }

        let mut out = self.units.base_unit.display(short, self.value);

        match self.units.modifier {
            Some(ModifierUnit::BaseUnitDivByModifier(unit)) => {
                out.push_str(&format!(" / {}", unit.name()))
            }
            Some(ModifierUnit::BaseUnitMulByModifier(unit)) => {
                out.push_str(&format!(" * {}", unit.name()))
            }
            None => {}
        }

        if let Some(rate) = self.units.rate {
            out.push_str(&format!(" per {}", rate.name()));
        }

        out
    }
}

/// The five bytes in front of every SDR record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonHeader {
    pub record_id: RecordId,
    /// SDR version, BCD encoded with the minor version in the upper nibble.
    pub version: u8,
    pub record_type: u8,
    pub payload_length: u8,
}

impl CommonHeader {
    pub const LEN: usize = 5;

    pub fn parse(cursor: &mut ByteCursor) -> Result<Self, ParseError> {
        let record_id = RecordId::new_raw(cursor.pop_u16()?);
        let version = cursor.pop_u8()?;
        let record_type = cursor.pop_u8()?;
        let payload_length = cursor.pop_u8()?;

        Ok(Self {
            record_id,
            version,
            record_type,
            payload_length,
        })
    }

    pub fn sdr_version_major(&self) -> u8 {
        self.version & 0x0F
    }

    pub fn sdr_version_minor(&self) -> u8 {
        (self.version & 0xF0) >> 4
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorKey {
    pub owner_id: SensorOwner,
    pub owner_channel: u8,
    pub owner_lun: LogicalUnit,
    pub sensor_number: u8,
}

impl SensorKey {
    pub fn parse(cursor: &mut ByteCursor) -> Result<Self, ParseError> {
        let owner_id = SensorOwner::from(cursor.pop_u8()?);
        let owner_channel_lun = cursor.pop_u8()?;
        let sensor_number = cursor.pop_u8()?;

        Ok(Self {
            owner_id,
            owner_channel: (owner_channel_lun & 0xF0) >> 4,
            owner_lun: LogicalUnit::from_low_bits(owner_channel_lun),
            sensor_number,
        })
    }

    fn log_into(&self, level: usize, log: &mut Vec<LogItem>) {
        let sensor_owner = match self.owner_id {
            SensorOwner::I2C(addr) => format!("I2C @ 0x{:02X}", addr),
            SensorOwner::System(addr) => format!("System @ 0x{:02X}", addr),
        };

        log.push((level, "Sensor owner", sensor_owner).into());
        log.push((level, "Owner channel", self.owner_channel).into());
        log.push((level, "Owner LUN", self.owner_lun.value()).into());
        log.push((level, "Sensor number", self.sensor_number).into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorOwner {
    I2C(u8),
    System(u8),
}

impl From<u8> for SensorOwner {
    fn from(value: u8) -> Self {
        let id = (value & 0xFE) >> 1;

        if (value & 1) == 1 {
            Self::System(id)
        } else {
            Self::I2C(id)
        }
    }
}

impl From<SensorOwner> for u8 {
    fn from(value: SensorOwner) -> u8 {
        match value {
            SensorOwner::I2C(id) => (id << 1) & 0xFE,
            SensorOwner::System(id) => ((id << 1) & 0xFE) | 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRelativeTo {
    System,
    Device,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityInstance {
    Physical {
        relative: EntityRelativeTo,
        instance_number: u8,
    },
    LogicalContainer {
        relative: EntityRelativeTo,
        instance_number: u8,
    },
}

impl From<u8> for EntityInstance {
    fn from(value: u8) -> Self {
        let instance_number = value & 0x7F;
        let relative = if instance_number < 0x60 {
            EntityRelativeTo::System
        } else {
            EntityRelativeTo::Device
        };

        if (value & 0x80) == 0x80 {
            Self::LogicalContainer {
                relative,
                instance_number,
            }
        } else {
            Self::Physical {
                relative,
                instance_number,
            }
        }
    }
}

impl From<EntityInstance> for u8 {
    fn from(value: EntityInstance) -> u8 {
        match value {
            EntityInstance::Physical {
                instance_number, ..
            } => instance_number,
            EntityInstance::LogicalContainer {
                instance_number, ..
            } => instance_number | 0x80,
        }
    }
}

bitflags::bitflags! {
    pub struct SensorInitialization: u8 {
        const SETTABLE = 1 << 7;
        const SCANNING = 1 << 6;
        const EVENTS = 1 << 5;
        const THRESHOLDS = 1 << 4;
        const HYSTERESIS = 1 << 3;
        const TYPE = 1 << 2;
        const EVENTGEN_ON_STARTUP = 1 << 1;
        const SCANNING_ON_STARTUP = 1 << 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HysteresisCapability {
    NoneOrUnspecified,
    Readable,
    ReadableAndSettable,
    FixedAndUnreadable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdAccessCapability {
    None,
    Readable,
    ReadableAndSettable,
    FixedAndUnreadable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMessageControl {
    PerThresholdOrState,
    EntireSensorOnly,
    GlobalOnly,
    NoEvents,
}

bitflags::bitflags! {
    pub struct ThresholdAssertEventMask: u16 {
        const UPPER_NON_RECOVERABLE_GOING_HIGH = 1 << 11;
        const UPPER_NON_RECOVERABLE_GOING_LOW = 1 << 10;
        const UPPER_CRITICAL_GOING_HIGH = 1 << 9;
        const UPPER_CRITICAL_GOING_LOW = 1 << 8;
        const UPPER_NON_CRITICAL_GOING_HIGH = 1 << 7;
        const UPPER_NON_CRITICAL_GOING_LOW = 1 << 6;
        const LOWER_NON_RECOVERABLE_GOING_HIGH = 1 << 5;
        const LOWER_NON_RECOVERABLE_GOING_LOW = 1 << 4;
        const LOWER_CRITICAL_GOING_HIGH = 1 << 3;
        const LOWER_CRITICAL_GOING_LOW = 1 << 2;
        const LOWER_NON_CRITICAL_GOING_HIGH = 1 << 1;
        const LOWER_NON_CRITICAL_GOING_LOW = 1 << 0;
    }
}

impl ThresholdAssertEventMask {
    pub fn for_kind(&self, kind: ThresholdKind) -> &[EventKind] {
        static BOTH: [EventKind; 2] = [EventKind::GoingHigh, EventKind::GoingLow];
        static HIGH: [EventKind; 1] = [EventKind::GoingHigh];
        static LOW: [EventKind; 1] = [EventKind::GoingLow];
        static NONE: [EventKind; 0] = [];

        let (low, high) = match kind {
            ThresholdKind::LowerNonCritical => (
                self.contains(Self::LOWER_NON_CRITICAL_GOING_LOW),
                self.contains(Self::LOWER_NON_CRITICAL_GOING_HIGH),
            ),
            ThresholdKind::LowerCritical => (
                self.contains(Self::LOWER_CRITICAL_GOING_LOW),
                self.contains(Self::LOWER_CRITICAL_GOING_HIGH),
            ),
            ThresholdKind::LowerNonRecoverable => (
                self.contains(Self::LOWER_NON_RECOVERABLE_GOING_LOW),
                self.contains(Self::LOWER_NON_RECOVERABLE_GOING_HIGH),
            ),
            ThresholdKind::UpperNonCritical => (
                self.contains(Self::UPPER_NON_CRITICAL_GOING_LOW),
                self.contains(Self::UPPER_NON_CRITICAL_GOING_HIGH),
            ),
            ThresholdKind::UpperCritical => (
                self.contains(Self::UPPER_CRITICAL_GOING_LOW),
                self.contains(Self::UPPER_CRITICAL_GOING_HIGH),
            ),
            ThresholdKind::UpperNonRecoverable => (
                self.contains(Self::UPPER_NON_RECOVERABLE_GOING_LOW),
                self.contains(Self::UPPER_NON_RECOVERABLE_GOING_HIGH),
            ),
        };

        match (low, high) {
            (true, true) => &BOTH,
            (true, false) => &LOW,
            (false, true) => &HIGH,
            (false, false) => &NONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    GoingHigh,
    GoingLow,
}

/// One flag per threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thresholds {
    pub lower_non_recoverable: bool,
    pub lower_critical: bool,
    pub lower_non_critical: bool,
    pub upper_non_recoverable: bool,
    pub upper_critical: bool,
    pub upper_non_critical: bool,
}

impl Thresholds {
    /// Decode six flags laid out as lnc, lcr, lnr, unc, ucr, unr from
    /// the lowest bit upwards.
    fn from_bits(bits: u8) -> Self {
        Self {
            lower_non_critical: bits & 0x01 != 0,
            lower_critical: bits & 0x02 != 0,
            lower_non_recoverable: bits & 0x04 != 0,
            upper_non_critical: bits & 0x08 != 0,
            upper_critical: bits & 0x10 != 0,
            upper_non_recoverable: bits & 0x20 != 0,
        }
    }

    pub fn for_kind(&self, kind: ThresholdKind) -> bool {
        match kind {
            ThresholdKind::LowerNonCritical => self.lower_non_critical,
            ThresholdKind::LowerCritical => self.lower_critical,
            ThresholdKind::LowerNonRecoverable => self.lower_non_recoverable,
            ThresholdKind::UpperNonCritical => self.upper_non_critical,
            ThresholdKind::UpperCritical => self.upper_critical,
            ThresholdKind::UpperNonRecoverable => self.upper_non_recoverable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdKind {
    LowerNonCritical,
    LowerCritical,
    LowerNonRecoverable,
    UpperNonCritical,
    UpperCritical,
    UpperNonRecoverable,
}

impl ThresholdKind {
    pub fn variants() -> impl Iterator<Item = Self> {
        [
            Self::UpperNonRecoverable,
            Self::UpperCritical,
            Self::UpperNonCritical,
            Self::LowerNonRecoverable,
            Self::LowerCritical,
            Self::LowerNonCritical,
        ]
        .into_iter()
    }

    /// `unr`, `ucr`, `unc`, `lnr`, `lcr` or `lnc`.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::LowerNonCritical => "lnc",
            Self::LowerCritical => "lcr",
            Self::LowerNonRecoverable => "lnr",
            Self::UpperNonCritical => "unc",
            Self::UpperCritical => "ucr",
            Self::UpperNonRecoverable => "unr",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorCapabilities {
    pub ignore: bool,
    pub auto_rearm: bool,
    pub event_message_control: EventMessageControl,
    pub hysteresis: HysteresisCapability,
    pub threshold_access: ThresholdAccessCapability,
    pub assertion_threshold_events: ThresholdAssertEventMask,
    pub deassertion_threshold_events: ThresholdAssertEventMask,
    pub readable_thresholds: Thresholds,
    pub settable_thresholds: Thresholds,
}

impl SensorCapabilities {
    pub fn new(caps: u8, assertion_mask: u16, deassertion_mask: u16, reading_mask: u16) -> Self {
        let hysteresis = match (caps & 0x30) >> 4 {
            0b00 => HysteresisCapability::NoneOrUnspecified,
            0b01 => HysteresisCapability::Readable,
            0b10 => HysteresisCapability::ReadableAndSettable,
            _ => HysteresisCapability::FixedAndUnreadable,
        };

        let threshold_access = match (caps & 0x0C) >> 2 {
            0b00 => ThresholdAccessCapability::None,
            0b01 => ThresholdAccessCapability::Readable,
            0b10 => ThresholdAccessCapability::ReadableAndSettable,
            _ => ThresholdAccessCapability::FixedAndUnreadable,
        };

        let event_message_control = match caps & 0b11 {
            0b00 => EventMessageControl::PerThresholdOrState,
            0b01 => EventMessageControl::EntireSensorOnly,
            0b10 => EventMessageControl::GlobalOnly,
            _ => EventMessageControl::NoEvents,
        };

        let [readable, settable] = reading_mask.to_le_bytes();

        Self {
            ignore: (caps & 0x80) == 0x80,
            auto_rearm: (caps & 0x40) == 0x40,
            event_message_control,
            hysteresis,
            threshold_access,
            assertion_threshold_events: ThresholdAssertEventMask::from_bits_truncate(
                assertion_mask,
            ),
            deassertion_threshold_events: ThresholdAssertEventMask::from_bits_truncate(
                deassertion_mask,
            ),
            readable_thresholds: Thresholds::from_bits(readable),
            settable_thresholds: Thresholds::from_bits(settable),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateUnit {
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl RateUnit {
    pub fn name(&self) -> &'static str {
        match self {
            RateUnit::Microsecond => "microsecond",
            RateUnit::Millisecond => "millisecond",
            RateUnit::Second => "second",
            RateUnit::Minute => "minute",
            RateUnit::Hour => "hour",
            RateUnit::Day => "day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierUnit {
    BaseUnitDivByModifier(Unit),
    BaseUnitMulByModifier(Unit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorUnits {
    /// Sensor Units 1 as stored in the record.
    pub units_1: u8,
    pub rate: Option<RateUnit>,
    pub modifier: Option<ModifierUnit>,
    pub is_percentage: bool,
    pub base_unit: Unit,
}

impl SensorUnits {
    pub fn from(sensor_units_1: u8, base_unit: u8, modifier_unit: u8) -> Self {
        let rate = match (sensor_units_1 >> 3) & 0b111 {
            0b001 => Some(RateUnit::Microsecond),
            0b010 => Some(RateUnit::Millisecond),
            0b011 => Some(RateUnit::Second),
            0b100 => Some(RateUnit::Minute),
            0b101 => Some(RateUnit::Hour),
            0b110 => Some(RateUnit::Day),
            _ => None,
        };

        let modifier_unit = Unit::from(modifier_unit);

        let modifier = match (sensor_units_1 >> 1) & 0b11 {
            0b01 => Some(ModifierUnit::BaseUnitDivByModifier(modifier_unit)),
            0b10 => Some(ModifierUnit::BaseUnitMulByModifier(modifier_unit)),
            _ => None,
        };

        Self {
            units_1: sensor_units_1,
            rate,
            modifier,
            is_percentage: (sensor_units_1 & 0x1) == 0x1,
            base_unit: Unit::from(base_unit),
        }
    }

    pub fn parse(cursor: &mut ByteCursor) -> Result<Self, ParseError> {
        let units_1 = cursor.pop_u8()?;
        let base_unit = cursor.pop_u8()?;
        let modifier_unit = cursor.pop_u8()?;

        Ok(Self::from(units_1, base_unit, modifier_unit))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    UnspecifiedNotApplicable,
    Input,
    Output,
}

impl TryFrom<u8> for Direction {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let dir = match value {
            0b00 => Self::UnspecifiedNotApplicable,
            0b01 => Self::Input,
            0b10 => Self::Output,
            _ => return Err(()),
        };
        Ok(dir)
    }
}

/// The leading fields that Full and Compact sensor records share.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorRecordCommon {
    pub key: SensorKey,
    pub entity_id: u8,
    pub entity_instance: EntityInstance,
    pub initialization: SensorInitialization,
    pub capabilities: SensorCapabilities,
    pub ty: SensorType,
    pub event_reading_type_code: u8,
    pub sensor_units: SensorUnits,
    pub sensor_id: SensorId,
}

impl SensorRecordCommon {
    /// Parse common sensor record data, but set the SensorID to an empty string.
    ///
    /// The ID string comes last in both record types, so callers
    /// [`SensorRecordCommon::set_id`] once they have parsed everything in between.
    pub(crate) fn parse_without_id(cursor: &mut ByteCursor) -> Result<Self, ParseError> {
        let key = SensorKey::parse(cursor)?;
        let entity_id = cursor.pop_u8()?;
        let entity_instance = EntityInstance::from(cursor.pop_u8()?);
        let initialization = SensorInitialization::from_bits_truncate(cursor.pop_u8()?);
        let sensor_capabilities = cursor.pop_u8()?;
        let ty = SensorType::from(cursor.pop_u8()?);
        let event_reading_type_code = cursor.pop_u8()?;

        let assertion_mask = cursor.pop_u16()?;
        let deassertion_mask = cursor.pop_u16()?;
        let reading_mask = cursor.pop_u16()?;

        let capabilities = SensorCapabilities::new(
            sensor_capabilities,
            assertion_mask,
            deassertion_mask,
            reading_mask,
        );

        let sensor_units = SensorUnits::parse(cursor)?;

        Ok(Self {
            key,
            entity_id,
            entity_instance,
            initialization,
            capabilities,
            ty,
            event_reading_type_code,
            sensor_units,
            sensor_id: SensorId::default(),
        })
    }

    pub(crate) fn set_id(&mut self, id: SensorId) {
        self.sensor_id = id;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub header: CommonHeader,
    pub contents: RecordContents,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordContents {
    FullSensor(FullSensorRecord),
    CompactSensor(CompactSensorRecord),
}

impl Record {
    /// Decode a complete record: the common header followed by
    /// `payload_length` bytes of record body.
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let mut cursor = ByteCursor::new(data);
        let header = CommonHeader::parse(&mut cursor)?;
        let body = cursor.pop_slice(header.payload_length as usize)?;

        let contents = match header.record_type {
            FULL_SENSOR_RECORD => RecordContents::FullSensor(FullSensorRecord::parse(body)?),
            COMPACT_SENSOR_RECORD => {
                RecordContents::CompactSensor(CompactSensorRecord::parse(body)?)
            }
            other => return Err(ParseError::UnsupportedRecordType(other)),
        };

        Ok(Self { header, contents })
    }

    pub fn id(&self) -> RecordId {
        self.header.record_id
    }

    pub fn common_data(&self) -> &SensorRecordCommon {
        match &self.contents {
            RecordContents::FullSensor(s) => s.common(),
            RecordContents::CompactSensor(s) => s.common(),
        }
    }

    pub fn full_sensor(&self) -> Option<&FullSensorRecord> {
        if let RecordContents::FullSensor(full_sensor) = &self.contents {
            Some(full_sensor)
        } else {
            None
        }
    }

    pub fn compact_sensor(&self) -> Option<&CompactSensorRecord> {
        if let RecordContents::CompactSensor(compact_sensor) = &self.contents {
            Some(compact_sensor)
        } else {
            None
        }
    }

    pub fn sensor_id(&self) -> &SensorId {
        &self.common_data().sensor_id
    }

    pub fn sensor_number(&self) -> u8 {
        self.common_data().key.sensor_number
    }
}

impl Loggable for Record {
    fn as_log(&self) -> Vec<LogItem> {
        let mut log = Vec::new();

        match &self.contents {
            RecordContents::FullSensor(_) => log.push((0, "SDR Record (Full)").into()),
            RecordContents::CompactSensor(_) => log.push((0, "SDR Record (Compact)").into()),
        }

        let header = &self.header;
        let common = self.common_data();

        log.push((1, "Record ID", format!("0x{:04X}", header.record_id.value())).into());
        log.push(
            (
                1,
                "SDR Version",
                format!(
                    "{}.{}",
                    header.sdr_version_major(),
                    header.sdr_version_minor()
                ),
            )
                .into(),
        );
        log.push((1, "Sensor Type", common.ty.name()).into());
        log.push((1, "Sensor ID", &common.sensor_id).into());
        log.push((1, "Entity ID", common.entity_id).into());
        log.push((1, "Entity instance", u8::from(common.entity_instance)).into());
        common.key.log_into(1, &mut log);

        if let Some(full) = self.full_sensor() {
            let display = |v: Value| v.display(true);

            let nominal_reading = full
                .nominal_value()
                .map(display)
                .unwrap_or_else(|| "Unknown".into());
            let max_reading = full
                .max_reading()
                .map(display)
                .unwrap_or_else(|| "Unknown".into());
            let min_reading = full
                .min_reading()
                .map(display)
                .unwrap_or_else(|| "Unknown".into());

            log.push((1, "Nominal reading", nominal_reading).into());
            log.push((1, "Max reading", max_reading).into());
            log.push((1, "Min reading", min_reading).into());

            log.push((1, "Thresholds").into());
            for (kind, raw) in full.thresholds.iter() {
                log.push((2, kind.short_name(), format!("0x{raw:02X}")).into());
            }
        } else {
            log.push((1, "Unit", common.sensor_units.base_unit.name()).into());
        }

        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_owner_round_trip() {
        for x in 0u8..=255u8 {
            let o = SensorOwner::from(x);
            let value: u8 = o.into();
            assert_eq!(x, value);
        }
    }

    #[test]
    fn entity_instance_round_trip() {
        for x in 0u8..=255u8 {
            assert_eq!(u8::from(EntityInstance::from(x)), x);
        }
    }

    #[test]
    fn common_header() {
        let data = [0x34, 0x12, 0x51, 0x01, 0x30];
        let header = CommonHeader::parse(&mut ByteCursor::new(&data)).unwrap();

        assert_eq!(header.record_id, RecordId::new_raw(0x1234));
        assert_eq!(header.record_type, FULL_SENSOR_RECORD);
        assert_eq!(header.payload_length, 0x30);
        assert_eq!(header.sdr_version_major(), 1);
        assert_eq!(header.sdr_version_minor(), 5);
    }

    #[test]
    fn capabilities() {
        // auto rearm, readable hysteresis, settable thresholds, no events
        let caps = SensorCapabilities::new(0b0101_1011, 0x0201, 0, 0x0C3F);

        assert!(!caps.ignore);
        assert!(caps.auto_rearm);
        assert_eq!(caps.hysteresis, HysteresisCapability::Readable);
        assert_eq!(
            caps.threshold_access,
            ThresholdAccessCapability::ReadableAndSettable
        );
        assert_eq!(caps.event_message_control, EventMessageControl::NoEvents);
        assert_eq!(
            caps.assertion_threshold_events
                .for_kind(ThresholdKind::LowerNonCritical),
            &[EventKind::GoingLow]
        );
        assert_eq!(
            caps.assertion_threshold_events
                .for_kind(ThresholdKind::UpperCritical),
            &[EventKind::GoingHigh]
        );
        assert!(caps.readable_thresholds.upper_non_recoverable);
        assert!(caps.settable_thresholds.upper_non_critical);
        assert!(caps.settable_thresholds.lower_non_recoverable);
        assert!(!caps.settable_thresholds.upper_critical);
    }

    #[test]
    fn units() {
        let units = SensorUnits::from(0b0001_1011, 18, 22);

        assert_eq!(units.rate, Some(RateUnit::Second));
        assert_eq!(
            units.modifier,
            Some(ModifierUnit::BaseUnitDivByModifier(Unit::Second))
        );
        assert!(units.is_percentage);
        assert_eq!(units.base_unit, Unit::RevolutionsPerMinute);
    }

    #[test]
    fn unsupported_record_type() {
        let data = [0x05, 0x00, 0x51, 0x12, 0x02, 0xAA, 0xBB];
        assert_eq!(
            Record::parse(&data),
            Err(ParseError::UnsupportedRecordType(0x12))
        );
    }
}
