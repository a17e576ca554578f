use super::*;

use crate::storage::sdr::conversion::{convert_complement, Conversion, DataFormat, Linearization};

bitflags::bitflags! {
    /// Which of the nominal/normal readings a record specifies.
    pub struct AnalogCharacteristics: u8 {
        const NOMINAL_READING = 0x01;
        const NORMAL_MAXIMUM = 0x02;
        const NORMAL_MINIMUM = 0x04;
    }
}

/// Raw threshold values, in reading units before conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThresholdValues {
    pub upper_non_recoverable: u8,
    pub upper_critical: u8,
    pub upper_non_critical: u8,
    pub lower_non_recoverable: u8,
    pub lower_critical: u8,
    pub lower_non_critical: u8,
}

impl ThresholdValues {
    pub fn get(&self, kind: ThresholdKind) -> u8 {
        match kind {
            ThresholdKind::UpperNonRecoverable => self.upper_non_recoverable,
            ThresholdKind::UpperCritical => self.upper_critical,
            ThresholdKind::UpperNonCritical => self.upper_non_critical,
            ThresholdKind::LowerNonRecoverable => self.lower_non_recoverable,
            ThresholdKind::LowerCritical => self.lower_critical,
            ThresholdKind::LowerNonCritical => self.lower_non_critical,
        }
    }

    /// All six thresholds, upper ones first.
    pub fn iter(&self) -> impl Iterator<Item = (ThresholdKind, u8)> + '_ {
        ThresholdKind::variants().map(|kind| (kind, self.get(kind)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hysteresis {
    pub positive_going: u8,
    pub negative_going: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FullSensorRecord {
    common: SensorRecordCommon,
    pub conversion: Conversion,
    pub tolerance: u8,
    pub accuracy: u16,
    pub accuracy_exponent: u8,
    pub direction: Option<Direction>,
    pub analog_characteristics: AnalogCharacteristics,
    pub nominal_reading: u8,
    pub normal_maximum: u8,
    pub normal_minimum: u8,
    pub max_reading: u8,
    pub min_reading: u8,
    pub thresholds: ThresholdValues,
    pub hysteresis: Hysteresis,
    pub oem_data: u8,
}

impl SensorRecord for FullSensorRecord {
    fn common(&self) -> &SensorRecordCommon {
        &self.common
    }

    fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

impl FullSensorRecord {
    /// Parse the record body, i.e. everything after the common header.
    pub fn parse(record_data: &[u8]) -> Result<Self, ParseError> {
        let mut cursor = ByteCursor::new(record_data);
        let mut common = SensorRecordCommon::parse_without_id(&mut cursor)?;

        let linearization = Linearization::from(cursor.pop_u8()? & 0x7F);

        let m_lsb = cursor.pop_u8()?;
        let m_msb_tolerance = cursor.pop_u8()?;
        let m = (m_lsb as i32) | (((m_msb_tolerance & 0xC0) as i32) << 2);
        let m = convert_complement(m, 10) as i16;
        let tolerance = m_msb_tolerance & 0x3F;

        let b_lsb = cursor.pop_u8()?;
        let b_msb_accuracy_lsb = cursor.pop_u8()?;
        let b = (b_lsb as i32) | (((b_msb_accuracy_lsb & 0xC0) as i32) << 2);
        let b = convert_complement(b, 10) as i16;

        let accuracy_msb_exp_dir = cursor.pop_u8()?;
        let accuracy = ((b_msb_accuracy_lsb & 0x3F) as u16)
            | (((accuracy_msb_exp_dir & 0xF0) as u16) << 2);
        let accuracy_exponent = (accuracy_msb_exp_dir & 0x0C) >> 2;
        let direction = Direction::try_from(accuracy_msb_exp_dir & 0b11).ok();

        let r_exp_b_exp = cursor.pop_u8()?;
        let result_exponent = convert_complement(((r_exp_b_exp & 0xF0) >> 4) as i32, 4) as i8;
        let b_exponent = convert_complement((r_exp_b_exp & 0x0F) as i32, 4) as i8;

        let analog_characteristics = AnalogCharacteristics::from_bits_truncate(cursor.pop_u8()?);

        let nominal_reading = cursor.pop_u8()?;
        let normal_maximum = cursor.pop_u8()?;
        let normal_minimum = cursor.pop_u8()?;
        let max_reading = cursor.pop_u8()?;
        let min_reading = cursor.pop_u8()?;

        let thresholds = ThresholdValues {
            upper_non_recoverable: cursor.pop_u8()?,
            upper_critical: cursor.pop_u8()?,
            upper_non_critical: cursor.pop_u8()?,
            lower_non_recoverable: cursor.pop_u8()?,
            lower_critical: cursor.pop_u8()?,
            lower_non_critical: cursor.pop_u8()?,
        };

        let hysteresis = Hysteresis {
            positive_going: cursor.pop_u8()?,
            negative_going: cursor.pop_u8()?,
        };

        // Two reserved bytes
        cursor.pop_u16()?;

        let oem_data = cursor.pop_u8()?;

        common.set_id(SensorId::parse(&mut cursor)?);

        let conversion = Conversion {
            data_format: DataFormat::from_units_1(common.sensor_units.units_1),
            linearization,
            m,
            b,
            b_exponent,
            result_exponent,
        };

        Ok(Self {
            common,
            conversion,
            tolerance,
            accuracy,
            accuracy_exponent,
            direction,
            analog_characteristics,
            nominal_reading,
            normal_maximum,
            normal_minimum,
            max_reading,
            min_reading,
            thresholds,
            hysteresis,
            oem_data,
        })
    }

    pub fn m(&self) -> i16 {
        self.conversion.m
    }

    pub fn b(&self) -> i16 {
        self.conversion.b
    }

    /// The B exponent.
    pub fn k1(&self) -> i8 {
        self.conversion.b_exponent
    }

    /// The result exponent.
    pub fn k2(&self) -> i8 {
        self.conversion.result_exponent
    }

    pub fn linearization(&self) -> Linearization {
        self.conversion.linearization
    }

    /// Convert a raw reading of this sensor to its engineering value.
    pub fn convert(&self, raw: u8) -> Result<f64, ParseError> {
        self.conversion.convert(raw)
    }

    fn value(&self, raw: u8) -> Option<Value> {
        self.convert(raw)
            .ok()
            .map(|v| Value::new(self.common.sensor_units, v))
    }

    pub fn nominal_value(&self) -> Option<Value> {
        self.analog_characteristics
            .contains(AnalogCharacteristics::NOMINAL_READING)
            .then(|| self.value(self.nominal_reading))
            .flatten()
    }

    pub fn normal_max(&self) -> Option<Value> {
        self.analog_characteristics
            .contains(AnalogCharacteristics::NORMAL_MAXIMUM)
            .then(|| self.value(self.normal_maximum))
            .flatten()
    }

    pub fn normal_min(&self) -> Option<Value> {
        self.analog_characteristics
            .contains(AnalogCharacteristics::NORMAL_MINIMUM)
            .then(|| self.value(self.normal_minimum))
            .flatten()
    }

    pub fn max_reading(&self) -> Option<Value> {
        self.value(self.max_reading)
    }

    pub fn min_reading(&self) -> Option<Value> {
        self.value(self.min_reading)
    }

    pub fn threshold(&self, kind: ThresholdKind) -> Option<Value> {
        self.value(self.thresholds.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Body of a temperature sensor reading `0.5 * raw - 10` degrees C.
    fn temperature_body(name: &str) -> Vec<u8> {
        let mut body = vec![
            0x20, // owner: BMC
            0x01, // channel 0, LUN 1
            0x30, // sensor number
            0x03, // entity: processor
            0x01, // entity instance
            0x7F, // initialization
            0x68, // capabilities
            0x01, // sensor type: temperature
            0x01, // event reading type: threshold
            0x95, 0x7A, // assertion mask
            0x95, 0x7A, // deassertion mask
            0x3F, 0x38, // reading mask
            0x00, // units 1: unsigned
            0x01, // base unit: degrees C
            0x00, // modifier unit
            0x00, // linear
            0x05, 0x00, // m = 5, tolerance 0
            0x9C, 0xC0, // b = -100
            0x00, // accuracy, direction
            0xF0, // k2 = -1, k1 = 0
            0x01, // nominal reading specified
            0x5A, 0xA0, 0x10, 0xFF, 0x00, // nominal, normal max/min, max, min
            0xC8, 0xBE, 0xB4, 0x00, 0x0A, 0x14, // thresholds
            0x02, 0x03, // hysteresis
            0x00, 0x00, // reserved
            0x00, // oem
        ];

        body.push(0xC0 | name.len() as u8);
        body.extend_from_slice(name.as_bytes());
        body
    }

    #[test]
    fn parse_temperature() {
        let record = FullSensorRecord::parse(&temperature_body("CPU Temp")).unwrap();

        assert_eq!(record.id_string().as_str(), "CPU Temp");
        assert_eq!(record.sensor_number(), 0x30);
        assert_eq!(record.key_data().owner_lun, LogicalUnit::One);
        assert_eq!(record.sensor_type(), SensorType::Temperature);
        assert_eq!(record.units().base_unit, Unit::DegreesCelsius);

        assert_eq!(record.m(), 5);
        assert_eq!(record.b(), -100);
        assert_eq!(record.k1(), 0);
        assert_eq!(record.k2(), -1);
        assert_eq!(record.linearization(), Linearization::Linear);

        assert_eq!(record.thresholds.get(ThresholdKind::UpperCritical), 0xBE);
        assert_eq!(record.thresholds.lower_non_critical, 0x14);
        assert_eq!(
            record.hysteresis,
            Hysteresis {
                positive_going: 2,
                negative_going: 3
            }
        );

        let value = record.convert(0x5A).unwrap();
        assert!((value - 35.0).abs() < 1e-9);

        let nominal = record.nominal_value().unwrap();
        assert!((nominal.value() - 35.0).abs() < 1e-9);
        assert!(record.normal_max().is_none());
    }

    #[test]
    fn coefficients_use_ten_bit_complement() {
        let mut body = temperature_body("x");
        // m = 0x3FF, tolerance 0x3F
        body[19] = 0xFF;
        body[20] = 0xFF;
        // b = 0x200, accuracy low bits 0x2A
        body[21] = 0x00;
        body[22] = 0x80 | 0x2A;
        // accuracy high bits 0b0001, exponent 3, direction input
        body[23] = 0x10 | 0x0C | 0x01;
        // k2 = 7, k1 = -8
        body[24] = 0x78;

        let record = FullSensorRecord::parse(&body).unwrap();

        assert_eq!(record.m(), -1);
        assert_eq!(record.tolerance, 0x3F);
        assert_eq!(record.b(), -512);
        assert_eq!(record.accuracy, 0x6A);
        assert_eq!(record.accuracy_exponent, 3);
        assert_eq!(record.direction, Some(Direction::Input));
        assert_eq!(record.k2(), 7);
        assert_eq!(record.k1(), -8);
    }

    #[test]
    fn truncated_body() {
        let body = temperature_body("CPU Temp");
        let err = FullSensorRecord::parse(&body[..body.len() - 2]).unwrap_err();

        assert!(matches!(err, ParseError::ShortBuffer(_)));
    }
}
