use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStringModifier {
    Numeric,
    Alpha,
    Reserved(u8),
}

/// How one compact record describes several sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSharing {
    pub id_string_modifier: IdStringModifier,
    pub share_count: u8,
    pub entity_instance_increments: bool,
    pub modifier_offset: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompactSensorRecord {
    common: SensorRecordCommon,
    pub direction: Option<Direction>,
    pub record_sharing: RecordSharing,
    pub hysteresis: Hysteresis,
    pub oem_data: u8,
}

impl SensorRecord for CompactSensorRecord {
    fn common(&self) -> &SensorRecordCommon {
        &self.common
    }

    fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

impl CompactSensorRecord {
    /// Parse the record body, i.e. everything after the common header.
    pub fn parse(record_data: &[u8]) -> Result<Self, ParseError> {
        let mut cursor = ByteCursor::new(record_data);
        let mut common = SensorRecordCommon::parse_without_id(&mut cursor)?;

        let [sharing_1, sharing_2] = cursor.pop_u16()?.to_le_bytes();

        let direction = Direction::try_from((sharing_1 & 0xC0) >> 6).ok();
        let id_string_modifier = match (sharing_1 & 0x30) >> 4 {
            0b00 => IdStringModifier::Numeric,
            0b01 => IdStringModifier::Alpha,
            v => IdStringModifier::Reserved(v),
        };

        let record_sharing = RecordSharing {
            id_string_modifier,
            share_count: sharing_1 & 0x0F,
            entity_instance_increments: (sharing_2 & 0x80) == 0x80,
            modifier_offset: sharing_2 & 0x7F,
        };

        let hysteresis = Hysteresis {
            positive_going: cursor.pop_u8()?,
            negative_going: cursor.pop_u8()?,
        };

        // Three reserved bytes
        cursor.pop_u24()?;

        let oem_data = cursor.pop_u8()?;

        common.set_id(SensorId::parse(&mut cursor)?);

        Ok(Self {
            common,
            direction,
            record_sharing,
            hysteresis,
            oem_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_discrete_sensor() {
        let mut body = vec![
            0x20, 0x00, 0x52, // owner, lun, number
            0x07, 0x02, // entity: processor #2
            0x63, 0x40, // initialization, capabilities
            0x07, 0x6F, // processor, sensor specific
            0x80, 0x04, 0x00, 0x00, 0x80, 0x04, // masks
            0x00, 0x00, 0x00, // units
            0x52, 0x81, // input, alpha, two sensors; instance increments, offset 1
            0x00, 0x00, // hysteresis
            0x00, 0x00, 0x00, // reserved
            0x00, // oem
        ];
        body.push(0xC5);
        body.extend_from_slice(b"CPU2 ");

        let record = CompactSensorRecord::parse(&body).unwrap();

        assert_eq!(record.sensor_number(), 0x52);
        assert_eq!(record.sensor_type(), SensorType::Processor);
        assert_eq!(record.common().event_reading_type_code, 0x6F);
        assert_eq!(u8::from(record.common().entity_instance), 0x02);
        assert_eq!(record.direction(), Some(Direction::Input));
        assert_eq!(
            record.record_sharing,
            RecordSharing {
                id_string_modifier: IdStringModifier::Alpha,
                share_count: 2,
                entity_instance_increments: true,
                modifier_offset: 1,
            }
        );
        assert_eq!(record.id_string().as_str(), "CPU2 ");
    }

    #[test]
    fn short_body() {
        assert!(CompactSensorRecord::parse(&[0x20, 0x00]).is_err());
    }
}
