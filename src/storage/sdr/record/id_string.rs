use crate::{cursor::ByteCursor, error::ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStringEncoding {
    Unicode,
    BcdPlus,
    Ascii6BitPacked,
    Ascii8BitLatin1,
}

/// The ID string of a sensor record, decoded to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorId {
    pub encoding: IdStringEncoding,
    pub text: String,
}

impl Default for SensorId {
    fn default() -> Self {
        Self {
            encoding: IdStringEncoding::Ascii8BitLatin1,
            text: String::new(),
        }
    }
}

impl SensorId {
    /// Parse a type/length byte followed by up to 31 bytes of string data.
    pub fn parse(cursor: &mut ByteCursor) -> Result<Self, ParseError> {
        let type_length = cursor.pop_u8()?;
        let length = (type_length & 0x1F) as usize;

        let (encoding, text) = match (type_length >> 6) & 0b11 {
            0b00 => (IdStringEncoding::Unicode, cursor.pop_string(length)?),
            0b01 => (
                IdStringEncoding::BcdPlus,
                decode_bcd_plus(cursor.pop_slice(length)?),
            ),
            0b10 => (
                IdStringEncoding::Ascii6BitPacked,
                decode_6bit_ascii(cursor.pop_slice(length)?),
            ),
            _ => (IdStringEncoding::Ascii8BitLatin1, cursor.pop_string(length)?),
        };

        Ok(Self { encoding, text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl core::fmt::Display for SensorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn decode_bcd_plus(data: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789 -.:,_";

    data.iter()
        .flat_map(|b| [b >> 4, b & 0x0F])
        .map(|n| DIGITS[n as usize] as char)
        .collect()
}

/// Four characters are packed into every three bytes, least significant
/// bits first. Each character is an offset from `' '`.
fn decode_6bit_ascii(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 4 / 3);
    let mut acc: u32 = 0;
    let mut bits = 0;

    for byte in data {
        acc |= (*byte as u32) << bits;
        bits += 8;

        while bits >= 6 {
            out.push((0x20 + (acc & 0x3F) as u8) as char);
            acc >>= 6;
            bits -= 6;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        let data = b"\xC4CPU1rest";
        let mut cursor = ByteCursor::new(data);
        let id = SensorId::parse(&mut cursor).unwrap();

        assert_eq!(id.encoding, IdStringEncoding::Ascii8BitLatin1);
        assert_eq!(id.to_string(), "CPU1");
        assert_eq!(cursor.rest(), b"rest");
    }

    #[test]
    fn truncated() {
        let data = b"\xC8CPU";
        assert!(SensorId::parse(&mut ByteCursor::new(data)).is_err());
    }

    #[test]
    fn bcd_plus() {
        let data = [0x42, 0x12, 0xAB];
        let id = SensorId::parse(&mut ByteCursor::new(&data)).unwrap();

        assert_eq!(id.as_str(), "12 -");
    }

    #[test]
    fn packed_ascii() {
        // "IPMI" packed into three bytes
        let chars = [0x29u32, 0x30, 0x2D, 0x29];
        let packed = chars[0] | chars[1] << 6 | chars[2] << 12 | chars[3] << 18;
        let [a, b, c, _] = packed.to_le_bytes();

        let data = [0x83, a, b, c];
        let id = SensorId::parse(&mut ByteCursor::new(&data)).unwrap();

        assert_eq!(id.encoding, IdStringEncoding::Ascii6BitPacked);
        assert_eq!(id.as_str(), "IPMI");
    }
}
