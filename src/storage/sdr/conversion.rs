//! Conversion of raw sensor readings to engineering values
//! (IPMI 2.0 section 36.3).

use crate::error::ParseError;

/// Sign-extend the `bits`-wide two's complement number held in the low
/// bits of `value`.
pub fn convert_complement(value: i32, bits: u32) -> i32 {
    if value & (1 << (bits - 1)) != 0 {
        value - (1 << bits)
    } else {
        value
    }
}

/// Encoding of analog readings, from bits 7:6 of Sensor Units 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Unsigned,
    OnesComplement,
    TwosComplement,
    /// The sensor does not return an analog reading.
    NoAnalogReading,
}

impl DataFormat {
    pub fn from_units_1(units_1: u8) -> Self {
        match (units_1 >> 6) & 0b11 {
            0b00 => Self::Unsigned,
            0b01 => Self::OnesComplement,
            0b10 => Self::TwosComplement,
            _ => Self::NoAnalogReading,
        }
    }

    pub fn apply(&self, raw: u8) -> i32 {
        let raw = raw as i32;
        let sign = raw & 0x80 != 0;

        match self {
            Self::OnesComplement if sign => -((raw & 0x7F) ^ 0x7F),
            Self::TwosComplement if sign => -((raw & 0x7F) ^ 0x7F) - 1,
            _ => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linearization {
    Linear,
    Ln,
    Log10,
    Log2,
    E,
    Exp10,
    Exp2,
    OneOverX,
    Sqr,
    Cube,
    Sqrt,
    CubeRoot,
    /// Non-linear, OEM-defined, or reserved. Readings of such sensors
    /// cannot be converted without extra information.
    Unknown(u8),
}

impl From<u8> for Linearization {
    fn from(value: u8) -> Self {
        match value & 0x7F {
            0 => Self::Linear,
            1 => Self::Ln,
            2 => Self::Log10,
            3 => Self::Log2,
            4 => Self::E,
            5 => Self::Exp10,
            6 => Self::Exp2,
            7 => Self::OneOverX,
            8 => Self::Sqr,
            9 => Self::Cube,
            10 => Self::Sqrt,
            11 => Self::CubeRoot,
            v => Self::Unknown(v),
        }
    }
}

impl Linearization {
    pub fn apply(&self, x: f64) -> Result<f64, ParseError> {
        let value = match self {
            Self::Linear => x,
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Log2 => x.log2(),
            Self::E => x.exp(),
            Self::Exp10 => 10f64.powf(x),
            Self::Exp2 => x.exp2(),
            Self::OneOverX => 1.0 / x,
            Self::Sqr => x.powi(2),
            Self::Cube => x.powi(3),
            Self::Sqrt => x.sqrt(),
            Self::CubeRoot => x.cbrt(),
            Self::Unknown(v) => return Err(ParseError::UnknownLinearization(*v)),
        };

        Ok(value)
    }
}

/// The `y = L[(M*x + B*10^K1) * 10^K2]` factors of a full sensor record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub data_format: DataFormat,
    pub linearization: Linearization,
    pub m: i16,
    pub b: i16,
    /// `K1`, the B exponent.
    pub b_exponent: i8,
    /// `K2`, the result exponent.
    pub result_exponent: i8,
}

impl Conversion {
    pub fn convert(&self, raw: u8) -> Result<f64, ParseError> {
        let x = self.data_format.apply(raw) as f64;
        let m = self.m as f64;
        let b = self.b as f64 * 10f64.powi(self.b_exponent as i32);

        let linear = (m * x + b) * 10f64.powi(self.result_exponent as i32);
        self.linearization.apply(linear)
    }
}
