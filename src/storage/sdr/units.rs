macro_rules ! unit {
    {
        $($name:ident = [$value:literal, $short:expr, $display:literal],)*
    } => {
        /// A sensor base or modifier unit (IPMI 2.0 table 43-15).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Unit {
            $($name,)*
            Unknown(u8),
        }

        impl Unit {
            /// The unit symbol, if it has a common one.
            pub fn symbol(&self) -> Option<&'static str> {
                match self {
                    $(Self::$name => $short,)*
                    Self::Unknown(_) => None,
                }
            }

            /// The unit name as listed by the IPMI unit type table.
            /// Codes past the end of the table yield an empty string.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => $display,)*
                    Self::Unknown(59) => "reserved",
                    Self::Unknown(_) => "",
                }
            }
        }

        impl From<u8> for Unit {
            fn from(value: u8) -> Self {
                match value {
                    $($value => Self::$name,)*
                    _ => Self::Unknown(value),
                }
            }
        }

        impl From<Unit> for u8 {
            fn from(value: Unit) -> Self {
                match value {
                    $(Unit::$name => $value,)*
                    Unit::Unknown(v) => v,
                }
            }
        }
    }
}

unit! {
    Unspecified = [0, None, "unspecified"],
    DegreesCelsius = [1, Some("°C"), "degrees C"],
    DegreesFahrenheit = [2, Some("°F"), "degrees F"],
    DegreesKelvin = [3, Some("K"), "degrees K"],
    Volt = [4, Some("V"), "Volts"],
    Amp = [5, Some("A"), "Amps"],
    Watt = [6, Some("W"), "Watts"],
    Joule = [7, Some("J"), "Joules"],
    Coulomb = [8, Some("C"), "Coulombs"],
    VoltAmpere = [9, Some("VA"), "VA"],
    Nit = [10, None, "Nits"],
    Lumen = [11, Some("lm"), "lumen"],
    Lux = [12, Some("lx"), "lux"],
    Candela = [13, Some("cd"), "Candela"],
    KiloPascal = [14, Some("kPa"), "kPa"],
    PoundsPerSquareInch = [15, Some("psi"), "PSI"],
    Newton = [16, Some("N"), "Newton"],
    CubicFeetPerMinute = [17, Some("cfm"), "CFM"],
    RevolutionsPerMinute = [18, Some("rpm"), "RPM"],
    Hertz = [19, Some("Hz"), "Hz"],
    Microsecond = [20, Some("µs"), "microsecond"],
    Millisecond = [21, Some("ms"), "millisecond"],
    Second = [22, Some("s"), "second"],
    Minute = [23, Some("min"), "minute"],
    Hour = [24, Some("h"), "hour"],
    Day = [25, Some("d"), "day"],
    Week = [26, Some("w"), "week"],
    Mil = [27, Some("mil"), "mil"],
    Inch = [28, Some("in"), "inches"],
    Foot = [29, Some("ft"), "feet"],
    CubicInch = [30, Some("cu in"), "cu in"],
    CubicFoot = [31, Some("cu ft"), "cu feet"],
    Millimeter = [32, Some("mm"), "mm"],
    Centimeter = [33, Some("cm"), "cm"],
    Meter = [34, Some("m"), "m"],
    CubicCentimeter = [35, Some("cu cm"), "cu cm"],
    CubicMeter = [36, Some("cu m"), "cu m"],
    Liter = [37, Some("l"), "liters"],
    FluidOunce = [38, Some("fl oz"), "fluid ounce"],
    Radian = [39, Some("rad"), "radians"],
    Steradian = [40, Some("sr"), "steradians"],
    Revolution = [41, Some("rev"), "revolutions"],
    Cycle = [42, None, "cycles"],
    Gravity = [43, Some("g"), "gravities"],
    Ounce = [44, Some("oz"), "ounce"],
    Pound = [45, Some("lb"), "pound"],
    FootPound = [46, Some("ft lb"), "ft-lb"],
    OunceInch = [47, Some("oz in"), "oz-in"],
    Gauss = [48, Some("Gs"), "gauss"],
    Gilbert = [49, Some("Gb"), "gilberts"],
    Henry = [50, Some("H"), "henry"],
    Millihenry = [51, Some("mH"), "millihenry"],
    Farad = [52, Some("F"), "farad"],
    Microfarad = [53, Some("µF"), "microfarad"],
    Ohm = [54, Some("Ω"), "ohms"],
    Siemens = [55, Some("S"), "siemens"],
    Mole = [56, Some("mol"), "mole"],
    Becquerel = [57, Some("Bq"), "becquerel"],
    PartsPerMillion = [58, Some("ppm"), "PPM"],
    Decibel = [60, Some("dB"), "Decibels"],
    AWeightedDecibel = [61, Some("dBA"), "DbA"],
    CWeightedDecibel = [62, Some("dBC"), "DbC"],
    Gray = [63, Some("Gy"), "gray"],
    Sievert = [64, Some("Sv"), "sievert"],
    ColorTemperatureKelvin = [65, Some("K"), "color temp deg K"],
    Bit = [66, Some("b"), "bit"],
    Kilobit = [67, Some("kb"), "kilobit"],
    Megabit = [68, Some("Mb"), "megabit"],
    Gigabit = [69, Some("Gb"), "gigabit"],
    Byte = [70, Some("B"), "byte"],
    Kilobyte = [71, Some("KB"), "kilobyte"],
    Megabyte = [72, Some("MB"), "megabyte"],
    Gigabyte = [73, Some("GB"), "gigabyte"],
    Word = [74, None, "word"],
    DoubleWord = [75, None, "dword"],
    QuadWord = [76, None, "qword"],
    Line = [77, None, "line"],
    Hit = [78, None, "hit"],
    Miss = [79, None, "miss"],
    Retry = [80, None, "retry"],
    Reset = [81, None, "reset"],
    Overflow = [82, None, "overflow"],
    Underrun = [83, None, "underrun"],
    Collision = [84, None, "collision"],
    Packet = [85, None, "packets"],
    Message = [86, None, "messages"],
    Character = [87, None, "characters"],
    Error = [88, None, "error"],
    CorrectableError = [89, None, "correctable error"],
    UncorrectableError = [90, None, "uncorrectable error"],
}

impl Unit {
    /// Format `value` with two decimals, followed by the unit symbol when
    /// `short` is set and the unit has one, or by its name otherwise.
    pub fn display(&self, short: bool, value: f64) -> String {
        let unit = match self.symbol() {
            Some(symbol) if short => symbol,
            _ => self.name(),
        };

        if unit.is_empty() {
            format!("{value:.2}")
        } else {
            format!("{value:.2} {unit}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Unit::from(1).name(), "degrees C");
        assert_eq!(Unit::from(18).name(), "RPM");
        assert_eq!(Unit::from(59).name(), "reserved");
        assert_eq!(Unit::from(90).name(), "uncorrectable error");
        assert_eq!(Unit::from(91).name(), "");
        assert_eq!(u8::from(Unit::from(91)), 91);
    }

    #[test]
    fn display() {
        use Unit::*;

        assert_eq!(DegreesCelsius.display(true, 32.0), "32.00 °C");
        assert_eq!(DegreesCelsius.display(false, 32.0), "32.00 degrees C");
        assert_eq!(Nit.display(true, -1.0), "-1.00 Nits");
        assert_eq!(Unit::Unknown(200).display(true, 5.5), "5.50");
    }
}
