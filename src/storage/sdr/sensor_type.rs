macro_rules ! sensor_type {
    {
        pub enum SensorType {
            $($name:ident = [$value:literal, $display:literal],)*
            [$reserved_range:pat],
            [$oem_reserved_range:pat],
        }
    } => {
        /// The Sensor Type code of an SDR or SEL record (IPMI 2.0 table 42-3).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SensorType {
            $($name,)*
            Reserved(u8),
            OemReserved(u8),
        }

        impl SensorType {
            /// A human-readable name. `0x00` is named "reserved", all other
            /// codes without a name yield an empty string.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => $display,)*
                    Self::Reserved(0) => "reserved",
                    Self::Reserved(_) | Self::OemReserved(_) => "",
                }
            }
        }

        impl From<u8> for SensorType {
            fn from(value: u8) -> Self {
                match value {
                    $($value => Self::$name,)*
                    0 | $reserved_range => Self::Reserved(value),
                    $oem_reserved_range => Self::OemReserved(value),
                }
            }
        }

        impl From<SensorType> for u8 {
            fn from(value: SensorType) -> u8 {
                match value {
                    $(SensorType::$name => $value,)*
                    SensorType::Reserved(v) => v,
                    SensorType::OemReserved(v) => v,
                }
            }
        }

        impl TryFrom<&str> for SensorType {
            type Error = ();

            /// Look up a sensor type by its variant name, ignoring case.
            fn try_from(input: &str) -> Result<Self, Self::Error> {
                let to_lower = input.to_ascii_lowercase();

                $(
                    if stringify!($name).to_ascii_lowercase() == to_lower {
                        return Ok(SensorType::$name);
                    }
                )*

                Err(())
            }
        }
    }
}

sensor_type! {
    pub enum SensorType {
        Temperature = [0x01, "Temperature"],
        Voltage = [0x02, "Voltage"],
        Current = [0x03, "Current"],
        Fan = [0x04, "Fan"],
        PhysicalSecurity = [0x05, "Physical Security"],
        PlatformSecurity = [0x06, "Platform Security"],
        Processor = [0x07, "Processor"],
        PowerSupply = [0x08, "Power Supply"],
        PowerUnit = [0x09, "Power Unit"],
        CoolingDevice = [0x0A, "Cooling Device"],
        Other = [0x0B, "Other"],
        Memory = [0x0C, "Memory"],
        DriveSlotBay = [0x0D, "Drive Slot / Bay"],
        PostMemoryResize = [0x0E, "POST Memory Resize"],
        SystemFirmwares = [0x0F, "System Firmwares"],
        EventLoggingDisabled = [0x10, "Event Logging Disabled"],
        Watchdog1 = [0x11, "Watchdog1"],
        SystemEvent = [0x12, "System Event"],
        CriticalInterrupt = [0x13, "Critical Interrupt"],
        Button = [0x14, "Button"],
        ModuleOrBoard = [0x15, "Module / Board"],
        Microcontroller = [0x16, "Microcontroller"],
        AddinCard = [0x17, "Add-in Card"],
        Chassis = [0x18, "Chassis"],
        ChipSet = [0x19, "Chip Set"],
        OtherFru = [0x1A, "Other FRU"],
        CableOrInterconnect = [0x1B, "Cable / Interconnect"],
        Terminator = [0x1C, "Terminator"],
        SystemBootInitiated = [0x1D, "System Boot Initiated"],
        BootError = [0x1E, "Boot Error"],
        OsBoot = [0x1F, "OS Boot"],
        OsCriticalStop = [0x20, "OS Critical Stop"],
        SlotOrConnector = [0x21, "Slot / Connector"],
        SystemAcpiPowerState = [0x22, "System ACPI Power State"],
        Watchdog2 = [0x23, "Watchdog2"],
        PlatformAlert = [0x24, "Platform Alert"],
        EntityPresence = [0x25, "Entity Presence"],
        MonitorAsic = [0x26, "Monitor ASIC"],
        Lan = [0x27, "LAN"],
        ManagementSubsysHealth = [0x28, "Management Subsys Health"],
        Battery = [0x29, "Battery"],
        SessionAudit = [0x2A, "Session Audit"],
        VersionChange = [0x2B, "Version Change"],
        FruState = [0x2C, "FRU State"],
        [0x2D..=0xBF],
        [0xC0..=0xFF],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(SensorType::from(0x01).name(), "Temperature");
        assert_eq!(SensorType::from(0x2C).name(), "FRU State");
        assert_eq!(SensorType::from(0x00).name(), "reserved");
        assert_eq!(SensorType::from(0x2D).name(), "");
        assert_eq!(SensorType::from(0xC0), SensorType::OemReserved(0xC0));
    }

    #[test]
    fn code_round_trips() {
        for code in 0..=0xFFu8 {
            assert_eq!(u8::from(SensorType::from(code)), code);
        }
    }

    #[test]
    fn from_variant_name() {
        assert_eq!(SensorType::try_from("fan"), Ok(SensorType::Fan));
        assert_eq!(SensorType::try_from("nothing"), Err(()));
    }
}
