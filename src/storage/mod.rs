//! Storage NetFn: the Sensor Data Repository and the System Event Log.

pub mod sdr;
pub mod sel;

/// Seconds since the Unix epoch, as kept by the controller's SEL/SDR time
/// clock. Zero means the time is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(u32);

impl Timestamp {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_unspecified(&self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unspecified() {
            return write!(f, "Unknown");
        }

        #[cfg(feature = "time")]
        {
            let formatted = time::OffsetDateTime::from_unix_timestamp(self.0 as i64)
                .ok()
                .and_then(|t| {
                    t.format(&time::format_description::well_known::Rfc3339)
                        .ok()
                });

            if let Some(formatted) = formatted {
                return write!(f, "{formatted}");
            }
        }

        write!(f, "{}", self.0)
    }
}

impl From<u32> for Timestamp {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
