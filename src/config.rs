use std::time::Duration;

/// What to do with Compact Sensor Records while enumerating sensors.
///
/// Compact records carry no conversion factors, so no engineering value
/// can be computed for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompactRecordPolicy {
    /// Leave compact records out of sensor enumeration.
    #[default]
    Skip,
    /// Report compact records with their metadata and without a value.
    Report,
}

/// Tunables for SDR and SEL enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    /// Number of consecutive SEL entries reporting a next id of `0x0000`
    /// that are skipped before the walk gives up.
    pub zero_next_id_tolerance: u8,
    pub compact_records: CompactRecordPolicy,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            zero_next_id_tolerance: 2,
            compact_records: CompactRecordPolicy::Skip,
        }
    }
}

impl WalkConfig {
    pub fn with_compact_records(mut self, policy: CompactRecordPolicy) -> Self {
        self.compact_records = policy;
        self
    }

    pub fn with_zero_next_id_tolerance(mut self, tolerance: u8) -> Self {
        self.zero_next_id_tolerance = tolerance;
        self
    }
}

/// Device nodes probed, in order, when opening the local IPMI driver
/// without an explicit path.
pub const DEFAULT_DEVICE_PATHS: [&str; 3] = ["/dev/ipmi0", "/dev/ipmi/0", "/dev/ipmidev/0"];

/// How long to wait for a response from the local driver.
pub const DEFAULT_RECV_TIMEOUT: Duration = Duration::from_secs(2);
