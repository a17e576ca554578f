use std::time::Duration;

use clap::Parser;
use ipmi_sdr_sel::{
    config::DEFAULT_RECV_TIMEOUT,
    connection::{File, FileError},
    CompactRecordPolicy, Ipmi, WalkConfig,
};

#[derive(Parser)]
pub struct CliOpts {
    /// The IPMI device to use. The usual device nodes are probed if omitted.
    #[clap(long, short)]
    device: Option<String>,
    /// How many milliseconds to wait before timing out while waiting for a response
    #[clap(long)]
    timeout_ms: Option<u64>,
    /// Also report sensors described by compact records
    #[clap(long)]
    compact: bool,
    /// Number of consecutive SEL entries without a next id to skip
    #[clap(default_value = "2", long)]
    zero_tolerance: u8,
}

impl CliOpts {
    pub fn get_connection(&self) -> Result<Ipmi<File>, FileError> {
        let timeout = self
            .timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_RECV_TIMEOUT);

        let file = match &self.device {
            Some(path) => {
                log::debug!("Opening file {path}");
                File::new(path, timeout)?
            }
            None => File::open_default()?,
        };

        let compact = if self.compact {
            CompactRecordPolicy::Report
        } else {
            CompactRecordPolicy::Skip
        };

        let config = WalkConfig::default()
            .with_compact_records(compact)
            .with_zero_next_id_tolerance(self.zero_tolerance);

        Ok(Ipmi::with_config(file, config))
    }
}
