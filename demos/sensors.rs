use clap::Parser;
use ipmi_sdr_sel::{storage::sdr::Unit, LogOutput, Logger};

mod common;

#[derive(Parser)]
struct Command {
    #[clap(flatten)]
    common: common::CliOpts,
    /// Dump every SDR record instead of reading sensors
    #[clap(long)]
    records: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let command = Command::parse();
    let mut ipmi = command.common.get_connection()?;

    if command.records {
        let output = LogOutput::StdOut;
        for record in ipmi.sdrs() {
            Logger::log(&output, &record?);
        }
        return Ok(());
    }

    ipmi.sensor_entries(|entry| {
        let value = match (&entry.error, entry.value) {
            (Some(e), _) => format!("error: {e}"),
            (None, Some(value)) => Unit::from(entry.unit_code).display(true, value),
            (None, None) => "no reading".to_string(),
        };

        println!(
            "{:<20} | {:<24} | {:<16} | {}",
            entry.name, value, entry.sensor_type_name, entry.entity_instance
        );
    })?;

    Ok(())
}
