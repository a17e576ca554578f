use clap::Parser;
use ipmi_sdr_sel::{
    storage::sel::{EventCatalog, GetSelInfo},
    LogOutput, Logger,
};

mod common;

#[derive(Parser)]
struct Command {
    #[clap(flatten)]
    common: common::CliOpts,
    /// Stop after this many entries
    #[clap(long)]
    limit: Option<usize>,
    /// Print every field of each entry
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let command = Command::parse();
    let mut ipmi = command.common.get_connection()?;

    let output = LogOutput::StdOut;

    let info = ipmi.send_recv(GetSelInfo)?;
    Logger::log(&output, &info);

    let oem_id = ipmi.oem_id()?;
    let catalog = EventCatalog::default();
    let limit = command.limit.unwrap_or(usize::MAX);
    let mut count = 0;

    ipmi.sel_entries(|entry| {
        if command.verbose {
            Logger::log(&output, entry);
        } else {
            let time = entry
                .timestamp()
                .map(|t| t.to_string())
                .unwrap_or_default();
            println!("{time:<26} {}", entry.description(&catalog, oem_id));
        }

        count += 1;
        count < limit
    })?;

    Ok(())
}
