mod dapnet;
mod logging;
mod open_meteo;
mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use dapnet::Dapnet;
use log::warn;
use open_meteo::OpenMeteo;
use options::Cli;
use std::time::Duration;
use tropo::{Config, LogObserver, Outcome};

fn main() -> Result<(), AnyError> {
    let Cli {
        location,
        min_index,
        call_signs,
        tx_groups,
        dapnet_user,
        dapnet_pass,
        dapnet_url,
        weather_url,
        timeout,
        log_file,
    } = Cli::parse();

    logging::init(&log_file)?;

    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(timeout))
        .build();
    let weather = OpenMeteo::new(agent.clone(), weather_url);
    let dapnet = Dapnet::new(agent, dapnet_url, &dapnet_user, &dapnet_pass);
    let config = Config {
        location,
        min_index,
        call_signs,
        transmitter_groups: tx_groups,
    };

    let report = tropo::run(&config, &weather, &dapnet, &mut LogObserver)?;
    if let Outcome::Failed(_) = report.outcome {
        warn!("run finished without delivering the alert");
    }
    Ok(())
}
