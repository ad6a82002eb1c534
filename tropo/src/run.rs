//! One alert run: fetch, compute, classify, format, maybe page.

use crate::{
    diagnostic::Observer, message::format_message, notify::PagingCall, profile::compute_index,
    AlertLevel, ComputeError, Delivery, Location, Notifier, NotifyError, RunError, TropoIndex,
    WeatherSnapshot, WeatherSource,
};
use log::{error, info};

/// Static settings of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Point the index is computed for.
    pub location: Location,

    /// Lowest index that triggers a page.
    pub min_index: f64,

    /// Recipient call signs.
    pub call_signs: Vec<String>,

    /// Transmitter groups to page through.
    pub transmitter_groups: Vec<String>,
}

/// Index, tier and candidate message for one observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub index: TropoIndex,
    pub level: AlertLevel,
    pub message: String,
}

impl Assessment {
    pub fn new(index: TropoIndex, snapshot: &WeatherSnapshot) -> Self {
        let level = index.level();
        let message = format_message(index.value(), level, snapshot);
        Self {
            index,
            level,
            message,
        }
    }
}

/// What happened to the candidate message.
#[derive(Debug)]
pub enum Outcome {
    /// Index below `min_index`, nothing sent.
    Skipped,
    Sent(Delivery),
    Failed(NotifyError),
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct Report {
    pub snapshot: WeatherSnapshot,
    pub assessment: Assessment,
    pub outcome: Outcome,
}

/// Computes index, alert level and message for `snapshot`.
pub fn assess<O>(snapshot: &WeatherSnapshot, observer: &mut O) -> Result<Assessment, ComputeError>
where
    O: Observer + ?Sized,
{
    let index = compute_index(snapshot, observer)?;
    Ok(Assessment::new(index, snapshot))
}

/// Pages `assessment` if its index reaches `config.min_index`.
///
/// A `min_index` that compares false with everything (NaN) never pages.
pub fn dispatch(assessment: &Assessment, config: &Config, notifier: &dyn Notifier) -> Outcome {
    let reached = assessment.index.value() >= config.min_index;
    if !reached {
        info!(
            "tropo index {} below {}, no message sent",
            assessment.index, config.min_index
        );
        return Outcome::Skipped;
    }

    let call = PagingCall {
        text: assessment.message.clone(),
        call_sign_names: config.call_signs.clone(),
        transmitter_group_names: config.transmitter_groups.clone(),
        emergency: false,
    };
    match notifier.send(&call) {
        Ok(delivery) => {
            info!("message sent to DAPNET: HTTP {}", delivery.status);
            Outcome::Sent(delivery)
        }
        Err(e) => {
            error!("failed to send DAPNET message '{}': {e}", call.text);
            Outcome::Failed(e)
        }
    }
}

/// Runs the whole pipeline once.
///
/// Weather and computation failures abort the run and are returned.
/// A delivery failure does not; it is reported in [`Report::outcome`].
pub fn run<O>(
    config: &Config,
    weather: &dyn WeatherSource,
    notifier: &dyn Notifier,
    observer: &mut O,
) -> Result<Report, RunError>
where
    O: Observer + ?Sized,
{
    info!("fetching current weather for {}", config.location);
    let snapshot = weather.current(config.location).map_err(|e| {
        error!("cannot fetch weather for {}: {e}", config.location);
        e
    })?;
    info!("weather: {snapshot}");

    let assessment = assess(&snapshot, observer).map_err(|e| {
        error!("cannot compute tropo index from {snapshot}: {e}");
        e
    })?;
    info!("alert level: {}", assessment.level);
    info!("proposed DAPNET message: {}", assessment.message);

    let outcome = dispatch(&assessment, config, notifier);
    Ok(Report {
        snapshot,
        assessment,
        outcome,
    })
}
