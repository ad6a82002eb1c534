use thiserror::Error;

/// Boxed underlying cause of a transport failure.
pub type Source = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure retrieving the current weather.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Transport(#[source] Source),

    #[error("weather service answered HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("malformed weather response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Refractivity or index could not be computed for the given inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    #[error("vapor pressure undefined at {temp_c} °C")]
    Temperature { temp_c: f64 },

    #[error("{quantity} is not finite ({value})")]
    NonFinite { quantity: &'static str, value: f64 },
}

/// Failure delivering a paging call.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("paging request failed: {0}")]
    Transport(#[source] Source),

    #[error("paging gateway rejected call with HTTP {status}")]
    Rejected { status: u16 },
}

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    Weather(#[from] WeatherError),

    #[error("{0}")]
    Compute(#[from] ComputeError),
}
