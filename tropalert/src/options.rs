use clap::Parser;
use std::path::PathBuf;
use tropo::Location;

/// Compute the tropo ducting index for a location and page it to
/// DAPNET when it is high enough.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Location "lat,lon" to forecast for.
    #[arg(long, env = "TROPO_LOCATION", default_value = "48.1173,-1.6778")]
    pub location: Location,

    /// Lowest index that triggers a page.
    #[arg(long, default_value_t = 2.0, value_parser = parse_finite)]
    pub min_index: f64,

    /// Recipient call signs, comma separated or repeated.
    #[arg(long = "call-sign", env = "DAPNET_CALLSIGNS", value_delimiter = ',', required = true)]
    pub call_signs: Vec<String>,

    /// Transmitter groups, comma separated or repeated.
    #[arg(long = "tx-group", env = "DAPNET_TX_GROUPS", value_delimiter = ',', required = true)]
    pub tx_groups: Vec<String>,

    /// DAPNET user (your call sign).
    #[arg(long, env = "DAPNET_USER")]
    pub dapnet_user: String,

    /// DAPNET password.
    #[arg(long, env = "DAPNET_PASS", hide_env_values = true)]
    pub dapnet_pass: String,

    /// DAPNET calls endpoint.
    #[arg(long, default_value = "https://hampager.de/api/calls")]
    pub dapnet_url: String,

    /// Open-Meteo API base.
    #[arg(long, default_value = "https://api.open-meteo.com")]
    pub weather_url: String,

    /// Timeout of each HTTP request, in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Log file, appended to.
    #[arg(long, default_value = "tropo.log")]
    pub log_file: PathBuf,
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use tropo::Location;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from([
            "tropalert",
            "--call-sign=f4abc,f4def",
            "--tx-group=f-53",
            "--dapnet-user=f4abc",
            "--dapnet-pass=secret",
        ])
        .unwrap();
        assert_eq!(
            cli.location,
            Location {
                lat: 48.1173,
                lon: -1.6778
            }
        );
        assert_eq!(cli.min_index, 2.0);
        assert_eq!(cli.call_signs, vec!["f4abc", "f4def"]);
        assert_eq!(cli.tx_groups, vec!["f-53"]);
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.dapnet_url, "https://hampager.de/api/calls");
    }

    #[test]
    fn test_bad_location() {
        let res = Cli::try_parse_from([
            "tropalert",
            "--location=48.1",
            "--call-sign=f4abc",
            "--tx-group=f-53",
            "--dapnet-user=f4abc",
            "--dapnet-pass=secret",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_min_index_must_be_finite() {
        for bad in ["NaN", "inf", "-inf", "two"] {
            let min_index = format!("--min-index={bad}");
            let res = Cli::try_parse_from([
                "tropalert",
                min_index.as_str(),
                "--call-sign=f4abc",
                "--tx-group=f-53",
                "--dapnet-user=f4abc",
                "--dapnet-pass=secret",
            ]);
            assert!(res.is_err(), "{bad} accepted");
        }
        let cli = Cli::try_parse_from([
            "tropalert",
            "--min-index=-1.5",
            "--call-sign=f4abc",
            "--tx-group=f-53",
            "--dapnet-user=f4abc",
            "--dapnet-pass=secret",
        ])
        .unwrap();
        assert_eq!(cli.min_index, -1.5);
    }
}
