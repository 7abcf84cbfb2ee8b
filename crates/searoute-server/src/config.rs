//! Server configuration from environment.

use std::env;
use std::net::IpAddr;
use std::str::FromStr;

use searoute_core::{SynthesisConfig, DEFAULT_SEAM_OVERSHOOT_DEG};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub bind_addr: IpAddr,
    /// Overshoot past ±180° applied to split render segments.
    pub seam_overshoot_deg: f64,
    pub standard_speed_kmh: Option<f64>,
    pub alternative_speed_kmh: Option<f64>,
    pub express_speed_kmh: Option<f64>,
    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env_parse("SEAROUTE_PORT").unwrap_or(3000),
            bind_addr: env_parse("SEAROUTE_BIND").unwrap_or(IpAddr::from([0, 0, 0, 0])),
            seam_overshoot_deg: env_parse("SEAROUTE_SEAM_OVERSHOOT_DEG")
                .unwrap_or(DEFAULT_SEAM_OVERSHOOT_DEG),
            standard_speed_kmh: env_parse("SEAROUTE_STANDARD_SPEED_KMH"),
            alternative_speed_kmh: env_parse("SEAROUTE_ALTERNATIVE_SPEED_KMH"),
            express_speed_kmh: env_parse("SEAROUTE_EXPRESS_SPEED_KMH"),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Synthesis defaults with any speed overrides applied.
    ///
    /// Not validated here; `AppState::new` rejects bad values at startup.
    pub fn synthesis_config(&self) -> SynthesisConfig {
        let mut synthesis = SynthesisConfig::default();
        if let Some(speed) = self.standard_speed_kmh {
            synthesis.standard.speed_kmh = speed;
        }
        if let Some(speed) = self.alternative_speed_kmh {
            synthesis.alternative.speed_kmh = speed;
        }
        if let Some(speed) = self.express_speed_kmh {
            synthesis.express.speed_kmh = speed;
        }
        synthesis
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            seam_overshoot_deg: DEFAULT_SEAM_OVERSHOOT_DEG,
            standard_speed_kmh: None,
            alternative_speed_kmh: None,
            express_speed_kmh: None,
            json_logs: false,
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_overrides_replace_only_their_corridor() {
        let config = Config {
            express_speed_kmh: Some(40.0),
            ..Config::default()
        };
        let synthesis = config.synthesis_config();
        let defaults = SynthesisConfig::default();
        assert_eq!(synthesis.express.speed_kmh, 40.0);
        assert_eq!(synthesis.standard.speed_kmh, defaults.standard.speed_kmh);
        assert_eq!(synthesis.alternative.speed_kmh, defaults.alternative.speed_kmh);
    }
}
