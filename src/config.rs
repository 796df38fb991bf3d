use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defuzz::CenterOfGravity;
use crate::error::{Error, Result};

/// Tunables of an engine. Everything else (sets, rules) is compiled in.
///
/// ```toml
/// # fdsha.toml
/// resolution = 1000
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Number of intervals the PGA universe is split into when computing the
    /// centroid
    pub resolution: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolution: CenterOfGravity::DEFAULT_RESOLUTION.get(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    pub(crate) fn defuzzifier(&self) -> Result<CenterOfGravity> {
        let resolution = NonZeroUsize::new(self.resolution).ok_or(Error::ZeroResolution)?;

        if resolution.get() > CenterOfGravity::MAX_RESOLUTION {
            return Err(Error::ResolutionTooLarge {
                resolution: resolution.get(),
                max: CenterOfGravity::MAX_RESOLUTION,
            });
        }

        Ok(CenterOfGravity::new(resolution))
    }
}

#[test]
fn test_parse_config() {
    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    assert_eq!(EngineConfig::default().resolution, 1000);
    assert_eq!(
        EngineConfig::from_toml_str("resolution = 250").unwrap(),
        EngineConfig { resolution: 250 }
    );

    assert!(matches!(
        EngineConfig::from_toml_str("samples = 250"),
        Err(Error::ParseConfig(_))
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("resolution = -1"),
        Err(Error::ParseConfig(_))
    ));
}

#[test]
fn test_zero_resolution_is_rejected() {
    let config = EngineConfig { resolution: 0 };

    assert!(matches!(config.defuzzifier(), Err(Error::ZeroResolution)));
    assert_eq!(
        EngineConfig { resolution: 10 }.defuzzifier().unwrap().resolution().get(),
        10
    );
}

#[test]
fn test_oversized_resolution_is_rejected() {
    assert!(matches!(
        EngineConfig { resolution: usize::MAX }.defuzzifier(),
        Err(Error::ResolutionTooLarge { resolution: usize::MAX, .. })
    ));

    let config = EngineConfig::from_toml_str("resolution = 9223372036854775807").unwrap();
    let err = config.defuzzifier().unwrap_err();

    assert_eq!(
        err.to_string(),
        "defuzzification resolution 9223372036854775807 exceeds the maximum of 10000000"
    );

    let largest = EngineConfig {
        resolution: CenterOfGravity::MAX_RESOLUTION,
    };

    assert_eq!(
        largest.defuzzifier().unwrap().resolution().get(),
        CenterOfGravity::MAX_RESOLUTION
    );
}

#[test]
fn test_load_missing_file() {
    let err = EngineConfig::load("/nonexistent/fdsha.toml").unwrap_err();

    assert!(matches!(err, Error::ReadConfig { .. }));
    assert_eq!(err.to_string(), "failed to read config file /nonexistent/fdsha.toml");
}
