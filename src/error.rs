use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors of the configuration layer. Inference itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("defuzzification resolution must be at least 1")]
    ZeroResolution,

    #[error("defuzzification resolution {resolution} exceeds the maximum of {max}")]
    ResolutionTooLarge { resolution: usize, max: usize },

    #[error("failed to read config file {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config")]
    ParseConfig(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
