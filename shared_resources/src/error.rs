use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unknown problem variant {0}")]
    UnknownProblem(u8),

    #[error("building needs at least one floor")]
    NoFloors,

    #[error("elevators need room for at least one passenger")]
    NoCapacity,
}
