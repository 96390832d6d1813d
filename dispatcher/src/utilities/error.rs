use shared_resources::elevator_status::ElevatorId;
use shared_resources::error::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// An elevator carries passengers but no travel direction could be resolved.
    #[error("elevator {elevator_id} carries passengers but has no travel direction")]
    DirectionUnresolved { elevator_id: ElevatorId },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{path} answered with status {status}")]
    Http { status: u16, path: String },

    #[error("channel between network and dispatch threads closed")]
    Channel,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
