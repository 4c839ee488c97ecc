use thiserror::Error;

/// Failures while bringing up a disposable server.
#[derive(Debug, Error)]
pub enum TestInfraError {
    /// The requested settings would be refused by the server image.
    #[error("invalid container config: {0}")]
    InvalidConfig(String),
    #[error("container failed: {0}")]
    Container(#[from] testcontainers::TestcontainersError),
}

pub type Result<T> = std::result::Result<T, TestInfraError>;
