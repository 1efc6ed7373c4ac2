/// Core error type.
///
/// The adapter crate maps its transport-specific errors into this type so the
/// dispatcher can handle failures consistently (retry without effect vs give up).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
