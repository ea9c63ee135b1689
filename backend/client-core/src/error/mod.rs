pub mod config;
pub mod session;
pub mod shortener_client;

pub use config::ConfigError;
pub use session::SessionError;
pub use shortener_client::ShortenerClientError;

use models::ModelError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Client(#[from] ShortenerClientError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
