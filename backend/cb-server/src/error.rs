use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] cb_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] cb_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to install metrics exporter: {message}")]
    Metrics { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
