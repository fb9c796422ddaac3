use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The URL does not begin with `jdbc:<dialect>:` for any known dialect.
    #[error("Unsupported JDBC URL: {0}")]
    UnknownDialect(String),
}

pub type Result<T> = std::result::Result<T, Error>;
