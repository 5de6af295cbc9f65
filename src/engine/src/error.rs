use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error in {path}, line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("capacity error: {0}")]
    Capacity(String),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub fn parse(path: &str, line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            path: path.to_string(),
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
