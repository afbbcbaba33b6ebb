use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input text could not be interpreted.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("no board has been assigned to the player")]
    NoBoardAssigned,

    #[error("cell ({row}, {col}) is outside a {rows}x{cols} table")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("the diagnostic log has no entries")]
    EmptyLog,
}

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
