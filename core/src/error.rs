use core::fmt;

/// Error type for reading a user image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedError {
    /// The image file is missing or could not be read.
    FileNotAvailable(embedded_io::ErrorKind),
}

impl EmbedError {
    pub(crate) fn from_io_error(error: impl embedded_io::Error) -> Self {
        EmbedError::FileNotAvailable(error.kind())
    }
}

impl embedded_io::Error for EmbedError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            EmbedError::FileNotAvailable(kind) => *kind,
        }
    }
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedError::FileNotAvailable(kind) => write!(f, "file not available ({kind:?})"),
        }
    }
}
