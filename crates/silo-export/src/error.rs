use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize archive: {source}")]
    Finalize {
        #[source]
        source: zip::result::ZipError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
