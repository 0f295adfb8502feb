use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotesError {
    #[error(transparent)]
    Store(#[from] crate::store::StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type NotesResult<T> = Result<T, NotesError>;
