use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueSheetError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No ISO found in path: {0}")]
    NoDiscImage(PathBuf),

    #[error("Multiple ISO found in path: {0}")]
    AmbiguousDiscImage(PathBuf),
}

pub type CueSheetResult<T> = Result<T, CueSheetError>;
