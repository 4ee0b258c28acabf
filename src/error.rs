use alloc::string::String;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("inode {0} was never allocated")]
    NotFound(u32),
    #[error("inode {0} is not a directory")]
    InvalidParent(u32),
    #[error("no such file or directory: {0}")]
    NoSuchPath(String),
    #[error("file exists: {0}")]
    AlreadyExists(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = core::result::Result<T, FsError>;
