//! unixfs is a tiny in-memory filesystem modeled on early Unix inodes.
//! Permission bits are stored and displayed, never enforced.
//!
//! unixfs's 4 layers (from bottom to top):
//! 1. Inode: the inode table, the only place inodes come into existence.
//! 2. Directory: entry lists of directory inodes and the helpers that link new inodes into them.
//! 3. Path: `namei`, resolving absolute paths to inodes.
//! 4. FileSystem: the bootstrap tree and the read/write/stat/readdir surface for users (shell, games, etc.).
//!
//! Nothing is persisted; whoever needs data to outlive the process must
//! read it out and store it themselves.

extern crate alloc;

mod config;
mod structs;
mod inode;
mod directory;
mod path;
mod file;
mod fs;
mod error;

pub use config::*;
pub use structs::*;
pub use inode::InodeTable;
pub use path::*;
pub use directory::*;
pub use file::*;
pub use fs::*;
pub use error::FsError as Error;
pub use error::Result;
