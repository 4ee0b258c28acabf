//! Encapsulation of inode data access.

use log::debug;

use crate::inode::now;
use crate::{Inode, InodeData};

/// Returns the payload of a non-directory inode.
/// Character devices read as empty.
pub fn fread(inode: &Inode) -> Option<&[u8]> {
    match &inode.data {
        InodeData::Regular { payload } => Some(payload.as_slice()),
        InodeData::CharDevice => Some(&[][..]),
        InodeData::Directory { .. } => None,
    }
}

/// Replaces the payload of a non-directory inode and refreshes its size and
/// modify time. Character devices swallow the bytes.
/// Returns false, leaving the inode untouched, for directories.
pub fn fwrite(inode: &mut Inode, buffer: &[u8]) -> bool {
    match &mut inode.data {
        InodeData::Regular { payload } => {
            payload.clear();
            payload.extend_from_slice(buffer);
            inode.size = buffer.len() as u64;
        }
        InodeData::CharDevice => {}
        InodeData::Directory { .. } => return false,
    }
    inode.mtime = now();
    debug!("wrote {} bytes to inode {}", buffer.len(), inode.id);
    true
}
