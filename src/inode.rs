//! The inode table: owns every inode and hands out identifiers.

use alloc::collections::BTreeMap;

use log::debug;

use crate::config::{ROOT_GID, ROOT_INODE_ID, ROOT_UID};
use crate::error::FsError;
use crate::{FileType, Inode, InodeData, Mode, Result};

#[derive(Debug)]
pub struct InodeTable {
    inodes: BTreeMap<u32, Inode>,
    next_id: u32,
}

impl InodeTable {
    pub fn new() -> Self {
        Self {
            inodes: BTreeMap::new(),
            next_id: ROOT_INODE_ID,
        }
    }

    /// Allocates a fresh inode. Identifiers are monotonic and never freed.
    /// Callers must link the new inode into a directory right away; see
    /// `directory::mkdir` and friends.
    pub(crate) fn allocate(&mut self, ftype: FileType, perms: Mode) -> &mut Inode {
        let id = self.next_id;
        self.next_id += 1;

        let now = now();
        let inode = Inode {
            id,
            mode: Mode::ALLOCATED | ftype.mode_bits() | perms.permissions(),
            links_cnt: 1,
            uid: ROOT_UID,
            gid: ROOT_GID,
            size: 0,
            atime: now,
            mtime: now,
            data: InodeData::empty(ftype),
        };
        debug!("allocated inode {} ({:?}, mode {:o})", id, ftype, inode.mode.bits());
        self.inodes.entry(id).or_insert(inode)
    }

    pub fn get(&self, inode_id: u32) -> Result<&Inode> {
        self.inodes.get(&inode_id).ok_or(FsError::NotFound(inode_id))
    }

    pub fn get_mut(&mut self, inode_id: u32) -> Result<&mut Inode> {
        self.inodes.get_mut(&inode_id).ok_or(FsError::NotFound(inode_id))
    }

    /// Number of identifiers handed out so far.
    pub fn len(&self) -> usize {
        self.inodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inodes.is_empty()
    }
}

impl Default for InodeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Seconds since the Unix epoch.
pub(crate) fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_allocate_monotonic() {
        let mut table = InodeTable::new();
        let first = table.allocate(FileType::Directory, Mode::RWX).id;
        let second = table.allocate(FileType::Regular, Mode::RW).id;
        assert_eq!(first, ROOT_INODE_ID);
        assert_eq!(second, ROOT_INODE_ID + 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_allocate_fields() {
        let mut table = InodeTable::new();
        let inode = table.allocate(FileType::CharDevice, Mode::RW);
        assert!(inode.mode.contains(Mode::ALLOCATED | Mode::CHAR_DEVICE | Mode::RW));
        assert_eq!(inode.links_cnt, 1);
        assert_eq!(inode.size, 0);
        assert_eq!(inode.data, InodeData::CharDevice);
    }

    #[test]
    fn test_allocate_ignores_type_bits_in_perms() {
        let mut table = InodeTable::new();
        let inode = table.allocate(FileType::Regular, Mode::DIRECTORY | Mode::READ);
        assert_eq!(inode.ftype(), FileType::Regular);
    }

    #[test]
    fn test_get_unallocated() {
        let table = InodeTable::new();
        assert_eq!(table.get(1).unwrap_err(), FsError::NotFound(1));
        assert!(table.is_empty());
    }
}
