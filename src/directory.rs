use alloc::string::String;

use log::{trace, warn};

use crate::config::*;
use crate::error::{FsError, Result};
use crate::inode::InodeTable;
use crate::structs::*;

/// Cuts a name down to `MAX_FILE_NAME_LEN` characters.
pub fn truncate_name(name: &str) -> &str {
    match name.char_indices().nth(MAX_FILE_NAME_LEN) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

impl DirEntry {
    /// Names longer than `MAX_FILE_NAME_LEN` are truncated, never rejected.
    pub fn new(inode_id: u32, name: &str) -> Self {
        let short = truncate_name(name);
        if short.len() != name.len() {
            warn!("name {:?} truncated to {:?}", name, short);
        }
        Self {
            inode_id,
            name: String::from(short),
        }
    }

    pub fn name_eq(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Query inode id of a file by name in a directory inode.
/// The first entry with an exactly equal name wins.
pub fn dir_lookup(dir_inode: &Inode, name: &str) -> Option<u32> {
    let entries = dir_inode.entries()?;
    let found = entries.iter().find(|entry| entry.name_eq(name)).map(|entry| entry.inode_id);
    trace!("[dir_lookup] inode {} query {:?} -> {:?}", dir_inode.id, name, found);
    found
}

/// Append an entry to a directory inode.
/// Would not touch link counts, which is the caller's responsibility.
/// Duplicate names are allowed here; lookups see the first one.
pub fn dir_add_entry(dir_inode: &mut Inode, child_entry: DirEntry) -> Result<()> {
    let dir_id = dir_inode.id;
    let InodeData::Directory { entries } = &mut dir_inode.data else {
        return Err(FsError::InvalidParent(dir_id));
    };
    if entries.iter().any(|entry| entry.name == child_entry.name) {
        warn!("directory {} already has an entry named {:?}", dir_id, child_entry.name);
    }
    trace!("[dir_add_entry] {:?} -> inode {} in directory {}", child_entry.name, child_entry.inode_id, dir_id);
    entries.push(child_entry);
    Ok(())
}

fn check_parent(table: &InodeTable, parent_id: u32) -> Result<()> {
    if table.get(parent_id)?.is_dir() {
        Ok(())
    } else {
        Err(FsError::InvalidParent(parent_id))
    }
}

/// Create the root directory. Its '..' points at itself.
/// Must be the first allocation on a table so the root gets `ROOT_INODE_ID`.
pub fn mkroot(table: &mut InodeTable) -> Result<u32> {
    let root = table.allocate(FileType::Directory, DIR_PERMS);
    let root_id = root.id;
    dir_add_entry(root, DirEntry::new(root_id, DOT_NAME))?;
    root.links_cnt += 1; // '.' entry counts as a link
    dir_add_entry(root, DirEntry::new(root_id, DOTDOT_NAME))?;
    Ok(root_id)
}

/// Create a new directory named `dir_name` under `parent_id`, seeded with
/// '.' and '..'. Returns the new inode id.
pub fn mkdir(table: &mut InodeTable, parent_id: u32, dir_name: &str) -> Result<u32> {
    check_parent(table, parent_id)?;

    let dir_inode = table.allocate(FileType::Directory, DIR_PERMS);
    let dir_id = dir_inode.id;
    dir_add_entry(dir_inode, DirEntry::new(dir_id, DOT_NAME))?;
    dir_inode.links_cnt += 1; // '.' entry counts as a link
    dir_add_entry(dir_inode, DirEntry::new(parent_id, DOTDOT_NAME))?;

    let parent_inode = table.get_mut(parent_id)?;
    dir_add_entry(parent_inode, DirEntry::new(dir_id, dir_name))?;
    parent_inode.links_cnt += 1; // child's '..' entry counts as a link
    Ok(dir_id)
}

/// Create a regular file holding `payload` under `parent_id`.
pub fn mkfile(
    table: &mut InodeTable,
    parent_id: u32,
    file_name: &str,
    payload: &[u8],
    perms: Mode,
) -> Result<u32> {
    check_parent(table, parent_id)?;

    let file_inode = table.allocate(FileType::Regular, perms);
    let file_id = file_inode.id;
    file_inode.size = payload.len() as u64;
    file_inode.data = InodeData::Regular { payload: payload.to_vec() };

    dir_add_entry(table.get_mut(parent_id)?, DirEntry::new(file_id, file_name))?;
    Ok(file_id)
}

/// Create a character device under `parent_id`. Devices carry no data.
pub fn mkdev(table: &mut InodeTable, parent_id: u32, dev_name: &str, perms: Mode) -> Result<u32> {
    check_parent(table, parent_id)?;

    let dev_id = table.allocate(FileType::CharDevice, perms).id;
    dir_add_entry(table.get_mut(parent_id)?, DirEntry::new(dev_id, dev_name))?;
    Ok(dev_id)
}
