use alloc::string::String;
use alloc::vec::Vec;

use log::info;

use crate::config::*;
use crate::directory::{dir_lookup, mkdev, mkdir, mkfile, mkroot, truncate_name};
use crate::error::{FsError, Result};
use crate::file::{fread, fwrite};
use crate::inode::InodeTable;
use crate::path::{namei, split};
use crate::structs::*;

const PASSWD: &[u8] = b"root::0:0::/:\n\
bin::3:3::/bin:\n\
daemon::1:1::/:\n\
ken::6:1::/usr/ken:\n\
dmr::7:1::/usr/dmr:\n";

const MOTD: &[u8] = b"UNIX Time-Sharing System, First Edition\n\
Type `ls /usr/games' for amusements.\n";

/// Game binaries under /usr/games. `ttt.k` starts empty and holds what the
/// tic-tac-toe player has learned between games.
const GAMES: [(&str, Mode); 7] = [
    ("bj", GAME_PERMS),
    ("chess", GAME_PERMS),
    ("cubic", GAME_PERMS),
    ("moo", GAME_PERMS),
    ("ttt", GAME_PERMS),
    ("ttt.k", GAME_STATE_PERMS),
    ("wump", GAME_PERMS),
];

/// PDP-11 a.out magic (0407), the first word of every game image.
fn game_image(name: &str) -> Vec<u8> {
    if name == "ttt.k" {
        return Vec::new();
    }
    let mut image = Vec::from(0o407u16.to_le_bytes());
    image.extend_from_slice(name.as_bytes());
    image
}

/// A trailing '/' only names directories.
fn reject_dir_path(path: &str) -> Result<()> {
    if path.ends_with('/') {
        return Err(FsError::InvalidPath(String::from(path)));
    }
    Ok(())
}

/// A single-volume filesystem built around one inode table.
///
/// Methods operate on the instance directly, user should wrap a lock around
/// it if it is shared between actors.
#[derive(Debug)]
pub struct FileSystem {
    table: InodeTable,
}

impl FileSystem {
    /// Builds the fixed bootstrap tree.
    pub fn format() -> Result<Self> {
        let mut table = InodeTable::new();
        let root = mkroot(&mut table)?;

        mkdir(&mut table, root, "bin")?;
        let dev = mkdir(&mut table, root, "dev")?;
        let etc = mkdir(&mut table, root, "etc")?;
        let usr = mkdir(&mut table, root, "usr")?;
        mkdir(&mut table, root, "tmp")?;

        let games = mkdir(&mut table, usr, "games")?;
        for name in ["lib", "bin", "sys"] {
            mkdir(&mut table, usr, name)?;
        }

        for name in ["tty", "null", "mem"] {
            mkdev(&mut table, dev, name, DEV_PERMS)?;
        }

        mkfile(&mut table, etc, "passwd", PASSWD, TEXT_PERMS)?;
        mkfile(&mut table, etc, "motd", MOTD, TEXT_PERMS)?;

        for (name, perms) in GAMES {
            mkfile(&mut table, games, name, &game_image(name), perms)?;
        }

        info!("filesystem formatted with {} inodes", table.len());
        Ok(Self { table })
    }

    /// Lists a directory in entry order, '.' and '..' included.
    /// `None` when the path does not resolve or is not a directory.
    pub fn readdir(&self, path: &str) -> Option<Vec<DirListing>> {
        let entries = namei(&self.table, path)?.entries()?;
        let mut listing = Vec::with_capacity(entries.len());
        for entry in entries {
            let inode = self.table.get(entry.inode_id).ok()?;
            listing.push(DirListing {
                name: entry.name.clone(),
                inode: inode.view(),
            });
        }
        Some(listing)
    }

    /// `None` when the path does not resolve or is a directory.
    pub fn read(&self, path: &str) -> Option<&[u8]> {
        fread(namei(&self.table, path)?)
    }

    /// Replaces a file's contents. Returns false, changing nothing, when the
    /// path does not resolve or is a directory.
    pub fn write(&mut self, path: &str, buf: &[u8]) -> bool {
        let Some(inode_id) = self.lookup(path) else {
            return false;
        };
        match self.table.get_mut(inode_id) {
            Ok(inode) => fwrite(inode, buf),
            Err(_) => false,
        }
    }

    pub fn stat(&self, path: &str) -> Option<InodeView> {
        namei(&self.table, path).map(Inode::view)
    }

    pub fn lookup(&self, path: &str) -> Option<u32> {
        namei(&self.table, path).map(|inode| inode.id)
    }

    pub fn mkdir(&mut self, path: &str) -> Result<u32> {
        let (parent_id, name) = self.resolve_parent(path)?;
        mkdir(&mut self.table, parent_id, &name)
    }

    pub fn creat(&mut self, path: &str, payload: &[u8], perms: Mode) -> Result<u32> {
        reject_dir_path(path)?;
        let (parent_id, name) = self.resolve_parent(path)?;
        mkfile(&mut self.table, parent_id, &name, payload, perms)
    }

    pub fn mknod(&mut self, path: &str, perms: Mode) -> Result<u32> {
        reject_dir_path(path)?;
        let (parent_id, name) = self.resolve_parent(path)?;
        mkdev(&mut self.table, parent_id, &name, perms)
    }

    /// Finds the directory a new entry for `path` goes into.
    /// Unlike the bare directory helpers, an existing name is refused.
    fn resolve_parent(&self, path: &str) -> Result<(u32, String)> {
        let (parent_path, name) = split(path);
        if !path.starts_with('/') || name.is_empty() || name == DOT_NAME || name == DOTDOT_NAME {
            return Err(FsError::InvalidPath(String::from(path)));
        }
        let parent = namei(&self.table, &parent_path)
            .ok_or_else(|| FsError::NoSuchPath(parent_path.clone()))?;
        if !parent.is_dir() {
            return Err(FsError::InvalidParent(parent.id));
        }
        if dir_lookup(parent, truncate_name(&name)).is_some() {
            return Err(FsError::AlreadyExists(String::from(path)));
        }
        Ok((parent.id, name))
    }

    pub fn get_inode(&self, inode_id: u32) -> Result<InodeView> {
        self.table.get(inode_id).map(Inode::view)
    }

    pub fn root_inode_id(&self) -> u32 {
        ROOT_INODE_ID
    }

    pub fn inode_count(&self) -> usize {
        self.table.len()
    }

    pub fn table(&self) -> &InodeTable {
        &self.table
    }

    /// Mutable access for building trees with the directory helpers.
    pub fn table_mut(&mut self) -> &mut InodeTable {
        &mut self.table
    }

    /// `ls -lR`-style listing of the whole tree, depth first in entry order.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_dir(ROOT_INODE_ID, "", &mut out);
        out
    }

    fn dump_dir(&self, dir_id: u32, prefix: &str, out: &mut String) {
        let Some(entries) = self.table.get(dir_id).ok().and_then(Inode::entries) else {
            return;
        };
        for entry in entries {
            if entry.name == DOT_NAME || entry.name == DOTDOT_NAME {
                continue;
            }
            let Ok(inode) = self.table.get(entry.inode_id) else {
                continue;
            };
            let view = inode.view();
            let path = alloc::format!("{}/{}", prefix, entry.name);
            out.push_str(&alloc::format!(
                "{} {:>2} {:>3} {:>3} {:>6} {}\n",
                view.permissions(),
                view.links_cnt,
                view.uid,
                view.gid,
                view.size,
                path
            ));
            if inode.is_dir() {
                self.dump_dir(inode.id, &path, out);
            }
        }
    }
}
