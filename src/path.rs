//! Path resolution and manipulation utilities.

use alloc::string::String;

use log::trace;

use crate::config::ROOT_INODE_ID;
use crate::directory::dir_lookup;
use crate::inode::InodeTable;
use crate::Inode;

/// Resolves an absolute path to its inode, walking one segment at a time
/// from the root. Empty segments are skipped, so `//usr//games/` and
/// `/usr/games` name the same inode. Returns `None` on an empty or relative
/// path, on a missing segment, or when a non-final segment is not a directory.
pub fn namei<'a>(table: &'a InodeTable, path: &str) -> Option<&'a Inode> {
    if !path.starts_with('/') {
        trace!("[namei] {:?}: not an absolute path", path);
        return None;
    }

    let mut current = table.get(ROOT_INODE_ID).ok()?;
    if path == "/" {
        return Some(current);
    }

    for component in path.split('/').filter(|s| !s.is_empty()) {
        if !current.is_dir() {
            trace!("[namei] {:?}: inode {} is not a directory", path, current.id);
            return None;
        }
        let next_id = dir_lookup(current, component)?;
        current = table.get(next_id).ok()?;
    }

    Some(current)
}

/// Splits a path into its parent path and final component.
/// Trailing slashes are ignored: `/usr/games/` gives `("/usr", "games")`.
pub fn split(path: &str) -> (String, String) {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => (String::from("/"), String::from(&trimmed[1..])),
        Some(idx) => (String::from(&trimmed[..idx]), String::from(&trimmed[idx + 1..])),
        None => (String::from("/"), String::from(trimmed)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("/etc/passwd"), ("/etc".into(), "passwd".into()));
        assert_eq!(split("/tmp"), ("/".into(), "tmp".into()));
        assert_eq!(split("/usr/games/"), ("/usr".into(), "games".into()));
        assert_eq!(split("/"), ("/".into(), "".into()));
        assert_eq!(split("motd"), ("/".into(), "motd".into()));
    }
}
