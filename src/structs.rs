use alloc::string::String;
use alloc::vec::Vec;

use bitflags::bitflags;

bitflags! {
    /// Type-and-permission bits of an inode.
    /// Values are fixed for compatibility with externally persisted fixtures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Mode: u16 {
        const ALLOCATED = 0o100000;
        const TYPE_MASK = 0o060000;
        const DIRECTORY = 0o040000;
        const CHAR_DEVICE = 0o020000;
        const READ = 0o400;
        const WRITE = 0o200;
        const EXECUTE = 0o100;
    }
}

impl Mode {
    pub const RW: Self = Self::READ.union(Self::WRITE);
    pub const RX: Self = Self::READ.union(Self::EXECUTE);
    pub const RWX: Self = Self::RW.union(Self::EXECUTE);

    /// Type bits only. Regular files have none set.
    pub fn file_type(self) -> FileType {
        let bits = self.bits() & Self::TYPE_MASK.bits();
        if bits == Self::DIRECTORY.bits() {
            FileType::Directory
        } else if bits == Self::CHAR_DEVICE.bits() {
            FileType::CharDevice
        } else {
            FileType::Regular
        }
    }

    /// Everything except the allocated flag and the type bits.
    pub fn permissions(self) -> Self {
        self.difference(Self::ALLOCATED | Self::TYPE_MASK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Regular,
    Directory,
    CharDevice,
}

impl FileType {
    pub fn mode_bits(self) -> Mode {
        match self {
            FileType::Regular => Mode::empty(),
            FileType::Directory => Mode::DIRECTORY,
            FileType::CharDevice => Mode::CHAR_DEVICE,
        }
    }

    fn type_char(self) -> char {
        match self {
            FileType::Regular => '-',
            FileType::Directory => 'd',
            FileType::CharDevice => 'c',
        }
    }
}

/// A (child inode id, name) pair stored in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub inode_id: u32,
    pub name: String,
}

/// What an inode holds besides its metadata.
/// A directory never carries payload bytes and a file never carries entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InodeData {
    Regular { payload: Vec<u8> },
    Directory { entries: Vec<DirEntry> },
    CharDevice,
}

impl InodeData {
    pub fn empty(ftype: FileType) -> Self {
        match ftype {
            FileType::Regular => InodeData::Regular { payload: Vec::new() },
            FileType::Directory => InodeData::Directory { entries: Vec::new() },
            FileType::CharDevice => InodeData::CharDevice,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Inode {
    pub id: u32,
    pub mode: Mode,
    pub links_cnt: u16,
    pub uid: u16,
    pub gid: u16,
    pub size: u64,
    pub atime: u64,
    pub mtime: u64,
    pub data: InodeData,
}

impl Inode {
    pub fn ftype(&self) -> FileType {
        self.mode.file_type()
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.data, InodeData::Directory { .. })
    }

    pub fn entries(&self) -> Option<&[DirEntry]> {
        match &self.data {
            InodeData::Directory { entries } => Some(entries),
            _ => None,
        }
    }

    pub fn view(&self) -> InodeView {
        InodeView {
            id: self.id,
            mode: self.mode,
            links_cnt: self.links_cnt,
            uid: self.uid,
            gid: self.gid,
            size: self.size,
            atime: self.atime,
            mtime: self.mtime,
        }
    }
}

/// Metadata handed to collaborators by `stat` and `readdir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InodeView {
    pub id: u32,
    pub mode: Mode,
    pub links_cnt: u16,
    pub uid: u16,
    pub gid: u16,
    pub size: u64,
    pub atime: u64,
    pub mtime: u64,
}

impl InodeView {
    pub fn ftype(&self) -> FileType {
        self.mode.file_type()
    }

    pub fn is_dir(&self) -> bool {
        self.ftype() == FileType::Directory
    }

    pub fn is_regular(&self) -> bool {
        self.ftype() == FileType::Regular
    }

    pub fn is_char_device(&self) -> bool {
        self.ftype() == FileType::CharDevice
    }

    pub fn is_executable(&self) -> bool {
        self.mode.contains(Mode::EXECUTE)
    }

    /// Renders `<type>rwxrwxrwx`. Owner, group and other all come from the
    /// single stored triple, as on the historical system.
    pub fn permissions(&self) -> String {
        let mut triple = String::with_capacity(3);
        triple.push(if self.mode.contains(Mode::READ) { 'r' } else { '-' });
        triple.push(if self.mode.contains(Mode::WRITE) { 'w' } else { '-' });
        triple.push(if self.mode.contains(Mode::EXECUTE) { 'x' } else { '-' });

        let mut out = String::with_capacity(10);
        out.push(self.ftype().type_char());
        for _ in 0..3 {
            out.push_str(&triple);
        }
        out
    }
}

/// One line of a `readdir` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub name: String,
    pub inode: InodeView,
}

#[cfg(test)]
mod test {
    use super::*;

    fn view(mode: Mode) -> InodeView {
        InodeView {
            id: 2,
            mode,
            links_cnt: 1,
            uid: 0,
            gid: 0,
            size: 0,
            atime: 0,
            mtime: 0,
        }
    }

    #[test]
    fn test_mode_values() {
        assert_eq!(Mode::ALLOCATED.bits(), 0o100000);
        assert_eq!(Mode::TYPE_MASK.bits(), 0o60000);
        assert_eq!(Mode::DIRECTORY.bits(), 0o40000);
        assert_eq!(Mode::CHAR_DEVICE.bits(), 0o20000);
        assert_eq!(Mode::READ.bits(), 0o400);
        assert_eq!(Mode::WRITE.bits(), 0o200);
        assert_eq!(Mode::EXECUTE.bits(), 0o100);
    }

    #[test]
    fn test_file_type_from_mode() {
        assert_eq!((Mode::ALLOCATED | Mode::DIRECTORY).file_type(), FileType::Directory);
        assert_eq!((Mode::ALLOCATED | Mode::CHAR_DEVICE).file_type(), FileType::CharDevice);
        assert_eq!((Mode::ALLOCATED | Mode::RW).file_type(), FileType::Regular);
    }

    #[test]
    fn test_permission_string() {
        let dir = view(Mode::ALLOCATED | Mode::DIRECTORY | Mode::from_bits_retain(0o755));
        assert_eq!(dir.permissions(), "drwxrwxrwx");
        assert!(dir.is_executable());

        let file = view(Mode::ALLOCATED | Mode::from_bits_retain(0o644));
        assert_eq!(file.permissions(), "-rw-rw-rw-");
        assert!(!file.is_executable());

        let dev = view(Mode::ALLOCATED | Mode::CHAR_DEVICE | Mode::READ);
        assert_eq!(dev.permissions(), "cr--r--r--");
    }

    #[test]
    fn test_permissions_strip_type() {
        let mode = Mode::ALLOCATED | Mode::DIRECTORY | Mode::from_bits_retain(0o644);
        assert_eq!(mode.permissions().bits(), 0o644);
    }
}
