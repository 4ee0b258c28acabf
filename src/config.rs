use crate::structs::Mode;

pub const ROOT_INODE_ID: u32 = 1; // Inode ID for the root directory, never reused
pub const MAX_FILE_NAME_LEN: usize = 14; // Longer names are truncated, never rejected
pub const DOT_NAME: &str = ".";
pub const DOTDOT_NAME: &str = "..";

pub const ROOT_UID: u16 = 0;
pub const ROOT_GID: u16 = 0;

// Only the owner triple is stored; group/other bits ride along untouched.
pub const DIR_PERMS: Mode = Mode::from_bits_retain(0o755);
pub const DEV_PERMS: Mode = Mode::from_bits_retain(0o666);
pub const TEXT_PERMS: Mode = Mode::from_bits_retain(0o644);
pub const GAME_PERMS: Mode = Mode::from_bits_retain(0o755);
pub const GAME_STATE_PERMS: Mode = Mode::from_bits_retain(0o666);
