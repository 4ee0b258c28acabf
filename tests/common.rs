//! Common utilities for tests

#![allow(unused)]

use unixfs::FileSystem;

pub const ORANGE: &str = "\x1b[38;5;214m";
pub const RESET: &str = "\x1b[0m";

/// Provides a macro for logging messages during tests.
/// e.g. log!("placeholder") -> println!("[test] placeholder");
#[macro_export]
macro_rules! log {
    ($msg:expr) => {
        println!("{}[test] {}{}", crate::common::ORANGE, $msg, crate::common::RESET)
    };
    ($msg:expr, $($arg:tt)*) => {
        println!("{}[test] {}{}", crate::common::ORANGE, format!($msg, $($arg)*), crate::common::RESET)
    };
}

/// Routes the crate's `log` output to the test harness. Safe to call from every test.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A freshly bootstrapped filesystem.
pub fn fresh_fs() -> FileSystem {
    init_logger();
    FileSystem::format().unwrap()
}

/// Names of a directory's entries, in order.
pub fn entry_names(fs: &FileSystem, path: &str) -> Vec<String> {
    fs.readdir(path)
        .unwrap()
        .into_iter()
        .map(|entry| entry.name)
        .collect()
}
