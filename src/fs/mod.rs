//! Filesystem utilities for licensegen.

pub mod atomic;

pub use atomic::atomic_write_file;
