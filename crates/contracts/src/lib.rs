//! Types shared between the FileFlow webview and its backend process.
//!
//! Nothing in this crate touches the browser or the file system, so it builds
//! and tests on any target.

pub mod commands;
pub mod domain;
pub mod enums;
pub mod shared;
