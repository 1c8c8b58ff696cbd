//! CLI command implementations.

pub mod common;
pub mod decode;
pub mod encode;
pub mod gates;
pub mod version;
