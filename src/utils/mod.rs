//! Shared helpers

pub mod paths;

pub use paths::{module_key, relative_to, to_slash, ROOT_MODULE};
