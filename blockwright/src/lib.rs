#![feature(error_generic_member_access)]

pub mod data;
pub mod error;
pub mod keys;
pub mod template;

pub use error::{EditError, EditErrorFast, EditErrorKind, Result};
