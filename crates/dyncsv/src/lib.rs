#![doc = include_str!("../README.md")]

pub mod error;
pub mod header;
pub mod options;
pub mod row;
pub mod table;

mod lines;
mod split;

pub use crate::error::{Error, Result};
pub use crate::header::Header;
pub use crate::options::SEPARATOR;
pub use crate::row::{Entries, Entry, Key, Row};
pub use crate::table::Table;
