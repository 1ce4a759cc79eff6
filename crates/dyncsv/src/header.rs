use std::ops::Deref;
use std::sync::Arc;

use crate::split::split_fields;

/// Ordered column names shared by every row of a table.
///
/// Cloning a `Header` clones the handle, not the names. Names are not
/// required to be unique; lookups resolve to the first match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    names: Arc<[String]>,
}

impl Header {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a raw header line on the separator.
    pub fn parse(line: &str) -> Self {
        Self {
            names: split_fields(line).into(),
        }
    }

    /// Position of the first column named exactly `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True when both handles point at the same name list.
    pub fn ptr_eq(&self, other: &Header) -> bool {
        Arc::ptr_eq(&self.names, &other.names)
    }
}

impl Deref for Header {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.names
    }
}

impl<S: Into<String>> FromIterator<S> for Header {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Header::new(iter)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Header {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.names.iter())
    }
}
