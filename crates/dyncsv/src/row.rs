use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

use crate::error::{Error, Result};
use crate::header::Header;
use crate::options::SEPARATOR;
use crate::split::{join_fields, split_fields};

/// Field selector for [`Row::get`] and [`Row::set`].
///
/// `Index` keys are positional and fail hard when out of range. `Name` keys
/// go through the header and report a miss as `None`/`false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for Key<'_> {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Name(name.as_str())
    }
}

/// One record: its own field values plus a shared handle to the header.
#[derive(Clone, PartialEq, Eq)]
pub struct Row {
    header: Header,
    fields: Vec<String>,
}

impl Row {
    /// Split `content` on [`SEPARATOR`] and bind the fields to `header`.
    pub fn new(content: &str, header: Header) -> Result<Self> {
        Self::from_fields(split_fields(content), header)
    }

    pub fn from_fields<I, S>(fields: I, header: Header) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if header.is_empty() {
            return Err(Error::InvalidArgument("header"));
        }
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.len() != header.len() {
            return Err(Error::ColumnCount {
                expected: header.len(),
                found: fields.len(),
            });
        }
        Ok(Self { header, fields })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.header.position(name)
    }

    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<Option<&str>> {
        match key.into() {
            Key::Index(i) => self.get_by_index(i).map(Some),
            Key::Name(name) => Ok(self.get_by_name(name)),
        }
    }

    /// Returns `Ok(false)` when a name key matches no column.
    pub fn set<'k>(&mut self, key: impl Into<Key<'k>>, value: impl ToString) -> Result<bool> {
        match key.into() {
            Key::Index(i) => self.set_by_index(i, value).map(|()| true),
            Key::Name(name) => Ok(self.set_by_name(name, value)),
        }
    }

    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        let i = self.header.position(name)?;
        Some(self.fields[i].as_str())
    }

    pub fn set_by_name(&mut self, name: &str, value: impl ToString) -> bool {
        match self.header.position(name) {
            Some(i) => {
                self.fields[i] = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn get_by_index(&self, index: usize) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.fields.len(),
            })
    }

    pub fn set_by_index(&mut self, index: usize, value: impl ToString) -> Result<()> {
        let len = self.fields.len();
        let slot = self
            .fields
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = value.to_string();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True if any field equals `value` exactly.
    pub fn contains(&self, value: &str) -> bool {
        self.fields.iter().any(|f| f == value)
    }

    /// Position of the first field equal to `value`.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == value)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator + Clone {
        self.fields.iter().map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn to_list(&self) -> Vec<String> {
        self.fields.clone()
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    /// Values joined by [`SEPARATOR`]. Nothing is escaped, so a value that
    /// contains the separator will not split back into the same fields.
    pub fn to_joined_string(&self) -> String {
        join_fields(&self.fields)
    }

    pub fn display_string(&self) -> String {
        self.to_joined_string()
    }

    /// Maps each column name to its value. With duplicate column names the
    /// last occurrence wins.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.header
            .iter()
            .cloned()
            .zip(self.fields.iter().cloned())
            .collect()
    }

    pub fn entries(&self) -> Entries<'_> {
        Entries {
            names: self.header.iter(),
            values: self.fields.iter(),
        }
    }

    /// `name=value` pairs joined by [`SEPARATOR`].
    pub fn debug_string(&self) -> String {
        let mut out = String::new();
        for (i, e) in self.entries().enumerate() {
            if i > 0 {
                out.push(SEPARATOR);
            }
            out.push_str(e.header);
            out.push('=');
            out.push_str(e.value);
        }
        out
    }
}

impl Index<usize> for Row {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.fields[index]
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_joined_string())
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({})", self.debug_string())
    }
}

impl From<Row> for Vec<String> {
    fn from(row: Row) -> Self {
        row.fields
    }
}

/// A `(column name, value)` pair borrowed from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry<'a> {
    pub header: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone)]
pub struct Entries<'a> {
    names: std::slice::Iter<'a, String>,
    values: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.names.next()?;
        let value = self.values.next()?;
        Some(Entry {
            header: header.as_str(),
            value: value.as_str(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let header = self.names.next_back()?;
        let value = self.values.next_back()?;
        Some(Entry {
            header: header.as_str(),
            value: value.as_str(),
        })
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a Row {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Row {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error> {
        serializer.collect_map(self.entries().map(|e| (e.header, e.value)))
    }
}
