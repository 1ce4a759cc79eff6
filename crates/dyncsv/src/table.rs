use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::header::Header;
use crate::lines::lines;
use crate::row::Row;
use crate::split::is_blank;

const BOM: char = '\u{feff}';

/// A parsed file: the header line plus one [`Row`] per non-blank line.
#[derive(Debug, Clone)]
pub struct Table {
    header: Header,
    rows: Vec<Row>,
    count: usize,
}

impl Table {
    /// Open `path` and load it with [`Table::from_reader`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if is_blank(&path.to_string_lossy()) {
            return Err(Error::InvalidArgument("path"));
        }
        debug!(path = %path.display(), "loading table");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a header line and then every remaining line of `reader`.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. A UTF-8 byte-order mark in
    /// front of the header is dropped.
    ///
    /// The reader is consumed and dropped before returning, on success or
    /// failure. Any row whose field count differs from the header aborts the
    /// load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = lines(reader);

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(Error::EmptyHeader),
        };
        let header = header.strip_prefix(BOM).unwrap_or(&header);
        if is_blank(header) {
            return Err(Error::EmptyHeader);
        }
        let header = Header::parse(header);

        let mut rows = Vec::new();
        let mut count = 0usize;
        for (idx, line) in lines.enumerate() {
            let line = line?;
            // Counts every line after the header, blank ones included.
            count += 1;
            let line_no = idx + 2;
            if is_blank(&line) {
                trace!(line = line_no, "skipping blank line");
                continue;
            }
            let row = Row::new(&line, header.clone()).map_err(|e| e.at_line(line_no))?;
            rows.push(row);
        }

        debug!(
            columns = header.len(),
            rows = rows.len(),
            lines = count,
            "table loaded"
        );
        Ok(Self {
            header,
            rows,
            count,
        })
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn headers(&self) -> &[String] {
        &self.header
    }

    /// Shared header handle; every row of this table points at the same one.
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Number of lines read after the header, including blank lines that
    /// produced no row. Can exceed [`Table::len`].
    pub fn row_count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Row> {
        self.rows.iter_mut()
    }
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a mut Table {
    type Item = &'a mut Row;
    type IntoIter = std::slice::IterMut<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter_mut()
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Table {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.rows.iter())
    }
}
