//! Line reading that ends a line at `\n`, `\r\n` or a lone `\r`.

use std::io::{self, BufRead, ErrorKind};

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_line_end(b: &[u8]) -> Option<usize> {
    memchr::memchr2(b'\n', b'\r', b)
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_line_end(b: &[u8]) -> Option<usize> {
    b.iter().position(|&c| c == b'\n' || c == b'\r')
}

pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
}

pub fn lines<R: BufRead>(reader: R) -> Lines<R> {
    Lines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Lines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let mut pending_cr = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(b) => b,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                if self.buf.is_empty() && !pending_cr {
                    return Ok(None);
                }
                break;
            }
            if pending_cr {
                if available[0] == b'\n' {
                    self.reader.consume(1);
                }
                break;
            }
            match find_line_end(available) {
                Some(i) => {
                    let end = available[i];
                    self.buf.extend_from_slice(&available[..i]);
                    self.reader.consume(i + 1);
                    if end == b'\n' {
                        break;
                    }
                    pending_cr = true;
                }
                None => {
                    let n = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(n);
                }
            }
        }
        let bytes = std::mem::take(&mut self.buf);
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}
