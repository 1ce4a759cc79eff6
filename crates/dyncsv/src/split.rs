//! Raw field splitting. No quoting, no trimming: every separator starts a new
//! field, so `n` separators always produce `n + 1` fields.

use crate::options::{SEPARATOR, SEPARATOR_BYTE};

#[inline]
#[cfg(feature = "perf_memchr")]
pub fn split_fields(line: &str) -> Vec<String> {
    let b = line.as_bytes();
    let mut out = Vec::with_capacity(memchr::memchr_iter(SEPARATOR_BYTE, b).count() + 1);
    let mut start = 0usize;
    for idx in memchr::memchr_iter(SEPARATOR_BYTE, b) {
        out.push(line[start..idx].to_string());
        start = idx + 1;
    }
    out.push(line[start..].to_string());
    out
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
pub fn split_fields(line: &str) -> Vec<String> {
    let n = line.bytes().filter(|&c| c == SEPARATOR_BYTE).count();
    let mut out = Vec::with_capacity(n + 1);
    out.extend(line.split(SEPARATOR).map(str::to_string));
    out
}

/// Blank means empty or made only of whitespace; such lines carry no row.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let mut out = String::with_capacity(fields.iter().map(|f| f.as_ref().len() + 1).sum());
    for (i, f) in fields.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(f.as_ref());
    }
    out
}
