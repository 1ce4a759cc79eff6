use std::io::Write;

use dyncsv::{Error, Table};
use tempfile::NamedTempFile;

#[test]
fn empty_header_line() {
    let err = Table::parse("\n1,2\n").unwrap_err();
    assert!(matches!(err, Error::EmptyHeader));
    assert!(err.is_data_format());
    assert!(err.to_string().contains("header"));
}

#[test]
fn whitespace_header_line() {
    let err = Table::parse("  \t \na,b\n").unwrap_err();
    assert!(matches!(err, Error::EmptyHeader));
}

#[test]
fn byte_order_mark_only_header() {
    let err = Table::parse("\u{feff}\n1\n").unwrap_err();
    assert!(matches!(err, Error::EmptyHeader));
}

#[test]
fn empty_input() {
    let err = Table::parse("").unwrap_err();
    assert!(matches!(err, Error::EmptyHeader));
}

#[test]
fn short_row_fails_whole_load() {
    let err = Table::parse("a,b,c\n1,2,3\n4,5\n6,7,8\n").unwrap_err();
    assert!(err.is_data_format());
    assert_eq!(err.line(), Some(3));
    match err {
        Error::Line { line, source } => {
            assert_eq!(line, 3);
            assert!(matches!(
                *source,
                Error::ColumnCount {
                    expected: 3,
                    found: 2
                }
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn long_row_fails_whole_load() {
    let err = Table::parse("a,b\n1,2,3\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 2"));
    assert!(msg.contains("expected 2 fields, found 3"));
}

#[test]
fn line_numbers_count_blank_lines() {
    let err = Table::parse("a,b\n\n\n1\n").unwrap_err();
    assert_eq!(err.line(), Some(4));
}

#[test]
fn line_numbers_follow_lone_cr() {
    let err = Table::parse("a,b\r1,2\r3\r").unwrap_err();
    assert_eq!(err.line(), Some(3));
}

#[test]
fn blank_path_is_invalid_argument() {
    for p in ["", "   "] {
        let err = Table::load(p).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument("path")));
        assert!(!err.is_data_format());
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Table::load(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn invalid_utf8_is_io_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(b"a,b\n\xff\xfe,1\n")?;
    let err = Table::load(tmp.path()).unwrap_err();
    match err {
        Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}
