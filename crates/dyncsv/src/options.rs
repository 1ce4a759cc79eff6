/// Field separator used for splitting input lines and for re-joining rows.
///
/// Not configurable per call: every table, row and joined string in the
/// crate uses this one character.
pub const SEPARATOR: char = ',';

pub(crate) const SEPARATOR_BYTE: u8 = SEPARATOR as u8;

const _: () = assert!(SEPARATOR.is_ascii());
