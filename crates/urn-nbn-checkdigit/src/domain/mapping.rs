//! Character substitution lookup
//!
//! The substitution table is turned into an ASCII-indexed array at compile
//! time, so lookups need no hashing and the table can be shared freely
//! between threads.

use crate::constants::{CHAR_TABLE, CHAR_TABLE_SIZE};

/// Lookup array indexed by ASCII code (0 = unmapped)
static CHAR_LOOKUP: [u8; 128] = build_lookup();

const fn build_lookup() -> [u8; 128] {
    let mut lookup = [0u8; 128];
    let mut i = 0;
    while i < CHAR_TABLE_SIZE {
        let (c, value) = CHAR_TABLE[i];
        lookup[c as usize] = value;
        i += 1;
    }
    lookup
}

/// Get the substitution value of a character
///
/// Uppercase ASCII letters are folded to lowercase. Only ASCII folding is
/// applied, so non-ASCII characters never alias a table entry.
/// Returns `None` for characters outside the table.
#[inline]
pub fn char_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match CHAR_LOOKUP[c.to_ascii_lowercase() as usize] {
        0 => None,
        value => Some(value),
    }
}
