//! URN:NBN:DE related constants
//!
//! The character table follows the check digit rules of the German
//! URN:NBN namespace authority.

// =============================================================================
// Namespace
// =============================================================================

/// Namespace prefix the check digit algorithm is defined for
pub const NAMESPACE_PREFIX: &str = "urn:nbn:de";

// =============================================================================
// Character substitution table
// =============================================================================

/// Number of characters in the substitution table
pub const CHAR_TABLE_SIZE: usize = 41;

/// Largest value in the substitution table
pub const MAX_CHAR_VALUE: u8 = 47;

/// Character to number substitution table (lowercase only)
pub const CHAR_TABLE: [(char, u8); CHAR_TABLE_SIZE] = [
    ('0', 1),
    ('1', 2),
    ('2', 3),
    ('3', 4),
    ('4', 5),
    ('5', 6),
    ('6', 7),
    ('7', 8),
    ('8', 9),
    ('9', 41),
    ('a', 18),
    ('b', 14),
    ('c', 19),
    ('d', 15),
    ('e', 16),
    ('f', 21),
    ('g', 22),
    ('h', 23),
    ('i', 24),
    ('j', 25),
    ('k', 42),
    ('l', 26),
    ('m', 27),
    ('n', 13),
    ('o', 28),
    ('p', 29),
    ('q', 31),
    ('r', 12),
    ('s', 32),
    ('t', 33),
    ('u', 11),
    ('v', 34),
    ('w', 35),
    ('x', 36),
    ('y', 37),
    ('z', 38),
    ('_', 43),
    ('.', 47),
    (':', 17),
    ('-', 39),
    ('/', 45),
];
