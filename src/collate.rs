//! Portuguese-style string ordering: case and accents are ignored at the primary level,
//! so "Álvaro" sorts with the A's and "bruno" next to "Bruno".

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Primary collation key: decomposed, combining marks stripped, lowercased.
pub fn collation_key(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compares by primary key, falling back to the raw strings so the order is total.
pub fn compare_pt_br(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
