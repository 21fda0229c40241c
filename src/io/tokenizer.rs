//! Delimited-line tokenizer
//!
//! The persisted format nests three separators: `,` between top-level columns,
//! `|` between the item segments of a legacy order item block, and `;` between
//! the four sub-fields of one embedded item. Every split keeps empty fields and
//! never trims.

/// A separator used by the persisted format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `,` between top-level columns
    Field,
    /// `|` between item segments
    Segment,
    /// `;` between the sub-fields of one item
    SubField,
}

impl Separator {
    /// The separator character
    pub const fn as_char(self) -> char {
        match self {
            Separator::Field => ',',
            Separator::Segment => '|',
            Separator::SubField => ';',
        }
    }

    /// The separator as a string slice
    pub const fn as_str(self) -> &'static str {
        match self {
            Separator::Field => ",",
            Separator::Segment => "|",
            Separator::SubField => ";",
        }
    }
}

/// Split `line` on `separator`, preserving empty fields
///
/// `"a,,b,"` yields `["a", "", "b", ""]`; an empty line yields one empty field.
pub fn split(line: &str, separator: Separator) -> Vec<&str> {
    line.split(separator.as_char()).collect()
}

/// Join fields with `separator`
pub fn join<S: AsRef<str>>(fields: &[S], separator: Separator) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(separator.as_char());
        }
        out.push_str(field.as_ref());
    }
    out
}

/// Replace every occurrence of `separator` in free text with `replacement`
///
/// Used where free text must fit in a single column; the substitution is
/// not reversible.
pub fn neutralize(text: &str, separator: Separator, replacement: Separator) -> String {
    text.replace(separator.as_char(), replacement.as_str())
}
