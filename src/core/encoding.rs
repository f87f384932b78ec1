// src/core/encoding.rs
//
// Ordered text-encoding candidates for imported tables. Decoding is strict:
// a candidate that would need replacement characters is rejected so the next
// one gets a chance.

use encoding_rs::{Encoding, UTF_8};

/// A named decoding attempt. `label` is a WHATWG encoding label; the
/// ISO-8859-1 name resolves to its windows-1252 superset.
#[derive(Clone, Copy)]
pub struct Candidate {
    pub name: &'static str,
    label: &'static [u8],
}

/// Tried in this order; the first that decodes and parses wins.
pub const CANDIDATES: [Candidate; 3] = [
    Candidate { name: "utf-8", label: b"utf-8" },
    Candidate { name: "ISO-8859-1", label: b"iso-8859-1" },
    Candidate { name: "latin1", label: b"iso-8859-15" },
];

impl Candidate {
    /// Strict decode. UTF-8 input may carry a BOM; it is dropped.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        let encoding = Encoding::for_label(self.label)?;
        let bytes = if encoding == UTF_8 {
            bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
        } else {
            bytes
        };
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|cow| cow.into_owned())
    }
}
