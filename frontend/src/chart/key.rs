use std::fmt;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;

/// Identifier linking a slice to its hover-revealed label.
///
/// Built from the record label, so equal labels in different months share a
/// key and are revealed together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliceKey(String);

impl SliceKey {
    pub fn from_label(label: &str) -> Self {
        Self(STANDARD_NO_PAD.encode(latin1_bytes(label)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// one byte per char when the label fits Latin-1, UTF-8 otherwise
fn latin1_bytes(label: &str) -> Vec<u8> {
    label
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect::<Option<Vec<u8>>>()
        .unwrap_or_else(|| label.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_stripped() {
        assert_eq!(SliceKey::from_label("Rent").as_str(), "UmVudA");
        assert_eq!(SliceKey::from_label("Food").as_str(), "Rm9vZA");
        assert_eq!(SliceKey::from_label("Gas").as_str(), "R2Fz");
    }

    #[test]
    fn latin1_labels_encode_one_byte_per_char() {
        // "Café" as Latin-1 is 43 61 66 e9
        assert_eq!(SliceKey::from_label("Café").as_str(), "Q2Fm6Q");
        assert_ne!(SliceKey::from_label("Café"), SliceKey::from_label("Cafe"));
    }

    #[test]
    fn wide_labels_fall_back_to_utf8() {
        assert_eq!(SliceKey::from_label("€").as_str(), "4oKs");
    }
}
