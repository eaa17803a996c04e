//! Street-suffix correction against an authored table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::CorrectionsError;

/// Known malformed street-suffix tokens paired with the canonical suffix
/// they were sampled as in the audited dataset. Authored ahead of time,
/// never derived from input.
const DEFAULT_CORRECTIONS: [(&str, &str); 15] = [
    ("St", "Street"),
    ("St.", "Street"),
    ("St,", "Street"),
    ("ST", "Street"),
    ("Street.", "Street"),
    ("st", "Street"),
    ("street", "Street"),
    ("Ave", "Avenue"),
    ("Ave.", "Avenue"),
    ("Ct", "Court"),
    ("Dr", "Drive"),
    ("Rd", "Road"),
    ("Rd.", "Road"),
    ("rd.", "Road"),
    ("Pkwy", "Parkway"),
];

/// Immutable token-to-canonical-suffix map.
///
/// Contract: canonical values are never themselves keys, which makes
/// [`correct_street_suffix`] idempotent. [`CorrectionTable::from_pairs`]
/// rejects tables that break this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionTable {
    map: BTreeMap<String, String>,
}

impl Default for CorrectionTable {
    fn default() -> Self {
        let map = DEFAULT_CORRECTIONS
            .iter()
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
            .collect();
        Self { map }
    }
}

impl CorrectionTable {
    /// Build a table from token/canonical pairs, enforcing the
    /// idempotence contract.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, CorrectionsError> {
        let map: BTreeMap<String, String> = pairs.into_iter().collect();
        for value in map.values() {
            if map.contains_key(value) {
                return Err(CorrectionsError::CanonicalIsKey {
                    value: value.clone(),
                });
            }
        }
        Ok(Self { map })
    }

    /// Load an authored table from a JSON object of token/canonical pairs.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, CorrectionsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CorrectionsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let pairs: BTreeMap<String, String> =
            serde_json::from_str(&text).map_err(|source| CorrectionsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_pairs(pairs)
    }

    /// The canonical suffix for a token, if the token is a known anomaly.
    pub fn canonical(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Replace known-anomalous whitespace-delimited tokens with their
/// canonical suffix and rejoin with single spaces.
///
/// Tokens absent from the table pass through silently: the table is
/// scoped to anomalies enumerated ahead of time, so this performs no
/// validation. Idempotent by the table's construction contract.
pub fn correct_street_suffix(table: &CorrectionTable, name: &str) -> String {
    let corrected: Vec<&str> = name
        .split_whitespace()
        .map(|token| table.canonical(token).unwrap_or(token))
        .collect();
    corrected.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrects_each_mapped_token() {
        let table = CorrectionTable::default();
        assert_eq!(
            correct_street_suffix(&table, "Massachusetts Ave"),
            "Massachusetts Avenue"
        );
        assert_eq!(correct_street_suffix(&table, "Main St."), "Main Street");
    }

    #[test]
    fn leaves_unmapped_values_unchanged() {
        let table = CorrectionTable::default();
        assert_eq!(correct_street_suffix(&table, "Harvard Square"), "Harvard Square");
        assert_eq!(correct_street_suffix(&table, ""), "");
    }

    #[test]
    fn exact_token_match_only() {
        let table = CorrectionTable::default();
        // "Stream" contains "St" but is not an exact token
        assert_eq!(correct_street_suffix(&table, "Stream Rd"), "Stream Road");
    }

    #[test]
    fn default_table_satisfies_the_contract() {
        let pairs = DEFAULT_CORRECTIONS
            .iter()
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()));
        assert!(CorrectionTable::from_pairs(pairs).is_ok());
    }

    #[test]
    fn canonical_as_key_is_rejected() {
        let pairs = [
            ("St".to_string(), "Street".to_string()),
            ("Street".to_string(), "Str".to_string()),
        ];
        assert!(matches!(
            CorrectionTable::from_pairs(pairs),
            Err(CorrectionsError::CanonicalIsKey { .. })
        ));
    }
}
