//! Response record types.

use crate::error::{Error, Result};
use serde::Deserialize;

/// One deposit or withdrawal record from a history endpoint.
///
/// The service returns many more fields than the client interprets; only
/// `amount` is examined, everything else is carried through untouched in
/// [`extra`](HistoryRecord::extra).
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    /// Transacted amount as a decimal string, e.g. `"1000.5"`.
    pub amount: String,
    /// All other fields of the record, unexamined.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HistoryRecord {
    /// Parses the amount as a floating-point number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the amount is not numeric.
    pub fn amount_f64(&self) -> Result<f64> {
        self.amount
            .parse()
            .map_err(|e| Error::parse(format!("invalid amount {:?}: {e}", self.amount)))
    }
}

/// Extracts the `amount` of every record, preserving order.
pub fn amounts(records: &[HistoryRecord]) -> Result<Vec<f64>> {
    records.iter().map(HistoryRecord::amount_f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_extraction_preserves_order() {
        let records: Vec<HistoryRecord> = serde_json::from_value(json!([
            { "amount": "1000.5", "currency": "KRW", "state": "accepted" },
            { "amount": "250" },
        ]))
        .unwrap();
        assert_eq!(amounts(&records).unwrap(), vec![1000.5, 250.0]);
    }

    #[test]
    fn test_missing_amount_is_parse_error() {
        let result: std::result::Result<Vec<HistoryRecord>, _> =
            serde_json::from_value(json!([{ "currency": "KRW" }]));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_amount_is_parse_error() {
        let records: Vec<HistoryRecord> =
            serde_json::from_value(json!([{ "amount": "not-a-number" }])).unwrap();
        assert!(matches!(amounts(&records), Err(Error::Parse(_))));
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let record: HistoryRecord = serde_json::from_value(json!({
            "amount": "1", "txid": "abc", "type": "deposit"
        }))
        .unwrap();
        assert_eq!(record.extra["txid"], "abc");
        assert_eq!(record.extra["type"], "deposit");
    }
}
