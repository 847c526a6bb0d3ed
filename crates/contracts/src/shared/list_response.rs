//! Envelope of the staff list endpoints: `{ "data": { "data": [...], "total": N } }`

use anyhow::{anyhow, bail, Context};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// One page of records plus the server-side total
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub data: Vec<T>,
    pub total: usize,
    /// Array items that could not be read as a record (e.g. a bare number)
    pub skipped: usize,
}

/// Validates the envelope and decodes the records.
///
/// Only the envelope is checked: an item of `data.data` that does not decode
/// is dropped and counted in `skipped`, the rest of the page is kept.
pub fn parse_list_response<T: DeserializeOwned>(body: Value) -> anyhow::Result<ListPage<T>> {
    let Value::Object(mut root) = body else {
        bail!("response body is not a JSON object");
    };
    let Some(Value::Object(mut page)) = root.remove("data") else {
        bail!("response has no `data` object");
    };
    let Some(Value::Array(items)) = page.remove("data") else {
        bail!("response has no `data.data` array");
    };
    let total = page
        .get("total")
        .and_then(Value::as_u64)
        .ok_or_else(|| anyhow!("response has no non-negative integer `data.total`"))?;

    let item_count = items.len();
    let data: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<T>(item).ok())
        .collect();

    Ok(ListPage {
        skipped: item_count - data.len(),
        data,
        total: usize::try_from(total).context("`data.total` does not fit in usize")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_valid_envelope() {
        let page: ListPage<Item> =
            parse_list_response(json!({ "data": { "data": [{"id": 1}, {"id": 2}], "total": 12 } }))
                .unwrap();
        assert_eq!(page.data, vec![Item { id: 1 }, Item { id: 2 }]);
        assert_eq!(page.total, 12);
        assert_eq!(page.skipped, 0);
    }

    #[test]
    fn test_empty_page() {
        let page: ListPage<Item> =
            parse_list_response(json!({ "data": { "data": [], "total": 0 } })).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_shape_errors() {
        let cases = [
            json!([]),
            json!({ "items": [] }),
            json!({ "data": [] }),
            json!({ "data": { "total": 3 } }),
            json!({ "data": { "data": {}, "total": 3 } }),
            json!({ "data": { "data": [] } }),
            json!({ "data": { "data": [], "total": -1 } }),
            json!({ "data": { "data": [], "total": "3" } }),
        ];
        for body in cases {
            assert!(
                parse_list_response::<Item>(body.clone()).is_err(),
                "expected error for {}",
                body
            );
        }
    }

    #[test]
    fn test_bad_record_does_not_drop_page() {
        let page = parse_list_response::<Item>(
            json!({ "data": { "data": [{"id": 1}, {"id": "x"}, {"id": 3}], "total": 3 } }),
        )
        .unwrap();
        assert_eq!(page.data, vec![Item { id: 1 }, Item { id: 3 }]);
        assert_eq!(page.skipped, 1);
        assert_eq!(page.total, 3);
    }
}
