//! Assembly of raw listings into an [`OutputTable`].

use jobsync_core::OutputTable;
use serde_json::Value;

use crate::error::TableBuildError;
use crate::extract::extract_row;

/// Flattens every listing in `raws`, preserving input order.
///
/// **All-or-nothing semantics**: the first listing that fails extraction
/// aborts the build and no partial table is returned.
///
/// # Errors
///
/// Returns [`TableBuildError`] carrying the index of the offending listing
/// and the underlying [`crate::DataShapeError`].
pub fn build_table(raws: &[Value]) -> Result<OutputTable, TableBuildError> {
    let mut table = OutputTable::with_capacity(raws.len());

    for (index, raw) in raws.iter().enumerate() {
        let row = extract_row(raw).map_err(|source| {
            tracing::error!(index, error = %source, "failed to extract listing");
            TableBuildError { index, source }
        })?;
        table.push(row);
    }

    tracing::debug!(rows = table.len(), "built output table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use jobsync_core::{COLUMNS, NOT_AVAILABLE};
    use serde_json::json;

    use super::*;
    use crate::error::DataShapeError;

    fn listing(date: &str, name: &str, location: &str) -> Value {
        json!({
            "publication_date": date,
            "type": "external",
            "name": name,
            "company": { "name": "Acme" },
            "locations": [{ "name": location }]
        })
    }

    #[test]
    fn builds_one_row_per_listing_in_order() {
        let raws = vec![
            listing("2023-05-01T00:00:00Z", "First", "Austin,USA"),
            listing("2023-05-02T00:00:00Z", "Second", "Remote"),
            listing("2023-05-03T00:00:00Z", "Third", "New York, NY, USA"),
        ];

        let table = build_table(&raws).unwrap();

        assert_eq!(table.len(), 3);
        let names: Vec<_> = table.iter().map(|r| r.job.as_deref()).collect();
        assert_eq!(names, vec![Some("First"), Some("Second"), Some("Third")]);
        assert_eq!(table.rows()[1].city, NOT_AVAILABLE);
        assert_eq!(table.rows()[2].country, " NY, USA");
        assert_eq!(table.columns(), &COLUMNS);
    }

    #[test]
    fn empty_collection_builds_empty_table() {
        let table = build_table(&[]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn keeps_duplicate_listings() {
        let dup = listing("2023-05-01T00:00:00Z", "Same", "Austin,USA");
        let table = build_table(&[dup.clone(), dup]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], table.rows()[1]);
    }

    #[test]
    fn aborts_on_listing_missing_publication_date() {
        let raws = vec![
            listing("2023-05-01T00:00:00Z", "A", "Austin,USA"),
            listing("2023-05-02T00:00:00Z", "B", "Austin,USA"),
            listing("2023-05-03T00:00:00Z", "C", "Austin,USA"),
            json!({ "name": "No date", "type": "external" }),
        ];

        let err = build_table(&raws).unwrap_err();

        assert_eq!(err.index, 3);
        assert_eq!(
            err.source,
            DataShapeError::MissingField {
                field: "publication_date"
            }
        );
    }

    #[test]
    fn aborts_on_first_bad_listing() {
        let raws = vec![
            json!("not an object"),
            json!({ "name": "also missing a date" }),
        ];
        let err = build_table(&raws).unwrap_err();
        assert_eq!(err.index, 0);
        assert!(matches!(err.source, DataShapeError::NotAnObject { .. }));
        assert!(err.to_string().contains("listing 0"));
    }
}
