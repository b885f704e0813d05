//! Completeness rule for relationship id lists supplied on create.
//!
//! A create request may list the same related id more than once. Duplicates
//! collapse to a single link, so the check compares the number of rows found
//! against the number of *distinct* ids requested.

use crate::error::CoreError;
use crate::kind::EntityKind;
use crate::types::DbId;

/// Sorted, de-duplicated copy of `ids`.
pub fn distinct_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut distinct = ids.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct
}

/// Fail with [`CoreError::MissingReference`] unless every distinct requested
/// id of `target` kind was found.
pub fn ensure_all_resolved(
    target: EntityKind,
    distinct_requested: usize,
    found: usize,
) -> Result<(), CoreError> {
    if found == distinct_requested {
        Ok(())
    } else {
        Err(CoreError::MissingReference {
            relation: target.plural(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_ids_collapses_duplicates() {
        assert_eq!(distinct_ids(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn distinct_ids_of_empty_is_empty() {
        assert!(distinct_ids(&[]).is_empty());
    }

    #[test]
    fn complete_resolution_passes() {
        assert!(ensure_all_resolved(EntityKind::Film, 2, 2).is_ok());
        assert!(ensure_all_resolved(EntityKind::Film, 0, 0).is_ok());
    }

    #[test]
    fn short_resolution_names_the_relation() {
        let err = ensure_all_resolved(EntityKind::Starship, 2, 1).unwrap_err();
        match err {
            CoreError::MissingReference { relation } => assert_eq!(relation, "starships"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            ensure_all_resolved(EntityKind::Character, 1, 0)
                .unwrap_err()
                .to_string(),
            "One or more characters not found"
        );
    }

    #[test]
    fn duplicated_request_needs_only_one_row() {
        let requested = [7, 7, 7];
        let distinct = distinct_ids(&requested);
        assert!(ensure_all_resolved(EntityKind::Film, distinct.len(), 1).is_ok());
    }
}
