//! # Directory Search
//!
//! Pure filtering over the resolved orphanage list. No tokenization, no fuzzy
//! matching, no ranking: result order equals input order, and an empty query
//! matches every record.

use shared::Orphanage;

/// Filter the orphanage list by name and location.
///
/// A record matches when its name contains `name_query` AND its location
/// contains `location_query`, both case-insensitively. Pure function: no
/// side effects, no I/O.
pub fn filter_orphanages(
    orphanages: &[Orphanage],
    name_query: &str,
    location_query: &str,
) -> Vec<Orphanage> {
    let name_query = name_query.to_lowercase();
    let location_query = location_query.to_lowercase();

    orphanages
        .iter()
        .filter(|org| {
            let match_name = org.name.to_lowercase().contains(&name_query);
            let match_location = org.location.to_lowercase().contains(&location_query);
            match_name && match_location
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::seed;

    #[test]
    fn test_empty_queries_return_the_full_list() {
        let orphanages = seed::orphanages();
        let results = filter_orphanages(&orphanages, "", "");
        assert_eq!(results, orphanages);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let orphanages = seed::orphanages();
        let upper = filter_orphanages(&orphanages, "SUN", "");
        let lower = filter_orphanages(&orphanages, "sun", "");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].name, "Sunshine Children's Centre");
    }

    #[test]
    fn test_both_queries_must_match() {
        let orphanages = seed::orphanages();
        // "Hope" matches Hope Haven's name but not a London location
        let results = filter_orphanages(&orphanages, "Hope", "London");
        assert!(results.is_empty());
    }

    #[test]
    fn test_name_query_finds_hope_haven() {
        let orphanages = seed::orphanages();
        let results = filter_orphanages(&orphanages, "Hope", "");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Hope Haven");
    }

    #[test]
    fn test_unmatched_query_yields_empty_list() {
        let orphanages = seed::orphanages();
        let results = filter_orphanages(&orphanages, "zzz", "");
        assert!(results.is_empty());
    }

    #[test]
    fn test_results_preserve_input_order() {
        let orphanages = seed::orphanages();
        // Both Nairobi and Mumbai records match an empty name query with "a" in location
        let results = filter_orphanages(&orphanages, "", "a");
        let positions: Vec<usize> = results
            .iter()
            .map(|r| orphanages.iter().position(|o| o.id == r.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_empty_source_yields_empty_result() {
        let results = filter_orphanages(&[], "anything", "anywhere");
        assert!(results.is_empty());
    }
}
