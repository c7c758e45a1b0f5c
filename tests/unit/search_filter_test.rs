// Property-based test for the query/filter layer
//
// For any non-empty query the result must be an order-preserving subset
// where every item matches at least one configured field, and the empty
// query must be the identity.

use proptest::prelude::*;

use firmdesk::core::search::{filter, Searchable};

#[derive(Clone, Debug, PartialEq)]
struct Record {
    name: String,
    email: String,
}

impl Searchable for Record {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

fn record_strategy() -> impl Strategy<Value = Record> {
    ("[a-zA-Z ]{0,12}", "[a-z0-9@.]{0,16}").prop_map(|(name, email)| Record { name, email })
}

proptest! {
    #[test]
    fn result_is_subset_no_longer_than_input(
        records in proptest::collection::vec(record_strategy(), 0..20),
        query in "[a-zA-Z0-9@. ]{1,8}",
    ) {
        let hits = filter(&records, &query);

        prop_assert!(hits.len() <= records.len());
        for hit in &hits {
            prop_assert!(records.contains(hit));
        }
    }

    #[test]
    fn every_hit_matches_some_field(
        records in proptest::collection::vec(record_strategy(), 0..20),
        query in "[a-zA-Z0-9@. ]{1,8}",
    ) {
        let trimmed = query.trim().to_lowercase();
        prop_assume!(!trimmed.is_empty());

        for hit in filter(&records, &query) {
            let matched = hit
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&trimmed));
            prop_assert!(matched, "unmatched hit {:?} for query {:?}", hit, query);
        }
    }

    #[test]
    fn empty_query_is_identity(
        records in proptest::collection::vec(record_strategy(), 0..20),
    ) {
        prop_assert_eq!(filter(&records, ""), records.clone());
        prop_assert_eq!(filter(&records, "  "), records);
    }

    #[test]
    fn order_is_preserved(
        records in proptest::collection::vec(record_strategy(), 0..20),
        query in "[a-z]{1,4}",
    ) {
        let hits = filter(&records, &query);

        // Positions of the hits in the original input must be increasing
        let mut last_position = 0usize;
        for hit in &hits {
            let position = records
                .iter()
                .skip(last_position)
                .position(|r| r == hit)
                .map(|offset| last_position + offset);
            prop_assert!(position.is_some());
            last_position = position.unwrap() + 1;
        }
    }

    #[test]
    fn matching_is_case_insensitive(
        records in proptest::collection::vec(record_strategy(), 1..20),
        query in "[a-zA-Z]{1,6}",
    ) {
        let lower = filter(&records, &query.to_lowercase());
        let upper = filter(&records, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }
}
