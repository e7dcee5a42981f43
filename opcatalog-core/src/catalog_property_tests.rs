// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Property tests for the catalog store and category index

use proptest::prelude::*;
use proptest::test_runner::Config;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::operation::OperationRecord;

const CATEGORIES: [&str; 4] = [
    "Authentication and runtime",
    "Messaging and commands",
    "Account data and experiments",
    "Applications, commerce, and interactions",
];

fn build(categories: &[usize]) -> Catalog {
    let records = categories
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            OperationRecord::new(
                format!("op_{}", i),
                format!("Operation {}", i),
                CATEGORIES[c],
                "Generated operation.",
            )
        })
        .collect();
    Catalog::new(records).expect("generated ids are unique")
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn list_length_equals_sum_of_category_counts(
        categories in prop::collection::vec(0usize..CATEGORIES.len(), 0..40)
    ) {
        let catalog = build(&categories);
        let index = catalog.categories();
        prop_assert_eq!(catalog.list_all().len(), index.total());
        prop_assert_eq!(index.iter().map(|(_, count)| count).sum::<usize>(), catalog.len());
    }

    #[test]
    fn categories_are_idempotent(
        categories in prop::collection::vec(0usize..CATEGORIES.len(), 0..40)
    ) {
        let catalog = build(&categories);
        prop_assert_eq!(catalog.categories(), catalog.categories());
    }

    #[test]
    fn every_listed_id_round_trips_through_get(
        categories in prop::collection::vec(0usize..CATEGORIES.len(), 0..40)
    ) {
        let catalog = build(&categories);
        for record in catalog.list_all() {
            let found = catalog.get(&record.id).expect("listed id must resolve");
            prop_assert_eq!(&found.id, &record.id);
        }
    }

    #[test]
    fn category_filter_partitions_the_catalog(
        categories in prop::collection::vec(0usize..CATEGORIES.len(), 0..40)
    ) {
        let catalog = build(&categories);
        let mut seen = 0;
        for category in CATEGORIES {
            let members = catalog.list_by_category(category);
            prop_assert!(members.iter().all(|op| op.category == category));
            prop_assert_eq!(Some(members.len()).filter(|&n| n > 0), catalog.categories().count(category));
            seen += members.len();
        }
        prop_assert_eq!(seen, catalog.len());
    }

    #[test]
    fn unknown_ids_are_not_found(
        categories in prop::collection::vec(0usize..CATEGORIES.len(), 0..10),
        probe in "[a-z_]{1,16}"
    ) {
        // generated ids always contain a digit, so `probe` never matches
        let catalog = build(&categories);
        prop_assert_eq!(
            catalog.get(&probe).unwrap_err(),
            CatalogError::NotFound { id: probe.clone() }
        );
    }

    #[test]
    fn repeating_any_id_fails_construction(
        categories in prop::collection::vec(0usize..CATEGORIES.len(), 1..20),
        pick in any::<prop::sample::Index>()
    ) {
        let catalog = build(&categories);
        let mut records = catalog.list_all().to_vec();
        let duplicate = pick.get(&records).clone();
        records.push(duplicate.clone());
        prop_assert_eq!(
            Catalog::new(records).unwrap_err(),
            CatalogError::DuplicateId { id: duplicate.id }
        );
    }
}
