use crate::dashboard::domain::{
    field_is_broken, FilterState, Inventory, FIELD_CPAN, FIELD_CPAN_VERSION,
};

/// FilterEngine - Reduces the sorted id list to the ids matching the filters
///
/// Stateless: every call receives the full id list and the current
/// [`FilterState`]. Each stage keeps the input order.
pub struct FilterEngine;

impl FilterEngine {
    /// Applies search, outdated, non-indexed and broken filters in sequence
    ///
    /// # Arguments
    /// * `ids` - All identifiers, already sorted
    /// * `inventory` - Records to inspect for the flag filters
    /// * `state` - Current filter inputs
    ///
    /// # Returns
    /// The visible identifiers, in input order
    pub fn apply(ids: &[String], inventory: &Inventory, state: &FilterState) -> Vec<String> {
        let mut visible: Vec<String> = ids.to_vec();

        let query = state.normalized_search();
        if !query.is_empty() {
            visible.retain(|id| id.to_lowercase().contains(&query));
        }

        if state.only_outdated {
            visible.retain(|id| Self::is_outdated(inventory, id));
        }

        if state.only_noncpan {
            visible.retain(|id| !Self::is_indexed(inventory, id));
        }

        if state.only_broken {
            visible.retain(|id| Self::is_broken(inventory, id));
        }

        visible
    }

    /// A newer release exists on the public index
    pub fn is_outdated(inventory: &Inventory, id: &str) -> bool {
        inventory
            .get(id)
            .is_some_and(|record| record.contains_key(FIELD_CPAN_VERSION))
    }

    /// The package is tracked on the public index
    pub fn is_indexed(inventory: &Inventory, id: &str) -> bool {
        inventory
            .get(id)
            .is_some_and(|record| record.contains_key(FIELD_CPAN))
    }

    /// Some field, or some platform inside a runtime-version field, carries
    /// the broken sentinel
    pub fn is_broken(inventory: &Inventory, id: &str) -> bool {
        inventory
            .get(id)
            .is_some_and(|record| record.values().any(field_is_broken))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario() -> (Inventory, Vec<String>) {
        let inventory = Inventory::from_value(json!({
            "A=1.0": {"spec": 1, "source": 1, "cpan": 1},
            "A=2.0": {"spec": 1, "source": 0, "cpan_version": "2.1"}
        }))
        .unwrap();
        let ids = inventory.sorted_ids();
        (inventory, ids)
    }

    fn modules() -> (Inventory, Vec<String>) {
        let inventory = Inventory::from_value(json!({
            "perl/Foo-Bar=1.0": {"spec": 1, "5.30": {"linux": 1, "darwin": 0}},
            "perl/Foo-Baz=0.1": {"spec": 1, "5.30": {"linux": 1, "darwin": 1}, "cpan": 1},
            "perl/Other=3": {"spec": 1, "5.30": {"linux": 1}}
        }))
        .unwrap();
        let ids = inventory.sorted_ids();
        (inventory, ids)
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let (inventory, ids) = scenario();
        let visible = FilterEngine::apply(&ids, &inventory, &FilterState::default());
        assert_eq!(visible, ids);
    }

    #[test]
    fn test_only_outdated() {
        let (inventory, ids) = scenario();
        let state = FilterState {
            only_outdated: true,
            ..Default::default()
        };
        assert_eq!(FilterEngine::apply(&ids, &inventory, &state), vec!["A=2.0"]);
    }

    #[test]
    fn test_only_broken_flat_zero() {
        let (inventory, ids) = scenario();
        let state = FilterState {
            only_broken: true,
            ..Default::default()
        };
        assert_eq!(FilterEngine::apply(&ids, &inventory, &state), vec!["A=2.0"]);
    }

    #[test]
    fn test_only_broken_nested_zero() {
        let (inventory, ids) = modules();
        let state = FilterState {
            only_broken: true,
            ..Default::default()
        };
        assert_eq!(
            FilterEngine::apply(&ids, &inventory, &state),
            vec!["perl/Foo-Bar=1.0"]
        );
    }

    #[test]
    fn test_only_broken_ignores_missing_and_string_zero() {
        let inventory = Inventory::from_value(json!({
            "A=1": {"spec": 1},
            "B=1": {"spec": "0", "source": false, "5.30": null}
        }))
        .unwrap();
        let ids = inventory.sorted_ids();
        let state = FilterState {
            only_broken: true,
            ..Default::default()
        };
        assert!(FilterEngine::apply(&ids, &inventory, &state).is_empty());
    }

    #[test]
    fn test_only_noncpan() {
        let (inventory, ids) = scenario();
        let state = FilterState {
            only_noncpan: true,
            ..Default::default()
        };
        assert_eq!(FilterEngine::apply(&ids, &inventory, &state), vec!["A=2.0"]);
    }

    #[test]
    fn test_search_normalizes_module_separator_and_case() {
        let (inventory, ids) = modules();
        let module_style = FilterState {
            search: "Foo::Ba".to_string(),
            ..Default::default()
        };
        let dist_style = FilterState {
            search: "foo-ba".to_string(),
            ..Default::default()
        };
        let by_module = FilterEngine::apply(&ids, &inventory, &module_style);
        let by_dist = FilterEngine::apply(&ids, &inventory, &dist_style);
        assert_eq!(by_module, by_dist);
        assert_eq!(by_module, vec!["perl/Foo-Bar=1.0", "perl/Foo-Baz=0.1"]);
    }

    #[test]
    fn test_search_matches_version_part() {
        let (inventory, ids) = scenario();
        let state = FilterState {
            search: "=1.".to_string(),
            ..Default::default()
        };
        assert_eq!(FilterEngine::apply(&ids, &inventory, &state), vec!["A=1.0"]);
    }

    #[test]
    fn test_filters_combine() {
        let (inventory, ids) = modules();
        let state = FilterState {
            search: "foo".to_string(),
            only_noncpan: true,
            ..Default::default()
        };
        assert_eq!(
            FilterEngine::apply(&ids, &inventory, &state),
            vec!["perl/Foo-Bar=1.0"]
        );
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let (inventory, ids) = modules();
        let state = FilterState {
            search: "perl".to_string(),
            only_broken: true,
            ..Default::default()
        };
        let once = FilterEngine::apply(&ids, &inventory, &state);
        let twice = FilterEngine::apply(&once, &inventory, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_ids_are_dropped_by_flag_filters() {
        let (inventory, _) = scenario();
        let ids = vec!["ghost=1".to_string()];
        let state = FilterState {
            only_broken: true,
            ..Default::default()
        };
        assert!(FilterEngine::apply(&ids, &inventory, &state).is_empty());
    }
}
