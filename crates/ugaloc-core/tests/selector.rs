//! End-to-end checks of the public surface against the bundled dataset.

use ugaloc_core::prelude::*;

fn ready_selector() -> Selector {
    let mut selector = Selector::with_default_dataset();
    selector.init().expect("bundled dataset loads");
    selector
}

#[test]
fn lookups_fail_until_init_succeeds() {
    let selector = Selector::with_default_dataset();
    assert!(matches!(selector.districts(), Err(LocError::NotInitialized)));
    assert!(matches!(selector.stats(), Err(LocError::NotInitialized)));
}

#[test]
fn descending_the_hierarchy_follows_the_dataset() {
    let selector = ready_selector();

    let districts = selector.districts().unwrap();
    assert!(!districts.is_empty());

    // Take the first chain the UI would take: first option at every level.
    let district = &districts[0];
    let constituencies = selector.constituencies(district.code()).unwrap();
    assert!(!constituencies.is_empty());

    let constituency = &constituencies[0];
    let sub_counties = selector
        .sub_counties(district.code(), constituency.code())
        .unwrap();
    assert!(!sub_counties.is_empty());

    let sub_county = &sub_counties[0];
    let areas = selector
        .electoral_areas(district.code(), constituency.code(), sub_county.code())
        .unwrap();
    assert!(!areas.is_empty());

    let area = &areas[0];
    let path = selector
        .resolve(
            district.code(),
            constituency.code(),
            sub_county.code(),
            area.code(),
        )
        .unwrap()
        .expect("chain assembled from listings must resolve");

    assert_eq!(path.district.name(), district.name());
    assert_eq!(path.constituency.name(), constituency.name());
    assert_eq!(path.sub_county.name(), sub_county.name());
    assert_eq!(path.electoral_area.name(), area.name());
}

#[test]
fn unmatched_codes_degrade_to_empty_listings() {
    let selector = ready_selector();
    assert!(selector.constituencies("").unwrap().is_empty());
    assert!(selector.constituencies("no-such-code").unwrap().is_empty());
    assert!(selector
        .electoral_areas("no", "such", "chain")
        .unwrap()
        .is_empty());
}

#[test]
fn searching_for_mbarara_yields_a_district_hit() {
    let selector = ready_selector();
    let hits = selector.search("mbarara", SearchLevel::All).unwrap();
    assert!(hits.iter().any(|h| {
        h.level() == SearchLevel::District && fold_key(h.district().name()).contains("mbarara")
    }));
}

#[test]
fn stats_roll_up_over_the_whole_tree() {
    let selector = ready_selector();
    let stats = selector.stats().unwrap();
    let db = selector.db().unwrap();

    let constituencies: usize = db
        .districts()
        .iter()
        .map(|d| d.constituencies().len())
        .sum();
    assert_eq!(stats.constituencies, constituencies);
    assert!(stats.electoral_areas >= stats.sub_counties);
    assert!(stats.sub_counties >= stats.constituencies);
}
