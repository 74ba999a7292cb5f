//! Behavioural coverage for cross-kind identifier ordering.

use std::cell::RefCell;

use osmid_core::{
    ChangesetId, ElementId, ElementIds, FeatureId, FeatureRef, NodeId, RelationId, VersionedRef,
    WayId, sort_by_feature_id,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Element identifiers under test.
#[fixture]
pub fn elements() -> RefCell<ElementIds> {
    RefCell::new(ElementIds::new())
}

/// Feature identifiers tagged with their input position.
#[fixture]
pub fn features() -> RefCell<Vec<(FeatureId, usize)>> {
    RefCell::new(Vec::new())
}

/// Single changeset element produced by a scenario.
#[fixture]
pub fn changeset_element() -> RefCell<Option<ElementId>> {
    RefCell::new(None)
}

#[given("a mixed list of element identifiers")]
fn mixed_elements(elements: &RefCell<ElementIds>) {
    *elements.borrow_mut() = ElementIds::from(vec![
        RelationId(1).element_id(1),
        ChangesetId(1).element_id(),
        NodeId(1).element_id(2),
        WayId(2).element_id(3),
        WayId(1).element_id(2),
        WayId(1).element_id(1),
        ChangesetId(3).element_id(),
    ]);
}

#[when("I sort the element identifiers")]
fn sort_elements(elements: &RefCell<ElementIds>) {
    elements.borrow_mut().sort();
}

#[then("the elements are ordered node, ways by reference and version, relation, changesets")]
fn elements_in_order(elements: &RefCell<ElementIds>) {
    let rendered: Vec<String> = elements.borrow().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "node/1:2",
            "way/1:1",
            "way/1:2",
            "way/2:3",
            "relation/1:1",
            "changeset/1",
            "changeset/3",
        ]
    );
}

#[given("a list of feature identifiers containing a repeated changeset")]
fn features_with_duplicate(features: &RefCell<Vec<(FeatureId, usize)>>) {
    let ids = [
        RelationId(1).feature_id(),
        ChangesetId(1).feature_id(),
        NodeId(1).feature_id(),
        WayId(2).feature_id(),
        WayId(1).feature_id(),
        ChangesetId(3).feature_id(),
        ChangesetId(1).feature_id(),
    ];
    *features.borrow_mut() = ids.into_iter().zip(0..).collect();
}

#[when("I sort the feature identifiers")]
fn sort_features(features: &RefCell<Vec<(FeatureId, usize)>>) {
    sort_by_feature_id(&mut features.borrow_mut(), |(id, _)| *id);
}

#[then("the features are ordered node, ways, relation, changesets")]
fn features_in_order(features: &RefCell<Vec<(FeatureId, usize)>>) {
    let rendered: Vec<String> = features
        .borrow()
        .iter()
        .map(|(id, _)| id.to_string())
        .collect();
    assert_eq!(
        rendered,
        [
            "node/1",
            "way/1",
            "way/2",
            "relation/1",
            "changeset/1",
            "changeset/1",
            "changeset/3",
        ]
    );
}

#[then("both copies of the repeated changeset are adjacent")]
fn duplicates_keep_input_order(features: &RefCell<Vec<(FeatureId, usize)>>) {
    let repeated = ChangesetId(1).feature_id();
    let positions: Vec<usize> = features
        .borrow()
        .iter()
        .filter(|(id, _)| *id == repeated)
        .map(|(_, position)| *position)
        .collect();
    assert_eq!(positions, [1, 6], "first occurrence must stay first");
}

#[given("a changeset feature identifier")]
fn changeset_feature(changeset_element: &RefCell<Option<ElementId>>) {
    *changeset_element.borrow_mut() = None;
}

#[when("I attach version 7 to the changeset")]
fn attach_version(changeset_element: &RefCell<Option<ElementId>>) {
    *changeset_element.borrow_mut() = Some(ChangesetId(42).feature_id().element_id(7));
}

#[then("the changeset element has version 0")]
fn changeset_version_zero(changeset_element: &RefCell<Option<ElementId>>) {
    let element = changeset_element
        .borrow()
        .unwrap_or_else(|| panic!("changeset element must be recorded"));
    assert_eq!(element.version(), 0);
    assert_eq!(element.feature_id(), ChangesetId(42).feature_id());
}

#[then("the changeset element renders without a version")]
fn changeset_renders_plainly(changeset_element: &RefCell<Option<ElementId>>) {
    let element = changeset_element
        .borrow()
        .unwrap_or_else(|| panic!("changeset element must be recorded"));
    assert_eq!(element.to_string(), "changeset/42");
}

#[scenario(path = "tests/features/sorting.feature", index = 0)]
fn element_sort_scenario(elements: RefCell<ElementIds>) {
    let _ = elements;
}

#[scenario(path = "tests/features/sorting.feature", index = 1)]
fn duplicate_feature_sort_scenario(features: RefCell<Vec<(FeatureId, usize)>>) {
    let _ = features;
}

#[scenario(path = "tests/features/sorting.feature", index = 2)]
fn changeset_version_scenario(changeset_element: RefCell<Option<ElementId>>) {
    let _ = changeset_element;
}
