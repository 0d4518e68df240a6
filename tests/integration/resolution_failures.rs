use coursenav::{LeafMode, NavError};

use super::support::{request, NavHarness};

#[test]
fn empty_category_root_requires_an_explicit_course() {
    let harness = NavHarness::new();
    let err = harness
        .navigator()
        .resolve(&request("p", LeafMode::Homework))
        .unwrap_err();
    assert!(
        matches!(err, NavError::NoCourseSelected { .. }),
        "expected NoCourseSelected, got {err:?}"
    );
    assert!(
        err.to_string().contains("-c"),
        "message should point at the -c flag:\n{err}"
    );
}

#[test]
fn course_without_weeks_requires_an_explicit_week() {
    let harness = NavHarness::new();
    harness.seed_dir("assembly/course1");

    let err = harness
        .navigator()
        .resolve(&request("a", LeafMode::Homework))
        .unwrap_err();
    assert!(
        matches!(err, NavError::NoWeekSelected { .. }),
        "expected NoWeekSelected, got {err:?}"
    );
}

#[test]
fn malformed_sibling_fails_the_lookup() {
    let harness = NavHarness::new();
    harness.seed_dir("programming_cpp/course2");
    harness.seed_dir("programming_cpp/courseX");

    let err = harness
        .navigator()
        .resolve(&request("p", LeafMode::Homework))
        .unwrap_err();
    match err {
        NavError::MalformedDirectoryName { name, .. } => assert_eq!(name, "courseX"),
        other => panic!("expected MalformedDirectoryName, got {other:?}"),
    }
}

#[test]
fn unknown_alias_fails_before_touching_the_filesystem() {
    let harness = NavHarness::new();
    let missing_root = harness.root().join("never-created");
    let navigator = coursenav::Navigator::new(&harness.config, missing_root.clone());

    let err = navigator.resolve(&request("z", LeafMode::Homework)).unwrap_err();
    match &err {
        NavError::UnknownCategory { alias, known } => {
            assert_eq!(alias, "z");
            assert!(known.contains("p=programming_cpp"), "summary: {known}");
        }
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
    assert!(!missing_root.exists(), "usage errors must not create directories");
}
