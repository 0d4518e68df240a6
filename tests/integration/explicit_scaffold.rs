use std::fs;

use anyhow::Result;
use coursenav::LeafMode;

use super::support::{request, NavHarness};

#[test]
fn explicit_identifiers_create_the_full_week_scaffold() -> Result<()> {
    let harness = NavHarness::new();
    let mut req = request("p", LeafMode::Homework);
    req.course = Some("5".to_string());
    req.week = Some("2".to_string());

    let path = harness.navigator().resolve(&req)?;

    let week_dir = harness.category_dir("p").join("course5").join("week2");
    assert_eq!(path, week_dir.join("homework").join("answ"));
    for subdir in ["classwork", "homework/src", "homework/answ"] {
        assert!(
            week_dir.join(subdir).is_dir(),
            "scaffold subdirectory {subdir} should exist"
        );
    }
    Ok(())
}

#[test]
fn resolving_twice_is_idempotent_and_preserves_files() -> Result<()> {
    let harness = NavHarness::new();
    let mut req = request("p", LeafMode::Classwork);
    req.course = Some("1".to_string());
    req.week = Some("3".to_string());

    let first = harness.navigator().resolve(&req)?;
    let marker = first.join("notes.txt");
    fs::write(&marker, "kept")?;

    let second = harness.navigator().resolve(&req)?;
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&marker)?, "kept");
    Ok(())
}

#[test]
fn bare_mode_returns_the_week_directory_itself() -> Result<()> {
    let harness = NavHarness::new();
    let mut req = request("a", LeafMode::Bare);
    req.course = Some("2".to_string());
    req.week = Some("4".to_string());

    let path = harness.navigator().resolve(&req)?;
    assert_eq!(path, harness.category_dir("a").join("course2").join("week4"));
    Ok(())
}
