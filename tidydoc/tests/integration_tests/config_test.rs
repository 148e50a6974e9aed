// tests/integration_tests/config_test.rs
use super::common::{README, create_test_file, header_names};
use anyhow::Result;
use tempfile::TempDir;
use tidydoc::{build_str, load_config, render_string, sort};

#[test]
fn test_discovered_config_drives_the_transform() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(
        temp_dir.path(),
        "tidydoc.toml",
        "# only the link list\nsections = [\"Resources\"]\n",
    )?;
    let nested = temp_dir.path().join("site/content");
    std::fs::create_dir_all(&nested)?;

    let config = load_config(&nested)?;
    let mut doc = build_str(README, config.marker());
    let mut reports = Vec::new();
    sort(&mut doc, &config.policy(&[]), &tidydoc::HumanNameKey, &mut reports);

    assert_eq!(
        header_names(&render_string(&doc, config.marker())),
        vec![
            "Zed Young",
            "Dr. Anna Park",
            "Ludwig van Beethoven",
            "Madonna",
            "Bea Adams",
            "Tom O'Brien",
            "Ann Baker",
            "Alpha",
            "Zeta",
        ]
    );
    assert_eq!(reports.len(), 1);
    Ok(())
}

#[test]
fn test_depth_from_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(
        temp_dir.path(),
        "tidydoc.toml",
        "sections = [\"Women Tech Speakers & Organizers\"]\ndepth = 2\n",
    )?;

    let config = load_config(temp_dir.path())?;
    let mut doc = build_str(README, config.marker());
    let mut reports = Vec::new();
    sort(&mut doc, &config.policy(&[]), &tidydoc::HumanNameKey, &mut reports);

    // Each depth-2 section orders its depth-3 children by name.
    let speakers = &doc.sections[0].children[0];
    assert_eq!(speakers.child_names(), vec!["Berlin", "Remote"]);
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|report| !report.is_reordered()));
    Ok(())
}
