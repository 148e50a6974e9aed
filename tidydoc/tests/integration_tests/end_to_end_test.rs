// tests/integration_tests/end_to_end_test.rs
use super::common::{README, header_names};
use tidydoc::{Position, SortOutcome, SortPolicy, tidy_str};

#[test]
fn test_speakers_sorted_other_untouched() {
    let input = "\
# Root
## Speakers
### City
#### Zed Young
#### Anna Park
## Other
### City
#### Zed Young
#### Anna Park
";
    let (output, reports) = tidy_str(input, &SortPolicy::new(["Speakers"]));
    assert_eq!(
        output,
        "\
# Root
## Speakers
### City
#### Anna Park
#### Zed Young
## Other
### City
#### Zed Young
#### Anna Park
"
    );

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.section, "City");
    assert_eq!(report.total, 2);
    assert_eq!(report.calculate_percentage(), 100);
    assert_eq!(
        report.to_string(),
        "Speakers:City: alphabetized 2 out of 2 names (100%):\n\
         * Anna Park (was after Zed Young, now is first)\n\
         * Zed Young (was first, now is after Anna Park)"
    );
}

#[test]
fn test_default_sections_on_readme() {
    let (output, reports) = tidy_str(README, &SortPolicy::default());

    assert_eq!(
        header_names(&output),
        vec![
            "Dr. Anna Park",
            "Ludwig van Beethoven",
            "Zed Young",
            "Bea Adams",
            "Madonna",
            "Ann Baker",
            "Tom O'Brien",
            "Zeta",
            "Alpha",
        ]
    );

    // Berlin, Remote and London are candidates; Links is under Resources.
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(tidydoc::SortReport::is_reordered));

    let SortOutcome::Reordered { moved, .. } = &reports[1].outcome else {
        panic!("Remote should be reordered");
    };
    assert_eq!(moved[0].name, "Bea Adams");
    assert_eq!(moved[0].now, Position::First);
}

#[test]
fn test_entry_text_moves_with_its_header() {
    let (output, _) = tidy_str(README, &SortPolicy::default());
    assert!(output.contains(
        "#### Dr. Anna Park\n* Topics: Go\n\n\
         #### Ludwig van Beethoven\n* Topics: Music\n\n\
         #### Zed Young\n* Topics: Rust\n\n\
         ### Remote"
    ));
}

#[test]
fn test_no_matching_parent_changes_nothing() {
    let (output, reports) = tidy_str(README, &SortPolicy::new(["Attendees"]));
    assert_eq!(output, README);
    assert!(reports.is_empty());
}
