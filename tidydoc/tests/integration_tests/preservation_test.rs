// tests/integration_tests/preservation_test.rs
use super::common::README;
use tidydoc::{NullReporter, SortPolicy, build_str, render_string, tidy_lines, tidy_str};

fn sorted_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content.split_inclusive('\n').map(str::to_owned).collect();
    lines.sort();
    lines
}

#[test]
fn test_round_trip_without_sorting() {
    let doc = build_str(README, '#');
    assert_eq!(render_string(&doc, '#'), README);
}

#[test]
fn test_content_is_preserved_for_any_policy() {
    let policies = [
        SortPolicy::default(),
        SortPolicy::new(["Resources"]),
        SortPolicy::new(["Speakers"]).with_depth(2),
        SortPolicy::new(["Women Tech Speakers & Organizers"]).with_depth(2),
    ];
    for policy in &policies {
        let (output, _) = tidy_str(README, policy);
        assert_eq!(sorted_lines(&output), sorted_lines(README), "{policy:?}");
    }
}

#[test]
fn test_sorting_twice_is_stable() {
    let (once, _) = tidy_str(README, &SortPolicy::default());
    let (twice, reports) = tidy_str(&once, &SortPolicy::default());
    assert_eq!(once, twice);
    assert!(reports.iter().all(|report| !report.is_reordered()));
}

#[test]
fn test_crlf_document_keeps_line_endings() {
    let input = "intro\r\n## Mentors\r\n### Online\r\n#### Zed Young\r\nbio\r\n#### Anna Park\r\n";
    let output = tidy_lines(
        input.split_inclusive('\n'),
        &SortPolicy::default(),
        &mut NullReporter,
    )
    .concat();
    assert_eq!(
        output,
        "intro\r\n## Mentors\r\n### Online\r\n#### Anna Park\r\n#### Zed Young\r\nbio\r\n"
    );
}

#[test]
fn test_moved_unterminated_entry_gains_terminator() {
    let input = "## Speakers\n### Online\n#### Zed Young\n#### Anna Park";
    let (output, _) = tidy_str(input, &SortPolicy::default());
    assert_eq!(output, "## Speakers\n### Online\n#### Anna Park\n#### Zed Young\n");
}

#[test]
fn test_blank_line_before_unterminated_entry_is_kept() {
    let input = "## Mentors\n### Online\n#### Zed Young\nbio\n\n#### Anna Park\nlast";
    let (output, reports) = tidy_str(input, &SortPolicy::default());
    assert!(reports[0].is_reordered());

    // The moved entry gains one terminator and nothing else changes.
    let trimmed = |content: &str| {
        let mut lines: Vec<String> = content
            .split_inclusive('\n')
            .map(|line| line.trim_end_matches(['\r', '\n']).to_owned())
            .collect();
        lines.sort();
        lines
    };
    assert_eq!(trimmed(&output), trimmed(input));
    assert_eq!(output.len(), input.len() + 1);
    assert!(output.ends_with("bio\n\n"));
}
