use timebox_core::model::EndField;

use super::test_harness::setup_form_harness;

/// The markup of one selection list, from its name attribute to its closing tag.
fn select_block<'a>(html: &'a str, name: &str) -> &'a str {
    let marker = format!("name=\"{name}\"");
    let start = html
        .find(&marker)
        .unwrap_or_else(|| panic!("missing {marker} in {html}"));
    let rest = &html[start..];
    let end = rest
        .find("</select>")
        .unwrap_or_else(|| panic!("unterminated select for {marker}"));
    &rest[..end]
}

fn option_count(html: &str, name: &str) -> usize {
    select_block(html, name).matches("<option").count()
}

#[test]
fn limit_form_smoke_starts_empty_when_unchecked() {
    let harness = setup_form_harness(false);
    let html = harness.render();

    assert!(!html.contains("<select"), "unexpected select in {html}");
    assert!(
        !html.contains("Set a time limit"),
        "unexpected label in {html}"
    );
    assert!(!html.contains("Ends at"), "unexpected readout in {html}");
}

#[test]
fn limit_form_smoke_builds_label_and_six_lists_when_checked() {
    let harness = setup_form_harness(true);
    let html = harness.render();

    assert!(
        html.contains("Set a time limit\u{a0}"),
        "missing label in {html}"
    );
    assert_eq!(html.matches("<select").count(), 6, "in {html}");

    let names = ["endyear", "endmonth", "endday", "endhour", "endmin", "endsec"];
    let mut last = 0;
    for name in names {
        let marker = format!("name=\"{name}\"");
        let at = html.find(&marker).unwrap_or_else(|| panic!("missing {marker}"));
        assert!(at > last, "{name} out of order in {html}");
        last = at;
    }
}

#[test]
fn limit_form_smoke_option_counts_match_the_fixed_ranges() {
    let harness = setup_form_harness(true);
    let html = harness.render();

    assert_eq!(option_count(&html, "endyear"), 4);
    assert_eq!(option_count(&html, "endmonth"), 12);
    assert_eq!(option_count(&html, "endday"), 30);
    assert_eq!(option_count(&html, "endhour"), 25);
    assert_eq!(option_count(&html, "endmin"), 61);
    assert_eq!(option_count(&html, "endsec"), 61);

    let year = select_block(&html, "endyear");
    for value in ["2017", "2018", "2019", "2020"] {
        assert!(year.contains(&format!(">{value}<")), "missing {value} in {year}");
    }
    assert!(!year.contains("2021"), "unexpected 2021 in {year}");
}

#[test]
fn limit_form_smoke_toggle_off_clears_the_container() {
    let mut harness = setup_form_harness(true);

    harness.toggle().call(false);
    harness.drive();
    let html = harness.render();

    assert!(!html.contains("<select"), "unexpected select in {html}");
    assert!(
        !html.contains("Set a time limit"),
        "unexpected label in {html}"
    );
}

#[test]
fn limit_form_smoke_toggle_cycle_rebuilds_the_same_structure() {
    let mut harness = setup_form_harness(false);

    harness.toggle().call(true);
    harness.drive();
    let first = harness.render();
    assert_eq!(first.matches("<select").count(), 6, "in {first}");

    harness.toggle().call(false);
    harness.drive();
    harness.toggle().call(true);
    harness.drive();
    let again = harness.render();

    assert_eq!(first, again);
}

#[test]
fn limit_form_smoke_readout_shows_the_composed_end_time() {
    let harness = setup_form_harness(true);
    let html = harness.render();

    assert!(
        html.contains("Ends at 2017-01-01 00:00:00"),
        "missing readout in {html}"
    );
}

#[test]
fn limit_form_smoke_readout_flags_impossible_end_times() {
    let mut harness = setup_form_harness(true);

    harness.select().call((EndField::Hour, "24".to_string()));
    harness.drive();
    let html = harness.render();
    assert!(
        html.contains("not a valid end time: 2017-01-01-24-00-00"),
        "missing error in {html}"
    );

    harness.select().call((EndField::Hour, "3".to_string()));
    harness.select().call((EndField::Year, "2018".to_string()));
    harness.select().call((EndField::Month, "2".to_string()));
    harness.select().call((EndField::Day, "28".to_string()));
    harness.drive();
    let html = harness.render();
    assert!(
        html.contains("Ends at 2018-02-28 03:00:00"),
        "missing readout in {html}"
    );
}

#[test]
fn limit_form_smoke_unchecking_resets_the_selection() {
    let mut harness = setup_form_harness(true);

    harness.select().call((EndField::Hour, "24".to_string()));
    harness.drive();
    assert!(harness.render().contains("not a valid end time"));

    harness.toggle().call(false);
    harness.drive();
    harness.toggle().call(true);
    harness.drive();
    let html = harness.render();

    assert!(
        html.contains("Ends at 2017-01-01 00:00:00"),
        "selection not reset in {html}"
    );
}
