//! Acceptance tests: pages in, rows, clicks and rendered text out.
//!
//! Each test drives the public API the way a host view would: decode pages,
//! feed them into a `HistoryTimeline`, present rows and dispatch the actions
//! attached to them.

use chrono::{TimeZone, Utc};
use history_timeline::model::{CommitOrder, UpstreamProject, VersionId};
use history_timeline::parser::parse_pages;
use history_timeline::state::{handle_fold_command, FoldCommand, HistoryTimeline};
use history_timeline::timeline::{Row, RowKind, TimelineBuilder};
use history_timeline::view::{line_to_plain, timeline_text, TimelineView};
use history_timeline::view_state::{
    ClickOrigin, HeightChange, LineOffset, RenderDescriptor, RowAction, RowEventHandlers,
    RowIndex,
};

const SCENARIO_PAGE: &str = r#"[
  {"version":{"id":"v5","revision":"5555555aa","createTime":"2024-01-01T10:00:00Z","author":"ada","message":"five","order":5}},
  {"version":{"id":"v6","revision":"6666666bb","createTime":"2024-01-01T22:00:00Z","author":"bob","message":"six PROJ-12","order":6}},
  {"version":{"id":"v7","revision":"7777777cc","createTime":"2024-01-02T01:00:00Z","author":"cy","message":"seven","order":7}}
]"#;

const SECOND_PAGE: &str = r#"[
  {"rolledUpVersions":[
    {"id":"v3","revision":"3333333dd","createTime":"2024-01-02T00:30:00Z","author":"di","message":"three","order":3},
    {"id":"v2","revision":"2222222ee","createTime":"2024-01-01T23:00:00Z","author":"ed","message":"two","order":2,
     "upstreamProject":{"owner":"evergreen-ci","repo":"upstream","revision":"cafef00d","project":"up","triggerID":"t1","triggerType":"task"}}
  ]},
  {"version":{"id":"v1","revision":"1111111ff","createTime":"2023-12-31T18:00:00Z","author":"fa","message":"one","order":1}}
]"#;

#[derive(Debug, Default)]
struct Recorder {
    commits: Vec<(ClickOrigin, String)>,
    upstreams: Vec<String>,
    tickets: Vec<String>,
    toggles: Vec<(RowIndex, bool)>,
    height_changes: Vec<HeightChange>,
}

impl RowEventHandlers for Recorder {
    fn on_open_commit(&mut self, origin: ClickOrigin, version_id: &VersionId) {
        self.commits.push((origin, version_id.as_str().to_string()));
    }

    fn on_open_upstream_project(&mut self, _origin: ClickOrigin, upstream: &UpstreamProject) {
        self.upstreams.push(upstream.link_target());
    }

    fn on_open_ticket(&mut self, _origin: ClickOrigin, ticket: &str) {
        self.tickets.push(ticket.to_string());
    }

    fn on_toggle_fold(&mut self, index: RowIndex, expanded: bool) {
        self.toggles.push((index, expanded));
    }

    fn on_row_height_changed(&mut self, change: HeightChange) {
        self.height_changes.push(change);
    }
}

fn utc_timeline(selected: i64) -> HistoryTimeline<Utc> {
    HistoryTimeline::new(TimelineBuilder::new(Utc), Some(CommitOrder::new(selected)))
}

fn loaded_timeline() -> HistoryTimeline<Utc> {
    let parsed = parse_pages(&format!("[{},{}]", SCENARIO_PAGE, SECOND_PAGE));
    assert!(parsed.errors.is_empty(), "fixture decodes: {:?}", parsed.errors);

    let mut timeline = utc_timeline(6);
    for page in parsed.pages {
        timeline.apply_page(page);
    }
    timeline
}

#[test]
fn concrete_scenario_from_json() {
    // GIVEN: one page of three commits straddling midnight UTC, order 6 selected
    let parsed = parse_pages(&SCENARIO_PAGE.replace('\n', ""));
    assert_eq!(parsed.pages.len(), 1);
    let mut timeline = utc_timeline(6);

    // WHEN: the page is applied
    let report = timeline.apply_page(parsed.pages.into_iter().flatten());

    // THEN: separator, 5, 6 (selected), separator, 7
    assert_eq!(report.appended, 5);
    let kinds: Vec<RowKind> = timeline.rows().iter().map(Row::kind).collect();
    assert_eq!(
        kinds,
        vec![
            RowKind::DateSeparator,
            RowKind::Commit,
            RowKind::Commit,
            RowKind::DateSeparator,
            RowKind::Commit,
        ]
    );
    let orders: Vec<Option<i64>> = timeline
        .rows()
        .iter()
        .map(|r| r.commit_order().map(|o| o.get()))
        .collect();
    assert_eq!(orders, vec![None, Some(5), Some(6), None, Some(7)]);
    let selected: Vec<bool> = timeline.rows().iter().map(Row::is_selected).collect();
    assert_eq!(selected, vec![false, false, true, false, false]);
    assert_eq!(
        *timeline.rows()[0].date(),
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    );
    assert_eq!(
        *timeline.rows()[3].date(),
        Utc.with_ymd_and_hms(2024, 1, 2, 1, 0, 0).unwrap()
    );
}

#[test]
fn second_page_continues_without_touching_first() {
    // GIVEN: the scenario page already applied
    let parsed = parse_pages("[]\n[]");
    assert_eq!(parsed.pages.len(), 2);
    let mut timeline = loaded_timeline();

    // THEN: the group anchors on its first commit (Jan 2), so no separator before it;
    // the Dec 31 commit gets its own separator
    let kinds: Vec<RowKind> = timeline.rows().iter().map(Row::kind).collect();
    assert_eq!(
        kinds[5..],
        [
            RowKind::FoldedCommits,
            RowKind::DateSeparator,
            RowKind::Commit,
        ]
    );

    // AND: empty pages append nothing
    let before = timeline.rows().to_vec();
    for page in parsed.pages {
        assert_eq!(timeline.apply_page(page).appended, 0);
    }
    assert_eq!(timeline.rows(), &before[..]);
}

#[test]
fn clicks_dispatch_to_host_handlers() {
    // GIVEN: a loaded timeline and a recording host
    let mut timeline = loaded_timeline();
    let mut host = Recorder::default();

    // WHEN: the host clicks the selected commit's revision and its ticket
    let (open_commit, open_ticket) = match timeline.present(RowIndex::new(2), 7) {
        Some(RenderDescriptor::Commit(commit)) => {
            assert!(commit.selected);
            assert_eq!(commit.tickets, vec!["PROJ-12"]);
            (commit.open_commit.clone(), commit.open_tickets[0].clone())
        }
        other => panic!("expected commit descriptor, got {:?}", other),
    };
    timeline.dispatch(&open_commit, &mut host).expect("click");
    timeline.dispatch(&open_ticket, &mut host).expect("click");

    // THEN: the handlers saw the row-level click
    assert_eq!(host.commits, vec![(ClickOrigin::Row, "v6".to_string())]);
    assert_eq!(host.tickets, vec!["PROJ-12".to_string()]);
    assert!(host.toggles.is_empty());
}

#[test]
fn toggling_a_group_reveals_nested_clicks_and_reports_height() {
    // GIVEN: the folded group at row 5
    let mut timeline = loaded_timeline();
    let mut host = Recorder::default();
    let toggle = match timeline.present(RowIndex::new(5), 7) {
        Some(RenderDescriptor::FoldedGroup(group)) => {
            assert!(!group.is_expanded);
            group.toggle.clone()
        }
        other => panic!("expected folded group, got {:?}", other),
    };
    let total_before = timeline.heights().total();

    // WHEN: the toggle is clicked
    timeline.dispatch(&toggle, &mut host).expect("toggle");

    // THEN: flag, height and notifications all reflect the expansion
    assert!(timeline.is_expanded(RowIndex::new(5)));
    assert_eq!(host.toggles, vec![(RowIndex::new(5), true)]);
    assert_eq!(host.height_changes.len(), 1);
    assert_eq!(host.height_changes[0].delta(), 2);
    assert_eq!(timeline.heights().total(), total_before + 2);

    // AND: nested commits carry folded-origin actions
    let upstream_click = match timeline.present(RowIndex::new(5), 7) {
        Some(RenderDescriptor::FoldedGroup(group)) => {
            assert_eq!(group.visible.len(), 2);
            assert!(group.visible.iter().all(|c| !c.selected));
            group.visible[1]
                .open_upstream_project
                .clone()
                .expect("nested commit has upstream project")
        }
        other => panic!("expected folded group, got {:?}", other),
    };
    assert!(matches!(
        upstream_click,
        RowAction::OpenUpstreamProject {
            origin: ClickOrigin::FoldedGroup,
            ..
        }
    ));
    timeline.dispatch(&upstream_click, &mut host).expect("click");
    assert_eq!(host.upstreams, vec!["evergreen-ci/upstream@cafef00d".to_string()]);
}

#[test]
fn expand_all_then_render_text() {
    // GIVEN: a loaded timeline with every group expanded
    let mut timeline = loaded_timeline();
    let mut host = Recorder::default();
    let changed =
        handle_fold_command(&mut timeline, FoldCommand::ExpandAll, &mut host).expect("expand all");
    assert_eq!(changed, 1);

    // WHEN: rendered as plain text
    let text = timeline_text(&timeline, 7, 0);

    // THEN: one line per row height, nested commits indented
    assert_eq!(text.lines().count(), timeline.heights().total());
    assert!(text.contains("▾ 2 inactive commits"));
    assert!(text.contains("    2222222  ed  two  ↑ evergreen-ci/upstream@cafef00d"));
    assert!(text.contains("▶ 6666666  bob  six PROJ-12"));
    assert!(text.starts_with("── Mon Jan 1, 2024 ──"));
}

#[test]
fn scrolled_view_starts_mid_timeline() {
    // GIVEN: a loaded timeline scrolled past the first day
    let timeline = loaded_timeline();
    let view = TimelineView::new(&timeline, 1).scroll(LineOffset::new(3));

    // WHEN: a 3-line viewport is materialized
    let lines: Vec<String> = view.visible_lines(60, 3).iter().map(line_to_plain).collect();

    // THEN: it begins at the second separator and respects the column limit
    assert_eq!(
        lines,
        vec![
            "── Tue Jan 2, 2024 ──".to_string(),
            "  7777777  cy  seven".to_string(),
            "▸ 2 inactive commits: 3333333 +1 more".to_string(),
        ]
    );
}

#[test]
fn reset_starts_a_fresh_history_context() {
    let mut timeline = loaded_timeline();
    timeline
        .toggle_fold(RowIndex::new(5), true)
        .expect("group toggles");

    timeline.reset(Some(CommitOrder::new(7)));
    let parsed = parse_pages(&SCENARIO_PAGE.replace('\n', ""));
    for page in parsed.pages {
        timeline.apply_page(page);
    }

    assert_eq!(timeline.fold_state().expanded_count(), 0);
    assert_eq!(timeline.selected_order(), Some(CommitOrder::new(7)));
    assert!(timeline.rows()[4].is_selected());
    assert!(!timeline.rows()[2].is_selected());
}
