//! Tests for row renderer dispatch.

use super::*;
use crate::model::NonEmptyCommits;
use crate::test_harness::{payload, ts, upstream_payload};

fn ctx(index: usize, is_expanded: bool, column_limit: usize) -> PresentContext {
    PresentContext {
        index: RowIndex::new(index),
        is_expanded,
        column_limit,
    }
}

fn group_row(size: i64) -> Row {
    let commits = (1..=size)
        .map(|order| payload(order, "2024-01-01T10:00:00Z"))
        .collect();
    Row::FoldedGroup {
        commits: NonEmptyCommits::new(commits).expect("non-empty"),
        date: ts("2024-01-01T10:00:00Z"),
        selected: false,
    }
}

#[test]
fn separator_becomes_date_label() {
    let row = Row::DateSeparator {
        date: ts("2024-03-04T23:30:00Z"),
    };
    match present(&row, &ctx(0, false, 5)) {
        RenderDescriptor::DateLabel(label) => {
            assert_eq!(label.date, ts("2024-03-04T23:30:00Z"));
            assert_eq!(
                label.calendar_date(&Utc),
                NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date")
            );
        }
        other => panic!("expected date label, got {:?}", other),
    }
}

#[test]
fn commit_carries_display_fields_and_selection() {
    let mut commit = upstream_payload(12, "2024-01-01T10:00:00Z");
    commit.message = "EVG-42 fix the thing".to_string();
    let row = Row::Commit {
        date: commit.create_time,
        commit,
        selected: true,
    };

    let RenderDescriptor::Commit(desc) = present(&row, &ctx(3, false, 5)) else {
        panic!("expected commit descriptor");
    };

    assert_eq!(desc.revision, "000000c");
    assert_eq!(desc.author, "author12");
    assert_eq!(desc.message, "EVG-42 fix the thing");
    assert!(desc.selected);
    assert_eq!(desc.tickets, vec!["EVG-42"]);
    assert_eq!(
        desc.upstream_link().as_deref(),
        Some("evergreen-ci/upstream@cafef00d")
    );
}

#[test]
fn commit_actions_are_bound_to_row_and_payload() {
    let mut commit = upstream_payload(12, "2024-01-01T10:00:00Z");
    commit.message = "EVG-42 and EVG-43".to_string();
    let row = Row::Commit {
        date: commit.create_time,
        commit: commit.clone(),
        selected: false,
    };

    let RenderDescriptor::Commit(desc) = present(&row, &ctx(3, false, 5)) else {
        panic!("expected commit descriptor");
    };

    assert_eq!(
        desc.open_commit,
        RowAction::OpenCommit {
            index: RowIndex::new(3),
            origin: ClickOrigin::Row,
            version_id: commit.id.clone(),
        }
    );
    assert_eq!(
        desc.open_upstream_project,
        Some(RowAction::OpenUpstreamProject {
            index: RowIndex::new(3),
            origin: ClickOrigin::Row,
            upstream: commit.upstream_project.clone().expect("upstream"),
        })
    );
    let tickets: Vec<&RowAction> = desc.open_tickets.iter().collect();
    assert_eq!(tickets.len(), 2);
    assert_eq!(
        tickets[1],
        &RowAction::OpenTicket {
            index: RowIndex::new(3),
            origin: ClickOrigin::Row,
            ticket: "EVG-43".to_string(),
        }
    );
}

#[test]
fn commit_without_upstream_has_no_upstream_action() {
    let row = Row::Commit {
        commit: payload(1, "2024-01-01T10:00:00Z"),
        date: ts("2024-01-01T10:00:00Z"),
        selected: false,
    };
    let RenderDescriptor::Commit(desc) = present(&row, &ctx(1, false, 5)) else {
        panic!("expected commit descriptor");
    };
    assert!(desc.open_upstream_project.is_none());
    assert!(desc.upstream_link().is_none());
    assert!(desc.open_tickets.is_empty());
}

#[test]
fn collapsed_group_truncates_to_column_limit() {
    let row = group_row(5);

    let RenderDescriptor::FoldedGroup(desc) = present(&row, &ctx(2, false, 3)) else {
        panic!("expected folded group descriptor");
    };

    assert_eq!(desc.commits.len(), 5);
    assert_eq!(desc.visible.len(), 3);
    assert_eq!(desc.hidden, 2);
    assert!(!desc.is_expanded);
    assert!(!desc.selected);
    assert_eq!(
        desc.toggle,
        RowAction::ToggleFold {
            index: RowIndex::new(2),
            expanded: true,
        }
    );
}

#[test]
fn collapsed_group_smaller_than_limit_shows_everything() {
    let row = group_row(2);
    let RenderDescriptor::FoldedGroup(desc) = present(&row, &ctx(2, false, 7)) else {
        panic!("expected folded group descriptor");
    };
    assert_eq!(desc.visible.len(), 2);
    assert_eq!(desc.hidden, 0);
}

#[test]
fn expanded_group_shows_all_commits_and_toggles_closed() {
    let row = group_row(5);

    let RenderDescriptor::FoldedGroup(desc) = present(&row, &ctx(2, true, 3)) else {
        panic!("expected folded group descriptor");
    };

    assert_eq!(desc.visible.len(), 5);
    assert_eq!(desc.hidden, 0);
    assert_eq!(
        desc.toggle,
        RowAction::ToggleFold {
            index: RowIndex::new(2),
            expanded: false,
        }
    );
}

#[test]
fn nested_commits_report_folded_origin() {
    let row = group_row(2);
    let RenderDescriptor::FoldedGroup(desc) = present(&row, &ctx(4, true, 3)) else {
        panic!("expected folded group descriptor");
    };
    for nested in &desc.visible {
        assert!(!nested.selected);
        match &nested.open_commit {
            RowAction::OpenCommit { index, origin, .. } => {
                assert_eq!(*index, RowIndex::new(4));
                assert_eq!(*origin, ClickOrigin::FoldedGroup);
            }
            other => panic!("expected open commit action, got {:?}", other),
        }
    }
}
