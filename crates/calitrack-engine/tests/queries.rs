use calitrack_engine::{AppendMode, SessionLog, TimeRange, group_by_exercise};
use calitrack_types::{Band, Difficulty, ExerciseLog, Session, SetEntry, Split};
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn set(reps: Option<u32>, weight: Option<f64>) -> SetEntry {
    SetEntry {
        reps,
        weight,
        ..Default::default()
    }
}

fn session(day: &str, split: Split, log: Vec<(&str, Vec<SetEntry>)>) -> Session {
    Session {
        date: date(day),
        split,
        log: log
            .into_iter()
            .map(|(exercise, sets)| ExerciseLog {
                exercise: exercise.to_string(),
                sets,
            })
            .collect(),
    }
}

fn sample_log() -> SessionLog {
    let mut log = SessionLog::new();

    log.append(
        session(
            "2025-04-01",
            Split::Pull,
            vec![("Pull-ups", vec![set(Some(5), None)])],
        ),
        AppendMode::Always,
    )
    .unwrap();

    log.append(
        session(
            "2025-05-20",
            Split::Push,
            vec![
                ("Dips", vec![set(Some(8), None), set(Some(10), None)]),
                ("Pike Push-ups", vec![set(Some(8), Some(2.5))]),
            ],
        ),
        AppendMode::Always,
    )
    .unwrap();

    log.append(
        session(
            "2025-06-01",
            Split::Pull,
            vec![
                ("Pull-ups", vec![set(Some(6), None), set(Some(6), None)]),
                (
                    "Assisted Pull-ups (Band)",
                    vec![SetEntry {
                        reps: Some(8),
                        band: Some(Band::Red),
                        difficulty: Some(Difficulty::Ok),
                        ..Default::default()
                    }],
                ),
            ],
        ),
        AppendMode::Always,
    )
    .unwrap();

    log
}

#[test]
fn test_window_filter_respects_split_and_cutoff() {
    let log = sample_log();
    let now = date("2025-06-15");

    let pull = log.filter_by_split_and_window(Split::Pull, TimeRange::ThreeMonths.days(), now);

    assert_eq!(pull.len(), 2);
    assert!(pull.iter().all(|s| s.split == Split::Pull));
    assert!(pull.iter().all(|s| (now - s.date).num_days() <= 90));
    // Re-sorted ascending regardless of insertion order.
    assert!(pull[0].date < pull[1].date);
}

#[test]
fn test_window_filter_drops_sessions_outside_window() {
    let log = sample_log();
    let now = date("2025-06-15");

    let recent = log.filter_by_split_and_window(Split::Pull, 30, now);

    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].date, date("2025-06-01"));
}

#[test]
fn test_window_filter_on_no_match_is_empty() {
    let log = sample_log();
    let matched =
        log.filter_by_split_and_window(Split::LegsCore, 365, date("2025-06-15"));
    assert!(matched.is_empty());
}

#[test]
fn test_exercises_logged_for_is_discovery_ordered_union() {
    let log = sample_log();

    let pull = log.exercises_logged_for(Split::Pull);
    assert_eq!(pull, vec!["Pull-ups", "Assisted Pull-ups (Band)"]);

    let legs = log.exercises_logged_for(Split::LegsCore);
    assert!(legs.is_empty());
}

#[test]
fn test_group_by_exercise_averages_dips_example() {
    // Single session, "Dips" with sets [8 reps, 10 reps] and no weight:
    // avg reps 9, avg weight 0.
    let sessions = vec![session(
        "2025-05-20",
        Split::Push,
        vec![("Dips", vec![set(Some(8), None), set(Some(10), None)])],
    )];

    let series = group_by_exercise(&sessions, None);

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].exercise, "Dips");
    assert_eq!(series[0].points.len(), 1);
    assert_eq!(series[0].points[0].avg_reps, 9.0);
    assert_eq!(series[0].points[0].avg_weight, 0.0);
}

#[test]
fn test_group_by_exercise_counts_band_sets_as_zero_weight() {
    // One weighted set and one banded set: the band set still counts in the
    // weight denominator, dragging the average down to 5.0.
    let sessions = vec![session(
        "2025-06-01",
        Split::Pull,
        vec![(
            "Pull-ups",
            vec![
                set(Some(6), Some(10.0)),
                SetEntry {
                    reps: Some(8),
                    band: Some(Band::Red),
                    ..Default::default()
                },
            ],
        )],
    )];

    let series = group_by_exercise(&sessions, None);
    assert_eq!(series[0].points[0].avg_weight, 5.0);
    assert_eq!(series[0].points[0].avg_reps, 7.0);
}

#[test]
fn test_group_by_exercise_preserves_first_appearance_order() {
    let sessions = vec![
        session(
            "2025-05-01",
            Split::Push,
            vec![
                ("Dips", vec![set(Some(8), None)]),
                ("Pike Push-ups", vec![set(Some(6), None)]),
            ],
        ),
        session(
            "2025-05-08",
            Split::Push,
            vec![
                ("Pike Push-ups", vec![set(Some(7), None)]),
                ("Dips", vec![set(Some(9), None)]),
            ],
        ),
    ];

    let series = group_by_exercise(&sessions, None);

    let names: Vec<_> = series.iter().map(|s| s.exercise.as_str()).collect();
    assert_eq!(names, vec!["Dips", "Pike Push-ups"]);
    assert_eq!(series[0].points.len(), 2);
    assert_eq!(series[0].points[0].date, date("2025-05-01"));
    assert_eq!(series[0].points[1].date, date("2025-05-08"));
}

#[test]
fn test_group_by_exercise_applies_filter() {
    let log = sample_log();
    let sessions = log.filter_by_split_and_window(Split::Pull, 365, date("2025-06-15"));

    let filter = vec!["Pull-ups".to_string()];
    let series = group_by_exercise(&sessions, Some(&filter));

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].exercise, "Pull-ups");
    assert_eq!(series[0].points.len(), 2);
}

#[test]
fn test_most_recent_entry_picks_latest_date() {
    let log = sample_log();

    let entry = log.most_recent_entry(Split::Pull, "Pull-ups").unwrap();

    // The 2025-06-01 session wins over 2025-04-01.
    assert_eq!(entry.sets.len(), 2);
    assert_eq!(entry.sets[0].reps, Some(6));
}

#[test]
fn test_most_recent_entry_skips_sessions_missing_the_exercise() {
    let mut log = sample_log();
    log.append(
        session(
            "2025-06-10",
            Split::Pull,
            vec![("Dead Hangs", vec![set(Some(30), None)])],
        ),
        AppendMode::Always,
    )
    .unwrap();

    // Newest Pull session has no "Pull-ups"; the lookup falls back to the
    // newest session that does.
    let (session, _) = log.most_recent(Split::Pull, "Pull-ups").unwrap();
    assert_eq!(session.date, date("2025-06-01"));
}

#[test]
fn test_most_recent_entry_none_when_never_logged() {
    let log = sample_log();
    assert!(log.most_recent_entry(Split::Push, "Planche").is_none());
}

#[test]
fn test_queries_are_pure() {
    let log = sample_log();
    let now = date("2025-06-15");

    let first = log.filter_by_split_and_window(Split::Pull, 90, now);
    let second = log.filter_by_split_and_window(Split::Pull, 90, now);
    assert_eq!(first, second);

    let grouped_a = group_by_exercise(&first, None);
    let grouped_b = group_by_exercise(&second, None);
    assert_eq!(
        serde_json::to_string(&grouped_a).unwrap(),
        serde_json::to_string(&grouped_b).unwrap()
    );
}
