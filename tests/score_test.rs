use beatfall::config::ScoreFormula;
use beatfall::engine::{JudgmentEvent, JudgmentKind, ScoreTracker};
use beatfall::model::Lane;

fn event(kind: JudgmentKind, at_ms: f64) -> JudgmentEvent {
    JudgmentEvent {
        lane: Lane(0),
        note_index: 0,
        kind,
        at_ms,
    }
}

#[test]
fn default_formula_scoring_sequence() {
    let mut tracker = ScoreTracker::new(ScoreFormula::default());

    // Each hit pays 100 * (1 + combo/100) with the pre-hit combo:
    // 100, 101, 102.
    for i in 0..3 {
        tracker.apply(&event(JudgmentKind::Hit, f64::from(i) * 500.0));
    }

    assert_eq!(tracker.combo(), 3);
    assert_eq!(tracker.score(), 303);
    assert!((tracker.multiplier() - 1.03).abs() < 1e-9);
}

#[test]
fn combo_is_trailing_hit_run() {
    let mut tracker = ScoreTracker::new(ScoreFormula::default());
    let kinds = [
        JudgmentKind::Hit,
        JudgmentKind::Hit,
        JudgmentKind::Miss,
        JudgmentKind::Hit,
        JudgmentKind::Hit,
        JudgmentKind::Hit,
    ];

    for (i, kind) in kinds.into_iter().enumerate() {
        tracker.apply(&event(kind, i as f64 * 100.0));
    }

    assert_eq!(tracker.combo(), 3);
    assert_eq!(tracker.max_combo(), 3);
    assert_eq!(tracker.hit_count(), 5);
    assert_eq!(tracker.miss_count(), 1);
}

#[test]
fn miss_only_stream_never_scores() {
    let mut tracker = ScoreTracker::new(ScoreFormula::default());
    for i in 0..10 {
        tracker.apply(&event(JudgmentKind::Miss, f64::from(i) * 100.0));
    }

    assert_eq!(tracker.score(), 0);
    assert_eq!(tracker.combo(), 0);
    assert_eq!(tracker.max_combo(), 0);
    assert_eq!(tracker.multiplier(), 1.0);
}

#[test]
fn custom_formula_applies_floor() {
    let mut tracker = ScoreTracker::new(ScoreFormula {
        base_points: 7,
        combo_per_multiplier: 2,
    });

    // 7*1.0=7, then 7*1.5=10.5 -> 10, then 7*2.0=14.
    for i in 0..3 {
        tracker.apply(&event(JudgmentKind::Hit, f64::from(i) * 100.0));
    }

    assert_eq!(tracker.score(), 7 + 10 + 14);
}

#[test]
fn max_combo_survives_resets() {
    let mut tracker = ScoreTracker::new(ScoreFormula::default());

    for i in 0..5 {
        tracker.apply(&event(JudgmentKind::Hit, f64::from(i) * 100.0));
    }
    tracker.apply(&event(JudgmentKind::Miss, 500.0));
    tracker.apply(&event(JudgmentKind::Hit, 600.0));

    assert_eq!(tracker.combo(), 1);
    assert_eq!(tracker.max_combo(), 5);
}
