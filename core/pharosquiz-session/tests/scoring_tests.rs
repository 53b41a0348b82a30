use pharosquiz_session::ScoringRule;
use proptest::prelude::*;
use std::time::Duration;

const LIMIT: Duration = Duration::from_secs(20);

#[test]
fn default_is_flat_hundred() {
    assert_eq!(ScoringRule::default(), ScoringRule::Flat { points: 100 });
}

#[test]
fn flat_ignores_latency() {
    let rule = ScoringRule::Flat { points: 100 };
    assert_eq!(rule.points(true, Duration::ZERO, LIMIT), 100);
    assert_eq!(rule.points(true, Duration::from_secs(19), LIMIT), 100);
}

#[test]
fn wrong_answers_score_zero() {
    let flat = ScoringRule::Flat { points: 100 };
    let weighted = ScoringRule::TimeWeighted { max_points: 1000, min_points: 500 };
    assert_eq!(flat.points(false, Duration::ZERO, LIMIT), 0);
    assert_eq!(weighted.points(false, Duration::ZERO, LIMIT), 0);
}

#[test]
fn time_weighted_decays_linearly() {
    let rule = ScoringRule::TimeWeighted { max_points: 1000, min_points: 500 };
    assert_eq!(rule.points(true, Duration::ZERO, LIMIT), 1000);
    assert_eq!(rule.points(true, Duration::from_secs(10), LIMIT), 750);
    assert_eq!(rule.points(true, LIMIT, LIMIT), 500);
    assert_eq!(rule.points(true, Duration::from_secs(60), LIMIT), 500);
}

#[test]
fn scoring_rule_serde_is_tagged() {
    let rule: ScoringRule =
        serde_json::from_str(r#"{"mode":"time_weighted","max_points":200,"min_points":50}"#).unwrap();
    assert_eq!(rule, ScoringRule::TimeWeighted { max_points: 200, min_points: 50 });
    let json = serde_json::to_string(&ScoringRule::Flat { points: 10 }).unwrap();
    assert_eq!(json, r#"{"mode":"flat","points":10}"#);
}

proptest! {
    #[test]
    fn time_weighted_stays_in_bounds(
        latency_ms in 0u64..60_000,
        min in 0i64..500,
        extra in 0i64..1_000,
    ) {
        let rule = ScoringRule::TimeWeighted { max_points: min + extra, min_points: min };
        let points = rule.points(true, Duration::from_millis(latency_ms), LIMIT);
        prop_assert!(points >= min);
        prop_assert!(points <= min + extra);
    }

    #[test]
    fn faster_never_scores_less(a in 0u64..20_000, b in 0u64..20_000) {
        let rule = ScoringRule::TimeWeighted { max_points: 1000, min_points: 100 };
        let (fast, slow) = (a.min(b), a.max(b));
        prop_assert!(
            rule.points(true, Duration::from_millis(fast), LIMIT)
                >= rule.points(true, Duration::from_millis(slow), LIMIT)
        );
    }
}
