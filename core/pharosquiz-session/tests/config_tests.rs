use pharosquiz_leaderboard::PrizeSplit;
use pharosquiz_session::{LobbyConfig, ScoringRule, SessionConfig};
use std::time::Duration;

#[test]
fn session_defaults() {
    let config = SessionConfig::default();
    assert_eq!(config.scoring, ScoringRule::Flat { points: 100 });
    assert_eq!(config.reveal_delay(), Duration::from_secs(2));
    assert_eq!(config.drift_interval(), Duration::from_secs(5));
    assert_eq!(config.max_drift, 30);
    assert!(config.simulate_opponents);
    assert_eq!(config.prize_split, PrizeSplit::default());
}

#[test]
fn lobby_defaults() {
    let config = LobbyConfig::default();
    assert_eq!(config.capacity, 10);
    assert_eq!(config.join_interval(), Duration::from_secs(5));
    assert_eq!(config.start_countdown_secs, 5);
    assert!(config.simulate_joins);
}

#[test]
fn empty_json_is_default() {
    let config: SessionConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SessionConfig::default());
    let lobby: LobbyConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(lobby, LobbyConfig::default());
}

#[test]
fn partial_json_overrides_only_given_keys() {
    let config: SessionConfig = serde_json::from_str(
        r#"{
            "scoring": { "mode": "time_weighted", "max_points": 1000, "min_points": 500 },
            "reveal_delay_ms": 500,
            "prize_split": [7000, 3000]
        }"#,
    )
    .unwrap();

    assert_eq!(
        config.scoring,
        ScoringRule::TimeWeighted { max_points: 1000, min_points: 500 }
    );
    assert_eq!(config.reveal_delay(), Duration::from_millis(500));
    assert_eq!(config.prize_split.shares(), &[7000, 3000]);
    assert_eq!(config.max_drift, 30);
}

#[test]
fn rejects_split_not_summing_to_whole() {
    let result = serde_json::from_str::<SessionConfig>(r#"{ "prize_split": [5000, 3000] }"#);
    assert!(result.is_err());
}

#[test]
fn zero_intervals_are_clamped() {
    let config = SessionConfig {
        drift_interval_ms: 0,
        ..SessionConfig::default()
    };
    assert_eq!(config.drift_interval(), Duration::from_millis(1));
}
