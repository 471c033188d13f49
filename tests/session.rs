use openlaunch_session::{estimate_carry, ClubType, SessionAggregator, ShotError, ShotSimulator};

#[test]
fn simulated_session_feeds_stats() {
    let mut session = SessionAggregator::new();
    for reading in ShotSimulator::new(Some(2024), true).take(25) {
        session
            .record_shot(reading.ball_speed_mph, reading.club_speed_mph, None)
            .unwrap();
    }

    let stats = session.get_session_stats();
    assert_eq!(stats.shot_count, 25);
    assert!(stats.min_ball_speed <= stats.avg_ball_speed);
    assert!(stats.avg_ball_speed <= stats.max_ball_speed);

    let smash = stats.avg_smash_factor.unwrap();
    assert!(smash > 1.3 && smash < 1.6);
    assert!(stats.avg_club_speed.unwrap() < stats.avg_ball_speed);
}

#[test]
fn club_changes_mid_session() {
    let mut session = SessionAggregator::new();
    session.record_shot(150.0, Some(100.0), None).unwrap();
    session.set_club(ClubType::Iron7);
    session.record_shot(150.0, Some(100.0), None).unwrap();

    let shots = session.shots();
    assert_eq!(shots[0].club(), ClubType::Driver);
    assert_eq!(shots[1].club(), ClubType::Iron7);
    assert!(shots[0].estimated_carry_yards() > shots[1].estimated_carry_yards());

    let expected = (estimate_carry(150.0, ClubType::Driver).unwrap()
        + estimate_carry(150.0, ClubType::Iron7).unwrap())
        / 2.0;
    assert!((session.get_session_stats().avg_carry_est - expected).abs() < 1e-9);
}

#[test]
fn clear_then_reuse() {
    let mut session = SessionAggregator::new();
    session.record_shot(140.0, Some(95.0), None).unwrap();
    session.record_shot(160.0, Some(108.0), None).unwrap();

    session.clear_session();
    let empty = session.get_session_stats();
    assert_eq!(empty.shot_count, 0);
    assert_eq!(empty.avg_ball_speed, 0.0);
    assert_eq!(empty.avg_carry_est, 0.0);
    assert!(empty.avg_club_speed.is_none());
    assert!(empty.avg_smash_factor.is_none());

    session.record_shot(120.0, None, None).unwrap();
    let stats = session.get_session_stats();
    assert_eq!(stats.shot_count, 1);
    assert_eq!(stats.max_ball_speed, 120.0);
    assert!(stats.avg_club_speed.is_none());
}

#[test]
fn bad_reading_is_reported_to_caller() {
    let mut session = SessionAggregator::new();
    let err = session.record_shot(0.0, None, None).unwrap_err();

    assert_eq!(err, ShotError::InvalidBallSpeed(0.0));
    assert!(err.to_string().contains("ball speed"));
    assert!(session.is_empty());
}

#[test]
fn session_state_json_shape() {
    let mut session = SessionAggregator::with_club(ClubType::Wood5);
    session.record_shot(150.0, Some(100.0), None).unwrap();
    session.record_shot(130.0, None, Some(ClubType::Hybrid)).unwrap();

    let json = serde_json::to_value(session.session_state()).unwrap();

    assert_eq!(json["current_club"], "5-wood");
    assert_eq!(json["stats"]["shot_count"], 2);
    assert_eq!(json["stats"]["avg_smash_factor"], 1.5);
    assert_eq!(json["shots"][0]["club"], "5-wood");
    assert_eq!(json["shots"][1]["club"], "hybrid");
    assert!(json["shots"][1]["smash_factor"].is_null());
    assert!(json["shots"][0]["timestamp"].is_string());
}
