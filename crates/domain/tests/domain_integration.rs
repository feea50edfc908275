//! Integration tests for domain types
//!
//! Covers the JSON contracts shared with the model reply and the JSON API.

use chrono::{FixedOffset, NaiveDate, TimeDelta, TimeZone};
use routine_domain::constants::{FALLBACK_MODEL, PRIMARY_MODEL};
use routine_domain::{CalendarEvent, Config, PlannedSchedule, RoutineError, ScheduleItem};

// ============================================================================
// Schedule item contract
// ============================================================================

#[test]
fn test_model_reply_array_deserializes_in_order() {
    let json = r#"[
        {"activity": "운동", "start_time": "18:00", "end_time": "19:00", "description": "헬스장"},
        {"activity": "편집", "start_time": "19:00", "end_time": "21:00", "description": "영상"},
        {"activity": "운동", "start_time": "18:30", "end_time": "19:30", "description": "겹침"}
    ]"#;

    let items: Vec<ScheduleItem> = serde_json::from_str(json).expect("should deserialize");

    // Overlapping and duplicate activities are accepted as-is
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].activity, "운동");
    assert_eq!(items[1].activity, "편집");
    assert_eq!(items[2].start_time, "18:30");
}

#[test]
fn test_planned_schedule_round_trips_through_json() {
    let planned = PlannedSchedule {
        model: PRIMARY_MODEL.to_string(),
        items: vec![ScheduleItem {
            activity: "독서".into(),
            start_time: "21:00".into(),
            end_time: "22:00".into(),
            description: "소설".into(),
        }],
        calendar: "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n".into(),
    };

    let json = serde_json::to_string(&planned).expect("serialize");
    let decoded: PlannedSchedule = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, planned);
}

// ============================================================================
// Calendar event
// ============================================================================

#[test]
fn test_calendar_event_duration() {
    let kst = FixedOffset::east_opt(9 * 3600).expect("valid offset");
    let start = kst
        .from_local_datetime(
            &NaiveDate::from_ymd_opt(2026, 10, 17)
                .and_then(|d| d.and_hms_opt(18, 0, 0))
                .expect("valid datetime"),
        )
        .single()
        .expect("unambiguous");

    let event = CalendarEvent {
        uid: "uid-1".into(),
        name: "[루틴] 운동".into(),
        description: String::new(),
        start,
        end: start + TimeDelta::hours(1),
    };

    assert_eq!(event.duration(), TimeDelta::hours(1));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_fills_defaults_from_minimal_json() {
    let json = r#"{ "gemini": { "api_key": "abc" } }"#;

    let config: Config = serde_json::from_str(json).expect("should deserialize");

    assert_eq!(config.gemini.api_key, "abc");
    assert_eq!(config.gemini.primary_model, PRIMARY_MODEL);
    assert_eq!(config.gemini.fallback_model, FALLBACK_MODEL);
    assert_eq!(config.server.bind_address, "127.0.0.1:8501");
}

#[test]
fn test_config_without_api_key_is_rejected() {
    let json = r#"{ "gemini": { "primary_model": "models/x" } }"#;

    let result: Result<Config, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn test_error_round_trips_through_json() {
    let err = RoutineError::Request("both models failed".into());
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: RoutineError = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, err);
}
