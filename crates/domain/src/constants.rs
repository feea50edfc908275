//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Model identifiers
/// Primary "lite" alias, chosen for the lowest resource cost.
pub const PRIMARY_MODEL: &str = "models/gemini-flash-lite-latest";
/// Stable identifier substituted when the primary alias fails.
pub const FALLBACK_MODEL: &str = "models/gemini-2.5-flash-lite";
/// Generative Language API host.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Per-call timeout in seconds.
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 60;

// Calendar export
/// Prefix of every exported event name.
pub const EVENT_LABEL: &str = "[루틴]";
/// Exported events start at this UTC offset (+09:00).
pub const EVENT_UTC_OFFSET_SECS: i32 = 9 * 3600;
/// Fixed event length; the item end time is not used.
pub const EVENT_DURATION_MINUTES: i64 = 60;
/// `chrono` format of item and window times.
pub const SCHEDULE_TIME_FORMAT: &str = "%H:%M";
/// Download file name.
pub const CALENDAR_FILENAME: &str = "schedule.ics";
/// `PRODID` of exported calendars.
pub const CALENDAR_PRODID: &str = "-//Routine Master//AI Routine Planner//KO";

// Presentation defaults
/// Web server bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8501";
/// Form default window start.
pub const DEFAULT_START_TIME: &str = "18:00";
/// Form default window end.
pub const DEFAULT_END_TIME: &str = "23:00";
/// Form default condition.
pub const DEFAULT_CONDITION: &str = "💪 최고!";
/// Form default weekday rule.
pub const DEFAULT_WEEKDAY_RULE: &str = "1일 1업로드, 운동 1시간";
/// Form default weekend rule.
pub const DEFAULT_WEEKEND_RULE: &str = "밀린 영상 편집";

// User-facing messages
/// Shown above a generated schedule.
pub const MSG_COMPLETED: &str = "완료! 아래 리스트를 확인하세요.";
/// Prefix of the error notice.
pub const MSG_ERROR_PREFIX: &str = "에러 발생: ";
/// Shown with every error notice.
pub const MSG_QUOTA_HINT: &str = "⚠️ 혹시 'Quota' 관련 에러라면 내일 다시 시도해야 합니다.";
/// Startup failure when no API key is configured.
pub const MSG_MISSING_API_KEY: &str = "🚨 API 키가 없습니다. secrets.toml을 확인해주세요.";
