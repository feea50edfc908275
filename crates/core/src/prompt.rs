//! Prompt Builder

use routine_domain::ScheduleRequest;

/// Format a schedule request into the fixed prompt template.
///
/// All free text is interpolated verbatim. The template demands a bare JSON
/// array of `{activity, start_time, end_time, description}` objects.
pub fn build_prompt(request: &ScheduleRequest) -> String {
    let today = request.requested_at.format("%Y-%m-%d %A");

    format!(
        r#"
    [상황] {today}, 컨디션:{condition}, 시간:{start}~{end}
    [규칙] 평일:{weekday} / 주말:{weekend}
    [요청] 위 조건에 맞춰 스케줄 생성.
    **반드시 아래 JSON 형식으로만 응답.**
    ```json
    [
      {{
        "activity": "활동명",
        "start_time": "HH:MM",
        "end_time": "HH:MM",
        "description": "세부내용"
      }}
    ]
    ```
    "#,
        condition = request.condition,
        start = request.start_time,
        end = request.end_time,
        weekday = request.weekday_rule,
        weekend = request.weekend_rule,
    )
}
