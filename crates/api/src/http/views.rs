//! Server-rendered page for the form route.

use std::fmt::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use routine_domain::constants::{
    CALENDAR_FILENAME, MSG_COMPLETED, MSG_ERROR_PREFIX, MSG_QUOTA_HINT,
};
use routine_domain::{PlannedSchedule, Result};

use super::dto::ScheduleForm;

const PAGE_TITLE: &str = "AI 루틴 마스터";

const STYLE: &str = "body{font-family:sans-serif;max-width:760px;margin:2rem auto;padding:0 1rem}\
.card{border:1px solid #ddd;border-radius:8px;padding:1rem;margin-bottom:1rem}\
.row{display:flex;gap:1rem}.row label{flex:1}\
label{display:block;margin-bottom:.5rem}input,textarea{width:100%;box-sizing:border-box}\
.caption{color:#666;font-size:.9rem}.info{background:#e8f0fe;padding:.75rem;border-radius:6px}\
.error{background:#fdecea;padding:.75rem;border-radius:6px}\
.warning{background:#fff4e5;padding:.75rem;border-radius:6px;margin-top:.5rem}\
table{border-collapse:collapse;width:100%;margin:1rem 0}td,th{border:1px solid #ddd;padding:.4rem}";

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `data:` URI carrying the calendar document for the download link.
pub fn calendar_data_uri(calendar: &str) -> String {
    format!("data:text/calendar;charset=utf-8;base64,{}", STANDARD.encode(calendar))
}

/// Render the full page: header, form, and the outcome of the last submission.
pub fn render_page(
    model: &str,
    form: &ScheduleForm,
    outcome: Option<&Result<PlannedSchedule>>,
) -> String {
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"ko\"><head><meta charset=\"utf-8\">\
         <title>{PAGE_TITLE}</title><style>{STYLE}</style></head><body>\
         <h1>🗓️ {PAGE_TITLE}</h1>\
         <p class=\"caption\">🚀 적용된 모델: <code>{model}</code> (Lite 버전)</p>",
        model = escape_html(model),
    );

    render_form(&mut html, form);

    match outcome {
        Some(Ok(planned)) => render_schedule(&mut html, planned),
        Some(Err(err)) => {
            let _ = write!(
                html,
                "<div class=\"error\">{}</div><div class=\"warning\">{}</div>",
                escape_html(&format!("{MSG_ERROR_PREFIX}{err}")),
                escape_html(MSG_QUOTA_HINT),
            );
        }
        None => {}
    }

    html.push_str("</body></html>");
    html
}

fn render_form(html: &mut String, form: &ScheduleForm) {
    let _ = write!(
        html,
        "<form method=\"post\" action=\"/schedule\"><div class=\"card\"><div class=\"row\">\
         <label>시작<input type=\"time\" name=\"start_time\" value=\"{start}\" required></label>\
         <label>종료<input type=\"time\" name=\"end_time\" value=\"{end}\" required></label>\
         </div><label>컨디션<input type=\"text\" name=\"condition\" value=\"{condition}\"></label>\
         </div><details class=\"card\"><summary>규칙 설정</summary>\
         <label>평일<textarea name=\"weekday_rule\" rows=\"2\">{weekday}</textarea></label>\
         <label>주말<textarea name=\"weekend_rule\" rows=\"2\">{weekend}</textarea></label>\
         </details><button type=\"submit\">스케줄 생성 ✨</button></form>",
        start = escape_html(&form.start_time),
        end = escape_html(&form.end_time),
        condition = escape_html(&form.condition),
        weekday = escape_html(&form.weekday_rule),
        weekend = escape_html(&form.weekend_rule),
    );
}

fn render_schedule(html: &mut String, planned: &PlannedSchedule) {
    let _ = write!(
        html,
        "<div class=\"info\">{}</div><p class=\"caption\">응답 모델: <code>{}</code></p>\
         <table><thead><tr><th>activity</th><th>start_time</th><th>end_time</th>\
         <th>description</th></tr></thead><tbody>",
        escape_html(MSG_COMPLETED),
        escape_html(&planned.model),
    );

    for item in &planned.items {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&item.activity),
            escape_html(&item.start_time),
            escape_html(&item.end_time),
            escape_html(&item.description),
        );
    }

    let _ = write!(
        html,
        "</tbody></table><a href=\"{href}\" download=\"{CALENDAR_FILENAME}\">📅 캘린더 저장</a>",
        href = calendar_data_uri(&planned.calendar),
    );
}
