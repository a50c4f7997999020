//! Per-page activity log.
//!
//! Lines are stamped with the local time and kept up to the limit from
//! [`AppSettings::log_limit`](crate::shared::settings::AppSettings).

use chrono::Local;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub time: String,
    pub message: String,
}

impl LogLine {
    pub fn render(&self) -> String {
        format!("[{}] {}", self.time, self.message)
    }
}

/// Append a line and drop the oldest ones beyond `limit`.
pub fn append_bounded(lines: &mut Vec<LogLine>, line: LogLine, limit: usize) {
    lines.push(line);
    if limit > 0 && lines.len() > limit {
        let overflow = lines.len() - limit;
        lines.drain(..overflow);
    }
}

/// The whole log as shown in the text area, one line per entry.
pub fn render_lines(lines: &[LogLine]) -> String {
    lines
        .iter()
        .map(LogLine::render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Copy)]
pub struct ActivityLog {
    lines: RwSignal<Vec<LogLine>>,
    limit: StoredValue<usize>,
}

impl ActivityLog {
    pub fn new(limit: usize) -> Self {
        Self {
            lines: RwSignal::new(Vec::new()),
            limit: StoredValue::new(limit),
        }
    }

    pub fn add(&self, message: impl Into<String>) {
        let line = LogLine {
            time: Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
        };
        log::debug!("activity: {}", line.message);
        let limit = self.limit.get_value();
        self.lines.update(|lines| append_bounded(lines, line, limit));
    }

    pub fn clear(&self) {
        self.lines.set(Vec::new());
    }

    pub fn text(&self) -> String {
        self.lines.with(|lines| render_lines(lines))
    }
}

#[component]
pub fn ActivityLogView(log: ActivityLog) -> impl IntoView {
    view! {
        <div class="activity-log">
            <label class="activity-log__title" for="activity-log">"Log"</label>
            <textarea
                id="activity-log"
                class="activity-log__area"
                readonly=true
                placeholder="Log history will appear here..."
                prop:value=move || log.text()
            ></textarea>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> LogLine {
        LogLine {
            time: "10:00:00".to_string(),
            message: format!("message {}", n),
        }
    }

    #[test]
    fn test_append_bounded() {
        let mut lines = Vec::new();
        for n in 0..5 {
            append_bounded(&mut lines, line(n), 3);
        }
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].message, "message 2");
    }

    #[test]
    fn test_zero_limit_keeps_everything() {
        let mut lines = Vec::new();
        for n in 0..4 {
            append_bounded(&mut lines, line(n), 0);
        }
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_lines() {
        let lines = vec![line(1), line(2)];
        assert_eq!(
            render_lines(&lines),
            "[10:00:00] message 1\n[10:00:00] message 2"
        );
        assert_eq!(render_lines(&[]), "");
    }
}
