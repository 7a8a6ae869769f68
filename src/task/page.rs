use super::task_models::Task;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Smart To-Do List</title>
<style>
body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; }
#task-list { list-style: none; padding: 0; }
#task-list li { display: flex; gap: 1rem; align-items: center; padding: .4rem 0; border-bottom: 1px solid #eee; }
.priority.low { color: #2e7d32; }
.priority.medium { color: #f9a825; }
.priority.high { color: #c62828; }
.remind-at { color: #666; font-size: .9em; }
.delete-btn { margin-left: auto; border: none; background: none; cursor: pointer; }
</style>
</head>
<body>
<h1>Smart To-Do List</h1>
<div class="task-form">
<input type="text" id="task-input" placeholder="Add a new task" maxlength="200">
<select id="priority-input">
<option value="low">Low</option>
<option value="medium" selected>Medium</option>
<option value="high">High</option>
</select>
<input type="datetime-local" id="remind-at-input">
<button id="add-task-btn">Add Task</button>
<button id="voice-input-btn" title="Voice input">&#127908;</button>
</div>
"#;

const PAGE_TAIL: &str = r#"<script src="/static/script.js"></script>
</body>
</html>
"#;

/// Renders the index page. Task content is escaped; the delete button carries
/// the content the delete route matches on.
pub fn render_index(tasks: &[Task]) -> String {
    let mut html = String::from(PAGE_HEAD);

    html.push_str("<ul id=\"task-list\">");
    for task in tasks {
        let priority = task.priority();
        html.push_str("<li data-id=\"");
        html.push_str(&task.id.to_string());
        html.push_str("\"><span>");
        html.push_str(&html_escape(&task.content));
        html.push_str("</span><span class=\"priority ");
        html.push_str(priority.label());
        html.push_str("\">");
        html.push_str(&priority.to_string());
        html.push_str("</span><span class=\"remind-at\">");
        match task.formatted_reminder() {
            Some(at) => html.push_str(&at),
            None => html.push_str("No reminder"),
        }
        html.push_str("</span><button class=\"delete-btn\" data-task=\"");
        html.push_str(&html_escape(&task.content));
        html.push_str("\">&#10060;</button></li>");
    }
    html.push_str("</ul>\n");

    html.push_str(PAGE_TAIL);
    html
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_empty_list() {
        let html = render_index(&[]);
        assert!(html.contains("<ul id=\"task-list\"></ul>"));
        assert!(html.contains("/static/script.js"));
    }

    #[test]
    fn test_render_tasks() {
        let tasks = vec![
            Task {
                id: 1,
                content: "Buy milk".into(),
                priority: 1,
                remind_at: NaiveDate::from_ymd_opt(2024, 6, 1).and_then(|d| d.and_hms_opt(9, 30, 0)),
            },
            Task {
                id: 2,
                content: "Call dentist".into(),
                priority: 3,
                remind_at: None,
            },
        ];
        let html = render_index(&tasks);
        assert!(html.contains("<span>Buy milk</span>"));
        assert!(html.contains("<span class=\"priority low\">Low</span>"));
        assert!(html.contains("2024-06-01 09:30"));
        assert!(html.contains("<span class=\"priority high\">High</span>"));
        assert!(html.contains("No reminder"));
        assert!(html.find("Buy milk") < html.find("Call dentist"));
    }

    #[test]
    fn test_render_escapes_content() {
        let tasks = vec![Task {
            id: 7,
            content: "<script>alert(\"x\")</script> & 'co'".into(),
            priority: 2,
            remind_at: None,
        }];
        let html = render_index(&tasks);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;co&#39;"));
    }
}
