//! HTML for the prompt builder page.

/// Field values and results shown on the page.
#[derive(Debug, Default)]
pub struct PageState {
    pub project_name: String,
    pub end_goals: String,
    pub prompt: Option<String>,
    pub package_json: Option<String>,
}

pub fn builder_page(state: &PageState) -> String {
    let mut results = String::new();
    if let Some(prompt) = state.prompt.as_deref().filter(|prompt| !prompt.is_empty()) {
        results.push_str(&result_section("Single Prompt", prompt));
    }
    if let Some(json) = state.package_json.as_deref() {
        results.push_str(&result_section("Prompt Package (JSON)", json));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Prompt Builder</title>
    <style>
{css}
    </style>
</head>
<body>
    <div>
        <h2>Prompt Builder</h2>
        <form method="post" action="/generate">
            <label>
                Project Name
                <input name="project_name" value="{project_name}">
            </label>
            <label>
                End Goals
                <input name="end_goals" value="{end_goals}">
            </label>
            <button type="submit">Generate</button>
        </form>
{results}    </div>
</body>
</html>
"#,
        css = CSS,
        project_name = escape_html(&state.project_name),
        end_goals = escape_html(&state.end_goals),
        results = results,
    )
}

fn result_section(title: &str, body: &str) -> String {
    format!(
        "        <section>\n            <h3>{title}</h3>\n            <pre>{}</pre>\n        </section>\n",
        escape_html(body)
    )
}

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

const CSS: &str = r#"        body { font-family: system-ui, sans-serif; margin: 2rem; max-width: 56rem; }
        label { display: block; margin-bottom: 0.75rem; }
        input { display: block; width: 100%; padding: 0.4rem; }
        pre { background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn empty_prompt_hides_the_prompt_section() {
        let page = builder_page(&PageState {
            prompt: Some(String::new()),
            package_json: Some("{}".to_string()),
            ..PageState::default()
        });
        assert!(!page.contains("Single Prompt"));
        assert!(page.contains("Prompt Package (JSON)"));
    }
}
