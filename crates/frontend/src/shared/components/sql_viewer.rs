use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use leptos::task::spawn_local;

const KEYWORDS: &[&str] = &[
    "LOAD", "DATA", "INFILE", "LOCAL", "INTO", "TABLE", "CHARACTER", "SET", "FIELDS",
    "TERMINATED", "BY", "ENCLOSED", "OPTIONALLY", "ESCAPED", "LINES", "IGNORE", "ROWS", "COPY",
    "FROM", "WITH", "FORMAT", "CSV", "HEADER", "DELIMITER", "QUOTE", "TRUE", "FALSE", "NULL",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlTokenKind {
    Keyword,
    String,
    Identifier,
    Plain,
}

impl SqlTokenKind {
    fn class(&self) -> &'static str {
        match self {
            SqlTokenKind::Keyword => "sql-keyword",
            SqlTokenKind::String => "sql-string",
            SqlTokenKind::Identifier => "sql-identifier",
            SqlTokenKind::Plain => "sql-plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlToken {
    pub kind: SqlTokenKind,
    pub text: String,
}

fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word))
}

fn push(tokens: &mut Vec<SqlToken>, kind: SqlTokenKind, text: String) {
    match tokens.last_mut() {
        Some(last) if kind == SqlTokenKind::Plain && last.kind == SqlTokenKind::Plain => {
            last.text.push_str(&text)
        }
        _ => tokens.push(SqlToken { kind, text }),
    }
}

/// Split generated SQL into highlightable tokens.
///
/// Concatenating the token texts gives back the input unchanged. Inside a
/// quoted literal a backslash escapes the next character; an unterminated
/// literal runs to the end of the text.
pub fn tokenize_sql(sql: &str) -> Vec<SqlToken> {
    let chars: Vec<char> = sql.chars().collect();
    let mut tokens: Vec<SqlToken> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch == '\'' {
            let start = i;
            i += 1;
            while i < chars.len() {
                match chars[i] {
                    '\\' => i += 2,
                    '\'' => {
                        i += 1;
                        break;
                    }
                    _ => i += 1,
                }
            }
            let end = i.min(chars.len());
            push(&mut tokens, SqlTokenKind::String, chars[start..end].iter().collect());
        } else if ch.is_alphabetic() || ch == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let kind = if is_keyword(&word) {
                SqlTokenKind::Keyword
            } else {
                SqlTokenKind::Identifier
            };
            push(&mut tokens, kind, word);
        } else {
            push(&mut tokens, SqlTokenKind::Plain, ch.to_string());
            i += 1;
        }
    }

    tokens
}

/// Read-only box for a generated statement, with a copy button.
#[component]
pub fn SqlViewer(
    #[prop(into)]
    sql: Signal<String>,
) -> impl IntoView {
    let toast = use_toast();

    let copy = move |_| {
        let text = sql.get_untracked();
        if text.trim().is_empty() {
            toast.warning("No SQL to copy");
            return;
        }
        spawn_local(async move {
            if copy_to_clipboard(&text).await {
                toast.success("SQL copied to clipboard");
            } else {
                toast.error("Could not write to the clipboard");
            }
        });
    };

    view! {
        <div class="sql-viewer">
            <div class="sql-viewer__toolbar">
                <span class="sql-viewer__title">"Generated SQL"</span>
                <Button variant="secondary" size="sm" on_click=Callback::new(copy)>
                    {icon("copy")}
                    "Copy"
                </Button>
            </div>
            {move || {
                let text = sql.get();
                if text.is_empty() {
                    view! {
                        <p class="sql-viewer__placeholder text-muted">
                            "The statement will appear here once generated"
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <pre class="sql-viewer__code">
                            {tokenize_sql(&text)
                                .into_iter()
                                .map(|token| view! { <span class=token.kind.class()>{token.text}</span> })
                                .collect_view()}
                        </pre>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sql: &str) -> Vec<(SqlTokenKind, String)> {
        tokenize_sql(sql)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_tokens_rebuild_input() {
        let sql = "LOAD DATA INFILE '/tmp/a.csv'\nINTO TABLE sales\nFIELDS TERMINATED BY ','\nENCLOSED BY '\"'\nLINES TERMINATED BY '\\n'\nIGNORE 1 ROWS (id, name);";
        let rebuilt: String = tokenize_sql(sql).into_iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, sql);
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("COPY sales (id)"),
            vec![
                (SqlTokenKind::Keyword, "COPY".to_string()),
                (SqlTokenKind::Plain, " ".to_string()),
                (SqlTokenKind::Identifier, "sales".to_string()),
                (SqlTokenKind::Plain, " (".to_string()),
                (SqlTokenKind::Identifier, "id".to_string()),
                (SqlTokenKind::Plain, ")".to_string()),
            ]
        );
        assert_eq!(kinds("header")[0].0, SqlTokenKind::Keyword);
    }

    #[test]
    fn test_string_literals() {
        let tokens = tokenize_sql("BY '\\n' x");
        assert_eq!(tokens[2].kind, SqlTokenKind::String);
        assert_eq!(tokens[2].text, "'\\n'");

        let unterminated = tokenize_sql("FROM '/tmp/a");
        assert_eq!(unterminated.last().map(|t| t.kind), Some(SqlTokenKind::String));
        assert_eq!(unterminated.last().map(|t| t.text.as_str()), Some("'/tmp/a"));
    }
}
