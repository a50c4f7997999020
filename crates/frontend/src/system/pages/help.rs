use crate::shared::components::page_header::PageHeader;
use contracts::enums::InsertionMode;
use leptos::prelude::*;
use thaw::Card;

struct HelpTopic {
    title: &'static str,
    summary: &'static str,
    features: &'static [&'static str],
    steps: &'static [&'static str],
}

static TOPICS: [HelpTopic; 3] = [
    HelpTopic {
        title: "Insert Data",
        summary: "Insert the rows of one or more CSV files into database tables. Works with \
                  MySQL, MariaDB, Postgres and SQLite.",
        features: &[
            "Insert data into a new table",
            "Insert data into an existing table",
            "Optimize the type of the columns (VARCHAR(MAX_LENGTH))",
            "Several files at once, one table per file",
            "No privileges required to insert data",
        ],
        steps: &[
            "Fill in the connection settings or pick a saved configuration",
            "Connect to the database",
            "Select the CSV file(s) you want to insert",
            "Check the table name and choose a mode of insertion",
            "Click on the insert button and wait for the log to report the result",
        ],
    },
    HelpTopic {
        title: "Load Data",
        summary: "Generate a LOAD DATA INFILE (MySQL, MariaDB) or COPY (Postgres) statement \
                  for a CSV file, to run yourself.",
        features: &[
            "Column list taken from the CSV header",
            "The fastest way to bulk load a table",
            "Requires the LOAD DATA (or COPY) privilege on the server",
        ],
        steps: &[
            "Select the CSV file",
            "Enter the table name and choose the database engine",
            "Generate the statement",
            "Copy it to the clipboard",
        ],
    },
    HelpTopic {
        title: "Download",
        summary: "Export one or more tables of a connected database to delimited files.",
        features: &[
            "Select several tables at once",
            "Comma, semicolon, space or pipe separator",
            "One file per table in the chosen folder",
        ],
        steps: &[
            "Connect with a saved configuration or the manual form",
            "Select the tables to export",
            "Choose a separator and a destination folder",
            "Click on the download button and wait for the loader to disappear",
        ],
    },
];

fn topic_card(topic: &'static HelpTopic) -> impl IntoView {
    view! {
        <Card>
            <h2 class="card__title">{topic.title}</h2>
            <p>{topic.summary}</p>
            <div class="help__columns">
                <div>
                    <h3>"Features"</h3>
                    <ul>
                        {topic.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Usage"</h3>
                    <ol>
                        {topic.steps.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                    </ol>
                </div>
            </div>
        </Card>
    }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Help" subtitle="How to use FileFlow" icon_name="help" />

            <div class="help">
                {TOPICS.iter().map(topic_card).collect_view()}

                <Card>
                    <h2 class="card__title">"Modes of Insertion"</h2>
                    <ul>
                        {InsertionMode::ALL
                            .iter()
                            .map(|mode| view! {
                                <li><strong>{mode.label()}": "</strong>{mode.description()}</li>
                            })
                            .collect_view()}
                    </ul>
                    <p class="text-muted">
                        "Note: optimized mode takes longer but gives better column types."
                    </p>
                </Card>
            </div>
        </div>
    }
}
