use colored::Colorize;
use sayings::commands::CmdResult;
use sayings::config::OutputFormat;
use sayings::model::Record;

pub(super) fn print_result(result: &CmdResult, format: OutputFormat) {
    for line in render_records(&result.listed_records, format) {
        println!("{}", line);
    }
    print_diagnostics(&result.diagnostics);
}

fn print_diagnostics(diagnostics: &[String]) {
    for diagnostic in diagnostics {
        println!("{}", diagnostic.red());
    }
}

/// Record lines are never colored; their text form is the canonical render.
fn render_records(records: &[Record], format: OutputFormat) -> Vec<String> {
    records
        .iter()
        .map(|record| match format {
            OutputFormat::Text => record.render(),
            // Records hold only strings, so serialization cannot fail.
            OutputFormat::Json => {
                serde_json::to_string(record).expect("records serialize to JSON")
            }
        })
        .collect()
}
