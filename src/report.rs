use crate::usage::{ReportData, WorkflowUsage};

const TABLE_HEADER: &str = "| Workflow | Ubuntu (min) | Windows (min) | Macos (min) |\n";
const TABLE_SEPARATOR: &str = "| --- | --- | --- | --- |\n";

/// Fixed text surrounding the table.
#[derive(Debug, Clone)]
pub struct ReportText {
    pub title: String,
    pub note: String,
}

impl Default for ReportText {
    fn default() -> Self {
        Self {
            title: "Billable time for workflows in this billable cycle".to_string(),
            note: "Please note the following:

- This list shows the execution time for each Workflow at the time this Action was executed.
- Workflows that have been deleted at the time of execution will not be listed.
- Execution times using Larger runners are not included in the aggregation."
                .to_string(),
        }
    }
}

/// Renders the markdown report: title, one row per workflow sorted by name,
/// a bold total row and the note.
pub fn render_report(data: &ReportData, text: &ReportText) -> String {
    let mut report = format!("# {}\n\n", text.title);
    report.push_str(TABLE_HEADER);
    report.push_str(TABLE_SEPARATOR);
    for (name, usage) in data.iter() {
        push_row(&mut report, name, usage);
    }
    push_bold_row(&mut report, "Total", &data.total());
    report.push_str(&format!("\n{}\n", text.note));
    report
}

fn push_row(report: &mut String, name: &str, usage: &WorkflowUsage) {
    report.push_str(&format!(
        "| {name} | {} | {} | {} |\n",
        usage.ubuntu, usage.windows, usage.macos
    ));
}

fn push_bold_row(report: &mut String, name: &str, usage: &WorkflowUsage) {
    report.push_str(&format!(
        "| **{name}** | **{}** | **{}** | **{}** |\n",
        usage.ubuntu, usage.windows, usage.macos
    ));
}
