//! Markdown report rendering for generated insights.

use chrono::NaiveDate;

use crate::types::Dataset;

use super::Insight;

/// Render the analysis report as a markdown document.
///
/// The document is a pure function of (dataset metadata, insights,
/// `generated_on`): a fixed template with the dataset overview, one numbered
/// section per insight, the full column list, and a fixed next-steps
/// checklist. Suitable for writing to a `.md` file.
pub fn render_report(dataset: &Dataset, insights: &[Insight], generated_on: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str("# Insurance Data Analysis Report\n\n");

    out.push_str("## Dataset Overview\n");
    out.push_str(&format!(
        "- **Total Records**: {}\n",
        group_thousands(dataset.row_count())
    ));
    out.push_str(&format!("- **Total Columns**: {}\n", dataset.column_count()));
    out.push_str(&format!(
        "- **Generated**: {}\n\n",
        generated_on.format("%-m/%-d/%Y")
    ));

    out.push_str("## Key Insights\n");
    for (index, insight) in insights.iter().enumerate() {
        out.push_str(&format!("\n### {}. {}\n", index + 1, insight.title));
        out.push_str(&format!("**Type**: {}\n\n", insight.kind.label()));
        out.push_str(&format!("**Finding**: {}\n\n", insight.description));
        out.push_str(&format!("**Recommendation**: {}\n", insight.recommendation));
    }

    out.push_str("\n## Data Columns\n");
    for header in &dataset.headers {
        out.push_str(&format!("- {header}\n"));
    }

    out.push_str("\n## Next Steps\n");
    out.push_str("1. Implement data cleaning procedures for missing values\n");
    out.push_str("2. Develop predictive models for key metrics\n");
    out.push_str("3. Create automated monitoring dashboards\n");
    out.push_str("4. Establish data quality benchmarks\n");
    out.push_str("5. Design targeted business strategies based on insights\n");

    out.push_str("\n---\n");
    out.push_str("*This report was generated automatically based on the uploaded insurance dataset.*\n");

    out
}

/// [`render_report`] stamped with the current local date.
pub fn render_report_now(dataset: &Dataset, insights: &[Insight]) -> String {
    render_report(dataset, insights, chrono::Local::now().date_naive())
}

/// Formats a count with comma grouping ("12345" -> "12,345").
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
