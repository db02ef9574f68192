//! Heuristic business insights derived from profiling results.
//!
//! [`generate_insights`] walks a fixed sequence of checks over the dataset:
//! overall data quality first, then domain-vocabulary findings (age, premium,
//! claim, region), then one outlier warning per numeric column. The output
//! order is the generation order and is fully deterministic.
//!
//! [`report::render_report`] serializes the findings into a fixed markdown
//! document.

pub mod report;

use serde::Serialize;

use crate::profiling::classify::classify;
use crate::profiling::outliers::{exceeds_report_threshold, iqr_outliers, MIN_VALUES};
use crate::profiling::stats::{frequency_table, round1};
use crate::types::{format_number, ColumnType, Dataset};

pub use report::{render_report, render_report_now};

/// Completeness percentage below which data quality becomes a warning.
/// Strict comparison: exactly 90.0 still counts as high quality.
const QUALITY_THRESHOLD: f64 = 90.0;

/// Kind of a generated finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Positive finding.
    Success,
    /// Something the caller should investigate.
    Warning,
    /// Neutral descriptive finding.
    Info,
}

impl InsightKind {
    /// Capitalized label for report rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// A generated, human-readable finding plus recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub recommendation: String,
}

/// Semantic role a column can play in the domain vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Age,
    Premium,
    Claim,
    Region,
    Gender,
    Policy,
}

/// Static synonym table, in check order. A role binds to the FIRST header
/// whose lowercased name contains any synonym as a substring.
const ROLE_SYNONYMS: &[(Role, &[&str])] = &[
    (Role::Age, &["age", "customer_age", "policyholder_age"]),
    (
        Role::Premium,
        &["premium", "premium_amount", "annual_premium", "monthly_premium"],
    ),
    (Role::Claim, &["claim", "claim_amount", "claims", "claim_total"]),
    (Role::Region, &["region", "state", "location", "area", "zone"]),
    (Role::Gender, &["gender", "sex"]),
    (Role::Policy, &["policy_type", "coverage_type", "plan", "product"]),
];

/// Bind every role to a header, where one matches.
///
/// Gender and policy currently feed no insight but are bound all the same,
/// so callers can see the full vocabulary match.
pub fn bind_roles(headers: &[String]) -> Vec<(Role, String)> {
    ROLE_SYNONYMS
        .iter()
        .filter_map(|&(role, synonyms)| {
            headers
                .iter()
                .find(|h| {
                    let lower = h.to_lowercase();
                    synonyms.iter().any(|syn| lower.contains(syn))
                })
                .map(|h| (role, h.clone()))
        })
        .collect()
}

/// Overall completeness across all cells, as a percentage rounded to 1
/// decimal. An empty dataset counts as fully complete.
pub fn completeness_percentage(dataset: &Dataset) -> f64 {
    let total = dataset.total_cells();
    if total == 0 {
        return 100.0;
    }
    let missing: usize = dataset
        .rows
        .iter()
        .flat_map(|row| row.iter())
        .filter(|c| c.is_missing())
        .count();
    round1((total - missing) as f64 / total as f64 * 100.0)
}

/// Generate the ordered insight list for a dataset.
pub fn generate_insights(dataset: &Dataset) -> Vec<Insight> {
    let mut findings = Vec::new();

    let numeric_headers: Vec<&str> = dataset
        .headers
        .iter()
        .map(String::as_str)
        .filter(|h| {
            dataset
                .column(h)
                .is_some_and(|cells| classify(cells) == ColumnType::Numeric)
        })
        .collect();
    let is_numeric = |name: &str| numeric_headers.contains(&name);

    // 1. Data quality, always first. The threshold compares the ROUNDED
    // percentage, so 89.96% reads as 90.0% and lands in the high branch.
    let completeness = completeness_percentage(dataset);
    if completeness < QUALITY_THRESHOLD {
        findings.push(Insight {
            kind: InsightKind::Warning,
            title: "Data Quality Concern".to_string(),
            description: format!(
                "Data completeness is {completeness:.1}%, indicating significant missing values that may impact analysis."
            ),
            recommendation:
                "Consider data imputation strategies or investigate data collection processes."
                    .to_string(),
        });
    } else {
        findings.push(Insight {
            kind: InsightKind::Success,
            title: "High Data Quality".to_string(),
            description: format!(
                "Excellent data completeness at {completeness:.1}%, providing a solid foundation for analysis."
            ),
            recommendation: "Proceed with advanced analytics and predictive modeling.".to_string(),
        });
    }

    // 2. Domain vocabulary binding.
    let bound = bind_roles(&dataset.headers);
    let role_column = |role: Role| {
        bound
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, name)| name.as_str())
    };

    // 3. Numeric roles in fixed order: age, premium, claim.
    if let Some(col) = role_column(Role::Age).filter(|&c| is_numeric(c)) {
        let ages = dataset.numeric_values(col);
        if !ages.is_empty() {
            let mean = ages.iter().sum::<f64>() / ages.len() as f64;
            let min = ages.iter().copied().fold(f64::INFINITY, f64::min);
            let max = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            findings.push(Insight {
                kind: InsightKind::Info,
                title: "Customer Demographics".to_string(),
                description: format!(
                    "Average customer age is {mean:.1} years (range: {}-{}). This indicates the primary customer segment.",
                    format_number(min),
                    format_number(max)
                ),
                recommendation:
                    "Consider age-based premium adjustments and targeted marketing campaigns for different age groups."
                        .to_string(),
            });
        }
    }

    if let Some(col) = role_column(Role::Premium).filter(|&c| is_numeric(c)) {
        // Zero and negative premiums are excluded from this calculation only.
        let mut positive: Vec<f64> = dataset
            .numeric_values(col)
            .into_iter()
            .filter(|&p| p > 0.0)
            .collect();
        let (mean, median) = if positive.is_empty() {
            (0.0, 0.0)
        } else {
            let mean = positive.iter().sum::<f64>() / positive.len() as f64;
            positive.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            (mean, positive[positive.len() / 2])
        };
        findings.push(Insight {
            kind: InsightKind::Info,
            title: "Premium Structure".to_string(),
            description: format!(
                "Average premium is ${mean:.2} with a median of ${median:.2}. This suggests the pricing distribution."
            ),
            recommendation:
                "Analyze premium vs. claims ratio to optimize pricing strategies and identify profitable segments."
                    .to_string(),
        });
    }

    if let Some(col) = role_column(Role::Claim).filter(|&c| is_numeric(c)) {
        let claims: Vec<f64> = dataset
            .numeric_values(col)
            .into_iter()
            .filter(|&c| c >= 0.0)
            .collect();
        let (mean, claim_rate) = if claims.is_empty() {
            (0.0, 0.0)
        } else {
            let mean = claims.iter().sum::<f64>() / claims.len() as f64;
            let non_zero = claims.iter().filter(|&&c| c != 0.0).count();
            (mean, non_zero as f64 / claims.len() as f64 * 100.0)
        };
        findings.push(Insight {
            kind: InsightKind::Info,
            title: "Claims Pattern".to_string(),
            description: format!(
                "Average claim amount is ${mean:.2} with a claim rate of {claim_rate:.1}%."
            ),
            recommendation:
                "Focus on claim prevention strategies and risk assessment improvements for high-claim segments."
                    .to_string(),
        });
    }

    // 4. Regional concentration, only for a non-numeric region column.
    if let Some(col) = role_column(Role::Region).filter(|&c| !is_numeric(c)) {
        if let Some(cells) = dataset.column(col) {
            let mut table = frequency_table(cells.filter(|c| !c.is_missing()));
            let present: usize = table.iter().map(|(_, n)| n).sum();
            // Stable sort keeps the first-seen category on top for ties.
            table.sort_by(|a, b| b.1.cmp(&a.1));
            if let Some((top_region, top_count)) = table.into_iter().next() {
                let share = top_count as f64 / present as f64 * 100.0;
                findings.push(Insight {
                    kind: InsightKind::Info,
                    title: "Geographic Distribution".to_string(),
                    description: format!(
                        "{top_region} represents {share:.1}% of customers, indicating geographic concentration."
                    ),
                    recommendation:
                        "Consider regional risk factors and local market expansion opportunities."
                            .to_string(),
                });
            }
        }
    }

    // 5. Outlier pass over every numeric column, in header order.
    for header in &numeric_headers {
        let values = dataset.numeric_values(header);
        if values.len() <= MIN_VALUES {
            continue;
        }
        let summary = iqr_outliers(&values);
        if exceeds_report_threshold(summary, values.len()) {
            findings.push(Insight {
                kind: InsightKind::Warning,
                title: format!("Outliers in {header}"),
                description: format!(
                    "{} outliers detected ({:.1}% of data).",
                    summary.outlier_count, summary.outlier_rate
                ),
                recommendation:
                    "Investigate outliers for data entry errors or legitimate extreme cases that may need special handling."
                        .to_string(),
            });
        }
    }

    findings
}
