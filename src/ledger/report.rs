//! Report shapes produced by the ledger and their line-oriented text rendering.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, Result};

use super::{entry::Classification, format::LineFormat};

pub const RULE: &str = "----------------------------------------";
pub const BANNER: &str = "========================================";
pub const GOAL_ACHIEVED_MESSAGE: &str = "Congratulations! The goal is achieved.";
pub const NO_GOALS_MESSAGE: &str = "No financial goals set yet.";

const AMOUNT_COLUMN_WIDTH: usize = 15;
const LABEL_COLUMN_WIDTH: usize = 20;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryLine {
    pub name: String,
    pub amount: f64,
    pub classification: Classification,
    pub display: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GoalLine {
    pub name: String,
    pub current_amount: f64,
    pub target_amount: f64,
    pub progress_percent: f64,
    pub achieved: bool,
    pub display: String,
}

/// Full budget view: totals, every entry and every goal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetReport {
    pub total_income: f64,
    pub total_expenses: f64,
    pub savings: f64,
    pub entries: Vec<EntryLine>,
    pub goals: Vec<GoalLine>,
}

impl BudgetReport {
    pub fn render(&self, format: &LineFormat) -> Vec<String> {
        let mut lines = vec![
            String::from("Monthly Budget Summary:"),
            format!("Total Income: {}", format.money(self.total_income)),
            format!("Total Expenses: {}", format.money(self.total_expenses)),
            format!("Savings: {}", format.money(self.savings)),
            String::new(),
            String::from("Wish List and Expenses:"),
        ];
        lines.extend(self.entries.iter().map(|entry| entry.display.clone()));
        lines.push(String::new());
        lines.push(String::from("Financial Goals:"));
        lines.extend(render_goal_lines(&self.goals));
        lines
    }
}

/// Display lines for goals, each achieved goal followed by a congratulation line.
pub fn render_goal_lines(goals: &[GoalLine]) -> Vec<String> {
    let mut lines = Vec::with_capacity(goals.len());
    for goal in goals {
        lines.push(goal.display.clone());
        if goal.achieved {
            lines.push(GOAL_ACHIEVED_MESSAGE.to_string());
        }
    }
    lines
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisRow {
    pub name: String,
    pub amount: f64,
    pub classification: Classification,
}

/// Essential / non-essential breakdown with the trailing savings summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisReport {
    pub rows: Vec<AnalysisRow>,
    pub total_expenses: f64,
    pub savings: f64,
    pub remaining_balance: f64,
}

impl AnalysisReport {
    pub fn render(&self, format: &LineFormat) -> String {
        let mut lines = vec![
            String::from("Expense Analysis:"),
            RULE.to_string(),
            format!(
                "{}{:<amount$}{:<label$}",
                format.label("Category"),
                "Amount",
                "Essential",
                amount = AMOUNT_COLUMN_WIDTH,
                label = LABEL_COLUMN_WIDTH
            )
            .trim_end()
            .to_string(),
            RULE.to_string(),
        ];
        for row in &self.rows {
            let amount = format!("{:.2}", row.amount);
            lines.push(format!(
                "{}: {}{:<width$}{}",
                format.label(&row.name),
                format.currency,
                amount,
                row.classification,
                width = AMOUNT_COLUMN_WIDTH
            ));
        }
        lines.push(RULE.to_string());
        lines.push(format!(
            "Total Expenses: {}",
            format.money(self.total_expenses)
        ));
        lines.push(format!("Savings: {}", format.money(self.savings)));
        lines.push(format!(
            "Remaining Balance: {}",
            format.money(self.remaining_balance)
        ));
        lines.push(BANNER.to_string());

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PercentageRow {
    pub name: String,
    pub percent: f64,
}

pub fn render_percentages(rows: &[PercentageRow], format: &LineFormat) -> String {
    let mut lines = vec![
        String::from("Expense Budget Analysis (%):"),
        RULE.to_string(),
        format!("{}Percentage", format.label("Category")),
        RULE.to_string(),
    ];
    for row in rows {
        lines.push(format!("{}: {:.2}%", format.label(&row.name), row.percent));
    }
    lines.push(BANNER.to_string());
    lines.join("\n")
}

/// Output shape used when the analysis is handed to the file writer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ExportFormat {
    type Err = BudgetError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            other => Err(BudgetError::invalid(format!(
                "unknown export format `{other}` (use text or json)"
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Text => f.write_str("text"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}
