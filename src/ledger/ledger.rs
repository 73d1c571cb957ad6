use tracing::{debug, info};

use crate::errors::{BudgetError, Result};

use super::{
    category::{ExpenseCategory, FIXED_CATEGORY_COUNT, FIXED_CATEGORY_NAMES},
    entry::BudgetEntry,
    format::LineFormat,
    goal::FinancialGoal,
    income::parse_income,
    report::{
        AnalysisReport, AnalysisRow, BudgetReport, EntryLine, ExportFormat, GoalLine,
        PercentageRow,
    },
};

/// Owns every entry and goal of a budgeting session together with the running totals.
///
/// `total_expenses` always equals the sum of [`BudgetEntry::amount`] over the entries; it is
/// recomputed from scratch after each mutation. Every operation validates its input before
/// touching any state.
#[derive(Debug, Clone, Default)]
pub struct BudgetLedger {
    family_member_count: i32,
    total_income: f64,
    total_expenses: f64,
    entries: Vec<BudgetEntry>,
    goals: Vec<FinancialGoal>,
}

impl BudgetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn family_member_count(&self) -> i32 {
        self.family_member_count
    }

    pub fn total_income(&self) -> f64 {
        self.total_income
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_expenses
    }

    /// Income minus expenses; negative when overspending.
    pub fn savings(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    pub fn remaining_balance(&self) -> f64 {
        self.savings().max(0.0)
    }

    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    pub fn goals(&self) -> &[FinancialGoal] {
        &self.goals
    }

    pub fn goal(&self, name: &str) -> Option<&FinancialGoal> {
        self.goals
            .iter()
            .find(|goal| goal.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Stores the household size. Values of zero or below are kept as given.
    pub fn set_family_member_count(&mut self, count: i32) {
        self.family_member_count = count;
        debug!(count, "family member count updated");
    }

    /// Replaces the total income with the sum of `raw_amounts`.
    ///
    /// Every value is parsed before anything changes, so a malformed entry leaves the previous
    /// total in place.
    pub fn add_income<S: AsRef<str>>(&mut self, raw_amounts: &[S]) -> Result<f64> {
        let amounts = raw_amounts
            .iter()
            .map(|raw| parse_income(raw.as_ref()))
            .collect::<Result<Vec<f64>>>()?;
        self.total_income = amounts.iter().sum();
        info!(
            contributors = amounts.len(),
            total_income = self.total_income,
            "income recorded"
        );
        Ok(self.total_income)
    }

    /// Records one essential category per fixed household category, in canonical order.
    ///
    /// A repeated call replaces the categories captured by the previous one; wish-list items
    /// are kept.
    pub fn add_fixed_expenses(&mut self, amounts: &[f64]) -> Result<f64> {
        if amounts.len() != FIXED_CATEGORY_COUNT {
            return Err(BudgetError::invalid(format!(
                "expected {} fixed expense amounts, got {}",
                FIXED_CATEGORY_COUNT,
                amounts.len()
            )));
        }
        for (name, amount) in FIXED_CATEGORY_NAMES.iter().zip(amounts) {
            validate_amount(name, *amount)?;
        }

        let replaced = self.entries.len();
        self.entries.retain(|entry| !entry.is_essential());
        let replaced = replaced - self.entries.len();

        let categories = FIXED_CATEGORY_NAMES
            .iter()
            .zip(amounts)
            .map(|(name, amount)| ExpenseCategory::essential(*name, *amount));
        self.entries.extend(categories.map(BudgetEntry::Category));
        self.recompute_expenses();
        info!(
            replaced,
            total_expenses = self.total_expenses,
            "fixed expenses recorded"
        );
        Ok(self.total_expenses)
    }

    /// Appends a non-essential purchase and returns the new expense total over all entries.
    pub fn add_wish_list_item(&mut self, name: &str, price: f64) -> Result<f64> {
        let name = validate_name(name, "wish-list item")?;
        validate_amount(name, price)?;
        self.entries.push(ExpenseCategory::wish_list(name, price).into());
        self.recompute_expenses();
        info!(
            item = name,
            price,
            total_expenses = self.total_expenses,
            "wish-list item added"
        );
        Ok(self.total_expenses)
    }

    pub fn add_financial_goal(&mut self, name: &str, target_amount: f64) -> Result<()> {
        let name = validate_name(name, "financial goal")?;
        if !target_amount.is_finite() || target_amount <= 0.0 {
            return Err(BudgetError::invalid(format!(
                "target for `{name}` must be greater than zero"
            )));
        }
        self.goals.push(FinancialGoal::new(name, target_amount));
        info!(goal = name, target_amount, "financial goal added");
        Ok(())
    }

    /// Adds `amount` to the goal called `name` and reports whether it is now achieved.
    pub fn contribute_to_goal(&mut self, name: &str, amount: f64) -> Result<bool> {
        let needle = name.trim();
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.name.eq_ignore_ascii_case(needle))
            .ok_or_else(|| BudgetError::GoalNotFound(needle.to_string()))?;
        goal.contribute(amount)?;
        info!(
            goal = %goal.name,
            amount,
            current_amount = goal.current_amount,
            achieved = goal.is_achieved(),
            "goal contribution recorded"
        );
        Ok(goal.is_achieved())
    }

    pub fn view_report(&self, format: &LineFormat) -> Result<BudgetReport> {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                Ok(EntryLine {
                    name: entry.name().to_string(),
                    amount: entry.amount(),
                    classification: entry.classification(),
                    display: entry.display_line(format)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BudgetReport {
            total_income: self.total_income,
            total_expenses: self.total_expenses,
            savings: self.savings(),
            entries,
            goals: self.goal_lines(format)?,
        })
    }

    pub fn goal_lines(&self, format: &LineFormat) -> Result<Vec<GoalLine>> {
        self.goals
            .iter()
            .map(|goal| {
                Ok(GoalLine {
                    name: goal.name.clone(),
                    current_amount: goal.current_amount,
                    target_amount: goal.target_amount,
                    progress_percent: goal.progress_percent()?,
                    achieved: goal.is_achieved(),
                    display: goal.display_line(format)?,
                })
            })
            .collect()
    }

    pub fn analyze_expenses(&self) -> AnalysisReport {
        let rows = self
            .entries
            .iter()
            .map(|entry| AnalysisRow {
                name: entry.name().to_string(),
                amount: entry.amount(),
                classification: entry.classification(),
            })
            .collect();

        AnalysisReport {
            rows,
            total_expenses: self.total_expenses,
            savings: self.savings(),
            remaining_balance: self.remaining_balance(),
        }
    }

    /// Share of total expenses taken by each entry.
    ///
    /// Fails with [`BudgetError::DivisionByZero`] when there are no expenses to divide by.
    pub fn calculate_expense_percentage(&self) -> Result<Vec<PercentageRow>> {
        if self.total_expenses == 0.0 {
            return Err(BudgetError::DivisionByZero("expense percentages"));
        }
        let total = self.total_expenses;
        Ok(self
            .entries
            .iter()
            .map(|entry| PercentageRow {
                name: entry.name().to_string(),
                percent: entry.amount() / total * 100.0,
            })
            .collect())
    }

    /// Renders the expense analysis for a file writer; no I/O happens here.
    pub fn export_analysis(
        &self,
        line_format: &LineFormat,
        format: ExportFormat,
    ) -> Result<String> {
        let analysis = self.analyze_expenses();
        match format {
            ExportFormat::Text => Ok(analysis.render(line_format)),
            ExportFormat::Json => analysis.to_json(),
        }
    }

    /// Drops every owned entry and goal. Calling it again is a no-op.
    pub fn release(&mut self) {
        if self.entries.is_empty() && self.goals.is_empty() {
            return;
        }
        let entries = self.entries.len();
        let goals = self.goals.len();
        self.entries = Vec::new();
        self.goals = Vec::new();
        self.recompute_expenses();
        debug!(entries, goals, "ledger released");
    }

    fn recompute_expenses(&mut self) {
        self.total_expenses = self.entries.iter().map(BudgetEntry::amount).sum();
    }
}

fn validate_name<'a>(name: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::invalid(format!("{what} name cannot be empty")));
    }
    Ok(trimmed)
}

fn validate_amount(name: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(BudgetError::invalid(format!(
            "amount for `{name}` must be a non-negative number"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::Classification;

    fn fixed(first: f64) -> Vec<f64> {
        let mut amounts = vec![0.0; FIXED_CATEGORY_COUNT];
        amounts[0] = first;
        amounts
    }

    #[test]
    fn income_replaces_previous_total() {
        let mut ledger = BudgetLedger::new();
        assert_eq!(ledger.add_income(&["5k", "2000"]).unwrap(), 7000.0);
        assert_eq!(ledger.add_income(&["1k"]).unwrap(), 1000.0);
        assert_eq!(ledger.total_income(), 1000.0);
    }

    #[test]
    fn negative_income_is_recorded_as_given() {
        let mut ledger = BudgetLedger::new();
        assert_eq!(ledger.add_income(&["-20"]).unwrap(), -20.0);
        assert_eq!(ledger.add_income(&["1k", "-250"]).unwrap(), 750.0);
        assert_eq!(ledger.total_income(), 750.0);
    }

    #[test]
    fn spaced_suffix_is_rejected() {
        let mut ledger = BudgetLedger::new();
        ledger.add_income(&["100"]).unwrap();
        assert!(matches!(ledger.add_income(&["5 k"]), Err(BudgetError::Parse { .. })));
        assert_eq!(ledger.total_income(), 100.0);
    }

    #[test]
    fn malformed_income_keeps_previous_total() {
        let mut ledger = BudgetLedger::new();
        ledger.add_income(&["3000"]).unwrap();
        let err = ledger.add_income(&["1000", "lots"]).unwrap_err();
        assert!(matches!(err, BudgetError::Parse { .. }));
        assert_eq!(ledger.total_income(), 3000.0);
    }

    #[test]
    fn fixed_expenses_require_ten_amounts() {
        let mut ledger = BudgetLedger::new();
        let err = ledger.add_fixed_expenses(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidArgument(_)));
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn negative_fixed_amount_rejects_whole_batch() {
        let mut ledger = BudgetLedger::new();
        let mut amounts = fixed(100.0);
        amounts[7] = -1.0;
        assert!(ledger.add_fixed_expenses(&amounts).is_err());
        assert!(ledger.entries().is_empty());
        assert_eq!(ledger.total_expenses(), 0.0);
    }

    #[test]
    fn fixed_expenses_follow_canonical_order() {
        let mut ledger = BudgetLedger::new();
        let amounts: Vec<f64> = (1..=10u32).map(f64::from).collect();
        ledger.add_fixed_expenses(&amounts).unwrap();
        let names: Vec<&str> = ledger.entries().iter().map(BudgetEntry::name).collect();
        assert_eq!(names, FIXED_CATEGORY_NAMES.to_vec());
        assert!(ledger.entries().iter().all(BudgetEntry::is_essential));
        assert_eq!(ledger.total_expenses(), 55.0);
    }

    #[test]
    fn repeated_fixed_pass_replaces_categories_and_keeps_wishes() {
        let mut ledger = BudgetLedger::new();
        ledger.add_fixed_expenses(&fixed(1000.0)).unwrap();
        ledger.add_wish_list_item("Bike", 300.0).unwrap();
        ledger.add_fixed_expenses(&fixed(400.0)).unwrap();

        assert_eq!(ledger.entries().len(), FIXED_CATEGORY_COUNT + 1);
        assert_eq!(ledger.total_expenses(), 700.0);
        let sum: f64 = ledger.entries().iter().map(BudgetEntry::amount).sum();
        assert_eq!(ledger.total_expenses(), sum);
    }

    #[test]
    fn wish_list_rejects_blank_name_without_mutation() {
        let mut ledger = BudgetLedger::new();
        assert!(ledger.add_wish_list_item("  ", 10.0).is_err());
        assert!(ledger.add_wish_list_item("Phone", f64::INFINITY).is_err());
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn goals_need_positive_targets() {
        let mut ledger = BudgetLedger::new();
        for target in [0.0, -10.0, f64::NAN] {
            let err = ledger.add_financial_goal("Car", target).unwrap_err();
            assert!(matches!(err, BudgetError::InvalidArgument(_)));
        }
        assert!(ledger.goals().is_empty());
    }

    #[test]
    fn contributing_to_unknown_goal_fails() {
        let mut ledger = BudgetLedger::new();
        ledger.add_financial_goal("Car", 100.0).unwrap();
        let err = ledger.contribute_to_goal("Boat", 10.0).unwrap_err();
        assert!(matches!(err, BudgetError::GoalNotFound(name) if name == "Boat"));
        assert!(!ledger.contribute_to_goal("car", 60.0).unwrap());
        assert!(ledger.contribute_to_goal("CAR", 40.0).unwrap());
    }

    #[test]
    fn percentages_without_expenses_are_division_by_zero() {
        let mut ledger = BudgetLedger::new();
        ledger.add_fixed_expenses(&fixed(0.0)).unwrap();
        let err = ledger.calculate_expense_percentage().unwrap_err();
        assert!(matches!(err, BudgetError::DivisionByZero(_)));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let mut ledger = BudgetLedger::new();
        let amounts = [12.5, 40.0, 3.3, 0.0, 99.0, 7.0, 1.0, 18.2, 250.0, 4.4];
        ledger.add_fixed_expenses(&amounts).unwrap();
        ledger.add_wish_list_item("Laptop", 1234.56).unwrap();
        let rows = ledger.calculate_expense_percentage().unwrap();
        let total: f64 = rows.iter().map(|row| row.percent).sum();
        assert!((total - 100.0).abs() < 1e-9, "sum was {total}");
        assert!(rows.iter().all(|row| row.percent.is_finite()));
    }

    #[test]
    fn analysis_clamps_remaining_balance() {
        let mut ledger = BudgetLedger::new();
        ledger.add_income(&["100"]).unwrap();
        ledger.add_wish_list_item("Console", 250.0).unwrap();
        let analysis = ledger.analyze_expenses();
        assert_eq!(analysis.savings, -150.0);
        assert_eq!(analysis.remaining_balance, 0.0);
        assert_eq!(analysis.rows[0].classification, Classification::NonEssential);
    }

    #[test]
    fn export_matches_rendered_analysis() {
        let mut ledger = BudgetLedger::new();
        ledger.add_income(&["2k"]).unwrap();
        ledger.add_fixed_expenses(&fixed(500.0)).unwrap();
        let format = LineFormat::default();
        let exported = ledger.export_analysis(&format, ExportFormat::Text).unwrap();
        assert_eq!(exported, ledger.analyze_expenses().render(&format));
        let json = ledger.export_analysis(&format, ExportFormat::Json).unwrap();
        assert!(json.contains("\"remaining_balance\": 1500.0"));
    }

    #[test]
    fn view_report_lists_entries_and_goals() {
        let mut ledger = BudgetLedger::new();
        ledger.add_income(&["1000"]).unwrap();
        ledger.add_wish_list_item("Bike", 400.0).unwrap();
        ledger.add_financial_goal("Trip", 200.0).unwrap();
        ledger.contribute_to_goal("Trip", 200.0).unwrap();

        let report = ledger.view_report(&LineFormat::default()).unwrap();
        assert_eq!(report.savings, 600.0);
        assert_eq!(report.entries.len(), 1);
        assert!(report.goals[0].achieved);
        assert_eq!(report.goals[0].progress_percent, 100.0);
        assert!(report.goals[0].display.contains("(Progress: 100.00%)"));
    }

    #[test]
    fn release_is_idempotent() {
        let mut ledger = BudgetLedger::new();
        ledger.add_fixed_expenses(&fixed(10.0)).unwrap();
        ledger.add_financial_goal("Car", 5.0).unwrap();
        ledger.release();
        ledger.release();
        assert!(ledger.entries().is_empty());
        assert!(ledger.goals().is_empty());
        assert_eq!(ledger.total_expenses(), 0.0);
    }
}
