use home_budget::errors::BudgetError;
use home_budget::ledger::{BudgetLedger, Classification, ExportFormat, LineFormat};

fn zeros_after(first: f64) -> [f64; 10] {
    let mut amounts = [0.0; 10];
    amounts[0] = first;
    amounts
}

#[test]
fn household_session_end_to_end() {
    let mut ledger = BudgetLedger::new();
    ledger.set_family_member_count(2);

    assert_eq!(ledger.add_income(&["5k", "2000"]).unwrap(), 7000.0);
    assert_eq!(ledger.add_fixed_expenses(&zeros_after(20_000.0)).unwrap(), 20_000.0);
    assert_eq!(ledger.savings(), -13_000.0);

    assert_eq!(ledger.add_wish_list_item("Bike", 15_000.0).unwrap(), 35_000.0);
    assert_eq!(ledger.total_expenses(), 35_000.0);

    ledger.add_financial_goal("Emergency Fund", 100_000.0).unwrap();
    assert!(!ledger.contribute_to_goal("Emergency Fund", 60_000.0).unwrap());
    assert!(ledger.contribute_to_goal("Emergency Fund", 40_000.0).unwrap());
    assert!(ledger.goal("Emergency Fund").unwrap().is_achieved());

    let report = ledger.view_report(&LineFormat::default()).unwrap();
    assert_eq!(report.entries.len(), 11);
    assert_eq!(report.savings, -28_000.0);
    assert!(report.goals[0].achieved);

    let analysis = ledger.analyze_expenses();
    assert_eq!(analysis.remaining_balance, 0.0);
    assert_eq!(analysis.rows[10].classification, Classification::NonEssential);

    ledger.release();
    ledger.release();
    assert!(ledger.entries().is_empty());
    assert!(ledger.goals().is_empty());
}

#[test]
fn income_shorthand_matches_plain_amounts() {
    let mut ledger = BudgetLedger::new();
    for value in [0.5, 1.0, 2.25, 12.0, 150.0] {
        let shorthand = ledger.add_income(&[format!("{value}k")]).unwrap();
        let plain = ledger.add_income(&[format!("{}", value * 1000.0)]).unwrap();
        assert_eq!(shorthand, plain);
    }
}

#[test]
fn fixed_expense_total_ignores_order() {
    let amounts = [20_000.0, 1_000.0, 3_500.5, 2_500.0, 15_000.0, 1_500.0, 500.25, 2_000.0, 4_000.0, 1_000.0];
    let mut reversed = amounts;
    reversed.reverse();

    let mut forward = BudgetLedger::new();
    let mut backward = BudgetLedger::new();
    let expected: f64 = amounts.iter().sum();
    assert!((forward.add_fixed_expenses(&amounts).unwrap() - expected).abs() < 1e-9);
    assert!((backward.add_fixed_expenses(&reversed).unwrap() - expected).abs() < 1e-9);
}

#[test]
fn percentages_sum_to_one_hundred() {
    let mut ledger = BudgetLedger::new();
    ledger
        .add_fixed_expenses(&[300.0, 120.0, 80.0, 45.5, 0.0, 17.0, 3.0, 60.0, 90.0, 11.0])
        .unwrap();
    ledger.add_wish_list_item("Headphones", 140.0).unwrap();

    let rows = ledger.calculate_expense_percentage().unwrap();
    let total: f64 = rows.iter().map(|row| row.percent).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!(rows.iter().all(|row| row.percent.is_finite()));
}

#[test]
fn zero_totals_are_typed_failures() {
    let ledger = BudgetLedger::new();
    assert!(matches!(
        ledger.calculate_expense_percentage(),
        Err(BudgetError::DivisionByZero(_))
    ));

    let mut zeros = BudgetLedger::new();
    zeros.add_fixed_expenses(&[0.0; 10]).unwrap();
    assert!(matches!(
        zeros.calculate_expense_percentage(),
        Err(BudgetError::DivisionByZero(_))
    ));
}

#[test]
fn rejected_inputs_leave_totals_untouched() {
    let mut ledger = BudgetLedger::new();
    ledger.add_income(&["3000"]).unwrap();
    ledger.add_wish_list_item("Lamp", 40.0).unwrap();

    assert!(matches!(ledger.add_income(&["1k", "   "]), Err(BudgetError::Parse { .. })));
    assert!(ledger.add_fixed_expenses(&[1.0; 9]).is_err());
    assert!(ledger.add_wish_list_item("Chair", -5.0).is_err());
    assert!(matches!(
        ledger.add_financial_goal("Car", 0.0),
        Err(BudgetError::InvalidArgument(_))
    ));

    assert_eq!(ledger.total_income(), 3000.0);
    assert_eq!(ledger.total_expenses(), 40.0);
    assert_eq!(ledger.entries().len(), 1);
    assert!(ledger.goals().is_empty());
}

#[test]
fn export_matches_analysis_rendering() {
    let mut ledger = BudgetLedger::new();
    ledger.add_income(&["10k"]).unwrap();
    ledger.add_wish_list_item("Bike", 1_500.0).unwrap();

    let format = LineFormat::default();
    let text = ledger.export_analysis(&format, ExportFormat::Text).unwrap();
    assert_eq!(text, ledger.analyze_expenses().render(&format));

    let json = ledger.export_analysis(&format, ExportFormat::Json).unwrap();
    assert!(json.contains("\"remaining_balance\": 8500.0"));
}
