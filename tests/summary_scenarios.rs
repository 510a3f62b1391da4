use chrono::NaiveDate;
use expense_tracker::{
    config::Config,
    core::report::{ReportStyle, BUDGET_WARNING},
    core::services::SummaryService,
    ledger::{is_valid_category, Category, Ledger, MonthKey, WeekRange},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scenario_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.insert(date(2024, 1, 1), Category::Food, 100.0);
    ledger.insert(date(2024, 1, 2), Category::Travel, 50.0);
    ledger.insert(date(2024, 1, 8), Category::Food, 20.0);
    ledger
}

fn render(ledger: &Ledger, budget: f64) -> String {
    let mut out = Vec::new();
    SummaryService::render(
        ledger,
        budget,
        &Config::default(),
        ReportStyle::plain(),
        &mut out,
    )
    .expect("render into memory");
    String::from_utf8(out).unwrap()
}

#[test]
fn end_to_end_scenario_matches_expected_totals() {
    let report = SummaryService::summarize(&scenario_ledger(), 1000.0);

    let daily: Vec<_> = report.daily.iter().map(|d| d.total).collect();
    assert_eq!(daily, vec![100.0, 50.0, 20.0]);

    let first_week = WeekRange::containing(date(2024, 1, 1));
    let second_week = WeekRange::containing(date(2024, 1, 8));
    assert_eq!(report.week(&first_week).unwrap().total, 150.0);
    assert_eq!(report.week(&second_week).unwrap().total, 20.0);

    let january = report.month(MonthKey::of(date(2024, 1, 1))).unwrap();
    assert_eq!(january.category_total(Category::Food), Some(120.0));
    assert_eq!(january.category_total(Category::Travel), Some(50.0));
    assert_eq!(january.total, 170.0);
    assert!(!report.budget_exceeded());
}

#[test]
fn daily_total_per_date_sums_records() {
    let mut ledger = Ledger::new();
    ledger.insert(date(2024, 4, 1), Category::Grocery, 10.10);
    ledger.insert(date(2024, 4, 1), Category::Grocery, 20.20);
    ledger.insert(date(2024, 4, 1), Category::Other, 0.05);
    let output = render(&ledger, 100.0);
    assert!(output.contains("Total expenses for the day: ₹30.35"));
}

#[test]
fn multi_year_months_are_merged() {
    let mut ledger = Ledger::new();
    ledger.insert(date(2023, 3, 5), Category::Shopping, 30.0);
    ledger.insert(date(2024, 3, 10), Category::Shopping, 12.0);
    let report = SummaryService::summarize(&ledger, 0.0);
    assert_eq!(report.monthly.len(), 1);
    assert_eq!(report.monthly[0].month.to_string(), "03");
    assert_eq!(report.monthly[0].total, 42.0);
    assert!(render(&ledger, 0.0).contains("Month: March (03)\nShopping: ₹42.00"));
}

#[test]
fn warning_threshold_is_strict() {
    let ledger = scenario_ledger();
    assert!(!render(&ledger, 170.0).contains(BUDGET_WARNING));
    assert_eq!(render(&ledger, 169.0).matches(BUDGET_WARNING).count(), 1);
}

#[test]
fn category_predicate_is_exact() {
    for name in [
        "Food", "Travel", "Shopping", "Medical", "Stationary", "Grocery", "Bills", "Other",
    ] {
        assert!(is_valid_category(name));
    }
    for name in ["", "food", "BILLS", "Rent", "Other "] {
        assert!(!is_valid_category(name));
    }
}

#[test]
fn sections_render_in_order() {
    let output = render(&scenario_ledger(), 1000.0);
    let daily = output.find("Daily Expenses Summary:").unwrap();
    let weekly = output.find("Weekly Expenses Summary:").unwrap();
    let monthly = output.find("Monthly Expenses Summary:").unwrap();
    assert!(daily < weekly && weekly < monthly);
}
