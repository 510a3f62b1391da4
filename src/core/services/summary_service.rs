use std::io::{self, Write};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::core::report::{ReportRenderer, ReportStyle};
use crate::ledger::{Category, ExpenseRecord, Ledger, MonthKey, WeekRange};

/// Expenses recorded on one date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub records: Vec<ExpenseRecord>,
    pub total: f64,
}

/// Expenses falling inside one Monday-to-Sunday window.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklySummary {
    pub week: WeekRange,
    pub records: Vec<ExpenseRecord>,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
}

/// Per-category subtotals for a calendar month, merged across years.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub categories: Vec<CategoryTotal>,
    pub total: f64,
}

impl MonthlySummary {
    fn new(month: MonthKey) -> Self {
        Self {
            month,
            categories: Vec::new(),
            total: 0.0,
        }
    }

    fn add(&mut self, record: &ExpenseRecord) {
        match self
            .categories
            .iter_mut()
            .find(|entry| entry.category == record.category())
        {
            Some(entry) => entry.amount += record.amount(),
            None => self.categories.push(CategoryTotal {
                category: record.category(),
                amount: record.amount(),
            }),
        }
        self.total += record.amount();
    }

    pub fn category_total(&self, category: Category) -> Option<f64> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.amount)
    }
}

/// Aggregated view of a ledger against a budget.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryReport {
    pub daily: Vec<DailySummary>,
    pub weekly: Vec<WeeklySummary>,
    pub monthly: Vec<MonthlySummary>,
    pub grand_total: f64,
    pub budget: f64,
}

impl SummaryReport {
    /// True only when spending is strictly above the budget.
    pub fn budget_exceeded(&self) -> bool {
        self.grand_total > self.budget
    }

    pub fn week(&self, week: &WeekRange) -> Option<&WeeklySummary> {
        self.weekly.iter().find(|summary| &summary.week == week)
    }

    pub fn month(&self, month: MonthKey) -> Option<&MonthlySummary> {
        self.monthly.iter().find(|summary| summary.month == month)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(ledger: &Ledger, budget: f64) -> SummaryReport {
        let daily = Self::daily(ledger);
        let weekly = Self::weekly(ledger);
        let monthly = Self::monthly(ledger);

        let mut grand_total = 0.0;
        for month in &monthly {
            for entry in &month.categories {
                grand_total += entry.amount;
            }
        }

        SummaryReport {
            daily,
            weekly,
            monthly,
            grand_total,
            budget,
        }
    }

    /// Summarizes the ledger and writes the text report to `out`.
    pub fn render<W: Write>(
        ledger: &Ledger,
        budget: f64,
        config: &Config,
        style: ReportStyle,
        out: &mut W,
    ) -> io::Result<SummaryReport> {
        let report = Self::summarize(ledger, budget);
        ReportRenderer::new(config, style).write(&report, out)?;
        info!(
            dates = report.daily.len(),
            weeks = report.weekly.len(),
            months = report.monthly.len(),
            total = report.grand_total,
            exceeded = report.budget_exceeded(),
            "summary rendered"
        );
        Ok(report)
    }

    fn daily(ledger: &Ledger) -> Vec<DailySummary> {
        ledger
            .iter()
            .map(|(date, records)| DailySummary {
                date,
                records: records.to_vec(),
                total: records.iter().map(ExpenseRecord::amount).sum(),
            })
            .collect()
    }

    fn weekly(ledger: &Ledger) -> Vec<WeeklySummary> {
        let mut weeks: Vec<WeeklySummary> = Vec::new();
        // records within a week follow the order their dates were first entered
        for (date, records) in ledger.iter_first_seen() {
            let week = WeekRange::containing(date);
            let index = match weeks.iter().position(|summary| summary.week == week) {
                Some(index) => index,
                None => {
                    weeks.push(WeeklySummary {
                        week,
                        records: Vec::new(),
                        total: 0.0,
                    });
                    weeks.len() - 1
                }
            };
            weeks[index].records.extend_from_slice(records);
        }
        for summary in &mut weeks {
            summary.total = summary.records.iter().map(ExpenseRecord::amount).sum();
        }
        weeks.sort_by_key(|summary| summary.week);
        weeks
    }

    fn monthly(ledger: &Ledger) -> Vec<MonthlySummary> {
        let mut months: Vec<MonthlySummary> = Vec::new();
        for (date, records) in ledger.iter_first_seen() {
            let key = MonthKey::of(date);
            let index = match months.iter().position(|summary| summary.month == key) {
                Some(index) => index,
                None => {
                    months.push(MonthlySummary::new(key));
                    months.len() - 1
                }
            };
            for record in records {
                months[index].add(record);
            }
        }
        months.sort_by_key(|summary| summary.month);
        months
    }
}
