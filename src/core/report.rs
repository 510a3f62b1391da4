//! Plain-text rendering of a [`SummaryReport`].

use std::io::{self, Write};

use colored::Colorize;

use crate::config::Config;
use crate::core::services::summary_service::SummaryReport;
use crate::ledger::ExpenseRecord;

pub const BUDGET_WARNING: &str = "Warning: Expenses exceed the monthly budget!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    pub color: bool,
}

impl ReportStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }
}

pub struct ReportRenderer<'a> {
    config: &'a Config,
    style: ReportStyle,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(config: &'a Config, style: ReportStyle) -> Self {
        Self { config, style }
    }

    pub fn write<W: Write>(&self, report: &SummaryReport, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", self.header("Daily Expenses Summary:"))?;
        for day in &report.daily {
            writeln!(out, "\nDate: {}", day.date.format("%Y-%m-%d"))?;
            self.write_records(&day.records, out)?;
            writeln!(
                out,
                "Total expenses for the day: {}",
                self.amount(day.total)
            )?;
        }

        writeln!(out, "\n{}", self.header("Weekly Expenses Summary:"))?;
        for week in &report.weekly {
            writeln!(out, "\nWeek from {}", week.week)?;
            self.write_records(&week.records, out)?;
            writeln!(
                out,
                "Total expenses for the week: {}",
                self.amount(week.total)
            )?;
        }

        writeln!(out, "\n{}", self.header("Monthly Expenses Summary:"))?;
        for month in &report.monthly {
            writeln!(out, "\nMonth: {} ({})", month.month.name(), month.month)?;
            for entry in &month.categories {
                writeln!(out, "{}: {}", entry.category, self.amount(entry.amount))?;
            }
        }
        writeln!(
            out,
            "\nTotal expenses for the month: {}",
            self.amount(report.grand_total)
        )?;

        if report.budget_exceeded() {
            writeln!(out, "\n{}", self.warning(BUDGET_WARNING))?;
        }
        Ok(())
    }

    /// Renders the report into a `String`.
    pub fn render_to_string(&self, report: &SummaryReport) -> String {
        let mut buffer = Vec::new();
        // writes into a Vec cannot fail
        let _ = self.write(report, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn write_records<W: Write>(&self, records: &[ExpenseRecord], out: &mut W) -> io::Result<()> {
        for record in records {
            writeln!(out, "{}: {}", record.category(), self.amount(record.amount()))?;
        }
        Ok(())
    }

    fn amount(&self, value: f64) -> String {
        self.config.format_amount(value)
    }

    fn header(&self, text: &str) -> String {
        if self.style.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.style.color {
            text.bright_yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }
}
