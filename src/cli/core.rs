use std::io::{self, IsTerminal, Write};

use thiserror::Error;
use tracing::{info, warn};

use crate::cli::io::LineSource;
use crate::cli::output::Console;
use crate::config::Config;
use crate::core::report::ReportStyle;
use crate::core::services::{SummaryReport, SummaryService};
use crate::errors::InputError;
use crate::ledger::{parse_amount, parse_budget, parse_date, Category, Ledger};

pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_SCRIPT";

const BUDGET_PROMPT: &str = "Enter your monthly budget";
const ENTRY_HEADER: &str = "Enter expenses for the day (or type 'done' to finish):";
const DATE_PROMPT: &str = "Enter the date of the expense (YYYY-MM-DD)";
const CATEGORY_PROMPT: &str = "Enter the category of the expense";
const AMOUNT_PROMPT: &str = "Enter the amount of the expense";

/// User-facing shell error.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    /// Script mode when requested through the environment or when stdin is
    /// not a terminal.
    pub fn detect() -> Self {
        if std::env::var_os(SCRIPT_ENV).is_some() || !io::stdin().is_terminal() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

fn wants_color(mode: CliMode, config: &Config) -> bool {
    config.color && mode == CliMode::Interactive
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Everything one session owns: settings, output, budget, and ledger.
pub struct SessionContext<W: Write> {
    pub mode: CliMode,
    pub config: Config,
    pub console: Console<W>,
    pub budget: Option<f64>,
    pub ledger: Ledger,
    pub discarded: usize,
}

impl<W: Write> SessionContext<W> {
    /// Color is only used for interactive sessions with color enabled.
    pub fn new(mode: CliMode, config: Config, out: W) -> Self {
        let console = Console::new(out, wants_color(mode, &config));
        Self {
            mode,
            config,
            console,
            budget: None,
            ledger: Ledger::new(),
            discarded: 0,
        }
    }

    pub fn print_banner(&mut self) -> Result<(), CliError> {
        self.console.info(format!(
            "Expense Tracker v{} ({}, {})",
            env!("CARGO_PKG_VERSION"),
            env!("EXPENSE_TRACKER_BUILD_HASH"),
            env!("EXPENSE_TRACKER_BUILD_PROFILE")
        ))?;
        self.console.info(format!("Categories: {}", Category::listing()))?;
        Ok(())
    }

    /// Prompts until a valid budget is given. Fails only if input runs out.
    pub fn collect_budget<S: LineSource>(&mut self, source: &mut S) -> Result<f64, CliError> {
        loop {
            let Some(raw) = self.ask(source, BUDGET_PROMPT)? else {
                return Err(CliError::Input(
                    "input ended before a monthly budget was entered".into(),
                ));
            };
            match parse_budget(&raw) {
                Ok(budget) => {
                    info!(budget, "monthly budget set");
                    self.budget = Some(budget);
                    return Ok(budget);
                }
                Err(err) => self.console.error(err)?,
            }
        }
    }

    /// Runs one date/category/amount cycle.
    pub fn collect_entry<S: LineSource>(
        &mut self,
        source: &mut S,
    ) -> Result<LoopControl, CliError> {
        self.console.section(ENTRY_HEADER)?;

        let Some(raw_date) = self.ask(source, DATE_PROMPT)? else {
            return Ok(LoopControl::Exit);
        };
        if self.config.is_done_keyword(&raw_date) {
            return Ok(LoopControl::Exit);
        }
        let date = match parse_date(&raw_date) {
            Ok(date) => date,
            Err(err) => return self.discard(err),
        };

        let Some(raw_category) = self.ask(source, CATEGORY_PROMPT)? else {
            return Ok(LoopControl::Exit);
        };
        let category = match raw_category.parse::<Category>() {
            Ok(category) => category,
            Err(err) => {
                let suggestion = self
                    .config
                    .suggest_categories
                    .then(|| Category::suggest(&raw_category))
                    .flatten();
                let control = self.discard(err)?;
                if let Some(best) = suggestion {
                    self.console.info(format!("Suggestion: `{best}`?"))?;
                }
                return Ok(control);
            }
        };

        let Some(raw_amount) = self.ask(source, AMOUNT_PROMPT)? else {
            return Ok(LoopControl::Exit);
        };
        let amount = match parse_amount(&raw_amount) {
            Ok(amount) => amount,
            Err(err) => return self.discard(err),
        };

        self.ledger.insert(date, category, amount);
        Ok(LoopControl::Continue)
    }

    /// Renders the summary of everything collected so far.
    pub fn render_summary(&mut self) -> Result<SummaryReport, CliError> {
        let budget = self.budget.unwrap_or_default();
        let style = self.report_style();
        info!(
            dates = self.ledger.date_count(),
            records = self.ledger.record_count(),
            discarded = self.discarded,
            "input finished"
        );
        let report = SummaryService::render(
            &self.ledger,
            budget,
            &self.config,
            style,
            self.console.writer(),
        )?;
        self.console.flush()?;
        Ok(report)
    }

    pub fn report_style(&self) -> ReportStyle {
        ReportStyle {
            color: wants_color(self.mode, &self.config),
        }
    }

    fn ask<S: LineSource>(
        &mut self,
        source: &mut S,
        prompt: &str,
    ) -> Result<Option<String>, CliError> {
        if !source.renders_prompt() {
            self.console.prompt(format!("{prompt}:"))?;
        }
        source.read_line(prompt)
    }

    fn discard(&mut self, err: InputError) -> Result<LoopControl, CliError> {
        warn!(input = err.raw(), "discarding entry: {err}");
        self.discarded += 1;
        self.console.error(err)?;
        Ok(LoopControl::Continue)
    }
}

/// Collects a budget and entries from `source`, then renders the summary.
pub fn run_session<W: Write, S: LineSource>(
    context: &mut SessionContext<W>,
    source: &mut S,
) -> Result<SummaryReport, CliError> {
    context.print_banner()?;
    context.collect_budget(source)?;
    while context.collect_entry(source)? == LoopControl::Continue {}
    context.render_summary()
}
