pub mod summary_service;

pub use summary_service::{
    CategoryTotal, DailySummary, MonthlySummary, SummaryReport, SummaryService, WeeklySummary,
};
