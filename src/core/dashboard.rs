// src/core/dashboard.rs

use chrono::NaiveDate;
use std::fmt;
use strum::{Display, EnumIter, IntoEnumIterator};

/// The summary cards shown at the top of the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum StatKind {
    #[strum(to_string = "Total medicines")]
    TotalMedicines,
    #[strum(to_string = "Damaged stock")]
    DamagedStock,
    #[strum(to_string = "Expiring soon")]
    ExpiringSoon,
    #[strum(to_string = "Warnings")]
    Warnings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub kind: StatKind,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Units added (positive) or removed (negative).
    StockChange(i32),
    StockVerification,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub medicine: String,
    pub kind: ActivityKind,
    pub date: NaiveDate,
}

impl fmt::Display for Activity {
    /// e.g. "+12 units, 12/2/2025" or "Stock verification, 21/1/2025".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ActivityKind::StockChange(units) => write!(f, "{units:+} units")?,
            ActivityKind::StockVerification => f.write_str("Stock verification")?,
        }
        write!(f, ", {}", self.date.format("%-d/%-m/%Y"))
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub stats: Vec<StatCard>,
    pub activity: Vec<Activity>,
}

impl Default for Dashboard {
    fn default() -> Self {
        let stats = StatKind::iter()
            .map(|kind| {
                let value = match kind {
                    StatKind::TotalMedicines => 4230,
                    StatKind::DamagedStock => 23,
                    StatKind::ExpiringSoon => 1,
                    StatKind::Warnings => 0,
                };
                StatCard { kind, value }
            })
            .collect();

        let entry = |medicine: &str, kind: ActivityKind, (y, m, d): (i32, u32, u32)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Activity {
                medicine: medicine.to_string(),
                kind,
                date,
            })
        };
        let activity = [
            entry("Aspirin", ActivityKind::StockChange(12), (2025, 2, 12)),
            entry("Loratadine", ActivityKind::StockChange(-2), (2025, 2, 8)),
            entry("Acetaminophine", ActivityKind::StockChange(-4), (2025, 2, 12)),
            entry("Ibuprofen", ActivityKind::StockVerification, (2025, 1, 21)),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self { stats, activity }
    }
}
