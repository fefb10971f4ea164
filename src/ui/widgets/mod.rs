// src/ui/widgets/mod.rs

pub mod activity;   // Recent activity feed.
pub mod footer;     // Key hints for the focused view.
pub mod header;     // Dashboard title.
pub mod scan_popup; // The "Scan medicine" modal.
pub mod stats;      // Row of inventory statistic cards.
