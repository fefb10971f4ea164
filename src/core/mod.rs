// src/core/mod.rs

// Everything below `ui` that does not draw: data, the scan popup's state
// and the HTTP client that talks to the scan endpoint.

/// Scan response and image file types.
pub mod models;

/// Multipart upload client for the medicine scan endpoint.
pub mod client;

/// State machine behind the "Scan medicine" popup.
pub mod widget;

/// Inventory statistics and the recent-activity feed.
pub mod dashboard;
