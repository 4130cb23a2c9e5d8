//! HTTP request handlers organized by functionality

pub mod browse;
pub mod detail;
pub mod health;

// Re-export commonly used handlers
pub use browse::{cards, results, root};
pub use detail::{info, watch};
pub use health::health;
