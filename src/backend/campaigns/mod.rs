//! Campaigns Module
//!
//! Off-chain metadata for crowdfunding campaigns. Funds and deadlines live in
//! the contract; this store keeps the title and description shown next to
//! them, keyed by the id the contract assigned.
//!
//! # Module Structure
//!
//! ```text
//! campaigns/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Campaign table queries
//! └── handlers.rs  - HTTP handlers
//! ```

/// Campaign table queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::{Campaign, SaveOutcome};
pub use handlers::{create_campaign_page, get_campaigns, save_campaign};
