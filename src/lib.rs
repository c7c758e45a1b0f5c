//! Firmdesk Billing Ledger Engine
//!
//! Embeddable core for a professional-services billing console: customer
//! and service records, quotation and invoice lifecycles, customer
//! ledgers, and the derived statistics the screens display. The engine is
//! synchronous and in-memory; persistence and authentication are external
//! collaborators behind the traits in [`crate::core::traits`].

pub mod config;
pub mod core;
pub mod engine;
pub mod modules;

// Re-export commonly used types
pub use crate::config::EngineConfig;
pub use crate::core::{AppError, Result};
pub use crate::engine::{BillingEngine, EngineSnapshot};
pub use crate::modules::catalog;
pub use crate::modules::customers;
pub use crate::modules::invoices;
pub use crate::modules::ledgers;
pub use crate::modules::quotations;
pub use crate::modules::reports;
