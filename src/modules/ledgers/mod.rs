// Ledgers module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::LedgerEntry;
pub use repositories::LedgerRepository;
pub use services::{LedgerService, LedgerStats};
