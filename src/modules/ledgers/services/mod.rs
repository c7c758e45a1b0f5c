mod ledger_service;
mod ledger_stats;

pub use ledger_service::LedgerService;
pub use ledger_stats::LedgerStats;
