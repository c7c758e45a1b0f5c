mod ledger_entry;

pub use ledger_entry::LedgerEntry;
