pub mod catalog;
pub mod customers;
pub mod invoices;
pub mod ledgers;
pub mod quotations;
pub mod reports;
