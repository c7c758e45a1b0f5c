mod quotation_repository;

pub use quotation_repository::QuotationRepository;
