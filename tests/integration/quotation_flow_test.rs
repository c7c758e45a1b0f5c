// Integration test for the quotation lifecycle
//
// Walks a quotation through draft -> sent -> accepted and converts it to
// an invoice, then checks every transition the state machine must refuse.

use chrono::Duration;
use rust_decimal_macros::dec;

use firmdesk::catalog::ServiceCategory;
use firmdesk::invoices::InvoiceStatus;
use firmdesk::quotations::{CreateQuotationRequest, QuotationStatus};
use firmdesk::{AppError, BillingEngine};

#[path = "../helpers/test_data.rs"]
mod test_data;
use test_data::{catalog_service, date, individual_customer};

fn engine_with_quotation() -> (BillingEngine, String) {
    let engine = BillingEngine::default();

    let customer = engine
        .add_customer(individual_customer(
            "Rajesh Kumar",
            "rajesh@example.com",
            "+91 98765 43210",
        ))
        .unwrap();
    let gst = engine
        .add_service(catalog_service("GST Registration", ServiceCategory::Tax, 5000))
        .unwrap();
    let itr = engine
        .add_service(catalog_service("Income Tax Filing", ServiceCategory::Tax, 3000))
        .unwrap();

    let quotation = engine
        .create_quotation(CreateQuotationRequest {
            customer_id: customer.id,
            date: date(2025, 11, 1),
            service_ids: vec![gst.id, itr.id],
            tax_rate: None,
        })
        .unwrap();

    (engine, quotation.id)
}

#[test]
fn test_quotation_totals_from_catalog_prices() {
    let (engine, id) = engine_with_quotation();
    let quotation = engine.get_quotation(&id).unwrap();

    assert_eq!(quotation.status, QuotationStatus::Draft);
    assert_eq!(quotation.sub_total, dec!(8000));
    // 18% default tax rate
    assert_eq!(quotation.total, dec!(9440));
    assert!(quotation.quotation_no.starts_with("QT-2025-"));
}

#[test]
fn test_full_lifecycle_to_acceptance() {
    let (engine, id) = engine_with_quotation();

    assert_eq!(
        engine.send_quotation(&id).unwrap().status,
        QuotationStatus::Sent
    );
    assert_eq!(
        engine.accept_quotation(&id).unwrap().status,
        QuotationStatus::Accepted
    );
}

#[test]
fn test_accepted_is_terminal() {
    let (engine, id) = engine_with_quotation();
    engine.send_quotation(&id).unwrap();
    engine.accept_quotation(&id).unwrap();

    // accepted -> sent is not a legal edge
    let result = engine.send_quotation(&id);
    assert!(matches!(result, Err(AppError::InvalidTransition(_))));

    // neither is accepted -> rejected
    assert!(engine.reject_quotation(&id).is_err());
}

#[test]
fn test_draft_cannot_be_accepted_directly() {
    let (engine, id) = engine_with_quotation();
    assert!(matches!(
        engine.accept_quotation(&id),
        Err(AppError::InvalidTransition(_))
    ));
}

#[test]
fn test_converting_draft_fails() {
    let (engine, id) = engine_with_quotation();

    let result =
        engine.convert_quotation_to_invoice(&id, date(2025, 11, 10), date(2025, 11, 24));
    assert!(matches!(result, Err(AppError::InvalidTransition(_))));
}

#[test]
fn test_converting_accepted_creates_pending_invoice() {
    let (engine, id) = engine_with_quotation();
    engine.send_quotation(&id).unwrap();
    engine.accept_quotation(&id).unwrap();

    let issue = date(2025, 11, 10);
    let invoice = engine
        .convert_quotation_to_invoice(&id, issue, issue + Duration::days(14))
        .unwrap();

    let quotation = engine.get_quotation(&id).unwrap();
    assert_eq!(invoice.amount, quotation.total);
    assert_eq!(invoice.status, InvoiceStatus::Pending);
    assert_eq!(invoice.customer_id, quotation.customer_id);
    assert!(invoice.invoice_no.starts_with("INV-2025-"));

    // Conversion does not consume the quotation
    assert_eq!(quotation.status, QuotationStatus::Accepted);
    assert_eq!(engine.quotations().len(), 1);
}

#[test]
fn test_inactive_service_cannot_be_quoted() {
    let engine = BillingEngine::default();
    let customer = engine
        .add_customer(individual_customer(
            "Priya Sharma",
            "priya@example.com",
            "+91 91234 56789",
        ))
        .unwrap();
    let audit = engine
        .add_service(catalog_service("Audit Services", ServiceCategory::Audit, 15000))
        .unwrap();
    engine.toggle_service_status(&audit.id).unwrap();

    let result = engine.create_quotation(CreateQuotationRequest {
        customer_id: customer.id,
        date: date(2025, 11, 8),
        service_ids: vec![audit.id],
        tax_rate: None,
    });
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_quotation_numbers_are_unique_and_sequential() {
    let (engine, _) = engine_with_quotation();
    let customer = engine.customers().remove(0);
    let service = engine.services().remove(0);

    let second = engine
        .create_quotation(CreateQuotationRequest {
            customer_id: customer.id,
            date: date(2025, 11, 8),
            service_ids: vec![service.id],
            tax_rate: Some(dec!(0)),
        })
        .unwrap();

    let numbers: Vec<_> = engine
        .quotations()
        .iter()
        .map(|q| q.quotation_no.clone())
        .collect();
    assert_eq!(numbers, vec!["QT-2025-001", "QT-2025-002"]);
    assert_eq!(second.total, second.sub_total);
}
