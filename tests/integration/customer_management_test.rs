// Integration test for customer record management
//
// Covers the create/search scenario from the engine's contract, partial
// updates, and the referential-integrity guard on deletion.

use rust_decimal_macros::dec;

use firmdesk::customers::UpdateCustomerRequest;
use firmdesk::invoices::CreateInvoiceRequest;
use firmdesk::{AppError, BillingEngine};

#[path = "../helpers/test_data.rs"]
mod test_data;
use test_data::{date, individual_customer};

#[test]
fn test_add_then_filter_round_trip() {
    let engine = BillingEngine::default();
    assert!(engine.customers().is_empty());

    let customer = engine
        .add_customer(individual_customer("A", "a@x.com", "1"))
        .unwrap();
    assert!(!customer.id.is_empty());

    let hits = engine.search_customers("a@x.com");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, customer.id);

    assert!(engine.search_customers("zzz").is_empty());
}

#[test]
fn test_fresh_ids_never_collide() {
    let engine = BillingEngine::default();

    let first = engine
        .add_customer(individual_customer("A", "a@x.com", "1"))
        .unwrap();
    let second = engine
        .add_customer(individual_customer("A", "a@x.com", "1"))
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(engine.customers().len(), 2);
}

#[test]
fn test_validation_errors_on_create() {
    let engine = BillingEngine::default();

    let mut request = individual_customer("", "a@x.com", "1");
    assert!(matches!(
        engine.add_customer(request.clone()),
        Err(AppError::Validation(_))
    ));

    request.name = "A".to_string();
    request.email = "no-at-sign".to_string();
    assert!(engine.add_customer(request).is_err());
}

#[test]
fn test_update_patches_only_given_fields() {
    let engine = BillingEngine::default();
    let customer = engine
        .add_customer(individual_customer(
            "Rajesh Kumar",
            "rajesh@example.com",
            "+91 98765 43210",
        ))
        .unwrap();

    let updated = engine
        .update_customer(
            &customer.id,
            UpdateCustomerRequest {
                phone: Some("+91 90000 00000".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.phone, "+91 90000 00000");
    assert_eq!(updated.name, "Rajesh Kumar");
    assert_eq!(updated.email, "rajesh@example.com");
}

#[test]
fn test_update_missing_customer_is_not_found() {
    let engine = BillingEngine::default();
    let result = engine.update_customer("missing", UpdateCustomerRequest::default());
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn test_delete_unreferenced_customer_succeeds() {
    let engine = BillingEngine::default();
    let customer = engine
        .add_customer(individual_customer("A", "a@x.com", "1"))
        .unwrap();

    engine.remove_customer(&customer.id).unwrap();
    assert!(engine.customers().is_empty());
    assert!(matches!(
        engine.remove_customer(&customer.id),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_delete_referenced_customer_conflicts() {
    let engine = BillingEngine::default();
    let customer = engine
        .add_customer(individual_customer("A", "a@x.com", "1"))
        .unwrap();

    engine
        .create_invoice(CreateInvoiceRequest {
            customer_id: customer.id.clone(),
            date: date(2025, 11, 1),
            due_date: date(2025, 11, 15),
            amount: dec!(9440),
        })
        .unwrap();

    let result = engine.remove_customer(&customer.id);
    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(engine.customers().len(), 1);
}

#[test]
fn test_search_matches_any_configured_field() {
    let engine = BillingEngine::default();
    engine
        .add_customer(individual_customer(
            "Rajesh Kumar",
            "rajesh@example.com",
            "+91 98765 43210",
        ))
        .unwrap();
    engine
        .add_customer(individual_customer(
            "Priya Sharma",
            "priya@example.com",
            "+91 91234 56789",
        ))
        .unwrap();

    assert_eq!(engine.search_customers("PRIYA").len(), 1);
    assert_eq!(engine.search_customers("98765").len(), 1);
    assert_eq!(engine.search_customers("example.com").len(), 2);
    assert_eq!(engine.search_customers("").len(), 2);
}
