// Integration test for dashboard reporting and the snapshot boundary

use rust_decimal_macros::dec;

use firmdesk::catalog::ServiceCategory;
use firmdesk::invoices::CreateInvoiceRequest;
use firmdesk::{BillingEngine, EngineSnapshot};

#[path = "../helpers/test_data.rs"]
mod test_data;
use test_data::{business_customer, catalog_service, date, individual_customer};

fn seeded_engine() -> BillingEngine {
    let engine = BillingEngine::default();

    let rajesh = engine
        .add_customer(individual_customer(
            "Rajesh Kumar",
            "rajesh@example.com",
            "+91 98765 43210",
        ))
        .unwrap();
    let techsol = engine
        .add_customer(business_customer(
            "Tech Solutions Ltd",
            "accounts@techsolutions.example",
            "+91 98200 11223",
        ))
        .unwrap();

    let gst = engine
        .add_service(catalog_service("GST Registration", ServiceCategory::Tax, 5000))
        .unwrap();
    engine
        .add_service(catalog_service("Audit Services", ServiceCategory::Audit, 15000))
        .unwrap();
    engine.toggle_service_status(&gst.id).unwrap();

    let paid = engine
        .create_invoice(CreateInvoiceRequest {
            customer_id: rajesh.id,
            date: date(2025, 11, 1),
            due_date: date(2025, 11, 15),
            amount: dec!(9440),
        })
        .unwrap();
    engine
        .record_payment(&paid.id, dec!(9440), date(2025, 11, 8))
        .unwrap();

    engine
        .create_invoice(CreateInvoiceRequest {
            customer_id: techsol.id,
            date: date(2025, 10, 25),
            due_date: date(2025, 11, 8),
            amount: dec!(21240),
        })
        .unwrap();

    engine
}

#[test]
fn test_dashboard_summary_aggregates_all_collections() {
    let engine = seeded_engine();
    let summary = engine.dashboard_summary(date(2025, 11, 10)).unwrap();

    assert_eq!(summary.total_customers, 2);
    // GST Registration was toggled inactive
    assert_eq!(summary.active_services, 1);
    // The unpaid invoice, past due by the as-of date
    assert_eq!(summary.pending_invoices, 1);
    assert_eq!(summary.total_revenue, dec!(9440));
    assert_eq!(summary.total_outstanding, dec!(21240));

    // Newest first
    assert_eq!(summary.recent_invoices.len(), 2);
    assert_eq!(summary.recent_invoices[0].date, date(2025, 11, 1));
}

#[test]
fn test_ledger_stats_match_worked_examples() {
    let engine = BillingEngine::default();

    let a = engine
        .add_customer(individual_customer("A", "a@x.com", "1"))
        .unwrap();
    engine
        .set_opening_balance(&a.id, dec!(5000), date(2025, 11, 1))
        .unwrap();
    let invoice = engine
        .create_invoice(CreateInvoiceRequest {
            customer_id: a.id.clone(),
            date: date(2025, 11, 1),
            due_date: date(2025, 11, 15),
            amount: dec!(9440),
        })
        .unwrap();
    engine
        .record_payment(&invoice.id, dec!(9440), date(2025, 11, 8))
        .unwrap();

    let entry = engine.ledger_for_customer(&a.id).unwrap();
    assert_eq!(entry.outstanding, dec!(5000));

    let stats = engine.ledger_stats().unwrap();
    assert_eq!(stats.total_outstanding, dec!(5000));
    assert_eq!(stats.total_invoices, dec!(9440));
    assert_eq!(stats.total_payments, dec!(9440));
    assert_eq!(stats.customers_with_balance, 1);
}

#[test]
fn test_snapshot_round_trip_through_serde() {
    let engine = seeded_engine();
    let snapshot = engine.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: EngineSnapshot = serde_json::from_str(&json).unwrap();

    let other = BillingEngine::default();
    other.restore(restored);

    assert_eq!(other.customers().len(), 2);
    assert_eq!(other.invoices().len(), 2);
    assert_eq!(
        other.ledger_stats().unwrap(),
        engine.ledger_stats().unwrap()
    );
    assert_eq!(
        other.dashboard_summary(date(2025, 11, 10)).unwrap().total_revenue,
        dec!(9440)
    );
}

#[test]
fn test_snapshot_is_isolated_from_later_mutation() {
    let engine = seeded_engine();
    let before = engine.snapshot();

    engine
        .add_customer(individual_customer("New", "new@x.com", "2"))
        .unwrap();

    assert_eq!(before.customers.len(), 2);
    assert_eq!(engine.snapshot().customers.len(), 3);
}

#[test]
fn test_summary_idempotent_on_unmutated_store() {
    let engine = seeded_engine();
    let as_of = date(2025, 11, 10);

    let first = engine.invoice_stats(as_of).unwrap();
    let second = engine.invoice_stats(as_of).unwrap();
    assert_eq!(first, second);
}
