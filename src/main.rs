use anyhow::Context;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use firmdesk::catalog::{CreateServiceRequest, ServiceCategory, ServiceStatus};
use firmdesk::customers::{CreateCustomerRequest, CustomerType};
use firmdesk::quotations::CreateQuotationRequest;
use firmdesk::{BillingEngine, EngineConfig};

/// Seeds a small practice dataset and walks the quotation-to-payment flow,
/// printing the derived statistics a console would render.
fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "firmdesk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = EngineConfig::from_env().context("Failed to load configuration")?;
    tracing::info!("Starting Firmdesk Billing Ledger Engine demo");
    tracing::info!("Environment: {}", config.app.env);

    let engine = BillingEngine::new(config);
    let today = Utc::now().date_naive();

    // Customers
    let rajesh = engine.add_customer(CreateCustomerRequest {
        name: "Rajesh Kumar".to_string(),
        email: "rajesh@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        business_name: None,
        customer_type: CustomerType::Individual,
        pan: "ABCPK1234F".to_string(),
        gstin: String::new(),
    })?;
    let techsol = engine.add_customer(CreateCustomerRequest {
        name: "Tech Solutions Ltd".to_string(),
        email: "accounts@techsolutions.example".to_string(),
        phone: "+91 98200 11223".to_string(),
        business_name: Some("Tech Solutions Ltd".to_string()),
        customer_type: CustomerType::Business,
        pan: "AAACT5678Q".to_string(),
        gstin: "27AAACT5678Q1Z5".to_string(),
    })?;

    // Service catalog
    let gst = engine.add_service(CreateServiceRequest {
        name: "GST Registration".to_string(),
        description: "Complete GST registration and filing services".to_string(),
        category: ServiceCategory::Tax,
        price: Decimal::from(5000),
        status: ServiceStatus::Active,
    })?;
    let itr = engine.add_service(CreateServiceRequest {
        name: "Income Tax Filing".to_string(),
        description: "Individual and business tax filing".to_string(),
        category: ServiceCategory::Tax,
        price: Decimal::from(3000),
        status: ServiceStatus::Active,
    })?;
    engine.add_service(CreateServiceRequest {
        name: "Audit Services".to_string(),
        description: "Statutory and internal audit services".to_string(),
        category: ServiceCategory::Audit,
        price: Decimal::from(15000),
        status: ServiceStatus::Active,
    })?;

    // Quotation -> acceptance -> invoice -> payment
    let quotation = engine.create_quotation(CreateQuotationRequest {
        customer_id: rajesh.id.clone(),
        date: today,
        service_ids: vec![gst.id.clone(), itr.id.clone()],
        tax_rate: None,
    })?;
    engine.send_quotation(&quotation.id)?;
    engine.accept_quotation(&quotation.id)?;

    let invoice =
        engine.convert_quotation_to_invoice(&quotation.id, today, today + Duration::days(14))?;
    engine.record_payment(&invoice.id, Decimal::from(4000), today)?;

    // A second invoice left unpaid for the ledger to carry
    engine.set_opening_balance(&techsol.id, Decimal::from(10000), today)?;
    engine.create_invoice(firmdesk::invoices::CreateInvoiceRequest {
        customer_id: techsol.id.clone(),
        date: today,
        due_date: today + Duration::days(7),
        amount: Decimal::from(21240),
    })?;

    // Derived views
    let invoice_stats = engine.invoice_stats(today)?;
    let ledger_stats = engine.ledger_stats()?;
    let summary = engine.dashboard_summary(today)?;

    println!("{}", serde_json::to_string_pretty(&invoice_stats)?);
    println!("{}", serde_json::to_string_pretty(&ledger_stats)?);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // The snapshot a persistence collaborator would be handed
    let snapshot = engine.snapshot();
    tracing::info!(
        customers = snapshot.customers.len(),
        invoices = snapshot.invoices.len(),
        "snapshot taken"
    );

    Ok(())
}
