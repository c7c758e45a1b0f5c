// Property-based test for the ledger balance identity
//
// After any sequence of postings the outstanding figure must equal
// max(0, opening_balance + total_invoices - total_payments), and the
// cleared flag must follow the unclamped sign.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use firmdesk::ledgers::LedgerEntry;

fn entry_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
}

fn entry(opening: Decimal) -> LedgerEntry {
    LedgerEntry::new(
        "c-1".to_string(),
        "Rajesh Kumar".to_string(),
        opening,
        entry_date(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn outstanding_matches_identity_after_postings(
        opening in 0u64..1_000_000u64,
        invoices in proptest::collection::vec(1u64..100_000u64, 0..8),
        payments in proptest::collection::vec(1u64..100_000u64, 0..8),
    ) {
        let mut entry = entry(Decimal::from(opening));
        for amount in &invoices {
            entry.post_invoice(Decimal::from(*amount), entry_date()).unwrap();
        }
        for amount in &payments {
            entry.post_payment(Decimal::from(*amount), entry_date()).unwrap();
        }

        let invoiced: u64 = invoices.iter().sum();
        let paid: u64 = payments.iter().sum();
        let raw = Decimal::from(opening) + Decimal::from(invoiced) - Decimal::from(paid);
        let expected = raw.max(Decimal::ZERO);

        prop_assert_eq!(entry.outstanding, expected);
        prop_assert_eq!(entry.total_invoices, Decimal::from(invoiced));
        prop_assert_eq!(entry.total_payments, Decimal::from(paid));
    }

    #[test]
    fn outstanding_never_negative(
        opening in 0u64..10_000u64,
        invoiced in 0u64..10_000u64,
        paid in 0u64..1_000_000u64,
    ) {
        let mut entry = entry(Decimal::from(opening));
        if invoiced > 0 {
            entry.post_invoice(Decimal::from(invoiced), entry_date()).unwrap();
        }
        if paid > 0 {
            entry.post_payment(Decimal::from(paid), entry_date()).unwrap();
        }

        prop_assert!(entry.outstanding >= Decimal::ZERO);
    }

    #[test]
    fn cleared_iff_paid_covers_owed(
        opening in 0u64..10_000u64,
        invoiced in 1u64..10_000u64,
        paid in 1u64..30_000u64,
    ) {
        let mut entry = entry(Decimal::from(opening));
        entry.post_invoice(Decimal::from(invoiced), entry_date()).unwrap();
        entry.post_payment(Decimal::from(paid), entry_date()).unwrap();

        prop_assert_eq!(entry.is_cleared(), paid >= opening + invoiced);
    }
}

#[test]
fn worked_example_opening_balance_survives_settled_invoices() {
    let mut entry = entry(dec!(5000));
    entry.post_invoice(dec!(9440), entry_date()).unwrap();
    entry.post_payment(dec!(9440), entry_date()).unwrap();

    assert_eq!(entry.outstanding, dec!(5000));
    assert!(!entry.is_cleared());
}

#[test]
fn worked_example_overpayment_clamps_to_zero() {
    let mut entry = entry(dec!(2000));
    entry.post_invoice(dec!(8500), entry_date()).unwrap();
    entry.post_payment(dec!(10500), entry_date()).unwrap();

    assert_eq!(entry.outstanding, dec!(0));
    assert!(entry.is_cleared());
}
