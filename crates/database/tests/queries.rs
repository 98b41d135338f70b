//! Façade behaviour over an in-memory source that mirrors the SQL semantics.

mod common;

use common::{MemorySource, date};
use core_types::InvoiceStatus::{Paid, Pending};
use database::{Dashboard, ITEMS_PER_PAGE};
use std::collections::HashSet;
use std::sync::Arc;

/// Three customers, one of them without invoices, and 20 invoices spread over 2023.
fn seeded() -> MemorySource {
    let mut source = MemorySource::default();
    source.customer("c1", "Evil Rabbit", "evil@rabbit.com");
    source.customer("c2", "Lee Robinson", "lee@robinson.com");
    source.customer("c3", "Amy Burns", "amy@burns.com");

    for n in 0..20u32 {
        let customer = if n % 2 == 0 { "c1" } else { "c2" };
        let status = if n % 3 == 0 { Pending } else { Paid };
        source.invoice(
            &format!("inv-{n:02}"),
            customer,
            1000 + n as i32 * 10,
            date(2023, 1 + n % 12, 1 + n % 28),
            status,
        );
    }
    source
}

#[tokio::test]
async fn pages_cover_every_match_exactly_once() {
    let dashboard = Dashboard::new(Arc::new(seeded()));

    for query in ["", "lee", "paid", "2023-0"] {
        let pages = dashboard.fetch_invoices_pages(query).await.unwrap();

        let mut all = Vec::new();
        for page in 1..=pages as u32 {
            let rows = dashboard.fetch_filtered_invoices(query, page).await.unwrap();
            assert!(rows.len() as i64 <= ITEMS_PER_PAGE);
            all.extend(rows);
        }

        let ids: HashSet<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), all.len(), "duplicate rows for query {query:?}");
        assert_eq!(pages, (all.len() as i64 + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE);
        assert!(all.windows(2).all(|w| w[0].date >= w[1].date));

        let past_end = dashboard
            .fetch_filtered_invoices(query, pages as u32 + 1)
            .await
            .unwrap();
        assert!(past_end.is_empty());
    }

    let everything = dashboard.fetch_invoices_pages("").await.unwrap();
    assert_eq!(everything, 4);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let dashboard = Dashboard::new(Arc::new(seeded()));

    let upper = dashboard.fetch_filtered_invoices("PAID", 1).await.unwrap();
    let lower = dashboard.fetch_filtered_invoices("paid", 1).await.unwrap();
    assert!(!upper.is_empty());
    assert_eq!(upper, lower);
    assert!(upper.iter().all(|r| r.status == Paid));

    let by_name = dashboard.fetch_filtered_customers("LEE").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].email, "lee@robinson.com");
}

#[tokio::test]
async fn card_data_sums_paid_and_pending() {
    let mut source = MemorySource::default();
    source.customer("c1", "Evil Rabbit", "evil@rabbit.com");
    source.invoice("a", "c1", 100, date(2023, 6, 1), Paid);
    source.invoice("b", "c1", 200, date(2023, 6, 2), Paid);
    source.invoice("c", "c1", 50, date(2023, 6, 3), Pending);

    let cards = Dashboard::new(Arc::new(source)).fetch_card_data().await.unwrap();
    assert_eq!(cards.number_of_invoices, 3);
    assert_eq!(cards.number_of_customers, 1);
    assert_eq!(cards.total_paid_invoices, "$3.00");
    assert_eq!(cards.total_pending_invoices, "$0.50");
}

#[tokio::test]
async fn card_data_with_no_invoices_is_zero() {
    let cards = Dashboard::new(Arc::new(MemorySource::default()))
        .fetch_card_data()
        .await
        .unwrap();
    assert_eq!(cards.number_of_invoices, 0);
    assert_eq!(cards.total_paid_invoices, "$0.00");
    assert_eq!(cards.total_pending_invoices, "$0.00");
}

#[tokio::test]
async fn customer_without_invoices_keeps_zero_totals() {
    let dashboard = Dashboard::new(Arc::new(seeded()));

    let customers = dashboard.fetch_filtered_customers("").await.unwrap();
    let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Amy Burns", "Evil Rabbit", "Lee Robinson"]);

    let amy = &customers[0];
    assert_eq!(amy.total_invoices, 0);
    assert_eq!(amy.total_pending, "$0.00");
    assert_eq!(amy.total_paid, "$0.00");
}

#[tokio::test]
async fn invoice_lookup_converts_to_dollars() {
    let mut source = MemorySource::default();
    source.customer("c1", "Evil Rabbit", "evil@rabbit.com");
    source.invoice("inv-1", "c1", 15000, date(2023, 12, 6), Pending);
    let dashboard = Dashboard::new(Arc::new(source));

    let invoice = dashboard.fetch_invoice_by_id("inv-1").await.unwrap().unwrap();
    assert_eq!(invoice.amount.to_string(), "150.00");
    assert_eq!(invoice.customer_id, "c1");

    assert_eq!(dashboard.fetch_invoice_by_id("missing").await.unwrap(), None);
}

#[tokio::test]
async fn latest_invoices_are_newest_five_formatted() {
    let dashboard = Dashboard::new(Arc::new(seeded()));

    let latest = dashboard.fetch_latest_invoices().await.unwrap();
    assert_eq!(latest.len(), 5);
    assert!(latest.iter().all(|i| i.amount.starts_with('$')));
}

#[tokio::test]
async fn concurrent_callers_share_one_dashboard() {
    let dashboard = Dashboard::new(Arc::new(seeded()));

    let handles: Vec<_> = (1..=4u32)
        .map(|page| {
            let dashboard = dashboard.clone();
            tokio::spawn(async move { dashboard.fetch_filtered_invoices("", page).await })
        })
        .collect();

    let mut total = 0;
    for handle in handles {
        total += handle.await.unwrap().unwrap().len();
    }
    assert_eq!(total, 20);
}
