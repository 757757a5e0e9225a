//! Demo walkthrough against in-memory tables: one order, one retrieval, a
//! few sales, then the valued catalog.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use reventa_admin::AdminServices;
use reventa_logistics::NewShipment;
use reventa_products::NewProduct;
use reventa_purchasing::NewPurchaseLine;
use reventa_sales::NewSale;

fn main() -> Result<()> {
    reventa_observability::init();

    let services = AdminServices::in_memory();

    services.upsert_product(NewProduct {
        sku: "P1".to_string(),
        name: "Auriculares BT".to_string(),
        list_price_gs: Decimal::from(40_000),
    })?;
    services.upsert_product(NewProduct {
        sku: "P2".to_string(),
        name: "Smartwatch".to_string(),
        list_price_gs: Decimal::from(160_000),
    })?;

    services.register_order_total("AMZ-1043", Decimal::from(100))?;

    let date = NaiveDate::from_ymd_opt(2025, 11, 30).expect("valid date");
    services.register_purchase(NewPurchaseLine {
        order_no: "AMZ-1043".to_string(),
        sku: "P1".to_string(),
        purchase_date: date,
        supplier: "Amazon".to_string(),
        quantity_acquired: 4,
        units_per_package: 10,
        unit_cost_usd: Decimal::new(1000, 2),
        exchange_rate: Decimal::from(7000),
        tracking_us: Some("1Z999AA1".to_string()),
        tracking_py: "PY-2211".to_string(),
        weight_kg: Decimal::from(10),
    })?;
    services.register_purchase(NewPurchaseLine {
        order_no: "AMZ-1043".to_string(),
        sku: "P2".to_string(),
        purchase_date: date,
        supplier: "Amazon".to_string(),
        quantity_acquired: 8,
        units_per_package: 1,
        unit_cost_usd: Decimal::from(5),
        exchange_rate: Decimal::from(7000),
        tracking_us: None,
        tracking_py: "PY-2211".to_string(),
        weight_kg: Decimal::from(5),
    })?;

    // Courier bill arrives after the purchases; the next engine run picks up
    // the distribution factor for every line on this tracking code.
    services.register_shipment(NewShipment {
        tracking_py: "PY-2211".to_string(),
        retrieval_date: NaiveDate::from_ymd_opt(2025, 12, 4).expect("valid date"),
        total_cost_gs: Decimal::from(615_000),
    })?;

    services.register_sale(NewSale {
        sku: "P1".to_string(),
        quantity_sold: 12,
        sale_date: NaiveDate::from_ymd_opt(2025, 12, 10).expect("valid date"),
        customer: "M. Benítez".to_string(),
        receipt_no: Some("TR-99012".to_string()),
        notes: None,
    })?;

    for product in services.refresh_valuations() {
        tracing::info!(
            sku = %product.sku,
            name = %product.name,
            stock = product.stock.unwrap_or(0),
            average_cost_gs = %product.average_cost_gs.unwrap_or_default(),
            "catalog entry valued"
        );
    }

    let summary = services.catalog_summary();
    tracing::info!(
        products = summary.total_products,
        total_stock = summary.total_stock,
        stock_value_gs = %summary.stock_value_gs,
        oversold = summary.oversold_skus,
        "inventory summary"
    );

    Ok(())
}
