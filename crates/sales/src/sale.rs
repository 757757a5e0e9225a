use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use reventa_core::{generate_key, round_gs, DomainError, DomainResult, RecordId};
use reventa_products::Product;

/// Display-key prefix for sales.
const KEY_PREFIX: &str = "V";

/// Sale input, as submitted by the sales form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    pub sku: String,
    pub quantity_sold: i64,
    pub sale_date: NaiveDate,
    pub customer: String,
    /// Bank transfer receipt number, when paid by transfer.
    pub receipt_no: Option<String>,
    pub notes: Option<String>,
}

impl NewSale {
    pub fn validate(&self) -> DomainResult<()> {
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if self.customer.trim().is_empty() {
            return Err(DomainError::validation("customer cannot be empty"));
        }
        if self.quantity_sold < 0 {
            return Err(DomainError::validation("quantity sold cannot be negative"));
        }
        Ok(())
    }
}

/// Recorded sale: the input plus its derived key and unit price.
///
/// The unit price is the catalog list price at the moment of sale. Sales of a
/// SKU missing from the catalog are recorded at price 0 rather than rejected
/// so the quantity still counts against stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    pub id: RecordId,
    /// Human-readable alias (`V-YYYYMMDD-RRRR`); not unique.
    pub display_key: String,
    pub sku: String,
    pub quantity_sold: i64,
    pub sale_date: NaiveDate,
    pub customer: String,
    pub receipt_no: Option<String>,
    pub notes: Option<String>,
    /// Unit sale price in G$, looked up from the catalog snapshot.
    pub unit_price_gs: Decimal,
}

/// Validate a sale and derive its key and unit price from the catalog
/// snapshot.
pub fn record_sale(sale: NewSale, catalog: &[Product]) -> DomainResult<SaleLine> {
    sale.validate()?;

    let unit_price_gs = catalog
        .iter()
        .find(|p| p.sku == sale.sku)
        .map(|p| round_gs(p.list_price_gs))
        .unwrap_or(Decimal::ZERO);

    Ok(SaleLine {
        id: RecordId::new(),
        display_key: generate_key(KEY_PREFIX),
        sku: sale.sku,
        quantity_sold: sale.quantity_sold,
        sale_date: sale.sale_date,
        customer: sale.customer,
        receipt_no: sale.receipt_no,
        notes: sale.notes,
        unit_price_gs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_catalog() -> Vec<Product> {
        vec![
            Product {
                sku: "P1".to_string(),
                name: "Auriculares BT".to_string(),
                list_price_gs: dec!(40000),
                stock: None,
                average_cost_gs: None,
            },
            Product {
                sku: "P3".to_string(),
                name: "Parlante".to_string(),
                list_price_gs: dec!(160000),
                stock: None,
                average_cost_gs: None,
            },
        ]
    }

    fn new_sale(sku: &str, qty: i64) -> NewSale {
        NewSale {
            sku: sku.to_string(),
            quantity_sold: qty,
            sale_date: NaiveDate::from_ymd_opt(2025, 12, 10).unwrap(),
            customer: "M. Benítez".to_string(),
            receipt_no: Some("TR-99012".to_string()),
            notes: None,
        }
    }

    #[test]
    fn unit_price_comes_from_the_catalog() {
        let sale = record_sale(new_sale("P3", 2), &test_catalog()).unwrap();
        assert_eq!(sale.unit_price_gs, dec!(160000));
        assert_eq!(sale.quantity_sold, 2);
    }

    #[test]
    fn unknown_sku_sells_at_zero() {
        let sale = record_sale(new_sale("P9", 1), &test_catalog()).unwrap();
        assert_eq!(sale.unit_price_gs, Decimal::ZERO);
    }

    #[test]
    fn display_key_uses_sales_prefix() {
        let sale = record_sale(new_sale("P1", 1), &test_catalog()).unwrap();
        assert!(sale.display_key.starts_with("V-"));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = record_sale(new_sale("P1", -2), &test_catalog()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn blank_customer_is_rejected() {
        let mut sale = new_sale("P1", 1);
        sale.customer = String::new();
        assert!(record_sale(sale, &test_catalog()).is_err());
    }
}
