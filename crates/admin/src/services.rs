use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use reventa_core::{DomainError, DomainResult};
use reventa_inventory::{summarize, value_sku, CatalogSummary, SkuValuation};
use reventa_logistics::{price_shipment, NewShipment, PricedShipment, Shipment};
use reventa_products::{NewProduct, Product};
use reventa_purchasing::{
    price_line, NewPurchaseLine, OrderTotal, PricedPurchaseLine, PurchaseLine,
};
use reventa_sales::{record_sale, NewSale, SaleLine};
use reventa_store::{AppendStore, InMemoryAppendStore, InMemoryKeyedStore, KeyedStore};

/// The admin tool's service layer.
///
/// Owns handles to the five record tables and exposes one method per admin
/// flow. All derived data is recomputed from freshly fetched snapshots on
/// every call; nothing is cached between calls.
pub struct AdminServices {
    order_totals: Arc<dyn KeyedStore<String, OrderTotal>>,
    shipments: Arc<dyn KeyedStore<String, Shipment>>,
    products: Arc<dyn KeyedStore<String, Product>>,
    purchases: Arc<dyn AppendStore<PurchaseLine>>,
    sales: Arc<dyn AppendStore<SaleLine>>,
}

impl AdminServices {
    pub fn new(
        order_totals: Arc<dyn KeyedStore<String, OrderTotal>>,
        shipments: Arc<dyn KeyedStore<String, Shipment>>,
        products: Arc<dyn KeyedStore<String, Product>>,
        purchases: Arc<dyn AppendStore<PurchaseLine>>,
        sales: Arc<dyn AppendStore<SaleLine>>,
    ) -> Self {
        Self {
            order_totals,
            shipments,
            products,
            purchases,
            sales,
        }
    }

    /// Wire up against in-memory tables (tests, demo).
    pub fn in_memory() -> Self {
        let order_totals: Arc<InMemoryKeyedStore<String, OrderTotal>> =
            Arc::new(InMemoryKeyedStore::new());
        let shipments: Arc<InMemoryKeyedStore<String, Shipment>> =
            Arc::new(InMemoryKeyedStore::new());
        let products: Arc<InMemoryKeyedStore<String, Product>> =
            Arc::new(InMemoryKeyedStore::new());
        let purchases: Arc<InMemoryAppendStore<PurchaseLine>> =
            Arc::new(InMemoryAppendStore::new());
        let sales: Arc<InMemoryAppendStore<SaleLine>> = Arc::new(InMemoryAppendStore::new());

        Self::new(order_totals, shipments, products, purchases, sales)
    }

    /// Record (or correct) the invoiced total of a supplier order.
    pub fn register_order_total(
        &self,
        order_no: impl Into<String>,
        invoiced_total_usd: Decimal,
    ) -> DomainResult<OrderTotal> {
        let total = OrderTotal::new(order_no, invoiced_total_usd)?;
        self.order_totals
            .upsert(total.order_no.clone(), total.clone());

        tracing::info!(
            order_no = %total.order_no,
            invoiced_total_usd = %total.invoiced_total_usd,
            "order total registered"
        );
        Ok(total)
    }

    /// Record a shipment retrieval and return it priced against the current
    /// purchase history.
    ///
    /// Re-registering a known tracking code replaces the stored retrieval
    /// (cost corrections arrive after the courier bills).
    pub fn register_shipment(&self, input: NewShipment) -> DomainResult<PricedShipment> {
        let shipment = input.into_shipment()?;
        let priced = price_shipment(&shipment, &self.purchases.list());

        self.shipments
            .upsert(shipment.tracking_py.clone(), shipment);

        tracing::info!(
            tracking_py = %priced.shipment.tracking_py,
            aggregate_weight_kg = %priced.aggregate_weight_kg,
            distribution_factor = %priced.distribution_factor,
            "shipment retrieval registered"
        );
        Ok(priced)
    }

    /// Record a purchase line and return it priced against the current
    /// snapshot.
    ///
    /// The returned pricing reflects the reference data available right now;
    /// [`Self::priced_purchases`] re-derives every line when later entries
    /// (a corrected order total, the shipment cost) change the picture.
    pub fn register_purchase(&self, input: NewPurchaseLine) -> DomainResult<PricedPurchaseLine> {
        let line = input.into_line()?;

        let mut siblings = self.purchases.list();
        siblings.push(line.clone());

        let invoiced = self
            .order_totals
            .get(&line.order_no)
            .map(|t| t.invoiced_total_usd);
        let factor = self
            .shipments
            .get(&line.tracking_py)
            .map(|s| price_shipment(&s, &siblings).distribution_factor);

        let priced = price_line(&line, &siblings, invoiced, factor);
        self.purchases.append(line);

        tracing::info!(
            key = %priced.line.display_key,
            sku = %priced.line.sku,
            order_no = %priced.line.order_no,
            lot_cost_gs = %priced.lot_cost_gs,
            "purchase line registered"
        );
        Ok(priced)
    }

    /// Record a sale at the current catalog price.
    pub fn register_sale(&self, input: NewSale) -> DomainResult<SaleLine> {
        let sale = record_sale(input, &self.products.list())?;
        self.sales.append(sale.clone());

        tracing::info!(
            key = %sale.display_key,
            sku = %sale.sku,
            quantity_sold = sale.quantity_sold,
            "sale registered"
        );
        Ok(sale)
    }

    /// Create or update a catalog entry. Computed display fields of an
    /// existing entry survive until the next valuation pass.
    pub fn upsert_product(&self, input: NewProduct) -> DomainResult<Product> {
        let mut product = input.into_product()?;

        if let Some(existing) = self.products.get(&product.sku) {
            product.stock = existing.stock;
            product.average_cost_gs = existing.average_cost_gs;
        }

        self.products.upsert(product.sku.clone(), product.clone());
        tracing::info!(sku = %product.sku, "product upserted");
        Ok(product)
    }

    pub fn remove_product(&self, sku: &str) -> DomainResult<()> {
        if !self.products.remove(&sku.to_string()) {
            return Err(DomainError::not_found());
        }
        tracing::info!(sku, "product removed");
        Ok(())
    }

    /// One engine run over the full purchase history: every line re-priced
    /// against the current order totals and shipment factors.
    pub fn priced_purchases(&self) -> Vec<PricedPurchaseLine> {
        let lines = self.purchases.list();

        let factors: HashMap<String, Decimal> = self
            .shipments
            .list()
            .iter()
            .map(|s| {
                (
                    s.tracking_py.clone(),
                    price_shipment(s, &lines).distribution_factor,
                )
            })
            .collect();

        lines
            .iter()
            .map(|line| {
                let invoiced = self
                    .order_totals
                    .get(&line.order_no)
                    .map(|t| t.invoiced_total_usd);
                let factor = factors.get(&line.tracking_py).copied();
                price_line(line, &lines, invoiced, factor)
            })
            .collect()
    }

    /// Every shipment priced against the current purchase history.
    pub fn priced_shipments(&self) -> Vec<PricedShipment> {
        let lines = self.purchases.list();
        self.shipments
            .list()
            .iter()
            .map(|s| price_shipment(s, &lines))
            .collect()
    }

    /// Stock and average landed cost of one SKU, from full history.
    pub fn valuation(&self, sku: &str) -> SkuValuation {
        value_sku(sku, &self.priced_purchases(), &self.sales.list())
    }

    /// Re-value the whole catalog and write the computed display fields back
    /// to the product table. Returns the updated entries.
    pub fn refresh_valuations(&self) -> Vec<Product> {
        let priced = self.priced_purchases();
        let sales = self.sales.list();

        let mut updated = Vec::new();
        for mut product in self.products.list() {
            let valuation = value_sku(&product.sku, &priced, &sales);
            product.stock = Some(valuation.stock);
            product.average_cost_gs = Some(valuation.average_unit_cost_gs);
            self.products.upsert(product.sku.clone(), product.clone());
            updated.push(product);
        }

        tracing::info!(products = updated.len(), "catalog valuations refreshed");
        updated
    }

    /// Catalog-wide stock and value roll-up.
    pub fn catalog_summary(&self) -> CatalogSummary {
        summarize(
            &self.products.list(),
            &self.priced_purchases(),
            &self.sales.list(),
        )
    }

    /// Current catalog entries, as stored (computed fields may be stale).
    pub fn catalog(&self) -> Vec<Product> {
        self.products.list()
    }
}
