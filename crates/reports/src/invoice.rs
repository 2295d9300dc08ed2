use serde::Serialize;

use corral_core::format_cents;
use corral_trading::Sale;

/// One rendered invoice row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLine {
    pub stock_label: String,
    pub quantity: i64,
    pub unit_price: String,
    pub subtotal: String,
}

/// Data packet the external PDF collaborator renders into an invoice.
///
/// The core hands over the sale header and its ordered lines with amounts
/// already formatted; byte production (the PDF itself) stays outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDocument {
    pub filename: String,
    pub sale_id: String,
    pub customer: String,
    pub operator: String,
    pub date: String,
    pub lines: Vec<InvoiceLine>,
    pub total: String,
}

/// Assemble the invoice document for one sale.
pub fn invoice_for_sale(sale: &Sale) -> InvoiceDocument {
    InvoiceDocument {
        filename: format!("invoice_sale_{}.pdf", sale.id),
        sale_id: sale.id.to_string(),
        customer: sale.customer.name.clone(),
        operator: sale.operator.username.clone(),
        date: sale.occurred_at.format("%Y-%m-%d %H:%M").to_string(),
        lines: sale
            .lines
            .iter()
            .map(|l| InvoiceLine {
                stock_label: l.stock_label.clone(),
                quantity: l.quantity,
                unit_price: format_cents(l.unit_price),
                subtotal: format_cents(l.subtotal()),
            })
            .collect(),
        total: format_cents(sale.total),
    }
}
