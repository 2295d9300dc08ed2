use thiserror::Error;

use corral_core::format_cents;
use corral_trading::{Purchase, Sale};

const SALES_HEADER: [&str; 5] = ["ID", "Customer", "Operator", "Date", "Total"];
const PURCHASES_HEADER: [&str; 5] = ["ID", "Supplier", "Date", "Payment Method", "Total"];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

/// CSV bytes plus the filename the download should suggest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// Export filtered sales as CSV: `ID, Customer, Operator, Date, Total`.
pub fn sales_csv(sales: &[&Sale]) -> Result<CsvExport, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(SALES_HEADER)?;
    for sale in sales {
        writer.write_record(&[
            sale.id.to_string(),
            sale.customer.name.clone(),
            sale.operator.username.clone(),
            sale.occurred_at.format(DATE_FORMAT).to_string(),
            format_cents(sale.total),
        ])?;
    }

    Ok(CsvExport {
        filename: "sales.csv",
        bytes: into_bytes(writer)?,
    })
}

/// Export filtered purchases as CSV: `ID, Supplier, Date, Payment Method, Total`.
pub fn purchases_csv(purchases: &[&Purchase]) -> Result<CsvExport, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(PURCHASES_HEADER)?;
    for purchase in purchases {
        writer.write_record(&[
            purchase.id.to_string(),
            purchase.supplier.name.clone(),
            purchase.occurred_at.format(DATE_FORMAT).to_string(),
            purchase.payment_method.label().to_string(),
            format_cents(purchase.total),
        ])?;
    }

    Ok(CsvExport {
        filename: "purchases.csv",
        bytes: into_bytes(writer)?,
    })
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, ExportError> {
    writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use corral_core::{CustomerId, OperatorId, PurchaseId, SaleId, StockItemId, SupplierId};
    use corral_parties::{CustomerRef, OperatorRef, SupplierRef};
    use corral_trading::{LineItem, PaymentMethod};

    fn ts() -> DateTime<Utc> {
        "2026-08-20T14:30:00Z".parse().unwrap()
    }

    fn line(quantity: i64, unit_price: i64) -> LineItem {
        LineItem {
            stock_item_id: StockItemId::new(),
            stock_label: "Grade A".to_string(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn sales_csv_has_expected_header_and_rows() {
        let sale = Sale::new(
            SaleId::new(),
            CustomerRef {
                id: CustomerId::new(),
                name: "Tienda Sol".to_string(),
            },
            OperatorRef {
                id: OperatorId::new(),
                username: "mrivera".to_string(),
            },
            ts(),
            vec![line(3, 250)],
        );

        let export = sales_csv(&[&sale]).unwrap();
        assert_eq!(export.filename, "sales.csv");

        let text = String::from_utf8(export.bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "ID,Customer,Operator,Date,Total");
        let row = lines.next().unwrap();
        assert!(row.contains(&sale.id.to_string()));
        assert!(row.contains("Tienda Sol"));
        assert!(row.contains("mrivera"));
        assert!(row.contains("2026-08-20 14:30"));
        assert!(row.ends_with("7.50"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn purchases_csv_includes_payment_method_label() {
        let purchase = Purchase::new(
            PurchaseId::new(),
            SupplierRef {
                id: SupplierId::new(),
                name: "Avicola Norte".to_string(),
            },
            ts(),
            PaymentMethod::Transfer,
            vec![line(10, 200)],
        );

        let export = purchases_csv(&[&purchase]).unwrap();
        assert_eq!(export.filename, "purchases.csv");

        let text = String::from_utf8(export.bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "ID,Supplier,Date,Payment Method,Total");
        let row = lines.next().unwrap();
        assert!(row.contains("Transfer"));
        assert!(row.ends_with("20.00"));
    }

    #[test]
    fn empty_exports_still_carry_the_header() {
        let export = sales_csv(&[]).unwrap();
        let text = String::from_utf8(export.bytes).unwrap();
        assert_eq!(text.trim_end(), "ID,Customer,Operator,Date,Total");
    }
}
