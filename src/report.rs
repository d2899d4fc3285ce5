//! Work-order report: joins each work order with its subscription, access
//! point and installation, classifies it and writes one spreadsheet row per
//! work order.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::classify::{LifecycleStatus, classify};
use crate::error::Result;
use crate::io::excel_write::{self, SheetTable};
use crate::rpc::BssDirectory;
use crate::time_format::TimestampFormatter;

/// Name of the single sheet in the report workbook.
pub const WORK_ORDERS_SHEET: &str = "Work Orders";
/// Default location of the report, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output.xlsx";

pub const HEADERS: [&str; 6] = [
    "Service Provider Reference",
    "Network Owner Reference",
    "Status",
    "Subscription Created At",
    "Work Order Completed At",
    "ONT Sent At",
];

/// One line of the report. Timestamps are already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub service_provider_reference: String,
    pub network_owner_reference: String,
    pub status: LifecycleStatus,
    pub subscription_created_at: String,
    pub work_order_completed_at: String,
    pub ont_sent_at: String,
}

impl ReportRow {
    /// Cell values in [`HEADERS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.service_provider_reference.clone(),
            self.network_owner_reference.clone(),
            self.status.label().to_string(),
            self.subscription_created_at.clone(),
            self.work_order_completed_at.clone(),
            self.ont_sent_at.clone(),
        ]
    }
}

/// Builds one row per work order, in the order the service lists them.
///
/// The first failed fetch aborts the whole collection.
#[instrument(level = "info", skip_all)]
pub async fn collect_rows(
    directory: &dyn BssDirectory,
    formatter: &TimestampFormatter,
) -> Result<Vec<ReportRow>> {
    let work_orders = directory.work_orders().await?;
    info!(work_order_count = work_orders.len(), "listed work orders");

    let mut rows = Vec::with_capacity(work_orders.len());
    for work_order in &work_orders {
        info!(
            id = %work_order.id,
            subscription = %work_order.subscription_id,
            installation = %work_order.installation_id,
            "processing work order"
        );
        let subscription = directory.subscription(&work_order.subscription_id).await?;
        let access_point = directory.access_point(&subscription.access_point_id).await?;
        let installation = directory.installation(&work_order.installation_id).await?;

        let classification = classify(
            work_order.status,
            installation.status,
            &installation.modules,
        );
        if classification.status.is_terminal() {
            info!(
                id = %work_order.id,
                status = %classification.status,
                "work order is terminal, skipping further processing"
            );
        } else {
            debug!(
                id = %work_order.id,
                status = %classification.status,
                ont_sent = classification.ont_sent,
                "work order classified"
            );
        }

        rows.push(ReportRow {
            service_provider_reference: subscription.external_id,
            network_owner_reference: access_point.external_id,
            status: classification.status,
            subscription_created_at: formatter.format(subscription.created_at),
            work_order_completed_at: formatter.format(work_order.ended_at),
            ont_sent_at: formatter.format(classification.ont_sent_at),
        });
    }

    Ok(rows)
}

/// Lays the rows out as the report sheet.
pub fn build_sheet(rows: &[ReportRow]) -> SheetTable {
    SheetTable {
        sheet_name: WORK_ORDERS_SHEET.to_string(),
        columns: HEADERS.iter().map(|header| header.to_string()).collect(),
        rows: rows.iter().map(ReportRow::cells).collect(),
    }
}

/// Collects the report and writes it to `output`, returning the row count.
///
/// Nothing is written unless every work order was resolved.
#[instrument(level = "info", skip_all, fields(output = %output.display()))]
pub async fn write_report(
    directory: &dyn BssDirectory,
    formatter: &TimestampFormatter,
    output: &Path,
) -> Result<usize> {
    let rows = collect_rows(directory, formatter).await?;
    let sheet = build_sheet(&rows);
    debug!(row_count = sheet.rows.len(), "sheet constructed");
    excel_write::write_sheet(output, &sheet)?;
    info!(row_count = rows.len(), "report written");
    Ok(rows.len())
}
