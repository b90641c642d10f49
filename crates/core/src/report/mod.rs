//! Renderer-agnostic monthly report documents.
//!
//! A [`ReportDocument`] carries every string a renderer needs to lay out the
//! monthly PDF: header lines, the detail table and the summary block. It is
//! built purely from aggregator output, so the figures always match the
//! on-screen summary.

mod format;

pub use format::{format_currency, format_date, format_long_date, month_name, period_label};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::cash::{CashSummary, CashTransaction, TransactionType};
use crate::inventory::{InventoryMovement, InventorySnapshot, InventorySummary, MovementType, OutSubtype};
use crate::period::Period;

/// Inputs a report needs beyond the period data itself.
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    /// Day the report is issued.
    pub issued_on: Option<NaiveDate>,
    /// Organization name appended to the title.
    pub organization: Option<String>,
    /// Base64 image printed in the header.
    pub logo: Option<String>,
}

/// One label/value line of the summary block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    /// Left-hand label.
    pub label: String,
    /// Right-aligned value.
    pub value: String,
}

impl SummaryLine {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_owned(),
            value: value.into(),
        }
    }
}

/// A fully formatted report, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    /// Main title.
    pub title: String,
    /// Line under the title.
    pub subtitle: String,
    /// Period heading, upper case.
    pub heading: String,
    /// Issue date line, when an issue date was given.
    pub issued: Option<String>,
    /// Suggested download name.
    pub file_name: String,
    /// Table header.
    pub columns: Vec<String>,
    /// Table body, one entry per column.
    pub rows: Vec<Vec<String>>,
    /// Heading of the summary block.
    pub summary_title: String,
    /// Summary lines in display order.
    pub summary: Vec<SummaryLine>,
    /// Header logo.
    pub logo: Option<String>,
}

fn title_with(base: &str, organization: Option<&str>) -> String {
    match organization.map(str::trim).filter(|o| !o.is_empty()) {
        Some(org) => format!("{base} {}", org.to_uppercase()),
        None => base.to_owned(),
    }
}

fn issued_line(issued_on: Option<NaiveDate>) -> Option<String> {
    issued_on.map(|day| {
        format!(
            "Fecha de emisión: {} | Día: {}",
            format_long_date(day),
            day.day()
        )
    })
}

fn file_label(period: &Period) -> String {
    period_label(period).replace(' ', "_")
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|&n| n.to_owned()).collect()
}

/// Builds the petty-cash report for a period.
#[must_use]
pub fn cash_report(
    period: &Period,
    transactions: &[CashTransaction],
    summary: &CashSummary,
    context: &ReportContext,
) -> ReportDocument {
    let rows = transactions
        .iter()
        .map(|t| {
            vec![
                format_date(t.date),
                t.description.to_uppercase(),
                match t.transaction_type {
                    TransactionType::Income => "INGRESO",
                    TransactionType::Expense => "EGRESO",
                }
                .to_owned(),
                format_currency(t.amount),
            ]
        })
        .collect();

    ReportDocument {
        title: title_with("CAJA CHICA", context.organization.as_deref()),
        subtitle: "ADMINISTRACIÓN DE INGRESOS Y EGRESOS".to_owned(),
        heading: format!("PERIODO: {}", period_label(period).to_uppercase()),
        issued: issued_line(context.issued_on),
        file_name: format!("Reporte_CajaChica_{}.pdf", file_label(period)),
        columns: columns(&["FECHA", "DETALLE", "TIPO", "MONTO"]),
        rows,
        summary_title: "RESUMEN FINANCIERO".to_owned(),
        summary: vec![
            SummaryLine::new("Total Ingresos", format_currency(summary.total_income)),
            SummaryLine::new("Total Egresos", format_currency(summary.total_expenses)),
            SummaryLine::new("Saldo Neto", format_currency(summary.balance)),
        ],
        logo: context.logo.clone(),
    }
}

fn invoice_cell(movement: &InventoryMovement) -> String {
    if movement.subtype == Some(OutSubtype::Regalia) {
        return "REGALÍA".to_owned();
    }
    movement
        .invoice_number
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or("-")
        .to_owned()
}

/// Builds the inventory report for a period.
#[must_use]
pub fn inventory_report(
    period: &Period,
    snapshot: &InventorySnapshot,
    summary: &InventorySummary,
    context: &ReportContext,
) -> ReportDocument {
    let rows = snapshot
        .movements
        .iter()
        .map(|m| {
            vec![
                format_date(m.date),
                m.description.to_uppercase(),
                invoice_cell(m),
                match m.movement_type {
                    MovementType::In => "ENTRADA",
                    MovementType::Out => "SALIDA",
                }
                .to_owned(),
                m.units.to_string(),
            ]
        })
        .collect();

    ReportDocument {
        title: title_with("INVENTARIO", context.organization.as_deref()),
        subtitle: "CONTROL DE STOCK DE PRODUCTO".to_owned(),
        heading: format!("REPORTE MENSUAL: {}", period_label(period).to_uppercase()),
        issued: issued_line(context.issued_on),
        file_name: format!("Inventario_{}.pdf", file_label(period)),
        columns: columns(&["FECHA", "DETALLE", "FACTURA/ORDEN", "TIPO", "UNIDADES"]),
        rows,
        summary_title: "RESUMEN DE STOCK".to_owned(),
        summary: vec![
            SummaryLine::new("Stock Inicial", summary.initial_stock.to_string()),
            SummaryLine::new("Entradas Mes", format!("+{}", summary.total_in)),
            SummaryLine::new("Salidas Mes", format!("-{}", summary.total_out)),
            SummaryLine::new("Ventas", summary.total_ventas.to_string()),
            SummaryLine::new("Regalías", summary.total_regalias.to_string()),
            SummaryLine::new("Stock Final", summary.current_stock.to_string()),
        ],
        logo: context.logo.clone(),
    }
}
