//! Report downloads offered on the supplies page.
//!
//! Each kind maps to a GET endpoint under the reports base URL and to a
//! fixed file name for the browser download.

use crate::shared::validation::{is_ascii_letters, FieldRule, Schema};
use chrono::{NaiveDate, SecondsFormat, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    General,
    Stockout,
    Overstock,
    Movement,
    ByName { name: String },
    ByDateRange { start: NaiveDate, end: NaiveDate },
}

impl ReportKind {
    /// Path relative to the reports base URL
    pub fn path(&self) -> &'static str {
        match self {
            ReportKind::General => "/report/general",
            ReportKind::Stockout => "/report/stockout",
            ReportKind::Overstock => "/report/sobreabastecimiento",
            ReportKind::Movement => "/report/movimiento",
            ReportKind::ByName { .. } => "/report/nombre",
            ReportKind::ByDateRange { .. } => "/report/fecha",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ReportKind::General => "Reporte-General-Insumos",
            ReportKind::Stockout => "Reporte-Stockout-Insumos",
            ReportKind::Overstock => "Reporte-Sobreabastecimiento-Insumos",
            ReportKind::Movement => "Reporte-Rotacion",
            ReportKind::ByName { .. } => "Reporte por Nombre",
            ReportKind::ByDateRange { .. } => "Reporte por Fecha",
        }
    }

    /// Button caption on the supplies page
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::General => "Estado General",
            ReportKind::Stockout => "Alertas Stockout",
            ReportKind::Overstock => "Alertas Sobreabastecimiento",
            ReportKind::Movement => "Rotacion",
            ReportKind::ByName { .. } => "Estado por Nombre",
            ReportKind::ByDateRange { .. } => "Estado por fecha",
        }
    }

    /// Query string without the leading `?`, empty for plain reports
    pub fn query(&self) -> String {
        match self {
            ReportKind::ByName { name } => format!("nombre={}", urlencoding::encode(name)),
            ReportKind::ByDateRange { start, end } => format!(
                "fechaInicio={}&fechaFin={}",
                urlencoding::encode(&iso_midnight_utc(*start)),
                urlencoding::encode(&iso_midnight_utc(*end)),
            ),
            _ => String::new(),
        }
    }

    /// Full request URL
    pub fn url(&self, reports_base: &str) -> String {
        let base = reports_base.trim_end_matches('/');
        let query = self.query();
        if query.is_empty() {
            format!("{}{}", base, self.path())
        } else {
            format!("{}{}?{}", base, self.path(), query)
        }
    }
}

/// Reports without parameters, in button order
pub const PLAIN_REPORTS: [ReportKind; 4] = [
    ReportKind::General,
    ReportKind::Stockout,
    ReportKind::Overstock,
    ReportKind::Movement,
];

/// `YYYY-MM-DDT00:00:00.000Z`
pub fn iso_midnight_utc(date: NaiveDate) -> String {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    Utc.from_utc_datetime(&midnight)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Schema of the report-by-name dialog
pub static REPORT_NAME_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "report_by_name",
        vec![FieldRule::text("nombre").max_len(20).refine(
            is_ascii_letters,
            "El nombre debe contener solo letras sin espacios en blanco",
        )],
    )
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("Fecha de inicio requerida")]
    MissingStart,
    #[error("Fecha de fin requerida")]
    MissingEnd,
    #[error("Fecha inválida: {0}")]
    Invalid(String),
}

/// Parses the two `<input type="date">` values of the date dialog.
///
/// Both dates are required; the dialog does not submit otherwise.
pub fn parse_date_range(start: &str, end: &str) -> Result<ReportKind, DateRangeError> {
    let start = parse_input_date(start).ok_or(DateRangeError::MissingStart)??;
    let end = parse_input_date(end).ok_or(DateRangeError::MissingEnd)??;
    Ok(ReportKind::ByDateRange { start, end })
}

fn parse_input_date(value: &str) -> Option<Result<NaiveDate, DateRangeError>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| DateRangeError::Invalid(value.to_string())),
    )
}
