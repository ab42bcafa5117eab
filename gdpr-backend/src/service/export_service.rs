// gdpr-backend/src/service/export_service.rs

//! 一覧の CSV / Excel エクスポート

use crate::api::dto::ListResponse;
use crate::domain::{consent_record_model, data_request_model};
use crate::error::{AppError, AppResult};
use crate::types::datetime::format_export_datetime;
use crate::types::query::ExportFormat;
use crate::types::response::ApiResponse;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use tracing::error;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Excel のセルに入る最大文字数
pub const XLSX_MAX_CELL_CHARS: usize = 32_767;

/// エクスポートのセル値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportCell {
    Text(String),
    Bool(bool),
    DateTime(Option<DateTime<Utc>>),
}

impl ExportCell {
    fn as_text(&self) -> String {
        match self {
            ExportCell::Text(value) => value.clone(),
            ExportCell::Bool(true) => "Yes".to_string(),
            ExportCell::Bool(false) => "No".to_string(),
            ExportCell::DateTime(value) => format_export_datetime(*value),
        }
    }
}

/// エクスポート可能な行。列の並びは `HEADERS` と一致させる
pub trait ExportRow {
    const HEADERS: &'static [&'static str];
    const FILE_STEM: &'static str;
    const SHEET_NAME: &'static str;

    fn cells(&self) -> Vec<ExportCell>;
}

impl ExportRow for consent_record_model::Model {
    const HEADERS: &'static [&'static str] = &[
        "Consented",
        "Subject Name",
        "Subject Email",
        "Purpose",
        "Consent Date",
        "Withdrawal Date",
    ];
    const FILE_STEM: &'static str = "consent_records";
    const SHEET_NAME: &'static str = "Consent Records";

    fn cells(&self) -> Vec<ExportCell> {
        vec![
            ExportCell::Bool(self.consented),
            ExportCell::Text(self.subject_name.clone()),
            ExportCell::Text(self.subject_email.clone()),
            ExportCell::Text(self.purpose.clone()),
            ExportCell::DateTime(self.consent_date),
            ExportCell::DateTime(self.withdrawal_date),
        ]
    }
}

impl ExportRow for data_request_model::Model {
    const HEADERS: &'static [&'static str] = &[
        "Request Type",
        "Status",
        "Subject Name",
        "Subject Email",
        "Completed At",
        "Notes",
    ];
    const FILE_STEM: &'static str = "data_requests";
    const SHEET_NAME: &'static str = "Data Requests";

    fn cells(&self) -> Vec<ExportCell> {
        vec![
            ExportCell::Text(self.request_type.clone()),
            ExportCell::Text(self.status.clone()),
            ExportCell::Text(self.subject_name.clone()),
            ExportCell::Text(self.subject_email.clone()),
            ExportCell::DateTime(self.completed_at),
            ExportCell::Text(self.notes.clone()),
        ]
    }
}

/// ダウンロード用ファイル
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl IntoResponse for ExportFile {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, self.content_type.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// 一覧エンドポイントの結果: ページ表示またはファイル
#[derive(Debug)]
pub enum ListingOutcome<T> {
    Page(ListResponse<T>),
    Export(ExportFile),
}

impl<T: Serialize> IntoResponse for ListingOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            ListingOutcome::Page(page) => ApiResponse::success(page).into_response(),
            ListingOutcome::Export(file) => file.into_response(),
        }
    }
}

pub fn export<R: ExportRow>(rows: &[R], format: ExportFormat) -> AppResult<ExportFile> {
    let (bytes, content_type) = match format {
        ExportFormat::Csv => (to_csv(rows)?, CSV_CONTENT_TYPE),
        ExportFormat::Excel => (to_xlsx(rows)?, XLSX_CONTENT_TYPE),
    };

    Ok(ExportFile {
        filename: format!("{}.{}", R::FILE_STEM, format.extension()),
        content_type,
        bytes,
    })
}

pub fn to_csv<R: ExportRow>(rows: &[R]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(R::HEADERS).map_err(export_error)?;
    for row in rows {
        let record: Vec<String> = row.cells().iter().map(ExportCell::as_text).collect();
        writer.write_record(&record).map_err(export_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| export_error(e.to_string()))
}

pub fn to_xlsx<R: ExportRow>(rows: &[R]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(R::SHEET_NAME).map_err(export_error)?;

    for (col, title) in R::HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(export_error)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = (index + 1) as u32;
        for (col, cell) in row.cells().into_iter().enumerate() {
            let col = col as u16;
            let written = match cell {
                ExportCell::Bool(value) => worksheet.write_boolean(row_num, col, value),
                other => worksheet.write_string(row_num, col, xlsx_text(other.as_text())),
            };
            written.map_err(export_error)?;
        }
    }

    workbook.save_to_buffer().map_err(export_error)
}

/// セル上限を超える文字列は切り詰める (CSV はそのまま)
fn xlsx_text(text: String) -> String {
    if text.chars().count() <= XLSX_MAX_CELL_CHARS {
        return text;
    }
    text.chars().take(XLSX_MAX_CELL_CHARS).collect()
}

fn export_error(e: impl ToString) -> AppError {
    let message = e.to_string();
    error!(error = %message, "Export encoding failed");
    AppError::Export(message)
}
