pub mod datetime;
pub mod query;
pub mod response;

pub use datetime::{format_export_datetime, parse_form_datetime};
pub use query::{ExportFormat, ListParams, ListQuery, ListingSpec, SortOrder};
pub use response::ApiResponse;
