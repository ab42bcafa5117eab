// gdpr-backend/src/shared/types/mod.rs

pub mod pagination;

// Re-export commonly used types
pub use pagination::{PaginationMeta, DEFAULT_PER_PAGE, PER_PAGE_CHOICES};
