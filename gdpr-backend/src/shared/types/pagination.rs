// gdpr-backend/src/shared/types/pagination.rs

use serde::{Deserialize, Serialize};

/// 一覧で選択できるページサイズ
pub const PER_PAGE_CHOICES: [u64; 4] = [10, 25, 50, 100];

/// デフォルトページサイズ
pub const DEFAULT_PER_PAGE: u64 = 10;

/// ページ情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: u64, per_page: u64, total_count: u64) -> Self {
        let total_pages = total_pages(total_count, per_page);

        Self {
            page,
            per_page,
            total_pages,
            total_count,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// 総ページ数。空でも1ページ目は存在する
pub fn total_pages(total_count: u64, per_page: u64) -> u64 {
    let per_page = per_page.max(1);
    total_count.div_ceil(per_page).max(1)
}

/// 許可されていないページサイズはデフォルトに戻す
pub fn normalize_per_page(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|n| PER_PAGE_CHOICES.contains(n))
        .unwrap_or(DEFAULT_PER_PAGE)
}

/// 要求ページ番号を解釈する。不正値は1ページ目、`last` は最終ページ
pub fn parse_page(raw: Option<&str>) -> u64 {
    let raw = raw.map(str::trim);
    if raw == Some("last") {
        // clamp_page で最終ページに丸められる
        return u64::MAX;
    }

    raw.and_then(|v| v.parse::<u64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}

/// 範囲外のページは最終ページに丸める
pub fn clamp_page(requested: u64, total_count: u64, per_page: u64) -> u64 {
    requested.clamp(1, total_pages(total_count, per_page))
}
