// gdpr-backend/src/api/dto/common.rs

use crate::repository::listing::ListPage;
use crate::shared::types::PaginationMeta;
use crate::types::query::ListParams;
use serde::Serialize;

/// 一覧レスポンス (ページ項目 + 一覧コンテキスト)
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_dir: String,
    pub current_view: String,
    pub per_page: u64,
    pub pagination: PaginationMeta,
}

impl<T> ListResponse<T> {
    pub fn from_page<M, C>(page: ListPage<M>, params: &ListParams<C>) -> Self
    where
        T: From<M>,
        C: Copy + 'static,
    {
        Self {
            items: page.items.into_iter().map(T::from).collect(),
            search_query: params.search.clone(),
            sort_field: params.sort_field.to_string(),
            sort_dir: params.sort_order.as_str().to_string(),
            current_view: params.view.clone(),
            per_page: params.per_page,
            pagination: page.pagination,
        }
    }
}

/// 追加・編集の保存結果と再描画された一覧
#[derive(Debug, Clone, Serialize)]
pub struct SavedResponse<T> {
    pub record: T,
    pub list: ListResponse<T>,
}

/// 削除・一括操作の結果と再描画された一覧
#[derive(Debug, Clone, Serialize)]
pub struct ListRefreshResponse<T> {
    pub affected: u64,
    pub list: ListResponse<T>,
}

/// 選択肢 (value / label)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChoiceDto {
    pub value: &'static str,
    pub label: &'static str,
}

/// フォームの文字列値を正規化する。未送信は空文字
pub fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
