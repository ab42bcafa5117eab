// gdpr-backend/src/types/query.rs

use serde::{Deserialize, Serialize};

use crate::shared::types::pagination::{normalize_per_page, parse_page};

/// 一覧表示のデフォルトビュー
pub const DEFAULT_VIEW: &str = "table";

/// ソート順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` 以外はすべて昇順
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// エクスポート形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn from_param(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            Some("csv") => Some(ExportFormat::Csv),
            Some("excel") => Some(ExportFormat::Excel),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// 一覧エンドポイントの生クエリ。不正値はエラーにせず正規化で吸収する
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<String>,
    pub view: Option<String>,
    pub per_page: Option<String>,
    pub export: Option<String>,
}

/// キーが重複した場合は最後の値を使う。未知のキーは無視
impl FromIterator<(String, String)> for ListQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut query.q,
                "sort" => &mut query.sort,
                "dir" => &mut query.dir,
                "page" => &mut query.page,
                "view" => &mut query.view,
                "per_page" => &mut query.per_page,
                "export" => &mut query.export,
                _ => continue,
            };
            *slot = Some(value);
        }
        query
    }
}

/// エンティティごとの検索・ソート定義
#[derive(Debug, Clone, Copy)]
pub struct ListingSpec<C: Copy + 'static> {
    pub search_columns: &'static [C],
    pub sort_fields: &'static [(&'static str, C)],
    pub default_sort: (&'static str, C),
}

impl<C: Copy + 'static> ListingSpec<C> {
    /// 許可リストにないソート項目はデフォルトへ
    pub fn resolve_sort(&self, requested: Option<&str>) -> (&'static str, C) {
        let requested = requested.map(str::trim).unwrap_or_default();
        self.sort_fields
            .iter()
            .find(|(name, _)| *name == requested)
            .copied()
            .unwrap_or(self.default_sort)
    }

    pub fn sort_field_names(&self) -> Vec<&'static str> {
        self.sort_fields.iter().map(|(name, _)| *name).collect()
    }
}

/// 正規化済みの一覧パラメータ
#[derive(Debug, Clone)]
pub struct ListParams<C: Copy + 'static> {
    pub search: String,
    pub sort_field: &'static str,
    pub sort_column: C,
    pub sort_order: SortOrder,
    /// 要求ページ。総件数が分かった時点で丸める
    pub page: u64,
    pub per_page: u64,
    pub view: String,
    pub export: Option<ExportFormat>,
}

impl<C: Copy + 'static> ListParams<C> {
    /// フォーム送信後の再描画用 (1ページ目・デフォルトソート)
    pub fn first_page(spec: &ListingSpec<C>) -> Self {
        ListQuery::default().normalize(spec)
    }
}

impl ListQuery {
    pub fn normalize<C: Copy + 'static>(&self, spec: &ListingSpec<C>) -> ListParams<C> {
        let (sort_field, sort_column) = spec.resolve_sort(self.sort.as_deref());

        ListParams {
            search: self.q.as_deref().map(str::trim).unwrap_or_default().to_string(),
            sort_field,
            sort_column,
            sort_order: SortOrder::from_param(self.dir.as_deref()),
            page: parse_page(self.page.as_deref()),
            per_page: normalize_per_page(self.per_page.as_deref()),
            view: self
                .view
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_VIEW)
                .to_string(),
            export: ExportFormat::from_param(self.export.as_deref()),
        }
    }
}
