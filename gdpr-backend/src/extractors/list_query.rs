// gdpr-backend/src/extractors/list_query.rs

use crate::types::query::ListQuery;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;

/// 一覧のクエリ文字列を寛容に読む
///
/// 重複キーは最後の値、解釈できないクエリ文字列は空として扱い、400 を返さない。
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Ignoring unparsable list query");
                Vec::new()
            });

        Ok(pairs.into_iter().collect())
    }
}
