// gdpr-backend/src/repository/listing.rs

//! 両エンティティ共通の 検索 / ソート / ページング / 論理削除

use crate::domain::hub_scoped::HubScoped;
use crate::shared::types::pagination::{clamp_page, PaginationMeta};
use crate::types::query::{ListParams, SortOrder};
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

/// LIKE のエスケープ文字
const LIKE_ESCAPE: char = '\\';

/// 1ページ分の結果
#[derive(Debug, Clone)]
pub struct ListPage<M> {
    pub items: Vec<M>,
    pub pagination: PaginationMeta,
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// `%` `_` `\` をリテラルとして扱う部分一致パターン
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    // SQLite の LOWER() は ASCII のみ小文字化するので揃える
    for ch in term.to_ascii_lowercase().chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// 大文字小文字を無視した部分一致 (LOWER(col) LIKE pattern)
pub fn icontains<C: ColumnTrait>(column: C, term: &str) -> Condition {
    Condition::all().add(
        Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
            .like(LikeExpr::new(contains_pattern(term)).escape(LIKE_ESCAPE)),
    )
}

/// 検索対象カラムのいずれかに一致。空の検索語は条件なし
pub fn search_condition<C: ColumnTrait>(columns: &[C], search: &str) -> Option<Condition> {
    let search = search.trim();
    if search.is_empty() || columns.is_empty() {
        return None;
    }

    Some(
        columns
            .iter()
            .fold(Condition::any(), |cond, column| cond.add(icontains(*column, search))),
    )
}

/// 自テナントの未削除レコードを検索語で絞り込んだ SELECT
pub fn filtered_select<E: HubScoped>(hub_id: Uuid, search_columns: &[E::Column], search: &str) -> Select<E> {
    let mut query = E::find().filter(E::visible_condition(hub_id));
    if let Some(condition) = search_condition(search_columns, search) {
        query = query.filter(condition);
    }
    query
}

/// ソート順を適用する。同値の並びは id で固定
fn ordered<E: HubScoped>(query: Select<E>, params: &ListParams<E::Column>) -> Select<E> {
    query
        .order_by(params.sort_column, params.sort_order.into())
        .order_by(E::id_column(), Order::Asc)
}

/// 1ページ分を取得する。範囲外のページ番号は丸める
pub async fn fetch_page<E, C>(
    db: &C,
    hub_id: Uuid,
    search_columns: &[E::Column],
    params: &ListParams<E::Column>,
) -> Result<ListPage<E::Model>, DbErr>
where
    E: HubScoped,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    let query = filtered_select::<E>(hub_id, search_columns, &params.search);

    // 総件数を取得
    let total_count = query.clone().count(db).await?;

    let page = clamp_page(params.page, total_count, params.per_page);
    let offset = (page - 1) * params.per_page;

    let items = ordered(query, params)
        .limit(params.per_page)
        .offset(offset)
        .all(db)
        .await?;

    Ok(ListPage {
        items,
        pagination: PaginationMeta::new(page, params.per_page, total_count),
    })
}

/// エクスポート用: ページングせず一致する全件
pub async fn fetch_all<E, C>(
    db: &C,
    hub_id: Uuid,
    search_columns: &[E::Column],
    params: &ListParams<E::Column>,
) -> Result<Vec<E::Model>, DbErr>
where
    E: HubScoped,
    C: ConnectionTrait,
{
    let query = filtered_select::<E>(hub_id, search_columns, &params.search);
    ordered(query, params).all(db).await
}

/// 自テナントの未削除件数
pub async fn count_visible<E, C>(db: &C, hub_id: Uuid) -> Result<u64, DbErr>
where
    E: HubScoped,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::visible_condition(hub_id))
        .count(db)
        .await
}

/// 論理削除済みを含む自テナントの全件
pub async fn fetch_all_with_deleted<E, C>(db: &C, hub_id: Uuid) -> Result<Vec<E::Model>, DbErr>
where
    E: HubScoped,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::tenant_condition(hub_id))
        .order_by(E::id_column(), Order::Asc)
        .all(db)
        .await
}

/// 一括論理削除。自テナントの未削除レコードに対する単一の UPDATE
///
/// `update_many` は `before_save` を通らないため `updated_at` もここで設定する。
pub async fn soft_delete_many<E, C>(db: &C, hub_id: Uuid, ids: &[Uuid]) -> Result<u64, DbErr>
where
    E: HubScoped,
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let result = E::update_many()
        .col_expr(E::is_deleted_column(), Expr::value(true))
        .col_expr(E::deleted_at_column(), Expr::value(Some(now)))
        .col_expr(E::updated_at_column(), Expr::value(now))
        .filter(E::visible_condition(hub_id))
        .filter(E::id_column().is_in(ids.iter().copied()))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}
