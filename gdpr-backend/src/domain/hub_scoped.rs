// gdpr-backend/src/domain/hub_scoped.rs

use sea_orm::{ColumnTrait, Condition, EntityTrait};
use uuid::Uuid;

/// テナント（ハブ）単位で分離され、論理削除されるエンティティ
///
/// 全ての既定クエリは `visible_condition` を通して
/// 「自テナント かつ 未削除」に絞り込まれる。
pub trait HubScoped: EntityTrait {
    fn id_column() -> Self::Column;
    fn hub_id_column() -> Self::Column;
    fn is_deleted_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;

    /// 自テナントの未削除レコード
    fn visible_condition(hub_id: Uuid) -> Condition {
        Condition::all()
            .add(Self::hub_id_column().eq(hub_id))
            .add(Self::is_deleted_column().eq(false))
    }

    /// 論理削除済みも含む自テナントの全レコード
    fn tenant_condition(hub_id: Uuid) -> Condition {
        Condition::all().add(Self::hub_id_column().eq(hub_id))
    }
}
