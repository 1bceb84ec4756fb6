use chrono::{DateTime, Utc};

/// 記録済みのtime entryを表す構造体。
///
/// `duration_ms`は呼び出し側が計算済みの経過時間をそのまま保持する。
/// `stop - start`との整合性はここでは検証しない。
#[derive(Clone, Debug)]
pub struct TimeEntry {
    pub id: String,
    pub project_id: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub duration_ms: i64,
}

/// entryが属するプロジェクトを表す構造体。
#[derive(Clone, Debug)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub color: String,
}
