use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};

use crate::color;
use crate::time_entry::{Project, TimeEntry};

/// entryのプロジェクト参照が解決できない場合に表示する名前。
pub const FALLBACK_PROJECT_NAME: &str = "Unknown Project";

/// entryが1件もない場合に表示するメッセージ。
pub const EMPTY_STATE_MESSAGE: &str = "No time entries recorded yet.";

/// 時刻表示のフォーマット。24時間表記・ゼロ埋めの固定ロケール相当。
const CLOCK_FORMAT: &str = "%H:%M";

/// time entryの一覧を表示するためのtrait。
pub trait EntryListPresenter {
    /// タイムエントリーの一覧をプロジェクト情報付きで表示する。
    ///
    /// # Arguments
    ///
    /// * `entries` - 表示するタイムエントリー。渡された順序のまま表示する
    /// * `projects` - プロジェクト参照の解決にのみ利用する一覧
    fn show_entries(&mut self, entries: &[TimeEntry], projects: &[Project]) -> Result<()>;

    /// 指定idの行の削除操作を発火する。
    ///
    /// 削除callbackを1回だけ呼び出す。一覧の更新は呼び出し側の責務であり、
    /// presenter自身は何も変更しない。
    fn activate_delete(&mut self, entry_id: &str);
}

/// タイムエントリーをlist形式で表示するview。
///
/// 状態を持たず、描画のたびに入力から出力を導出する。唯一の副作用は
/// 削除操作時の`on_delete`呼び出しのみ。
pub struct EntryListView<'a, W: Write, F: FnMut(&str)> {
    writer: &'a mut W,
    on_delete: F,
}

impl<'a, W: Write, F: FnMut(&str)> EntryListView<'a, W, F> {
    /// 新しい`EntryListView`を返す。
    ///
    /// # Arguments
    ///
    /// * `writer` - 描画先
    /// * `on_delete` - 削除操作時にentryのidを受け取るcallback
    pub fn new(writer: &'a mut W, on_delete: F) -> Self {
        Self { writer, on_delete }
    }
}

impl<'a, W: Write, F: FnMut(&str)> EntryListPresenter for EntryListView<'a, W, F> {
    // entryをlist形式で表示する。並び替えや絞り込みは行わない。
    fn show_entries(&mut self, entries: &[TimeEntry], projects: &[Project]) -> Result<()> {
        if entries.is_empty() {
            writeln!(self.writer, "{}", EMPTY_STATE_MESSAGE)
                .context("Failed to write empty state message")?;
            return Ok(());
        }

        for entry in entries {
            let (name, project_color) = resolve_project(projects, &entry.project_id);
            writeln!(
                self.writer,
                "- {} {}: {} ({} - {} \u{2022} {}) [{}]",
                color::swatch(project_color),
                name,
                entry.description,
                format_clock(&entry.start),
                format_clock(&entry.stop),
                format_duration(entry.duration_ms),
                entry.id,
            )
            .with_context(|| format!("Failed to write time entry: {:?}", entry))?;
        }

        Ok(())
    }

    fn activate_delete(&mut self, entry_id: &str) {
        (self.on_delete)(entry_id);
    }
}

/// entryのプロジェクト参照を線形探索で解決する。
///
/// 見つからない場合はfallbackの名前と色を返す。
fn resolve_project<'p>(projects: &'p [Project], project_id: &str) -> (&'p str, &'p str) {
    projects
        .iter()
        .find(|project| project.id == project_id)
        .map(|project| (project.name.as_str(), project.color.as_str()))
        .unwrap_or((FALLBACK_PROJECT_NAME, color::FALLBACK_COLOR))
}

/// 時刻をLocalタイムゾーンの`HH:MM`形式に変換する。
pub fn format_clock(instant: &DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format(CLOCK_FORMAT)
        .to_string()
}

/// ミリ秒の経過時間を`Nm`または`Nh Mm`形式に変換する。
///
/// 分未満は切り捨てる。負値や端数も同じ整数演算をそのまま通す。
pub fn format_duration(duration_ms: i64) -> String {
    let minutes = duration_ms / 60_000;
    let hours = minutes / 60;
    let remaining_minutes = minutes % 60;

    if hours == 0 {
        return format!("{}m", remaining_minutes);
    }
    format!("{}h {}m", hours, remaining_minutes)
}
