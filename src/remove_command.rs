use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::console::{EntryListPresenter, EntryListView};
use crate::store::EntryStore;

/// `remove`サブコマンドの引数を表す構造体。
#[derive(Debug, clap::Args)]
pub struct RemoveArgs {
    #[clap(
        short = 'i',
        long = "input",
        help = "Path to the JSON snapshot of entries and projects",
        parse(from_os_str)
    )]
    pub input: PathBuf,

    #[clap(help = "Id of the entry to delete")]
    pub id: String,
}

pub struct RemoveCommand<'a, S: EntryStore> {
    store: &'a S,
}

impl<'a, S: EntryStore> RemoveCommand<'a, S> {
    /// 新しい`RemoveCommand`を返す。
    ///
    /// # Arguments
    /// * `store` - スナップショットを読み込むためのstore
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// `remove`サブコマンドの処理を行う。
    ///
    /// viewの削除操作を発火してcallback経由でidを受け取り、呼び出し側として
    /// 自前のentry一覧を更新してから再描画する。viewは一覧を変更しない。
    ///
    /// # Arguments
    ///
    /// * `entry_id` - 削除するentryのid
    /// * `writer` - 更新後の一覧の描画先
    pub fn run<W: Write>(&self, entry_id: &str, writer: &mut W) -> Result<()> {
        let snapshot = self
            .store
            .read_snapshot()
            .context("Failed to read snapshot")?;
        if !snapshot.entries.iter().any(|entry| entry.id == entry_id) {
            warn!("No entry with id: {}", entry_id);
        }

        let mut deleted: Vec<String> = Vec::new();
        {
            let mut view =
                EntryListView::new(writer, |id: &str| deleted.push(id.to_string()));
            view.activate_delete(entry_id);
        }

        let mut entries = snapshot.entries;
        entries.retain(|entry| !deleted.iter().any(|id| id == &entry.id));
        info!("{} entries remain after deletion", entries.len());

        let mut view = EntryListView::new(writer, |_: &str| {});
        view.show_entries(&entries, &snapshot.projects)
            .context("Failed to render time entries")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::RemoveCommand;
    use crate::console::EMPTY_STATE_MESSAGE;
    use crate::store::{MockEntryStore, Snapshot};
    use crate::time_entry::{Project, TimeEntry};

    /// 指定idのentryだけが一覧から消えることを確認する。
    #[test]
    fn test_remove_command() {
        let mut store = MockEntryStore::new();
        store
            .expect_read_snapshot()
            .times(1)
            .returning(|| Ok(dummy_snapshot()));
        let mut writer = Vec::new();

        let command = RemoveCommand::new(&store);
        command.run("abc", &mut writer).unwrap();

        let output = String::from_utf8(writer).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(!output.contains("[abc]"));
        assert!(output.contains("[def]"));
    }

    /// 存在しないidを指定しても一覧が変化しないことを確認する。
    #[test]
    fn test_remove_command_unknown_id() {
        let mut store = MockEntryStore::new();
        store
            .expect_read_snapshot()
            .times(1)
            .returning(|| Ok(dummy_snapshot()));
        let mut writer = Vec::new();

        let command = RemoveCommand::new(&store);
        command.run("no-such-id", &mut writer).unwrap();

        let output = String::from_utf8(writer).unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("[abc]"));
        assert!(output.contains("[def]"));
    }

    /// 最後のentryを削除すると空状態のメッセージが表示されることを確認する。
    #[test]
    fn test_remove_command_last_entry() {
        let mut store = MockEntryStore::new();
        store.expect_read_snapshot().times(1).returning(|| {
            let mut snapshot = dummy_snapshot();
            snapshot.entries.truncate(1);
            Ok(snapshot)
        });
        let mut writer = Vec::new();

        let command = RemoveCommand::new(&store);
        command.run("abc", &mut writer).unwrap();

        assert_eq!(
            String::from_utf8(writer).unwrap(),
            format!("{}\n", EMPTY_STATE_MESSAGE)
        );
    }

    /// テスト用に2件のentryを持つスナップショットを作成する。
    fn dummy_snapshot() -> Snapshot {
        Snapshot {
            entries: vec![
                TimeEntry {
                    id: "abc".to_string(),
                    project_id: "p1".to_string(),
                    description: "Fix login".to_string(),
                    start: Local.with_ymd_and_hms(2024, 1, 15, 9, 5, 0).unwrap().to_utc(),
                    stop: Local
                        .with_ymd_and_hms(2024, 1, 15, 10, 35, 0)
                        .unwrap()
                        .to_utc(),
                    duration_ms: 5_400_000,
                },
                TimeEntry {
                    id: "def".to_string(),
                    project_id: "p1".to_string(),
                    description: "Write report".to_string(),
                    start: Local
                        .with_ymd_and_hms(2024, 1, 15, 11, 0, 0)
                        .unwrap()
                        .to_utc(),
                    stop: Local
                        .with_ymd_and_hms(2024, 1, 15, 11, 45, 0)
                        .unwrap()
                        .to_utc(),
                    duration_ms: 2_700_000,
                },
            ],
            projects: vec![Project {
                id: "p1".to_string(),
                name: "Acme".to_string(),
                color: "#FF0000".to_string(),
            }],
        }
    }
}
