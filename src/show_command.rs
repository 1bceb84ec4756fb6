use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::console::{EntryListPresenter, EntryListView};
use crate::store::EntryStore;

/// `show`サブコマンドの引数を表す構造体。
#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    #[clap(
        short = 'i',
        long = "input",
        help = "Path to the JSON snapshot of entries and projects",
        parse(from_os_str)
    )]
    pub input: PathBuf,
}

pub struct ShowCommand<'a, S: EntryStore> {
    store: &'a S,
}

impl<'a, S: EntryStore> ShowCommand<'a, S> {
    /// 新しい`ShowCommand`を返す。
    ///
    /// # Arguments
    /// * `store` - スナップショットを読み込むためのstore
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// `show`サブコマンドの処理を行う。
    ///
    /// スナップショットのentryを渡された順序のまま一覧表示する。
    /// 削除callbackはidのログ出力のみ行う。
    ///
    /// # Arguments
    ///
    /// * `writer` - 一覧の描画先
    pub fn run<W: Write>(&self, writer: &mut W) -> Result<()> {
        let snapshot = self
            .store
            .read_snapshot()
            .context("Failed to read snapshot")?;
        info!(
            "Loaded {} entries and {} projects",
            snapshot.entries.len(),
            snapshot.projects.len()
        );

        let mut view =
            EntryListView::new(writer, |id: &str| info!("Delete requested for entry: {}", id));
        view.show_entries(&snapshot.entries, &snapshot.projects)
            .context("Failed to render time entries")?;

        Ok(())
    }
}
