use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::DateTime;
use log::info;
use serde::Deserialize;

use crate::time_entry::{Project, TimeEntry};

/// JSONスナップショットのtime entryをデシリアライズするための構造体。
///
/// `start_time`と`end_time`はepochミリ秒。
#[derive(Debug, Deserialize)]
struct RawTimeEntry {
    id: String,
    project_id: String,
    description: String,
    start_time: i64,
    end_time: i64,
    duration: i64,
}

/// JSONスナップショットのプロジェクト情報をデシリアライズするための構造体。
#[derive(Debug, Deserialize)]
struct RawProject {
    id: String,
    name: String,
    color: String,
}

/// JSONスナップショット全体をデシリアライズするための構造体。
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    entries: Vec<RawTimeEntry>,
    projects: Vec<RawProject>,
}

/// 呼び出し側が用意したentryとprojectの読み取り専用スナップショット。
#[derive(Debug)]
pub struct Snapshot {
    pub entries: Vec<TimeEntry>,
    pub projects: Vec<Project>,
}

/// スナップショットを読み込むためのtrait。
#[cfg_attr(test, mockall::automock)]
pub trait EntryStore {
    /// entryとprojectのスナップショットを読み込む。
    fn read_snapshot(&self) -> Result<Snapshot>;
}

/// JSONファイルからスナップショットを読み込むstore。
///
/// # Examples
///
/// ```
/// let store = JsonFileStore::new(PathBuf::from("snapshot.json"));
/// let snapshot = store.read_snapshot().unwrap();
/// ```
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// 新しい`JsonFileStore`を返す。
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl EntryStore for JsonFileStore {
    fn read_snapshot(&self) -> Result<Snapshot> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open snapshot file: {}", self.path.display()))?;
        let raw: RawSnapshot = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to deserialize snapshot: {}", self.path.display()))?;
        info!(
            "length of time entries: {}, projects: {}",
            raw.entries.len(),
            raw.projects.len()
        );

        let entries = raw
            .entries
            .into_iter()
            .map(|entry| {
                let start = DateTime::from_timestamp_millis(entry.start_time)
                    .with_context(|| format!("Invalid start_time for entry: {}", entry.id))?;
                let stop = DateTime::from_timestamp_millis(entry.end_time)
                    .with_context(|| format!("Invalid end_time for entry: {}", entry.id))?;

                Ok(TimeEntry {
                    id: entry.id,
                    project_id: entry.project_id,
                    description: entry.description,
                    start,
                    stop,
                    duration_ms: entry.duration,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let projects = raw
            .projects
            .into_iter()
            .map(|project| Project {
                id: project.id,
                name: project.name,
                color: project.color,
            })
            .collect();

        Ok(Snapshot { entries, projects })
    }
}
