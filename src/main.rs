use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod color;
mod console;
mod remove_command;
mod show_command;
mod store;
mod time_entry;

use remove_command::{RemoveArgs, RemoveCommand};
use show_command::{ShowArgs, ShowCommand};
use store::JsonFileStore;

/// time entryの一覧表示と削除操作のためのCLIアプリケーション。
///
/// # Examples
/// ```
/// $ cargo run -- show -i snapshot.json
/// $ cargo run -- remove -i snapshot.json abc
/// ```
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    #[clap(subcommand)]
    subcommand: SubCommands,
}

/// サブコマンドを表す列挙型。
#[derive(Debug, Subcommand)]
enum SubCommands {
    Show(ShowArgs),
    Remove(RemoveArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logger()?;

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    match args.subcommand {
        SubCommands::Show(show) => {
            let store = JsonFileStore::new(show.input);
            ShowCommand::new(&store).run(&mut writer)?;
        }
        SubCommands::Remove(remove) => {
            let store = JsonFileStore::new(remove.input);
            RemoveCommand::new(&store).run(&remove.id, &mut writer)?;
        }
    }
    writer.flush()?;

    Ok(())
}

/// ロガーを初期化する。
///
/// 一覧の出力と混ざらないようにログはstderrへ出す。
fn setup_logger() -> Result<()> {
    let colors = fern::colors::ColoredLevelConfig::new();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
