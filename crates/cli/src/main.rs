// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod command;
mod render;

#[cfg(test)]
mod tests;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::eyre::{Context, Result};
use command::{Command, USAGE, parse_line};
use flight_sched::{Board, PageBootstrap, Selection};
use flight_sched_api::{
    ClientConfig, HttpTimeslotApi, Notice, Notifier, Placement, Scheduler, SharedBoard,
    SyncConfig, SyncError, SyncTask, Synchronizer,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use time::UtcOffset;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Flight Scheduler - drives the court scheduling page from line commands
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the booking site, e.g. `https://club.example`
    #[arg(short, long)]
    base_url: String,

    /// Path to the page bootstrap JSON document
    #[arg(short, long)]
    page: PathBuf,

    /// Offset of calendar times from UTC in minutes, positive east of UTC.
    /// Defaults to the local offset, then UTC.
    #[arg(long, allow_negative_numbers = true)]
    utc_offset_minutes: Option<i16>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn utc_offset(&self) -> Result<UtcOffset> {
        match self.utc_offset_minutes {
            Some(minutes) => UtcOffset::from_whole_seconds(i32::from(minutes) * 60)
                .wrap_err_with(|| format!("Invalid UTC offset of {minutes} minutes")),
            None => Ok(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)),
        }
    }
}

/// Prints notices where a page would show a toast.
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn show(&self, notice: Notice) {
        println!("! {notice}");
    }
}

async fn load_page(path: &Path) -> Result<PageBootstrap> {
    let text: String = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read page document {}", path.display()))?;
    serde_json::from_str(&text)
        .wrap_err_with(|| format!("Invalid page document {}", path.display()))
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

/// Waits for every spawned request.
async fn settle(tasks: &mut Vec<SyncTask>) {
    for result in futures::future::join_all(tasks.drain(..)).await {
        match result {
            Ok(Ok(_)) => {}
            Ok(Err(err)) => warn!(error = %err, "Request did not complete"),
            Err(err) => error!(error = %err, "Request task failed"),
        }
    }
}

async fn execute<N: Notifier>(
    scheduler: &Scheduler<N>,
    command: Command,
    tasks: &mut Vec<SyncTask>,
) -> Result<(), SyncError> {
    match command {
        Command::Drop {
            template,
            date,
            start,
            duration_hours,
            duration_minutes,
        } => {
            let placement: Placement = scheduler
                .drop_flight(&template, date, start, duration_hours, duration_minutes)
                .await?;
            if let Placement::Scheduled { key, task } = placement {
                println!("placed {key}");
                tasks.push(task);
            }
        }
        Command::Move { key, span } => tasks.push(scheduler.move_entry(key, span).await?),
        Command::Resize { key, end } => tasks.push(scheduler.resize_entry(key, end).await?),
        Command::Select(key) => {
            let selection: Selection = scheduler.select_entry(key).await?;
            let id: String = selection
                .id
                .map_or_else(|| String::from("unsaved"), |id| id.to_string());
            println!("selected {} ({id})", selection.key);
        }
        Command::Delete(key) => tasks.push(scheduler.delete_entry(key).await?),
        Command::DeleteRow(id) => tasks.push(scheduler.delete_row(&id).await?),
        Command::Court { id, enabled } => scheduler.toggle_court(id, enabled).await?,
        Command::Entries => print_lines(render::entries(&*scheduler.board().lock().await)),
        Command::Rows => print_lines(render::rows(&*scheduler.board().lock().await)),
        Command::Palette => print_lines(render::palette(&*scheduler.board().lock().await)),
        Command::Courts => print_lines(render::courts_list(&*scheduler.board().lock().await)),
        Command::Wait => settle(tasks).await,
        Command::Help => println!("{USAGE}"),
        Command::Quit => {}
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    let utc_offset: UtcOffset = args.utc_offset()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .init();

    let page: PageBootstrap = load_page(&args.page).await?;
    let config: ClientConfig = ClientConfig {
        base_url: args.base_url.clone(),
        flight_id: page.flight_id.clone(),
        timeout: args.timeout_secs.map(Duration::from_secs),
    };
    let api: HttpTimeslotApi = HttpTimeslotApi::new(&config)?;
    let board: SharedBoard = Arc::new(tokio::sync::Mutex::new(
        Board::from_bootstrap(page).wrap_err("Page document is not a valid board")?,
    ));
    info!(
        flight_id = %config.flight_id,
        base_url = %api.base_url(),
        utc_offset = %utc_offset,
        "Scheduler ready"
    );

    let scheduler: Scheduler<StdoutNotifier> = Scheduler::new(
        Synchronizer::new(board, Arc::new(api), SyncConfig { utc_offset }),
        StdoutNotifier,
    );

    let mut tasks: Vec<SyncTask> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command: Command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if let Err(err) = execute(&scheduler, command, &mut tasks).await {
            println!("error: {err}");
        }
    }

    settle(&mut tasks).await;
    info!("Exiting");
    Ok(())
}
