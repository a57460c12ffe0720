mod commands;
mod config;
mod errors;
mod handlers;
mod reply;
mod schema;
mod utils;
mod video;
mod work_dir;

use std::{process::ExitCode, sync::Arc, time::Duration};

use teloxide::{prelude::*, utils::command::BotCommands};

use crate::{
    config::Config,
    errors::{BotError, BotResult},
    handlers::VideoPipeline,
    schema::{Command, schema},
    video::{Ffmpeg, YtDlp},
    work_dir::clear_work_dirs,
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Used when `RUST_LOG` is unset; other crates stay silent.
const DEFAULT_LOG_FILTER: &str = "tg_video_bot=info";

fn log_filters(rust_log: Option<String>) -> String {
    rust_log
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned())
}

fn init_logger() {
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&log_filters(std::env::var("RUST_LOG").ok()))
        .init();
}

fn build_bot(token: &str) -> BotResult<Bot> {
    let client = reqwest::Client::builder()
        .connect_timeout(HTTP_TIMEOUT)
        .read_timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| BotError::config_error(format!("failed to build HTTP client: {e}")))?;

    Ok(Bot::with_client(token, client))
}

async fn run(config: Config) -> BotResult<()> {
    log::info!("Starting video bot...");

    let removed = clear_work_dirs(&config.work_root).await?;
    log::info!(
        "Work dir ready: {} ({} leftovers removed)",
        config.work_root.display(),
        removed
    );

    let bot = build_bot(&config.token)?;
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let pipeline = Arc::new(VideoPipeline::new(
        Arc::new(YtDlp::new(&config.ytdlp_bin, &config.work_root)),
        Arc::new(Ffmpeg::new(&config.ffmpeg_bin)),
    ));

    log::info!("Bot started...");
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![pipeline])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    clear_work_dirs(&config.work_root).await?;
    log::info!("Bot stopped");
    Ok(())
}
