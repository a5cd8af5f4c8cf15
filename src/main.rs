mod config;
mod data;
mod error;
mod logging;
mod models;
mod storage;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::config::{Config, config_file_path};
use crate::ui::{App, render};

#[derive(Debug, Parser)]
#[command(name = "dinelist", version, about = "Browse and add restaurants")]
struct Cli {
    /// 初始餐厅数据（TOML，`[[restaurants]]` 表）
    #[arg(long)]
    seed: Option<PathBuf>,

    /// 配置文件（默认 ~/.config/dinelist/config.toml）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 日志文件（默认 ~/.local/share/dinelist/dinelist.log）
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// 日志级别，例如 `info` 或 `dinelist=debug`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config_file_path);
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?
        .merge(cli.seed, cli.log_file, cli.log_level);

    logging::init(&config.log_file, &config.log_level)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;
    tracing::info!("starting dinelist");

    let seed = storage::initial_records(config.seed_path.as_deref())
        .context("failed to load seed restaurants")?;
    let mut app = App::new(&seed);

    // try_init 会安装 panic hook，panic 时同样恢复终端
    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(e) => {
            // 初始化到一半失败（例如已开启 raw mode），先恢复再报错
            ratatui::restore();
            return Err(e).context("failed to initialise terminal");
        }
    };

    let result = run_app(&mut terminal, &mut app);

    // 先恢复终端，再输出错误
    ratatui::restore();

    tracing::info!("exiting with {} restaurants", app.restaurants.len());
    result.context("terminal I/O failed")
}

fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key)? {
                break;
            }
        }
    }
    Ok(())
}
