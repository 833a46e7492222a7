//! dramaloc 指令桥接程序
//!
//! 每行读取一个 JSON 请求，回写一行 JSON 回应，供后台前端调用。

mod commands;
mod state;

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use dramaloc_core::DashboardConfig;
use tracing::info;

use state::AppState;

/// Environment variable pointing at the JSON config file
const CONFIG_ENV: &str = "DRAMALOC_CONFIG";

fn load_config() -> Result<DashboardConfig> {
    match env::var(CONFIG_ENV) {
        Ok(path) => {
            info!("Loading config from {}", path);
            DashboardConfig::from_json_file(&path)
                .with_context(|| format!("failed to load config from {}", path))
        }
        Err(_) => Ok(DashboardConfig::default()),
    }
}

fn main() -> Result<()> {
    // 日志写到 stderr，stdout 只留给回应
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let state = AppState::new(load_config()?);
    info!("dramaloc bridge ready (reference day {})", state.dates.today());

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = stdin
            .read_until(b'\n', &mut line)
            .context("failed to read request")?;
        if read == 0 {
            break;
        }

        let Some(response) = commands::handle_line(&state, &line) else {
            continue;
        };

        serde_json::to_writer(&mut stdout, &response).context("failed to encode response")?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    info!("stdin closed, exiting");
    Ok(())
}
