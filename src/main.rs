// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pocketbook::api::HttpApi;
use pocketbook::bridge::ConsoleBridge;
use pocketbook::config::{self, Settings};
use pocketbook::session::FinanceSession;
use pocketbook::{cli, commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli::build_cli().get_matches();
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);

    if let Some(("init", _)) = matches.subcommand() {
        let path = match config_path {
            Some(p) => p,
            None => config::config_path()?,
        };
        if path.exists() {
            println!("Config already present at {}", path.display());
        } else {
            Settings::default().save(&path)?;
            println!("Config written to {}", path.display());
        }
        return Ok(());
    }

    let settings =
        config::load_settings(config_path.as_deref()).context("Failed to load settings")?;
    let user = matches.get_one::<i64>("user").copied().or(settings.user_id);
    let api = HttpApi::new(&settings.api_url, settings.timeout())?;
    let mut session = FinanceSession::new(api, ConsoleBridge::new(user))
        .with_notice_ttl(settings.notice_ttl());

    match matches.subcommand() {
        Some(("overview", sub)) => commands::overview::handle(&mut session, sub)?,
        Some(("account", sub)) => commands::accounts::handle(&mut session, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut session, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut session, sub)?,
        Some(("chart", sub)) => commands::chart::handle(&mut session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&mut session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&session)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    session.close();
    Ok(())
}
