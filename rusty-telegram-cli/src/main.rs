use anyhow::Result;
use clap::Parser;
use rusty_telegram::webhook;
use serde_json::Value;

use crate::opts::{Command, Opts};

mod commands;
mod listen;
mod middleware;
mod opts;

#[async_std::main]
async fn main() -> Result<()> {
    let opts: Opts = Opts::parse();
    let _guard =
        rusty_telegram_tracing::init_sentry(opts.sentry.dsn.clone(), opts.sentry.traces_sample_rate);
    rusty_telegram_tracing::init(opts.tracing.enable_journald)?;

    match opts.command {
        Command::ReadUpdate => print(&webhook::get_webhook_updates()?),
        Command::Listen { bind_endpoint } => listen::run(bind_endpoint).await?,
        command => {
            let api = opts.bot.connect()?;
            print(&commands::run(&api, command).await?);
        }
    }
    Ok(())
}

fn print(value: &Value) {
    println!("{:#}", value);
}
