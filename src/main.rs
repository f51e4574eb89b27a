// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pesowise::{api, cli, commands, config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // config/doctor must work before the store is configured
    match matches.subcommand() {
        Some(("config", sub)) => return commands::config::handle(sub),
        Some(("doctor", _)) => return commands::doctor::handle(),
        _ => {}
    }

    let cfg = config::load()?;
    let store = api::Store::from_config(&cfg)?;

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("income", sub)) => commands::income::handle(&store, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&store, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&store, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
