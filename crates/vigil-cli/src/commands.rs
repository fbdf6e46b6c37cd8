use anyhow::Context;
use colored::Colorize;
use tokio::io::BufReader;
use tokio::sync::watch;

use vigil_diff::View;
use vigil_render::render_outcome;
use vigil_watch::{JsonLinesSource, Outcome, OutcomeSink, Session, Target};

use crate::cli::{Cli, Command, ResourceArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Changes(args) => watch_resource(args, View::Full).await,
        Command::Status(args) => watch_resource(args, View::Status).await,
    }
}

/// Renders each outcome and writes the lines to stdout.
#[derive(Default)]
struct StdoutSink;

impl OutcomeSink for StdoutSink {
    fn emit(&mut self, outcome: &Outcome) -> std::io::Result<()> {
        let lines = render_outcome(outcome)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        for line in lines {
            println!("{}", line);
        }
        Ok(())
    }
}

async fn watch_resource(args: ResourceArgs, view: View) -> anyhow::Result<()> {
    let target = Target::parse(&args.api_version, &args.kind, &args.name)
        .context("resolving watch target")?;
    tracing::info!(%target, %view, "watch target resolved");

    match view {
        View::Full => println!("{}", format!("Watching for changes on {}", target).green()),
        View::Status => println!("{}", format!("Watching status of {}", target).green()),
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut source = JsonLinesSource::new(stdin).with_target(target.clone());
    let mut sink = StdoutSink;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    let mut session = Session::new(view);
    session
        .run(&mut source, &mut sink, shutdown_rx)
        .await
        .with_context(|| format!("watching {} view of {}", view, target))
}
