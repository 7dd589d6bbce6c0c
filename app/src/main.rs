//! Terminal front end for the to-do list.
//!
//! Reads one command per line from stdin and prints the list after each one.
//! Type `help` for the list of commands.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use todolist::{AppConfig, Input, TodoAppState, TodoReducer, TodoView, command, parse_line};
use todolist_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for the rendered list
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolist=info,todolist_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
    todolist_runtime::metrics::describe_metrics();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(title = %config.title, render = %config.render, "Starting todolist");

    let mut store = Store::new(TodoAppState::default(), TodoReducer::new(), ());
    store.subscribe(|state: &TodoAppState| {
        tracing::debug!(
            count = state.list.count(),
            has_completed = state.list.has_completed(),
            "State updated"
        );
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    render(&mut stdout, &store, &config)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match parse_line(&line) {
            Ok(Input::Actions(actions)) => {
                for action in actions {
                    store.send(action)?;
                }
                render(&mut stdout, &store, &config)?;
            },
            Ok(Input::List) => render(&mut stdout, &store, &config)?,
            Ok(Input::Help) => writeln!(stdout, "{}", command::HELP)?,
            Ok(Input::Quit) => break,
            Err(err) => {
                tracing::debug!(error = %err, "Rejected input");
                writeln!(stdout, "error: {err}")?;
            },
        }
    }

    tracing::info!("Exiting");
    Ok(())
}

fn render<W: Write>(
    out: &mut W,
    store: &Store<TodoAppState, todolist::TodoAction, (), TodoReducer>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let view = store.state(|state| TodoView::new(&config.title, state));
    writeln!(out, "{}", view.render(config.render)?)?;
    out.flush()?;
    Ok(())
}
