use std::path::Path;
use std::process::{ExitCode, Termination};

use clap::Parser;
use error_stack::ResultExt;
use kernel::KernelError;
use tokio::io::BufReader;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::command::Command;
use crate::config::Args;
use crate::error::StackTrace;
use crate::handler::Handler;
use crate::shell::Shell;

mod command;
mod config;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;
mod shell;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let _guard = init_tracing(args.log_dir.as_deref());

    match run(args).await {
        Ok(code) => code,
        Err(trace) => trace.report(),
    }
}

fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let (file, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "library.log");
            let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
                )),
        )
        .with(file)
        .init();
    guard
}

async fn run(args: Args) -> Result<ExitCode, StackTrace> {
    let store = args.store()?;
    let mut handler = Handler::init(store).await;

    match args.command {
        None | Some(Command::Shell) => {
            let input = BufReader::new(tokio::io::stdin());
            Shell::new(input, tokio::io::stdout())
                .run(&mut handler)
                .await
                .change_context_lazy(|| KernelError::Io)
                .attach_printable_lazy(|| "Interactive shell lost its terminal")?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Once(operation)) => match operation.execute(&mut handler).await {
            Ok(reply) => {
                println!("{reply}");
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                eprintln!("Error: {error}");
                Ok(ExitCode::from(2))
            }
        },
    }
}
