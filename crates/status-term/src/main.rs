#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

use std::io;
use std::io::Write;

use anyhow::Result;
use status_term::application::cli;
use status_term::destruct_terminal_for_panic;
use status_term::CheckerManager;
use status_term::Config;

#[cfg(feature = "dev")]
fn setup_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "debug.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(writer)
        .init();

    return guard;
}

async fn run() -> Result<()> {
    cli::parse()?;
    Config::load();

    let checker = CheckerManager::get()?;
    status_term::start(checker).await?;

    return Ok(());
}

/// Prints a failed run and maps the outcome to the process exit code.
fn report<W: Write>(out: &mut W, result: Result<()>) -> i32 {
    if let Err(err) = result {
        let _ = writeln!(out, "Uh oh, there was an error: {err:#}");
        return 1;
    }

    return 0;
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "dev")]
    let _guard = setup_tracing();

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let code = report(&mut io::stdout(), run().await);
    if code != 0 {
        std::process::exit(code);
    }
}
