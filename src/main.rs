use std::io;

use corvid_cli::Repl;

/// Search budget, in milliseconds, for the `think` command.
const THINK_BUDGET_MS: u64 = 2_000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(THINK_BUDGET_MS).run(stdin.lock(), stdout.lock())?;
    Ok(())
}
