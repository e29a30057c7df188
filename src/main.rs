use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

use projpick::cli::{write_result, Cli};
use projpick::logging::init_tracing;
use projpick::ui::TerminalView;
use projpick::SelectionDialog;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("projpick: {:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the user confirmed a selection.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = cli.resolve_config().context("loading configuration")?;
    let candidates = cli.candidates().context("reading projects")?;
    tracing::info!(candidates = candidates.len(), "opening project picker");

    let mut dialog = SelectionDialog::with_visible_rows(
        candidates,
        cli.default.clone(),
        config.dialog.visible_rows,
    );
    let mut view = TerminalView::new(config.dialog.clone());
    dialog.run(&mut view).context("running picker")?;

    let result = dialog.result();
    let stdout = std::io::stdout();
    write_result(&mut stdout.lock(), &result, config.output.format)
        .context("writing selection")?;
    Ok(result.confirmed)
}
