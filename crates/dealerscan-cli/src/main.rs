use dealerscan_core::{logging, InventoryError};

mod cli;

use crate::cli::CliCommand;

/// Exit status: 2 when the user must re-provision the cookie file, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<InventoryError>() {
        Some(e) if e.is_credential_problem() => 2,
        _ => 1,
    }
}

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("dealerscan error: {:#}", err);
        if let Some(hint) = err
            .downcast_ref::<InventoryError>()
            .and_then(InventoryError::hint)
        {
            eprintln!("hint: {hint}");
        }
        std::process::exit(exit_code(&err));
    }
}
