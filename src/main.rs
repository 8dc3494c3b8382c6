use clap::Parser;
use tracing_subscriber::EnvFilter;

use certcrypt::cli::context::Context;
use certcrypt::cli::{self, Cli, Commands, output};

/// Exit code for a signature that decoded fine but did not match.
const EXIT_INVALID_SIGNATURE: i32 = 2;

fn main() {
    let args = Cli::parse();

    // RUST_LOG=certcrypt=debug for diagnostics; --verbose forces debug.
    let filter = if args.verbose {
        EnvFilter::new("certcrypt=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("certcrypt=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = Context::from_cli(&args).and_then(|ctx| match &args.command {
        Commands::Sign { subject, content } => {
            cli::commands::sign::execute(&ctx, subject, content).map(|()| 0)
        }
        Commands::Verify {
            subject,
            content,
            signature,
        } => cli::commands::verify::execute(&ctx, subject, content, signature)
            .map(|valid| if valid { 0 } else { EXIT_INVALID_SIGNATURE }),
        Commands::Encrypt { subject, content } => {
            cli::commands::encrypt::execute(&ctx, subject, content).map(|()| 0)
        }
        Commands::Decrypt {
            subject,
            ciphertext,
            text,
        } => cli::commands::decrypt::execute(&ctx, subject, ciphertext, *text).map(|()| 0),
        Commands::List => cli::commands::list::execute(&ctx).map(|()| 0),
    });

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}
