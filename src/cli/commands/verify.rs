use crate::cli::context::Context;
use crate::cli::output::{self, OperationOutput};
use crate::core::errors::Result;
use crate::core::traits::provider::CertificateProvider;

/// Execute the `certcrypt verify` command.
///
/// Prints `valid` or `invalid` and returns the verification outcome so
/// the caller can pick the exit code.
pub fn execute(ctx: &Context, subject: &str, content: &str, signature: &str) -> Result<bool> {
    let service = ctx.service();

    if ctx.verbose {
        output::detail(&format!("Store: {}", service.provider.describe()));
        output::detail(&format!("Digest: {}", ctx.options.digest));
    }

    let valid = service.verify(subject, content, signature)?;

    if ctx.json {
        output::json(&OperationOutput {
            operation: "verify",
            subject,
            store: service.provider.describe(),
            result: valid.into(),
        })?;
        return Ok(valid);
    }

    println!("{}", if valid { "valid" } else { "invalid" });
    if !ctx.quiet {
        if valid {
            output::success(&format!("Signature matches '{subject}'"));
        } else {
            output::warning(&format!(
                "Signature does not match '{subject}' (digest {})",
                ctx.options.digest
            ));
        }
    }
    Ok(valid)
}
