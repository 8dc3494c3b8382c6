use crate::cli::context::Context;
use crate::cli::output::{self, OperationOutput};
use crate::core::errors::Result;
use crate::core::traits::provider::CertificateProvider;

/// Execute the `certcrypt sign` command.
///
/// Prints the base64 signature on stdout.
pub fn execute(ctx: &Context, subject: &str, content: &str) -> Result<()> {
    let service = ctx.service();

    if ctx.verbose {
        output::detail(&format!("Store: {}", service.provider.describe()));
        output::detail(&format!("Digest: {}", ctx.options.digest));
        output::detail(&format!("Encoding: {}", ctx.options.encoding));
    }

    let signature = service.sign(subject, content)?;

    if ctx.json {
        return output::json(&OperationOutput {
            operation: "sign",
            subject,
            store: service.provider.describe(),
            result: signature.into(),
        });
    }

    println!("{signature}");
    if !ctx.quiet {
        output::success(&format!("Signed with '{subject}' ({})", ctx.options.digest));
    }
    Ok(())
}
