use crate::cli::context::Context;
use crate::cli::output::{self, OperationOutput};
use crate::core::errors::Result;
use crate::core::models::crypto_options::EncryptionMode;
use crate::core::traits::provider::CertificateProvider;

/// Execute the `certcrypt encrypt` command.
///
/// Prints the base64 ciphertext on stdout.
pub fn execute(ctx: &Context, subject: &str, content: &str) -> Result<()> {
    let service = ctx.service();

    if ctx.verbose {
        output::detail(&format!("Store: {}", service.provider.describe()));
        output::detail(&format!("Mode: {}", ctx.options.mode));
        output::detail(&format!("Encoding: {}", ctx.options.encoding));
    }

    let ciphertext = service.encrypt(subject, content)?;

    if ctx.json {
        return output::json(&OperationOutput {
            operation: "encrypt",
            subject,
            store: service.provider.describe(),
            result: ciphertext.into(),
        });
    }

    println!("{ciphertext}");
    if !ctx.quiet {
        output::success(&format!("Encrypted for '{subject}' ({})", ctx.options.mode));
        if ctx.options.mode == EncryptionMode::Legacy {
            output::warning("Legacy mode output cannot be decrypted by 'certcrypt decrypt'");
        }
    }
    Ok(())
}
