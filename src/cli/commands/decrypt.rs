use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::cli::context::Context;
use crate::cli::output::{self, OperationOutput};
use crate::core::errors::{CertCryptError, Result};
use crate::core::traits::provider::CertificateProvider;

/// Execute the `certcrypt decrypt` command.
///
/// Prints the plaintext bytes as base64, or as text when `text` is set.
pub fn execute(ctx: &Context, subject: &str, ciphertext: &str, text: bool) -> Result<()> {
    let service = ctx.service();

    if ctx.verbose {
        output::detail(&format!("Store: {}", service.provider.describe()));
        output::detail(&format!("Mode: {}", ctx.options.mode));
    }

    let plaintext = service.decrypt(subject, ciphertext)?;
    let plaintext = if text {
        let bytes = STANDARD
            .decode(&plaintext)
            .map_err(|e| CertCryptError::MalformedInput {
                name: "plaintext",
                detail: e.to_string(),
            })?;
        ctx.options.encoding.decode(&bytes)?
    } else {
        plaintext
    };

    if ctx.json {
        return output::json(&OperationOutput {
            operation: "decrypt",
            subject,
            store: service.provider.describe(),
            result: plaintext.into(),
        });
    }

    println!("{plaintext}");
    if !ctx.quiet {
        output::success(&format!("Decrypted with '{subject}'"));
    }
    Ok(())
}
