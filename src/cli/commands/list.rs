use serde::Serialize;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::traits::provider::CertificateProvider;

#[derive(Debug, Serialize)]
struct ListedCertificate<'a> {
    subject: &'a str,
    has_private_key: bool,
}

/// Execute the `certcrypt list` command.
///
/// Prints one subject per line in store order; `*` marks certificates
/// with an accessible private key.
pub fn execute(ctx: &Context) -> Result<()> {
    let service = ctx.service();
    let records = service.list()?;

    if ctx.json {
        let listed: Vec<_> = records
            .iter()
            .map(|r| ListedCertificate {
                subject: r.subject(),
                has_private_key: r.has_private_key(),
            })
            .collect();
        return output::json(&listed);
    }

    if !ctx.quiet {
        output::header(&format!("Certificates in {}", service.provider.describe()));
    }

    for record in &records {
        let marker = if record.has_private_key() { "*" } else { " " };
        println!("{marker} {}", record.subject());
    }

    if !ctx.quiet {
        if records.is_empty() {
            output::warning("Store is empty");
        } else {
            output::success(&format!(
                "{} certificate(s), * = private key available",
                records.len()
            ));
        }
    }
    Ok(())
}
