//! Local secret rotation for the development environment.
//!
//! `.env` and `.keycloak.json` are git-ignored copies of the committed
//! `*.example` templates and start out holding a placeholder secret. This
//! tool generates one random alphanumeric secret and replaces every
//! occurrence of the placeholder in both files, so the application and the
//! local identity provider agree on the credential. The `*.example`
//! templates are never touched.
//!
//! A file that is missing, or whose placeholder is already gone, is left
//! exactly as it is; running the tool twice is a no-op the second time.

use anyhow::{Context, Result};
use clap::Parser;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::path::Path;

/// Placeholder the `*.example` templates ship with.
const PLACEHOLDER: &str = "CHANGE_ME_LOCAL_SECRET";

/// Local files to rotate, relative to the project root.
const TARGET_FILES: &[&str] = &[".env", ".keycloak.json"];

#[derive(Parser)]
#[command(name = "rotate-secret", about = "Rotate the local OIDC client secret")]
struct Args {
    /// Length of the generated secret
    #[arg(long, default_value_t = 32)]
    length: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let secret = generate_secret(args.length);
    for file in TARGET_FILES {
        if replace_placeholder(Path::new(file), &secret)? {
            println!("updated secret in {file}");
        }
    }

    Ok(())
}

/// Random alphanumeric secret. `thread_rng` is a CSPRNG, and the
/// alphanumeric-only alphabet avoids quoting issues in env files and JSON.
fn generate_secret(length: usize) -> String {
    rand::thread_rng().sample_iter(&Alphanumeric).take(length).map(char::from).collect()
}

/// Replace every occurrence of the placeholder in `path` with `secret`.
///
/// Returns whether a replacement happened. Missing files and files without
/// the placeholder are left byte-identical; the file is only rewritten
/// when something actually changed.
fn replace_placeholder(path: &Path, secret: &str) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if !text.contains(PLACEHOLDER) {
        return Ok(false);
    }

    std::fs::write(path, text.replace(PLACEHOLDER, secret))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}
