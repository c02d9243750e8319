//! OpenAPI Document Generation Tool
//!
//! Prints the OpenAPI document of the donate action service as pretty JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example generate_openapi > openapi.json
//! ```
use eyre::{eyre, Result};
use solana_donate_action::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<()> {
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| eyre!("Failed to render OpenAPI document: {}", e))?;
    println!("{}", document);
    Ok(())
}
