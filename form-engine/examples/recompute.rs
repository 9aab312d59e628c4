//! Recompute a form record from a JSON file (or stdin) and print the result.
//!
//! ```text
//! cargo run -p form-engine --example recompute -- record.json
//! echo '{"kind":"moneyReceipt","record":{"mrNumber":7,"mrDate":"2025-06-01","officeCode":"DZO","amount":1250}}' \
//!     | cargo run -p form-engine --example recompute
//! ```

use form_engine::{FormEngine, setup_environment};
use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = setup_environment()?;
    let engine = FormEngine::from_config(&config);

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match engine.recompute_json(&input) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(code = %e.code, "Recompute failed: {}", e);
            Err(e.into())
        }
    }
}
