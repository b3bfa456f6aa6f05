// src/io/input.rs

use std::io::{self, BufRead, Write};

/// Prompts for a single price on stdin.
///
/// - Blank input falls back to `default` (printed in the prompt).
/// - Unparsable input falls back to `default` with a notice, matching the
///   forgiving behavior of the interactive solver.
/// - Negative input is re-prompted: validation is recovered here at the
///   boundary so the core never sees it.
pub fn read_price(prompt: &str, default: f64) -> io::Result<f64> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{prompt} [{default}]: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: behave like blank input.
            return Ok(default);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value >= 0.0 && value.is_finite() => return Ok(value),
            Ok(_) => {
                println!("Price cannot be negative. Try again.");
            }
            Err(_) => {
                println!("Not a number. Using default {default}.");
                return Ok(default);
            }
        }
    }
}
