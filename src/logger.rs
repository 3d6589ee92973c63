//! Logging utilities with colored output.
//!
//! Provides the `log!` macro for formatted terminal output with colored
//! module prefixes.
//!
//! # Example
//!
//! ```ignore
//! log!("posts"; "{} documents", count);
//! log!("error"; "minify failed: {:#}", err);
//! ```

use colored::Colorize;

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Print a message with a `[module]` prefix.
///
/// `error` and `warn` get their conventional colors; everything else shares
/// one accent color so build output stays scannable.
pub fn log(module: &str, message: &str) {
    let prefix = format!("[{module}]");
    let prefix = match module {
        "error" => prefix.red().bold(),
        "warn" => prefix.yellow().bold(),
        _ => prefix.green().bold(),
    };
    println!("{prefix} {message}");
}
