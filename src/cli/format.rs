//! Format output dispatch helpers
//!
//! Provides a macro to eliminate repetitive format match blocks.

/// Macro to dispatch output by format with minimal boilerplate.
///
/// # Examples
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => { output_json(&report)? },
///     human => { output_human(&report); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
        }
    };
}
