//! String escaping for embedding in Rust string literals.

/// Escape a value for use inside a double-quoted Rust string literal.
///
/// Backslash must be handled first so the backslashes introduced by the
/// later substitutions are not escaped again. Only backslash, double quote,
/// newline, carriage return, and tab are rewritten; everything else,
/// including other control bytes and non-ASCII text, passes through
/// untouched so adversarial payloads reach the compiled literal intact.
pub fn escape_rust_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
