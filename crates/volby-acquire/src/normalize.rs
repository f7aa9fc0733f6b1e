/// Rewrite non-breaking spaces (U+00A0) to ordinary spaces.
///
/// The results site pads its numeric cells with NBSP thousands separators
/// (e.g. "1\u{a0}234"). Everything else passes through unchanged, so the
/// function is idempotent and a no-op on strings without NBSP.
pub fn normalize(input: &str) -> String {
    input.replace('\u{a0}', " ")
}
