//! Outbound sanitization of user-supplied strings.

/// Escapes the markup-significant characters so stored text can never
/// execute in a client: `<` and `>` become entities, everything else is
/// preserved byte-for-byte. Because the output contains no `<` or `>`,
/// running it twice yields the same string.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
