//! URL encoding utility for path-embedded geocoding queries

/// Percent-encode a string for use inside a URL path segment
///
/// Encodes all characters except unreserved characters (`A-Z`, `a-z`,
/// `0-9`, `-`, `_`, `.`, `~`). Spaces become `%20`, not `+` — `+` is a
/// literal plus inside a path.
pub fn encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                for b in c.to_string().as_bytes() {
                    result.push_str(&format!("%{b:02X}"));
                }
            },
        }
    }
    result
}
