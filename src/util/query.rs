#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Percent-encode a string for use as a query parameter value.
///
/// RFC 3986 unreserved characters pass through; everything else is encoded
/// byte-wise, so multi-byte UTF-8 comes out as one `%XX` per byte. The
/// router decodes values on the read side, so round-trips are lossless.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
