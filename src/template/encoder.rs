// Percent-encoding of expanded values

use std::borrow::Cow;

/// RFC 3986 reserved characters (gen-delims and sub-delims)
const RESERVED: &str = ":/?#[]@!$&'()*+,;=";

fn is_reserved(ch: char) -> bool {
    RESERVED.contains(ch)
}

/// Percent-encode `value` for substitution into a URI.
///
/// Everything outside the unreserved set `A-Z a-z 0-9 - . _ ~` is encoded.
/// With `allow_reserved`, reserved characters and already pct-encoded
/// triplets (`%` followed by two hex digits) are copied through as-is.
pub fn encode(value: &str, allow_reserved: bool) -> Cow<'_, str> {
    if !allow_reserved {
        return urlencoding::encode(value);
    }

    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    let mut buf = [0u8; 4];

    for (i, ch) in value.char_indices() {
        if is_reserved(ch) || is_pct_triplet(bytes, i) {
            out.push(ch);
        } else {
            out.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }

    Cow::Owned(out)
}

/// True when `bytes[i..]` starts with `%XX`
fn is_pct_triplet(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'%'
        && bytes.get(i + 1).map_or(false, u8::is_ascii_hexdigit)
        && bytes.get(i + 2).map_or(false, u8::is_ascii_hexdigit)
}
