//! String helpers for alias keys

use percent_encoding::percent_decode_str;

/// Drop one trailing `/`, like Ruby's `chomp('/')`
#[inline]
pub fn trim_trailing_slash(s: &str) -> &str {
    s.strip_suffix('/').unwrap_or(s)
}

/// Drop one leading `/`
#[inline]
pub fn trim_leading_slash(s: &str) -> &str {
    s.strip_prefix('/').unwrap_or(s)
}

/// `2024-03-01-some-title` → `some-title`
pub fn strip_date_prefix(slug: &str) -> Option<&str> {
    let bytes = slug.as_bytes();
    if bytes.len() <= 11 {
        return None;
    }
    let shape_ok = bytes[..11].iter().enumerate().all(|(i, b)| match i {
        4 | 7 | 10 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if shape_ok {
        Some(&slug[11..])
    } else {
        None
    }
}

/// Percent-decoded form of `s`, when decoding changes it and yields UTF-8
pub fn url_decoded(s: &str) -> Option<String> {
    if !s.contains('%') {
        return None;
    }
    let decoded = percent_decode_str(s).decode_utf8().ok()?;
    if decoded == s {
        None
    } else {
        Some(decoded.into_owned())
    }
}

/// Last path segment, splitting on `/` or `\`
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Path with the extension of its last segment removed
pub fn strip_extension(path: &str) -> &str {
    let name = basename(path);
    match name.rfind('.') {
        Some(dot) if dot > 0 => &path[..path.len() - (name.len() - dot)],
        _ => path,
    }
}
