use rand::Rng;

/// Draw one entry uniformly. `None` only for an empty list.
pub fn pick<'a, R: Rng + ?Sized>(taglines: &[&'a str], rng: &mut R) -> Option<(usize, &'a str)> {
    if taglines.is_empty() {
        return None;
    }
    let i = rng.gen_range(0..taglines.len());
    Some((i, taglines[i]))
}

/// Quote `s` as a CSS string literal so it can be used with `content: var(..)`.
pub fn css_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            // CSS escapes are hex code points terminated by a space
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Parse the optional page seed; anything unparsable falls back to entropy.
#[inline]
pub fn parse_seed(attr: Option<&str>) -> Option<u64> {
    attr.and_then(|s| s.trim().parse().ok())
}
