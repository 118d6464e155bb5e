/// Slice from the first `{` through its matching `}`.
///
/// Only raw brace characters are counted; braces inside JSON string
/// literals shift the depth too. Returns `None` when there is no `{` or the
/// depth never returns to zero.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth: usize = 0;

    for (i, b) in text.as_bytes()[start..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + i]);
                }
            }
            _ => {}
        }
    }
    None
}
