/// Normalize extracted text into a flat, single-spaced form.
///
/// Whitespace runs collapse to a single space, other control characters are
/// stripped outright, and the result carries no leading or trailing
/// whitespace. Running it twice produces the same output as running it once.
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_control() {
            // stray NUL or ESC inside a word is dropped, not turned into a break
        } else {
            if pending_space && !result.is_empty() {
                result.push(' ');
            }
            pending_space = false;
            result.push(c);
        }
    }

    result
}
