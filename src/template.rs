use std::collections::HashMap;

use crate::error::{GenError, Result};

/// A text with `$name`, `${name}` and `$$` placeholders.
pub struct Template<'a> {
    text: &'a str,
}

impl<'a> Template<'a> {
    pub fn new(text: &'a str) -> Template<'a> {
        Template { text }
    }

    /// Replaces every placeholder with its value from `mapping`.
    /// Fails on the first placeholder without a value or on a stray `$`.
    pub fn substitute(&self, mapping: &HashMap<&str, String>) -> Result<String> {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;
        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let (placeholder, consumed) = match parse_placeholder(after) {
                Some(p) => p,
                None => {
                    let offset = self.text.len() - rest.len() + pos;
                    return Err(self.invalid_at(offset));
                }
            };
            match placeholder {
                Placeholder::Escaped => out.push('$'),
                Placeholder::Named(name) => match mapping.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(GenError::MissingPlaceholder {
                            name: name.to_string(),
                        })
                    }
                },
            }
            rest = &after[consumed..];
        }
        out.push_str(rest);
        Ok(out)
    }

    fn invalid_at(&self, offset: usize) -> GenError {
        let before = &self.text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        GenError::InvalidPlaceholder {
            line,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

enum Placeholder<'a> {
    Escaped,
    Named(&'a str),
}

// `s` starts right after a `$`. Returns the placeholder and how many bytes
// of `s` it spans.
fn parse_placeholder(s: &str) -> Option<(Placeholder<'_>, usize)> {
    if s.starts_with('$') {
        return Some((Placeholder::Escaped, 1));
    }
    if let Some(braced) = s.strip_prefix('{') {
        let len = identifier_len(braced);
        if len > 0 && braced[len..].starts_with('}') {
            return Some((Placeholder::Named(&braced[..len]), len + 2));
        }
        return None;
    }
    let len = identifier_len(s);
    if len > 0 {
        return Some((Placeholder::Named(&s[..len]), len));
    }
    None
}

fn identifier_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if is_alpha(c) => {}
        _ => return 0,
    }
    chars
        .find(|&(_, c)| !is_alpha_numeric(c))
        .map_or(s.len(), |(i, _)| i)
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
