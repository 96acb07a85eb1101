use crate::options::ValidationError;
use regex_automata::meta::Regex;
use std::fmt;

const MAX_PATTERN_LENGTH: usize = 2_048;

/// Ant-style path matcher used to scope a rule to part of the URL space.
///
/// `**` spans any number of path segments, `*` matches within a single
/// segment and `?` matches exactly one character. Everything else is literal.
#[derive(Clone)]
pub struct PathPattern {
    source: String,
    regex: Regex,
}

impl PathPattern {
    pub const MATCH_ALL: &'static str = "/**";

    pub fn parse(pattern: &str) -> Result<Self, ValidationError> {
        let pattern = pattern.trim();
        if !pattern.starts_with('/') {
            return Err(invalid(pattern, "pattern must start with '/'"));
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(invalid(
                pattern,
                &format!("pattern longer than {MAX_PATTERN_LENGTH} bytes"),
            ));
        }

        let regex = Regex::new(&translate(pattern))
            .map_err(|err| invalid(pattern, &err.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn match_all() -> Self {
        Self::parse(Self::MATCH_ALL).expect("catch-all path pattern compiles")
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path.as_bytes())
    }
}

impl Default for PathPattern {
    fn default() -> Self {
        Self::match_all()
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PathPattern {}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.source).finish()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn invalid(pattern: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidPathPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');

    let bytes = pattern.as_bytes();
    let mut chars = pattern.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if ch == '/'
            && pattern[idx..].starts_with("/**")
            && matches!(bytes.get(idx + 3), None | Some(b'/'))
        {
            out.push_str("(?:/(?s:.*))?");
            chars.next();
            chars.next();
            continue;
        }

        match ch {
            '*' => {
                out.push_str("[^/]*");
                // a stray "**" inside a segment behaves like "*"
                while chars.next_if(|(_, next)| *next == '*').is_some() {}
            }
            '?' => out.push_str("[^/]"),
            '\\' | '.' | '+' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#'
            | '&' | '-' | '~' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    out.push('$');
    out
}

#[cfg(test)]
#[path = "path_pattern_test.rs"]
mod path_pattern_test;
