/// Literal text with its pattern-escaped form.
///
/// Escaping happens once, when the literal is created. The evaluator only
/// ever reads [`Literal::escaped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    raw: String,
    escaped: String,
}

impl Literal {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            escaped: escape(raw),
        }
    }

    /// The text as given by the caller.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The text with every pattern metacharacter backslash-escaped.
    #[must_use]
    pub fn escaped(&self) -> &str {
        &self.escaped
    }

    /// Returns `true` if the literal spans more than one character, and so
    /// needs a group before it can be quantified.
    #[must_use]
    pub fn is_multi_char(&self) -> bool {
        self.raw.chars().nth(1).is_some()
    }
}

fn is_special(c: char) -> bool {
    matches!(
        c,
        '.' | '\\'
            | '+'
            | '*'
            | '?'
            | '['
            | '^'
            | ']'
            | '$'
            | '('
            | ')'
            | '{'
            | '}'
            | '='
            | '!'
            | '<'
            | '>'
            | '|'
            | ':'
            | '-'
            | '#'
            | '/'
    )
}

/// Escapes every character with a special meaning in a pattern, including
/// the `/` delimiter. NUL is written as the octal escape `\000`, and line
/// feed, carriage return and tab as `\n`, `\r` and `\t`.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\0' => out.push_str(r"\000"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            c => {
                if is_special(c) {
                    out.push('\\');
                }
                out.push(c);
            }
        }
    }
    out
}
