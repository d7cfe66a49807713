use super::{
    Error, Result, SyntaxError, Unsupported,
    ast::{AssertionKind, ClassKind},
};

pub mod token;

pub use token::{GroupKind, PosToken, Repeat, Token};

/// Splits a pattern into [`Token`]s, one token ahead of the caller.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    end: usize,
    /// Position of the `[` of the set being read, if any.
    set_start: Option<usize>,
    peeked: Option<PosToken>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over a bare pattern.
    ///
    /// # Errors
    ///
    /// If the first token of the pattern is invalid, an [`Error`] is returned.
    pub fn new(pattern: &'a str) -> Result<Self> {
        Self::with_span(pattern, 0, pattern.len())
    }

    /// Creates a lexer over `input[start..end]`. Positions in tokens and
    /// errors are offsets into the whole of `input`.
    ///
    /// # Errors
    ///
    /// If the first token of the pattern is invalid, an [`Error`] is returned.
    pub fn with_span(input: &'a str, start: usize, end: usize) -> Result<Self> {
        let mut lexer = Lexer {
            input,
            pos: start,
            end,
            set_start: None,
            peeked: None,
        };
        lexer.peeked = lexer.scan_token()?;
        Ok(lexer)
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<PosToken> {
        self.peeked
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    ///
    /// If the token after the returned one is invalid, an [`Error`] is
    /// returned.
    pub fn next_token(&mut self) -> Result<Option<PosToken>> {
        let token = self.peeked.take();
        if token.is_some() {
            self.peeked = self.scan_token()?;
        }
        Ok(token)
    }

    /// Consumes the next token if it is `token`.
    pub fn consume(&mut self, token: Token) -> Result<bool> {
        if self.peeked.is_some_and(|next| next.token == token) {
            self.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The position just past the last scanned character.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    /// Builds a syntax error at `pos`.
    #[must_use]
    pub fn error(&self, pos: usize, kind: SyntaxError) -> Error {
        Error::Syntax {
            input: self.input.to_owned(),
            pos,
            kind,
        }
    }

    fn peek_char(&self, n: usize) -> Option<char> {
        self.input[self.pos..self.end].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek_char(0)?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn scan_token(&mut self) -> Result<Option<PosToken>> {
        let pos = self.pos;
        let Some(c) = self.advance() else {
            return match self.set_start {
                Some(start) => Err(self.error(start, SyntaxError::UnclosedSet)),
                None => Ok(None),
            };
        };

        let token = if self.set_start.is_some() {
            self.scan_in_set(pos, c)?
        } else {
            self.scan_outside_set(pos, c)?
        };

        Ok(Some(PosToken { pos, token }))
    }

    fn scan_outside_set(&mut self, pos: usize, c: char) -> Result<Token> {
        Ok(match c {
            '\\' => {
                let Some(escaped) = self.advance() else {
                    return Err(self.error(pos, SyntaxError::IncompleteEscape));
                };
                if let Some(class) = ClassKind::from_escape(escaped) {
                    Token::Class(class)
                } else if escaped.is_ascii_digit() {
                    return Err(self.unsupported(pos, Unsupported::Backreference));
                } else {
                    Token::Literal(escaped)
                }
            }
            '^' => Token::Caret,
            '$' => Token::Dollar,
            '.' => Token::Any,
            '[' => {
                let negated = self.peek_char(0) == Some('^');
                if negated {
                    self.advance();
                }
                self.set_start = Some(pos);
                Token::SetOpen { negated }
            }
            '(' => Token::Open(self.scan_group(pos)?),
            ')' => Token::RParen,
            '*' => self.repeat(0, None),
            '+' => self.repeat(1, None),
            '?' => self.repeat(0, Some(1)),
            '{' => self.scan_braces(pos)?,
            '|' => return Err(self.unsupported(pos, Unsupported::Alternation)),
            _ => Token::Literal(c),
        })
    }

    fn scan_in_set(&mut self, pos: usize, c: char) -> Result<Token> {
        Ok(match c {
            ']' => {
                self.set_start = None;
                Token::SetClose
            }
            '-' => Token::Minus,
            '\\' => {
                let Some(escaped) = self.advance() else {
                    return Err(self.error(pos, SyntaxError::IncompleteEscape));
                };
                match escaped {
                    'n' => Token::Literal('\n'),
                    'r' => Token::Literal('\r'),
                    't' => Token::Literal('\t'),
                    e if ClassKind::from_escape(e).is_some() => {
                        return Err(self.unsupported(pos, Unsupported::ClassInSet));
                    }
                    e => Token::Literal(e),
                }
            }
            _ => Token::Literal(c),
        })
    }

    fn scan_group(&mut self, pos: usize) -> Result<GroupKind> {
        if self.peek_char(0) != Some('?') {
            return Ok(GroupKind::Capture);
        }

        let (kind, len) = match (self.peek_char(1), self.peek_char(2)) {
            (Some(':'), _) => (GroupKind::NonCapture, 2),
            (Some('='), _) => (GroupKind::Assertion(AssertionKind::Ahead), 2),
            (Some('!'), _) => (GroupKind::Assertion(AssertionKind::NotAhead), 2),
            (Some('<'), Some('=')) => (GroupKind::Assertion(AssertionKind::Behind), 3),
            (Some('<'), Some('!')) => (GroupKind::Assertion(AssertionKind::NotBehind), 3),
            _ => return Err(self.unsupported(pos, Unsupported::Group)),
        };

        for _ in 0..len {
            self.advance();
        }
        Ok(kind)
    }

    fn repeat(&mut self, min: usize, max: Option<usize>) -> Token {
        let lazy = self.peek_char(0) == Some('?');
        if lazy {
            self.advance();
        }
        Token::Repeat(Repeat { min, max, lazy })
    }

    fn scan_number(&mut self, pos: usize) -> Result<Option<usize>> {
        let start = self.pos;
        while self.peek_char(0).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if start == self.pos {
            return Ok(None);
        }
        self.input[start..self.pos]
            .parse()
            .map(Some)
            .map_err(|_| self.error(pos, SyntaxError::InvalidQuantifier("count is too large")))
    }

    fn scan_braces(&mut self, pos: usize) -> Result<Token> {
        let Some(min) = self.scan_number(pos)? else {
            return Err(self.error(pos, SyntaxError::InvalidQuantifier("expected number")));
        };

        let max = if self.peek_char(0) == Some(',') {
            self.advance();
            self.scan_number(pos)?
        } else {
            Some(min)
        };

        if self.peek_char(0) != Some('}') {
            return Err(self.error(self.pos, SyntaxError::InvalidQuantifier("expected }")));
        }
        self.advance();

        Ok(self.repeat(min, max))
    }

    fn unsupported(&self, pos: usize, what: Unsupported) -> Error {
        self.error(pos, SyntaxError::Unsupported(what))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<PosToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
