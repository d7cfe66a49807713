//! Recursive-descent parser from regex literals to an [`AstRoot`].
//!
//! Nested groups are parsed by recursion, so stack depth grows with group
//! nesting in the input.

use super::{
    Error, Result, SyntaxError, Unsupported,
    ast::{Anchor, AstNode, AstRoot, ClassKind, Literal, Quantifier},
    charset::CharSet,
    delimiter::Delimited,
    flags::Flags,
    lexer::{GroupKind, Lexer, PosToken, Repeat, Token},
};

/// Parses a delimited regex literal such as `/^\d+$/i` into an AST.
///
/// # Errors
///
/// If the literal cannot be parsed, an [`Error::Syntax`] is returned.
pub fn parse(literal: &str) -> Result<AstRoot> {
    let parts = Delimited::split(literal)?;
    let end = parts.offset + parts.pattern.len();
    Parser::new(Lexer::with_span(literal, parts.offset, end)?).parse(parts.flags)
}

/// Parses a bare pattern, without delimiters or flags, into an AST.
///
/// # Errors
///
/// If the pattern cannot be parsed, an [`Error::Syntax`] is returned.
pub fn parse_pattern(pattern: &str) -> Result<AstRoot> {
    Parser::new(Lexer::new(pattern)?).parse(Flags::new())
}

/// Converts a pattern string into an AST.
struct Parser<'a> {
    lexer: Lexer<'a>,
    capture_count: usize,
}

impl<'a> Parser<'a> {
    fn new(lexer: Lexer<'a>) -> Self {
        Parser {
            lexer,
            capture_count: 0,
        }
    }

    /// Converts the pattern into an [`AstRoot`], consuming the parser.
    fn parse(mut self, flags: Flags) -> Result<AstRoot> {
        let ast = self.parse_sequence()?;

        if let Some(PosToken { pos, .. }) = self.lexer.peek() {
            return Err(self.lexer.error(pos, SyntaxError::UnmatchedParen));
        }

        Ok(AstRoot::new(ast, flags, self.capture_count))
    }

    fn parse_sequence(&mut self) -> Result<Vec<AstNode>> {
        let mut ast = Vec::new();

        while let Some(PosToken { token, .. }) = self.lexer.peek()
            && token != Token::RParen
        {
            if let Token::Literal(_) = token {
                self.parse_literals(&mut ast)?;
            } else {
                ast.push(self.parse_item()?);
            }
        }

        Ok(ast)
    }

    /// Collects a run of literal characters into one `string` node. A
    /// character followed by a quantifier ends the run and is quantified on
    /// its own.
    fn parse_literals(&mut self, ast: &mut Vec<AstNode>) -> Result<()> {
        let mut run = String::new();

        while let Some(PosToken {
            token: Token::Literal(c),
            ..
        }) = self.lexer.peek()
        {
            self.lexer.next_token()?;

            if let Some(PosToken {
                token: Token::Repeat(_),
                ..
            }) = self.lexer.peek()
            {
                if !run.is_empty() {
                    ast.push(literal_node(&run));
                }
                let item = literal_node(c.encode_utf8(&mut [0; 4]));
                ast.push(self.parse_quantifier(item)?);
                return Ok(());
            }

            run.push(c);
        }

        if !run.is_empty() {
            ast.push(literal_node(&run));
        }
        Ok(())
    }

    fn parse_item(&mut self) -> Result<AstNode> {
        let Some(PosToken { pos, token }) = self.lexer.next_token()? else {
            return Err(self.lexer.error(self.lexer.tell(), SyntaxError::UnclosedGroup));
        };

        let item = match token {
            Token::Caret => AstNode::Anchor(Anchor::Start),
            Token::Dollar => AstNode::Anchor(Anchor::End),
            Token::Any => AstNode::Class(ClassKind::AnyChar),
            Token::Class(class) => AstNode::Class(class),
            Token::Literal(c) => literal_node(c.encode_utf8(&mut [0; 4])),
            Token::SetOpen { negated } => self.parse_set(pos, negated)?,
            Token::Open(kind) => self.parse_group(pos, kind)?,
            Token::Repeat(_) => {
                return Err(self.lexer.error(pos, SyntaxError::NothingToRepeat));
            }
            Token::RParen => {
                return Err(self.lexer.error(pos, SyntaxError::UnmatchedParen));
            }
            Token::SetClose | Token::Minus => {
                return Err(Error::Internal("set token outside of a character set"));
            }
        };

        self.parse_quantifier(item)
    }

    /// Wraps `item` in the quantifier that follows it, if any.
    fn parse_quantifier(&mut self, item: AstNode) -> Result<AstNode> {
        let Some(PosToken {
            pos,
            token: Token::Repeat(Repeat { min, max, lazy }),
        }) = self.lexer.peek()
        else {
            return Ok(item);
        };

        if item.is_zero_width() {
            return Err(self.lexer.error(pos, SyntaxError::NothingToRepeat));
        }
        self.lexer.next_token()?;

        let Some(quantifier) = Quantifier::from_bounds(min, max, lazy) else {
            let kind = match (max, lazy) {
                (None, true) => SyntaxError::Unsupported(Unsupported::LazyAtLeast),
                (Some(0), _) => SyntaxError::InvalidQuantifier("count must be positive"),
                _ => SyntaxError::InvalidQuantifier("numbers out of order"),
            };
            return Err(self.lexer.error(pos, kind));
        };

        Ok(AstNode::Quantified {
            inner: Box::new(item),
            quantifier,
        })
    }

    fn parse_set(&mut self, start: usize, negated: bool) -> Result<AstNode> {
        let mut set = CharSet::new();

        loop {
            let Some(PosToken { pos, token }) = self.lexer.next_token()? else {
                return Err(self.lexer.error(start, SyntaxError::UnclosedSet));
            };

            let from = match token {
                Token::SetClose => break,
                Token::Literal(c) => c,
                Token::Minus => '-',
                _ => return Err(Error::Internal("non-set token inside a character set")),
            };

            if !self.lexer.consume(Token::Minus)? {
                set.add_char(from);
                continue;
            }

            match self.lexer.peek().map(|next| next.token) {
                // [a-]
                Some(Token::SetClose) => {
                    set.add_char(from);
                    set.add_char('-');
                }
                // [a-z]
                Some(Token::Literal(to)) => {
                    self.lexer.next_token()?;
                    set.add_range(from, to)
                        .map_err(|err| self.lexer.error(pos, err.into()))?;
                }
                // [!--]
                Some(Token::Minus) => {
                    self.lexer.next_token()?;
                    set.add_range(from, '-')
                        .map_err(|err| self.lexer.error(pos, err.into()))?;
                }
                _ => return Err(self.lexer.error(start, SyntaxError::UnclosedSet)),
            }
        }

        if set.is_empty() {
            return Err(self.lexer.error(start, SyntaxError::EmptySet));
        }

        if negated {
            set.invert();
            if set.chars_only().is_none() && set.single_range().is_none() {
                return Err(self
                    .lexer
                    .error(start, SyntaxError::Unsupported(Unsupported::NegatedSet)));
            }
        }

        Ok(AstNode::Set(set))
    }

    fn parse_group(&mut self, start: usize, kind: GroupKind) -> Result<AstNode> {
        if kind == GroupKind::Capture {
            self.capture_count += 1;
        }

        let children = self.parse_sequence()?;

        if !self.lexer.consume(Token::RParen)? {
            return Err(self.lexer.error(start, SyntaxError::UnclosedGroup));
        }

        Ok(match kind {
            GroupKind::Capture => AstNode::Group {
                capturing: true,
                children,
            },
            GroupKind::NonCapture => AstNode::Group {
                capturing: false,
                children,
            },
            GroupKind::Assertion(kind) => AstNode::Assertion { kind, children },
        })
    }
}

fn literal_node(text: &str) -> AstNode {
    let literal = Literal::new(text);
    if literal.is_multi_char() {
        AstNode::String(literal)
    } else {
        AstNode::Char(literal)
    }
}
