//! Placeholder expression parsing.
//!
//! The body of a `{{ ... }}` placeholder is a tiny expression language:
//!
//! - A bare role reference: `foreground`
//! - A transform call: `darken(foreground, 20)`
//! - Calls nest, and percentages accept an optional `%` suffix:
//!   `lighten(darken(primary, 10%), 5)`
//!
//! Parsing produces an [`Expr`] tree that the resolver evaluates against a
//! theme's role environment. Parse failures return a plain message string;
//! the resolver wraps it with the offending placeholder text.

/// A parsed placeholder expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Bare role reference (or the built-in `id` binding).
    Role(String),
    /// Numeric literal, e.g. a transform percentage.
    Number(f64),
    /// Transform invocation: name plus argument expressions.
    Call {
        /// Function name as written in the template.
        name: String,
        /// Argument expressions, in order.
        args: Vec<Expr>,
    },
}

/// Parses a complete placeholder body into an expression tree.
///
/// The whole input must be consumed; trailing characters after a valid
/// expression are an error.
pub fn parse(input: &str) -> Result<Expr, String> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    let expr = parser.parse_expr()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(expr),
        Some(c) => Err(format!("unexpected '{}' after expression", c)),
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, String> {
        match self.peek() {
            Some(c) if c.is_ascii_digit() || c == '-' || c == '.' => self.parse_number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.parse_role_or_call(),
            Some(c) => Err(format!("unexpected '{}'", c)),
            None => Err("expected expression".to_string()),
        }
    }

    fn parse_role_or_call(&mut self) -> Result<Expr, String> {
        let ident = self.parse_ident();
        self.skip_whitespace();
        if self.peek() != Some('(') {
            return Ok(Expr::Role(ident));
        }
        self.bump(); // consume '('
        let mut args = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(Expr::Call { name: ident, args });
        }
        loop {
            args.push(self.parse_expr()?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => self.skip_whitespace(),
                Some(')') => break,
                Some(c) => return Err(format!("expected ',' or ')', found '{}'", c)),
                None => return Err(format!("unclosed argument list for '{}'", ident)),
            }
        }
        Ok(Expr::Call { name: ident, args })
    }

    fn parse_ident(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        self.input[start..self.pos].to_string()
    }

    fn parse_number(&mut self) -> Result<Expr, String> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.bump();
        }
        let text = &self.input[start..self.pos];
        let value: f64 = text
            .parse()
            .map_err(|_| format!("invalid number '{}'", text))?;
        // Percent suffix is accepted and ignored: darken(fg, 20%) == darken(fg, 20)
        if self.peek() == Some('%') {
            self.bump();
        }
        Ok(Expr::Number(value))
    }
}
