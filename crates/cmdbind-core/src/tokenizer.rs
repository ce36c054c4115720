//! Forward-only access to the raw argument sequence.

/// Cursor over an ordered slice of command-line tokens.
///
/// The cursor only moves forward; each token is handed out at most once.
#[derive(Debug, Clone)]
pub struct ArgCursor<'a> {
    args: &'a [String],
    position: usize,
}

impl<'a> ArgCursor<'a> {
    #[must_use]
    pub fn new(args: &'a [String]) -> Self {
        Self { args, position: 0 }
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a str> {
        self.args.get(self.position).map(String::as_str)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Tokens not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [String] {
        &self.args[self.position..]
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.args.len()
    }
}

/// Pulls the next token from the cursor.
///
/// An absent cursor behaves like an exhausted one: both yield `None`.
pub fn next_command_line_item(cursor: Option<&mut ArgCursor<'_>>) -> Option<String> {
    cursor?.advance().map(ToString::to_string)
}
