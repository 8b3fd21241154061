//! Tokenizer for the `{{ ... }}` directive grammar.
//!
//! A tag is `{{`, one or more characters other than `}`, then `}}`. Anything
//! that does not form a tag is literal text. Tokens borrow from the input.

/// A lexical token. `raw` is the full tag text including braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text to emit verbatim.
    Text(&'a str),
    /// `{{path}}`: path is trimmed.
    Variable { raw: &'a str, path: &'a str },
    /// `{{#name}}`: name is kept exactly as written.
    LoopOpen { raw: &'a str, name: &'a str },
    /// `{{/name}}`: name is kept exactly as written.
    LoopClose { raw: &'a str, name: &'a str },
    /// `{{#if path}}`: path is trimmed.
    IfOpen { raw: &'a str, path: &'a str },
    /// `{{else}}`
    Else { raw: &'a str },
    /// `{{/if}}`
    IfClose { raw: &'a str },
}

/// Split `input` into tokens. Never fails; malformed tags are text.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = input[pos..].find("{{") {
        let open = pos + offset;
        match tag_at(input, open) {
            Some((end, token)) => {
                if open > text_start {
                    tokens.push(Token::Text(&input[text_start..open]));
                }
                tokens.push(token);
                pos = end;
                text_start = end;
            }
            // Not a tag here; a tag may still start at the next `{`.
            None => pos = open + 1,
        }
    }

    if text_start < input.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }
    tokens
}

/// Try to read a tag starting at byte `open` (which points at `{{`).
/// Returns the byte offset just past the tag and the classified token.
fn tag_at(input: &str, open: usize) -> Option<(usize, Token<'_>)> {
    let content_start = open + 2;
    let close = content_start + input[content_start..].find('}')?;
    if close == content_start || !input[close..].starts_with("}}") {
        return None;
    }
    let end = close + 2;
    Some((end, classify(&input[open..end], &input[content_start..close])))
}

fn classify<'a>(raw: &'a str, content: &'a str) -> Token<'a> {
    if let Some(rest) = content.strip_prefix("#if") {
        let path = rest.trim();
        if rest.starts_with(char::is_whitespace) && !path.is_empty() {
            return Token::IfOpen { raw, path };
        }
    }
    match content {
        "else" => Token::Else { raw },
        "/if" => Token::IfClose { raw },
        _ => {
            if let Some(name) = content.strip_prefix('#') {
                Token::LoopOpen { raw, name }
            } else if let Some(name) = content.strip_prefix('/') {
                Token::LoopClose { raw, name }
            } else {
                Token::Variable { raw, path: content.trim() }
            }
        }
    }
}
