/// Token kind produced by the reveal tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Whitespace,
}

/// One slice of the source text. Whitespace runs are kept as their own tokens
/// so that joining every `text` in order gives back the input byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Lookup key: alphanumerics only, lowercased. Empty for whitespace.
    pub normalized: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn word(text: &str) -> Self {
        Self {
            text: text.to_string(),
            normalized: normalize_key(text),
            kind: TokenKind::Word,
        }
    }

    pub fn whitespace(text: &str) -> Self {
        Self {
            text: text.to_string(),
            normalized: String::new(),
            kind: TokenKind::Whitespace,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn has_line_break(&self) -> bool {
        self.kind == TokenKind::Whitespace && self.text.contains('\n')
    }
}

/// Strips everything that is not alphanumeric or whitespace and lowercases the rest.
pub fn normalize_key(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits text into alternating word / whitespace runs.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        match current {
            Some(prev) if prev == is_space => {}
            Some(prev) => {
                tokens.push(make_token(&text[start..idx], prev));
                start = idx;
                current = Some(is_space);
            }
            None => current = Some(is_space),
        }
    }

    if let Some(prev) = current {
        tokens.push(make_token(&text[start..], prev));
    }

    tokens
}

fn make_token(slice: &str, is_space: bool) -> Token {
    if is_space {
        Token::whitespace(slice)
    } else {
        Token::word(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_keeps_whitespace_runs() {
        let tokens = tokenize("the void calls");
        assert_eq!(texts(&tokens), vec!["the", " ", "void", " ", "calls"]);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2].kind, TokenKind::Word);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_only_whitespace() {
        let tokens = tokenize(" \n\t ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert!(tokens[0].has_line_break());
    }

    #[test]
    fn test_tokenize_leading_and_trailing_whitespace() {
        let tokens = tokenize("  hello world\n");
        assert_eq!(texts(&tokens), vec!["  ", "hello", " ", "world", "\n"]);
    }

    #[test]
    fn test_tokenize_round_trip() {
        let samples = [
            "",
            "single",
            "### 1. The Vigilance of the Core\nSignal is offline.\n\n",
            "  mixed \t spacing\r\nand  newlines  ",
            "ünïcödé wörds — with em dash",
            "trailing space ",
        ];
        for sample in samples {
            let rebuilt: String = tokenize(sample).iter().map(|t| t.text.as_str()).collect();
            assert_eq!(rebuilt, sample);
        }
    }

    #[test]
    fn test_tokens_alternate_kinds() {
        let tokens = tokenize("a  b\nc");
        for pair in tokens.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn test_normalize_key_strips_punctuation() {
        assert_eq!(normalize_key("Void,"), "void");
        assert_eq!(normalize_key("(Soul)!"), "soul");
        assert_eq!(normalize_key("Ma'at."), "maat");
        assert_eq!(normalize_key("..."), "");
    }

    #[test]
    fn test_word_token_normalized() {
        let token = Token::word("Destiny.");
        assert_eq!(token.normalized, "destiny");
        assert!(token.is_word());
    }
}
