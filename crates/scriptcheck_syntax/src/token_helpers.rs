//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers resolve a token's spelling against the vocabulary registries so call sites compare stable IDs
//! instead of raw strings. A helper only answers for the matching kind: an identifier spelled `if` is never the `if`
//! keyword.

use crate::lexer::{Token, TokenKind};
use scriptcheck_core::lang::keywords::{self, KeywordId};
use scriptcheck_core::lang::operators::{self, OperatorId};
use scriptcheck_core::lang::punctuation::{self, PunctuationId};

impl Token {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.kind {
            TokenKind::Keyword => keywords::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self.kind {
            TokenKind::Operator => operators::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self.kind {
            TokenKind::Punctuation => punctuation::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.punctuation_id() == Some(id)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_requires_keyword_kind() {
        let kw = Token::new(TokenKind::Keyword, "if", 1, 1);
        let ident = Token::new(TokenKind::Identifier, "if", 1, 1);
        assert!(kw.is_keyword(KeywordId::If));
        assert!(!ident.is_keyword(KeywordId::If));
    }

    #[test]
    fn unknown_keyword_spelling_has_no_id() {
        let tok = Token::new(TokenKind::Keyword, "goto", 3, 7);
        assert_eq!(tok.keyword_id(), None);
    }

    #[test]
    fn punctuation_and_operator_ids() {
        let brace = Token::new(TokenKind::Punctuation, "{", 1, 1);
        let assign = Token::new(TokenKind::Operator, "=", 1, 3);
        assert!(brace.is_punctuation(PunctuationId::LBrace));
        assert!(!brace.is_punctuation(PunctuationId::RBrace));
        assert!(assign.is_operator(OperatorId::Assign));
        assert_eq!(assign.punctuation_id(), None);
    }
}
