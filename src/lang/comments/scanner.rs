//! Module containing the comment scanner
//!
//! The scanner is permissive.  Quote runs that are too short to open a block are
//! skipped without comment, the only complaint is about a block that never closes.
//! Strict handling of delimiters is the business of the `corrector`.

use serde::Serialize;
use log::{trace,debug};
use super::{Position,LINE_MARKER,DELIMITER_LEN,is_quote,delimiter,run_length};

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum TokenKind {
    SingleLineCommentStart,
    MultiLineCommentStart,
    MultiLineCommentEnd,
    CommentText
}

impl TokenKind {
    /// Numeric code shown in token tables
    pub fn code(&self) -> u8 {
        match self {
            Self::SingleLineCommentStart => 1,
            Self::MultiLineCommentStart => 2,
            Self::MultiLineCommentEnd => 3,
            Self::CommentText => 4
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleLineCommentStart => "single-line comment start",
            Self::MultiLineCommentStart => "multi-line comment start",
            Self::MultiLineCommentEnd => "multi-line comment end",
            Self::CommentText => "comment text"
        }
    }
}

#[derive(Clone,Debug,PartialEq,Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub pos: Position
}

/// Flattened form of a token for display
#[derive(Serialize)]
pub struct TokenRecord {
    pub code: u8,
    #[serde(rename = "type")]
    pub typ: String,
    pub value: String,
    pub position: String
}

impl Token {
    pub fn record(&self) -> TokenRecord {
        TokenRecord {
            code: self.kind.code(),
            typ: self.kind.label().to_string(),
            value: self.lexeme.clone(),
            position: self.pos.to_string()
        }
    }
}

/// State of one scan, never outlives the call to `scan`
struct Scanner {
    chars: Vec<char>,
    idx: usize,
    line: usize,
    col: usize,
    tokens: Vec<Token>,
    errors: Vec<String>
}

impl Scanner {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            idx: 0,
            line: 1,
            col: 1,
            tokens: Vec::new(),
            errors: Vec::new()
        }
    }
    fn pos(&self) -> Position {
        Position::new(self.line,self.col)
    }
    fn advance(&mut self,n: usize) {
        self.idx += n;
        self.col += n;
    }
    fn newline(&mut self) {
        self.idx += 1;
        self.line += 1;
        self.col = 1;
    }
    fn push(&mut self,kind: TokenKind,lexeme: &str,pos: Position) {
        trace!("{:?} at {}",kind,pos);
        self.tokens.push(Token { kind, lexeme: lexeme.to_string(), pos });
    }
    fn text_from(&self,start: usize) -> String {
        self.chars[start..self.idx].iter().collect()
    }
    fn single_line(&mut self) {
        let start = self.pos();
        self.push(TokenKind::SingleLineCommentStart,&LINE_MARKER.to_string(),start);
        self.advance(1);
        let body = self.idx;
        while self.idx < self.chars.len() && self.chars[self.idx] != '\n' {
            self.advance(1);
        }
        let txt = self.text_from(body);
        self.push(TokenKind::CommentText,txt.trim(),Position::new(start.line,start.column + 1));
    }
    fn multi_line(&mut self,q: char) {
        let start = self.pos();
        let delim = delimiter(q);
        self.push(TokenKind::MultiLineCommentStart,&delim,start);
        self.advance(DELIMITER_LEN);
        let body = self.idx;
        let mut closer: Option<Position> = None;
        while self.idx < self.chars.len() {
            if self.chars[self.idx]=='\n' {
                self.newline();
                continue;
            }
            if run_length(&self.chars,self.idx,q) >= DELIMITER_LEN {
                closer = Some(self.pos());
                break;
            }
            self.advance(1);
        }
        let txt = self.text_from(body);
        self.push(TokenKind::CommentText,txt.trim(),Position::new(start.line,start.column + DELIMITER_LEN));
        match closer {
            Some(pos) => {
                self.push(TokenKind::MultiLineCommentEnd,&delim,pos);
                self.advance(DELIMITER_LEN);
            },
            None => {
                debug!("unclosed block starting at {}",start);
                self.errors.push(format!("end of multi-line comment opened at line {}, position {} was not found",
                    start.line,start.column));
            }
        }
    }
    fn run(mut self) -> (Vec<Token>,Vec<String>) {
        while self.idx < self.chars.len() {
            let c = self.chars[self.idx];
            if c=='\n' {
                self.newline();
            } else if c==LINE_MARKER {
                self.single_line();
            } else if is_quote(c) && run_length(&self.chars,self.idx,c) >= DELIMITER_LEN {
                self.multi_line(c);
            } else {
                self.advance(1);
            }
        }
        debug!("scan found {} tokens and {} errors",self.tokens.len(),self.errors.len());
        (self.tokens,self.errors)
    }
}

/// Scan `text` for comments.  Returns the tokens in source order, and error messages
/// for any block comments that are never closed.  This cannot fail.
pub fn scan(text: &str) -> (Vec<Token>,Vec<String>) {
    Scanner::new(text).run()
}
