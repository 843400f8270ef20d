//! # Comment module
//!
//! Handles `#` line comments and triple-quote block comments.
//! The scanner and the corrector are independent, each does its own traversal of the text.
//! They share the position conventions and the small helpers in this module.

pub mod scanner;
pub mod corrector;
pub mod settings;
#[cfg(test)]
mod scan_test;

use std::fmt;

/// Starts a comment that runs to the end of the line
pub const LINE_MARKER: char = '#';
/// Characters that can form a block delimiter when tripled
pub const QUOTES: [char;2] = ['\'','"'];
/// Number of quotes in a well formed delimiter
pub const DELIMITER_LEN: usize = 3;

/// 1-based line and column, the column counts characters
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize
}

impl Position {
    pub fn new(line: usize,column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self,f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"Line {}, Position {}",self.line,self.column)
    }
}

pub fn is_quote(c: char) -> bool {
    QUOTES.contains(&c)
}

/// The well formed delimiter for quote character `q`
pub fn delimiter(q: char) -> String {
    std::iter::repeat(q).take(DELIMITER_LEN).collect()
}

/// Count the consecutive occurrences of `q` starting at index `at`.
pub fn run_length(chars: &[char],at: usize,q: char) -> usize {
    match chars.get(at..) {
        Some(rest) => rest.iter().take_while(|c| **c==q).count(),
        None => 0
    }
}

#[test]
fn test_run_length() {
    let chars: Vec<char> = "a''''b\"".chars().collect();
    assert_eq!(run_length(&chars,0,'\''),0);
    assert_eq!(run_length(&chars,1,'\''),4);
    assert_eq!(run_length(&chars,3,'\''),2);
    assert_eq!(run_length(&chars,6,'"'),1);
    assert_eq!(run_length(&chars,7,'"'),0);
    assert_eq!(run_length(&chars,99,'"'),0);
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3,14).to_string(),"Line 3, Position 14");
    assert_eq!(delimiter('"'),"\"\"\"");
}
