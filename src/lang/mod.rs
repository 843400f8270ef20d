//! # Language Module
//!
//! Comment handling is in the `comments` submodule.
//! This module has what the services and the CLI share: the error type, the document,
//! conversion of positions to offsets, console output of diagnostics, and JSON helpers
//! used when parsing settings.

pub mod comments;

use colored::*;
use thiserror::Error;
use std::io;
use std::io::Read;
use std::io::Write;
use atty;
use log::{debug,trace};

use crate::DYNERR;
use comments::corrector::Diagnostic;

#[derive(Error,Debug)]
pub enum Error {
    #[error("Syntax error")]
    Syntax,
    #[error("Input is not valid UTF8")]
    Encoding,
    #[error("Settings could not be parsed")]
    Settings,
    #[error("Path not found")]
    PathNotFound
}

/// Text of a document along with the path it came from, if any.
#[derive(Clone)]
pub struct Document {
    pub text: String,
    pub path: Option<std::path::PathBuf>
}

impl Document {
    pub fn from_string(text: String) -> Self {
        Self { text, path: None }
    }
    pub fn from_file_path(path: &std::path::Path) -> Result<Self,DYNERR> {
        if !path.exists() {
            log::error!("{} does not exist",path.display());
            return Err(Box::new(Error::PathNotFound));
        }
        let bytes = std::fs::read(path)?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { text, path: Some(path.to_path_buf()) }),
            Err(_) => Err(Box::new(Error::Encoding))
        }
    }
}

/// Convert a 1-based line and column into a character offset.
/// Lines are separated by `\n` only, a `\r` counts as an ordinary character.
/// Lines past the end of the text contribute nothing, so the result may point past the end.
pub fn char_offset(text: &str,line: usize,column: usize) -> usize {
    let mut offset = 0;
    for (row,txt) in text.split('\n').enumerate() {
        if row + 1 >= line {
            break;
        }
        offset += txt.chars().count() + 1;
    }
    offset + column.saturating_sub(1)
}

/// Range of characters to mark for something found at (`line`,`column`) with length `len`.
/// The range is clipped so that it never extends past the end of the text.
pub fn highlight_span(text: &str,line: usize,column: usize,len: usize) -> std::ops::Range<usize> {
    let total = text.chars().count();
    let start = usize::min(char_offset(text,line,column),total);
    let end = usize::min(start + len,total);
    trace!("span for ({},{}) is {}..{}",line,column,start,end);
    start..end
}

/// Print a diagnostic to stderr, including the source line with the span highlighted.
pub fn eprint_diagnostic(diag: &Diagnostic,text: &str) {
    eprintln!("{} {} line {} col {}: {}, expected {}",
        "ERROR".red(),
        diag.sequence,
        diag.line,
        diag.column,
        diag.message,
        diag.expected_token.bright_blue());
    let line_start = char_offset(text,diag.line,1);
    let span = highlight_span(text,diag.line,diag.column,diag.expected_token.chars().count());
    let src: Vec<char> = match text.split('\n').nth(diag.line.saturating_sub(1)) {
        Some(s) => s.trim_end_matches('\r').chars().collect(),
        None => return
    };
    let b1 = usize::min(span.start.saturating_sub(line_start),src.len());
    let b2 = usize::min(span.end.saturating_sub(line_start),src.len());
    debug!("highlight bounds {} {} in line of length {}",b1,b2,src.len());
    let pre: String = src[0..b1].iter().collect();
    let mid: String = src[b1..b2].iter().collect();
    let post: String = src[b2..].iter().collect();
    eprintln!("    {}{}{}",pre,mid.red().bold(),post);
}

/// Accumulate lines typed at the console until `bye` is entered.
pub fn line_entry(prompt: &str) -> String {
    let mut code = String::new();
    eprintln!("Line entry interface.");
    eprintln!("This is a blind accumulation of lines.");
    eprintln!("Processing occurs when entry is terminated.");
    eprintln!("`bye` terminates.");
    loop {
        eprint!("{} ",prompt);
        let mut line = String::new();
        if io::stderr().flush().is_err() {
            break;
        }
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if line=="bye\n" || line=="bye\r\n" {
            break;
        }
        code += &line;
    }
    code
}

/// Read the whole of stdin, or use line entry if stdin is the console.
pub fn read_stdin(prompt: &str) -> Result<String,DYNERR> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(line_entry(prompt));
    }
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(_) => Err(Box::new(Error::Encoding))
    }
}

/// If `key` is a boolean in `obj`, copy it to `curr`.
pub fn update_json_bool(obj: &serde_json::Value,key: &str,curr: &mut bool) {
    if let Some(val) = obj.get(key) {
        match val.as_bool() {
            Some(b) => *curr = b,
            None => log::warn!("{} should be a boolean",key)
        }
    }
}

/// If `key` is a string in `obj`, copy it to `curr`.
pub fn update_json_string(obj: &serde_json::Value,key: &str,curr: &mut String) {
    if let Some(val) = obj.get(key) {
        match val.as_str() {
            Some(s) => *curr = s.to_string(),
            None => log::warn!("{} should be a string",key)
        }
    }
}

#[test]
fn test_char_offset() {
    let text = "ab\ncde\n\nf";
    assert_eq!(char_offset(text,1,1),0);
    assert_eq!(char_offset(text,1,3),2);
    assert_eq!(char_offset(text,2,1),3);
    assert_eq!(char_offset(text,2,3),5);
    assert_eq!(char_offset(text,3,1),7);
    assert_eq!(char_offset(text,4,1),8);
    // lines past the end add nothing
    assert_eq!(char_offset(text,9,2),11);
}

#[test]
fn test_char_offset_multibyte() {
    let text = "é'''\nñ#";
    assert_eq!(char_offset(text,1,2),1);
    assert_eq!(char_offset(text,2,2),6);
    let chars: Vec<char> = text.chars().collect();
    assert_eq!(chars[6],'#');
}

#[test]
fn test_highlight_span() {
    let text = "'''abc\n''";
    assert_eq!(highlight_span(text,1,1,3),0..3);
    assert_eq!(highlight_span(text,2,1,3),7..9);
    assert_eq!(highlight_span(text,5,5,3),9..9);
}
