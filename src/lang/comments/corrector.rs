//! Module containing the delimiter corrector
//!
//! Uses Irons' immediate error recovery: a malformed delimiter is reported, repaired in
//! place, and the traversal continues from there.  Every delimiter that reaches the output
//! has exactly three quotes, and any block still open at the end gets a closer, so the
//! corrected text is always balanced.
//!
//! The traversal is a two state machine, `Default` and `InBlock(q)`, driven by quote runs.
//! It does not use the scanner's tokens.

use std::cmp::Ordering;
use serde::Serialize;
use log::{trace,debug};
use super::settings::{Settings,ShortClose};
use super::{Position,LINE_MARKER,DELIMITER_LEN,is_quote,delimiter,run_length};
use crate::STDRESULT;

#[derive(Clone,Copy,Debug,PartialEq,Eq,Serialize)]
pub enum DiagnosticKind {
    InsufficientOpenQuotes,
    ExcessOpenQuotes,
    InsufficientCloseQuotes,
    ExcessCloseQuotes,
    UnterminatedComment
}

impl DiagnosticKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::InsufficientOpenQuotes => "insufficient quotes to open multi-line comment",
            Self::ExcessOpenQuotes => "excess quotes in multi-line comment opener",
            Self::InsufficientCloseQuotes => "insufficient quotes to close multi-line comment",
            Self::ExcessCloseQuotes => "excess quotes in multi-line comment closer",
            Self::UnterminatedComment => "unterminated multi-line comment"
        }
    }
}

#[derive(Clone,Debug,PartialEq,Eq,Serialize)]
pub struct Diagnostic {
    /// order of discovery within one call, starting at 1
    #[serde(rename = "number")]
    pub sequence: usize,
    pub kind: DiagnosticKind,
    pub message: String,
    #[serde(rename = "expected")]
    pub expected_token: String,
    pub line: usize,
    pub column: usize
}

/// Number of quotes a delimiter takes from the start of a run of `n`.
/// If the rest of the run holds at least one more delimiter, only 3 are taken and the
/// rest is left for the next step, so `` is an empty block.  Otherwise the extra
/// quotes belong to this delimiter and are taken with it.
fn delimiter_span(n: usize) -> usize {
    if n >= 2*DELIMITER_LEN {
        DELIMITER_LEN
    } else {
        n
    }
}

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
enum State {
    Default,
    InBlock(char)
}

struct OpenBlock {
    pos: Position,
    quote: char
}

/// State of one correction pass, never outlives the call
struct Pass<'a> {
    config: &'a Settings,
    chars: Vec<char>,
    idx: usize,
    line: usize,
    col: usize,
    state: State,
    out: String,
    stack: Vec<OpenBlock>,
    stray: Option<Position>,
    diagnostics: Vec<Diagnostic>
}

impl<'a> Pass<'a> {
    fn new(text: &str,config: &'a Settings) -> Self {
        Self {
            config,
            chars: text.chars().collect(),
            idx: 0,
            line: 1,
            col: 1,
            state: State::Default,
            out: String::with_capacity(text.len() + DELIMITER_LEN),
            stack: Vec::new(),
            stray: None,
            diagnostics: Vec::new()
        }
    }
    fn pos(&self) -> Position {
        Position::new(self.line,self.col)
    }
    fn report(&mut self,kind: DiagnosticKind,q: char,pos: Position) {
        let diag = Diagnostic {
            sequence: self.diagnostics.len() + 1,
            kind,
            message: kind.message().to_string(),
            expected_token: delimiter(q),
            line: pos.line,
            column: pos.column
        };
        debug!("{} {:?} at {}",diag.sequence,kind,pos);
        self.diagnostics.push(diag);
    }
    /// copy one character to the output
    fn copy(&mut self) {
        let c = self.chars[self.idx];
        self.out.push(c);
        self.idx += 1;
        if c=='\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
    fn copy_to_eol(&mut self) {
        while self.idx < self.chars.len() && self.chars[self.idx] != '\n' {
            self.copy();
        }
    }
    /// consume a quote run without copying it
    fn skip(&mut self,n: usize) {
        self.idx += n;
        self.col += n;
    }
    fn write_delimiter(&mut self,q: char) {
        self.out.push_str(&delimiter(q));
    }
    fn resume(&self) -> State {
        match self.stack.last() {
            Some(block) => State::InBlock(block.quote),
            None => State::Default
        }
    }
    fn open(&mut self,q: char) {
        let pos = self.pos();
        let n = delimiter_span(run_length(&self.chars,self.idx,q));
        match n.cmp(&DELIMITER_LEN) {
            Ordering::Less => self.report(DiagnosticKind::InsufficientOpenQuotes,q,pos),
            Ordering::Greater => self.report(DiagnosticKind::ExcessOpenQuotes,q,pos),
            Ordering::Equal => {}
        }
        trace!("open {} at {}",q,pos);
        self.write_delimiter(q);
        self.stack.push(OpenBlock { pos, quote: q });
        self.state = State::InBlock(q);
        self.skip(n);
    }
    fn close(&mut self,q: char) {
        let pos = self.pos();
        let m = delimiter_span(run_length(&self.chars,self.idx,q));
        if m < DELIMITER_LEN && self.config.corrector.short_close==ShortClose::Stray {
            if self.stray.is_none() {
                trace!("stray closing attempt at {}",pos);
                self.stray = Some(pos);
            }
            for _i in 0..m {
                self.copy();
            }
            return;
        }
        match m.cmp(&DELIMITER_LEN) {
            Ordering::Less => self.report(DiagnosticKind::InsufficientCloseQuotes,q,pos),
            Ordering::Greater => self.report(DiagnosticKind::ExcessCloseQuotes,q,pos),
            Ordering::Equal => {}
        }
        trace!("close {} at {}",q,pos);
        self.write_delimiter(q);
        self.stack.pop();
        self.state = self.resume();
        self.skip(m);
    }
    fn finish(mut self) -> (String,Vec<Diagnostic>) {
        while let Some(block) = self.stack.pop() {
            let pos = match self.stray {
                Some(stray) => stray,
                None => block.pos
            };
            self.report(DiagnosticKind::UnterminatedComment,block.quote,pos);
            self.write_delimiter(block.quote);
        }
        (self.out,self.diagnostics)
    }
    fn run(mut self) -> (String,Vec<Diagnostic>) {
        while self.idx < self.chars.len() {
            let c = self.chars[self.idx];
            if c=='\n' {
                self.copy();
                continue;
            }
            match self.state {
                State::Default => {
                    if c==LINE_MARKER {
                        self.copy_to_eol();
                    } else if is_quote(c) {
                        self.open(c);
                    } else {
                        self.copy();
                    }
                },
                State::InBlock(q) => {
                    if c==q {
                        self.close(q);
                    } else if c==LINE_MARKER && self.config.corrector.comments_in_blocks {
                        self.copy_to_eol();
                    } else {
                        self.copy();
                    }
                }
            }
        }
        self.finish()
    }
}

/// Normalizes triple-quote delimiters.  The only state kept between calls is the configuration.
pub struct Corrector {
    config: Settings
}

impl Corrector {
    pub fn new() -> Self {
        Self { config: Settings::new() }
    }
    pub fn set_config(&mut self,config: Settings) {
        self.config = config;
    }
    pub fn update_config(&mut self,json_str: &str) -> STDRESULT {
        self.config = super::settings::parse(json_str)?;
        Ok(())
    }
    /// Returns the corrected text and the diagnostics in order of discovery.
    pub fn correct(&self,text: &str) -> (String,Vec<Diagnostic>) {
        let (corrected,diagnostics) = Pass::new(text,&self.config).run();
        debug!("correction produced {} diagnostics",diagnostics.len());
        (corrected,diagnostics)
    }
    /// Same as `correct` without the corrected text
    pub fn parse_only(&self,text: &str) -> Vec<Diagnostic> {
        self.correct(text).1
    }
}

/// Correct `text` using the default policies
pub fn correct(text: &str) -> (String,Vec<Diagnostic>) {
    Corrector::new().correct(text)
}

/// Diagnose `text` using the default policies
pub fn parse_only(text: &str) -> Vec<Diagnostic> {
    Corrector::new().parse_only(text)
}
