//! # `tqkit` main library
//!
//! This library scans source text for two comment forms, the `#` line comment and the
//! triple-quote block comment (`'''...'''` or `"""..."""`).  It can also repair malformed
//! block delimiters so that the text always ends up with balanced comments.
//!
//! ## Architecture
//!
//! The comment services are in `lang::comments`:
//! * `lang::comments::scanner` produces a token stream, read only, never complains except about unclosed blocks
//! * `lang::comments::corrector` normalizes delimiters using immediate error recovery
//! * `lang::comments::settings` parses the JSON configuration of the corrector
//!
//! The two passes do not share any state.  Each call builds its own token list or diagnostic
//! list and returns it, so independent buffers can be processed from independent threads.
//!
//! ## Positions
//!
//! Lines and columns are 1-based and columns count characters, not bytes.
//! Conversion from a position to a character offset is in `lang`, see `lang::char_offset`
//! and `lang::highlight_span`.
//!
//! ## Command Line
//!
//! The `tqkit` binary plays the part of the host.  It reads text from stdin or a file
//! and writes tokens, diagnostics, or corrected text, see `commands`.

pub mod lang;
pub mod commands;

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;
