//! Parse settings string sent by any client.
//!
//! Recognized keys adjust the policies of the corrector.
//! Unknown keys are ignored, and a key with the wrong type keeps its default.

use serde_json;
use crate::DYNERR;
use crate::lang::{update_json_bool,update_json_string};

/// What to do with a run of one or two quotes that could be an attempt to close a block
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum ShortClose {
    /// Take the run as the closer, repair it to three quotes, and report it
    Close,
    /// Keep the run as comment text, remember the first one for positioning unterminated blocks
    Stray
}

#[derive(Clone)]
pub struct CorrectorSettings {
    pub short_close: ShortClose,
    /// If true, `#` inside a block hides the rest of the line from the corrector
    pub comments_in_blocks: bool
}

#[derive(Clone)]
pub struct Settings {
    pub corrector: CorrectorSettings
}

impl Settings {
    pub fn new() -> Self {
        Self {
            corrector: CorrectorSettings {
                short_close: ShortClose::Close,
                comments_in_blocks: false
            }
        }
    }
}

pub fn parse(json: &str) -> Result<Settings,DYNERR> {
    let mut ans = Settings::new();
    if json.trim().len()==0 {
        return Ok(ans);
    }
    let root = match serde_json::from_str::<serde_json::Value>(json) {
        Ok(v) => v,
        Err(e) => {
            log::error!("settings: {}",e);
            return Err(Box::new(crate::lang::Error::Settings));
        }
    };
    if let Some(obj) = root.as_object() {
        for (key,val) in obj {
            match key.as_str() {
                "corrector" => {
                    let mut short_close = String::new();
                    update_json_string(val,"shortClose",&mut short_close);
                    match short_close.as_str() {
                        "" => {},
                        "close" => ans.corrector.short_close = ShortClose::Close,
                        "stray" => ans.corrector.short_close = ShortClose::Stray,
                        s => log::warn!("unknown shortClose policy {}",s)
                    }
                    update_json_bool(val,"commentsInBlocks",&mut ans.corrector.comments_in_blocks);
                },
                _ => {}
            }
        }
    }
    Ok(ans)
}

#[test]
fn test_defaults() {
    let s = parse("").expect("empty settings failed");
    assert_eq!(s.corrector.short_close,ShortClose::Close);
    assert!(!s.corrector.comments_in_blocks);
}

#[test]
fn test_parse() {
    let s = parse(r#"{"corrector": {"shortClose": "stray", "commentsInBlocks": true}, "other": 1}"#).expect("parse failed");
    assert_eq!(s.corrector.short_close,ShortClose::Stray);
    assert!(s.corrector.comments_in_blocks);
}

#[test]
fn test_wrong_types() {
    let s = parse(r#"{"corrector": {"shortClose": 5, "commentsInBlocks": "yes"}}"#).expect("parse failed");
    assert_eq!(s.corrector.short_close,ShortClose::Close);
    assert!(!s.corrector.comments_in_blocks);
    assert!(parse("{not json").is_err());
}
