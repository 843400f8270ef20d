//! ## Comment Scanning and Correction
//!
//! Each subcommand reads a document from `--file` or stdin and runs one of the comment services.
//! Tables and diagnostics go to stderr or stdout depending on whether the output is the console.

use std::io::Write;
use colored::Colorize;
use serde::Serialize;
use super::CommandError;
use crate::lang;
use crate::lang::Document;
use crate::lang::comments::scanner::{self,Token,TokenRecord};
use crate::lang::comments::corrector::Corrector;
use crate::{STDRESULT,DYNERR};

fn get_document(cmd: &clap::ArgMatches,name: &str) -> Result<Document,DYNERR> {
    let doc = match cmd.get_one::<String>("file") {
        Some(path) => Document::from_file_path(std::path::Path::new(path))?,
        None => Document::from_string(lang::read_stdin(">")?)
    };
    if doc.text.len()==0 {
        log::error!("{} did not receive any text",name);
        return Err(Box::new(CommandError::InvalidCommand));
    }
    log::info!("{} received {} bytes",name,doc.text.len());
    Ok(doc)
}

fn get_corrector(cmd: &clap::ArgMatches) -> Result<Corrector,DYNERR> {
    let mut ans = Corrector::new();
    if let Some(json) = cmd.get_one::<String>("config") {
        ans.update_config(json)?;
    }
    Ok(ans)
}

fn to_json(val: &serde_json::Value,indent: Option<&u16>) -> Result<String,DYNERR> {
    match indent {
        None => Ok(serde_json::to_string(val)?),
        Some(spaces) => {
            let ind = vec![b' ';*spaces as usize];
            let mut buf = Vec::new();
            let fmt = serde_json::ser::PrettyFormatter::with_indent(&ind);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf,fmt);
            val.serialize(&mut ser)?;
            Ok(String::from_utf8(buf)?)
        }
    }
}

fn print_token_table(tokens: &[Token]) {
    println!("{:<5} {:<26} {:<24} {}","CODE","TYPE","VALUE","POSITION");
    for tok in tokens {
        let rec = tok.record();
        println!("{:<5} {:<26} {:<24} {}",rec.code,rec.typ,rec.value.replace('\n',"\\n"),rec.position);
    }
}

pub fn scan(cmd: &clap::ArgMatches) -> STDRESULT {
    let doc = get_document(cmd,"scan")?;
    let (tokens,errors) = scanner::scan(&doc.text);
    let indent = cmd.get_one::<u16>("indent");
    if indent.is_none() && (cmd.get_flag("console") || atty::is(atty::Stream::Stdout)) {
        print_token_table(&tokens);
        for err in &errors {
            eprintln!("{} {}","ERROR".red(),err);
        }
    } else {
        let records: Vec<TokenRecord> = tokens.iter().map(|t| t.record()).collect();
        let obj = serde_json::json!({
            "tokens": records,
            "errors": errors
        });
        println!("{}",to_json(&obj,indent)?);
    }
    if errors.len()==0 {
        eprintln!("\u{2713} scan complete, {} tokens",tokens.len().to_string().green());
    } else {
        eprintln!("\u{2717} {} errors, {} tokens",errors.len().to_string().red(),tokens.len());
    }
    Ok(())
}

pub fn verify(cmd: &clap::ArgMatches) -> STDRESULT {
    let corrector = get_corrector(cmd)?;
    let doc = get_document(cmd,"verify")?;
    let diags = corrector.parse_only(&doc.text);
    for diag in &diags {
        lang::eprint_diagnostic(diag,&doc.text);
    }
    if diags.len()==0 {
        eprintln!("\u{2713} {}","Passing".green());
        if !atty::is(atty::Stream::Stdout) {
            // if not the console, pipe the text to the next node
            print!("{}",doc.text);
        }
        return Ok(());
    } else {
        eprintln!("\u{2717} {} {}",diags.len().to_string().red(),"errors".red());
        return Err(Box::new(lang::Error::Syntax));
    }
}

pub fn correct(cmd: &clap::ArgMatches) -> STDRESULT {
    let corrector = get_corrector(cmd)?;
    let doc = get_document(cmd,"correct")?;
    let (corrected,diags) = corrector.correct(&doc.text);
    for diag in &diags {
        lang::eprint_diagnostic(diag,&doc.text);
    }
    std::io::stdout().write_all(corrected.as_bytes())?;
    if atty::is(atty::Stream::Stdout) && !corrected.ends_with('\n') {
        println!();
    }
    eprintln!("normalization complete, {} errors",diags.len());
    Ok(())
}
