use clap::{value_parser, crate_version, Arg, ArgAction, Command, ValueHint};

const IN_HELP: &str = "if no file is given the text is read from stdin,
line entry is used if stdin is the console";
const CONFIG_LONG_HELP: &str = "JSON string adjusting the corrector, e.g.
`{\"corrector\": {\"shortClose\": \"stray\", \"commentsInBlocks\": true}}`
shortClose = close (default): a run of 1 or 2 quotes inside a block closes it
shortClose = stray: such a run is comment text, unterminated blocks are reported at the first one
commentsInBlocks = true: `#` inside a block hides the rest of the line";

fn file_arg() -> Arg {
    Arg::new("file").short('f').long("file").value_name("PATH").help("path to the source file")
        .value_hint(ValueHint::FilePath)
        .required(false)
}

fn config_arg() -> Arg {
    Arg::new("config").long("config").short('c').value_name("JSON").help("modify corrector configuration")
        .long_help(CONFIG_LONG_HELP)
        .required(false)
}

fn console_arg() -> Arg {
    Arg::new("console").long("console").help("format for console unconditionally")
        .required(false)
        .action(ArgAction::SetTrue)
        .long_help("even if the output context is a file or pipe, format it for the console")
}

fn indent_arg() -> Arg {
    Arg::new("indent").long("indent").help("JSON indentation, omit to minify")
        .long_help("JSON indentation, omit to minify; output is JSON whenever this is given, even on the console")
        .value_name("SPACES")
        .value_parser(value_parser!(u16).range(0..16))
        .required(false)
}

pub fn build_cli() -> Command {
    let long_help = "tqkit is always invoked with exactly one of several subcommands.
The subcommands are generally designed to function as nodes in a pipeline.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
list comments:         `tqkit scan -f prog.py`
comments as JSON:      `cat prog.py | tqkit scan --indent 2 > tokens.json`
check delimiters:      `tqkit verify -f prog.py`
repair delimiters:     `tqkit correct -f prog.py > fixed.py`
check then pass along: `cat prog.py | tqkit verify | tqkit scan`";

    let mut main_cmd = Command::new("tqkit")
        .about("Scans comments and repairs triple-quote delimiters.")
        .after_long_help(long_help)
        .version(crate_version!());

    main_cmd = main_cmd.subcommand(
        Command::new("scan")
            .arg(file_arg())
            .arg(console_arg())
            .arg(indent_arg())
            .visible_alias("tok")
            .about("list comment tokens, table for the console, JSON otherwise")
            .after_help(IN_HELP)
    );
    main_cmd = main_cmd.subcommand(
        Command::new("verify")
            .arg(file_arg())
            .arg(config_arg())
            .about("report malformed delimiters, pass the text along if there are none")
            .after_help(IN_HELP)
    );
    main_cmd = main_cmd.subcommand(
        Command::new("correct")
            .arg(file_arg())
            .arg(config_arg())
            .visible_alias("fix")
            .about("repair malformed delimiters, write corrected text to stdout")
            .after_help(IN_HELP)
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(Arg::new("shell").long("shell").short('s').value_name("SHELL").help("type of shell")
                .required(true)
                .value_parser(["bash", "elv", "fish", "ps1", "zsh"])
            )
            .about("write completions script to stdout")
    );
    main_cmd
}
