use std::path::PathBuf;

use getopts::Options;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config_path: PathBuf,
    pub preview: bool,
}

/// What the binary should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help(String),
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "c",
        "config",
        "Path to the JSON config file [Default: config.json]",
        "PATH",
    );
    opts.optflag(
        "p",
        "preview",
        "Fetch and print today's message without posting it",
    );
    opts
}

/// Parse arguments, excluding the program name.
pub fn parse(args: &[String]) -> Result<Command, String> {
    let opts = opts();
    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(Command::Help(
            opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))),
        ));
    }

    let config_path = matches
        .opt_str("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    Ok(Command::Run(Args {
        config_path,
        preview: matches.opt_present("preview"),
    }))
}
