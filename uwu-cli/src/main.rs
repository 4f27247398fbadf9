//! Command-line interface for uwu
//! This binary turns boring text into cute text.
//!
//! Usage:
//!   uwu `<words>...`   - Transform the words, joined with single spaces
//!   uwu                - Transform standard input, line by line
//!
//! There are no flags: every argument is text. Diagnostics go to stderr, their
//! verbosity comes from the config file named by `UWU_CONFIG` or from `UWU_LOG`.

mod driver;
mod error;
mod logging;

use clap::{value_parser, Arg, ArgAction, Command};
use driver::Driver;
use error::{CliError, CliResult};
use std::ffi::OsString;
use std::io;
use uwu_config::{Loader, UwuConfig};

fn main() {
    let words = collect_words(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let config = load_config().unwrap_or_else(|e| {
        eprintln!("uwu: {}", e);
        std::process::exit(1);
    });
    logging::init(&config.logging);

    if let Err(e) = run(&words, &config) {
        if e.is_broken_pipe() {
            tracing::debug!("stdout closed early");
            return;
        }
        tracing::error!(error = %e, "uwu failed");
        eprintln!("uwu: {}", e);
        std::process::exit(1);
    }
}

fn command() -> Command {
    Command::new("uwu")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Makes boring text sooper dooper cute")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("words")
                .help("Text to transform; read from stdin when absent")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(OsString))
                .action(ArgAction::Append),
        )
}

/// Every argument after the program name, as text.
///
/// clap swallows a leading `--` as its end-of-options marker, so it is put
/// back in front of the collected words.
fn collect_words<I>(args: I) -> Result<Vec<String>, clap::Error>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let escaped = args.get(1).is_some_and(|arg| arg.as_os_str() == "--");
    let matches = command().try_get_matches_from(&args)?;

    let mut words = Vec::new();
    if escaped {
        words.push("--".to_string());
    }
    words.extend(
        matches
            .get_many::<OsString>("words")
            .into_iter()
            .flatten()
            .map(|word| word.to_string_lossy().into_owned()),
    );
    Ok(words)
}

/// Defaults, then the `UWU_CONFIG` file, then `UWU_LOG`.
fn load_config() -> CliResult<UwuConfig> {
    let mut loader = Loader::new().with_env_file();
    if let Some(level) = logging::level_override() {
        loader = loader.set_override("logging.level", level.as_str())?;
    }
    Ok(loader.build()?)
}

fn run(words: &[String], config: &UwuConfig) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut driver = Driver::new(io::BufWriter::new(stdout.lock()), config.output.flush_each_line);

    if words.is_empty() {
        let stdin = io::stdin();
        driver.transform_lines(stdin.lock())?;
    } else {
        driver.transform_words(words)?;
    }
    Ok(())
}
