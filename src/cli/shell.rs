//! Interactive shell for the Mealdeck CLI
//!
//! A REPL over the same subcommands, with history and tab completion.

use anyhow::Result;
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};

use super::commands;
use super::{Cli, Commands};

/// Top-level words and their subcommands
const COMMANDS: &[(&str, &[&str])] = &[
    ("meals", &["list", "categories", "show"]),
    ("favorites", &["list", "toggle", "check"]),
    ("config", &["show", "get", "set", "path"]),
    ("diag", &["paths", "check"]),
    ("help", &[]),
    ("exit", &[]),
    ("quit", &[]),
];

/// Command completer for the shell
struct ShellCompleter;

fn pairs<'a>(words: impl Iterator<Item = &'a str>, prefix: &str) -> Vec<Pair> {
    words
        .filter(|w| w.starts_with(prefix))
        .map(|w| Pair {
            display: w.to_string(),
            replacement: w.to_string(),
        })
        .collect()
}

impl ShellCompleter {
    /// Completion start offset and candidates for the text before the cursor
    fn candidates(line: &str) -> (usize, Vec<Pair>) {
        let words: Vec<&str> = line.split_whitespace().collect();
        let finished = line.is_empty() || line.ends_with(' ');
        let start = line.rfind(' ').map(|i| i + 1).unwrap_or(0);

        let subcommands = |cmd: &str| {
            COMMANDS
                .iter()
                .find(|(c, _)| *c == cmd)
                .map(|(_, subs)| subs.iter().copied())
        };

        match (words.as_slice(), finished) {
            ([], _) => (0, pairs(COMMANDS.iter().map(|(c, _)| *c), "")),
            ([prefix], false) => (start, pairs(COMMANDS.iter().map(|(c, _)| *c), prefix)),
            ([cmd], true) => match subcommands(*cmd) {
                Some(subs) => (line.len(), pairs(subs, "")),
                None => (line.len(), vec![]),
            },
            ([cmd, prefix], false) => match subcommands(*cmd) {
                Some(subs) => (start, pairs(subs, prefix)),
                None => (line.len(), vec![]),
            },
            _ => (line.len(), vec![]),
        }
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(Self::candidates(&line[..pos]))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellCompleter {}
impl Validator for ShellCompleter {}
impl Helper for ShellCompleter {}

/// Split a command line into arguments, honoring single and double quotes
fn parse_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    // A quoted empty string is still an argument
    let mut quoted = false;

    for c in line.chars() {
        match (c, quote) {
            ('"' | '\'', None) => {
                quote = Some(c);
                quoted = true;
            }
            (c, Some(q)) if c == q => quote = None,
            (c, None) if c.is_whitespace() => {
                if !current.is_empty() || quoted {
                    args.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() || quoted {
        args.push(current);
    }

    args
}

/// Run a single command in the shell.
/// Returns Ok(true) to continue, Ok(false) to exit.
async fn run_command(args: Vec<String>) -> Result<bool> {
    let Some(first) = args.first() else {
        return Ok(true);
    };

    match first.as_str() {
        "help" => {
            print_help();
            return Ok(true);
        }
        "exit" | "quit" => return Ok(false),
        _ => {}
    }

    let argv = std::iter::once("mealdeck".to_string()).chain(args);
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => {
            // clap's message carries the usage hint
            println!("{}", e);
            return Ok(true);
        }
    };

    let format = cli.output.format();
    let quiet = cli.output.quiet;

    match cli.command {
        Some(Commands::Meals { command }) => commands::meals::run(command, format, quiet).await?,
        Some(Commands::Favorites { command }) => {
            commands::favorites::run(command, format, quiet).await?
        }
        Some(Commands::Config { command }) => commands::config::run(command, format, quiet).await?,
        Some(Commands::Diag { command }) => commands::diag::run(command, format, quiet).await?,
        Some(Commands::Shell) => println!("Already in shell mode."),
        None => print_help(),
    }

    Ok(true)
}

fn print_help() {
    println!(
        r#"Mealdeck Interactive Shell

Commands:
  meals list [--search Q] [--category C] [--pages N]
                            List meals
  meals categories          List catalogue categories
  meals show <id>           Show a meal with its ingredients

  favorites list            List favorite meals
  favorites toggle <id>     Add or remove a favorite
  favorites check <id>      Check whether a meal is a favorite

  config show               Show current configuration
  config get <key>          Get a specific setting
  config set <key> <value>  Set a configuration value
  config path               Show config file path

  diag paths                Show all data paths
  diag check                Verify local state health

  help                      Show this help
  exit, quit                Exit the shell

Flags (can be added to any command):
  --json                    Output in JSON format
  --quiet, -q               Suppress non-essential output
"#
    );
}

/// Get the history file path
fn history_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "mealdeck", "Mealdeck")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}

/// Run the interactive shell
pub async fn run() -> Result<()> {
    println!("Mealdeck Interactive Shell v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for available commands, 'exit' to quit.\n");

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(ShellCompleter));

    if let Some(path) = history_path() {
        let _ = rl.load_history(&path);
    }

    loop {
        match rl.readline("mealdeck> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match run_command(parse_args(line)).await {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(&path);
    }

    Ok(())
}
