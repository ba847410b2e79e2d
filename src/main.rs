mod report;

use doorspec::{Mode, Options, Policy, Transcript, extract_verbose_with};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DOORSPEC_LOG";

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let res = if config.transcript {
        let transcript = match Transcript::from_json(&config.input) {
            Ok(transcript) => transcript,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(2);
            }
        };
        extract_verbose_with(transcript.corpus_sources(), &config.options)
    } else {
        extract_verbose_with([config.input.as_str()], &config.options)
    };
    tracing::debug!(elapsed = ?res.elapsed, mode = %res.options.mode, "extraction finished");

    match config.output {
        Output::Json => println!("{}", res.spec.to_json_pretty()),
        Output::Text => print!("{}", res.spec),
        Output::Report => report::print_run(&config.input, &res, config.color),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Report,
    Json,
    Text,
}

struct CliConfig {
    input: String,
    options: Options,
    transcript: bool,
    output: Output,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut mode: Option<Mode> = None;
    let mut policy: Option<Policy> = None;
    let mut transcript = false;
    let mut output = Output::Report;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("doorspec {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => output = Output::Json,
            "--text" => output = Output::Text,
            "--transcript" => transcript = true,
            "--mode" => {
                let value = args.next().ok_or_else(|| "error: --mode expects a value".to_string())?;
                mode = Some(value.parse().map_err(|err| format!("error: {err}"))?);
            }
            "--policy" => {
                let value = args.next().ok_or_else(|| "error: --policy expects a value".to_string())?;
                policy = Some(value.parse().map_err(|err| format!("error: {err}"))?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--mode=") => {
                let value = arg.trim_start_matches("--mode=");
                mode = Some(value.parse().map_err(|err| format!("error: {err}"))?);
            }
            _ if arg.starts_with("--policy=") => {
                let value = arg.trim_start_matches("--policy=");
                policy = Some(value.parse().map_err(|err| format!("error: {err}"))?);
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    let base = if transcript { Options::conversation() } else { Options::document() };
    let options = Options { mode: mode.unwrap_or(base.mode), policy: policy.unwrap_or(base.policy) };

    Ok(CliConfig { input, options, transcript, output, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "doorspec {version}

Extracts an MCC door specification from a document or a chat transcript.

Usage:
  doorspec [OPTIONS] [--] <text...>
  doorspec [OPTIONS] --input <text>
  doorspec --transcript [OPTIONS] < transcript.json

Options:
  -i, --input <text>         Input to extract from. If omitted, reads remaining
                             args or stdin when no args are provided.
  --transcript               Treat the input as a JSON transcript
                             ([{{\"role\": ..., \"content\": ...}}]). Defaults to
                             conversation mode with the lenient policy.
  --mode <document|conversation>
                             Extraction mode. Default: document.
  --policy <strict|lenient>  Completion policy. Default: strict.
  --json                     Print the record as JSON.
  --text                     Print the record as key: value text.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}               Log filter (e.g. debug, doorspec=trace). Default: warn.

Exit codes:
  0  Success.
  2  Invalid arguments, missing input or malformed transcript.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
