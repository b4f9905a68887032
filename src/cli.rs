//! The command-line interface for `descent`.
//!
//! Usage (as with any other [`argh`] interface) involves first invoking [`argh::from_env()`], and
//! then processing the resulting data (in this case an instance of [`Cli`]).

#![allow(clippy::missing_docs_in_private_items)]

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use argh::FromArgs;

use crate::{
    parser::{Parser, Summary},
    source::{self, SourceError, SourceFile},
    trace::WriterSink,
};

/// Recognize integer arithmetic expressions, tracing every step of the derivation.
#[derive(Debug, Clone, FromArgs)]
pub struct Cli {
    #[argh(subcommand)]
    cmd: CliSubCommand,
}

impl Cli {
    /// Consumes `self` and processes the given subcommand.
    pub fn handle(self) -> anyhow::Result<()> {
        match self.cmd {
            CliSubCommand::Parse(args) => args.run(),
            CliSubCommand::Tokens(args) => args.run(),
            CliSubCommand::Prompt(args) => args.run(),
        }
    }
}

/// The set of the distinct subcommands available to be passed to the [`Cli`].
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand)]
enum CliSubCommand {
    Parse(Parse),
    Tokens(Tokens),
    Prompt(Prompt),
}

/// Parses each file, writing the derivation trace to stdout and diagnostics to stderr.
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand, name = "parse")]
struct Parse {
    /// print diagnostics only, without the derivation trace
    #[argh(switch, short = 'q')]
    quiet: bool,

    /// paths to the files to parse
    #[argh(positional)]
    files: Vec<PathBuf>,
}

impl Parse {
    /// Parses every file in turn, failing if any of them is rejected.
    fn run(self) -> anyhow::Result<()> {
        let mut rejected = Vec::new();

        for path in &self.files {
            let file = SourceFile::open(path)?;
            let summary = parse_file(&file, self.quiet)?;
            if !summary.is_accepted() {
                rejected.push(path.display().to_string());
            }
        }

        if !rejected.is_empty() {
            anyhow::bail!("rejected {}", rejected.join(", "));
        }
        Ok(())
    }
}

/// Prints every token of a file, one per line.
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand, name = "tokens")]
struct Tokens {
    /// a path to the file to scan
    #[argh(positional)]
    file: PathBuf,
}

impl Tokens {
    /// Scans the file, printing tokens to stdout and lexical errors to stderr.
    fn run(self) -> anyhow::Result<()> {
        let file = SourceFile::open(&self.file)?;
        let mut stdout = io::stdout().lock();
        let mut unclassified = 0usize;

        for result in file.lexer() {
            match result {
                Ok(token) => writeln!(stdout, "{token}")?,
                Err(err) => {
                    unclassified += 1;
                    eprintln!("{err}");
                }
            }
        }

        if unclassified > 0 {
            anyhow::bail!(
                "{} contains {unclassified} unclassified character(s)",
                self.file.display()
            );
        }
        Ok(())
    }
}

/// Repeatedly asks for the name of a .txt file (without its extension) and parses it,
/// until "exit" is entered.
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand, name = "prompt")]
struct Prompt {
    /// print diagnostics only, without the derivation trace
    #[argh(switch, short = 'q')]
    quiet: bool,
}

impl Prompt {
    /// Runs the interactive loop on stdin and stdout, reporting missing files on stderr.
    fn run(self) -> anyhow::Result<()> {
        prompt_for_files(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            &mut io::stderr(),
            |file| parse_file(file, self.quiet).map(drop),
        )
    }
}

/// Parses `file`, tracing to stdout unless `quiet`, with diagnostics on stderr.
fn parse_file(file: &SourceFile, quiet: bool) -> anyhow::Result<Summary> {
    let summary = if quiet {
        parse_with(file, io::sink())?
    } else {
        parse_with(file, io::stdout().lock())?
    };

    tracing::info!(
        path = %file.path().display(),
        expressions = summary.expressions(),
        rejected = summary.rejected(),
        unclassified = summary.lexical_errors().len(),
        "parsed source"
    );
    Ok(summary)
}

/// Parses `file` with its trace written to `trace`.
fn parse_with<W: Write>(file: &SourceFile, trace: W) -> anyhow::Result<Summary> {
    let mut sink = WriterSink::new(trace, io::stderr().lock());
    let summary = Parser::new(file.lexer(), &mut sink).parse();

    sink.finish()
        .with_context(|| format!("could not write output for {}", file.path().display()))?;
    Ok(summary)
}

/// Reads file names from `input` until "exit" or end of input, handing each
/// loaded file to `on_file`. Names are given without the `.txt` extension, and
/// missing files are reported to `errors`.
fn prompt_for_files<R, W, E, F>(
    input: &mut R,
    output: &mut W,
    errors: &mut E,
    mut on_file: F,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
    F: FnMut(&SourceFile) -> anyhow::Result<()>,
{
    loop {
        write!(
            output,
            "\nOnly .{} file will work. Do not include a file extension!\n\n\
             Input name of file to parse (Enter \"exit\" to exit): ",
            source::EXTENSION
        )?;
        output.flush()?;

        let mut buf = String::new();
        if input.read_line(&mut buf)? == 0 {
            break;
        }

        let name = buf.trim();
        if name.eq_ignore_ascii_case("exit") {
            break;
        }

        match SourceFile::open(source::resolve(name)) {
            Ok(file) => on_file(&file)?,
            Err(SourceError::NotFound { path }) => {
                tracing::warn!(path = %path.display(), "no such source file");
                writeln!(
                    errors,
                    "\nFile does not exist.\n Make sure to not include the \".{}\" part.",
                    source::EXTENSION
                )?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(output, "Exiting...")?;
    Ok(())
}
