use clap::{Args, CommandFactory, Parser, Subcommand};
use midiplay::commands::*;
use std::{io::Write, path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: CommonOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct CommonOptions {
    /// Log verbosity level
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Path to log file to write to
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Play a song on every MIDI destination
    Play(play::Options),
    /// Play a single note on every MIDI destination
    Note(note::Options),
    /// List the MIDI destinations
    List(list::Options),
    /// `midiplay completions --generate=zsh > midiplay.zsh`
    Completions(Completions),
}

#[derive(Debug, Parser)]
#[command(arg_required_else_help(true))]
struct Completions {
    /// shell to generate the completion script for
    #[arg(long = "generate", value_enum)]
    shell: Option<clap_complete::Shell>,
}

impl Completions {
    fn generate(&self) -> anyhow::Result<()> {
        let Some(shell) = self.shell else {
            anyhow::bail!("no shell specified for autocompletion generation");
        };

        let mut stdout = std::io::stdout();
        stdout.flush()?;

        let mut cli = Cli::command();
        clap_complete::generate(shell, &mut cli, "midiplay", &mut stdout);

        Ok(())
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    if let Commands::Completions(ref c) = args.command {
        return c.generate();
    }

    if let Some(log_file) = args.opts.log.or_else(midiplay::files::log) {
        midiplay::logger::start("midiplay", log_file, args.opts.verbose)?;
    }

    match args.command {
        Commands::Play(opts) => play::run(opts),
        Commands::Note(opts) => note::run(opts),
        Commands::List(opts) => list::run(opts),
        Commands::Completions(_) => Ok(()),
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let Err(e) = run(args) else {
        return ExitCode::SUCCESS;
    };

    if midiplay::logger::is_active() {
        log::error!("{e:#}");
    }

    use colored::*;
    eprintln!("{} {}", "Error:".red().bold(), format!("{e:#}").bold());
    ExitCode::FAILURE
}
