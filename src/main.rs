use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use fixpoint::fixed_point::{self, Run};
use fixpoint::journal::{FileJournal, Journal, NullJournal};
use fixpoint::shell::Shell;
use fixpoint::Program;

/// What gets wrapped when no `--source` is given: this very file.
const OWN_SOURCE: &str = include_str!("main.rs");

/// Runs TinyLang programs which print the text they were generated from
#[derive(Parser)]
#[command(name = "fixpoint", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap a source text into a self-printing program and run it
    Run {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        journal: JournalArgs,
    },
    /// Print the self-printing program without running it
    Generate {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Interpret a TinyLang program file
    Exec {
        /// Path to the TinyLang program
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        journal: JournalArgs,
    },
    /// Start an interactive shell
    Shell {
        /// Line editor history file
        #[arg(long, value_name = "FILE", default_value = "history.txt")]
        history: PathBuf,

        #[command(flatten)]
        journal: JournalArgs,
    },
}

#[derive(Args, Default)]
struct SourceArgs {
    /// Text file to wrap, defaults to this program's own source
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// User input, appended to the wrapped text
    #[arg(value_name = "INPUT")]
    input: Vec<String>,
}

impl SourceArgs {
    fn read(&self) -> std::io::Result<String> {
        match &self.source {
            Some(path) => fixed_point::read_source(path),
            None => Ok(OWN_SOURCE.to_string()),
        }
    }

    fn input(&self) -> Option<String> {
        if self.input.is_empty() {
            None
        } else {
            Some(self.input.join(" "))
        }
    }
}

#[derive(Args, Default)]
struct JournalArgs {
    /// File receiving one record per run
    #[arg(long, value_name = "FILE", env = "FIXPOINT_JOURNAL")]
    journal: Option<PathBuf>,
}

impl JournalArgs {
    fn from_env() -> Self {
        JournalArgs {
            journal: std::env::var_os("FIXPOINT_JOURNAL").map(PathBuf::from),
        }
    }

    fn open(&self) -> Box<dyn Journal> {
        match &self.journal {
            Some(path) => Box::new(FileJournal::new(path)),
            None => Box::new(NullJournal),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run { source, journal }) => run(&source, &journal),
        Some(Commands::Generate { source }) => generate(&source),
        Some(Commands::Exec { file, journal }) => exec(&file, &journal),
        Some(Commands::Shell { history, journal }) => shell(&history, &journal),
        None => run(&SourceArgs::default(), &JournalArgs::from_env()),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Failure: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(source: &SourceArgs, journal: &JournalArgs) -> Result<u8, Box<dyn Error>> {
    let text = source.read()?;
    let run = fixed_point::run_on_source(&text, source.input().as_deref());
    Ok(report(&run, "run", journal))
}

fn generate(source: &SourceArgs) -> Result<u8, Box<dyn Error>> {
    let text = source.read()?;
    println!(
        "{}",
        fixed_point::fixed_point_program(&text, source.input().as_deref())
    );
    Ok(0)
}

fn exec(file: &Path, journal: &JournalArgs) -> Result<u8, Box<dyn Error>> {
    let text = fixed_point::read_source(file)?;
    let run = Run::of(Program::new(text));
    Ok(report(&run, "exec", journal))
}

fn shell(history: &Path, journal: &JournalArgs) -> Result<u8, Box<dyn Error>> {
    let mut journal = journal.open();
    Shell::new(OWN_SOURCE, &mut journal).run(history)?;
    Ok(0)
}

/// Prints the outcome, hands it to the journal and returns the exit code.
fn report(run: &Run, action: &str, journal: &JournalArgs) -> u8 {
    match &run.status {
        fixed_point::Status::Success => println!("{}", run.output),
        fixed_point::Status::Failure(e) => eprintln!("Failure: {}", e),
    }

    if let Err(e) = run.record(action, &mut journal.open()) {
        eprintln!("Warning: failed to write journal: {}", e);
    }

    run.exit_code()
}
