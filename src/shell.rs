use std::error::Error;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;
use rustyline::Editor;
use thiserror::Error;

use crate::execution;
use crate::fixed_point::{self, Status};
use crate::interpreter::InterpretError;
use crate::io::OutputStream;
use crate::journal::Journal;
use crate::syntax::{self, SyntaxError};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetInput(String),
    Load(PathBuf),
    ShowSource,
    ShowProgram,
    Quine,
    Reset,
    Run(String),
}

impl Command {
    pub fn parse(line: &str) -> syntax::Result<Command> {
        syntax::parse(parse::input_line, line)
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Parse error: {0}")]
    Parse(#[from] SyntaxError),

    #[error("Interpretation error: {0}")]
    Interpret(#[from] InterpretError),

    #[error("Failed to load {}: {source}", .path.display())]
    Load { path: PathBuf, source: io::Error },
}

/// Interactive front-end: holds the source text being wrapped and the
/// current user input.
pub struct Shell<J> {
    default_source: String,
    source: String,
    input: Option<String>,
    journal: J,
}

impl<J> Shell<J>
where
    J: Journal,
{
    pub fn new(default_source: impl Into<String>, journal: J) -> Self {
        let default_source = default_source.into();
        Shell {
            source: default_source.clone(),
            default_source,
            input: None,
            journal,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn execute<O>(&mut self, command: Command, output: &mut O) -> Result<(), CommandError>
    where
        O: OutputStream,
    {
        match command {
            Command::SetInput(text) if text.is_empty() => self.input = None,
            Command::SetInput(text) => self.input = Some(text),
            Command::Load(path) => {
                self.source = fixed_point::read_source(&path)
                    .map_err(|source| CommandError::Load { path, source })?;
            }
            Command::ShowSource => {
                for line in self.source.lines() {
                    output.write(line.to_string());
                }
            }
            Command::ShowProgram => {
                let program = fixed_point::fixed_point_program(&self.source, self.input());
                output.write(program.to_string());
            }
            Command::Quine => {
                let run = fixed_point::run_on_source(&self.source, self.input());
                if let Err(e) = run.record("quine", &mut self.journal) {
                    output.write(format!("Warning: failed to write journal: {}", e));
                }

                match run.status {
                    Status::Success => {
                        for line in run.output.lines() {
                            output.write(line.to_string());
                        }
                    }
                    Status::Failure(e) => return Err(e.into()),
                }
            }
            Command::Reset => {
                self.source = self.default_source.clone();
                self.input = None;
            }
            Command::Run(program) => {
                execution::run(&program, output)?;
            }
        }

        Ok(())
    }

    pub fn run(&mut self, history: &Path) -> Result<(), Box<dyn Error>> {
        let mut rl = Editor::<()>::new();
        if rl.load_history(history).is_err() {
            println!("No previous history.");
        }

        let mut stdout: Stdout = io::stdout();
        loop {
            let readline = rl.readline(">> ");
            match readline {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => {
                    rl.add_history_entry(line.as_str());

                    let result = Command::parse(line.as_str())
                        .map_err(CommandError::from)
                        .and_then(|command| self.execute(command, &mut stdout));

                    if let Err(e) = result {
                        println!("{}", e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        rl.save_history(history)?;

        Ok(())
    }
}

mod parse {
    // Input ::= SetInput | Load | ShowSource | ShowProgram | Quine | Reset | Run
    // SetInput ::= ':input' Text
    // Load ::= ':load' Path
    // ShowSource ::= ':source'
    // ShowProgram ::= ':gen'
    // Quine ::= ':quine'
    // Reset ::= ':reset'
    // Run ::= Text    (TinyLang line, must not start with ':')

    use std::path::PathBuf;

    use super::Command;
    use crate::syntax::{key, spaces, Input, Parsed};

    use nom::branch::alt;
    use nom::combinator::{map, rest, verify};
    use nom::sequence::preceded;

    pub fn input_line(input: Input) -> Parsed<Command> {
        alt((
            command(":input", map(rest, |text: &str| Command::SetInput(text.trim().to_string()))),
            command(
                ":load",
                map(verify(rest, |text: &str| !text.trim().is_empty()), |text: &str| {
                    Command::Load(PathBuf::from(text.trim()))
                }),
            ),
            command(":source", map(spaces, |_| Command::ShowSource)),
            command(":gen", map(spaces, |_| Command::ShowProgram)),
            command(":quine", map(spaces, |_| Command::Quine)),
            command(":reset", map(spaces, |_| Command::Reset)),
            map(verify(rest, |text: &str| !text.trim_start().starts_with(':')), |text: &str| {
                Command::Run(text.to_string())
            }),
        ))(input)
    }

    fn command<'a, P>(prefix: &'a str, parser: P) -> impl Fn(Input<'a>) -> Parsed<'a, Command>
    where
        P: Fn(Input<'a>) -> Parsed<'a, Command>,
    {
        preceded(key(prefix), parser)
    }
}
