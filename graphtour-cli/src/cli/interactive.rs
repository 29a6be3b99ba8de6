//! Prompt-driven session: ask for parameters, generate once, then loop over
//! a numbered action menu until the user exits or input ends.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use graphtour_core::{
    DEFAULT_NON_HAMILTONIAN_SATURATION, GraphGenerator, GraphOperations, MIN_HAMILTONIAN_VERTICES,
    MIN_NON_HAMILTONIAN_VERTICES,
};
use tracing::{debug, info, instrument};

use super::commands::{Action, CliError, GraphKind, generate, parse_saturation};

const MENU: &str = "\
Choose operation:
1. Print graph
2. Find Euler cycle
3. Find Hamilton cycle
4. Exit";

/// What happened during an interactive session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SessionSummary {
    /// Kind of graph requested.
    pub kind: GraphKind,
    /// Vertex count of the generated graph, or `None` when input ended
    /// before a graph was generated.
    pub vertices: Option<usize>,
    /// Menu actions executed.
    pub commands: usize,
}

enum MenuChoice {
    Run(Action),
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "1" => Ok(Self::Run(Action::Print)),
            "2" => Ok(Self::Run(Action::Euler)),
            "3" => Ok(Self::Run(Action::Hamilton)),
            "4" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// Line-oriented terminal session over any reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Wraps `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the session to completion.
    ///
    /// Invalid parameters are reported and re-prompted; unknown menu choices
    /// print `Invalid choice`.
    ///
    /// # Errors
    /// Returns [`CliError::Session`] when the terminal streams fail.
    #[instrument(name = "cli.interactive", err, skip_all, fields(kind = %kind))]
    pub fn run(
        mut self,
        kind: GraphKind,
        generator: &mut GraphGenerator,
    ) -> Result<SessionSummary, CliError> {
        let mut summary = SessionSummary {
            kind,
            vertices: None,
            commands: 0,
        };

        let minimum = match kind {
            GraphKind::Hamiltonian => MIN_HAMILTONIAN_VERTICES,
            GraphKind::NonHamiltonian => MIN_NON_HAMILTONIAN_VERTICES,
        };
        let Some(nodes) = self.ask("nodes> ", |raw| parse_nodes(raw, minimum))? else {
            return Ok(summary);
        };
        let saturation = match kind {
            GraphKind::Hamiltonian => {
                let Some(saturation) = self.ask("saturation> ", |raw| {
                    parse_saturation(raw).map_err(|err| err.to_string())
                })?
                else {
                    return Ok(summary);
                };
                saturation
            }
            GraphKind::NonHamiltonian => DEFAULT_NON_HAMILTONIAN_SATURATION,
        };

        let generated = generate(generator, kind, nodes, saturation)?;
        let operations = GraphOperations::new(generated.into_graph());
        summary.vertices = Some(nodes);
        self.say(&format!(
            "Generated {kind} graph with {} vertices and {} edges",
            operations.graph().vertex_count(),
            operations.graph().edge_count()
        ))?;

        loop {
            self.say("")?;
            self.say(MENU)?;
            let Some(line) = self.read_line("Your choice> ")? else {
                break;
            };
            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Run(action)) => {
                    debug!(?action, "running menu action");
                    let outcome = action.perform(&operations);
                    self.say(&outcome.to_string())?;
                    summary.commands += 1;
                }
                Ok(MenuChoice::Exit) => break,
                Err(()) => self.say("Invalid choice")?,
            }
        }

        info!(commands = summary.commands, "interactive session finished");
        Ok(summary)
    }

    /// Prompts until `parse` accepts a line. Returns `None` at end of input.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<Option<T>, CliError> {
        while let Some(line) = self.read_line(prompt)? {
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => self.say(&message)?,
            }
        }
        Ok(None)
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{prompt}").and_then(|()| self.output.flush()).map_err(session)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(session)?;
        if read == 0 {
            // Terminate the dangling prompt so later output starts cleanly.
            writeln!(self.output).map_err(session)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn say(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.output, "{text}").map_err(session)
    }
}

fn session(source: io::Error) -> CliError {
    CliError::Session { source }
}

fn parse_nodes(raw: &str, minimum: usize) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(nodes) if nodes >= minimum => Ok(nodes),
        Ok(_) => Err(format!("Number of nodes must be at least {minimum}")),
        Err(_) => Err("Please enter a whole number".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", 11, Ok(12))]
    #[case("10", 11, Err("Number of nodes must be at least 11".to_owned()))]
    #[case("two", 2, Err("Please enter a whole number".to_owned()))]
    fn parse_nodes_enforces_minimum(
        #[case] raw: &str,
        #[case] minimum: usize,
        #[case] expected: Result<usize, String>,
    ) {
        assert_eq!(parse_nodes(raw, minimum), expected);
    }

    #[rstest]
    #[case(" 1 ", true)]
    #[case("4", true)]
    #[case("5", false)]
    #[case("", false)]
    fn menu_choices_cover_four_entries(#[case] raw: &str, #[case] valid: bool) {
        assert_eq!(raw.parse::<MenuChoice>().is_ok(), valid);
    }
}
