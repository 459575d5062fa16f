//! Interactive menu session around a [`TeamTree`].
//!
//! Reads raw lines from any `BufRead` and writes status lines to any `Write`,
//! so `main` wires it to stdin/stdout and tests drive it with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::application::{format_tree, ApplicationResult, IoResultExt};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{Side, TeamTree};

const MENU: [&str; 4] = [
    "1. Add Team Lead (root)",
    "2. Add Employee",
    "3. Print Team Structure",
    "4. Exit",
];

/// Whether the menu loop keeps going after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    tree: TeamTree,
    settings: Settings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            tree: TeamTree::new(),
            settings,
        }
    }

    pub fn tree(&self) -> &TeamTree {
        &self.tree
    }

    pub fn into_tree(self) -> TeamTree {
        self.tree
    }

    /// Run the menu loop until the user exits or input ends.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> ApplicationResult<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.ask("Choose an option (1-4):")? else {
                return self.good_bye();
            };
            debug!("Menu choice: {:?}", choice);

            let flow = match choice.as_str() {
                "1" => self.add_team_lead()?,
                "2" => self.add_employee()?,
                "3" => self.print_structure()?,
                "4" => Flow::Exit,
                _ => {
                    self.error("invalid choice: please enter a number 1-4")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return self.good_bye();
            }
        }
    }

    fn add_team_lead(&mut self) -> ApplicationResult<Flow> {
        let Some(name) = self.ask("Enter team lead's name:")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            self.error("name cannot be empty")?;
            return Ok(Flow::Continue);
        }
        if !self.tree.is_empty() && self.settings.confirm_replace {
            let Some(confirm) = self.ask("A team lead already exists. Replace it? (y/N):")? else {
                return Ok(Flow::Exit);
            };
            if !confirm.eq_ignore_ascii_case("y") {
                return Ok(Flow::Continue);
            }
        }
        if let Some(previous) = self.tree.set_root(&name) {
            info!("Team lead {} replaced by {}", previous.name, name);
        }
        self.success(&format!("{} added as the team lead.", name))?;
        Ok(Flow::Continue)
    }

    fn add_employee(&mut self) -> ApplicationResult<Flow> {
        if self.tree.is_empty() {
            self.error("please add a team lead first (option 1)")?;
            return Ok(Flow::Continue);
        }
        let Some(manager) = self.ask("Enter the manager's name:")? else {
            return Ok(Flow::Exit);
        };
        let Some(employee) = self.ask("Enter the new employee's name:")? else {
            return Ok(Flow::Exit);
        };
        let Some(side) = self.ask("Should this employee be on the LEFT or RIGHT of the manager?")? else {
            return Ok(Flow::Exit);
        };
        if employee.is_empty() {
            self.error("name cannot be empty")?;
            return Ok(Flow::Continue);
        }

        let result = side
            .parse::<Side>()
            .and_then(|side| self.tree.insert_at(&manager, &employee, side).map(|_| side));
        match result {
            Ok(side) => self.success(&format!("{} added to the {} of {}", employee, side, manager))?,
            Err(e) => {
                debug!("Insert rejected: {:?}", e);
                self.error(&e)?
            }
        }
        Ok(Flow::Continue)
    }

    fn print_structure(&mut self) -> ApplicationResult<Flow> {
        let lines = format_tree(&self.tree, &self.settings.display);
        output::info(&mut self.output, "").with_context("write output")?;
        output::header(&mut self.output, "Current Team Structure:").with_context("write output")?;
        for line in lines {
            output::info(&mut self.output, &line).with_context("write output")?;
        }
        output::info(&mut self.output, "").with_context("write output")?;
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> ApplicationResult<()> {
        output::info(&mut self.output, "").with_context("write output")?;
        output::header(&mut self.output, "Team Management Menu").with_context("write output")?;
        for entry in MENU {
            output::info(&mut self.output, entry).with_context("write output")?;
        }
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` on end of input.
    fn ask(&mut self, question: &str) -> ApplicationResult<Option<String>> {
        output::prompt(&mut self.output, question).with_context("write prompt")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).with_context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn good_bye(&mut self) -> ApplicationResult<()> {
        output::info(&mut self.output, "\nGood Bye!").with_context("write output")
    }

    fn error(&mut self, msg: &(impl std::fmt::Display + ?Sized)) -> ApplicationResult<()> {
        output::error(&mut self.output, msg).with_context("write output")
    }

    fn success(&mut self, msg: &(impl std::fmt::Display + ?Sized)) -> ApplicationResult<()> {
        output::success(&mut self.output, msg).with_context("write output")
    }
}
