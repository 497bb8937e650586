//! The interactive menu loop.

use std::fmt;
use std::io::{self, Write};

use bacon_core::{CipherError, decrypt, encrypt};
use log::{debug, info, warn};
use serde::Serialize;

use crate::line_source::LineSource;

const WELCOME: &str = "!Welcome to the Baconian Cipher!\n";

const MENU: &str = "Please choose one of the following numbers\n\
                    1. Encrypt your message (plain text -> ciphertext) \n\
                    2. Decrypt your message (ciphertext -> plain text)\n\
                    3. Exit\n\
                    Number:\n";

const MENU_RETRY: &str = "Enter 1, 2 or 3:\n";

/// A cipher operation the user can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    pub(crate) fn apply(self, text: &str) -> Result<String, CipherError> {
        match self {
            Self::Encrypt => encrypt(text),
            Self::Decrypt => decrypt(text),
        }
    }

    const fn prompt(self) -> &'static str {
        match self {
            Self::Encrypt => "Enter plain text:",
            Self::Decrypt => "Enter ciphertext:",
        }
    }

    const fn result_header(self) -> &'static str {
        match self {
            Self::Encrypt => "Your ciphertext is:",
            Self::Decrypt => "Original plain text:",
        }
    }

    /// The fixed message shown when the input is rejected.
    pub(crate) const fn failure_message(self) -> &'static str {
        match self {
            Self::Encrypt => "Incorrect plain text format..",
            Self::Decrypt => "Incorrect ciphertext format..",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuOption {
    Encrypt,
    Decrypt,
    Exit,
}

impl MenuOption {
    /// Parses a menu answer. Only the exact lines `1`, `2` and `3` are accepted.
    pub(crate) fn parse(line: &str) -> Option<Self> {
        match line {
            "1" => Some(Self::Encrypt),
            "2" => Some(Self::Decrypt),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }

    const fn operation(self) -> Option<Operation> {
        match self {
            Self::Encrypt => Some(Operation::Encrypt),
            Self::Decrypt => Some(Operation::Decrypt),
            Self::Exit => None,
        }
    }
}

/// Runs the menu against a line source, writing prompts and results to `out`.
pub(crate) struct Session<S, W> {
    source: S,
    out: W,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub(crate) const fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    /// Runs until the user picks `3` or the input runs out.
    pub(crate) fn run(mut self) -> io::Result<()> {
        self.out.write_all(WELCOME.as_bytes())?;
        while let Some(option) = self.read_menu_option()? {
            let Some(operation) = option.operation() else {
                info!("Exit selected from the menu.");
                return Ok(());
            };
            if !self.run_operation(operation)? {
                break;
            }
        }
        debug!("Input ended before the exit option was chosen.");
        Ok(())
    }

    /// Returns `false` if the input ended before a line was read.
    fn run_operation(&mut self, operation: Operation) -> io::Result<bool> {
        writeln!(self.out, "{}", operation.prompt())?;
        self.out.flush()?;
        let Some(text) = self.source.next_line()? else {
            return Ok(false);
        };
        match operation.apply(&text) {
            Ok(output) => {
                write!(self.out, "{}\n{output}\n\n", operation.result_header())?;
            }
            Err(e) => {
                warn!("Rejected {operation} input: {e}");
                write!(
                    self.out,
                    "{} Please try again\n\n",
                    operation.failure_message()
                )?;
            }
        }
        Ok(true)
    }

    fn read_menu_option(&mut self) -> io::Result<Option<MenuOption>> {
        self.out.write_all(MENU.as_bytes())?;
        self.out.flush()?;
        loop {
            let Some(line) = self.source.next_line()? else {
                return Ok(None);
            };
            if let Some(option) = MenuOption::parse(&line) {
                return Ok(Some(option));
            }
            debug!("Invalid menu answer: {line:?}");
            self.out.write_all(MENU_RETRY.as_bytes())?;
            self.out.flush()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MENU, MENU_RETRY, MenuOption, Session, WELCOME};

    fn run_session(input: &str) -> String {
        let mut out = Vec::new();
        Session::new(input.as_bytes(), &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_option_parsing() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::Encrypt));
        assert_eq!(MenuOption::parse("2"), Some(MenuOption::Decrypt));
        assert_eq!(MenuOption::parse("3"), Some(MenuOption::Exit));
        for rejected in ["", "0", "4", "12", " 1", "1 ", "one"] {
            assert_eq!(MenuOption::parse(rejected), None, "{rejected:?}");
        }
    }

    #[test]
    fn test_exit_immediately() {
        assert_eq!(run_session("3\n"), format!("{WELCOME}{MENU}"));
    }

    #[test]
    fn test_encrypt_then_exit() {
        let output = run_session("1\nHello World\n3\n");
        assert_eq!(
            output,
            format!(
                "{WELCOME}{MENU}Enter plain text:\nYour ciphertext is:\n\
                 AABBBAABAAABABBABABBABBBA BABBAABBBABAAABABABBAAABB\n\n{MENU}"
            )
        );
    }

    #[test]
    fn test_decrypt_then_exit() {
        let output = run_session("2\nAAAAA AAAAB\n3\n");
        assert!(output.contains("Enter ciphertext:\nOriginal plain text:\nA B\n\n"));
    }

    #[test]
    fn test_rejected_input_returns_to_menu() {
        let output = run_session("1\nA  B\n2\nAAAA\n3\n");
        assert!(output.contains("Incorrect plain text format.. Please try again\n\n"));
        assert!(output.contains("Incorrect ciphertext format.. Please try again\n\n"));
        assert_eq!(output.matches(MENU).count(), 3);
    }

    #[test]
    fn test_non_utf8_input_is_rejected_and_the_menu_continues() {
        let mut out = Vec::new();
        let result = Session::new(b"1\n\xffabc\n3\n".as_slice(), &mut out).run();
        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            format!(
                "{WELCOME}{MENU}Enter plain text:\n\
                 Incorrect plain text format.. Please try again\n\n{MENU}"
            )
        );
    }

    #[test]
    fn test_invalid_menu_answers_reprompt() {
        let output = run_session("9\nabc\n3\n");
        assert_eq!(output, format!("{WELCOME}{MENU}{MENU_RETRY}{MENU_RETRY}"));
    }

    #[test]
    fn test_end_of_input_stops_the_session() {
        assert_eq!(run_session(""), format!("{WELCOME}{MENU}"));
        assert_eq!(
            run_session("1\n"),
            format!("{WELCOME}{MENU}Enter plain text:\n")
        );
    }
}
