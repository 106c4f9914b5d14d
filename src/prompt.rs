//! Interactive yes/no confirmation.
//!
//! Prompting is the one piece of terminal interaction that tests cannot
//! drive, so it sits behind the [`Prompter`] trait. Production code uses
//! [`TerminalPrompter`] (backed by `dialoguer`); tests inject scripted
//! answers.

use anyhow::Result;
use dialoguer::Confirm;

/// Ask a yes/no question with a default answer, blocking until answered.
pub trait Prompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// [`Prompter`] backed by a `dialoguer` confirm prompt on the controlling
/// terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

#[cfg(test)]
pub mod testing {
    //! Prompter stubs shared by module tests.

    use super::Prompter;
    use anyhow::Result;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers every confirmation with a fixed value.
    pub struct AlwaysPrompter(pub bool);

    impl Prompter for AlwaysPrompter {
        fn confirm(&self, _message: &str, _default: bool) -> Result<bool> {
            Ok(self.0)
        }
    }

    /// Pops pre-scripted answers in order; panics when asked more
    /// questions than scripted.
    pub struct ScriptedPrompter {
        answers: RefCell<VecDeque<bool>>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[bool]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
            Ok(self
                .answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected prompt: {message}")))
        }
    }

    /// Fails the test if any confirmation is requested at all.
    pub struct NoPromptExpected;

    impl Prompter for NoPromptExpected {
        fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
            panic!("no prompt expected, got: {message}");
        }
    }
}
