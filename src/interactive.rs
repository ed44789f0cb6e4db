//! Interactive prompting for required fields the caller left out.
use crate::schema::Inputs;
use anyhow::{anyhow, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Source of answers for missing fields.
pub trait Prompter {
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Terminal prompter backed by a line editor. The editor is created on the
/// first question so fully-specified runs never touch the terminal.
#[derive(Default)]
pub struct LinePrompter {
    editor: Option<DefaultEditor>,
}

impl Prompter for LinePrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        if self.editor.is_none() {
            self.editor = Some(DefaultEditor::new()?);
        }
        let Some(editor) = self.editor.as_mut() else {
            return Err(anyhow!("line editor unavailable"));
        };
        match editor.readline(&format!("{message} ")) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                Err(anyhow!("input cancelled at {message:?}"))
            }
            Err(err) => Err(err.into()),
        }
    }
}

struct RequiredField {
    name: &'static str,
    flag: &'static str,
    message: &'static str,
}

const PROJECT_NAME: RequiredField = RequiredField {
    name: "project_name",
    flag: "--project-name",
    message: "Project name:",
};

const END_GOALS: RequiredField = RequiredField {
    name: "end_goals",
    flag: "--end-goals",
    message: "End goals:",
};

/// Ask for `project_name` and `end_goals` when they are blank.
///
/// With no prompter (`--no-input`) a blank field is an error naming its flag.
/// Answers are trimmed and must be non-empty.
pub fn fill_required(inputs: &mut Inputs, mut prompter: Option<&mut dyn Prompter>) -> Result<()> {
    for (field, value) in [
        (PROJECT_NAME, &mut inputs.project_name),
        (END_GOALS, &mut inputs.end_goals),
    ] {
        if !value.trim().is_empty() {
            continue;
        }
        let Some(prompter) = prompter.as_deref_mut() else {
            return Err(anyhow!(
                "{} is required (pass {} or run without --no-input)",
                field.name,
                field.flag
            ));
        };
        let answer = prompter.ask(field.message)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(anyhow!("{} must be non-empty", field.name));
        }
        tracing::debug!(field = field.name, "filled from prompt");
        *value = answer.to_string();
    }
    Ok(())
}
