//! Mock collaborators for driving a session without a terminal

use std::collections::VecDeque;
use typeview::{Input, Output, PrimitiveType, Result, TypeviewError};

/// Answers prompts from a fixed script and records every prompt shown
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

impl Input for ScriptedInput {
    fn request_text(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        // An exhausted script behaves like a cancelled dialog
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Records displayed values and reported errors
#[derive(Default)]
pub struct RecordingOutput {
    pub displayed: Vec<(PrimitiveType, String)>,
    pub reported: Vec<TypeviewError>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Output for RecordingOutput {
    fn display(&mut self, kind: PrimitiveType, text: &str) -> Result<()> {
        self.displayed.push((kind, text.to_string()));
        Ok(())
    }

    fn report(&mut self, error: &TypeviewError) -> Result<()> {
        self.reported.push(error.clone());
        Ok(())
    }
}

/// Input whose terminal has gone away
pub struct BrokenInput;

impl Input for BrokenInput {
    fn request_text(&mut self, _prompt: &str) -> Result<String> {
        Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "terminal closed").into())
    }
}
