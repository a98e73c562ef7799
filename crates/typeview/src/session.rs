//! The single enter-then-view interaction
//!
//! A [`Session`] walks a linear state machine:
//!
//! ```text
//! AwaitSourceType -> AwaitRawValue -> Coerce -> AwaitTargetType
//!     -> ValidateCompatibility -> Render -> Done
//! ```
//!
//! Any failure moves straight to `Rejected`; the error is reported through
//! the output collaborator and no further prompts are issued.

use std::fmt;

use typeview_diagnostics::{Result, TypeRole, TypeviewError};
use typeview_types::{CompatibilityMatrix, PrimitiveType, TypedValue, format, parse, render};

use crate::io::{Input, Output};

/// Prompt for the raw value
pub const VALUE_PROMPT: &str = "Enter the value";

/// Prompt for the declared type of the value
pub fn source_prompt() -> String {
    format!(
        "Which data type do you want to enter? ({})",
        PrimitiveType::choices()
    )
}

/// Prompt for the type to view the value as
pub fn target_prompt() -> String {
    format!(
        "Which data type do you want to view it as? ({})",
        PrimitiveType::choices()
    )
}

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitSourceType,
    AwaitRawValue,
    Coerce,
    AwaitTargetType,
    ValidateCompatibility,
    Render,
    Done,
    Rejected,
}

impl State {
    /// Check if no further interaction can happen
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Rejected)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitSourceType => "await-source-type",
            Self::AwaitRawValue => "await-raw-value",
            Self::Coerce => "coerce",
            Self::AwaitTargetType => "await-target-type",
            Self::ValidateCompatibility => "validate-compatibility",
            Self::Render => "render",
            Self::Done => "done",
            Self::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value was rendered under the target type and displayed
    Done(TypedValue),
    /// The run stopped at the first error; nothing was displayed
    Rejected(TypeviewError),
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// The displayed value, if any
    pub fn value(&self) -> Option<&TypedValue> {
        match self {
            Self::Done(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// The error that ended the run, if any
    pub fn error(&self) -> Option<&TypeviewError> {
        match self {
            Self::Done(_) => None,
            Self::Rejected(err) => Some(err),
        }
    }
}

/// One enter-then-view interaction over injected collaborators
pub struct Session<'a> {
    input: &'a mut dyn Input,
    output: &'a mut dyn Output,
    matrix: &'static CompatibilityMatrix,
    state: State,
}

impl<'a> Session<'a> {
    /// Create a session using the standard compatibility table
    pub fn new(input: &'a mut dyn Input, output: &'a mut dyn Output) -> Self {
        Self {
            input,
            output,
            matrix: CompatibilityMatrix::standard(),
            state: State::AwaitSourceType,
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Run the interaction to completion.
    ///
    /// A rejection is reported through the output collaborator before
    /// returning. Running an already finished session prompts for nothing
    /// and is rejected with a system error, reported the same way.
    pub fn run(&mut self) -> Outcome {
        if self.state.is_terminal() {
            let err = TypeviewError::system(
                typeview_diagnostics::TV0400,
                "session already finished",
            );
            self.report(&err);
            return Outcome::Rejected(err);
        }

        match self.drive() {
            Ok(value) => {
                self.enter(State::Done);
                Outcome::Done(value)
            }
            Err(err) => {
                log::info!("rejected in {}: {}", self.state, err);
                self.enter(State::Rejected);
                self.report(&err);
                Outcome::Rejected(err)
            }
        }
    }

    fn report(&mut self, err: &TypeviewError) {
        if let Err(report_err) = self.output.report(err) {
            log::error!("failed to report error: {}", report_err);
        }
    }

    fn drive(&mut self) -> Result<TypedValue> {
        let token = self.input.request_text(&source_prompt())?;
        let source = PrimitiveType::resolve(&token, TypeRole::Source)?;
        log::debug!("source type: {}", source);

        self.enter(State::AwaitRawValue);
        let raw = self.input.request_text(VALUE_PROMPT)?;

        self.enter(State::Coerce);
        let value = parse(&raw, source)?;

        self.enter(State::AwaitTargetType);
        let token = self.input.request_text(&target_prompt())?;
        let target = PrimitiveType::resolve(&token, TypeRole::Target)?;
        log::debug!("target type: {}", target);

        self.enter(State::ValidateCompatibility);
        self.matrix.check(source, target)?;

        self.enter(State::Render);
        let rendered = render(&value, target)?;
        self.output.display(target, &format(&rendered))?;

        Ok(rendered)
    }

    fn enter(&mut self, state: State) {
        log::debug!("{} -> {}", self.state, state);
        self.state = state;
    }
}
