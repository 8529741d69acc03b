//! The question payload: models, the bundled JSON asset, and load-time
//! validation.
//!
//! The exam content lives in `data/questions.json` rather than inline in the
//! seeding code, so the reset procedure and the content can change
//! independently. [`Payload::load`] parses the bundled asset and validates
//! the invariants the rest of the application assumes: question ids unique,
//! step ids unique within a question, no empty step lists, no blank text.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// The bundled exam content, compiled into the binary.
const QUESTIONS_JSON: &str = include_str!("../data/questions.json");

/// One step of an exam scenario, performed in ascending `id` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Position within the parent question's step list.
    pub id: u32,
    /// The task prompt shown to the candidate.
    pub instruction: String,
    /// The expected command or input.
    pub answer: String,
    /// Rationale for the answer.
    pub explanation: String,
}

/// A practice exam scenario: a titled, ordered sequence of steps.
///
/// `id` is assigned by the content author and is unique within the payload;
/// MongoDB assigns its own `_id` on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub title: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate question id {0}")]
    DuplicateQuestionId(u32),

    #[error("question {question} has duplicate step id {step}")]
    DuplicateStepId { question: u32, step: u32 },

    #[error("question {0} has no steps")]
    EmptySteps(u32),

    #[error("question {question} step {step} has an empty {field}")]
    EmptyField {
        question: u32,
        step: u32,
        field: &'static str,
    },
}

/// A validated set of questions ready for insertion.
#[derive(Debug, Clone)]
pub struct Payload {
    questions: Vec<Question>,
}

impl Payload {
    /// Loads and validates the bundled question set.
    pub fn load() -> Result<Self, PayloadError> {
        Self::from_json_str(QUESTIONS_JSON)
    }

    /// Parses and validates a payload from caller-supplied JSON.
    pub fn from_json_str(json: &str) -> Result<Self, PayloadError> {
        let raw: RawPayload = serde_json::from_str(json)?;
        validate(&raw.questions)?;
        Ok(Self {
            questions: raw.questions,
        })
    }

    /// The validated questions, in payload order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Deserialize)]
struct RawPayload {
    questions: Vec<Question>,
}

/// Checks the invariants the content author is responsible for upholding.
fn validate(questions: &[Question]) -> Result<(), PayloadError> {
    let mut question_ids = HashSet::new();

    for question in questions {
        if !question_ids.insert(question.id) {
            return Err(PayloadError::DuplicateQuestionId(question.id));
        }

        if question.steps.is_empty() {
            return Err(PayloadError::EmptySteps(question.id));
        }

        let mut step_ids = HashSet::new();
        for step in &question.steps {
            if !step_ids.insert(step.id) {
                return Err(PayloadError::DuplicateStepId {
                    question: question.id,
                    step: step.id,
                });
            }

            for (field, value) in [
                ("instruction", &step.instruction),
                ("answer", &step.answer),
                ("explanation", &step.explanation),
            ] {
                if value.trim().is_empty() {
                    return Err(PayloadError::EmptyField {
                        question: question.id,
                        step: step.id,
                        field,
                    });
                }
            }
        }
    }

    Ok(())
}
