// In-memory port fakes shared by interactor tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::model::Invocation;
use crate::error::{GrabError, GrabResult};
use crate::ports::{CapturedOutput, ConsolePort, ProcessPort};

/// Process port replaying canned outputs and recording every call
pub struct ScriptedProcess {
    outputs: Mutex<VecDeque<CapturedOutput>>,
    forward_exit: Option<i32>,
    captured: Mutex<Vec<Invocation>>,
    forwarded: Mutex<Vec<Invocation>>,
}

impl ScriptedProcess {
    pub fn new(outputs: Vec<CapturedOutput>) -> Self {
        Self::with_forward_exit(outputs, Some(0))
    }

    pub fn with_forward_exit(outputs: Vec<CapturedOutput>, forward_exit: Option<i32>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            forward_exit,
            captured: Mutex::new(Vec::new()),
            forwarded: Mutex::new(Vec::new()),
        }
    }

    pub fn captured_calls(&self) -> Vec<Invocation> {
        self.captured.lock().unwrap().clone()
    }

    pub fn forwarded_calls(&self) -> Vec<Invocation> {
        self.forwarded.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessPort for ScriptedProcess {
    async fn capture(&self, invocation: &Invocation) -> GrabResult<CapturedOutput> {
        self.captured.lock().unwrap().push(invocation.clone());
        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GrabError::external(&invocation.program, "no scripted output left"))
    }

    async fn forward(&self, invocation: &Invocation) -> GrabResult<Option<i32>> {
        self.forwarded.lock().unwrap().push(invocation.clone());
        Ok(self.forward_exit)
    }
}

/// Console port answering from a fixed list; an exhausted list reads as blank
pub struct ScriptedConsole {
    answers: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Rendered prompts and shown text, in order
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConsolePort for ScriptedConsole {
    async fn ask_optional(&self, label: &str, default: &str) -> GrabResult<Option<String>> {
        self.transcript
            .lock()
            .unwrap()
            .push(crate::adapters::console_stdio::render_prompt(label, default));

        let answer = self.answers.lock().unwrap().pop_front().unwrap_or_default();
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            None
        } else {
            Some(answer.to_string())
        })
    }

    async fn show(&self, text: &str) -> GrabResult<()> {
        self.transcript.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
