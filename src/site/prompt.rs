//! User confirmations and one-shot notifications

/// Blocking questions and notices shown to the operator
pub trait Prompt {
    /// Ask a yes/no question; `true` means go ahead
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a one-shot notice
    fn notify(&mut self, message: &str);
}

/// Prompt that answers from a script and records every notice
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub answers: std::collections::VecDeque<bool>,
    pub questions: Vec<String>,
    pub notices: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
