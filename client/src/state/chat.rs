//! Conversation with the summary assistant about one badge holder.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

const NO_SUMMARY: &str = "No summary available";
const NO_RESPONSE: &str = "No response received";
const SUMMARY_FAILED: &str =
    "Sorry, I couldn't load the user summary at this time. Please try asking a specific question.";
const REPLY_FAILED: &str = "Sorry, I couldn't process your request at this time. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

/// Message history plus the in-flight flag for the open detail dialog.
#[derive(Clone, Debug, Default)]
pub struct SummaryChat {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl SummaryChat {
    /// Forget the conversation (dialog closed or another user selected).
    pub fn reset(&mut self) {
        self.messages.clear();
        self.loading = false;
    }

    /// Replace the history with the initial summary.
    pub fn set_summary(&mut self, summary: Option<String>) {
        let text = summary.filter(|s| !s.trim().is_empty()).unwrap_or_else(|| NO_SUMMARY.to_owned());
        self.messages = vec![ChatMessage::new(ChatRole::Assistant, text)];
        self.loading = false;
    }

    pub fn summary_failed(&mut self) {
        self.messages = vec![ChatMessage::new(ChatRole::Assistant, SUMMARY_FAILED)];
        self.loading = false;
    }

    /// Record a question. Returns the text to send, or `None` when blank or a
    /// reply is still pending.
    pub fn ask(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::User, text));
        self.loading = true;
        Some(text.to_owned())
    }

    pub fn reply(&mut self, response: Option<String>) {
        let text = response.filter(|s| !s.trim().is_empty()).unwrap_or_else(|| NO_RESPONSE.to_owned());
        self.messages.push(ChatMessage::new(ChatRole::Assistant, text));
        self.loading = false;
    }

    pub fn reply_failed(&mut self) {
        self.messages.push(ChatMessage::new(ChatRole::Assistant, REPLY_FAILED));
        self.loading = false;
    }
}
