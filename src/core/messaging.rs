use crate::domain::model::Message;
use std::collections::HashMap;

/// In-memory inbox grouped by recipient.
///
/// Recipients keep the order in which they first received a message, and each
/// recipient's messages keep send order.
#[derive(Debug, Default)]
pub struct MessagingService {
    inbox: HashMap<String, Vec<Message>>,
    recipients: Vec<String>,
}

impl MessagingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_message(&mut self, content: &str, sender: &str, recipient: &str) {
        let message = Message::new(content, sender, recipient);

        if !self.inbox.contains_key(recipient) {
            self.recipients.push(recipient.to_string());
        }
        self.inbox
            .entry(recipient.to_string())
            .or_default()
            .push(message);

        tracing::debug!("Queued message from '{}' for '{}'", sender, recipient);
    }

    /// Unknown recipients yield an empty slice.
    pub fn messages_for_recipient(&self, recipient: &str) -> &[Message] {
        self.inbox
            .get(recipient)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn all_messages_as_string(&self) -> String {
        let mut output = String::new();

        for message in self.iter() {
            output.push_str(&message.to_summary_string());
            output.push('\n');
        }

        output.trim_end().to_string()
    }

    /// Every message, recipient by recipient.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.recipients
            .iter()
            .flat_map(move |recipient| self.messages_for_recipient(recipient))
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn message_count(&self) -> usize {
        self.inbox.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty()
    }
}
