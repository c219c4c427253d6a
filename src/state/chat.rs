#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// State for the chat screen.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
}

impl ChatState {
    /// Append a message to the transcript.
    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    /// Drop the transcript, e.g. when switching conversation partners.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A single rendered chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub body: String,
}
