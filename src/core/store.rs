//! Append-only message store for a chat session.

use crate::core::message::Message;

/// Ordered sequence of messages; insertion order is display order.
///
/// `append` is the only mutator. The store is owned by [`App`](crate::core::app::App)
/// and handed around explicitly rather than living in a global.
#[derive(Debug, Clone, Default)]
pub struct ChatStore {
    messages: Vec<Message>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a ChatStore {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Participant;

    #[test]
    fn starts_empty() {
        let store = ChatStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.last().is_none());
    }

    #[test]
    fn nth_append_is_nth_entry() {
        let mut store = ChatStore::new();
        for i in 0..5 {
            let user = if i % 2 == 0 {
                Participant::Primary
            } else {
                Participant::Secondary
            };
            store.append(Message::new(user, format!("m{i}"), "00:00:00"));
        }

        let texts: Vec<&str> = store.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["m0", "m1", "m2", "m3", "m4"]);
        assert_eq!(store.last().map(|m| m.user), Some(Participant::Primary));
    }
}
