//! Canned replies used to simulate the secondary participant.

use rand::seq::IndexedRandom;

pub const CANNED_REPLIES: [&str; 9] = [
    "How are you doing today?",
    "That sounds interesting!",
    "Tell me more about that.",
    "I agree with you.",
    "What are your thoughts on this?",
    "This is so exciting!",
    "I didn't expect that!",
    "Thanks for sharing!",
    "Let's discuss this further.",
];

pub fn is_canned_reply(text: &str) -> bool {
    CANNED_REPLIES.contains(&text)
}

/// Produces the text of the next simulated reply.
pub trait ReplySource: Send + Sync {
    fn pick(&self) -> String;
}

/// Uniform random choice over [`CANNED_REPLIES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReplies;

impl ReplySource for RandomReplies {
    fn pick(&self) -> String {
        CANNED_REPLIES
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(CANNED_REPLIES[0])
            .to_string()
    }
}
