//! Fixed simulation parameters and defaults shared across the crate.

/// Delay before the secondary participant answers.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

pub const DEFAULT_PRIMARY_NAME: &str = "User1";
pub const DEFAULT_SECONDARY_NAME: &str = "User2";

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

pub const DEFAULT_TITLE: &str = "Chat App";

pub const INPUT_PLACEHOLDER: &str = "Type a message...";

pub const DEFAULT_THEME_ID: &str = "material";

/// Bubbles never grow wider than this share of the message list.
pub const BUBBLE_MAX_WIDTH_PERCENT: u16 = 70;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "PARLEY_LOG";
