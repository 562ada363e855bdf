use std::time::Duration;

/// Phrases that signal the agent is wrapping up the call
pub const DEFAULT_GOODBYE_PHRASES: &[&str] = &[
    "goodbye",
    "bye",
    "see you",
    "talk to you later",
    "ending the call",
    "have a nice day",
    "take care",
];

/// Behaviour settings for a call controller
#[derive(Debug, Clone)]
pub struct CallSettings {
    /// How long to let the closing utterance play before hanging up
    /// Default: 1 second
    pub goodbye_delay: Duration,

    /// Case-insensitive phrases that trigger automatic termination
    pub goodbye_phrases: Vec<String>,
}

impl Default for CallSettings {
    fn default() -> Self {
        Self {
            goodbye_delay: Duration::from_secs(1),
            goodbye_phrases: DEFAULT_GOODBYE_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}
