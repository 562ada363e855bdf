use super::types::{Speaker, TranscriptEntry};

/// Detects a verbal goodbye from the agent in the latest transcript entry
#[derive(Debug, Clone)]
pub struct GoodbyeDetector {
    /// Lowercased phrases
    phrases: Vec<String>,
}

impl GoodbyeDetector {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Whether the text contains any goodbye phrase (case-insensitive substring)
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.phrases.iter().any(|p| text.contains(p.as_str()))
    }

    /// Inspect only the most recent entry of a transcript update.
    ///
    /// Fires for a final, non-user entry containing a goodbye phrase.
    pub fn should_terminate(&self, transcripts: &[TranscriptEntry]) -> bool {
        match transcripts.last() {
            Some(latest) => {
                latest.speaker != Speaker::User && latest.is_final && self.matches(&latest.text)
            }
            None => false,
        }
    }
}
