//! User stories and the fixed prompt template

use crate::error::{TestGenError, TestGenResult};
use crate::llm::ChatMessage;

/// Canned user stories offered by the interactive picker
pub const EXAMPLE_STORIES: [&str; 3] = [
    "As a user, I want to log into the system so that I can access my dashboard.",
    "As an admin, I want to add a new employee record so that it appears in the company database.",
    "As a customer, I want to search for a product by name so that I can add it to my cart.",
];

const SYSTEM_INSTRUCTION: &str =
    "You are an expert QA engineer who writes automated Playwright tests in Java.";

/// A validated, non-empty user story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStory(String);

impl UserStory {
    /// Parse free text into a story. Empty or whitespace-only input is
    /// rejected here, before any network call is made.
    pub fn parse(text: &str) -> TestGenResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TestGenError::EmptyPrompt);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The story text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserStory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build the fixed two-message prompt for a story.
///
/// The story text is embedded verbatim; everything else is constant across
/// requests so fallback attempts differ only in the model field.
pub fn build_messages(story: &UserStory) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(format!(
            "Generate a detailed Playwright test in Java for the following user story:\n\n{}\n\nInclude comments, test steps, and clear structure.",
            story.as_str()
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;

    #[test]
    fn whitespace_only_story_is_rejected() {
        for text in ["", "   ", "\n\t  \n"] {
            match UserStory::parse(text) {
                Err(TestGenError::EmptyPrompt) => {}
                other => panic!("expected EmptyPrompt for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn story_is_trimmed_but_otherwise_verbatim() {
        let story = UserStory::parse("  As a user, I want to log in.  ").unwrap();
        assert_eq!(story.as_str(), "As a user, I want to log in.");
    }

    #[test]
    fn messages_embed_the_story_verbatim() {
        let story = UserStory::parse(EXAMPLE_STORIES[0]).unwrap();
        let messages = build_messages(&story);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert!(messages[0].content.contains("Playwright tests in Java"));
        assert_eq!(messages[1].role, MessageRole::User);
        assert!(messages[1].content.contains(EXAMPLE_STORIES[0]));
    }
}
