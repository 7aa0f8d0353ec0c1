use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct StoryTitle(String);

impl StoryTitle {
    /// Returns an instance of `StoryTitle` if the input satisfies all
    /// our validation constraints on story titles.
    /// It returns an error message otherwise.
    pub fn parse(s: String) -> Result<StoryTitle, String> {
        let is_empty_or_whitespace = s.trim().is_empty();

        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two
        // characters (`a` and `̊`).
        let is_too_long = s.graphemes(true).count() > 256;

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars().any(|g| forbidden_characters.contains(&g));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid story title.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for StoryTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
