use validator::ValidateUrl;

#[derive(Debug, Clone)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Returns an instance of `ImageUrl` if the input is a well-formed URL,
    /// an error message otherwise.
    pub fn parse(s: String) -> Result<ImageUrl, String> {
        if s.validate_url() {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid image URL.", s))
        }
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
