mod image_url;
mod story;
mod story_title;

pub use image_url::ImageUrl;
pub use story::{AccessToken, ApiMessage, CreatedStory, NewStory, Story, StoryPayload};
pub use story_title::StoryTitle;
