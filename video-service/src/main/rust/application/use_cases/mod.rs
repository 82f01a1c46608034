mod get_video;
mod upload_video;

pub use get_video::{GetVideo, GetVideoInput, GetVideoOutput};
pub use upload_video::{UploadVideo, UploadVideoInput, UploadVideoOutput};
