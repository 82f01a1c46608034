mod video_status;

pub use video_status::VideoStatus;
