mod video_repository;

pub use video_repository::VideoRepository;
