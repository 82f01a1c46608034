mod memory_video_repository;

pub use memory_video_repository::InMemoryVideoRepository;
