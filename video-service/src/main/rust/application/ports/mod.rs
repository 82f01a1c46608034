mod id_generator;
mod uploader;

pub use id_generator::IdGenerator;
pub use uploader::{ByteStream, Uploader};
