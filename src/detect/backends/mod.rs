mod seeta;
mod stub;

pub use seeta::SeetaBackend;
pub use stub::StubBackend;
