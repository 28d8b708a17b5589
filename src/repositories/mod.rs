mod json_qa_repository;
mod traits;

pub use json_qa_repository::JsonQaRepository;
pub use traits::QaRepository;
