//! Shared test doubles for integration tests.

mod mock_qa_repository;

pub use mock_qa_repository::MockQaRepository;
