//! Repository traits for session storage.

mod session_repository;

pub use session_repository::SessionRepository;

#[cfg(test)]
pub use session_repository::MockSessionRepository;
