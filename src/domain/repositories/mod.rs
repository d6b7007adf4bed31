//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`, and mock implementations
//! are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ClubRepository`] - Club reads and out-of-band provisioning
//! - [`TestRepository`] - Test listings and enrollment joins
//! - [`DomainRepository`] - Domain listings and finished-set maintenance
//! - [`StudentRepository`] - Student reads and per-test domain list maintenance
//! - [`SessionCodeRepository`] - One-time login exchange codes

pub mod club_repository;
pub mod domain_repository;
pub mod session_code_repository;
pub mod student_repository;
pub mod test_repository;

pub use club_repository::ClubRepository;
pub use domain_repository::DomainRepository;
pub use session_code_repository::SessionCodeRepository;
pub use student_repository::StudentRepository;
pub use test_repository::TestRepository;

#[cfg(test)]
pub use club_repository::MockClubRepository;
#[cfg(test)]
pub use domain_repository::MockDomainRepository;
#[cfg(test)]
pub use session_code_repository::MockSessionCodeRepository;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
#[cfg(test)]
pub use test_repository::MockTestRepository;
