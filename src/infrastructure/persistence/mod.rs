//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgClubRepository`] - Club storage and retrieval
//! - [`PgTestRepository`] - Test listings and enrollment joins
//! - [`PgDomainRepository`] - Domain listings and finished-set maintenance
//! - [`PgStudentRepository`] - Student reads and per-test domain lists
//! - [`PgSessionCodeRepository`] - One-time login exchange codes

pub mod pg_club_repository;
pub mod pg_domain_repository;
pub mod pg_session_code_repository;
pub mod pg_student_repository;
pub mod pg_test_repository;

pub use pg_club_repository::PgClubRepository;
pub use pg_domain_repository::PgDomainRepository;
pub use pg_session_code_repository::PgSessionCodeRepository;
pub use pg_student_repository::PgStudentRepository;
pub use pg_test_repository::PgTestRepository;
