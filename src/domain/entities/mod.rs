//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic; creation
//! inputs use separate `New*` structs.
//!
//! # Entity Types
//!
//! - [`Club`] - An organization that authors and publishes tests
//! - [`Test`] - A recruitment evaluation owned by a club
//! - [`Domain`] - A sub-category/round within a test
//! - [`Student`] - An end user enrolling in tests and domains
//! - [`SessionCode`] - A one-time login exchange code

pub mod club;
pub mod domain;
pub mod session_code;
pub mod student;
pub mod test;

pub use club::{Club, ClubCard, ClubTier, NewClub};
pub use domain::{Domain, DomainCompletion};
pub use session_code::{NewSessionCode, SessionCode};
pub use student::{Student, StudentContact};
pub use test::{EnrolledTest, Test, TestWithClub};
