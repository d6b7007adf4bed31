//! Application layer services implementing business logic.
//!
//! Services consume repository traits and outbound-client traits and expose
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::club_service::ClubService`] - Club listings and tier ordering
//! - [`services::test_service::TestService`] - Test listings
//! - [`services::domain_service::DomainService`] - Domain reads and bulk cleanup
//! - [`services::student_service::StudentService`] - Dashboard assembly and batch lookup
//! - [`services::auth_service::AuthService`] - Tokens, OAuth state, exchange codes
//! - [`services::notification_service::NotificationService`] - Email dispatch

pub mod services;
