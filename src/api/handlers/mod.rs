//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod clubs;
pub mod domains;
pub mod health;
pub mod notifications;
pub mod students;
pub mod tests;

pub use auth::{oauth_callback_handler, oauth_login_handler, session_exchange_handler};
pub use clubs::{club_list_handler, featured_club_list_handler};
pub use domains::{clear_entries_handler, domain_find_handler, domain_list_handler};
pub use health::health_handler;
pub use notifications::recruitment_update_handler;
pub use students::{student_batch_handler, student_dashboard_handler};
pub use tests::{published_test_list_handler, test_list_handler};
