//! Business logic services for the application layer.

pub mod auth_service;
pub mod club_service;
pub mod domain_service;
pub mod notification_service;
pub mod student_service;
pub mod test_service;

pub use auth_service::{AuthService, Claims, JwtCodec, SessionLogin, UserType};
pub use club_service::ClubService;
pub use domain_service::{ClearOutcome, DomainService};
pub use notification_service::{DispatchReport, NotificationService};
pub use student_service::{DashboardTest, StudentDashboard, StudentService};
pub use test_service::TestService;
