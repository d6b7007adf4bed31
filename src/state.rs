//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{
    AuthService, ClubService, DomainService, NotificationService, StudentService, TestService,
};
use crate::infrastructure::oauth::OAuthProvider;

/// Application state: one `Arc`'d service per aggregate plus the identity
/// provider and the web application redirect target.
#[derive(Clone)]
pub struct AppState {
    pub club_service: Arc<ClubService>,
    pub test_service: Arc<TestService>,
    pub domain_service: Arc<DomainService>,
    pub student_service: Arc<StudentService>,
    pub auth_service: Arc<AuthService>,
    pub notification_service: Arc<NotificationService>,
    pub oauth: Arc<dyn OAuthProvider>,
    pub web_app_url: String,
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Builder wiring services over mock repositories for handler tests.

    use super::*;
    use crate::application::services::JwtCodec;
    use crate::domain::repositories::{
        MockClubRepository, MockDomainRepository, MockSessionCodeRepository,
        MockStudentRepository, MockTestRepository,
    };
    use crate::infrastructure::email::MockEmailClient;
    use crate::infrastructure::oauth::MockOAuthProvider;

    pub const TEST_JWT_SECRET: &str = "test-signing-secret";
    pub const TEST_WEB_APP_URL: &str = "https://app.cube.example.com";

    pub fn test_codec() -> JwtCodec {
        JwtCodec::new(TEST_JWT_SECRET, 72)
    }

    /// Builds an [`AppState`] over mock collaborators. Mocks left at their
    /// defaults panic on use, so each test only configures what its route
    /// touches.
    pub struct StateBuilder {
        clubs: MockClubRepository,
        tests: MockTestRepository,
        domains: MockDomainRepository,
        students: MockStudentRepository,
        codes: MockSessionCodeRepository,
        email: MockEmailClient,
        oauth: MockOAuthProvider,
    }

    impl StateBuilder {
        pub fn new() -> Self {
            Self {
                clubs: MockClubRepository::new(),
                tests: MockTestRepository::new(),
                domains: MockDomainRepository::new(),
                students: MockStudentRepository::new(),
                codes: MockSessionCodeRepository::new(),
                email: MockEmailClient::new(),
                oauth: MockOAuthProvider::new(),
            }
        }

        pub fn clubs(mut self, repo: MockClubRepository) -> Self {
            self.clubs = repo;
            self
        }

        pub fn tests(mut self, repo: MockTestRepository) -> Self {
            self.tests = repo;
            self
        }

        pub fn domains(mut self, repo: MockDomainRepository) -> Self {
            self.domains = repo;
            self
        }

        pub fn students(mut self, repo: MockStudentRepository) -> Self {
            self.students = repo;
            self
        }

        pub fn codes(mut self, repo: MockSessionCodeRepository) -> Self {
            self.codes = repo;
            self
        }

        pub fn email(mut self, client: MockEmailClient) -> Self {
            self.email = client;
            self
        }

        pub fn oauth(mut self, provider: MockOAuthProvider) -> Self {
            self.oauth = provider;
            self
        }

        pub fn build(self) -> AppState {
            let clubs = Arc::new(self.clubs);
            let tests = Arc::new(self.tests);
            let domains = Arc::new(self.domains);
            let students = Arc::new(self.students);
            let codes = Arc::new(self.codes);

            AppState {
                club_service: Arc::new(ClubService::new(clubs)),
                test_service: Arc::new(TestService::new(tests.clone())),
                domain_service: Arc::new(DomainService::new(
                    domains.clone(),
                    students.clone(),
                    4,
                )),
                student_service: Arc::new(StudentService::new(
                    students.clone(),
                    tests,
                    domains,
                    4,
                )),
                auth_service: Arc::new(AuthService::new(
                    test_codec(),
                    TEST_JWT_SECRET.to_string(),
                    codes,
                    students,
                    300,
                )),
                notification_service: Arc::new(NotificationService::new(Arc::new(self.email), 4)),
                oauth: Arc::new(self.oauth),
                web_app_url: TEST_WEB_APP_URL.to_string(),
            }
        }
    }
}
