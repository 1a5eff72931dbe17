//! REST API test harness.
//!
//! Provides infrastructure for testing the REST API endpoints.

use axum_test::{TestResponse, TestServer};
use roster_rest::{ServerConfig, create_app_with_config};
use roster_store::{Employee, GeneratorConfig, InMemoryStore};

use super::fixtures::TestFixtures;

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let harness = RestTestHarness::standard();
///     let response = harness.get("/api/employees/1").await;
///     response.assert_status_ok();
/// }
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a harness serving `employees` with the given configuration.
    pub fn with_config(employees: Vec<Employee>, config: ServerConfig) -> Self {
        let store = InMemoryStore::new(employees).expect("Failed to build store");
        let app = create_app_with_config(store, config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, config }
    }

    /// Creates a harness serving `employees` with the testing configuration.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self::with_config(employees, ServerConfig::for_testing())
    }

    /// Creates a harness serving the standard fixtures.
    pub fn standard() -> Self {
        Self::new(TestFixtures::standard())
    }

    /// Creates a harness serving the standard fixtures with strict filters.
    pub fn strict() -> Self {
        let config = ServerConfig {
            strict_filters: true,
            ..ServerConfig::for_testing()
        };
        Self::with_config(TestFixtures::standard(), config)
    }

    /// Creates a harness serving `count` seeded synthetic employees.
    pub fn generated(count: u32) -> Self {
        let config = ServerConfig::for_testing();
        let store = InMemoryStore::generate(&GeneratorConfig {
            count,
            ..config.generator_config()
        })
        .expect("Failed to generate employees");
        let app = create_app_with_config(store, config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, config }
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a GET request to `/api/employees` with query parameters.
    pub async fn search(&self, params: &[(&str, &str)]) -> TestResponse {
        let mut request = self.server.get("/api/employees");
        for (name, value) in params {
            request = request.add_query_param(name, value);
        }
        request.await
    }
}
