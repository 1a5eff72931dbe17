//! Integration tests for the employee HTTP API.
//!
//! Covers:
//! - Search with every filter parameter, alone and combined
//! - Malformed comparison filters, lenient and strict
//! - Read by ID (found, not found, invalid)
//! - Department listing
//! - Health probes and CORS

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::Value;

use common::assertions::{assert_error_body, assert_json_content_type, assert_status, ids_of};
use common::harness::RestTestHarness;

mod basic_search {
    use super::*;

    #[tokio::test]
    async fn test_search_without_params_returns_all_in_order() {
        let harness = RestTestHarness::standard();

        let response = harness.get("/api/employees").await;

        response.assert_status_ok();
        assert_json_content_type(&response);
        assert_eq!(ids_of(&response), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_search_returns_full_records() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("name", "jane")]).await;

        let body: Value = response.json();
        let employee = &body[0];
        assert_eq!(employee["id"], 2);
        assert_eq!(employee["name"], "Jane Davis");
        assert_eq!(employee["department"], "Engineering");
        assert_eq!(employee["job_title"], "Software Engineer");
        assert_eq!(employee["salary"], 59999.0);
        assert!(employee["hire_date"].as_str().unwrap().ends_with("-01-15"));
        assert!(employee.get("total_special_leave").is_some());
    }

    #[tokio::test]
    async fn test_unknown_params_are_ignored() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("foo", "bar"), ("page", "2")]).await;

        response.assert_status_ok();
        assert_eq!(ids_of(&response).len(), 6);
    }

    #[tokio::test]
    async fn test_empty_value_means_absent() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("salary", ""), ("department", "")]).await;

        assert_eq!(ids_of(&response).len(), 6);
    }

    #[tokio::test]
    async fn test_no_match_returns_empty_array() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("department", "Legal")]).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_repeated_param_uses_first_value() {
        let harness = RestTestHarness::standard();

        let response = harness
            .get("/api/employees?salary=%3E90000&salary=%3C50000")
            .await;

        assert_eq!(ids_of(&response), vec![1]);
    }
}

mod text_filters {
    use super::*;

    #[tokio::test]
    async fn test_department_is_case_insensitive() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("department", "engineering")]).await;

        assert_eq!(ids_of(&response), vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn test_department_with_space() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("department", "human resources")]).await;

        assert_eq!(ids_of(&response), vec![5]);
    }

    #[tokio::test]
    async fn test_job_title_is_exact() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("job_title", "TECH LEAD")]).await;
        assert_eq!(ids_of(&response), vec![1]);

        let response = harness.search(&[("job_title", "Engineer")]).await;
        assert!(ids_of(&response).is_empty());
    }

    #[tokio::test]
    async fn test_name_is_substring() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("name", "jo")]).await;

        assert_eq!(ids_of(&response), vec![1, 3, 4]);
    }
}

mod comparison_filters {
    use super::*;

    #[tokio::test]
    async fn test_salary_at_least() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("salary", ">=60000")]).await;

        assert_eq!(ids_of(&response), vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_salary_below() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("salary", "<60000")]).await;

        assert_eq!(ids_of(&response), vec![2, 5, 6]);
    }

    #[tokio::test]
    async fn test_salary_equality_with_fraction() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("salary", "=52000.5")]).await;

        assert_eq!(ids_of(&response), vec![6]);
    }

    #[tokio::test]
    async fn test_percent_encoded_comparison() {
        let harness = RestTestHarness::standard();

        let response = harness.get("/api/employees?salary=%3E%3D60000").await;

        assert_eq!(ids_of(&response), vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_years_of_service() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("years_of_service", ">5")]).await;
        assert_eq!(ids_of(&response), vec![1, 3]);

        let response = harness.search(&[("years_of_service", ">=5")]).await;
        assert_eq!(ids_of(&response), vec![1, 3, 4]);

        let response = harness.search(&[("years_of_service", "<= 2")]).await;
        assert_eq!(ids_of(&response), vec![2, 5]);
    }

    #[tokio::test]
    async fn test_filters_are_anded() {
        let harness = RestTestHarness::standard();

        let response = harness
            .search(&[("department", "Engineering"), ("salary", ">=60000")])
            .await;

        assert_eq!(ids_of(&response), vec![1, 4]);
    }

    #[tokio::test]
    async fn test_all_five_filters() {
        let harness = RestTestHarness::standard();

        let response = harness
            .search(&[
                ("department", "engineering"),
                ("job_title", "devops engineer"),
                ("name", "JONES"),
                ("years_of_service", "=5"),
                ("salary", ">59999"),
            ])
            .await;

        assert_eq!(ids_of(&response), vec![4]);
    }
}

mod malformed_filters {
    use super::*;

    #[tokio::test]
    async fn test_malformed_salary_matches_nothing() {
        let harness = RestTestHarness::standard();

        let response = harness.search(&[("salary", "notanumber")]).await;

        response.assert_status_ok();
        assert!(ids_of(&response).is_empty());
    }

    #[tokio::test]
    async fn test_operator_without_operand_matches_nothing() {
        let harness = RestTestHarness::standard();

        let response = harness
            .search(&[("department", "Sales"), ("years_of_service", ">")])
            .await;

        response.assert_status_ok();
        assert!(ids_of(&response).is_empty());
    }

    #[tokio::test]
    async fn test_strict_rejects_invalid_operand() {
        let harness = RestTestHarness::strict();

        let response = harness.search(&[("salary", ">=abc")]).await;

        assert_status(&response, 400);
        assert_error_body(
            &response,
            "Invalid filter 'salary': operand \"abc\" is not a finite number",
        );
    }

    #[tokio::test]
    async fn test_strict_rejects_missing_operator() {
        let harness = RestTestHarness::strict();

        let response = harness.search(&[("years_of_service", "5")]).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid filter 'years_of_service'")
        );
    }

    #[tokio::test]
    async fn test_strict_accepts_well_formed_filters() {
        let harness = RestTestHarness::strict();

        let response = harness.search(&[("salary", ">=60000")]).await;

        response.assert_status_ok();
        assert_eq!(ids_of(&response), vec![1, 3, 4]);
    }
}

mod read_by_id {
    use super::*;

    #[tokio::test]
    async fn test_read_existing() {
        let harness = RestTestHarness::standard();

        let response = harness.get("/api/employees/3").await;

        response.assert_status_ok();
        assert_json_content_type(&response);
        let body: Value = response.json();
        assert_eq!(body["id"], 3);
        assert_eq!(body["name"], "Emily Johnson");
    }

    #[tokio::test]
    async fn test_read_not_found() {
        let harness = RestTestHarness::standard();

        for path in ["/api/employees/0", "/api/employees/7", "/api/employees/-3"] {
            let response = harness.get(path).await;
            assert_status(&response, 404);
            assert_error_body(&response, "Employee not found");
        }
    }

    #[tokio::test]
    async fn test_read_invalid_id() {
        let harness = RestTestHarness::standard();

        for path in ["/api/employees/abc", "/api/employees/1.5"] {
            let response = harness.get(path).await;
            assert_status(&response, 400);
            assert_error_body(&response, "Invalid ID format");
        }
    }
}

mod department_listing {
    use super::*;

    #[tokio::test]
    async fn test_department_listing() {
        let harness = RestTestHarness::standard();

        let response = harness.get("/api/employees/department/SALES").await;

        response.assert_status_ok();
        assert_eq!(ids_of(&response), vec![3, 6]);
    }

    #[tokio::test]
    async fn test_department_listing_decodes_path() {
        let harness = RestTestHarness::standard();

        let response = harness
            .get("/api/employees/department/Human%20Resources")
            .await;

        assert_eq!(ids_of(&response), vec![5]);
    }

    #[tokio::test]
    async fn test_unknown_department_is_empty() {
        let harness = RestTestHarness::standard();

        let response = harness.get("/api/employees/department/Legal").await;

        response.assert_status_ok();
        assert!(ids_of(&response).is_empty());
    }
}

mod generated_roster {
    use super::*;

    #[tokio::test]
    async fn test_generated_ids_are_dense() {
        let harness = RestTestHarness::generated(50);

        let response = harness.get("/api/employees").await;

        assert_eq!(ids_of(&response), (1..=50).collect::<Vec<_>>());
        assert_status(&harness.get("/api/employees/50").await, 200);
        assert_status(&harness.get("/api/employees/51").await, 404);
    }

    #[tokio::test]
    async fn test_generated_department_search_matches_listing() {
        let harness = RestTestHarness::generated(50);

        let searched = harness.search(&[("department", "Engineering")]).await;
        let listed = harness.get("/api/employees/department/engineering").await;

        assert_eq!(ids_of(&searched), ids_of(&listed));
    }

    #[tokio::test]
    async fn test_generated_salary_partition() {
        let harness = RestTestHarness::generated(50);

        let above = ids_of(&harness.search(&[("salary", ">=65000")]).await);
        let below = ids_of(&harness.search(&[("salary", "<65000")]).await);

        assert_eq!(above.len() + below.len(), 50);
        assert!(above.iter().all(|id| !below.contains(id)));
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let harness = RestTestHarness::standard();

        let response = harness.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["backend"], "memory");
        assert_eq!(body["employees"], 6);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_liveness() {
        let harness = RestTestHarness::standard();

        let response = harness.get("/_liveness").await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_readiness() {
        let harness = RestTestHarness::new(Vec::new());

        let response = harness.get("/_readiness").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["checks"]["employees"], 0);
    }
}

mod cors {
    use super::*;
    use common::fixtures::TestFixtures;
    use roster_rest::ServerConfig;

    const ORIGIN: HeaderName = HeaderName::from_static("origin");

    #[tokio::test]
    async fn test_cors_headers_when_enabled() {
        let config = ServerConfig {
            enable_cors: true,
            ..ServerConfig::for_testing()
        };
        let harness = RestTestHarness::with_config(TestFixtures::standard(), config);

        let response = harness
            .server
            .get("/api/employees")
            .add_header(ORIGIN, HeaderValue::from_static("http://example.com"))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_no_cors_headers_when_disabled() {
        let harness = RestTestHarness::standard();

        let response = harness
            .server
            .get("/api/employees")
            .add_header(ORIGIN, HeaderValue::from_static("http://example.com"))
            .await;

        assert!(
            !response
                .headers()
                .contains_key("access-control-allow-origin")
        );
    }
}
