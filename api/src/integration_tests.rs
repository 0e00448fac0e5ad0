//! Full integration tests for the audit API
//!
//! Drives the real router and JSON file store through axum-test, one temp
//! data directory per test.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    use crate::config::Config;
    use crate::{build_router, build_state};

    async fn test_server() -> (TestServer, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let state = build_state(config).await.unwrap();
        let server = TestServer::new(build_router(state)).unwrap();
        (server, dir)
    }

    async fn create_clinic(server: &TestServer) -> String {
        let response = server
            .post("/projects")
            .json(&json!({
                "company_name": "Acme Healthcare Clinic",
                "industry": "healthcare",
                "employee_count": 45,
                "contact_name": "Dr. Sarah Johnson",
                "contact_email": "sarah@acmeclinic.com",
                "avg_salary": 62000
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let project: Value = response.json();
        project["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn negative_default_cost_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            default_implementation_cost: -1.0,
            ..Config::default()
        };

        let err = build_state(config).await.err().unwrap();
        assert!(err.to_string().contains("DEFAULT_IMPLEMENTATION_COST"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (server, _dir) = test_server().await;

        let body: Value = server.get("/health").await.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn classify_endpoint() {
        let (server, _dir) = test_server().await;

        let body: Value = server
            .post("/classify")
            .json(&json!({"effort": "high", "impact": "high"}))
            .await
            .json();
        assert_eq!(body["category"], "big_swing");

        let response = server
            .post("/classify")
            .json(&json!({"effort": "extreme", "impact": "high"}))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn stateless_roi_matches_reference_scenario() {
        let (server, _dir) = test_server().await;

        let body: Value = server
            .post("/roi")
            .json(&json!({
                "hours_saved_weekly_per_person": 10,
                "employees_affected": 3,
                "avg_annual_salary": 62000,
                "implementation_cost": 25000
            }))
            .await
            .json();

        assert_eq!(body["hourly_rate"], 29.81);
        assert_eq!(body["hours_saved_weekly"], 21.0);
        assert_eq!(body["roi_percentage"], 30.2);
        assert_eq!(body["payback_months"], 9.2);
    }

    #[tokio::test]
    async fn zero_hours_payback_is_null() {
        let (server, _dir) = test_server().await;

        let body: Value = server
            .post("/roi")
            .json(&json!({
                "hours_saved_weekly_per_person": 0,
                "employees_affected": 3,
                "implementation_cost": 25000
            }))
            .await
            .json();

        assert!(body["payback_months"].is_null());
    }

    #[tokio::test]
    async fn project_lifecycle() {
        let (server, dir) = test_server().await;
        let id = create_clinic(&server).await;

        server
            .post(&format!("/projects/{}/opportunities", id))
            .json(&json!({
                "name": "Patient Intake Automation",
                "description": "Manual form entry",
                "hours_saved_weekly": 8,
                "employees_affected": 3,
                "effort": "low",
                "impact": "high"
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let project: Value = server.get(&format!("/projects/{}", id)).await.json();
        assert_eq!(project["opportunities"][0]["category"], "quick_win");
        assert!(dir.path().join(format!("{}.json", id)).exists());

        let roi: Value = server
            .get(&format!("/projects/{}/roi", id))
            .add_query_param("implementation_cost", 20000)
            .await
            .json();
        assert_eq!(roi["combined"]["implementation_cost"], 20000.0);
        assert_eq!(roi["by_category"]["quick_win"]["implementation_cost"], 5000.0);

        let updated: Value = server
            .patch(&format!("/projects/{}", id))
            .json(&json!({"status": "presentation", "interviews_completed": 6}))
            .await
            .json();
        assert_eq!(updated["status"], "presentation");
        assert_eq!(updated["interviews_completed"], 6);

        let list: Value = server.get("/projects").await.json();
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["opportunity_count"], 1);

        server
            .delete(&format!("/projects/{}/opportunities/1", id))
            .await
            .assert_status_ok();
        server
            .delete(&format!("/projects/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/projects/{}", id))
            .expect_failure()
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn invalid_effort_is_bad_request() {
        let (server, _dir) = test_server().await;
        let id = create_clinic(&server).await;

        let response = server
            .post(&format!("/projects/{}/opportunities", id))
            .json(&json!({
                "name": "Scheduling",
                "hours_saved_weekly": 2,
                "employees_affected": 1,
                "effort": "tiny",
                "impact": "high"
            }))
            .expect_failure()
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid classification input");
    }

    #[tokio::test]
    async fn negative_salary_is_bad_request() {
        let (server, _dir) = test_server().await;

        server
            .post("/projects")
            .json(&json!({
                "company_name": "Acme",
                "industry": "finance",
                "employee_count": 10,
                "avg_salary": -1
            }))
            .expect_failure()
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn unknown_project_is_not_found() {
        let (server, _dir) = test_server().await;
        let id = uuid::Uuid::new_v4();

        server
            .get(&format!("/projects/{}/roi", id))
            .expect_failure()
            .await
            .assert_status_not_found();
        server
            .get(&format!("/projects/{}/documents/slides", id))
            .expect_failure()
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn example_project_documents() {
        let (server, _dir) = test_server().await;

        let project: Value = server.post("/projects/example").await.json();
        let id = project["id"].as_str().unwrap();
        assert_eq!(project["opportunities"].as_array().unwrap().len(), 7);

        let guide = server
            .get(&format!("/projects/{}/documents/interview-guide", id))
            .add_query_param("role", "enduser")
            .await;
        assert!(guide
            .header(header::CONTENT_TYPE)
            .to_str()
            .unwrap()
            .starts_with("text/markdown"));
        assert!(guide.text().contains("Aged Care Industry-Specific Questions"));

        let matrix = server
            .get(&format!("/projects/{}/documents/opportunity-matrix", id))
            .await
            .text();
        assert!(matrix.contains("Staff Rostering Optimisation"));

        let report = server
            .get(&format!("/projects/{}/documents/executive-report", id))
            .await
            .text();
        assert!(report.contains("Maplewood Residential Aged Care"));

        let dashboard: Value = server
            .get(&format!("/projects/{}/dashboard", id))
            .await
            .json();
        assert_eq!(dashboard["quick_win_count"], 3);

        server
            .get(&format!("/projects/{}/documents/interview-guide", id))
            .add_query_param("role", "board")
            .expect_failure()
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn export_then_import_keeps_categories() {
        let (server, _dir) = test_server().await;
        let project: Value = server.post("/projects/example").await.json();
        let id = project["id"].as_str().unwrap();

        let export = server.get(&format!("/projects/{}/export", id)).await;
        assert_eq!(
            export.header(header::CONTENT_DISPOSITION),
            "attachment; filename=\"maplewood_residential_aged_care_audit.json\""
        );

        let mut record: Value = export.json();
        record["id"] = json!(uuid::Uuid::new_v4());
        record["opportunities"][0]["category"] = json!("nice_to_have");

        let imported: Value = server.post("/projects/import").json(&record).await.json();
        assert_eq!(imported["opportunities"][0]["category"], "nice_to_have");

        let list: Value = server.get("/projects").await.json();
        assert_eq!(list.as_array().unwrap().len(), 2);
    }
}
