use axum::http::StatusCode;
use axum_test::TestServer;
use imb_axum::{DailyImbalanceResponse, ErrorResponse, HighestImbalanceHourResponse, router};
use imb_core::ports::FetchError;
use rstest::*;
use serde_json::Value;
use time::macros::date;

mod stub;
use stub::{TestApp, sample_day};

fn serve(app: TestApp) -> TestServer {
    TestServer::new(router(app).0).unwrap()
}

#[fixture]
fn app() -> TestApp {
    TestApp::new(|date| Ok(Some(sample_day(date))))
}

#[rstest]
#[test_log::test(tokio::test)]
async fn index_reports_running(app: TestApp) {
    let response = serve(app).get("/").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Server is running");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn health_check(app: TestApp) {
    let response = serve(app).get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn daily_imbalance_defaults_to_yesterday(app: TestApp) {
    let server = serve(app.clone());

    let response = server.get("/daily_imbalance").await;
    response.assert_status_ok();

    let body = response.json::<DailyImbalanceResponse>();
    assert_eq!(body.date, "2023-05-01");
    // 50 * 15 + 30 * 18 + 40 * 16 over 120 MWh
    assert_eq!(body.total_daily_imbalance_cost, 1930.0);
    assert_eq!(body.daily_imbalance_unit_rate, 16.08);

    assert_eq!(app.requests(), vec![date!(2023-05-01)]);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn highest_imbalance_hour_defaults_to_yesterday(app: TestApp) {
    let response = serve(app).get("/highest_imbalance_hour").await;
    response.assert_status_ok();

    let body = response.json::<HighestImbalanceHourResponse>();
    assert_eq!(body.date, "2023-05-01");
    assert_eq!(body.highest_imbalance_hour, 0);
    assert_eq!(body.highest_imbalance_volume, 80.0);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn explicit_date_is_passed_to_the_fetcher(app: TestApp) {
    let response = serve(app.clone())
        .get("/daily_imbalance")
        .add_query_param("date", "2023-04-20")
        .await;
    response.assert_status_ok();

    assert_eq!(response.json::<DailyImbalanceResponse>().date, "2023-04-20");
    assert_eq!(app.requests(), vec![date!(2023-04-20)]);
}

#[rstest]
#[case("/daily_imbalance")]
#[case("/highest_imbalance_hour")]
#[case("/energy_report")]
#[test_log::test(tokio::test)]
async fn unparseable_date_is_a_bad_request(app: TestApp, #[case] path: &str) {
    let response = serve(app.clone())
        .get(path)
        .add_query_param("date", "01/05/2023")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<ErrorResponse>().error.contains("YYYY-MM-DD"));
    assert!(app.requests().is_empty());
}

#[rstest]
#[case("/daily_imbalance")]
#[case("/highest_imbalance_hour")]
#[test_log::test(tokio::test)]
async fn today_is_a_bad_request(app: TestApp, #[case] path: &str) {
    let response = serve(app.clone())
        .get(path)
        .add_query_param("date", "2023-05-02")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(
        response
            .json::<ErrorResponse>()
            .error
            .contains("at least one day in the past")
    );
    assert!(app.requests().is_empty());
}

#[rstest]
#[case("/daily_imbalance")]
#[case("/highest_imbalance_hour")]
#[case("/energy_report")]
#[test_log::test(tokio::test)]
async fn missing_data_is_not_found(#[case] path: &str) {
    let response = serve(TestApp::new(|_| Ok(None))).get(path).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "No data available for 2023-05-01"
    );
}

#[rstest]
#[case("/daily_imbalance")]
#[case("/highest_imbalance_hour")]
#[test_log::test(tokio::test)]
async fn incomplete_data_is_a_bad_request(#[case] path: &str) {
    let app = TestApp::new(|_| {
        Err(FetchError::IncompleteData {
            expected: 48,
            actual: 1,
        })
    });
    let response = serve(app).get(path).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "expected 48 settlement periods, received 1"
    );
}

#[rstest]
#[test_log::test(tokio::test)]
async fn malformed_data_names_the_field() {
    let app = TestApp::new(|_| Err(FetchError::missing_field("netImbalanceVolume", 0)));
    let response = serve(app).get("/daily_imbalance").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(
        response
            .json::<ErrorResponse>()
            .error
            .contains("netImbalanceVolume")
    );
}

#[rstest]
#[case("/daily_imbalance")]
#[case("/highest_imbalance_hour")]
#[case("/energy_report")]
#[test_log::test(tokio::test)]
async fn retrieval_failure_is_not_leaked(#[case] path: &str) {
    let app = TestApp::new(|_| Err(FetchError::Retrieval("tls handshake eof".into())));
    let response = serve(app).get(path).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json::<ErrorResponse>().error;
    assert_eq!(error, "An unexpected error occurred");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn report_is_an_attachment(app: TestApp) {
    let response = serve(app).get("/energy_report").await;
    response.assert_status_ok();

    assert_eq!(response.header("content-type"), "text/plain");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"energy_report_2023-05-01.txt\""
    );
    assert_eq!(response.text(), "2023-05-01 3 1930.00 0");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn renderer_failure_is_a_server_error(mut app: TestApp) {
    app.renderer.fail = true;
    let response = serve(app).get("/energy_report").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<ErrorResponse>().error,
        "An unexpected error occurred"
    );
}

#[rstest]
#[test_log::test(tokio::test)]
async fn openapi_document_lists_routes(app: TestApp) {
    let response = serve(app).get("/docs/api.json").await;
    response.assert_status_ok();

    let document = response.json::<Value>();
    let paths = document["paths"].as_object().unwrap();
    for path in ["/daily_imbalance", "/highest_imbalance_hour", "/energy_report"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
