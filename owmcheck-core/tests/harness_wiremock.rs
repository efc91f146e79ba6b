//! Harness tests against a mocked HTTP transport.
//!
//! These verify the scenarios' assertions without reaching the live API: the
//! mock server stands in for the weather service and the base URL is pointed
//! at it through the normal configuration path.

use owmcheck_core::{
    ApiClient, CheckError, Config, ScenarioId,
    scenario::{self, scenario_for},
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn test_config(base_url: String) -> Config {
    Config {
        api_key: "test-key".to_string(),
        base_url,
        ..Config::default()
    }
}

fn current_weather_body() -> Value {
    json!({
        "name": "Moscow",
        "sys": { "country": "RU", "sunrise": 1_722_990_000 },
        "main": { "temp": 293.15, "feels_like": 292.4, "humidity": 56 },
        "weather": [{ "description": "scattered clouds" }]
    })
}

fn forecast_body(count: usize, temp_kelvin: f64) -> Value {
    let list: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "dt": 1_722_990_000 + i as i64 * 10_800,
                "main": { "temp": temp_kelvin, "humidity": 60 }
            })
        })
        .collect();

    json!({
        "city": { "name": "Moscow", "country": "RU" },
        "cnt": count,
        "list": list
    })
}

#[tokio::test]
async fn current_by_city_passes_and_sends_expected_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Moscow"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    scenario_for(ScenarioId::CurrentByCity)
        .run(&client, &config)
        .await
        .expect("conforming response must pass");
}

#[tokio::test]
async fn current_by_coordinates_sends_lat_lon() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "55.7558"))
        .and(query_param("lon", "37.6173"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    scenario_for(ScenarioId::CurrentByCoordinates)
        .run(&client, &config)
        .await
        .expect("conforming response must pass");
}

#[tokio::test]
async fn rejected_key_fails_every_scenario_with_a_status_error() {
    let server = MockServer::start().await;

    // The remote rejects any request carrying a bad key, regardless of path.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    for id in ScenarioId::all() {
        let err = scenario_for(*id)
            .run(&client, &config)
            .await
            .expect_err("401 must fail the scenario");

        match err {
            CheckError::UnexpectedStatus { status, .. } => {
                assert_eq!(status.as_u16(), 401, "scenario {id}");
            }
            other => panic!("scenario {id}: unexpected error {other}"),
        }
    }
}

#[tokio::test]
async fn missing_country_is_reported_by_path() {
    let server = MockServer::start().await;

    let mut body = current_weather_body();
    body["sys"].as_object_mut().unwrap().remove("country");

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    let err = scenario_for(ScenarioId::CurrentByCity)
        .run(&client, &config)
        .await
        .expect_err("missing sys.country must fail");

    assert!(matches!(err, CheckError::MissingField(ref p) if p == "sys.country"));
}

#[tokio::test]
async fn implausible_temperature_is_rejected() {
    let server = MockServer::start().await;

    let mut body = current_weather_body();
    body["main"]["temp"] = json!(400.0); // 126.85 C

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    let err = scenario_for(ScenarioId::CurrentByCity)
        .run(&client, &config)
        .await
        .expect_err("400 K must fail the plausibility check");

    match err {
        CheckError::ImplausibleTemperature { celsius, .. } => {
            assert!((celsius - 126.85).abs() < 1e-9);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn wrong_city_name_is_a_mismatch() {
    let server = MockServer::start().await;

    let mut body = current_weather_body();
    body["name"] = json!("Sochi");

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    let err = scenario_for(ScenarioId::CurrentByCity)
        .run(&client, &config)
        .await
        .expect_err("name mismatch must fail");

    match err {
        CheckError::ValueMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, "Moscow");
            assert_eq!(actual, "Sochi");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn forecast_with_five_entries_passes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Moscow"))
        .and(query_param("cnt", "5"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(5, 288.15)))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    scenario_for(ScenarioId::FiveDayForecast)
        .run(&client, &config)
        .await
        .expect("5 conforming entries must pass");
}

#[tokio::test]
async fn forecast_with_wrong_count_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(3, 288.15)))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    let err = scenario_for(ScenarioId::FiveDayForecast)
        .run(&client, &config)
        .await
        .expect_err("3 entries must fail");

    match err {
        CheckError::ValueMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, "5");
            assert_eq!(actual, "3");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn forecast_entry_with_implausible_temperature_fails() {
    let server = MockServer::start().await;

    let mut body = forecast_body(5, 288.15);
    body["list"][2]["main"]["temp"] = json!(150.0); // -123.15 C

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    let err = scenario_for(ScenarioId::FiveDayForecast)
        .run(&client, &config)
        .await
        .expect_err("a frozen entry must fail");

    match err {
        CheckError::ImplausibleTemperature { context, .. } => {
            assert_eq!(context, "list[2].main.temp");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    let err = scenario_for(ScenarioId::CurrentByCity)
        .run(&client, &config)
        .await
        .expect_err("HTML body must fail to decode");

    assert!(matches!(err, CheckError::Decode(_)));
}

#[tokio::test]
async fn one_failing_scenario_leaves_the_others_passing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);

    let report = scenario::run_suite(&client, &config, &scenario::all_scenarios()).await;

    assert_eq!(report.outcomes.len(), 3);
    assert!(report.outcomes[0].passed());
    assert!(report.outcomes[1].passed());
    assert!(!report.outcomes[2].passed());
    assert_eq!(report.failed_count(), 1);
    assert!(!report.all_passed());
}

#[tokio::test]
async fn repeated_requests_stay_structurally_valid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_body()))
        .expect(2)
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = ApiClient::new(&config);
    let scenario = scenario_for(ScenarioId::CurrentByCity);

    scenario.run(&client, &config).await.expect("first run");
    scenario.run(&client, &config).await.expect("second run");
}
