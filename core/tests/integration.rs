//! End-to-end tests against the live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port, then exercises the
//! client over real HTTP: once with the host executing requests itself via
//! ureq, and once through `ReqwestTransport` and the store.

use std::net::SocketAddr;
use std::time::Duration;

use hand_analysis_core::{
    AnalysisApi, AnalysisClient, AnalysisStore, ApiError, ClientConfig, HttpMethod, HttpRequest,
    HttpResponse, Resource,
};
use serde_json::{json, Value};

/// Start the mock server on its own runtime thread and return its address.
fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Status codes are returned as data rather than `Err` so the core client
/// does the interpreting.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = match req.method {
        HttpMethod::Get => agent.get(&req.url),
    };
    for (name, value) in &req.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let mut response = builder.call().expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse { status, body }
}

fn put_fixture(addr: SocketAddr, resource: Resource, payload: &Value) {
    let status = ureq::put(&format!("http://{addr}/{}", resource.path()))
        .content_type("application/json")
        .send(payload.to_string().as_bytes())
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 204);
}

fn delete_fixture(addr: SocketAddr, resource: Resource) {
    let status = ureq::delete(&format!("http://{addr}/{}", resource.path()))
        .call()
        .unwrap()
        .status();
    assert_eq!(status.as_u16(), 204);
}

fn config(addr: SocketAddr) -> ClientConfig {
    ClientConfig::default().with_base_url(format!("http://{addr}"))
}

#[test]
fn host_executed_round_trip() {
    let addr = start_server();
    let client = AnalysisClient::new(&format!("http://{addr}"));

    let req = client.build_request(Resource::HandRank);
    let rank = client.parse_response(Resource::HandRank, execute(req)).unwrap();
    assert_eq!(rank, json!({"rank": "Hand rank"}));

    delete_fixture(addr, Resource::HandRank);
    let req = client.build_request(Resource::HandRank);
    let err = client.parse_response(Resource::HandRank, execute(req)).unwrap_err();
    assert_eq!(
        err,
        ApiError::NotFound {
            resource: Resource::HandRank
        }
    );
}

#[tokio::test]
async fn api_reads_every_resource() {
    let addr = start_server();
    let api = AnalysisApi::connect(&config(addr)).unwrap();

    assert_eq!(api.get_hand_details().await.unwrap(), json!({"details": "Hand details"}));
    assert_eq!(api.get_hand_strength().await.unwrap(), json!({"strength": "Hand strength"}));
    assert_eq!(api.get_hand_rank().await.unwrap(), json!({"rank": "Hand rank"}));
    assert_eq!(api.get_winning_probability().await.unwrap(), json!({"probability": 75}));
    assert_eq!(api.get_suggested_actions().await.unwrap(), json!(["Fold", "Call"]));
    assert_eq!(
        api.get_opponent_analysis().await.unwrap(),
        json!({"analysis": "Opponent analysis"})
    );
    assert_eq!(
        api.get_historical_data().await.unwrap(),
        json!([{"id": 1, "data": "Historical data"}])
    );
    assert_eq!(
        api.get_visual_elements().await.unwrap(),
        json!({"elements": "Visual elements"})
    );
}

#[tokio::test]
async fn store_lifecycle() {
    let addr = start_server();
    let store = AnalysisStore::connect(&config(addr)).unwrap();

    // Step 1: nothing fetched yet.
    for r in Resource::ALL {
        assert_eq!(store.get(r), r.initial_value(), "{r}");
    }

    // Step 2: load the whole dashboard.
    let report = store.fetch_all().await;
    assert!(report.is_complete(), "{report:?}");
    assert_eq!(store.hand_rank(), json!({"rank": "Hand rank"}));
    assert_eq!(store.suggested_actions(), json!(["Fold", "Call"]));

    // Step 3: the server changes; a refetch picks it up verbatim.
    put_fixture(addr, Resource::WinningProbability, &json!(0.81));
    store.fetch_winning_probability().await.unwrap();
    assert_eq!(store.winning_probability(), json!(0.81));

    // Step 4: the resource disappears; the store keeps the stale value.
    delete_fixture(addr, Resource::WinningProbability);
    let err = store.fetch_winning_probability().await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(store.winning_probability(), json!(0.81));

    // Step 5: other resources are unaffected.
    let report = store.fetch_all().await;
    let failures: Vec<Resource> = report.failures().map(|(r, _)| r).collect();
    assert_eq!(failures, vec![Resource::WinningProbability]);
    assert_eq!(store.hand_details(), json!({"details": "Hand details"}));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let config = config(addr).with_timeout(Duration::from_secs(5));
    let store = AnalysisStore::connect(&config).unwrap();

    let err = store.fetch_hand_details().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(store.hand_details(), json!({}));
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    // Accepts connections and never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = config(addr).with_timeout(Duration::from_millis(200));
    let store = AnalysisStore::connect(&config).unwrap();

    let err = store.fetch_visual_elements().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
    assert_eq!(store.visual_elements(), json!({}));
}
