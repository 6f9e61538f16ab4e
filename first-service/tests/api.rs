use axum::body::Body;
use axum::http::{Request, StatusCode};
use first_service::http::{AppState, app};
use first_service::identity::Identity;
use http_body_util::BodyExt;
use second_service_api::{BasicRequest, BasicResponse, DataService, DataServiceServer};
use second_service_contracts::{SecondServiceClient, SecondServiceGrpcClient};
use tonic::transport::Server;
use tower::ServiceExt;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct FixedDataService;

#[tonic::async_trait]
impl DataService for FixedDataService {
    async fn get_basic_data(
        &self,
        request: tonic::Request<BasicRequest>,
    ) -> Result<tonic::Response<BasicResponse>, tonic::Status> {
        let state = request.into_inner().state;
        Ok(tonic::Response::new(BasicResponse {
            status_text: format!("second up, call state: {state}"),
        }))
    }
}

async fn spawn_grpc_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(DataServiceServer::new(FixedDataService))
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

fn state(second_url: &str, grpc_url: &str) -> AppState {
    AppState {
        identity: Identity::new(Some("demo".to_string())),
        second: SecondServiceClient::new(reqwest::Client::new(), Url::parse(second_url).unwrap()),
        second_grpc: SecondServiceGrpcClient::new(grpc_url).unwrap(),
    }
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn home_returns_own_status_line() {
    let app = app(state("http://127.0.0.1:1", "http://127.0.0.1:1"));

    let (status, text) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.starts_with("FirstService (demo) on "), "{text}");
}

#[tokio::test]
async fn second_wraps_the_proxied_rest_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("SecondService (demo) up"))
        .mount(&server)
        .await;

    let app = app(state(&server.uri(), "http://127.0.0.1:1"));

    let (status, text) = get(app, "/second").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "Second status: SecondService (demo) up");
}

#[tokio::test]
async fn second_upstream_failure_maps_to_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("draining"))
        .mount(&server)
        .await;

    let app = app(state(&server.uri(), "http://127.0.0.1:1"));

    let (status, text) = get(app, "/second").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(text.contains("503"), "{text}");
}

#[tokio::test]
async fn second_grpc_wraps_the_proxied_grpc_status() {
    let grpc_url = spawn_grpc_server().await;

    let app = app(state("http://127.0.0.1:1", &grpc_url));

    let (status, text) = get(app, "/secondGrpc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "Second GRPC status: second up, call state: gRPC");
}

#[tokio::test]
async fn second_grpc_upstream_failure_maps_to_500() {
    let app = app(state("http://127.0.0.1:1", "http://127.0.0.1:1"));

    let (status, _) = get(app, "/secondGrpc").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
