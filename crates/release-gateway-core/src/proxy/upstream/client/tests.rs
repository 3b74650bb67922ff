use super::*;
use release_gateway_types::RepoRef;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn asset(owner: &str, repo: &str, tag: &str, name: &str) -> AssetRef {
    AssetRef {
        repo: RepoRef { owner: owner.to_string(), repo: repo.to_string() },
        tag: tag.to_string(),
        name: name.to_string(),
    }
}

fn client_for(download_base: &str) -> UpstreamClient {
    let config = UpstreamConfig {
        download_base_url: download_base.to_string(),
        probe_timeout_secs: 5,
        ..UpstreamConfig::default()
    };
    UpstreamClient::from_config(&config).expect("client should build")
}

#[test]
fn test_download_url_for_github() {
    let client = client_for("https://github.com");
    let url = client.download_url(&asset("octocat", "hello-world", "v1.0.0", "hello.tar.gz")).unwrap();
    assert_eq!(
        url.as_str(),
        "https://github.com/octocat/hello-world/releases/download/v1.0.0/hello.tar.gz"
    );
}

#[test]
fn test_download_url_keeps_base_prefix() {
    let client = client_for("http://127.0.0.1:9000/mirror/");
    let url = client.download_url(&asset("o", "r", "v2", "a.zip")).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:9000/mirror/o/r/releases/download/v2/a.zip");
}

#[test]
fn test_download_url_encodes_segments() {
    let client = client_for("https://github.com");
    let url = client.download_url(&asset("o", "r", "v1.0 rc1", "my file#1.zip")).unwrap();
    assert_eq!(url.path(), "/o/r/releases/download/v1.0%20rc1/my%20file%231.zip");
    assert!(url.fragment().is_none());
}

#[test]
fn test_invalid_base_rejected_at_construction() {
    let config = UpstreamConfig {
        api_base_url: "ftp://example.com".to_string(),
        ..UpstreamConfig::default()
    };
    assert!(UpstreamClient::from_config(&config).is_err());
}

#[tokio::test]
async fn test_redirect_lookup_resolves_found_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/octocat/hello-world/releases/download/v1.0.0/hello.tar.gz"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", "https://objects.githubusercontent.com/asset?sig=1"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let resolved = client
        .resolve_download(&asset("octocat", "hello-world", "v1.0.0", "hello.tar.gz"))
        .await
        .unwrap();

    assert_eq!(resolved.as_str(), "https://objects.githubusercontent.com/asset?sig=1");
}

#[tokio::test]
async fn test_redirect_lookup_resolution_is_stable() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "https://cdn.example/asset.bin"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let wanted = asset("o", "r", "v1", "asset.bin");
    let first = client.resolve_download(&wanted).await.unwrap();
    let second = client.resolve_download(&wanted).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_redirect_lookup_relative_location_joined() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/storage/asset.bin"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let probe_url = client.download_url(&asset("o", "r", "v1", "asset.bin")).unwrap();
    let outcome = client.probe_download(&probe_url).await;

    let expected = Url::parse(&format!("{}/storage/asset.bin", server.uri())).unwrap();
    assert_eq!(outcome, ProbeOutcome::Resolved(expected));
}

#[tokio::test]
async fn test_redirect_lookup_rejects_non_302() {
    let server = MockServer::start().await;
    for status in [200_u16, 301, 307, 404] {
        let _guard = Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(status).insert_header("Location", "https://cdn.example/a"))
            .mount_as_scoped(&server)
            .await;

        let client = client_for(&server.uri());
        let probe_url = client.download_url(&asset("o", "r", "v1", "a")).unwrap();
        let outcome = client.probe_download(&probe_url).await;

        assert_eq!(outcome, ProbeOutcome::UnexpectedStatus(StatusCode::from_u16(status).unwrap()));
        let err = outcome.into_result().unwrap_err();
        assert_eq!(err.http_status_code(), 502);
        assert_eq!(err.to_string(), "Could not get download url");
    }
}

#[tokio::test]
async fn test_redirect_lookup_missing_location_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD")).respond_with(ResponseTemplate::new(302)).mount(&server).await;

    let client = client_for(&server.uri());
    let result = client.resolve_download(&asset("o", "r", "v1", "a")).await;

    let err = result.unwrap_err();
    assert_eq!(err.http_status_code(), 502);
}

#[tokio::test]
async fn test_redirect_lookup_transport_error() {
    // Nothing listens on port 1.
    let client = client_for("http://127.0.0.1:1");
    let probe_url = client.download_url(&asset("o", "r", "v1", "a")).unwrap();

    let outcome = client.probe_download(&probe_url).await;
    assert!(matches!(outcome, ProbeOutcome::Transport(_)));

    let err = outcome.into_result().unwrap_err();
    assert_eq!(err.http_status_code(), 502);
    assert!(err.to_string().contains("127.0.0.1:1"));
}
