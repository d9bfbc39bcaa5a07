use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::body::BoxBody;
use tonic::codec::ProstCodec;
use tonic::codegen::{Body, BoxFuture, Service, StdError};
use tonic::server::{NamedService, UnaryService};
use tonic::transport::{Endpoint, Server};

use cloudkms::client::Client;
use cloudkms::grpc::apiv1::transport::{Transport, TransportConfig};
use google_cloud_gax::conn::{create_emulator_channel, with_token_source, Channel};
use google_cloud_gax::grpc::{Code, Status};
use google_cloud_gax::retry::RetrySetting;
use google_cloud_googleapis::cloud::kms::v1::{
    AsymmetricSignRequest, AsymmetricSignResponse, CryptoKey, DecryptRequest, DecryptResponse,
    DestroyCryptoKeyVersionRequest, Digest, EncryptRequest, EncryptResponse, GetKeyRingRequest, KeyRing,
    ListKeyRingsRequest, ListKeyRingsResponse, UpdateCryptoKeyRequest,
};
use google_cloud_token::{StaticTokenSourceProvider, TokenSourceProvider};

const KEY: &str = "projects/p/locations/global/keyRings/r/cryptoKeys/k";
const DISABLED_KEY: &str = "projects/p/locations/global/keyRings/r/cryptoKeys/disabled";

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt().try_init();
}

#[derive(Debug, Clone)]
struct Seen {
    path: String,
    params: Option<String>,
    authorization: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    /// Number of list calls answered with UNAVAILABLE before succeeding.
    unavailable: usize,
    list_calls: AtomicUsize,
    seen: Mutex<Vec<Seen>>,
}

impl State {
    fn last(&self) -> Seen {
        self.seen.lock().last().cloned().unwrap()
    }
}

fn reversed(data: &[u8]) -> Vec<u8> {
    data.iter().rev().cloned().collect()
}

fn encrypt(_: &State, req: EncryptRequest) -> Result<EncryptResponse, Status> {
    Ok(EncryptResponse {
        name: format!("{}/cryptoKeyVersions/1", req.name),
        ciphertext: reversed(&req.plaintext),
        ..Default::default()
    })
}

fn decrypt(_: &State, req: DecryptRequest) -> Result<DecryptResponse, Status> {
    if req.name == DISABLED_KEY {
        return Err(Status::failed_precondition("key disabled"));
    }
    Ok(DecryptResponse {
        plaintext: reversed(&req.ciphertext),
        ..Default::default()
    })
}

fn asymmetric_sign(_: &State, req: AsymmetricSignRequest) -> Result<AsymmetricSignResponse, Status> {
    let digest = match req.digest.and_then(|d| d.digest) {
        Some(google_cloud_googleapis::cloud::kms::v1::digest::Digest::Sha256(digest)) => digest,
        _ => return Err(Status::invalid_argument("sha256 digest is required")),
    };
    Ok(AsymmetricSignResponse {
        signature: reversed(&digest),
        name: req.name,
        ..Default::default()
    })
}

fn get_key_ring(_: &State, req: GetKeyRingRequest) -> Result<KeyRing, Status> {
    Ok(KeyRing {
        name: req.name,
        create_time: None,
    })
}

fn list_key_rings(state: &State, req: ListKeyRingsRequest) -> Result<ListKeyRingsResponse, Status> {
    if state.list_calls.fetch_add(1, Ordering::SeqCst) < state.unavailable {
        return Err(Status::unavailable("try again"));
    }
    Ok(ListKeyRingsResponse {
        key_rings: vec![KeyRing {
            name: format!("{}/keyRings/r", req.parent),
            create_time: None,
        }],
        next_page_token: "".to_string(),
        total_size: 1,
    })
}

fn update_crypto_key(_: &State, req: UpdateCryptoKeyRequest) -> Result<CryptoKey, Status> {
    req.crypto_key.ok_or_else(|| Status::invalid_argument("crypto_key is required"))
}

struct Handler<Req, Resp> {
    state: Arc<State>,
    f: fn(&State, Req) -> Result<Resp, Status>,
}

impl<Req, Resp> UnaryService<Req> for Handler<Req, Resp>
where
    Req: Send + 'static,
    Resp: Send + 'static,
{
    type Response = Resp;
    type Future = BoxFuture<tonic::Response<Resp>, Status>;

    fn call(&mut self, request: tonic::Request<Req>) -> Self::Future {
        let state = self.state.clone();
        let f = self.f;
        Box::pin(async move { f(&state, request.into_inner()).map(tonic::Response::new) })
    }
}

fn unary<Req, Resp, B>(
    state: Arc<State>,
    f: fn(&State, Req) -> Result<Resp, Status>,
    req: http::Request<B>,
) -> BoxFuture<http::Response<BoxBody>, Infallible>
where
    Req: prost::Message + Default + Send + 'static,
    Resp: prost::Message + Send + 'static,
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    Box::pin(async move {
        let mut grpc = tonic::server::Grpc::new(ProstCodec::<Resp, Req>::default());
        Ok(grpc.unary(Handler { state, f }, req).await)
    })
}

/// A key management service answering a handful of methods.
#[derive(Clone)]
struct FakeKms {
    state: Arc<State>,
}

impl<B> Service<http::Request<B>> for FakeKms
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let header = |name: &str| req.headers().get(name).and_then(|v| v.to_str().ok()).map(String::from);
        self.state.seen.lock().push(Seen {
            path: req.uri().path().to_string(),
            params: header("x-goog-request-params"),
            authorization: header("authorization"),
        });

        let state = self.state.clone();
        match req.uri().path() {
            "/google.cloud.kms.v1.KeyManagementService/Encrypt" => unary(state, encrypt, req),
            "/google.cloud.kms.v1.KeyManagementService/Decrypt" => unary(state, decrypt, req),
            "/google.cloud.kms.v1.KeyManagementService/AsymmetricSign" => unary(state, asymmetric_sign, req),
            "/google.cloud.kms.v1.KeyManagementService/GetKeyRing" => unary(state, get_key_ring, req),
            "/google.cloud.kms.v1.KeyManagementService/ListKeyRings" => unary(state, list_key_rings, req),
            "/google.cloud.kms.v1.KeyManagementService/UpdateCryptoKey" => unary(state, update_crypto_key, req),
            _ => Box::pin(async move {
                Ok(http::Response::builder()
                    .status(200)
                    .header("grpc-status", "12")
                    .header("content-type", "application/grpc")
                    .body(tonic::body::empty_body())
                    .unwrap())
            }),
        }
    }
}

impl NamedService for FakeKms {
    const NAME: &'static str = "google.cloud.kms.v1.KeyManagementService";
}

async fn start_server(state: Arc<State>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::builder()
            .add_service(FakeKms { state })
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr.to_string()
}

async fn transport_over(channel: Channel) -> Transport {
    Transport::new(TransportConfig {
        channel: Some(channel),
        ..Default::default()
    })
    .await
    .unwrap()
}

async fn plain_transport(state: Arc<State>) -> Transport {
    let addr = start_server(state).await;
    transport_over(create_emulator_channel(&addr, &Default::default()).unwrap()).await
}

#[tokio::test]
async fn test_stub_round_trip() {
    let state = Arc::new(State::default());
    let transport = plain_transport(state.clone()).await;

    let encrypted = transport
        .encrypt()
        .call(EncryptRequest {
            name: KEY.to_string(),
            plaintext: b"hello".to_vec(),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(format!("{KEY}/cryptoKeyVersions/1"), encrypted.name);
    assert_eq!(b"olleh".to_vec(), encrypted.ciphertext);

    let decrypted = transport
        .decrypt()
        .call(DecryptRequest {
            name: KEY.to_string(),
            ciphertext: encrypted.ciphertext,
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(b"hello".to_vec(), decrypted.plaintext);

    let seen = state.seen.lock().clone();
    assert_eq!(2, seen.len());
    assert_eq!("/google.cloud.kms.v1.KeyManagementService/Encrypt", seen[0].path);
    assert_eq!("/google.cloud.kms.v1.KeyManagementService/Decrypt", seen[1].path);
    // a supplied channel is used as is
    assert!(seen.iter().all(|s| s.authorization.is_none()));
}

#[tokio::test]
async fn test_status_is_passed_through() {
    let state = Arc::new(State::default());
    let transport = plain_transport(state).await;

    let status = transport
        .decrypt()
        .call(DecryptRequest {
            name: DISABLED_KEY.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(Code::FailedPrecondition, status.code());
    assert_eq!("key disabled", status.message());

    let status = transport
        .destroy_crypto_key_version()
        .call(DestroyCryptoKeyVersionRequest {
            name: format!("{KEY}/cryptoKeyVersions/1"),
        })
        .await
        .unwrap_err();
    assert_eq!(Code::Unimplemented, status.code());
}

#[tokio::test]
async fn test_concurrent_callers_share_stub() {
    let state = Arc::new(State::default());
    let transport = plain_transport(state.clone()).await;

    let tasks: Vec<_> = (0..16u8)
        .map(|i| {
            let transport = transport.clone();
            tokio::spawn(async move {
                let stub = transport.asymmetric_sign();
                let response = stub
                    .call(AsymmetricSignRequest {
                        name: format!("{KEY}/cryptoKeyVersions/1"),
                        digest: Some(Digest {
                            digest: Some(google_cloud_googleapis::cloud::kms::v1::digest::Digest::Sha256(vec![
                                i, 0, 1,
                            ])),
                        }),
                        ..Default::default()
                    })
                    .await
                    .unwrap()
                    .into_inner();
                assert_eq!(vec![1, 0, i], response.signature);
                stub
            })
        })
        .collect();

    let mut stubs = Vec::new();
    for task in tasks {
        stubs.push(task.await.unwrap());
    }
    assert!(stubs.iter().all(|s| Arc::ptr_eq(&stubs[0], s)));
    assert_eq!(1, transport.stubs().len());
    assert_eq!(16, state.seen.lock().len());
}

#[tokio::test]
async fn test_token_is_attached_per_call() {
    let state = Arc::new(State::default());
    let addr = start_server(state.clone()).await;
    let channel = Endpoint::from_shared(format!("http://{addr}")).unwrap().connect_lazy();
    let token_source = StaticTokenSourceProvider::new("ya29.e2e").token_source();
    let transport = transport_over(with_token_source(channel, Some(token_source))).await;

    let key_ring = transport
        .get_key_ring()
        .call(GetKeyRingRequest {
            name: "projects/p/locations/global/keyRings/r".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!("projects/p/locations/global/keyRings/r", key_ring.name);
    assert_eq!(Some("Bearer ya29.e2e".to_string()), state.last().authorization);
}

#[tokio::test]
async fn test_client_routing_header() {
    let state = Arc::new(State::default());
    let client = Client::with_transport(plain_transport(state.clone()).await);

    client
        .get_key_ring(
            GetKeyRingRequest {
                name: "projects/p/locations/global/keyRings/r".to_string(),
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        Some("name=projects/p/locations/global/keyRings/r".to_string()),
        state.last().params
    );

    let updated = client
        .update_crypto_key(
            UpdateCryptoKeyRequest {
                crypto_key: Some(CryptoKey {
                    name: KEY.to_string(),
                    ..Default::default()
                }),
                update_mask: None,
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(KEY, updated.name);
    assert_eq!(Some(format!("crypto_key.name={KEY}")), state.last().params);

    client
        .list_key_rings(
            ListKeyRingsRequest {
                parent: "projects/p/locations/global".to_string(),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(Some("parent=projects/p/locations/global".to_string()), state.last().params);
}

#[tokio::test]
async fn test_client_without_retry_fails_once() {
    let state = Arc::new(State {
        unavailable: 2,
        ..Default::default()
    });
    let client = Client::with_transport(plain_transport(state.clone()).await);

    let status = client
        .list_key_rings(
            ListKeyRingsRequest {
                parent: "projects/p/locations/global".to_string(),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(Code::Unavailable, status.code());
    assert_eq!(1, state.list_calls.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_client_retries_unavailable() {
    let state = Arc::new(State {
        unavailable: 2,
        ..Default::default()
    });
    let client = Client::with_transport(plain_transport(state.clone()).await);
    let retry = RetrySetting {
        from_millis: 1,
        max_delay: None,
        factor: 1,
        take: 5,
        codes: vec![Code::Unavailable],
    };

    let response = client
        .list_key_rings(
            ListKeyRingsRequest {
                parent: "projects/p/locations/global".to_string(),
                ..Default::default()
            },
            Some(retry),
        )
        .await
        .unwrap();
    assert_eq!("projects/p/locations/global/keyRings/r", response.key_rings[0].name);
    assert_eq!(3, state.list_calls.load(Ordering::SeqCst));
}
