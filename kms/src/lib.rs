//! # cloudkms
//!
//! gRPC transport and client for the Google Cloud Key Management Service.
//!
//! The [`Transport`](grpc::apiv1::transport::Transport) keeps one channel per service instance and
//! hands out one memoized stub per remote method. [`Client`](client::Client) sits on top of it and
//! adds routing headers and opt-in retries.
//!
//! ## Quickstart
//!
//! ### Credentials
//!
//! #### From the environment
//!
//! `with_auth()` looks for a credentials file named by `GOOGLE_APPLICATION_CREDENTIALS`, for inline JSON
//! in `GOOGLE_APPLICATION_CREDENTIALS_JSON`, for the gcloud well-known file and finally for the GCE
//! metadata server. `Client::new` does the same when no token source provider was configured.
//!
//! ```rust
//! use cloudkms::client::{Client, ClientConfig};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap();
//!     let client = Client::new(config).await.unwrap();
//! }
//! ```
//!
//! #### From a parsed credentials file
//!
//! ```rust
//! use cloudkms::client::google_cloud_auth::credentials::CredentialsFile;
//! use cloudkms::client::{Client, ClientConfig};
//!
//! async fn run(json: &str) {
//!     let credentials = CredentialsFile::new_from_str(json).unwrap();
//!     let config = ClientConfig::default().with_credentials(credentials).await.unwrap();
//!     let client = Client::new(config).await.unwrap();
//! }
//! ```
//!
//! #### Mutual TLS
//!
//! `with_mtls_from_env()` follows `GOOGLE_API_USE_MTLS` (`never`, `auto` or `always`) and switches to
//! `cloudkms.mtls.googleapis.com`. Without a `client_cert_source` the endpoint verification certificate
//! from `~/.secureConnect/context_aware_metadata.json` is used.
//!
//! ```rust
//! use cloudkms::client::{Client, ClientConfig};
//!
//! async fn run() {
//!     let config = ClientConfig::default().with_auth().await.unwrap().with_mtls_from_env().unwrap();
//!     let client = Client::new(config).await.unwrap();
//! }
//! ```
//!
//! ### Usage
//!
//! #### Key ring operations
//!
//! ```
//! use cloudkms::client::{Client, ClientConfig};
//! use google_cloud_gax::retry::RetrySetting;
//! use google_cloud_googleapis::cloud::kms::v1::{CreateKeyRingRequest, GetKeyRingRequest, ListKeyRingsRequest};
//!
//! async fn run(config: ClientConfig) {
//!     let client = Client::new(config).await.unwrap();
//!     let parent = "projects/my-project/locations/global".to_string();
//!
//!     // create
//!     let created = client
//!         .create_key_ring(
//!             CreateKeyRingRequest {
//!                 parent: parent.clone(),
//!                 key_ring_id: "my-key-ring".to_string(),
//!                 key_ring: None,
//!             },
//!             None,
//!         )
//!         .await
//!         .unwrap();
//!
//!     // get, retried on unavailable
//!     let key_ring = client
//!         .get_key_ring(GetKeyRingRequest { name: created.name }, Some(RetrySetting::default()))
//!         .await
//!         .unwrap();
//!     println!("{key_ring:?}");
//!
//!     // list
//!     let response = client
//!         .list_key_rings(
//!             ListKeyRingsRequest {
//!                 parent,
//!                 page_size: 5,
//!                 ..Default::default()
//!             },
//!             None,
//!         )
//!         .await
//!         .unwrap();
//!     for key_ring in response.key_rings {
//!         println!("{}", key_ring.name);
//!     }
//! }
//! ```
//!
//! #### Raw stubs
//!
//! ```
//! use cloudkms::grpc::apiv1::transport::{Transport, TransportConfig};
//! use google_cloud_googleapis::cloud::kms::v1::GetPublicKeyRequest;
//!
//! async fn run() {
//!     let transport = Transport::new(TransportConfig::default()).await.unwrap();
//!     let stub = transport.get_public_key();
//!     let public_key = stub
//!         .call(GetPublicKeyRequest {
//!             name: "projects/p/locations/global/keyRings/r/cryptoKeys/k/cryptoKeyVersions/1".to_string(),
//!         })
//!         .await
//!         .unwrap()
//!         .into_inner();
//!     println!("{}", public_key.pem);
//! }
//! ```
pub mod client;
pub mod grpc;

pub use grpc::apiv1::{AUDIENCE, KMS, MTLS_ENDPOINT, SCOPES};
