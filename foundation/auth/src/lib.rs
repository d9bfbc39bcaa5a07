//! Credentials for the Cloud KMS gRPC client.
//!
//! Credentials are looked up in this order:
//! 1. `GOOGLE_APPLICATION_CREDENTIALS_JSON` (raw or base64 encoded JSON)
//! 2. the file named by `GOOGLE_APPLICATION_CREDENTIALS`
//! 3. the gcloud well-known file `~/.config/gcloud/application_default_credentials.json`
//! 4. the GCE metadata server
//!
//! [`token::DefaultTokenSourceProvider`] wraps the result for the transport layer.
pub mod credentials;
pub mod error;
mod misc;
pub mod project;
pub mod token;
pub mod token_source;
