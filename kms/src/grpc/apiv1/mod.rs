pub mod kms_client;
pub mod method;
pub mod stub;
pub mod transport;

pub const AUDIENCE: &str = "https://cloudkms.googleapis.com/";
pub const KMS: &str = "cloudkms.googleapis.com";
pub const MTLS_ENDPOINT: &str = "cloudkms.mtls.googleapis.com";
pub const SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/cloud-platform"];
