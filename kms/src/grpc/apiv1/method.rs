use std::fmt::{Display, Formatter};

use http::uri::PathAndQuery;

pub const SERVICE_NAME: &str = "google.cloud.kms.v1.KeyManagementService";

/// The remote methods of the key management service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    ListKeyRings,
    ListCryptoKeys,
    ListCryptoKeyVersions,
    ListImportJobs,
    GetKeyRing,
    GetCryptoKey,
    GetCryptoKeyVersion,
    GetPublicKey,
    GetImportJob,
    CreateKeyRing,
    CreateCryptoKey,
    CreateCryptoKeyVersion,
    ImportCryptoKeyVersion,
    CreateImportJob,
    UpdateCryptoKey,
    UpdateCryptoKeyVersion,
    Encrypt,
    Decrypt,
    AsymmetricSign,
    AsymmetricDecrypt,
    UpdateCryptoKeyPrimaryVersion,
    DestroyCryptoKeyVersion,
    RestoreCryptoKeyVersion,
}

impl Method {
    pub const ALL: [Method; 23] = [
        Method::ListKeyRings,
        Method::ListCryptoKeys,
        Method::ListCryptoKeyVersions,
        Method::ListImportJobs,
        Method::GetKeyRing,
        Method::GetCryptoKey,
        Method::GetCryptoKeyVersion,
        Method::GetPublicKey,
        Method::GetImportJob,
        Method::CreateKeyRing,
        Method::CreateCryptoKey,
        Method::CreateCryptoKeyVersion,
        Method::ImportCryptoKeyVersion,
        Method::CreateImportJob,
        Method::UpdateCryptoKey,
        Method::UpdateCryptoKeyVersion,
        Method::Encrypt,
        Method::Decrypt,
        Method::AsymmetricSign,
        Method::AsymmetricDecrypt,
        Method::UpdateCryptoKeyPrimaryVersion,
        Method::DestroyCryptoKeyVersion,
        Method::RestoreCryptoKeyVersion,
    ];

    /// The fully qualified gRPC path, e.g. `/google.cloud.kms.v1.KeyManagementService/ListKeyRings`.
    pub fn path(&self) -> &'static str {
        match self {
            Method::ListKeyRings => "/google.cloud.kms.v1.KeyManagementService/ListKeyRings",
            Method::ListCryptoKeys => "/google.cloud.kms.v1.KeyManagementService/ListCryptoKeys",
            Method::ListCryptoKeyVersions => "/google.cloud.kms.v1.KeyManagementService/ListCryptoKeyVersions",
            Method::ListImportJobs => "/google.cloud.kms.v1.KeyManagementService/ListImportJobs",
            Method::GetKeyRing => "/google.cloud.kms.v1.KeyManagementService/GetKeyRing",
            Method::GetCryptoKey => "/google.cloud.kms.v1.KeyManagementService/GetCryptoKey",
            Method::GetCryptoKeyVersion => "/google.cloud.kms.v1.KeyManagementService/GetCryptoKeyVersion",
            Method::GetPublicKey => "/google.cloud.kms.v1.KeyManagementService/GetPublicKey",
            Method::GetImportJob => "/google.cloud.kms.v1.KeyManagementService/GetImportJob",
            Method::CreateKeyRing => "/google.cloud.kms.v1.KeyManagementService/CreateKeyRing",
            Method::CreateCryptoKey => "/google.cloud.kms.v1.KeyManagementService/CreateCryptoKey",
            Method::CreateCryptoKeyVersion => "/google.cloud.kms.v1.KeyManagementService/CreateCryptoKeyVersion",
            Method::ImportCryptoKeyVersion => "/google.cloud.kms.v1.KeyManagementService/ImportCryptoKeyVersion",
            Method::CreateImportJob => "/google.cloud.kms.v1.KeyManagementService/CreateImportJob",
            Method::UpdateCryptoKey => "/google.cloud.kms.v1.KeyManagementService/UpdateCryptoKey",
            Method::UpdateCryptoKeyVersion => "/google.cloud.kms.v1.KeyManagementService/UpdateCryptoKeyVersion",
            Method::Encrypt => "/google.cloud.kms.v1.KeyManagementService/Encrypt",
            Method::Decrypt => "/google.cloud.kms.v1.KeyManagementService/Decrypt",
            Method::AsymmetricSign => "/google.cloud.kms.v1.KeyManagementService/AsymmetricSign",
            Method::AsymmetricDecrypt => "/google.cloud.kms.v1.KeyManagementService/AsymmetricDecrypt",
            Method::UpdateCryptoKeyPrimaryVersion => {
                "/google.cloud.kms.v1.KeyManagementService/UpdateCryptoKeyPrimaryVersion"
            }
            Method::DestroyCryptoKeyVersion => "/google.cloud.kms.v1.KeyManagementService/DestroyCryptoKeyVersion",
            Method::RestoreCryptoKeyVersion => "/google.cloud.kms.v1.KeyManagementService/RestoreCryptoKeyVersion",
        }
    }

    /// The snake case operation name, matching the accessor on the transport.
    pub fn name(&self) -> &'static str {
        match self {
            Method::ListKeyRings => "list_key_rings",
            Method::ListCryptoKeys => "list_crypto_keys",
            Method::ListCryptoKeyVersions => "list_crypto_key_versions",
            Method::ListImportJobs => "list_import_jobs",
            Method::GetKeyRing => "get_key_ring",
            Method::GetCryptoKey => "get_crypto_key",
            Method::GetCryptoKeyVersion => "get_crypto_key_version",
            Method::GetPublicKey => "get_public_key",
            Method::GetImportJob => "get_import_job",
            Method::CreateKeyRing => "create_key_ring",
            Method::CreateCryptoKey => "create_crypto_key",
            Method::CreateCryptoKeyVersion => "create_crypto_key_version",
            Method::ImportCryptoKeyVersion => "import_crypto_key_version",
            Method::CreateImportJob => "create_import_job",
            Method::UpdateCryptoKey => "update_crypto_key",
            Method::UpdateCryptoKeyVersion => "update_crypto_key_version",
            Method::Encrypt => "encrypt",
            Method::Decrypt => "decrypt",
            Method::AsymmetricSign => "asymmetric_sign",
            Method::AsymmetricDecrypt => "asymmetric_decrypt",
            Method::UpdateCryptoKeyPrimaryVersion => "update_crypto_key_primary_version",
            Method::DestroyCryptoKeyVersion => "destroy_crypto_key_version",
            Method::RestoreCryptoKeyVersion => "restore_crypto_key_version",
        }
    }

    pub(crate) fn path_and_query(&self) -> PathAndQuery {
        PathAndQuery::from_static(self.path())
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_paths_are_unique_and_qualified() {
        let paths: HashSet<&str> = Method::ALL.iter().map(|m| m.path()).collect();
        assert_eq!(Method::ALL.len(), paths.len());
        for method in Method::ALL {
            let rpc = method
                .path()
                .strip_prefix(&format!("/{SERVICE_NAME}/"))
                .unwrap_or_else(|| panic!("unqualified path {}", method.path()));
            // the rpc name is the camel case form of the operation name
            assert_eq!(rpc.to_lowercase(), method.name().replace('_', ""));
        }
    }

    #[test]
    fn test_path_and_query() {
        assert_eq!(
            "/google.cloud.kms.v1.KeyManagementService/AsymmetricSign",
            Method::AsymmetricSign.path_and_query().path()
        );
        assert_eq!("get_public_key", Method::GetPublicKey.to_string());
    }
}
