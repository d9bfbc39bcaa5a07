use google_cloud_gax::create_request;
use google_cloud_gax::grpc::Status;
use google_cloud_gax::retry::{invoke, RetrySetting};
use google_cloud_googleapis::cloud::kms::v1::AsymmetricDecryptRequest;
use google_cloud_googleapis::cloud::kms::v1::AsymmetricDecryptResponse;
use google_cloud_googleapis::cloud::kms::v1::AsymmetricSignRequest;
use google_cloud_googleapis::cloud::kms::v1::AsymmetricSignResponse;
use google_cloud_googleapis::cloud::kms::v1::CreateCryptoKeyRequest;
use google_cloud_googleapis::cloud::kms::v1::CreateCryptoKeyVersionRequest;
use google_cloud_googleapis::cloud::kms::v1::CreateImportJobRequest;
use google_cloud_googleapis::cloud::kms::v1::CreateKeyRingRequest;
use google_cloud_googleapis::cloud::kms::v1::CryptoKey;
use google_cloud_googleapis::cloud::kms::v1::CryptoKeyVersion;
use google_cloud_googleapis::cloud::kms::v1::DecryptRequest;
use google_cloud_googleapis::cloud::kms::v1::DecryptResponse;
use google_cloud_googleapis::cloud::kms::v1::DestroyCryptoKeyVersionRequest;
use google_cloud_googleapis::cloud::kms::v1::EncryptRequest;
use google_cloud_googleapis::cloud::kms::v1::EncryptResponse;
use google_cloud_googleapis::cloud::kms::v1::GetCryptoKeyRequest;
use google_cloud_googleapis::cloud::kms::v1::GetCryptoKeyVersionRequest;
use google_cloud_googleapis::cloud::kms::v1::GetImportJobRequest;
use google_cloud_googleapis::cloud::kms::v1::GetKeyRingRequest;
use google_cloud_googleapis::cloud::kms::v1::GetPublicKeyRequest;
use google_cloud_googleapis::cloud::kms::v1::ImportCryptoKeyVersionRequest;
use google_cloud_googleapis::cloud::kms::v1::ImportJob;
use google_cloud_googleapis::cloud::kms::v1::KeyRing;
use google_cloud_googleapis::cloud::kms::v1::ListCryptoKeyVersionsRequest;
use google_cloud_googleapis::cloud::kms::v1::ListCryptoKeyVersionsResponse;
use google_cloud_googleapis::cloud::kms::v1::ListCryptoKeysRequest;
use google_cloud_googleapis::cloud::kms::v1::ListCryptoKeysResponse;
use google_cloud_googleapis::cloud::kms::v1::ListImportJobsRequest;
use google_cloud_googleapis::cloud::kms::v1::ListImportJobsResponse;
use google_cloud_googleapis::cloud::kms::v1::ListKeyRingsRequest;
use google_cloud_googleapis::cloud::kms::v1::ListKeyRingsResponse;
use google_cloud_googleapis::cloud::kms::v1::PublicKey;
use google_cloud_googleapis::cloud::kms::v1::RestoreCryptoKeyVersionRequest;
use google_cloud_googleapis::cloud::kms::v1::UpdateCryptoKeyPrimaryVersionRequest;
use google_cloud_googleapis::cloud::kms::v1::UpdateCryptoKeyRequest;
use google_cloud_googleapis::cloud::kms::v1::UpdateCryptoKeyVersionRequest;

use crate::grpc::apiv1::transport::Transport;

/// Typed calls over the [`Transport`] stubs.
///
/// Every call carries the `x-goog-request-params` routing header. Without a [`RetrySetting`]
/// exactly one attempt is made.
#[derive(Clone, Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// List key rings
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.ListKeyRings
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_key_rings(
        &self,
        req: ListKeyRingsRequest,
        retry: Option<RetrySetting>,
    ) -> Result<ListKeyRingsResponse, Status> {
        let stub = self.transport.list_key_rings();
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// List crypto keys
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.ListCryptoKeys
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_crypto_keys(
        &self,
        req: ListCryptoKeysRequest,
        retry: Option<RetrySetting>,
    ) -> Result<ListCryptoKeysResponse, Status> {
        let stub = self.transport.list_crypto_keys();
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// List crypto key versions
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.ListCryptoKeyVersions
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_crypto_key_versions(
        &self,
        req: ListCryptoKeyVersionsRequest,
        retry: Option<RetrySetting>,
    ) -> Result<ListCryptoKeyVersionsResponse, Status> {
        let stub = self.transport.list_crypto_key_versions();
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// List import jobs
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.ListImportJobs
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_import_jobs(
        &self,
        req: ListImportJobsRequest,
        retry: Option<RetrySetting>,
    ) -> Result<ListImportJobsResponse, Status> {
        let stub = self.transport.list_import_jobs();
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Get key ring
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.GetKeyRing
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_key_ring(&self, req: GetKeyRingRequest, retry: Option<RetrySetting>) -> Result<KeyRing, Status> {
        let stub = self.transport.get_key_ring();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Get crypto key
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.GetCryptoKey
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_crypto_key(
        &self,
        req: GetCryptoKeyRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKey, Status> {
        let stub = self.transport.get_crypto_key();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Get crypto key version
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.GetCryptoKeyVersion
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_crypto_key_version(
        &self,
        req: GetCryptoKeyVersionRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKeyVersion, Status> {
        let stub = self.transport.get_crypto_key_version();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Get public key
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.GetPublicKey
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_public_key(
        &self,
        req: GetPublicKeyRequest,
        retry: Option<RetrySetting>,
    ) -> Result<PublicKey, Status> {
        let stub = self.transport.get_public_key();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Get import job
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.GetImportJob
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_import_job(
        &self,
        req: GetImportJobRequest,
        retry: Option<RetrySetting>,
    ) -> Result<ImportJob, Status> {
        let stub = self.transport.get_import_job();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Create key ring
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.CreateKeyRing
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_key_ring(
        &self,
        req: CreateKeyRingRequest,
        retry: Option<RetrySetting>,
    ) -> Result<KeyRing, Status> {
        let stub = self.transport.create_key_ring();
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Create crypto key
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.CreateCryptoKey
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_crypto_key(
        &self,
        req: CreateCryptoKeyRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKey, Status> {
        let stub = self.transport.create_crypto_key();
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Create crypto key version
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.CreateCryptoKeyVersion
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_crypto_key_version(
        &self,
        req: CreateCryptoKeyVersionRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKeyVersion, Status> {
        let stub = self.transport.create_crypto_key_version();
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Import crypto key version
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.ImportCryptoKeyVersion
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn import_crypto_key_version(
        &self,
        req: ImportCryptoKeyVersionRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKeyVersion, Status> {
        let stub = self.transport.import_crypto_key_version();
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Create import job
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.CreateImportJob
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_import_job(
        &self,
        req: CreateImportJobRequest,
        retry: Option<RetrySetting>,
    ) -> Result<ImportJob, Status> {
        let stub = self.transport.create_import_job();
        let action = || async {
            let request = create_request(format!("parent={}", req.parent), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Update crypto key
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.UpdateCryptoKey
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_crypto_key(
        &self,
        req: UpdateCryptoKeyRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKey, Status> {
        let stub = self.transport.update_crypto_key();
        let action = || async {
            let name = req.crypto_key.as_ref().map(|k| k.name.as_str()).unwrap_or_default();
            let request = create_request(format!("crypto_key.name={name}"), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Update crypto key version
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.UpdateCryptoKeyVersion
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_crypto_key_version(
        &self,
        req: UpdateCryptoKeyVersionRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKeyVersion, Status> {
        let stub = self.transport.update_crypto_key_version();
        let action = || async {
            let name = req.crypto_key_version.as_ref().map(|v| v.name.as_str()).unwrap_or_default();
            let request = create_request(format!("crypto_key_version.name={name}"), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Encrypt
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.Encrypt
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn encrypt(&self, req: EncryptRequest, retry: Option<RetrySetting>) -> Result<EncryptResponse, Status> {
        let stub = self.transport.encrypt();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Decrypt
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.Decrypt
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn decrypt(&self, req: DecryptRequest, retry: Option<RetrySetting>) -> Result<DecryptResponse, Status> {
        let stub = self.transport.decrypt();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Asymmetric sign
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.AsymmetricSign
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn asymmetric_sign(
        &self,
        req: AsymmetricSignRequest,
        retry: Option<RetrySetting>,
    ) -> Result<AsymmetricSignResponse, Status> {
        let stub = self.transport.asymmetric_sign();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Asymmetric decrypt
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.AsymmetricDecrypt
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn asymmetric_decrypt(
        &self,
        req: AsymmetricDecryptRequest,
        retry: Option<RetrySetting>,
    ) -> Result<AsymmetricDecryptResponse, Status> {
        let stub = self.transport.asymmetric_decrypt();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Update crypto key primary version
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.UpdateCryptoKeyPrimaryVersion
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_crypto_key_primary_version(
        &self,
        req: UpdateCryptoKeyPrimaryVersionRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKey, Status> {
        let stub = self.transport.update_crypto_key_primary_version();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Destroy crypto key version
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.DestroyCryptoKeyVersion
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn destroy_crypto_key_version(
        &self,
        req: DestroyCryptoKeyVersionRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKeyVersion, Status> {
        let stub = self.transport.destroy_crypto_key_version();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }

    /// Restore crypto key version
    ///
    /// https://cloud.google.com/kms/docs/reference/rpc/google.cloud.kms.v1#google.cloud.kms.v1.KeyManagementService.RestoreCryptoKeyVersion
    ///
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn restore_crypto_key_version(
        &self,
        req: RestoreCryptoKeyVersionRequest,
        retry: Option<RetrySetting>,
    ) -> Result<CryptoKeyVersion, Status> {
        let stub = self.transport.restore_crypto_key_version();
        let action = || async {
            let request = create_request(format!("name={}", req.name), req.clone());
            stub.call(request).await
        };
        invoke(retry, action).await.map(|r| r.into_inner())
    }
}
