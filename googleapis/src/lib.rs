#[path = ""]
pub mod cloud {
    #[cfg(feature = "kms")]
    #[path = ""]
    pub mod kms {
        #[path = "google.cloud.kms.v1.rs"]
        pub mod v1;
    }
}
