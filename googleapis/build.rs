// Regenerates src/google.cloud.kms.v1.rs from a googleapis checkout placed next to this file.
#[cfg(feature = "generate")]
fn main() {
    tonic_build::configure()
        .build_server(false)
        .build_client(false)
        .out_dir("src") // you can change the generated code's location
        .compile(
            &[
                "googleapis/google/cloud/kms/v1/resources.proto",
                "googleapis/google/cloud/kms/v1/service.proto",
            ],
            &["googleapis"], // specify the root location to search proto dependencies
        )
        .unwrap();
}

#[cfg(not(feature = "generate"))]
fn main() {}
