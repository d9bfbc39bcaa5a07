//! Lists the key rings of the `global` location of `GCLOUD_PROJECT`.
//!
//! ```sh
//! GCLOUD_PROJECT=my-project cargo run --example quickstart
//! ```
use cloudkms::client::{Client, ClientConfig};
use google_cloud_googleapis::cloud::kms::v1::ListKeyRingsRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let project = std::env::var("GCLOUD_PROJECT").map_err(|_| "GCLOUD_PROJECT is not set")?;
    let config = ClientConfig::default().with_auth().await?;
    let client = Client::new(config).await?;

    let parent = format!("projects/{project}/locations/global");
    let mut names = Vec::new();
    let mut page_token = String::new();
    loop {
        let response = client
            .list_key_rings(
                ListKeyRingsRequest {
                    parent: parent.clone(),
                    page_token,
                    ..Default::default()
                },
                None,
            )
            .await?;
        names.extend(response.key_rings.into_iter().map(|k| k.name));
        if response.next_page_token.is_empty() {
            break;
        }
        page_token = response.next_page_token;
    }

    if names.is_empty() {
        println!("No key rings found.");
    } else {
        println!("Key rings:");
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}
