/*!
 * Generates a presigned PUT URL for one object on an S3-compatible
 * endpoint.  The signature is computed locally; nothing talks to the
 * endpoint here.  Whoever holds the URL can upload the object until it
 * expires, one hour after issuance.
 */

use anyhow::Context;
use rusoto_core::Region;
use rusoto_credential::ProvideAwsCredentials;
use rusoto_credential::StaticProvider;
use rusoto_s3::util::PreSignedRequest;
use rusoto_s3::util::PreSignedRequestOption;
use rusoto_s3::PutObjectRequest;
use std::time::Duration;

const URL_VALIDITY: Duration = Duration::from_secs(3600);

/*
 * S3-compatible services sign against the default region scope when none is
 * configured, so that's what we use; the endpoint is what actually picks the
 * service.  An endpoint with no scheme is presigned as https.
 */
const REGION_SCOPE: &str = "us-east-1";

pub async fn upload_url(
    endpoint: &str,
    access_key_id: &str,
    secret_access_key: &str,
    bucket: &str,
    key: &str,
) -> Result<String, anyhow::Error> {
    let provider = StaticProvider::new_minimal(
        access_key_id.to_string(),
        secret_access_key.to_string(),
    );
    let creds = provider
        .credentials()
        .await
        .with_context(|| "credentials")?;

    let region = Region::Custom {
        name: REGION_SCOPE.to_string(),
        endpoint: endpoint.to_string(),
    };

    let put_request = PutObjectRequest {
        bucket: bucket.to_string(),
        key: key.to_string(),
        ..Default::default()
    };

    let opts = PreSignedRequestOption {
        expires_in: URL_VALIDITY,
    };
    Ok(put_request.get_presigned_url(&region, &creds, &opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
    const SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

    async fn presign(endpoint: &str, bucket: &str, key: &str) -> String {
        upload_url(endpoint, ACCESS_KEY_ID, SECRET, bucket, key)
            .await
            .expect("presigning")
    }

    #[tokio::test]
    async fn test_url_is_https_and_path_style() {
        let url = presign("minio.example.com", "uploads", "dump.tar.gz").await;
        assert!(url.starts_with("https://minio.example.com/uploads/dump.tar.gz?"));
    }

    #[tokio::test]
    async fn test_url_carries_sigv4_query_parameters() {
        let url = presign("minio.example.com", "uploads", "dump.tar.gz").await;
        assert!(url.contains("X-Amz-Algorithm=AWS4-HMAC-SHA256"));
        assert!(url.contains("X-Amz-Expires=3600"));
        assert!(url.contains("X-Amz-Signature="));
    }

    #[tokio::test]
    async fn test_secret_never_appears_in_url() {
        let url = presign("minio.example.com", "uploads", "dump.tar.gz").await;
        assert!(!url.contains(SECRET));
        /* The credential scope carries the access key ID, which is fine. */
        assert!(url.contains(ACCESS_KEY_ID));
    }

    #[tokio::test]
    async fn test_nested_object_key() {
        let url = presign("minio.example.com", "uploads", "backups/2026/dump.tar.gz").await;
        assert!(url.starts_with("https://minio.example.com/uploads/backups/2026/dump.tar.gz?"));
    }

    #[tokio::test]
    async fn test_explicit_http_endpoint_is_honored() {
        let url = presign("http://localhost:9000", "uploads", "dump.tar.gz").await;
        assert!(url.starts_with("http://localhost:9000/uploads/dump.tar.gz?"));
    }
}
