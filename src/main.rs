/*!
 * presign-put: generates a presigned PUT URL, valid for one hour, for one
 * object on an S3-compatible endpoint, and logs it.  The object itself is
 * never uploaded here; only the capability URL is minted.
 */

use clap::Parser;
use std::process;
use tracing::error;
use tracing::info;

use presign_put::config;
use presign_put::config::Args;
use presign_put::presign;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();

    let args = Args::parse();
    let missing = args.missing_flags();
    if !missing.is_empty() {
        error!(flags = ?missing, "missing required flags");
        process::exit(1);
    }

    info!(
        file = %args.secret_access_key_file,
        "loading secret access key from file"
    );
    let secret_access_key = match config::load_secret_access_key(&args.secret_access_key_file) {
        Ok(secret) => secret,
        Err(e) => {
            error!(error = %format!("{:#}", e), "failed to load secret access key file");
            process::exit(1);
        }
    };

    match presign::upload_url(
        &args.endpoint,
        &args.access_key_id,
        &secret_access_key,
        &args.bucket,
        &args.file,
    )
    .await
    {
        Ok(url) => info!(url = %url, "presigned URL created"),
        Err(e) => {
            error!(error = %format!("{:#}", e), "failed to create presigned URL");
            process::exit(1);
        }
    }
}
