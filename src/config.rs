/*!
 * Command-line flags and the secret access key file.
 */

use anyhow::Context;
use clap::Parser;
use std::fs;

/*
 * Every flag defaults to the empty string so that we can check all of them
 * in one pass and report the complete list of missing flags, rather than
 * bailing out at the first one.
 */
#[derive(Debug, Parser)]
#[command(version, about = "generates a presigned PUT URL for one object")]
pub struct Args {
    /// The access key ID.
    #[arg(long, default_value = "")]
    pub access_key_id: String,

    /// The file to load the secret access key from.
    #[arg(long, default_value = "")]
    pub secret_access_key_file: String,

    /// The name of the bucket to use.
    #[arg(long, default_value = "")]
    pub bucket: String,

    /// The endpoint to use.
    #[arg(long, default_value = "")]
    pub endpoint: String,

    /// The file to upload.
    #[arg(long, default_value = "")]
    pub file: String,
}

impl Args {
    /*
     * Returns the names of required flags that were not provided, in
     * declaration order.  Empty means we're good to go.
     */
    pub fn missing_flags(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.access_key_id.is_empty() {
            missing.push("access-key-id");
        }
        if self.secret_access_key_file.is_empty() {
            missing.push("secret-access-key-file");
        }
        if self.bucket.is_empty() {
            missing.push("bucket");
        }
        if self.endpoint.is_empty() {
            missing.push("endpoint");
        }
        if self.file.is_empty() {
            missing.push("file");
        }
        missing
    }
}

/*
 * Reads the secret access key from the given file.  The contents are used
 * verbatim as the key, trailing newline and all, so the file must contain
 * exactly the key material.
 */
pub fn load_secret_access_key(path: &str) -> Result<String, anyhow::Error> {
    fs::read_to_string(path)
        .with_context(|| format!("reading secret access key file \"{}\"", path))
}
