/*!
 * Pieces of the presign-put tool: flag handling and presigned-URL
 * generation.  Split out of the binary so the unit tests can get at them.
 */

pub mod config;
pub mod presign;
