/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

/// User agent string used in HTTP requests to identify this client to the Ze backend services
pub const USER_AGENT: &str = "Rust-Ze-Client/0.3.0";
/// Fixed multipart field name under which file content is uploaded to ZeCommon
pub const UPLOAD_FILE_FIELD: &str = "file";
/// Filename sent with the multipart file part
///
/// ZeCommon derives the stored name from form metadata rather than from this
/// value, so every upload sends the same placeholder.
pub const UPLOAD_FILE_NAME: &str = "filename";
