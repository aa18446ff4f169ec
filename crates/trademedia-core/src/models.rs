//! Domain models for the upload flow.

/// A decoded file payload from a multipart submission.
///
/// Lives for one request's processing lifetime and is dropped once a
/// response has been produced.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub data: Vec<u8>,
    /// Media type declared by the client. Never derived from the bytes.
    pub content_type: String,
    /// Original file name as submitted; the decoder applies a fallback when
    /// the client omits it.
    pub file_name: String,
}

/// Public descriptor of a stored object, produced once the upload has been
/// durably written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Publicly resolvable URL of the object.
    pub url: String,
    /// Storage key the object was written under.
    pub key: String,
}
