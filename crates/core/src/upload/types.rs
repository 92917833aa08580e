//! Upload pipeline data types.

/// Metadata for a successfully stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Original filename as declared by the client.
    pub file_name: String,
    /// Size of the stored bytes.
    pub file_size: u64,
    /// Content type looked up from the allowed table.
    pub file_type: String,
    /// Key the object was stored under.
    pub object_key: String,
}
