//! Host record access

/// A record whose named fields can be validated.
///
/// This is the seam between the rules layer and the host's own object
/// model: the host exposes field values and, optionally, named boolean
/// conditions by name, and never learns anything about how validation
/// works.
pub trait DocumentRecord {
    /// The value of the named field, or `None` when the record holds no
    /// value for it. Absent and blank fields are skipped, not failed.
    fn document_field(&self, name: &str) -> Option<&str>;

    /// Resolves a named activation condition, or `None` when the record
    /// does not define it.
    fn named_condition(&self, name: &str) -> Option<bool> {
        let _ = name;
        None
    }
}
