//! Naming rules for declared members.

/// A name can be emitted as a bare object key iff it starts with an ASCII
/// letter and continues with ASCII letters or digits only.
pub(crate) fn is_bare_key(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Emit a member name, quoting it when it is not a valid bare key.
pub(crate) fn member_key(name: &str) -> String {
    if is_bare_key(name) {
        name.to_string()
    } else {
        format!("\"{}\"", name)
    }
}
