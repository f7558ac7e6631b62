//! Text helpers for git ref names and pull request messages.

/// Prefix of a fully qualified branch ref.
pub const REF_PREFIX: &str = "refs/heads/";

/// Convert a branch name into a fully qualified ref name.
///
/// Azure DevOps always expects refs, not bare branch names. A name that
/// already carries the `refs/heads/` prefix is returned unchanged.
///
/// # Example
///
/// ```
/// use ado_pr::utils::normalize_ref_name;
///
/// assert_eq!(normalize_ref_name("main"), "refs/heads/main");
/// assert_eq!(normalize_ref_name("refs/heads/main"), "refs/heads/main");
/// ```
pub fn normalize_ref_name(branch: &str) -> String {
    if branch.starts_with(REF_PREFIX) {
        branch.to_string()
    } else {
        format!("{REF_PREFIX}{branch}")
    }
}

/// Split a `TITLE;DESCRIPTION` message into title and description.
///
/// The first `;`-separated segment is the title. The remaining segments are
/// concatenated without a separator to form the description.
///
/// # Example
///
/// ```
/// use ado_pr::utils::split_message;
///
/// let (title, description) = split_message("Fix bug;Resolves issue #42;see also #43");
/// assert_eq!(title, "Fix bug");
/// assert_eq!(description, "Resolves issue #42see also #43");
/// ```
pub fn split_message(message: &str) -> (String, String) {
    let mut segments = message.split(';');
    let title = segments.next().unwrap_or_default().to_string();
    let description = segments.collect::<String>();
    (title, description)
}
