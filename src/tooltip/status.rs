use crate::lookup::ResponseStatus;

/// What the UI does with a finished lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Show the body as tooltip text
    Show(String),
    /// The server had nothing to say
    NoContent,
    /// Tell the user, with status and body
    Alert(String),
}

/// Map a response status to its UI action
pub fn resolve(status: ResponseStatus, body: &str) -> Resolution {
    match status.normalized() {
        ResponseStatus::Code(200) => Resolution::Show(body.to_string()),
        ResponseStatus::Code(204) => Resolution::NoContent,
        other => Resolution::Alert(format!("{}\n{}", other, body)),
    }
}
