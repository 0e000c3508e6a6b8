use std::fmt;

/// Which endpoint a lookup targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Documentation for the function call being typed
    Doc,
    /// Member listing for the object reference being typed
    Dir,
}

impl LookupKind {
    pub fn path_segment(self) -> &'static str {
        match self {
            LookupKind::Doc => "/doc",
            LookupKind::Dir => "/dir",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LookupKind::Doc => "doc",
            LookupKind::Dir => "dir",
        }
    }
}

/// A lookup ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub kind: LookupKind,
    /// Input context that triggered the lookup
    pub uid: String,
    /// Path and query, e.g. `/doc_42?uid=1`
    pub path: String,
    /// Percent-encoded query text
    pub body: String,
}

/// Status of a finished exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Code(u16),
    /// No response could be obtained from the server
    NoResponse,
}

impl ResponseStatus {
    /// Status code some HTTP stacks report for a 204
    pub const NO_CONTENT_ALIAS: u16 = 1223;
    /// Status code some HTTP stacks report when the server could not be reached
    pub const CANNOT_CONNECT_ALIAS: u16 = 12029;

    /// Fold the platform aliases into the canonical statuses
    pub fn normalized(self) -> Self {
        match self {
            ResponseStatus::Code(Self::CANNOT_CONNECT_ALIAS) => ResponseStatus::NoResponse,
            ResponseStatus::Code(Self::NO_CONTENT_ALIAS) => ResponseStatus::Code(204),
            other => other,
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Code(code) => write!(f, "{}", code),
            ResponseStatus::NoResponse => f.write_str("NO HTTP RESPONSE"),
        }
    }
}

/// A completed lookup, delivered back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub kind: LookupKind,
    pub uid: String,
    pub status: ResponseStatus,
    pub body: String,
}

impl LookupResponse {
    /// Completion for a request that never got a response
    pub fn no_response(request: &LookupRequest) -> Self {
        Self {
            kind: request.kind,
            uid: request.uid.clone(),
            status: ResponseStatus::NoResponse,
            body: String::new(),
        }
    }
}
