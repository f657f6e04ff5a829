//! HTTP status code classification for upstream API responses.

/// HTTP status code returned by the change-management API.
///
/// Stored directly rather than parsed back out of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Anything the transport must surface as a failure.
    pub fn is_failure(&self) -> bool {
        self.0 >= 400
    }

    /// 401/403: the credential is missing, wrong, or lacks permission.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.0, 401 | 403)
    }

    /// 204 responses carry no body and normalize to an empty object.
    pub fn is_no_content(&self) -> bool {
        self.0 == 204
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
