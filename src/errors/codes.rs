use std::fmt;

/// Error categories with a fixed HTTP status and standard label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed request
    BadRequest,

    /// Missing or invalid credentials
    Unauthorized,

    /// Credentials valid but access denied
    Forbidden,

    /// Requested resource does not exist
    NotFound,

    /// Input validation failed
    UnprocessableEntity,

    /// Internal server error
    InternalServerError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ErrorKind {
    /// Get HTTP status code for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::UnprocessableEntity => 422,
            Self::InternalServerError => 500,
        }
    }

    /// Standard reason phrase used as the short message
    pub fn label(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    /// Reverse lookup from a status code
    pub fn from_status(code: u16) -> Option<Self> {
        match code {
            400 => Some(Self::BadRequest),
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            422 => Some(Self::UnprocessableEntity),
            500 => Some(Self::InternalServerError),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorKind; 6] = [
        ErrorKind::BadRequest,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::NotFound,
        ErrorKind::UnprocessableEntity,
        ErrorKind::InternalServerError,
    ];

    #[test]
    fn test_kind_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::UnprocessableEntity.status_code(), 422);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
    }

    #[test]
    fn test_from_status_inverts_status_code() {
        for kind in ALL {
            assert_eq!(ErrorKind::from_status(kind.status_code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_status(418), None);
        assert_eq!(ErrorKind::from_status(0), None);
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
        assert_eq!(
            ErrorKind::InternalServerError.to_string(),
            "Internal Server Error"
        );
    }
}
