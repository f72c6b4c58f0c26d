//! Catalog of the status codes the CRUD documentation knows about.

use std::borrow::Cow;

/// Standard response codes with canonical descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ResponseCode {
    Success = 200,
    Created = 201,
    NoContent = 204,
    BadRequest = 400,
    Unauthorized = 401,
    NotFound = 404,
    Conflicted = 409,
    InternalServerError = 500,
}

impl ResponseCode {
    /// Every catalog entry, in ascending order.
    pub const ALL: [Self; 8] = [
        Self::Success,
        Self::Created,
        Self::NoContent,
        Self::BadRequest,
        Self::Unauthorized,
        Self::NotFound,
        Self::Conflicted,
        Self::InternalServerError,
    ];

    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    #[must_use]
    pub fn from_u16(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_u16() == code)
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => {
                "Success - The request has succeeded, and the requested information is returned in the response."
            }
            Self::Created => {
                "Created - The request has been fulfilled, resulting in the creation of a new resource."
            }
            Self::NoContent => {
                "No Content - The server has successfully fulfilled the request, but there is no content to send in the response."
            }
            Self::BadRequest => {
                "Bad Request - The server cannot or will not process the request due to something that is perceived to be a client error (e.g., malformed request syntax)."
            }
            Self::Unauthorized => {
                "Unauthorized - The request has not been applied because it lacks valid authentication credentials for the target resource."
            }
            Self::NotFound => {
                "Not Found - The server has not found anything matching the Request-URI. No indication is given of whether the condition is temporary or permanent."
            }
            Self::Conflicted => {
                "Conflict - The request could not be completed due to a conflict with the current state of the resource."
            }
            Self::InternalServerError => {
                "Internal Server Error - The server encountered an unexpected condition that prevented it from fulfilling the request."
            }
        }
    }
}

/// Canonical description for any status code, catalog or not.
#[must_use]
pub fn default_description_for_status(code: u16) -> Cow<'static, str> {
    match ResponseCode::from_u16(code) {
        Some(known) => Cow::Borrowed(known.description()),
        None => Cow::Owned(format!(
            "HTTP Status Code {code} - This status code is not standard, or specific information for this code is not available."
        )),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn catalog_round_trips_through_numeric_codes() {
        for code in ResponseCode::ALL {
            assert_eq!(ResponseCode::from_u16(code.as_u16()), Some(code));
        }
        assert_eq!(ResponseCode::from_u16(418), None);
    }

    #[test]
    fn catalog_is_sorted_and_complete() {
        let codes: Vec<u16> = ResponseCode::ALL.iter().map(|c| c.as_u16()).collect();
        assert_eq!(codes, vec![200, 201, 204, 400, 401, 404, 409, 500]);
    }

    #[test]
    fn unknown_code_gets_generic_description() {
        assert_eq!(
            default_description_for_status(418),
            "HTTP Status Code 418 - This status code is not standard, or specific information for this code is not available."
        );
        assert!(default_description_for_status(404).starts_with("Not Found - "));
    }
}
