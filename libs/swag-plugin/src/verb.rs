//! HTTP verbs understood by the CRUD documentation and their profiles.

use http::Method;

use crate::constants::{self, VerbText};
use crate::response_codes::ResponseCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    /// Any verb without a profile.
    Other,
}

/// Canonical text and documented status codes for one verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbProfile {
    pub text: VerbText,
    pub codes: &'static [ResponseCode],
}

static GET_PROFILE: VerbProfile = VerbProfile {
    text: constants::GET,
    codes: &[
        ResponseCode::Success,
        ResponseCode::NoContent,
        ResponseCode::BadRequest,
        ResponseCode::Unauthorized,
        ResponseCode::NotFound,
    ],
};

static POST_PROFILE: VerbProfile = VerbProfile {
    text: constants::POST,
    codes: &[
        ResponseCode::Created,
        ResponseCode::BadRequest,
        ResponseCode::Unauthorized,
        ResponseCode::Conflicted,
    ],
};

static PUT_PROFILE: VerbProfile = VerbProfile {
    text: constants::PUT,
    codes: &[
        ResponseCode::Success,
        ResponseCode::BadRequest,
        ResponseCode::Unauthorized,
        ResponseCode::NotFound,
        ResponseCode::Conflicted,
    ],
};

static PATCH_PROFILE: VerbProfile = VerbProfile {
    text: constants::PATCH,
    codes: &[
        ResponseCode::Success,
        ResponseCode::BadRequest,
        ResponseCode::Unauthorized,
        ResponseCode::NotFound,
    ],
};

static DELETE_PROFILE: VerbProfile = VerbProfile {
    text: constants::DELETE,
    codes: &[
        ResponseCode::Success,
        ResponseCode::BadRequest,
        ResponseCode::Unauthorized,
        ResponseCode::NotFound,
    ],
};

impl HttpVerb {
    /// Case-insensitive parse; anything outside the five CRUD verbs is `Other`.
    #[must_use]
    pub fn parse(verb: &str) -> Self {
        let verb = verb.trim();
        if verb.eq_ignore_ascii_case("get") {
            Self::Get
        } else if verb.eq_ignore_ascii_case("post") {
            Self::Post
        } else if verb.eq_ignore_ascii_case("put") {
            Self::Put
        } else if verb.eq_ignore_ascii_case("patch") {
            Self::Patch
        } else if verb.eq_ignore_ascii_case("delete") {
            Self::Delete
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub fn from_method(method: &Method) -> Self {
        Self::parse(method.as_str())
    }

    /// Profile for the verb, `None` when the fallback applies.
    #[must_use]
    pub fn profile(self) -> Option<&'static VerbProfile> {
        match self {
            Self::Get => Some(&GET_PROFILE),
            Self::Post => Some(&POST_PROFILE),
            Self::Put => Some(&PUT_PROFILE),
            Self::Patch => Some(&PATCH_PROFILE),
            Self::Delete => Some(&DELETE_PROFILE),
            Self::Other => None,
        }
    }
}
