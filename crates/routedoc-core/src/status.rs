//! Named HTTP response statuses.

macro_rules! http_statuses {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// A response status as named by route handlers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HttpStatus {
            $($variant),+
        }

        impl HttpStatus {
            pub const ALL: &'static [HttpStatus] = &[$(HttpStatus::$variant),+];

            pub fn code(self) -> &'static str {
                match self {
                    $(HttpStatus::$variant => $code),+
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(HttpStatus::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

http_statuses! {
    Continue => "100",
    SwitchingProtocols => "101",
    Processing => "102",
    OK => "200",
    Created => "201",
    Accepted => "202",
    NonAuthoritativeInformation => "203",
    NoContent => "204",
    ResetContent => "205",
    PartialContent => "206",
    MultiStatus => "207",
    MultipleChoices => "300",
    MovedPermanently => "301",
    Found => "302",
    SeeOther => "303",
    NotModified => "304",
    UseProxy => "305",
    SwitchProxy => "306",
    TemporaryRedirect => "307",
    PermanentRedirect => "308",
    BadRequest => "400",
    Unauthorized => "401",
    PaymentRequired => "402",
    Forbidden => "403",
    NotFound => "404",
    MethodNotAllowed => "405",
    NotAcceptable => "406",
    ProxyAuthenticationRequired => "407",
    RequestTimeout => "408",
    Conflict => "409",
    Gone => "410",
    LengthRequired => "411",
    PreconditionFailed => "412",
    PayloadTooLarge => "413",
    RequestURITooLong => "414",
    UnsupportedMediaType => "415",
    RequestedRangeNotSatisfiable => "416",
    ExpectationFailed => "417",
    UnprocessableEntity => "422",
    Locked => "423",
    FailedDependency => "424",
    UpgradeRequired => "426",
    TooManyRequests => "429",
    RequestHeaderFieldTooLarge => "431",
    InternalServerError => "500",
    NotImplemented => "501",
    BadGateway => "502",
    ServiceUnavailable => "503",
    GatewayTimeout => "504",
    VersionNotSupported => "505",
    VariantAlsoNegotiates => "506",
    InsufficientStorage => "507",
}

impl HttpStatus {
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.name() == name)
    }

    /// Status code for a status name; unknown or missing names mean `200`.
    pub fn resolve(name: Option<&str>) -> &'static str {
        name.and_then(Self::from_name)
            .unwrap_or(HttpStatus::OK)
            .code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(HttpStatus::resolve(Some("Created")), "201");
        assert_eq!(HttpStatus::resolve(Some("NotFound")), "404");
        assert_eq!(HttpStatus::resolve(Some("InsufficientStorage")), "507");
    }

    #[test]
    fn test_resolve_defaults_to_ok() {
        assert_eq!(HttpStatus::resolve(None), "200");
        assert_eq!(HttpStatus::resolve(Some("Teapot")), "200");
        assert_eq!(HttpStatus::resolve(Some("created")), "200");
    }

    #[test]
    fn test_names_round_trip() {
        for status in HttpStatus::ALL {
            assert_eq!(HttpStatus::from_name(status.name()), Some(*status));
        }
    }
}
