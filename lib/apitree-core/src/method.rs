use std::str::FromStr;

/// HTTP methods that produce request nodes for path operations.
///
/// Keys of a path item are matched case-sensitively against the lowercase
/// names, so `GET` or `parameters` are not methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpMethod {
    /// `get`
    #[display("get")]
    Get,
    /// `head`
    #[display("head")]
    Head,
    /// `post`
    #[display("post")]
    Post,
    /// `put`
    #[display("put")]
    Put,
    /// `patch`
    #[display("patch")]
    Patch,
    /// `delete`
    #[display("delete")]
    Delete,
    /// `connect`
    #[display("connect")]
    Connect,
    /// `options`
    #[display("options")]
    Options,
    /// `trace`
    #[display("trace")]
    Trace,
}

impl HttpMethod {
    /// Every allowed method.
    pub const ALL: [Self; 9] = [
        Self::Get,
        Self::Head,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
        Self::Connect,
        Self::Options,
        Self::Trace,
    ];

    /// Returns the lowercase method name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Head => "head",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Connect => "connect",
            Self::Options => "options",
            Self::Trace => "trace",
        }
    }

    /// Returns `true` if the path item key names an allowed method.
    #[must_use]
    pub fn is_allowed(key: &str) -> bool {
        key.parse::<Self>().is_ok()
    }
}

/// Error returned when a key is not an allowed method.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("'{key}' is not an allowed HTTP method")]
pub struct UnknownMethod {
    /// The rejected key.
    pub key: String,
}

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == key)
            .ok_or_else(|| UnknownMethod {
                key: key.to_string(),
            })
    }
}
