//! Error types for router building.

/// An error that can occur when turning the route table into an Axum router.
#[derive(Debug, thiserror::Error)]
pub enum IntoRouterError {
    /// A regular expression pattern did not compile.
    #[error("invalid regular expression `{pattern}`: {err}")]
    InvalidRegex {
        /// The pattern.
        pattern: String,

        /// The compilation error.
        #[source]
        err: regex::Error,
    },

    /// A regular expression pattern cannot be expressed as an Axum path.
    ///
    /// Only literal characters, anchors and named groups are supported.
    #[error("regular expression `{pattern}` cannot be expressed as a path")]
    UnsupportedRegex {
        /// The pattern.
        pattern: String,
    },

    /// Two routes of the same namespace resolved to the same path.
    #[error("more than one route resolves to `{path}` in namespace `{namespace}`")]
    DuplicatePath {
        /// The namespace.
        namespace: String,

        /// The Axum path.
        path: String,
    },

    /// A route overlaps a route added earlier in the same namespace.
    #[error("route `{path}` conflicts with `{with}` in namespace `{namespace}`")]
    ConflictingPath {
        /// The namespace.
        namespace: String,

        /// The Axum path.
        path: String,

        /// The Axum path of the earlier route.
        with: String,
    },

    /// A path that Axum refuses to route.
    #[error("invalid path `{path}` in namespace `{namespace}`: {reason}")]
    InvalidPath {
        /// The namespace.
        namespace: String,

        /// The Axum path.
        path: String,

        /// Why the path is rejected.
        reason: String,
    },
}
