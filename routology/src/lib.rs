//! Routology
//!
//! Convention-based route naming for Axum: register views, and let their patterns and names be
//! derived from their kind, their model and the module they live in.
//!
//! # Features
//!
//! - `derive`: The `View` and `Model` derive macros. **Enabled by default.**
//! - `examples`: Dependencies of the runnable demos.

pub mod commands;

mod naming;
mod options;
mod registry;
mod urls;
mod verbs;
mod view;

pub use naming::from_camel;
pub use options::{RouterOptions, RouterOptionsFromEnvError};
pub use registry::{
    Descriptor, Kwargs, Namespace, PK_SEGMENT, Registration, RegistrationHandle, RouteMatcher,
    RouteOptions, RouteRegistry, SealedRegistry,
};
pub use urls::{Include, IntoRouterError, RouteDescription, RouteInfo, UrlPattern, UrlPatterns};
pub use verbs::{Verb, VerbTable, ViewKind};
pub use view::{AsView, Model, ModelInfo, View, ViewEntry, ViewInfo};

#[cfg(feature = "derive")]
pub use routology_macros::{Model, View};

#[doc(hidden)]
pub mod __private {
    pub use axum;
}
