//! The materialized route table.

use std::collections::HashSet;

use axum::{Extension, Router, routing::MethodRouter};
use serde::Serialize;

use crate::{
    Descriptor, Kwargs, RouteMatcher, RouterOptions, SealedRegistry, ViewInfo, registry::Registration,
};

mod error;
mod path;

pub use error::IntoRouterError;

/// A route of the materialized table.
#[derive(Debug, Clone)]
pub struct UrlPattern<S = ()> {
    /// The namespace of the route.
    pub namespace: &'static str,

    /// How the pattern is matched.
    pub matcher: RouteMatcher,

    /// The pattern, relative to the namespace and prefixed by the intermediate module segments.
    pub pattern: String,

    /// The name, relative to the namespace.
    pub name: String,

    /// The extra options.
    pub kwargs: Kwargs,

    /// The view.
    pub view: ViewInfo,

    /// The handler.
    pub handler: MethodRouter<S>,
}

impl<S> UrlPattern<S> {
    /// The name, qualified by the namespace (e.g. `test_app:modelname_list`).
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace, self.name)
    }

    /// The path of the route in the Axum router (e.g. `/test_app/modelname/{pk}/`).
    pub fn axum_path(&self) -> Result<String, IntoRouterError> {
        let path = match self.matcher {
            RouteMatcher::Path => path::from_path_pattern(&self.pattern),
            RouteMatcher::RePath => path::from_regex_pattern(&self.pattern)?,
        };

        Ok(format!("/{}{path}", self.namespace))
    }

    /// The URL of the route, as displayed to humans (e.g. `/test_app/modelname/<int:pk>/`).
    ///
    /// Regular expression patterns are simplified to a path when possible.
    pub fn url(&self) -> String {
        match self.matcher {
            RouteMatcher::Path => format!("/{}/{}", self.namespace, self.pattern),
            RouteMatcher::RePath => match path::from_regex_pattern(&self.pattern) {
                Ok(path) => format!("/{}{path}", self.namespace),
                Err(_) => format!("/{}/{}", self.namespace, self.pattern),
            },
        }
    }

    /// Describe the route.
    pub fn describe(&self) -> RouteDescription {
        RouteDescription {
            url: self.url(),
            module: self.view.qualified_name(),
            name: self.qualified_name(),
        }
    }
}

/// The routes of a namespace, grouped under the `<namespace>/` prefix.
#[derive(Debug, Clone)]
pub struct Include<S = ()> {
    /// The prefix of every route (e.g. `test_app/`).
    pub prefix: String,

    /// The namespace.
    pub namespace: &'static str,

    /// The routes.
    pub patterns: Vec<UrlPattern<S>>,
}

/// The route metadata made available to handlers through request extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    /// The namespace of the route.
    pub namespace: String,

    /// The name of the route, relative to the namespace.
    pub name: String,

    /// The extra options of the route.
    pub kwargs: Kwargs,
}

impl RouteInfo {
    /// The name, qualified by the namespace.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace, self.name)
    }
}

/// A serializable description of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescription {
    /// The URL of the route.
    pub url: String,

    /// The full path of the view.
    pub module: String,

    /// The qualified name of the route.
    pub name: String,
}

/// The materialized route table.
#[derive(Debug, Clone)]
pub struct UrlPatterns<S = ()> {
    includes: Vec<Include<S>>,
}

impl<S> UrlPatterns<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Materialize the route table of a sealed registry.
    pub fn materialize(registry: &SealedRegistry<S>, options: &RouterOptions) -> Self {
        let includes = registry
            .namespaces()
            .iter()
            .map(|namespace| Include {
                prefix: format!("{}/", namespace.name()),
                namespace: namespace.name(),
                patterns: namespace
                    .registrations()
                    .iter()
                    .map(|registration| resolve(namespace.name(), registration, options))
                    .collect(),
            })
            .collect();

        Self { includes }
    }

    /// The namespaces, in the order of their first registration.
    pub fn includes(&self) -> &[Include<S>] {
        &self.includes
    }

    /// Iterate over every route.
    pub fn iter(&self) -> impl Iterator<Item = &UrlPattern<S>> {
        self.includes.iter().flat_map(|include| include.patterns.iter())
    }

    /// Find a route by its qualified name (e.g. `test_app:modelname_list`).
    ///
    /// When several routes share a name, the first one registered is returned.
    pub fn find(&self, qualified_name: &str) -> Option<&UrlPattern<S>> {
        let (namespace, name) = qualified_name.split_once(':')?;

        self.includes
            .iter()
            .filter(|include| include.namespace == namespace)
            .flat_map(|include| include.patterns.iter())
            .find(|url_pattern| url_pattern.name == name)
    }

    /// Describe every route.
    pub fn describe(&self) -> Vec<RouteDescription> {
        self.iter().map(UrlPattern::describe).collect()
    }

    /// Build an Axum router serving every route.
    ///
    /// Each namespace is nested under `/<namespace>` and every handler receives a `RouteInfo`
    /// extension.
    pub fn into_router(self) -> Result<Router<S>, IntoRouterError> {
        let mut router = Router::new();

        for include in self.includes {
            let mut nested = Router::new();
            let mut paths = HashSet::with_capacity(include.patterns.len());
            let mut scratch = matchit::Router::new();

            for url_pattern in include.patterns {
                let path = match url_pattern.matcher {
                    RouteMatcher::Path => path::from_path_pattern(&url_pattern.pattern),
                    RouteMatcher::RePath => path::from_regex_pattern(&url_pattern.pattern)?,
                };

                if !paths.insert(path.clone()) {
                    return Err(IntoRouterError::DuplicatePath {
                        namespace: include.namespace.to_owned(),
                        path,
                    });
                }

                let invalid_path = |reason: String| IntoRouterError::InvalidPath {
                    namespace: include.namespace.to_owned(),
                    path: path.clone(),
                    reason,
                };

                path::check_segments(&path).map_err(|reason| invalid_path(reason.to_owned()))?;

                // Axum panics on the paths its matcher refuses, so they are inserted in a
                // scratch matcher first.
                match scratch.insert(path.clone(), ()) {
                    Ok(()) => {}
                    Err(matchit::InsertError::Conflict { with }) => {
                        return Err(IntoRouterError::ConflictingPath {
                            namespace: include.namespace.to_owned(),
                            path,
                            with,
                        });
                    }
                    Err(err) => return Err(invalid_path(err.to_string())),
                }

                tracing::debug!(
                    name = %url_pattern.qualified_name(),
                    path = %format!("/{}{path}", include.namespace),
                    "Adding route."
                );

                let info = RouteInfo {
                    namespace: include.namespace.to_owned(),
                    name: url_pattern.name,
                    kwargs: url_pattern.kwargs,
                };

                nested = nested.route(&path, url_pattern.handler.layer(Extension(info)));
            }

            router = router.nest(&format!("/{}", include.namespace), nested);
        }

        Ok(router)
    }
}

fn resolve<S>(
    namespace: &'static str,
    registration: &Registration<S>,
    options: &RouterOptions,
) -> UrlPattern<S>
where
    S: Clone + Send + Sync + 'static,
{
    let view = registration.view.info();

    let (pattern, name) = match (&registration.pattern, &registration.name) {
        (Some(pattern), Some(name)) => (pattern.clone(), name.clone()),
        (pattern, name) => {
            let descriptor = Descriptor::derive(view, options);

            (
                pattern.clone().unwrap_or(descriptor.pattern),
                name.clone().unwrap_or(descriptor.name),
            )
        }
    };

    let pattern = prefix_pattern(registration.matcher, &view.intermediate_segments(), &pattern);

    tracing::debug!(
        namespace,
        view = %view.qualified_name(),
        %pattern,
        %name,
        "Resolved route."
    );

    UrlPattern {
        namespace,
        matcher: registration.matcher,
        pattern,
        name,
        kwargs: registration.kwargs.clone(),
        view: view.clone(),
        handler: registration.view.handler.to_method_router(),
    }
}

/// Prefix a pattern with the intermediate module segments.
///
/// Regular expression patterns keep their leading `^` anchor in front.
fn prefix_pattern(matcher: RouteMatcher, segments: &[&str], pattern: &str) -> String {
    if segments.is_empty() {
        return pattern.to_owned();
    }

    let prefix = segments.join("/");

    match (matcher, pattern.strip_prefix('^')) {
        (RouteMatcher::RePath, Some(rest)) => format!("^{prefix}/{rest}"),
        _ => format!("{prefix}/{pattern}"),
    }
}
