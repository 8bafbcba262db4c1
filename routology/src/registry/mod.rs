//! The route registry.
//!
//! Views are registered into a `RouteRegistry` during application setup. Once every view is
//! registered, the registry is sealed and the resulting `SealedRegistry` materializes the route
//! table as many times as needed.

use std::collections::{BTreeMap, HashMap};

use crate::{RouterOptions, UrlPatterns, ViewEntry};

mod derive;

pub use derive::{Descriptor, PK_SEGMENT};

/// Extra options attached to a route and handed to its view.
pub type Kwargs = BTreeMap<String, serde_json::Value>;

/// How the pattern of a route is matched by the host router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMatcher {
    /// The pattern is a path with `<converter:name>` placeholders.
    Path,

    /// The pattern is a regular expression.
    RePath,
}

impl std::fmt::Display for RouteMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Path => "path",
            Self::RePath => "re_path",
        })
    }
}

/// The options of a route registration.
///
/// Fields left unset are derived from the view at materialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteOptions {
    /// An explicit pattern.
    pub pattern: Option<String>,

    /// An explicit name.
    pub name: Option<String>,

    /// Extra options handed to the view.
    pub kwargs: Kwargs,
}

impl RouteOptions {
    /// Set an explicit pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set an explicit name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add an extra option.
    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }
}

/// A registered route, awaiting materialization.
#[derive(Debug)]
pub struct Registration<S = ()> {
    /// How the pattern is matched.
    pub matcher: RouteMatcher,

    /// The explicit pattern, if any.
    pub pattern: Option<String>,

    /// The view.
    pub view: ViewEntry<S>,

    /// The explicit name, if any.
    pub name: Option<String>,

    /// The extra options.
    pub kwargs: Kwargs,
}

/// A handle on a registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationHandle {
    /// The namespace of the registration.
    pub namespace: &'static str,

    /// The position of the registration in its namespace.
    pub index: usize,
}

/// The routes of a namespace, in registration order.
#[derive(Debug)]
pub struct Namespace<S = ()> {
    name: &'static str,
    registrations: Vec<Registration<S>>,
}

impl<S> Namespace<S> {
    /// The namespace name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The registrations, in registration order.
    pub fn registrations(&self) -> &[Registration<S>] {
        &self.registrations
    }
}

/// A registry that is open for registrations.
#[derive(Debug)]
pub struct RouteRegistry<S = ()> {
    namespaces: Vec<Namespace<S>>,
    index: HashMap<&'static str, usize>,
}

impl<S> Default for RouteRegistry<S> {
    fn default() -> Self {
        Self {
            namespaces: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S> RouteRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view under an exact path pattern.
    ///
    /// When `options` carries no pattern, one is derived from the view at materialization.
    pub fn path(&mut self, view: ViewEntry<S>, options: RouteOptions) -> RegistrationHandle {
        self.push(RouteMatcher::Path, options.pattern, view, options.name, options.kwargs)
    }

    /// Register a view under a regular expression pattern.
    pub fn re_path(
        &mut self,
        pattern: impl Into<String>,
        view: ViewEntry<S>,
        options: RouteOptions,
    ) -> RegistrationHandle {
        self.push(
            RouteMatcher::RePath,
            Some(pattern.into()),
            view,
            options.name,
            options.kwargs,
        )
    }

    fn push(
        &mut self,
        matcher: RouteMatcher,
        pattern: Option<String>,
        view: ViewEntry<S>,
        name: Option<String>,
        kwargs: Kwargs,
    ) -> RegistrationHandle {
        let namespace = view.info.namespace();

        tracing::debug!(
            %matcher,
            namespace,
            view = %view.info.qualified_name(),
            ?pattern,
            ?name,
            "Registering route."
        );

        let position = *self.index.entry(namespace).or_insert_with(|| {
            self.namespaces.push(Namespace {
                name: namespace,
                registrations: Vec::new(),
            });

            self.namespaces.len() - 1
        });

        let registrations = &mut self.namespaces[position].registrations;

        registrations.push(Registration {
            matcher,
            pattern,
            view,
            name,
            kwargs,
        });

        RegistrationHandle {
            namespace,
            index: registrations.len() - 1,
        }
    }

    /// Get a registration from its handle.
    pub fn get(&self, handle: &RegistrationHandle) -> Option<&Registration<S>> {
        get(&self.namespaces, &self.index, handle)
    }

    /// End the registration phase.
    pub fn seal(self) -> SealedRegistry<S> {
        tracing::debug!(
            namespaces = self.namespaces.len(),
            routes = self
                .namespaces
                .iter()
                .map(|namespace| namespace.registrations.len())
                .sum::<usize>(),
            "Sealing route registry."
        );

        SealedRegistry {
            namespaces: self.namespaces,
            index: self.index,
        }
    }
}

fn get<'r, S>(
    namespaces: &'r [Namespace<S>],
    index: &HashMap<&'static str, usize>,
    handle: &RegistrationHandle,
) -> Option<&'r Registration<S>> {
    index
        .get(handle.namespace)
        .and_then(|&position| namespaces[position].registrations.get(handle.index))
}

/// A registry that no longer accepts registrations.
#[derive(Debug)]
pub struct SealedRegistry<S = ()> {
    namespaces: Vec<Namespace<S>>,
    index: HashMap<&'static str, usize>,
}

impl<S> SealedRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// The namespaces, in the order of their first registration.
    pub fn namespaces(&self) -> &[Namespace<S>] {
        &self.namespaces
    }

    /// Get a registration from its handle.
    pub fn get(&self, handle: &RegistrationHandle) -> Option<&Registration<S>> {
        get(&self.namespaces, &self.index, handle)
    }

    /// Materialize the route table.
    ///
    /// Patterns and names are derived again on every call.
    pub fn urlpatterns(&self, options: &RouterOptions) -> UrlPatterns<S> {
        UrlPatterns::materialize(self, options)
    }
}
