//! The view and model traits.

use axum::routing::MethodRouter;

use crate::ViewKind;

/// The model trait describes a data model that views can be associated with.
///
/// Typically implemented through the `Model` derive macro.
pub trait Model {
    /// The model type identifier, as written in the code (e.g. `ModelName`).
    const OBJECT_NAME: &'static str;

    /// An explicit monolithic model name.
    ///
    /// When `None`, the lower-case object name is used (e.g. `modelname`).
    const MODEL_NAME: Option<&'static str> = None;
}

/// Static information about a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// The model type identifier.
    pub object_name: &'static str,

    /// The monolithic model name.
    pub model_name: String,
}

impl ModelInfo {
    /// Get the information of a model type.
    pub fn of<M: Model + ?Sized>() -> Self {
        Self::new(M::OBJECT_NAME, M::MODEL_NAME)
    }

    /// Create model information from an object name and an optional explicit model name.
    pub fn new(object_name: &'static str, model_name: Option<&'static str>) -> Self {
        Self {
            object_name,
            model_name: match model_name {
                Some(model_name) => model_name.to_owned(),
                None => object_name.to_lowercase(),
            },
        }
    }
}

/// The view trait describes a structured view: a type with a kind and, possibly, a model.
///
/// Typically implemented through the `View` derive macro.
pub trait View {
    /// The view type identifier (e.g. `ListSome`).
    const NAME: &'static str;

    /// The module path where the view is defined, as returned by `module_path!()`.
    const MODULE_PATH: &'static str;

    /// The kind of the view.
    const KIND: ViewKind = ViewKind::Other;

    /// The model the view operates on, if any.
    fn model() -> Option<ModelInfo> {
        None
    }
}

/// A view that can be turned into an Axum handler.
pub trait AsView<S = ()>: View {
    /// Build the handler for the view.
    fn as_view() -> MethodRouter<S>;
}

/// Static information about a view, captured at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInfo {
    /// The view identifier: a type name for structured views, a function name otherwise.
    pub name: &'static str,

    /// The module path where the view is defined.
    pub module_path: &'static str,

    /// The kind of the view.
    pub kind: ViewKind,

    /// The model of the view.
    pub model: Option<ModelInfo>,

    /// Whether the view is a structured view (as opposed to a plain function).
    pub structured: bool,
}

impl ViewInfo {
    /// Get the information of a structured view type.
    pub fn of<V: View + ?Sized>() -> Self {
        Self {
            name: V::NAME,
            module_path: V::MODULE_PATH,
            kind: V::KIND,
            model: V::model(),
            structured: true,
        }
    }

    /// Create the information of a plain function view.
    pub fn function(name: &'static str, module_path: &'static str) -> Self {
        Self {
            name,
            module_path,
            kind: ViewKind::Other,
            model: None,
            structured: false,
        }
    }

    /// The top-level module segment, used as the namespace of the view's routes.
    pub fn namespace(&self) -> &'static str {
        self.module_path
            .split("::")
            .next()
            .unwrap_or(self.module_path)
    }

    /// The module segments between the namespace and the defining module.
    pub fn intermediate_segments(&self) -> Vec<&'static str> {
        let segments: Vec<_> = self.module_path.split("::").collect();

        match segments.len() {
            0..=2 => Vec::new(),
            len => segments[1..len - 1].to_vec(),
        }
    }

    /// The full path of the view (e.g. `test_app::views::ListSome`).
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module_path, self.name)
    }
}

/// How a view produces its handler.
#[derive(Debug)]
pub(crate) enum Handler<S> {
    /// A structured view: the handler is built at materialization.
    Factory(fn() -> MethodRouter<S>),

    /// A plain function: the handler is used as-is.
    Callable(MethodRouter<S>),
}

impl<S> Handler<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn to_method_router(&self) -> MethodRouter<S> {
        match self {
            Self::Factory(as_view) => as_view(),
            Self::Callable(method_router) => method_router.clone(),
        }
    }
}

/// A view ready to be registered: its information and its handler.
#[derive(Debug)]
pub struct ViewEntry<S = ()> {
    pub(crate) info: ViewInfo,
    pub(crate) handler: Handler<S>,
}

impl<S> ViewEntry<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create an entry for a structured view.
    pub fn of<V: AsView<S>>() -> Self {
        Self {
            info: ViewInfo::of::<V>(),
            handler: Handler::Factory(V::as_view),
        }
    }

    /// Create an entry for a plain function view.
    ///
    /// Prefer the `view_fn!` macro, which fills the name and the module path in.
    pub fn function(
        name: &'static str,
        module_path: &'static str,
        method_router: MethodRouter<S>,
    ) -> Self {
        Self {
            info: ViewInfo::function(name, module_path),
            handler: Handler::Callable(method_router),
        }
    }

    /// Get the view information.
    pub fn info(&self) -> &ViewInfo {
        &self.info
    }
}

/// Create a `ViewEntry` for a plain function handler.
///
/// The function name and the current module path are captured. The handler answers `GET`
/// requests, unless an explicit method router is given.
///
/// # Example
///
/// ```rust,ignore
/// async fn index() -> &'static str {
///     "Hello"
/// }
///
/// registry.path(view_fn!(index), RouteOptions::default());
/// registry.path(view_fn!(index, axum::routing::post(index)), RouteOptions::default());
/// ```
#[macro_export]
macro_rules! view_fn {
    ($handler:ident) => {
        $crate::ViewEntry::function(
            stringify!($handler),
            module_path!(),
            $crate::__private::axum::routing::get($handler),
        )
    };
    ($handler:ident, $method_router:expr) => {
        $crate::ViewEntry::function(stringify!($handler), module_path!(), $method_router)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ModelName;

    impl Model for ModelName {
        const OBJECT_NAME: &'static str = "ModelName";
    }

    struct Category;

    impl Model for Category {
        const OBJECT_NAME: &'static str = "Category";
        const MODEL_NAME: Option<&'static str> = Some("categories");
    }

    struct ListSome;

    impl View for ListSome {
        const NAME: &'static str = "ListSome";
        const MODULE_PATH: &'static str = "shop::catalog::views";
        const KIND: ViewKind = ViewKind::List;

        fn model() -> Option<ModelInfo> {
            Some(ModelInfo::of::<ModelName>())
        }
    }

    #[test]
    fn test_model_info() {
        assert_eq!(
            ModelInfo::of::<ModelName>(),
            ModelInfo {
                object_name: "ModelName",
                model_name: "modelname".to_owned(),
            }
        );
        assert_eq!(ModelInfo::of::<Category>().model_name, "categories");
    }

    #[test]
    fn test_view_info_of_structured_view() {
        let info = ViewInfo::of::<ListSome>();

        assert_eq!(info.name, "ListSome");
        assert_eq!(info.kind, ViewKind::List);
        assert!(info.structured);
        assert_eq!(info.model, Some(ModelInfo::of::<ModelName>()));
        assert_eq!(info.qualified_name(), "shop::catalog::views::ListSome");
    }

    #[test]
    fn test_view_info_module_segments() {
        let info = ViewInfo::of::<ListSome>();

        assert_eq!(info.namespace(), "shop");
        assert_eq!(info.intermediate_segments(), vec!["catalog"]);

        let info = ViewInfo::function("index", "test_app::views");

        assert_eq!(info.namespace(), "test_app");
        assert!(info.intermediate_segments().is_empty());

        let info = ViewInfo::function("index", "test_app");

        assert_eq!(info.namespace(), "test_app");
        assert!(info.intermediate_segments().is_empty());

        let info = ViewInfo::function("index", "a::b::c::views");

        assert_eq!(info.intermediate_segments(), vec!["b", "c"]);
    }

    #[test]
    fn test_function_view_info() {
        let info = ViewInfo::function("simple_fbv", "test_app::views");

        assert!(!info.structured);
        assert_eq!(info.kind, ViewKind::Other);
        assert_eq!(info.model, None);
    }
}
