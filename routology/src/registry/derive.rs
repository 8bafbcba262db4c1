//! Default pattern and name derivation.

use itertools::Itertools;

use crate::{RouterOptions, VerbTable, ViewInfo, naming::from_camel};

/// The primary key path segment of single-object routes.
pub const PK_SEGMENT: &str = "<int:pk>";

/// A derived pattern and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// The pattern, without a leading slash and with a trailing slash (e.g. `modelname/<int:pk>/`).
    pub pattern: String,

    /// The name (e.g. `modelname_detail`).
    pub name: String,
}

impl Descriptor {
    /// Derive the default pattern and name of a view.
    pub fn derive(view: &ViewInfo, options: &RouterOptions) -> Self {
        let separator = options.words_separator.as_str();

        if options.simple_auto_naming || !view.structured {
            return Self::from_view_name(view, separator);
        }

        let model = match &view.model {
            Some(model) if options.try_use_model_names => model,
            _ => return Self::from_view_name(view, separator),
        };

        let model_token = if options.model_names_monolithic {
            model.model_name.clone()
        } else {
            from_camel(model.object_name, separator)
        };

        let (verb_name, verb_pattern) =
            match VerbTable::select(options.admin_like_verbs).verb(view.kind) {
                Some(verb) => (verb.name.to_owned(), verb.pattern.to_owned()),
                None => {
                    let token = from_camel(&view.name.replace(model.object_name, ""), separator);

                    (token.clone(), token)
                }
            };

        let pk_segment = if view.kind.is_single_object() {
            PK_SEGMENT
        } else {
            ""
        };

        let pattern = [model_token.as_str(), pk_segment, verb_pattern.as_str()]
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .join("/");

        let name = [model_token.as_str(), verb_name.as_str()]
            .into_iter()
            .filter(|token| !token.is_empty())
            .join(separator);

        Self {
            pattern: format!("{pattern}/"),
            name,
        }
    }

    fn from_view_name(view: &ViewInfo, separator: &str) -> Self {
        let name = from_camel(view.name, separator);

        Self {
            pattern: format!("{name}/"),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModelInfo, ViewKind};

    fn view(name: &'static str, kind: ViewKind, model: bool) -> ViewInfo {
        ViewInfo {
            name,
            module_path: "test_app::views",
            kind,
            model: model.then(|| ModelInfo::new("ModelName", None)),
            structured: true,
        }
    }

    fn derive(view: &ViewInfo, options: &RouterOptions) -> (String, String) {
        let descriptor = Descriptor::derive(view, options);

        (descriptor.pattern, descriptor.name)
    }

    fn pair(pattern: &str, name: &str) -> (String, String) {
        (pattern.to_owned(), name.to_owned())
    }

    #[test]
    fn test_derive_default_options() {
        let options = RouterOptions::default();

        assert_eq!(
            derive(&view("ListSome", ViewKind::List, true), &options),
            pair("modelname/", "modelname_list")
        );
        assert_eq!(
            derive(&view("JustADetailView", ViewKind::Detail, true), &options),
            pair("modelname/<int:pk>/", "modelname_detail")
        );
        assert_eq!(
            derive(&view("CreateSome", ViewKind::Create, true), &options),
            pair("modelname/create/", "modelname_create")
        );
        assert_eq!(
            derive(&view("LetsUpdate", ViewKind::Update, true), &options),
            pair("modelname/<int:pk>/update/", "modelname_update")
        );
        assert_eq!(
            derive(&view("RemoveIt", ViewKind::Delete, true), &options),
            pair("modelname/<int:pk>/delete/", "modelname_delete")
        );
        assert_eq!(
            derive(&view("DoSomething", ViewKind::Other, true), &options),
            pair("modelname/do_something/", "modelname_do_something")
        );
        assert_eq!(
            derive(&view("SimpleCbv", ViewKind::Other, false), &options),
            pair("simple_cbv/", "simple_cbv")
        );
    }

    #[test]
    fn test_derive_function_view() {
        let options = RouterOptions {
            words_separator: "-".to_owned(),
            ..Default::default()
        };

        assert_eq!(
            derive(&ViewInfo::function("simple_fbv", "test_app::views"), &options),
            pair("simple_fbv/", "simple_fbv")
        );
    }

    #[test]
    fn test_derive_simple_auto_naming() {
        let options = RouterOptions {
            simple_auto_naming: true,
            ..Default::default()
        };

        assert_eq!(
            derive(&view("JustADetailView", ViewKind::Detail, true), &options),
            pair("just_a_detail_view/", "just_a_detail_view")
        );
        assert_eq!(
            derive(&view("ListSome", ViewKind::List, true), &options),
            pair("list_some/", "list_some")
        );
    }

    #[test]
    fn test_derive_without_model_names() {
        let options = RouterOptions {
            try_use_model_names: false,
            ..Default::default()
        };

        assert_eq!(
            derive(&view("RemoveIt", ViewKind::Delete, true), &options),
            pair("remove_it/", "remove_it")
        );
    }

    #[test]
    fn test_derive_model_kind_without_model() {
        let options = RouterOptions::default();

        assert_eq!(
            derive(&view("ListSome", ViewKind::List, false), &options),
            pair("list_some/", "list_some")
        );
    }

    #[test]
    fn test_derive_split_model_names() {
        let options = RouterOptions {
            model_names_monolithic: false,
            ..Default::default()
        };

        assert_eq!(
            derive(&view("ListSome", ViewKind::List, true), &options),
            pair("model_name/", "model_name_list")
        );
        assert_eq!(
            derive(&view("LetsUpdate", ViewKind::Update, true), &options),
            pair("model_name/<int:pk>/update/", "model_name_update")
        );
    }

    #[test]
    fn test_derive_separator_only_changes_words() {
        let options = RouterOptions {
            words_separator: "-".to_owned(),
            model_names_monolithic: false,
            ..Default::default()
        };

        assert_eq!(
            derive(&view("RemoveIt", ViewKind::Delete, true), &options),
            pair("model-name/<int:pk>/delete/", "model-name-delete")
        );
        assert_eq!(
            derive(&view("DoSomething", ViewKind::Other, true), &options),
            pair("model-name/do-something/", "model-name-do-something")
        );
    }

    #[test]
    fn test_derive_admin_like_verbs() {
        let options = RouterOptions {
            admin_like_verbs: true,
            ..Default::default()
        };

        assert_eq!(
            derive(&view("ListSome", ViewKind::List, true), &options),
            pair("modelname/", "modelname_changelist")
        );
        assert_eq!(
            derive(&view("CreateSome", ViewKind::Create, true), &options),
            pair("modelname/add/", "modelname_add")
        );
        assert_eq!(
            derive(&view("LetsUpdate", ViewKind::Update, true), &options),
            pair("modelname/<int:pk>/change/", "modelname_change")
        );
        assert_eq!(
            derive(&view("JustADetailView", ViewKind::Detail, true), &options),
            pair("modelname/<int:pk>/", "modelname_detail")
        );
    }

    #[test]
    fn test_derive_strips_model_name_from_view_name() {
        let options = RouterOptions::default();

        assert_eq!(
            derive(&view("ExportModelName", ViewKind::Other, true), &options),
            pair("modelname/export/", "modelname_export")
        );
        assert_eq!(
            derive(&view("ModelName", ViewKind::Other, true), &options),
            pair("modelname/", "modelname")
        );
    }

    #[test]
    fn test_derived_patterns_are_relative_with_trailing_slash() {
        let kinds = [
            ViewKind::List,
            ViewKind::Detail,
            ViewKind::Create,
            ViewKind::Update,
            ViewKind::Delete,
            ViewKind::Other,
        ];

        for options in [
            RouterOptions::default(),
            RouterOptions {
                simple_auto_naming: true,
                ..Default::default()
            },
        ] {
            for kind in kinds {
                for model in [true, false] {
                    let descriptor = Descriptor::derive(&view("SomeView", kind, model), &options);

                    assert!(!descriptor.pattern.starts_with('/'), "{descriptor:?}");
                    assert!(descriptor.pattern.ends_with('/'), "{descriptor:?}");
                }
            }
        }
    }
}
