//! View kinds and their verb tables.

use std::fmt::Display;

/// The kind of a view.
///
/// The kind is declared once, by the view itself, and decides which verb is used to name its
/// routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewKind {
    /// A view listing model instances.
    List,

    /// A view displaying a single model instance.
    Detail,

    /// A view creating a new model instance.
    Create,

    /// A view updating a single model instance.
    Update,

    /// A view deleting a single model instance.
    Delete,

    /// Any other view.
    #[default]
    Other,
}

impl ViewKind {
    /// Whether the view operates on a single, existing object.
    ///
    /// Routes for such views carry a `<int:pk>` segment.
    pub fn is_single_object(self) -> bool {
        matches!(self, Self::Detail | Self::Update | Self::Delete)
    }
}

impl Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Detail => "detail",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Other => "other",
        })
    }
}

/// A verb: the tokens appended to the name and to the pattern of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verb {
    /// The token appended to the route name.
    pub name: &'static str,

    /// The path segment appended to the route pattern. May be empty.
    pub pattern: &'static str,
}

impl Verb {
    const fn new(name: &'static str, pattern: &'static str) -> Self {
        Self { name, pattern }
    }
}

/// A fixed mapping from view kinds to verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbTable {
    list: Verb,
    detail: Verb,
    create: Verb,
    update: Verb,
    delete: Verb,
}

impl VerbTable {
    /// The router-style verbs: `list`, `detail`, `create`, `update` and `delete`.
    pub const ROUTER: Self = Self {
        list: Verb::new("list", ""),
        detail: Verb::new("detail", ""),
        create: Verb::new("create", "create"),
        update: Verb::new("update", "update"),
        delete: Verb::new("delete", "delete"),
    };

    /// The admin-style verbs: `changelist`, `detail`, `add`, `change` and `delete`.
    pub const ADMIN_LIKE: Self = Self {
        list: Verb::new("changelist", ""),
        detail: Verb::new("detail", ""),
        create: Verb::new("add", "add"),
        update: Verb::new("change", "change"),
        delete: Verb::new("delete", "delete"),
    };

    /// Select a table.
    pub fn select(admin_like: bool) -> &'static Self {
        if admin_like {
            &Self::ADMIN_LIKE
        } else {
            &Self::ROUTER
        }
    }

    /// Get the verb for a view kind.
    ///
    /// Returns `None` for `ViewKind::Other`, which has no verb.
    pub fn verb(&self, kind: ViewKind) -> Option<Verb> {
        match kind {
            ViewKind::List => Some(self.list),
            ViewKind::Detail => Some(self.detail),
            ViewKind::Create => Some(self.create),
            ViewKind::Update => Some(self.update),
            ViewKind::Delete => Some(self.delete),
            ViewKind::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_verbs() {
        let table = VerbTable::select(false);

        assert_eq!(table.verb(ViewKind::List), Some(Verb::new("list", "")));
        assert_eq!(table.verb(ViewKind::Detail), Some(Verb::new("detail", "")));
        assert_eq!(
            table.verb(ViewKind::Create),
            Some(Verb::new("create", "create"))
        );
        assert_eq!(
            table.verb(ViewKind::Update),
            Some(Verb::new("update", "update"))
        );
        assert_eq!(
            table.verb(ViewKind::Delete),
            Some(Verb::new("delete", "delete"))
        );
        assert_eq!(table.verb(ViewKind::Other), None);
    }

    #[test]
    fn test_admin_like_verbs_only_remap_list_create_update() {
        let router = VerbTable::select(false);
        let admin = VerbTable::select(true);

        assert_eq!(admin.verb(ViewKind::List), Some(Verb::new("changelist", "")));
        assert_eq!(admin.verb(ViewKind::Create), Some(Verb::new("add", "add")));
        assert_eq!(
            admin.verb(ViewKind::Update),
            Some(Verb::new("change", "change"))
        );
        assert_eq!(admin.verb(ViewKind::Detail), router.verb(ViewKind::Detail));
        assert_eq!(admin.verb(ViewKind::Delete), router.verb(ViewKind::Delete));
    }

    #[test]
    fn test_single_object_kinds() {
        assert!(!ViewKind::List.is_single_object());
        assert!(ViewKind::Detail.is_single_object());
        assert!(!ViewKind::Create.is_single_object());
        assert!(ViewKind::Update.is_single_object());
        assert!(ViewKind::Delete.is_single_object());
        assert!(!ViewKind::Other.is_single_object());
    }
}
