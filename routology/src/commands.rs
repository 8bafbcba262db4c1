//! Reporting commands.
//!
//! These commands print the route table for inspection. They never modify the registry.

use std::io::Write;

use crate::{SealedRegistry, UrlPatterns};

/// The output format of `router_urls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One line per route: `<url> -> <name> (<view>)`.
    #[default]
    Text,

    /// A JSON array of route descriptions.
    Json,
}

/// Print the materialized routes.
pub fn router_urls<S, W>(
    urlpatterns: &UrlPatterns<S>,
    format: Format,
    out: &mut W,
) -> std::io::Result<()>
where
    S: Clone + Send + Sync + 'static,
    W: Write,
{
    match format {
        Format::Text => {
            for description in urlpatterns.describe() {
                writeln!(
                    out,
                    "{} -> {} ({})",
                    description.url, description.name, description.module
                )?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &urlpatterns.describe())?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Print the raw registrations, before any derivation.
///
/// Derived fields are printed as `-`.
pub fn router_list<S, W>(registry: &SealedRegistry<S>, out: &mut W) -> std::io::Result<()>
where
    S: Clone + Send + Sync + 'static,
    W: Write,
{
    for namespace in registry.namespaces() {
        writeln!(out, "{}:", namespace.name())?;

        for registration in namespace.registrations() {
            let view = registration.view.info();

            writeln!(
                out,
                "  {} {} [{}] pattern={} name={}",
                registration.matcher,
                view.qualified_name(),
                view.kind,
                registration.pattern.as_deref().unwrap_or("-"),
                registration.name.as_deref().unwrap_or("-"),
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use insta::assert_snapshot;

    use super::*;
    use crate::{RouteOptions, RouteRegistry, RouterOptions, ViewEntry};

    async fn handler() {}

    fn registry() -> SealedRegistry {
        let mut registry = RouteRegistry::new();

        registry.path(
            ViewEntry::function("simple_fbv", "test_app::views", get(handler)),
            RouteOptions::default(),
        );
        registry.re_path(
            r"^index/$",
            ViewEntry::function("index", "test_app::views", get(handler)),
            RouteOptions::default(),
        );
        registry.path(
            ViewEntry::function("about", "pages::views", get(handler)),
            RouteOptions::default().with_name("about_us"),
        );

        registry.seal()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_router_urls_text() {
        let urlpatterns = registry().urlpatterns(&RouterOptions::default());

        let output = render(|out| router_urls(&urlpatterns, Format::Text, out));

        assert_snapshot!(output, @r"
        /test_app/simple_fbv/ -> test_app:simple_fbv (test_app::views::simple_fbv)
        /test_app/index/ -> test_app:index (test_app::views::index)
        /pages/about/ -> pages:about_us (pages::views::about)
        ");
    }

    #[test]
    fn test_router_urls_json() {
        let urlpatterns = registry().urlpatterns(&RouterOptions::default());

        let output = render(|out| router_urls(&urlpatterns, Format::Json, out));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value[0],
            serde_json::json!({
                "url": "/test_app/simple_fbv/",
                "module": "test_app::views::simple_fbv",
                "name": "test_app:simple_fbv",
            })
        );
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_router_list() {
        let output = render(|out| router_list(&registry(), out));

        assert_snapshot!(output, @r"
        test_app:
          path test_app::views::simple_fbv [other] pattern=- name=-
          re_path test_app::views::index [other] pattern=^index/$ name=-
        pages:
          path pages::views::about [other] pattern=- name=about_us
        ");
    }
}
