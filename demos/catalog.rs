//! Run with
//!
//! ```not_rust
//! cargo run -p routology --example catalog --features examples
//! ```
//!
//! The naming conventions can be changed through the environment, for instance with
//! `ROUTOLOGY_ADMIN_LIKE_VERBS=true` or `ROUTOLOGY_WORDS_SEPARATOR=-`.

use routology::{RouteRegistry, RouterOptions, commands};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    info!("Starting example `{}`...", env!("CARGO_BIN_NAME"));

    let options = RouterOptions::from_env()?;

    // Registration happens once, at startup, from an explicit setup routine.
    let mut registry = RouteRegistry::new();
    shop::views::register(&mut registry);
    let registry = registry.seal();

    commands::router_list(&registry, &mut std::io::stdout())?;

    let urlpatterns = registry.urlpatterns(&options);
    commands::router_urls(&urlpatterns, commands::Format::Text, &mut std::io::stdout())?;

    let router = urlpatterns.into_router()?;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;

    info!("Serving the catalog on `http://{}`...", listener.local_addr()?);

    axum::serve(listener, router).await.map_err(Into::into)
}

mod shop {
    pub mod models {
        use routology::Model;

        #[derive(Model)]
        pub struct Product;

        #[derive(Model)]
        #[model(name = "category")]
        pub struct ProductCategory;
    }

    pub mod views {
        use axum::{
            Extension,
            extract::Path,
            routing::{MethodRouter, get, post},
        };
        use routology::{AsView, RouteInfo, RouteOptions, RouteRegistry, View, ViewEntry, view_fn};

        use super::models;

        #[derive(View)]
        #[view(kind = "list", model = models::Product)]
        pub struct ProductList;

        impl AsView for ProductList {
            fn as_view() -> MethodRouter {
                get(|Extension(info): Extension<RouteInfo>| async move {
                    format!("All products ({})", info.qualified_name())
                })
            }
        }

        #[derive(View)]
        #[view(kind = "detail", model = models::Product)]
        pub struct ProductDetail;

        impl AsView for ProductDetail {
            fn as_view() -> MethodRouter {
                get(|Path(pk): Path<u64>| async move { format!("Product #{pk}") })
            }
        }

        #[derive(View)]
        #[view(kind = "create", model = models::Product)]
        pub struct ProductCreate;

        impl AsView for ProductCreate {
            fn as_view() -> MethodRouter {
                post(|| async { "Product created" })
            }
        }

        #[derive(View)]
        #[view(kind = "list", model = models::ProductCategory)]
        pub struct CategoryList;

        impl AsView for CategoryList {
            fn as_view() -> MethodRouter {
                get(|| async { "All categories" })
            }
        }

        async fn about(Extension(info): Extension<RouteInfo>) -> String {
            let contact = info
                .kwargs
                .get("contact")
                .and_then(|contact| contact.as_str())
                .unwrap_or("nobody");

            format!("Contact: {contact}")
        }

        pub fn register(registry: &mut RouteRegistry) {
            registry.path(ViewEntry::of::<ProductList>(), RouteOptions::default());
            registry.path(ViewEntry::of::<ProductDetail>(), RouteOptions::default());
            registry.path(ViewEntry::of::<ProductCreate>(), RouteOptions::default());
            registry.path(ViewEntry::of::<CategoryList>(), RouteOptions::default());
            registry.path(
                view_fn!(about),
                RouteOptions::default().with_kwarg("contact", "shop@example.com"),
            );
            registry.re_path(
                r"^legacy/products/(?P<pk>[0-9]+)/$",
                ViewEntry::of::<ProductDetail>(),
                RouteOptions::default().with_name("product_legacy"),
            );
        }
    }
}
