use log::{error, info};

use super::{App, HomePage, NavAreas, Page, Preferences};
use crate::catalog::{Catalog, CatalogStore};
use crate::i18n::{self, Dictionary, LocaleStore, DEFAULT_LOCALE};
use crate::router::{Location, PageTarget, Router};
use crate::source::{DataSource, SourceError};

impl App {
    /// Builds the shell: loads preferences, fetches the catalog and
    /// the locale dictionaries concurrently, and lands on the home
    /// route. A failed load still yields a working shell, pinned to
    /// the generic error view.
    pub async fn new(source: Box<dyn DataSource>) -> Self {
        Self::with_preferences(source, Preferences::load()).await
    }

    /// Like [`App::new`] with the preference lookup already done;
    /// lets callers pin the locale instead of consulting the
    /// environment.
    pub async fn with_preferences(source: Box<dyn DataSource>, preferences: Preferences) -> Self {
        let initial_locale = preferences
            .locale
            .as_deref()
            .filter(|code| i18n::is_supported(code))
            .map(str::to_string)
            .unwrap_or_else(|| i18n::detect_locale().to_string());

        let mut router = Router::new();
        router.register("/", PageTarget::Home);
        router.register("/c/:id", PageTarget::Category);
        router.register("/p/:id", PageTarget::Product);
        router.register("/contact", PageTarget::Contact);

        info!(
            "loading storefront from {} (locale {initial_locale})",
            source.describe()
        );

        let (catalog, locale, page, status_message) =
            match load_startup_data(source.as_ref(), &initial_locale).await {
                Ok((doc, active, fallback)) => {
                    info!(
                        "catalog v{} ({}) loaded: {} categories, {} products",
                        doc.version,
                        doc.updated_at,
                        doc.categories.len(),
                        doc.products.len()
                    );
                    (
                        Some(CatalogStore::new(doc)),
                        LocaleStore::new(&initial_locale, active, fallback),
                        Page::Home(HomePage::default()),
                        String::from("Enter opens · / search · Ctrl+L language · q quit"),
                    )
                }
                Err(err) => {
                    error!("startup load failed: {err}");
                    (
                        None,
                        LocaleStore::empty(),
                        Page::LoadError(err.to_string()),
                        String::from("Could not load storefront data"),
                    )
                }
            };

        Self {
            running: true,
            router,
            location: Location::new(),
            page,
            catalog,
            locale,
            preferences,
            overlay: None,
            status_message,
            nav_areas: NavAreas::default(),
            source,
            pending_search: None,
        }
    }
}

/// Fetches the active dictionary plus the English fallback (empty
/// when the active locale is English itself).
pub(crate) async fn fetch_dictionaries(
    source: &dyn DataSource,
    code: &str,
) -> Result<(Dictionary, Dictionary), SourceError> {
    let active = source.fetch_locale(code).await?;
    let fallback = if code == DEFAULT_LOCALE {
        Dictionary::new()
    } else {
        source.fetch_locale(DEFAULT_LOCALE).await?
    };
    Ok((active, fallback))
}

/// The two startup fetches run concurrently; either failure aborts
/// into the error view.
async fn load_startup_data(
    source: &dyn DataSource,
    code: &str,
) -> Result<(Catalog, Dictionary, Dictionary), SourceError> {
    let (catalog, (active, fallback)) =
        tokio::try_join!(source.fetch_catalog(), fetch_dictionaries(source, code))?;
    Ok((catalog, active, fallback))
}
