//! List category catalogs

use anyhow::Result;

use crate::catalog::CategoryKind;
use crate::i18n::Locale;
use crate::Saveur;

/// Print one or both category catalogs with localized names
pub fn run(site: &Saveur, kind: Option<CategoryKind>, locale: Locale) -> Result<()> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => vec![CategoryKind::Recipe, CategoryKind::Pairing],
    };

    for kind in kinds {
        let catalog = site.catalog(kind);
        println!("{} categories ({}):", kind, catalog.categories().len());
        for category in catalog.categories() {
            let description = category
                .description
                .as_ref()
                .map(|d| format!(" - {}", d.resolve(locale)))
                .unwrap_or_default();
            println!(
                "  {} ({}){}",
                category.name.resolve(locale),
                category.id,
                description
            );
        }
    }

    Ok(())
}
