//! Normalization from raw catalog responses to [`ProductRecord`].
//!
//! Each function owns one response shape. A `None` result means "not found
//! in this catalog"; it covers both an explicit miss and a payload that
//! claims a hit but carries no usable name.

use shelfscan_core::{Category, ProductRecord, ProductSource};

use crate::types::{FactsResponse, GoogleBooksResponse, OpenLibraryResponse};

/// Normalizes a response from one of the three "Facts" catalogs.
///
/// Found iff `status == 1` and a `product` object is present. The name comes
/// from `product_name`, falling back to `generic_name`; the category is fixed
/// by the caller because the catalog itself decides it.
#[must_use]
pub fn normalize_facts(
    response: FactsResponse,
    source: ProductSource,
    category: Category,
) -> Option<ProductRecord> {
    if !response.status_found() {
        return None;
    }
    let product = response.product?;

    let product_name = non_blank(product.product_name);
    let generic_name = non_blank(product.generic_name);

    let (name, description) = match (product_name, generic_name) {
        (Some(name), generic) => {
            let description = generic.filter(|g| !g.eq_ignore_ascii_case(&name));
            (name, description)
        }
        (None, Some(generic)) => (generic, None),
        (None, None) => return None,
    };

    let record = ProductRecord::found(name, source)?
        .with_brand(product.brands)
        .with_category(Some(category))
        .with_description(description)
        .with_image_url(product.image_url);
    Some(record)
}

/// Normalizes a Google Books volume search.
///
/// Found iff the result list is non-empty; only the first volume is used.
#[must_use]
pub fn normalize_google_books(response: GoogleBooksResponse) -> Option<ProductRecord> {
    let info = response.items.into_iter().next()?.volume_info?;
    let image = info
        .image_links
        .and_then(|links| non_blank(links.thumbnail).or(non_blank(links.small_thumbnail)));

    let record = ProductRecord::found(info.title.unwrap_or_default(), ProductSource::GoogleBooks)?
        .with_brand(join_names(info.authors))
        .with_category(Some(Category::Books))
        .with_description(info.description)
        .with_image_url(image);
    Some(record)
}

/// Normalizes an Open Library `jscmd=data` lookup for `bibkey`.
///
/// Found iff the keyed entry exists. The medium cover is preferred over the
/// large one.
#[must_use]
pub fn normalize_open_library(
    mut response: OpenLibraryResponse,
    bibkey: &str,
) -> Option<ProductRecord> {
    let book = response.remove(bibkey)?;
    let image = book
        .cover
        .and_then(|cover| non_blank(cover.medium).or(non_blank(cover.large)));

    let record = ProductRecord::found(book.title.unwrap_or_default(), ProductSource::OpenLibrary)?
        .with_brand(join_names(book.authors.into_iter().map(|a| a.name)))
        .with_category(Some(Category::Books))
        .with_description(book.subtitle)
        .with_image_url(image);
    Some(record)
}

/// Joins contributor names with `", "`, skipping blanks.
fn join_names<I>(names: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let names: Vec<String> = names
        .into_iter()
        .filter_map(|n| non_blank(Some(n)))
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
