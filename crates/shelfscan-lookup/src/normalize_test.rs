use serde_json::json;

use super::*;

fn facts(value: serde_json::Value) -> FactsResponse {
    serde_json::from_value(value).expect("fixture should deserialize")
}

// ---------------------------------------------------------------------------
// Facts catalogs
// ---------------------------------------------------------------------------

#[test]
fn facts_found_uses_product_name_and_fixed_category() {
    let response = facts(json!({
        "status": 1,
        "status_verbose": "product found",
        "product": {
            "product_name": "Parle-G Gold",
            "generic_name": "Glucose biscuits",
            "brands": "Parle",
            "image_url": "https://images.openfoodfacts.org/parle.jpg"
        }
    }));

    let record = normalize_facts(response, ProductSource::OpenFoodFacts, Category::Food)
        .expect("status 1 with product is a hit");
    assert_eq!(record.name, "Parle-G Gold");
    assert_eq!(record.brand.as_deref(), Some("Parle"));
    assert_eq!(record.category, Some(Category::Food));
    assert_eq!(record.description.as_deref(), Some("Glucose biscuits"));
    assert_eq!(
        record.image_url.as_deref(),
        Some("https://images.openfoodfacts.org/parle.jpg")
    );
    assert_eq!(record.source, ProductSource::OpenFoodFacts);
    assert!(record.found);
    assert!(record.price.is_none());
}

#[test]
fn facts_falls_back_to_generic_name() {
    let response = facts(json!({
        "status": 1,
        "product": { "product_name": "", "generic_name": "Shampoo" }
    }));
    let record = normalize_facts(
        response,
        ProductSource::OpenBeautyFacts,
        Category::PersonalCare,
    )
    .unwrap();
    assert_eq!(record.name, "Shampoo");
    assert!(record.description.is_none());
    assert_eq!(record.category, Some(Category::PersonalCare));
}

#[test]
fn facts_status_zero_is_miss() {
    let response = facts(json!({
        "status": 0,
        "status_verbose": "product not found",
        "code": "0000000000000"
    }));
    assert!(normalize_facts(response, ProductSource::OpenFoodFacts, Category::Food).is_none());
}

#[test]
fn facts_status_one_without_product_is_miss() {
    let response = facts(json!({ "status": 1 }));
    assert!(normalize_facts(response, ProductSource::OpenProductsFacts, Category::Other).is_none());
}

#[test]
fn facts_string_status_is_accepted() {
    let response = facts(json!({
        "status": "1",
        "product": { "product_name": "USB cable" }
    }));
    let record =
        normalize_facts(response, ProductSource::OpenProductsFacts, Category::Other).unwrap();
    assert_eq!(record.name, "USB cable");
    assert_eq!(record.category, Some(Category::Other));
}

#[test]
fn facts_nameless_product_is_miss() {
    let response = facts(json!({
        "status": 1,
        "product": { "brands": "Nobody" }
    }));
    assert!(normalize_facts(response, ProductSource::OpenFoodFacts, Category::Food).is_none());
}

// ---------------------------------------------------------------------------
// Google Books
// ---------------------------------------------------------------------------

#[test]
fn google_books_first_item_wins() {
    let response: GoogleBooksResponse = serde_json::from_value(json!({
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [
            {
                "volumeInfo": {
                    "title": "Matilda",
                    "authors": ["Roald Dahl", "Quentin Blake"],
                    "description": "A girl who loves books.",
                    "imageLinks": {
                        "smallThumbnail": "http://books.google.com/small",
                        "thumbnail": "http://books.google.com/thumb"
                    }
                }
            },
            { "volumeInfo": { "title": "Matilda (Movie Tie-In)" } }
        ]
    }))
    .unwrap();

    let record = normalize_google_books(response).expect("non-empty items is a hit");
    assert_eq!(record.name, "Matilda");
    assert_eq!(record.brand.as_deref(), Some("Roald Dahl, Quentin Blake"));
    assert_eq!(record.category, Some(Category::Books));
    assert_eq!(record.image_url.as_deref(), Some("http://books.google.com/thumb"));
    assert_eq!(record.source, ProductSource::GoogleBooks);
}

#[test]
fn google_books_without_items_is_miss() {
    let response: GoogleBooksResponse =
        serde_json::from_value(json!({ "kind": "books#volumes", "totalItems": 0 })).unwrap();
    assert!(normalize_google_books(response).is_none());
}

#[test]
fn google_books_without_image_links_has_no_image() {
    let response: GoogleBooksResponse = serde_json::from_value(json!({
        "totalItems": 1,
        "items": [{ "volumeInfo": { "title": "Untitled Draft", "authors": [] } }]
    }))
    .unwrap();
    let record = normalize_google_books(response).unwrap();
    assert!(record.image_url.is_none());
    assert!(record.brand.is_none());
}

// ---------------------------------------------------------------------------
// Open Library
// ---------------------------------------------------------------------------

#[test]
fn open_library_prefers_medium_cover() {
    let response: OpenLibraryResponse = serde_json::from_value(json!({
        "ISBN:9780140328721": {
            "title": "Matilda",
            "authors": [{ "url": "https://openlibrary.org/authors/OL34184A", "name": "Roald Dahl" }],
            "cover": {
                "small": "https://covers.openlibrary.org/b/id/1-S.jpg",
                "medium": "https://covers.openlibrary.org/b/id/1-M.jpg",
                "large": "https://covers.openlibrary.org/b/id/1-L.jpg"
            }
        }
    }))
    .unwrap();

    let record = normalize_open_library(response, "ISBN:9780140328721").unwrap();
    assert_eq!(record.name, "Matilda");
    assert_eq!(record.brand.as_deref(), Some("Roald Dahl"));
    assert_eq!(
        record.image_url.as_deref(),
        Some("https://covers.openlibrary.org/b/id/1-M.jpg")
    );
    assert_eq!(record.category, Some(Category::Books));
    assert_eq!(record.source, ProductSource::OpenLibrary);
}

#[test]
fn open_library_falls_back_to_large_cover() {
    let response: OpenLibraryResponse = serde_json::from_value(json!({
        "ISBN:123": {
            "title": "Large Only",
            "cover": { "large": "https://covers.openlibrary.org/b/id/2-L.jpg" }
        }
    }))
    .unwrap();
    let record = normalize_open_library(response, "ISBN:123").unwrap();
    assert_eq!(
        record.image_url.as_deref(),
        Some("https://covers.openlibrary.org/b/id/2-L.jpg")
    );
}

#[test]
fn open_library_ignores_small_cover() {
    let response: OpenLibraryResponse = serde_json::from_value(json!({
        "ISBN:456": {
            "title": "Small Only",
            "cover": { "small": "https://covers.openlibrary.org/b/id/3-S.jpg" }
        }
    }))
    .unwrap();
    let record = normalize_open_library(response, "ISBN:456").unwrap();
    assert_eq!(record.name, "Small Only");
    assert!(record.image_url.is_none());
}

#[test]
fn open_library_missing_key_is_miss() {
    let response: OpenLibraryResponse = serde_json::from_value(json!({})).unwrap();
    assert!(normalize_open_library(response, "ISBN:9780140328721").is_none());
}

#[test]
fn open_library_other_key_is_miss() {
    let response: OpenLibraryResponse =
        serde_json::from_value(json!({ "ISBN:111": { "title": "Elsewhere" } })).unwrap();
    assert!(normalize_open_library(response, "ISBN:222").is_none());
}

#[test]
fn join_names_skips_blanks() {
    let joined = join_names(vec![" A ".to_string(), String::new(), "B".to_string()]);
    assert_eq!(joined.as_deref(), Some("A, B"));
    assert!(join_names(Vec::<String>::new()).is_none());
}
