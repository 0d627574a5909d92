use clap::Parser;
use shelfscan_core::{Category, ProductRecord, ProductSource};

use super::*;

fn entry(barcode: &str, name: &str, price: Option<f64>) -> inventory::ManualEntry {
    inventory::ManualEntry {
        barcode: barcode.to_string(),
        name: name.to_string(),
        brand: None,
        price,
        category: None,
        description: None,
        image_url: None,
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["shelfscan"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_lookup_command() {
    let cli = Cli::try_parse_from(["shelfscan", "lookup", "8901030895557"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Lookup { ref barcode, json: false }) if barcode == "8901030895557"
    ));
}

#[test]
fn parses_lookup_json_flag() {
    let cli = Cli::try_parse_from(["shelfscan", "lookup", "123", "--json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Lookup { json: true, .. })
    ));
}

#[test]
fn lookup_requires_barcode() {
    assert!(Cli::try_parse_from(["shelfscan", "lookup"]).is_err());
}

#[test]
fn parses_inventory_add_with_optionals() {
    let cli = Cli::try_parse_from([
        "shelfscan",
        "inventory",
        "add",
        "8901030895557",
        "--name",
        "Parle-G",
        "--brand",
        "Parle",
        "--price",
        "10",
        "--image-url",
        "https://img.example/parle.jpg",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Inventory {
            command:
                InventoryCommands::Add {
                    barcode,
                    name,
                    brand,
                    price,
                    category,
                    image_url,
                    ..
                },
        }) => {
            assert_eq!(barcode, "8901030895557");
            assert_eq!(name, "Parle-G");
            assert_eq!(brand.as_deref(), Some("Parle"));
            assert_eq!(price, Some(10.0));
            assert!(category.is_none());
            assert_eq!(image_url.as_deref(), Some("https://img.example/parle.jpg"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn inventory_add_requires_name() {
    assert!(Cli::try_parse_from(["shelfscan", "inventory", "add", "123"]).is_err());
}

#[test]
fn parses_inventory_list() {
    let cli = Cli::try_parse_from(["shelfscan", "inventory", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Inventory {
            command: InventoryCommands::List { json: false }
        })
    ));
}

#[test]
fn manual_item_is_tagged_manual() {
    let item = inventory::build_manual_item(entry(
        "0000000000000",
        " Homemade Pickle ",
        Some(120.0),
    ))
    .unwrap();
    assert_eq!(item.barcode, "0000000000000");
    assert_eq!(item.name, "Homemade Pickle");
    assert_eq!(item.price, Some(120.0));
    assert_eq!(item.origin, Some(ProductSource::Manual));
}

#[test]
fn manual_item_keeps_barcode_verbatim() {
    let item = inventory::build_manual_item(entry(" 123 ", "Tea", None)).unwrap();
    assert_eq!(item.barcode, " 123 ");
}

#[test]
fn manual_item_rejects_blank_barcode() {
    assert!(inventory::build_manual_item(entry("   ", "Tea", None)).is_err());
}

#[test]
fn manual_item_rejects_blank_name() {
    assert!(inventory::build_manual_item(entry("123", "  ", None)).is_err());
}

#[test]
fn manual_item_rejects_negative_price() {
    assert!(inventory::build_manual_item(entry("123", "Tea", Some(-5.0))).is_err());
}

#[test]
fn format_record_lists_present_fields() {
    let record = ProductRecord::found("Matilda", ProductSource::GoogleBooks)
        .unwrap()
        .with_brand(Some("Roald Dahl".to_string()))
        .with_category(Some(Category::Books));
    let text = lookup::format_record(&record);
    assert_eq!(
        text,
        "name: Matilda\nbrand: Roald Dahl\ncategory: books\nsource: google_books\n"
    );
}

#[test]
fn format_record_for_miss() {
    let text = lookup::format_record(&ProductRecord::not_found());
    assert_eq!(text, "found: false\nsource: manual\n");
}
