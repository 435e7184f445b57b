use salvage_lookup::index::{find_producing_items, unique_materials};
use salvage_lookup::{items_needed, Catalog, Item, MaterialIndex, Rarity, SortPolicy};

fn catalog_items() -> Vec<Item> {
    vec![
        Item::new("Toaster", Rarity::Common, "1x Wires, 2x Metal Parts"),
        Item::new("Radio", Rarity::Uncommon, "3x Wires"),
        Item::new("Lamp", Rarity::Common, "1x Wires 1x Plastic Parts"),
        Item::new("Rock", Rarity::Common, "Cannot be recycled"),
        Item::new("Car Battery", Rarity::Rare, "3x Wires, 2x Chemicals"),
    ]
}

fn names(results: &[salvage_lookup::ProducingItem<'_>]) -> Vec<String> {
    results.iter().map(|r| r.item.name.clone()).collect()
}

#[test]
fn test_vocabulary_is_sorted_union() {
    let items = catalog_items();
    assert_eq!(
        unique_materials(&items),
        vec!["Chemicals", "Metal Parts", "Plastic Parts", "Wires"]
    );

    let index = MaterialIndex::build(&items);
    assert_eq!(index.vocabulary(), unique_materials(&items).as_slice());
    assert!(index.contains("Wires"));
    assert!(!index.contains("wires"));
    assert!(index.yields_of(3).is_empty());
    assert!(index.yields_of(99).is_empty());
}

#[test]
fn test_reverse_lookup_yield_desc_keeps_catalog_order_on_ties() {
    let items = catalog_items();
    let results = find_producing_items(&items, "Wires", SortPolicy::YieldDesc, 1);
    assert_eq!(names(&results), vec!["Radio", "Car Battery", "Toaster", "Lamp"]);
    assert!(results.iter().all(|r| r.items_needed >= 1));
}

#[test]
fn test_reverse_lookup_catalog_order() {
    let items = catalog_items();
    let results = find_producing_items(&items, "Wires", SortPolicy::Catalog, 1);
    assert_eq!(names(&results), vec!["Toaster", "Radio", "Lamp", "Car Battery"]);
}

#[test]
fn test_items_needed_column() {
    let catalog = Catalog::new(catalog_items());
    let results = catalog.producing("Wires", SortPolicy::YieldDescThenItemsNeeded, 10);

    let radio = results.iter().find(|r| r.item.name == "Radio").unwrap();
    assert_eq!(radio.quantity, 3);
    assert_eq!(radio.items_needed, 4);

    let toaster = results.iter().find(|r| r.item.name == "Toaster").unwrap();
    assert_eq!(toaster.items_needed, 10);
}

#[test]
fn test_zero_target_is_treated_as_one() {
    let catalog = Catalog::new(catalog_items());
    let results = catalog.producing("Chemicals", SortPolicy::YieldDesc, 0);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].items_needed, 1);
}

#[test]
fn test_unknown_material_yields_nothing() {
    let catalog = Catalog::new(catalog_items());
    assert!(catalog
        .producing("Unobtainium", SortPolicy::YieldDesc, 1)
        .is_empty());
    assert!(catalog.producing("", SortPolicy::YieldDesc, 1).is_empty());
}

#[test]
fn test_duplicate_material_in_one_item_counts_once() {
    let items = vec![Item::new("Odd Crate", Rarity::Common, "2x Wires, 5x Wires")];
    let results = find_producing_items(&items, "Wires", SortPolicy::YieldDesc, 1);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].quantity, 2);
}

#[test]
fn test_items_needed_arithmetic() {
    assert_eq!(items_needed(1, 1), Some(1));
    assert_eq!(items_needed(7, 3), Some(3));
    assert_eq!(items_needed(9, 3), Some(3));
    assert_eq!(items_needed(u32::MAX, 1), Some(u32::MAX));
    assert_eq!(items_needed(5, 0), None);
}

#[test]
fn test_sort_policy_from_str() {
    assert_eq!("yield_desc".parse::<SortPolicy>(), Ok(SortPolicy::YieldDesc));
    assert_eq!(
        "yield-desc-then-items-needed".parse::<SortPolicy>(),
        Ok(SortPolicy::YieldDescThenItemsNeeded)
    );
    assert_eq!("Catalog".parse::<SortPolicy>(), Ok(SortPolicy::Catalog));
    assert!("random".parse::<SortPolicy>().is_err());
}

#[test]
fn test_zero_yield_item_never_listed() {
    let items = vec![
        Item::new("Broken Radio", Rarity::Common, "0x Wires, 1x Oil"),
        Item::new("Radio", Rarity::Uncommon, "3x Wires"),
    ];
    let catalog = Catalog::new(items);

    let wires = catalog.producing("Wires", SortPolicy::YieldDesc, 6);
    assert_eq!(names(&wires), vec!["Radio"]);
    assert_eq!(wires[0].items_needed, 2);

    let oil = catalog.producing("Oil", SortPolicy::YieldDesc, 1);
    assert_eq!(names(&oil), vec!["Broken Radio"]);
}
