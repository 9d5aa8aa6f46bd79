use keyseek::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Product {
  sku: Option<u32>,
  name: &'static str,
}

impl Product {
  fn new(sku: u32, name: &'static str) -> Self {
    Self { sku: Some(sku), name }
  }

  fn unlabelled(name: &'static str) -> Self {
    Self { sku: None, name }
  }
}

impl Keyed for Product {
  type Key = u32;

  fn key(&self) -> Result<Option<&u32>, KeyAccessError> {
    Ok(self.sku.as_ref())
  }
}

fn catalog() -> Vec<Product> {
  vec![
    Product::new(30, "Laptop"),
    Product::new(10, "Phone"),
    Product::new(20, "Mouse"),
  ]
}

fn every_strategy(items: &[Product]) -> Vec<AnyLookup<'_, Product>> {
  LookupKind::ALL
    .into_iter()
    .map(|kind| AnyLookup::new(kind, items))
    .collect()
}

#[test]
fn test_missing_key_is_absent() {
  let items = catalog();
  for lookup in every_strategy(&items) {
    assert_eq!(lookup.get(&99).unwrap(), None, "{}", lookup.kind());
  }
}

#[test]
fn test_single_match_is_returned() {
  let items = catalog();
  for lookup in every_strategy(&items) {
    let found = lookup.get(&10).unwrap();
    assert_eq!(found, Some(&Product::new(10, "Phone")), "{}", lookup.kind());
  }
}

#[test]
fn test_empty_input_is_absent_and_never_fails() {
  let items: Vec<Product> = Vec::new();
  for lookup in every_strategy(&items) {
    assert!(lookup.is_empty());
    assert_eq!(lookup.get(&1).unwrap(), None, "{}", lookup.kind());
    assert_eq!(lookup.find_by_key(None).unwrap(), None, "{}", lookup.kind());
  }
}

#[test]
fn test_repeated_queries_agree() {
  let items = catalog();
  for lookup in every_strategy(&items) {
    let first = lookup.get(&20).unwrap().cloned();
    let second = lookup.get(&20).unwrap().cloned();
    assert_eq!(first, second);
    assert_eq!(lookup.get(&21).unwrap(), None);
    assert_eq!(lookup.get(&21).unwrap(), None);
  }
}

#[test]
fn test_linear_returns_first_duplicate() {
  let items = vec![Product::new(5, "A"), Product::new(5, "B")];
  let lookup = LinearLookup::new(&items);
  assert_eq!(lookup.get(&5).unwrap().map(|p| p.name), Some("A"));
}

#[test]
fn test_binary_search_example() {
  let lookup = BinarySearchLookup::new([3, 1, 2].map(KeyedItem::new));
  assert_eq!(lookup.get(&2).unwrap(), Some(&KeyedItem::new(2)));
  assert_eq!(lookup.get(&5).unwrap(), None);
  assert_eq!(lookup.get(&2).unwrap(), Some(&KeyedItem::new(2)));
}

#[test]
fn test_binary_search_null_ordering() {
  let lookup = BinarySearchLookup::new(vec![KeyedItem::null(), KeyedItem::new(1)]);
  let order: Vec<_> = lookup.sorted().unwrap().cloned().collect();
  assert_eq!(order, vec![KeyedItem::null(), KeyedItem::new(1)]);
  assert_eq!(lookup.find_by_key(None).unwrap(), Some(&KeyedItem::null()));
}

#[test]
fn test_dictionary_rejects_duplicates() {
  let items = vec![KeyedItem::new("k"), KeyedItem::new("k")];
  let lookup = DictionaryLookup::new(&items);
  assert_eq!(
    lookup.get(&"k").unwrap_err(),
    LookupError::DuplicateKey { first: 0, second: 1 }
  );
}

#[test]
fn test_null_query_differs_between_strategies() {
  let items = vec![Product::unlabelled("Loose cable"), Product::new(1, "Phone")];

  let linear = LinearLookup::new(&items);
  let binary = BinarySearchLookup::from_slice(&items);
  let dictionary = DictionaryLookup::new(&items);

  assert_eq!(linear.find_by_key(None).unwrap().map(|p| p.name), Some("Loose cable"));
  assert_eq!(binary.find_by_key(None).unwrap().map(|p| p.name), Some("Loose cable"));
  assert_eq!(dictionary.find_by_key(None).unwrap(), None);
  assert_eq!(dictionary.get(&1).unwrap().map(|p| p.name), Some("Phone"));
}

#[test]
fn test_trait_objects_are_interchangeable() {
  let items = catalog();
  let binary = BinarySearchLookup::from_slice(&items);
  let strategies: Vec<Box<dyn KeyLookup<Product> + '_>> = vec![
    Box::new(LinearLookup::new(&items)),
    Box::new(binary),
    Box::new(DictionaryLookup::new(&items)),
  ];

  let names: Vec<_> = strategies
    .iter()
    .map(|lookup| lookup.get(&30).unwrap().map(|p| p.name))
    .collect();
  assert_eq!(names, vec![Some("Laptop"); 3]);
}
