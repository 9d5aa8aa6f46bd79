//! Times the three lookup strategies over the same items.
//!
//! The subscriber prints the library's debug-level materialization events.
use keyseek::prelude::*;
use std::time::Instant;

const ITEMS: usize = 100_000;
const QUERIES: usize = 10_000;

fn main() {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .init();

  println!("=== Keyseek Strategy Time Check ===\n");

  let start = Instant::now();
  let items: Vec<StringKey> = (0..ITEMS)
    .rev()
    .map(|i| StringKey::new(format!("user-{i:06}")))
    .collect();
  println!("Built {} items in {:?}\n", items.len(), start.elapsed());

  let probes: Vec<String> = (0..QUERIES)
    .map(|i| format!("user-{:06}", (i * 7919) % (ITEMS * 2)))
    .collect();

  for kind in LookupKind::ALL {
    let lookup = AnyLookup::new(kind, &items);

    let start = Instant::now();
    if let Err(err) = lookup.warm() {
      eprintln!("{kind}: failed to warm: {err}");
      continue;
    }
    let warm = start.elapsed();

    let start = Instant::now();
    let mut hits = 0;
    for probe in &probes {
      match lookup.get(probe) {
        Ok(Some(_)) => hits += 1,
        Ok(None) => {}
        Err(err) => {
          eprintln!("{kind}: query failed: {err}");
          break;
        }
      }
    }
    let queries = start.elapsed();

    println!(
      "{:<14} warm {:>10?}  {} queries {:>12?}  hits {}",
      kind.to_string(),
      warm,
      probes.len(),
      queries,
      hits
    );
  }
}
