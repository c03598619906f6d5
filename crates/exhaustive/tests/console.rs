//! Console initialization (requires the `console` feature).

#![cfg(feature = "console")]

use exhaustive::console;
use exhaustive::has_subset_summing_to;

#[test]
fn test_init_is_idempotent() {
    console::init();
    console::init();
    assert_eq!(has_subset_summing_to(&[1, 2, 3], 5), Ok(true));
}
