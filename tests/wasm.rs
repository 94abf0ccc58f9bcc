#![cfg(feature = "wasm")]

use replica_merge::wasm::{reconcile, reconcile_with_agents};
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_reconcile() {
    let result = reconcile("Hello!", "Hello World!", "Hello! :-)")
        .unwrap_or_else(|_| panic!("reconcile must not fail"));

    assert!(result.converged());
    assert_eq!(result.unified_text(), Some("Hello World! :-)".to_owned()));
    assert_eq!(result.result_a_to_b(), "Hello World! :-)");
    assert_eq!(result.result_b_to_a(), "Hello World! :-)");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_reconcile_with_agents() {
    let result = reconcile_with_agents("", "foo", "bar", "zed".to_owned(), "amy".to_owned())
        .unwrap_or_else(|_| panic!("reconcile must not fail"));

    assert_eq!(result.unified_text(), Some("foobar".to_owned()));
}
