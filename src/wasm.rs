//! Expose reconciliation to WebAssembly: three strings in, two merge results
//! out.
use wasm_bindgen::prelude::*;

use crate::{ConvergenceOutcome, ReconcileConfig, Reconciler};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::reconcile`.
///
/// # Errors
///
/// Forwards any `MergeError` as a JS exception.
#[wasm_bindgen(js_name = reconcile)]
pub fn reconcile(base: &str, left: &str, right: &str) -> Result<ReconcileResult, JsError> {
    set_panic_hook();

    Ok(crate::reconcile(base, left, right)?.into())
}

/// Like `reconcile` but with explicit agent names for the two editors.
///
/// # Errors
///
/// Forwards any `MergeError` as a JS exception.
#[wasm_bindgen(js_name = reconcileWithAgents)]
pub fn reconcile_with_agents(
    base: &str,
    left: &str,
    right: &str,
    left_agent: String,
    right_agent: String,
) -> Result<ReconcileResult, JsError> {
    set_panic_hook();

    let config = ReconcileConfig {
        left_agent,
        right_agent,
        ..ReconcileConfig::default()
    };

    Ok(Reconciler::new(config).reconcile(base, left, right)?.into())
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM wrapper type for `ConvergenceOutcome`.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileResult {
    outcome: ConvergenceOutcome,
}

impl From<ConvergenceOutcome> for ReconcileResult {
    fn from(outcome: ConvergenceOutcome) -> Self { Self { outcome } }
}

#[wasm_bindgen]
impl ReconcileResult {
    #[must_use]
    pub fn converged(&self) -> bool { self.outcome.is_converged() }

    #[wasm_bindgen(js_name = unifiedText)]
    #[must_use]
    pub fn unified_text(&self) -> Option<String> { self.outcome.unified_text().map(str::to_owned) }

    #[wasm_bindgen(js_name = resultAToB)]
    #[must_use]
    pub fn result_a_to_b(&self) -> String { self.outcome.result_a_to_b().to_owned() }

    #[wasm_bindgen(js_name = resultBToA)]
    #[must_use]
    pub fn result_b_to_a(&self) -> String { self.outcome.result_b_to_a().to_owned() }
}
