/*! Integration tests for hashpath.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - value: Tests for keys, containers, objects and JSON interop
 * - path: Tests for path parsing, wildcards and bracket filters
 * - hash: Tests for the engine operations, organized by operation
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("hashpath=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod hash;
mod path;
mod value;
