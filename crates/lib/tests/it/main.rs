/*! Integration tests for threadview.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - thread: Tests for Thread, Entry and the submit/clear operations
 * - view: Tests for the ChatThreadView registry and its typed errors
 * - input: Tests for the InputBuffer editing and submission contract
 * - render: Tests for fragment rendering and the markup mode
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("threadview=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod render;
mod view;
