//! Test harness that builds the real router over mock dependencies.
//!
//! No network or containers are involved: the AI is a `MockAI`, requests go
//! straight into the router via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;
use suitability_core::kernel::{MockAI, TestDependencies};
use suitability_core::server::build_app;
use test_context::AsyncTestContext;

/// Test harness owning a router and a handle on its mock AI.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let response = ctx.get("/health").await;
/// }
/// ```
pub struct TestHarness {
    pub router: Router,
    /// Mock AI - inspect recorded calls here.
    pub ai: Arc<MockAI>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::with_ai(MockAI::new())
    }

    async fn teardown(self) {}
}

impl TestHarness {
    /// Creates a harness whose AI replies from the given mock's queue.
    pub fn with_ai(ai: MockAI) -> Self {
        Self::with_deps(TestDependencies::new().mock_ai(ai))
    }

    /// Creates a harness over fully custom test dependencies.
    pub fn with_deps(deps: TestDependencies) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let (deps, ai) = deps.into_server_deps();
        let router = build_app(deps, &[]);

        Self { router, ai }
    }
}
