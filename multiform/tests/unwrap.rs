//! Response unwrapping: nested representables, prepare hooks, depth guard.

use multiform::testing::FakeRequest;
use multiform::{
    MethodName, NegotiateError, Negotiator, Outcome, Representable, Request, Respond, Response,
    ResponseFuture,
};

mod common;
use common::{default_resolver, negotiator};

// ============================================================================
// Representable fixtures
// ============================================================================

/// A chain of deferred values `remaining` links long, ending in a terminal
/// response.
struct Chain {
    remaining: usize,
}

impl Representable for Chain {
    fn to_response<'a>(&'a self, _request: &'a dyn Request) -> ResponseFuture<'a> {
        let remaining = self.remaining;
        Box::pin(async move {
            if remaining == 0 {
                Ok(Outcome::Ready(Response::text("terminal")))
            } else {
                Ok(Outcome::deferred(Chain {
                    remaining: remaining - 1,
                }))
            }
        })
    }
}

/// A representable whose conversion yields itself, forever.
struct Cycle;

impl Representable for Cycle {
    fn to_response<'a>(&'a self, _request: &'a dyn Request) -> ResponseFuture<'a> {
        Box::pin(async { Ok(Outcome::deferred(Cycle)) })
    }
}

/// A target whose json handler defers to a chain of the given length.
struct Wrapping {
    links: usize,
}

impl Respond for Wrapping {
    fn respond_to<'a>(
        &'a self,
        method: &MethodName,
        _request: &'a dyn Request,
    ) -> Option<ResponseFuture<'a>> {
        if method.as_str() != "toJsonResponse" {
            return None;
        }

        let links = self.links;
        Some(Box::pin(async move {
            Ok(Outcome::deferred(Chain { remaining: links }))
        }))
    }
}

/// A target whose handler never terminates on its own.
struct Cyclic;

impl Respond for Cyclic {
    fn respond_to<'a>(
        &'a self,
        _method: &MethodName,
        _request: &'a dyn Request,
    ) -> Option<ResponseFuture<'a>> {
        Some(Box::pin(async { Ok(Outcome::deferred(Cycle)) }))
    }
}

/// A target exercising both prepare hooks.
struct Hooked;

impl Respond for Hooked {
    fn respond_to<'a>(
        &'a self,
        _method: &MethodName,
        _request: &'a dyn Request,
    ) -> Option<ResponseFuture<'a>> {
        Some(Box::pin(async {
            Ok(Outcome::deferred(Chain { remaining: 1 }))
        }))
    }

    fn prepare(&self, outcome: Outcome) -> Outcome {
        // Runs once, on the raw handler outcome: deferred values pass
        // through untouched here.
        match outcome {
            Outcome::Ready(response) => {
                Outcome::Ready(Response::new(response.status(), "prepared"))
            }
            deferred => deferred,
        }
    }

    fn prepare_final(&self, response: Response) -> Response {
        Response::new(response.status(), format!("{}|final", response.body()))
    }
}

// ============================================================================
// Tests
// ============================================================================

fn json_request() -> FakeRequest {
    FakeRequest::get("location").accepts(&["application/json"])
}

#[tokio::test]
async fn nested_representables_unwrap_to_the_terminal_value() {
    let response = negotiator()
        .respond(&json_request(), &Wrapping { links: 2 })
        .await
        .unwrap();

    assert_eq!(response.body(), "terminal");
}

#[tokio::test]
async fn deep_chains_unwrap_fully_by_default() {
    let response = negotiator()
        .respond(&json_request(), &Wrapping { links: 32 })
        .await
        .unwrap();

    assert_eq!(response.body(), "terminal");
}

#[tokio::test]
async fn depth_guard_stops_a_cyclic_chain() {
    let negotiator = Negotiator::builder()
        .resolver(default_resolver())
        .max_unwrap_depth(3)
        .build();

    let err = negotiator
        .respond(&json_request(), &Cyclic)
        .await
        .unwrap_err();

    assert!(matches!(err, NegotiateError::UnwrapDepth(3)));
}

#[tokio::test]
async fn depth_guard_leaves_shallow_chains_alone() {
    let negotiator = Negotiator::builder()
        .resolver(default_resolver())
        .max_unwrap_depth(8)
        .build();

    let response = negotiator
        .respond(&json_request(), &Wrapping { links: 2 })
        .await
        .unwrap();

    assert_eq!(response.body(), "terminal");
}

#[tokio::test]
async fn prepare_runs_before_unwrapping_and_prepare_final_after() {
    let response = negotiator()
        .respond(&json_request(), &Hooked)
        .await
        .unwrap();

    // prepare saw a deferred outcome and left it alone; the chain then
    // unwrapped to "terminal"; prepare_final ran on the terminal value.
    assert_eq!(response.body(), "terminal|final");
}

#[tokio::test]
async fn prepare_transforms_ready_outcomes() {
    struct Immediate;

    impl Respond for Immediate {
        fn respond_to<'a>(
            &'a self,
            _method: &MethodName,
            _request: &'a dyn Request,
        ) -> Option<ResponseFuture<'a>> {
            Some(Box::pin(async { Ok(Outcome::Ready(Response::text("raw"))) }))
        }

        fn prepare(&self, outcome: Outcome) -> Outcome {
            match outcome {
                Outcome::Ready(response) => {
                    Outcome::Ready(Response::new(response.status(), "prepared"))
                }
                deferred => deferred,
            }
        }
    }

    let response = negotiator()
        .respond(&json_request(), &Immediate)
        .await
        .unwrap();

    assert_eq!(response.body(), "prepared");
}
