use std::cell::Cell;
use std::rc::Rc;

use trie_router::trie::TrieError;
use trie_router::{BoxedHandler, RouteParams, Router, RouterError};

#[test]
fn router_when_literal_route_dispatched_then_handler_gets_empty_params() {
    let mut router: Router<BoxedHandler<usize>> = Router::new();
    router
        .register("/apps/home", Box::new(|params: &RouteParams| params.len()))
        .expect("literal route should register");

    let captured = router
        .dispatch("/apps/home")
        .expect("literal route should match");
    assert_eq!(captured, 0);
}

#[test]
fn router_when_no_route_matches_then_no_handler_is_invoked() {
    let invoked = Rc::new(Cell::new(false));
    let seen = invoked.clone();

    let mut router: Router<BoxedHandler<()>> = Router::new();
    router
        .register("/apps/home", Box::new(move |_| seen.set(true)))
        .expect("route should register");

    let err = router.dispatch("/apps/away");
    match err.expect_err("expected route miss") {
        RouterError::RouteNotFound { path } => assert_eq!(path, "/apps/away"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!invoked.get(), "handler must not run on a miss");
}

#[test]
fn router_when_path_is_proper_prefix_then_returns_not_found() {
    let mut router: Router<BoxedHandler<()>> = Router::new();
    router
        .register("/apps/profile/company", Box::new(|_| ()))
        .expect("route should register");

    let err = router.dispatch("/apps/profile");
    match err.expect_err("expected prefix miss") {
        RouterError::RouteNotFound { path } => assert_eq!(path, "/apps/profile"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_same_pattern_registered_twice_then_last_handler_wins() {
    let mut router: Router<BoxedHandler<&'static str>> = Router::new();
    router
        .register("/apps/home", Box::new(|_| "first"))
        .expect("first registration should succeed");
    router
        .register("/apps/home", Box::new(|_| "second"))
        .expect("second registration should succeed");

    assert_eq!(router.route_count(), 1);
    let outcome = router.dispatch("/apps/home").expect("route should match");
    assert_eq!(outcome, "second");
}

#[test]
fn router_when_handler_fails_then_failure_passes_through_unwrapped() {
    let mut router: Router<BoxedHandler<Result<u32, String>>> = Router::new();
    router
        .register("/apps/broken", Box::new(|_| Err("boom".to_string())))
        .expect("route should register");

    let outcome = router.dispatch("/apps/broken").expect("route should match");
    assert_eq!(outcome, Err("boom".to_string()));
}

#[test]
fn router_when_placeholder_names_conflict_then_register_returns_error() {
    let mut router: Router<BoxedHandler<()>> = Router::new();
    router
        .register("/users/:id", Box::new(|_| ()))
        .expect("first placeholder should register");

    let err = router.register("/users/:name", Box::new(|_| ()));
    match err.expect_err("expected placeholder conflict") {
        RouterError::Trie(TrieError::PlaceholderConflict {
            existing,
            conflicting,
        }) => {
            assert_eq!(existing, "id");
            assert_eq!(conflicting, "name");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_lookup_used_then_handler_is_not_invoked() {
    let invoked = Rc::new(Cell::new(false));
    let seen = invoked.clone();

    let mut router: Router<BoxedHandler<()>> = Router::new();
    router
        .register("/users/:id", Box::new(move |_| seen.set(true)))
        .expect("route should register");

    let matched = router.lookup("/users/9").expect("lookup should match");
    assert_eq!(matched.params.get("id"), Some("9"));
    assert!(!invoked.get());
}

#[test]
fn router_when_plain_closure_used_then_no_boxing_is_needed() {
    let mut router = Router::new();
    router
        .register("/echo/:word", |params: &RouteParams| {
            params.get("word").unwrap_or_default().to_owned()
        })
        .expect("route should register");

    let word = router.dispatch("/echo/hello").expect("route should match");
    assert_eq!(word, "hello");
}
