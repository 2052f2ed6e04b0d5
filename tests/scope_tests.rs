//! Public API tests for scope ordering and label validation.

use fixture_scope::{Scope, ScopeError, HIGH_SCOPES};

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn index() {
    assert_eq!(Scope::Session.ordinal(), 0);
    assert_eq!(Scope::Package.ordinal(), 1);
    assert_eq!(Scope::Module.ordinal(), 2);
    assert_eq!(Scope::Class.ordinal(), 3);
    assert_eq!(Scope::Function.ordinal(), 4);
}

#[test]
fn next() {
    assert_eq!(Scope::Session.next_narrower().unwrap(), Scope::Package);
    assert_eq!(Scope::Package.next_narrower().unwrap(), Scope::Module);
    assert_eq!(Scope::Module.next_narrower().unwrap(), Scope::Class);
    assert_eq!(Scope::Class.next_narrower().unwrap(), Scope::Function);

    assert!(matches!(
        Scope::Function.next_narrower(),
        Err(ScopeError::NoNarrowerScope { .. })
    ));
}

#[test]
fn high_scopes_are_everything_but_function() {
    assert_eq!(
        HIGH_SCOPES.to_vec(),
        vec![Scope::Session, Scope::Package, Scope::Module, Scope::Class]
    );
    assert!(!HIGH_SCOPES.contains(&Scope::Function));
}

// ---------------------------------------------------------------------------
// User input
// ---------------------------------------------------------------------------

#[test]
fn from_user() {
    assert_eq!(
        Scope::from_label("module", "for parametrize", Some("some::id")).unwrap(),
        Scope::Module
    );

    let err = Scope::from_label("foo", "for parametrize", Some("some::id")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "for parametrize from some::id got an unexpected scope value 'foo'"
    );
    match err {
        ScopeError::UnexpectedScope { label, .. } => assert_eq!(label, "foo"),
        other => panic!("expected UnexpectedScope, got {other:?}"),
    }
}

#[test]
fn from_user_without_origin() {
    let err = Scope::from_label("foo", "for parametrize", None).unwrap_err();
    assert!(err.is_user_error());
    assert_eq!(
        err.to_string(),
        "for parametrize got an unexpected scope value 'foo'"
    );
}

#[test]
fn scopes_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                Scope::ALL
                    .into_iter()
                    .map(|s| (s.ordinal(), s.next_narrower().ok()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &results[1..] {
        assert_eq!(r, &results[0]);
    }
}
