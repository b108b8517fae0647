//! Committing, undoing and observing changes through a session.

use bigred_change::{Change, ChangeFactory};
use bigred_core::{ObjectId, Property};
use bigred_session::{ChangeExecutor, Session, SessionError};
use bigred_transaction::{ChangeError, EngineConfig};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

/// A session with roots "0", "1" and "2", in that order.
fn session_with_roots() -> (Session, Vec<ObjectId>) {
    let mut session = Session::new(1, EngineConfig::default());
    let bigraph = session.model().bigraph();
    let mut roots = Vec::new();
    for _ in 0..3 {
        let root = session.model_mut().create_root();
        let mut change = session.model().change_add_child_auto(bigraph, root).unwrap();
        session.try_apply_change(&mut change).unwrap();
        roots.push(root);
    }
    (session, roots)
}

/// Apply through any executor.
fn commit(executor: &mut impl ChangeExecutor, mut change: Change) -> Result<(), ChangeError> {
    executor.try_validate_change(&change)?;
    executor.try_apply_change(&mut change)
}

#[test]
fn test_undoing_removal_restores_parent_name_and_position() {
    // GIVEN
    let (mut session, roots) = session_with_roots();
    let bigraph = session.model().bigraph();

    // WHEN
    commit(&mut session, Change::remove(roots[1])).unwrap();
    let after_remove = session.view().children(bigraph);
    session.undo().unwrap();

    // THEN
    assert_eq!(after_remove, vec![roots[0], roots[2]]);
    assert_eq!(session.view().children(bigraph), roots);
    assert_eq!(session.view().name(roots[1]).as_deref(), Some("1"));
}

#[test]
fn test_undo_and_redo_walk_the_history() {
    // GIVEN
    let (mut session, roots) = session_with_roots();
    commit(&mut session, Change::name(roots[0], "5")).unwrap();
    commit(&mut session, Change::name(roots[0], "6")).unwrap();

    // WHEN
    session.undo().unwrap();
    session.undo().unwrap();
    let undone = session.view().name(roots[0]);
    session.redo().unwrap();

    // THEN
    assert_eq!(undone.as_deref(), Some("0"));
    assert_eq!(session.view().name(roots[0]).as_deref(), Some("5"));
    assert!(session.can_redo());
}

#[test]
fn test_redo_available_until_exhausted() {
    // GIVEN
    let (mut session, roots) = session_with_roots();
    commit(&mut session, Change::name(roots[1], "7")).unwrap();
    session.undo().unwrap();
    let depth = session.history().redo_len();

    // WHEN
    let redone = session.redo();

    // THEN
    assert!(redone.is_ok());
    assert_eq!(depth, 1);
    assert_eq!(session.view().name(roots[1]).as_deref(), Some("7"));
    assert_eq!(session.redo().unwrap_err(), SessionError::NothingToRedo);
}

#[test]
fn test_observers_see_undo() {
    // GIVEN
    let (mut session, roots) = session_with_roots();
    commit(&mut session, Change::name(roots[2], "9")).unwrap();
    let names = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&names);
    session.subscribe(move |event| {
        if event.property == Property::Name {
            sink.borrow_mut().push(event.new.as_text().map(str::to_string));
        }
    });

    // WHEN
    session.undo().unwrap();

    // THEN
    assert_eq!(*names.borrow(), vec![Some("2".to_string())]);
}

#[test]
fn test_validation_alone_changes_nothing() {
    let (session, roots) = session_with_roots();

    let result = session.try_validate_change(&Change::name(roots[0], "4"));

    assert_eq!(result, Ok(()));
    assert_eq!(session.view().name(roots[0]).as_deref(), Some("0"));
    assert!(session.model().pending_events().is_empty());
}
