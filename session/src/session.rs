//! Session manager.

use crate::error::{SessionError, SessionResult};
use bigred_change::{Change, ChangeDescriptor};
use bigred_core::PropertyScratchpad;
use bigred_graph::{Model, PropertyEvent, View};
use bigred_journal::{History, HistoryEntry};
use bigred_transaction::{ChangeExecutor, ChangeResult, EngineConfig, ExecutorManager};
use tracing::{debug, trace, warn};

/// Session ID type.
pub type SessionId = u64;

/// Handle returned by [`Session::subscribe`].
pub type ObserverId = u64;

type Observer = Box<dyn FnMut(&PropertyEvent)>;

/// An editing session over one document.
///
/// Every mutation of the model goes through the session's executor
/// manager. Committed changes are recorded for undo, and the resulting
/// property events are handed to every subscribed observer.
pub struct Session {
    /// Unique session ID.
    id: SessionId,
    /// The document being edited.
    model: Model,
    /// Validators and executors.
    executor: ExecutorManager,
    /// Undo/redo stacks.
    history: History,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: ObserverId,
    config: EngineConfig,
}

impl Session {
    /// Create a session over an empty model.
    pub fn new(id: SessionId, config: EngineConfig) -> Self {
        Self::with_model(id, Model::new(), config)
    }

    /// Create a session over an existing model.
    pub fn with_model(id: SessionId, model: Model, config: EngineConfig) -> Self {
        Self {
            id,
            model,
            executor: ExecutorManager::with_defaults(&config),
            history: History::new(config.history_limit),
            observers: Vec::new(),
            next_observer: 1,
            config,
        }
    }

    /// Get the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get a reference to the model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Get a mutable reference to the model, for creating detached objects.
    ///
    /// Attached state only changes through [`ChangeExecutor::try_apply_change`].
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// A read view of the live model.
    pub fn view(&self) -> View<'_> {
        self.model.view()
    }

    pub fn executor(&self) -> &ExecutorManager {
        &self.executor
    }

    /// Get the executor manager, for registering validators and executors.
    pub fn executor_mut(&mut self) -> &mut ExecutorManager {
        &mut self.executor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Validate a change and return its effect as a scratchpad, which can be
    /// read through [`Model::view_with`].
    pub fn preview(&self, change: &Change) -> ChangeResult<PropertyScratchpad> {
        self.executor.try_validate_change(&self.model, change)
    }

    // ==================== Descriptors ====================

    /// Check that a descriptor resolves and validates against this model.
    pub fn try_validate_descriptor(&mut self, descriptor: &ChangeDescriptor) -> ChangeResult<()> {
        self.executor
            .validator()
            .try_validate_descriptor(&mut self.model, descriptor)
    }

    /// Resolve a descriptor against this model and commit the result.
    pub fn try_apply_descriptor(&mut self, descriptor: &ChangeDescriptor) -> ChangeResult<Change> {
        let result = self.executor.try_apply_descriptor(&mut self.model, descriptor);
        self.notify();
        let change = result?;
        self.record(&change);
        Ok(change)
    }

    // ==================== Undo / Redo ====================

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo the most recent transaction. Returns the change that undid it.
    pub fn undo(&mut self) -> SessionResult<Change> {
        let entry = self.history.pop_undo().ok_or_else(|| {
            trace!("undo: nothing to undo");
            SessionError::NothingToUndo
        })?;
        let mut inverse = entry.inverse.clone();
        let result = self.executor.try_apply_change(&mut self.model, &mut inverse);
        self.notify();
        match result {
            Ok(()) => {
                debug!(seq = entry.seq, "transaction undone");
                self.history.push_redo(entry);
                Ok(inverse)
            }
            Err(err) => {
                warn!(seq = entry.seq, error = %err, "undo refused");
                self.history.push_undo(entry);
                Err(err.into())
            }
        }
    }

    /// Reapply the most recently undone transaction.
    pub fn redo(&mut self) -> SessionResult<Change> {
        let entry = self.history.pop_redo().ok_or_else(|| {
            trace!("redo: nothing to redo");
            SessionError::NothingToRedo
        })?;
        let mut change = entry.change.clone();
        let result = self.executor.try_apply_change(&mut self.model, &mut change);
        self.notify();
        match result {
            Ok(()) => {
                debug!(seq = entry.seq, "transaction redone");
                match change.inverse() {
                    Some(inverse) => self
                        .history
                        .push_undo(HistoryEntry::new(entry.seq, change.clone(), inverse)),
                    None => warn!(seq = entry.seq, "redone change has no inverse"),
                }
                Ok(change)
            }
            Err(err) => {
                warn!(seq = entry.seq, error = %err, "redo refused");
                self.history.push_redo(entry);
                Err(err.into())
            }
        }
    }

    // ==================== Observers ====================

    /// Register an observer for live property mutations.
    ///
    /// Events are delivered after each commit, in the order the mutations
    /// happened.
    pub fn subscribe(&mut self, observer: impl FnMut(&PropertyEvent) + 'static) -> ObserverId {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it wasn't registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        let events = self.model.drain_events();
        if events.is_empty() {
            return;
        }
        trace!(
            events = events.len(),
            observers = self.observers.len(),
            "delivering property events"
        );
        for event in &events {
            for (_, observer) in &mut self.observers {
                observer(event);
            }
        }
    }

    fn record(&mut self, change: &Change) {
        if change.leaf_count() == 0 {
            return;
        }
        match change.inverse() {
            Some(inverse) => {
                self.history.record(change.clone(), inverse);
            }
            None => warn!(change = %change, "committed change has no inverse"),
        }
    }
}

impl ChangeExecutor for Session {
    fn try_validate_change(&self, change: &Change) -> ChangeResult<()> {
        self.preview(change).map(|_| ())
    }

    fn try_apply_change(&mut self, change: &mut Change) -> ChangeResult<()> {
        let result = self.executor.try_apply_change(&mut self.model, change);
        self.notify();
        result?;
        self.record(change);
        Ok(())
    }
}
