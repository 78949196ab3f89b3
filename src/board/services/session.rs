//! Stateful board service driven by the presentation layer.

use crate::board::{
    domain::{Board, BoardConfig, ColumnId, TaskId},
    ports::{BoardObserver, IdGenerator, SubscriptionId},
};
use crate::drag::{
    domain::{DragEvent, DragItem, DragOverlay, DragSession},
    engine,
};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Owns the board, the drag session and the edit locks of one UI session.
///
/// The nine interface operations (six CRUD mutators and three drag event
/// handlers) never fail; absent identifiers are no-ops. Subscribed
/// observers are notified synchronously after each effective change and
/// not at all for no-ops.
pub struct BoardService<G>
where
    G: IdGenerator,
{
    board: Board,
    session: DragSession,
    editing: HashSet<TaskId>,
    config: BoardConfig,
    generator: G,
    observers: Vec<(SubscriptionId, Arc<dyn BoardObserver>)>,
    next_subscription: u64,
}

impl<G> BoardService<G>
where
    G: IdGenerator,
{
    /// Creates a service over `board` with the default configuration.
    #[must_use]
    pub fn new(board: Board, generator: G) -> Self {
        Self::with_config(board, generator, BoardConfig::default())
    }

    /// Creates a service over `board` with an explicit configuration.
    #[must_use]
    pub fn with_config(board: Board, generator: G, config: BoardConfig) -> Self {
        Self {
            board,
            session: DragSession::Idle,
            editing: HashSet::new(),
            config,
            generator,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current drag session.
    #[must_use]
    pub const fn drag_session(&self) -> &DragSession {
        &self.session
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Resolves the drag overlay against the current board.
    #[must_use]
    pub fn overlay(&self) -> Option<DragOverlay> {
        self.session.overlay(&self.board)
    }

    /// Registers an observer and returns its subscription handle.
    pub fn subscribe(&mut self, observer: Arc<dyn BoardObserver>) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId::new(self.next_subscription);
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscription, _)| *subscription != id);
        self.observers.len() != before
    }

    /// Appends a new column with a generated identifier and default title.
    pub fn create_column(&mut self) -> ColumnId {
        let id = self.generator.next_column_id();
        debug!(column_id = %id, "creating column");
        let next = self.board.create_column(id.clone(), &self.config);
        self.commit(next);
        id
    }

    /// Removes a column and the tasks it owns.
    pub fn delete_column(&mut self, id: &ColumnId) {
        debug!(column_id = %id, "deleting column");
        let next = self.board.delete_column(id);
        self.commit(next);
    }

    /// Renames a column.
    pub fn update_column(&mut self, id: &ColumnId, title: &str) {
        let next = self.board.update_column(id, title);
        self.commit(next);
    }

    /// Appends a task to `column_id` with a generated identifier and default
    /// content.
    ///
    /// Returns `None` without consuming an identifier when the column does
    /// not exist.
    pub fn create_task(&mut self, column_id: &ColumnId) -> Option<TaskId> {
        if self.board.column(column_id).is_none() {
            trace!(column_id = %column_id, "task creation for unknown column ignored");
            return None;
        }
        let id = self.generator.next_task_id();
        debug!(task_id = %id, column_id = %column_id, "creating task");
        let next = self.board.create_task(id.clone(), column_id, &self.config);
        self.commit(next);
        if self.config.lock_new_tasks_for_editing {
            self.editing.insert(id.clone());
        }
        Some(id)
    }

    /// Removes a task.
    pub fn delete_task(&mut self, id: &TaskId) {
        debug!(task_id = %id, "deleting task");
        let next = self.board.delete_task(id);
        self.commit(next);
    }

    /// Replaces the content of a task.
    pub fn update_task(&mut self, id: &TaskId, content: &str) {
        let next = self.board.update_task(id, content);
        self.commit(next);
    }

    /// Puts a task in edit mode, which blocks dragging it.
    ///
    /// Returns `false` when the task does not exist.
    pub fn begin_task_edit(&mut self, id: &TaskId) -> bool {
        if self.board.task(id).is_none() {
            return false;
        }
        self.editing.insert(id.clone());
        true
    }

    /// Leaves edit mode for a task.
    pub fn finish_task_edit(&mut self, id: &TaskId) {
        self.editing.remove(id);
    }

    /// Returns `true` while a task is in edit mode.
    #[must_use]
    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing.contains(id)
    }

    /// Starts dragging `active`.
    ///
    /// Ignored for tasks in edit mode and for elements absent from the
    /// board.
    pub fn drag_start(&mut self, active: DragItem) {
        if !self.is_draggable(&active) {
            trace!(active = active.id_str(), "drag start ignored");
            return;
        }
        self.handle(&DragEvent::Start { active });
    }

    /// Applies a drag-over event.
    ///
    /// Ignored unless `active` is the element the current session is
    /// dragging, so a rejected `drag_start` cannot move a locked task.
    pub fn drag_over(&mut self, active: DragItem, over: Option<DragItem>) {
        if !self.is_dragging(&active) {
            trace!(active = active.id_str(), "drag over ignored outside the session");
            return;
        }
        self.handle(&DragEvent::Over { active, over });
    }

    /// Applies a drag-end event and clears the drag session.
    ///
    /// The session is cleared in every case; the reorder runs only when
    /// `active` is the element being dragged.
    pub fn drag_end(&mut self, active: DragItem, over: Option<DragItem>) {
        if !self.is_dragging(&active) {
            trace!(active = active.id_str(), "drag end without matching drag start");
            self.set_session(DragSession::Idle);
            return;
        }
        self.handle(&DragEvent::End { active, over });
    }

    fn is_dragging(&self, active: &DragItem) -> bool {
        self.session.active().as_ref() == Some(active)
    }

    fn is_draggable(&self, active: &DragItem) -> bool {
        match active {
            DragItem::Column(id) => self.board.column(id).is_some(),
            DragItem::Task(id) => self.board.task(id).is_some() && !self.is_editing(id),
        }
    }

    fn handle(&mut self, event: &DragEvent) {
        let transition = engine::apply(&self.board, event);
        if let Some(next) = transition.board {
            self.commit(next);
        }
        if let Some(session) = transition.session {
            self.set_session(session);
        }
    }

    fn commit(&mut self, next: Board) {
        if next == self.board {
            return;
        }
        self.board = next;
        let board = &self.board;
        self.editing.retain(|id| board.task(id).is_some());
        for (_, observer) in &self.observers {
            observer.board_changed(&self.board);
        }
    }

    fn set_session(&mut self, session: DragSession) {
        if session == self.session {
            return;
        }
        debug!(?session, "drag session changed");
        self.session = session;
        for (_, observer) in &self.observers {
            observer.drag_session_changed(&self.session);
        }
    }
}

impl<G> fmt::Debug for BoardService<G>
where
    G: IdGenerator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardService")
            .field("board", &self.board)
            .field("session", &self.session)
            .field("editing", &self.editing)
            .field("config", &self.config)
            .field("generator", &self.generator)
            .field("observers", &self.observers.len())
            .finish()
    }
}
