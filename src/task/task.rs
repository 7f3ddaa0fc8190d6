// src/task/task.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::task::action::Action;

/// Mutable bookkeeping for a task, separate from its action so that a
/// running action's callback can compose onto its own task (composition
/// only touches this cell).
struct TaskState {
    label: Option<String>,
    is_parallel: bool,
    is_done: bool,
    queued: VecDeque<Task>,
    parallel: Vec<Task>,
}

struct TaskInner {
    action: RefCell<Box<dyn Action>>,
    state: RefCell<TaskState>,
}

/// A node in the update tree: one [`Action`] plus a queue of sequential
/// continuations and a set of parallel co-active children.
///
/// `Task` is a cheap shared handle; cloning it yields another handle to the
/// *same* task. Callers keep a clone of any child they may want to
/// [`cancel`](Task::cancel) later. Equality between handles is identity, not
/// value: two tasks built from identical actions are distinct.
///
/// The whole tree is single-threaded and call-driven — all progress happens
/// inside [`update`](Task::update). A child's callback may compose onto any
/// other task in the tree (including the root) while an update is in flight.
/// Inserting a task into its own ancestry (a cycle) or mutating a task from
/// inside that same task's sweep is a caller programming error and panics.
pub struct Task {
    inner: Rc<TaskInner>,
}

impl Task {
    /// Create a task around an action, with empty queue and parallel set.
    pub fn new(action: impl Action + 'static) -> Self {
        Self {
            inner: Rc::new(TaskInner {
                action: RefCell::new(Box::new(action)),
                state: RefCell::new(TaskState {
                    label: None,
                    is_parallel: false,
                    is_done: false,
                    queued: VecDeque::new(),
                    parallel: Vec::new(),
                }),
            }),
        }
    }

    /// Attach a label used in log output and `Debug` formatting.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.inner.state.borrow_mut().label = Some(label.into());
        self
    }

    /// `true` once this task's own action has first reported done. Latches:
    /// it never reverts, regardless of further updates.
    pub fn is_done(&self) -> bool {
        self.inner.state.borrow().is_done
    }

    /// `true` if this task was composed via [`also`](Task::also) or
    /// [`then_also`](Task::then_also).
    pub fn is_parallel(&self) -> bool {
        self.inner.state.borrow().is_parallel
    }

    pub fn label(&self) -> Option<String> {
        self.inner.state.borrow().label.clone()
    }

    /// Snapshot of the queued continuations, front first.
    pub fn queued_tasks(&self) -> Vec<Task> {
        self.inner.state.borrow().queued.iter().cloned().collect()
    }

    /// Snapshot of the parallel set (no significant order).
    pub fn parallel_tasks(&self) -> Vec<Task> {
        self.inner.state.borrow().parallel.clone()
    }

    pub fn current_queued_task(&self) -> Option<Task> {
        self.inner.state.borrow().queued.front().cloned()
    }

    pub fn has_queued_tasks(&self) -> bool {
        !self.inner.state.borrow().queued.is_empty()
    }

    pub fn has_parallel_tasks(&self) -> bool {
        !self.inner.state.borrow().parallel.is_empty()
    }

    /// Identity comparison: do two handles refer to the same task?
    pub fn ptr_eq(a: &Task, b: &Task) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Append `task` to the end of the queue: it runs after everything
    /// already queued, once this task's own action is done.
    pub fn then(&self, task: &Task) -> &Self {
        debug!(owner = %self, task = %task, "queued at back");
        self.inner.state.borrow_mut().queued.push_back(task.clone());
        self
    }

    /// Prepend `task` to the front of the queue: it runs before everything
    /// already queued but not yet started.
    pub fn next(&self, task: &Task) -> &Self {
        debug!(owner = %self, task = %task, "queued at front");
        self.inner.state.borrow_mut().queued.push_front(task.clone());
        self
    }

    /// Mark `task` parallel and add it straight to the parallel set. It gets
    /// its first update on the very next [`update`](Task::update) call,
    /// regardless of this task's own completion state.
    pub fn also(&self, task: &Task) -> &Self {
        debug!(owner = %self, task = %task, "added to parallel set");
        task.inner.state.borrow_mut().is_parallel = true;
        self.inner.state.borrow_mut().parallel.push(task.clone());
        self
    }

    /// Mark `task` parallel but queue it like [`then`](Task::then). When the
    /// queue drain reaches it, it is promoted into the parallel set instead
    /// of running sequentially.
    pub fn then_also(&self, task: &Task) -> &Self {
        task.inner.state.borrow_mut().is_parallel = true;
        self.then(task)
    }

    /// Stop advancing `task`: remove every handle to it from both the queue
    /// and the parallel set. A no-op if it is in neither. The cancelled
    /// task's own state is untouched — it only stops being driven by this
    /// parent.
    pub fn cancel(&self, task: &Task) {
        debug!(owner = %self, task = %task, "cancelled");
        let mut state = self.inner.state.borrow_mut();
        state.queued.retain(|t| !Task::ptr_eq(t, task));
        state.parallel.retain(|t| !Task::ptr_eq(t, task));
    }

    /// Advance this task by one step.
    ///
    /// In order: run the own action until it first reports done; then drain
    /// the queue one entry per call, promoting parallel-marked entries into
    /// the parallel set as they reach the front; and on every call advance
    /// all parallel members, dropping the finished ones.
    ///
    /// Returns `false` only once the own action is done and both the queue
    /// and the parallel set are empty. Updating after that is safe and keeps
    /// returning `false`.
    pub fn update(&self, delta: f64) -> bool {
        let is_done = self.inner.state.borrow().is_done;
        if !is_done {
            let continuing = self.inner.action.borrow_mut().update(delta);
            if !continuing {
                self.inner.state.borrow_mut().is_done = true;
                debug!(task = %self, "own action finished");
            }
        } else {
            // Promote leading parallel-marked entries so they never block
            // sequential progress; they start the moment they would
            // otherwise have reached the front.
            loop {
                let mut state = self.inner.state.borrow_mut();
                let promote = state
                    .queued
                    .front()
                    .map(|t| t.is_parallel())
                    .unwrap_or(false);
                if !promote {
                    break;
                }
                if let Some(task) = state.queued.pop_front() {
                    debug!(task = %task, "promoted into parallel set");
                    state.parallel.push(task);
                }
            }

            // Advance the (now necessarily non-parallel) front entry. No
            // borrow of this task is held across the child update, so its
            // callbacks may compose onto this task.
            let front = self.inner.state.borrow().queued.front().cloned();
            if let Some(front) = front {
                if !front.update(delta) {
                    debug!(owner = %self, task = %front, "queued task finished");
                    self.inner
                        .state
                        .borrow_mut()
                        .queued
                        .retain(|t| !Task::ptr_eq(t, &front));
                }
            }
        }

        // Parallel members advance every call, even while the own action is
        // still running. Sweep over a snapshot: a member's callback may add
        // or cancel members mid-sweep, and additions wait for the next call.
        let snapshot = self.parallel_tasks();
        if !snapshot.is_empty() {
            let mut finished = Vec::new();
            for task in &snapshot {
                if !task.update(delta) {
                    finished.push(task.clone());
                }
            }
            if !finished.is_empty() {
                debug!(owner = %self, count = finished.len(), "parallel tasks finished");
                self.inner
                    .state
                    .borrow_mut()
                    .parallel
                    .retain(|t| !finished.iter().any(|f| Task::ptr_eq(t, f)));
            }
        }

        let state = self.inner.state.borrow();
        !(state.is_done && state.queued.is_empty() && state.parallel.is_empty())
    }
}

impl Clone for Task {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Identity equality: handles compare equal iff they refer to the same task.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        Task::ptr_eq(self, other)
    }
}

impl Eq for Task {}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.state.borrow().label.as_deref() {
            Some(label) => f.write_str(label),
            None => write!(f, "task@{:p}", Rc::as_ptr(&self.inner)),
        }
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Task")
            .field("label", &state.label)
            .field("is_parallel", &state.is_parallel)
            .field("is_done", &state.is_done)
            .field("queued", &state.queued.len())
            .field("parallel", &state.parallel.len())
            .finish()
    }
}
