use std::error::Error;

use ticktask::task::{NoopAction, Task};

type TestResult = Result<(), Box<dyn Error>>;

fn noop_task() -> Task {
    Task::new(NoopAction)
}

#[test]
fn new_task_starts_with_empty_collections() -> TestResult {
    let root = noop_task();

    assert!(!root.is_done());
    assert!(!root.is_parallel());
    assert!(!root.has_queued_tasks());
    assert!(!root.has_parallel_tasks());
    assert!(root.current_queued_task().is_none());
    Ok(())
}

#[test]
fn then_queues_tasks_in_order() -> TestResult {
    let root = noop_task();
    let first = noop_task();
    let second = noop_task();

    root.then(&first).then(&second);

    let queued = root.queued_tasks();
    assert_eq!(queued.len(), 2);
    assert!(Task::ptr_eq(&queued[0], &first));
    assert!(Task::ptr_eq(&queued[1], &second));
    assert!(!root.has_parallel_tasks());
    assert!(!first.is_parallel());
    Ok(())
}

#[test]
fn next_places_a_task_ahead_of_the_queue() -> TestResult {
    let root = noop_task();
    let queued = noop_task();
    let urgent = noop_task();

    root.then(&queued);
    root.next(&urgent);

    let order = root.queued_tasks();
    assert!(Task::ptr_eq(&order[0], &urgent));
    assert!(Task::ptr_eq(&order[1], &queued));
    Ok(())
}

#[test]
fn also_adds_to_the_parallel_set() -> TestResult {
    let root = noop_task();
    let a = noop_task();
    let b = noop_task();

    root.also(&a).also(&b);

    let parallel = root.parallel_tasks();
    assert_eq!(parallel.len(), 2);
    assert!(parallel.contains(&a));
    assert!(parallel.contains(&b));
    assert!(a.is_parallel());
    assert!(b.is_parallel());
    assert!(!root.has_queued_tasks());
    Ok(())
}

#[test]
fn then_also_queues_a_parallel_marked_task() -> TestResult {
    let root = noop_task();
    let a = noop_task();
    let b = noop_task();

    root.then_also(&a).then_also(&b);

    let queued = root.queued_tasks();
    assert_eq!(queued.len(), 2);
    assert!(queued.contains(&a));
    assert!(queued.contains(&b));
    assert!(queued.iter().all(Task::is_parallel));
    assert!(!root.has_parallel_tasks());
    Ok(())
}

#[test]
fn cancel_removes_a_queued_task() -> TestResult {
    let root = noop_task();
    let first = noop_task();
    let second = noop_task();

    root.then(&first).then(&second);
    root.cancel(&first);

    let queued = root.queued_tasks();
    assert!(!queued.contains(&first));
    assert!(queued.contains(&second));
    Ok(())
}

#[test]
fn cancel_removes_a_parallel_task() -> TestResult {
    let root = noop_task();
    let first = noop_task();
    let second = noop_task();

    root.also(&first).also(&second);
    root.cancel(&first);

    let parallel = root.parallel_tasks();
    assert!(!parallel.contains(&first));
    assert!(parallel.contains(&second));
    Ok(())
}

#[test]
fn cancel_ignores_value_identical_but_distinct_tasks() -> TestResult {
    let root = noop_task();
    let queued = noop_task();
    // Structurally identical, but a different task entirely.
    let lookalike = noop_task();

    root.then(&queued);
    root.cancel(&lookalike);

    assert!(root.queued_tasks().contains(&queued));
    Ok(())
}

#[test]
fn cancel_is_a_no_op_when_the_task_is_absent() -> TestResult {
    let root = noop_task();
    let unrelated = noop_task();

    root.cancel(&unrelated);

    assert!(!root.has_queued_tasks());
    assert!(!root.has_parallel_tasks());
    Ok(())
}

#[test]
fn cancel_does_not_touch_the_cancelled_tasks_state() -> TestResult {
    let root = noop_task();
    let child = noop_task();

    root.also(&child);
    root.cancel(&child);

    // Still parallel-marked, not done, and usable standalone.
    assert!(child.is_parallel());
    assert!(!child.is_done());
    assert!(!child.update(1.0));
    assert!(child.is_done());
    Ok(())
}

#[test]
fn handle_clones_compare_equal_by_identity() -> TestResult {
    let task = noop_task();
    let alias = task.clone();
    let other = noop_task();

    assert_eq!(task, alias);
    assert_ne!(task, other);
    Ok(())
}
