use std::error::Error;
use std::io::Write;

use ticktask::script::model::{ComposeMode, StepKind};
use ticktask::script::{build_root_task, load_and_validate, validate_script, ScriptFile};

type TestResult = Result<(), Box<dyn Error>>;

fn parse(toml_src: &str) -> Result<ScriptFile, toml::de::Error> {
    toml::from_str(toml_src)
}

#[test]
fn parses_a_full_script() -> TestResult {
    let script = parse(
        r#"
        [script]
        name = "intro"

        [[step]]
        kind = "wait"
        label = "pause"
        duration = 1.5

        [[step]]
        kind = "print"
        message = "hello"
        mode = "also"

        [[step]]
        kind = "print"
        message = "later"
        mode = "then-also"
        "#,
    )?;

    assert_eq!(script.script.name, "intro");
    assert_eq!(script.step.len(), 3);

    assert_eq!(script.step[0].kind, StepKind::Wait);
    assert_eq!(script.step[0].label.as_deref(), Some("pause"));
    assert_eq!(script.step[0].duration, Some(1.5));
    // `mode` defaults to "then".
    assert_eq!(script.step[0].mode, ComposeMode::Then);

    assert_eq!(script.step[1].mode, ComposeMode::Also);
    assert_eq!(script.step[2].mode, ComposeMode::ThenAlso);

    validate_script(&script)?;
    Ok(())
}

#[test]
fn script_name_defaults_to_timeline() -> TestResult {
    let script = parse(
        r#"
        [[step]]
        kind = "print"
        message = "hi"
        "#,
    )?;

    assert_eq!(script.script.name, "timeline");
    Ok(())
}

#[test]
fn rejects_an_empty_timeline() -> TestResult {
    let script = parse("[script]\nname = \"empty\"\n")?;

    let err = validate_script(&script).unwrap_err();
    assert!(err.to_string().contains("at least one [[step]]"));
    Ok(())
}

#[test]
fn rejects_a_wait_step_without_a_duration() -> TestResult {
    let script = parse(
        r#"
        [[step]]
        kind = "wait"
        label = "pause"
        "#,
    )?;

    let err = validate_script(&script).unwrap_err();
    assert!(err.to_string().contains("pause"));
    assert!(err.to_string().contains("duration"));
    Ok(())
}

#[test]
fn rejects_a_negative_wait_duration() -> TestResult {
    let script = parse(
        r#"
        [[step]]
        kind = "wait"
        duration = -0.5
        "#,
    )?;

    let err = validate_script(&script).unwrap_err();
    assert!(err.to_string().contains("negative duration"));
    // Unlabelled steps are reported by index.
    assert!(err.to_string().contains("step-0"));
    Ok(())
}

#[test]
fn rejects_a_print_step_without_a_message() -> TestResult {
    let script = parse(
        r#"
        [[step]]
        kind = "print"
        "#,
    )?;

    let err = validate_script(&script).unwrap_err();
    assert!(err.to_string().contains("message"));
    Ok(())
}

#[test]
fn rejects_mixed_up_per_kind_fields() -> TestResult {
    let script = parse(
        r#"
        [[step]]
        kind = "print"
        message = "hi"
        duration = 1.0
        "#,
    )?;

    let err = validate_script(&script).unwrap_err();
    assert!(err.to_string().contains("sets `duration`"));
    Ok(())
}

#[test]
fn loads_and_validates_from_disk() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"
        [script]
        name = "on-disk"

        [[step]]
        kind = "wait"
        duration = 0.1
        "#
    )?;

    let script = load_and_validate(file.path())?;
    assert_eq!(script.script.name, "on-disk");
    assert_eq!(script.step.len(), 1);
    Ok(())
}

#[test]
fn loading_a_missing_file_reports_the_path() -> TestResult {
    let err = load_and_validate("does-not-exist.toml").unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.toml"));
    Ok(())
}

#[test]
fn builds_a_task_tree_matching_the_script() -> TestResult {
    let script = parse(
        r#"
        [script]
        name = "demo"

        [[step]]
        kind = "wait"
        label = "pause"
        duration = 0.1

        [[step]]
        kind = "print"
        message = "hello"
        mode = "also"
        "#,
    )?;
    validate_script(&script)?;

    let root = build_root_task(&script);
    assert_eq!(root.label().as_deref(), Some("demo"));

    let queued = root.queued_tasks();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].label().as_deref(), Some("pause"));
    assert!(!queued[0].is_parallel());

    let parallel = root.parallel_tasks();
    assert_eq!(parallel.len(), 1);
    assert!(parallel[0].is_parallel());
    Ok(())
}

#[test]
fn a_built_tree_runs_to_completion_under_fixed_deltas() -> TestResult {
    let script = parse(
        r#"
        [[step]]
        kind = "wait"
        duration = 0.1

        [[step]]
        kind = "print"
        message = "hello"
        mode = "also"
        "#,
    )?;
    validate_script(&script)?;

    let root = build_root_task(&script);

    // Frame 1: root's own no-op action finishes, the parallel print runs.
    assert!(root.update(0.05));
    // Frame 2: wait at 0.05 < 0.1, still going.
    assert!(root.update(0.05));
    // Frame 3: wait reaches 0.1, everything drained.
    assert!(!root.update(0.05));
    Ok(())
}
