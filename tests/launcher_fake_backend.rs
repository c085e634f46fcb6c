// tests/launcher_fake_backend.rs

use std::error::Error;
use std::ffi::OsString;

use autolaunch::config::DEFAULT_FINISHED_MESSAGE;
use autolaunch::errors::LaunchError;
use autolaunch::launcher::Launcher;
use autolaunch_test_utils::builders::ConfigFileBuilder;
use autolaunch_test_utils::fake_backend::{FakeBackend, FakeBehaviour};
use autolaunch_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn finished_line() -> Vec<u8> {
    format!("{DEFAULT_FINISHED_MESSAGE}\n").into_bytes()
}

#[tokio::test]
async fn successful_child_prints_message_once_and_consumes_one_line() -> TestResult {
    init_tracing();

    let backend = FakeBackend::new(FakeBehaviour::Exit(0));
    let requests = backend.requests();
    let plan = ConfigFileBuilder::new()
        .interpreter("/usr/bin/python3")
        .inline_credential("abc123")
        .build_plan();
    let mut launcher = Launcher::new(backend, plan);

    let mut out = Vec::new();
    let mut input: &[u8] = b"\nnext line\n";
    let outcome = with_timeout(launcher.run(&mut out, &mut input)).await?;

    assert!(outcome.success);
    assert_eq!(out, finished_line());
    assert_eq!(input, b"next line\n");

    let recorded = requests.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].program.to_str(), Some("/usr/bin/python3"));
    assert_eq!(recorded[0].args, vec![OsString::from("product_automator.py")]);
    assert_eq!(recorded[0].credential.name(), "GEMINI_API_KEY");
    assert_eq!(recorded[0].credential.expose_value(), "abc123");
    Ok(())
}

#[tokio::test]
async fn failing_child_still_gets_completion_message() -> TestResult {
    init_tracing();

    let plan = ConfigFileBuilder::new().build_plan();
    let mut launcher = Launcher::new(FakeBackend::new(FakeBehaviour::Exit(2)), plan);

    let mut out = Vec::new();
    let mut input: &[u8] = b"\n";
    let outcome = with_timeout(launcher.run(&mut out, &mut input)).await?;

    assert!(!outcome.success);
    assert_eq!(outcome.exit_code, Some(2));
    assert_eq!(out, finished_line());
    assert!(input.is_empty());
    Ok(())
}

#[tokio::test]
async fn spawn_failure_skips_message_and_pause() -> TestResult {
    init_tracing();

    let plan = ConfigFileBuilder::new()
        .interpreter("/nonexistent/python3")
        .build_plan();
    let mut launcher = Launcher::new(FakeBackend::new(FakeBehaviour::SpawnFails), plan);

    let mut out = Vec::new();
    let mut input: &[u8] = b"untouched\n";
    let err = with_timeout(launcher.run(&mut out, &mut input))
        .await
        .unwrap_err();

    match err {
        LaunchError::ExecutionError { program, .. } => {
            assert_eq!(program, "/nonexistent/python3");
        }
        other => panic!("Expected ExecutionError, got: {other:?}"),
    }
    assert!(out.is_empty());
    assert_eq!(input, b"untouched\n");
    Ok(())
}

#[tokio::test]
async fn no_pause_leaves_stdin_alone() -> TestResult {
    init_tracing();

    let plan = ConfigFileBuilder::new()
        .pause(false)
        .finished_message("Finished.")
        .build_plan();
    let mut launcher = Launcher::new(FakeBackend::new(FakeBehaviour::Exit(0)), plan);

    let mut out = Vec::new();
    let mut input: &[u8] = b"keep\n";
    with_timeout(launcher.run(&mut out, &mut input)).await?;

    assert_eq!(out, b"Finished.\n");
    assert_eq!(input, b"keep\n");
    Ok(())
}

#[tokio::test]
async fn eof_on_stdin_is_not_an_error() -> TestResult {
    init_tracing();

    let plan = ConfigFileBuilder::new().build_plan();
    let mut launcher = Launcher::new(FakeBackend::new(FakeBehaviour::Exit(0)), plan);

    let mut out = Vec::new();
    let mut input: &[u8] = b"";
    let outcome = with_timeout(launcher.run(&mut out, &mut input)).await?;

    assert!(outcome.success);
    assert_eq!(out, finished_line());
    Ok(())
}

#[tokio::test]
async fn credential_name_is_configurable() -> TestResult {
    init_tracing();

    let backend = FakeBackend::new(FakeBehaviour::Exit(0));
    let requests = backend.requests();
    let plan = ConfigFileBuilder::new()
        .credential_name("OPENAI_API_KEY")
        .inline_credential("sk-test")
        .pause(false)
        .build_plan();
    let mut launcher = Launcher::new(backend, plan);

    let mut out = Vec::new();
    let mut input: &[u8] = b"";
    with_timeout(launcher.run(&mut out, &mut input)).await?;

    let recorded = requests.lock().unwrap();
    assert_eq!(recorded[0].credential.name(), "OPENAI_API_KEY");
    assert_eq!(recorded[0].credential.expose_value(), "sk-test");
    Ok(())
}
