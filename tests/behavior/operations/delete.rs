use crate::*;
use swiftfs::command::Command;
use swiftfs::error::{ErrorKind, Result};

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_delete_single_object,
        test_delete_is_exact,
        test_delete_missing_object,
        test_delete_missing_object_via_command,
    ));
}

async fn test_delete_single_object() -> Result<()> {
    let adapter = MemoryAdapter::with_objects(&[("a.txt", 1), ("b.txt", 1)]);
    let client = memory_client(&adapter);

    Command::parse("delete", &args(&["a.txt"]))?
        .execute(&client, &mut Vec::new())
        .await?;

    assert_eq!(adapter.keys(), vec!["b.txt"]);
    assert_eq!(adapter.calls(), vec!["head a.txt", "delete a.txt"]);
    Ok(())
}

async fn test_delete_is_exact() -> Result<()> {
    let adapter = MemoryAdapter::with_objects(&[("logs", 0), ("logs/a", 1)]);
    let client = memory_client(&adapter);

    client.delete_object("logs").await?;

    assert_eq!(adapter.keys(), vec!["logs/a"], "delete never expands a prefix");
    Ok(())
}

async fn test_delete_missing_object() -> Result<()> {
    let adapter = MemoryAdapter::new();
    let client = memory_client(&adapter);

    let err = client
        .delete_object("never-existed")
        .await
        .expect_err("delete of a missing key");

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(
        err.to_string()
            .starts_with("Failed to delete the object 'never-existed'"),
        "{err}"
    );
    assert_eq!(adapter.calls(), vec!["head never-existed"]);
    Ok(())
}

async fn test_delete_missing_object_via_command() -> Result<()> {
    let adapter = MemoryAdapter::with_objects(&[("kept.txt", 3)]);
    let client = memory_client(&adapter);
    let mut out = Vec::new();

    let err = Command::parse("delete", &args(&["gone.txt"]))?
        .execute(&client, &mut out)
        .await
        .expect_err("missing key");

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!err.is_usage());
    assert!(out.is_empty());
    assert_eq!(adapter.keys(), vec!["kept.txt"]);
    Ok(())
}
