use crate::*;
use swiftfs::command::Command;
use swiftfs::error::{Error, ErrorKind, Result};

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_remove_empty_directory,
        test_remove_single_key,
        test_remove_nested_tree,
        test_remove_uses_raw_prefix,
        test_remove_partial_failure,
        test_remove_command_partial_failure,
        test_remove_refuses_root,
    ));
}

async fn test_remove_empty_directory() -> Result<()> {
    let adapter = MemoryAdapter::with_objects(&[("other/a", 1)]);
    let client = memory_client(&adapter);

    let removed = client.remove_directory("logs").await?;

    assert_eq!(removed, 0);
    assert_eq!(adapter.keys(), vec!["other/a"]);
    Ok(())
}

async fn test_remove_single_key() -> Result<()> {
    let adapter = MemoryAdapter::new();
    adapter.insert("logs", Vec::new(), Some("application/directory"));
    let client = memory_client(&adapter);

    let removed = client.remove_directory("logs").await?;

    assert_eq!(removed, 1);
    assert!(adapter.keys().is_empty());
    Ok(())
}

async fn test_remove_nested_tree() -> Result<()> {
    let adapter = MemoryAdapter::with_objects(&[
        ("logs/a", 1),
        ("logs/b/c", 2),
        ("logs/b/d/e", 3),
        ("keep/me", 4),
    ]);
    adapter.insert("logs", Vec::new(), Some("application/directory"));
    let client = memory_client(&adapter);

    let removed = client.remove_directory("logs").await?;

    assert_eq!(removed, 4);
    assert_eq!(adapter.keys(), vec!["keep/me"]);
    assert!(adapter.keys().iter().all(|key| !key.starts_with("logs")));
    Ok(())
}

async fn test_remove_uses_raw_prefix() -> Result<()> {
    let adapter = MemoryAdapter::with_objects(&[("logs/a", 1), ("logs-old/b", 1), ("blog", 1)]);
    let client = memory_client(&adapter);

    client.remove_directory("/logs").await?;

    assert_eq!(adapter.keys(), vec!["blog"]);
    Ok(())
}

async fn test_remove_partial_failure() -> Result<()> {
    let keys = ["logs/1", "logs/2", "logs/3", "logs/4", "logs/5"];
    let adapter = MemoryAdapter::with_objects(&keys.map(|key| (key, 1)));
    adapter.fail_delete_at(3);
    let client = memory_client(&adapter);

    let err = client
        .remove_directory("logs/")
        .await
        .expect_err("third delete fails");

    match &err {
        Error::RemoveDirectoryFailed { key, removed, .. } => {
            assert_eq!(key, "logs/3");
            assert_eq!(*removed, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.kind(), ErrorKind::Backend);
    assert_eq!(adapter.keys(), vec!["logs/3", "logs/4", "logs/5"]);

    let deletes: Vec<String> = adapter
        .calls()
        .into_iter()
        .filter(|call| call.starts_with("delete"))
        .collect();
    assert_eq!(
        deletes,
        vec!["delete logs/1", "delete logs/2", "delete logs/3"],
        "no delete is attempted after the failure"
    );
    Ok(())
}

async fn test_remove_command_partial_failure() -> Result<()> {
    let adapter = MemoryAdapter::with_objects(&[("logs/a", 1), ("logs/b", 1), ("logs/c", 1)]);
    adapter.fail_delete_at(2);
    let client = memory_client(&adapter);

    let err = Command::parse("rmdir", &args(&["logs"]))?
        .execute(&client, &mut Vec::new())
        .await
        .expect_err("rmdir reports the failing delete");

    assert_eq!(err.kind(), ErrorKind::Backend);
    assert!(err.to_string().contains("injected delete failure"));
    assert!(!adapter.contains("logs/a"));
    assert!(adapter.contains("logs/b"));
    assert!(adapter.contains("logs/c"));
    Ok(())
}

async fn test_remove_refuses_root() -> Result<()> {
    let adapter = MemoryAdapter::with_objects(&[("a", 1), ("b/c", 1)]);
    let client = memory_client(&adapter);

    for path in ["", "/", "//"] {
        let err = client
            .remove_directory(path)
            .await
            .expect_err("root removal is refused");
        assert!(err.is_usage());
    }
    assert_eq!(adapter.keys().len(), 2);
    assert!(adapter.calls().is_empty());
    Ok(())
}
