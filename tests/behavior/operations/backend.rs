use crate::*;
use futures::TryStreamExt;
use opendal::Operator;
use opendal::services::Memory;
use swiftfs::error::{ErrorKind, Result};
use swiftfs::storage::{OpenDalAdapter, StorageAdapter, StorageClient};
use tempfile::TempDir;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_opendal_put_get_head,
        test_opendal_missing_key,
        test_opendal_list_is_flat,
        test_opendal_delete,
        test_opendal_client_delete_missing,
        test_opendal_client_round_trip,
    ));
}

fn memory_adapter() -> Result<OpenDalAdapter> {
    Ok(OpenDalAdapter::new(Operator::new(Memory::default())?.finish()))
}

async fn test_opendal_put_get_head() -> Result<()> {
    let adapter = memory_adapter()?;
    let key = Fixture::new_key();
    let content = Fixture::new_content(1..100 * 1024);

    adapter.put(&key, content.as_slice(), None).await?;

    let head = adapter.head(&key).await?;
    assert_eq!(head.key, key);
    assert_eq!(head.size, content.len() as u64);

    let (entry, body) = adapter.get(&key).await?;
    assert_eq!(entry.size, content.len() as u64);
    assert_eq!(body, content);
    Ok(())
}

async fn test_opendal_missing_key() -> Result<()> {
    let adapter = memory_adapter()?;

    let err = adapter.head("absent").await.expect_err("head of missing key");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = adapter.get("absent").await.expect_err("get of missing key");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

async fn test_opendal_list_is_flat() -> Result<()> {
    let adapter = memory_adapter()?;
    let dir = Fixture::new_dir_path();
    let shallow = format!("{dir}a.txt");
    let deep = format!("{dir}sub/b.txt");
    for key in [&shallow, &deep] {
        adapter.put(key, &b"data"[..], None).await?;
    }

    let keys: Vec<String> = adapter
        .list(Some(dir.as_str()))
        .await?
        .into_iter()
        .map(|entry| entry.key)
        .collect();

    assert!(keys.contains(&shallow), "{keys:?}");
    assert!(keys.contains(&deep), "listing reaches every depth: {keys:?}");
    Ok(())
}

async fn test_opendal_delete() -> Result<()> {
    let adapter = memory_adapter()?;
    let key = Fixture::new_key();
    adapter.put(&key, &b"x"[..], None).await?;

    adapter.delete(&key).await?;

    let err = adapter.head(&key).await.expect_err("deleted");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

async fn test_opendal_client_delete_missing() -> Result<()> {
    let adapter = memory_adapter()?;
    let client = StorageClient::new(adapter.clone(), TEST_CONTAINER);
    let key = Fixture::new_key();

    // The operator alone accepts this; the client must not.
    adapter.delete(&key).await?;
    let err = client.delete_object(&key).await.expect_err("missing key");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    adapter.put(&key, &b"x"[..], None).await?;
    client.delete_object(&key).await?;
    let err = adapter.head(&key).await.expect_err("deleted");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

/// Upload, list, download and rmdir through the client. Listing metadata is
/// not checked here: the memory service reports partial lister metadata.
async fn test_opendal_client_round_trip() -> Result<()> {
    let local = TempDir::new()?;
    let source = local.path().join("site.tar");
    let content = Fixture::new_content(1..16 * 1024);
    std::fs::write(&source, &content)?;

    let adapter = memory_adapter()?;
    let client = StorageClient::new(adapter.clone(), TEST_CONTAINER)
        .with_upload_schedule(TEST_SCHEDULE);
    let dir = Fixture::new_dir_path();
    let remote = format!("{dir}site.tar");
    let mut out = Vec::new();
    let mut progress = swiftfs::storage::ConsoleProgressReporter::new(&mut out);

    client.upload_file(&source, &remote, &mut progress).await?;
    assert!(String::from_utf8_lossy(&out).starts_with("Uploading"));

    let entries = client.list_directory(Some(dir.as_str())).await?;
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["site.tar"]);

    let target = local.path().join("restored.tar");
    client.download_file(&remote, &target).await?;
    assert_eq!(std::fs::read(&target)?, content);

    client.remove_directory(&dir).await?;
    let remaining = adapter
        .operator()
        .lister_with(&dir)
        .recursive(true)
        .await?
        .try_collect::<Vec<_>>()
        .await?;
    assert!(
        remaining.iter().all(|entry| entry.metadata().mode().is_dir()),
        "only directory placeholders may remain: {:?}",
        remaining.iter().map(|e| e.path().to_string()).collect::<Vec<_>>()
    );
    Ok(())
}
