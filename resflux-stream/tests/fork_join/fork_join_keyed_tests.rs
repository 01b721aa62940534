// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use indexmap::IndexMap;
use resflux_stream::{source, Aggregate, ForkJoinResultExt, SourceCollection};
use resflux_test_utils::{assert_no_element_emitted, test_channel, unwrap_stream};
use std::collections::BTreeMap;

#[tokio::test]
async fn test_fork_join_result_keyed_ok() {
    // Arrange
    let mut sources = IndexMap::new();
    sources.insert("foo", source::ok::<_, &str>(1));
    sources.insert("bar", source::ok(2));

    // Act
    let mut joined = sources.fork_join_result();

    // Assert
    let values = joined.next().await.expect("one item").expect("success");
    assert_eq!(values.len(), 2);
    assert_eq!(values["foo"], 1);
    assert_eq!(values["bar"], 2);
    assert_eq!(joined.next().await, None);
}

#[tokio::test]
async fn test_fork_join_result_keyed_err() {
    // Arrange
    let mut sources = IndexMap::new();
    sources.insert("foo", source::from_result(Ok(1)));
    sources.insert("bar", source::from_result(Err("bar_err")));

    // Act
    let mut joined = sources.fork_join_result();

    // Assert
    assert_eq!(joined.next().await, Some(Err("bar_err")));
    assert_eq!(joined.next().await, None);
}

#[tokio::test]
async fn test_fork_join_result_keyed_preserves_key_order() -> anyhow::Result<()> {
    // Arrange
    let (zeta_tx, zeta) = test_channel::<u8, String>();
    let (alpha_tx, alpha) = test_channel::<u8, String>();
    let mut sources = IndexMap::new();
    sources.insert("zeta", zeta);
    sources.insert("alpha", alpha);
    let mut joined = sources.fork_join_result();

    // Act: resolve in the opposite order of insertion
    alpha_tx.send(Ok(1))?;
    assert_no_element_emitted(&mut joined, 50).await;
    zeta_tx.send(Ok(26))?;

    // Assert
    let values = unwrap_stream(&mut joined, 500).await.expect("success");
    assert_eq!(values.keys().copied().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    assert_eq!(values["zeta"], 26);
    assert_eq!(values["alpha"], 1);

    Ok(())
}

#[tokio::test]
async fn test_fork_join_result_empty_index_map() {
    let mut joined = IndexMap::<&str, source::Just<i32, String>>::new().fork_join_result();

    let values = joined.next().await.expect("one item").expect("success");
    assert!(values.is_empty());
    assert_eq!(joined.next().await, None);
}

#[tokio::test]
async fn test_fork_join_result_btree_map_sorts_keys() {
    // Arrange
    let mut sources = BTreeMap::new();
    sources.insert("zeta", source::ok::<_, String>('z'));
    sources.insert("alpha", source::ok('a'));

    // Act
    let mut joined = sources.fork_join_result();

    // Assert
    let values = joined.next().await.expect("one item").expect("success");
    assert_eq!(
        values.into_iter().collect::<Vec<_>>(),
        vec![("alpha", 'a'), ("zeta", 'z')]
    );
}

#[tokio::test]
async fn test_fork_join_result_source_collection_keeps_shape() {
    // Arrange
    let mut keyed = IndexMap::new();
    keyed.insert("foo", source::ok::<_, String>(1));
    keyed.insert("bar", source::ok(2));
    let indexed = vec![source::ok::<_, String>(3), source::ok(4)];

    // Act
    let keyed = SourceCollection::Keyed(keyed)
        .fork_join_result()
        .next()
        .await
        .expect("one item")
        .expect("success");
    let indexed = SourceCollection::<&str, _>::Indexed(indexed)
        .fork_join_result()
        .next()
        .await
        .expect("one item")
        .expect("success");

    // Assert
    assert_eq!(keyed.len(), 2);
    let keyed = keyed.into_keyed().expect("keyed aggregate");
    assert_eq!(keyed["foo"], 1);
    assert_eq!(keyed["bar"], 2);
    assert_eq!(indexed, Aggregate::Indexed(vec![3, 4]));
    assert_eq!(indexed.into_keyed(), None);
}

#[tokio::test]
async fn test_fork_join_result_empty_source_collection() {
    let keyed = SourceCollection::<&str, source::Just<i32, String>>::Keyed(IndexMap::new())
        .fork_join_result()
        .next()
        .await;
    let indexed = SourceCollection::<&str, source::Just<i32, String>>::Indexed(Vec::new())
        .fork_join_result()
        .next()
        .await;

    assert_eq!(keyed, Some(Ok(Aggregate::Keyed(IndexMap::new()))));
    assert_eq!(indexed, Some(Ok(Aggregate::Indexed(Vec::new()))));
}
