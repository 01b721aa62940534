// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, FusedStream, Stream, StreamExt};
use resflux_stream::{fork_join_result, source, ForkJoinResultExt};
use resflux_test_utils::{
    assert_no_element_emitted, assert_stream_ended, delayed_err, delayed_ok, test_channel,
    unwrap_stream,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counted(calls: Arc<AtomicUsize>, value: i32) -> impl Stream<Item = Result<i32, String>> + Unpin {
    source::deferred(move || {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(value)
    })
}

#[tokio::test]
async fn test_fork_join_result_indexed_ok() {
    // Arrange
    let sources = vec![source::ok::<_, &str>(1), source::ok(1)];

    // Act
    let mut joined = sources.fork_join_result();

    // Assert
    assert_eq!(joined.next().await, Some(Ok(vec![1, 1])));
    assert_eq!(joined.next().await, None);
}

#[tokio::test]
async fn test_fork_join_result_free_function_matches_method() {
    let mut joined = fork_join_result(vec![source::ok::<_, &str>("a"), source::ok("b")]);

    assert_eq!(joined.next().await, Some(Ok(vec!["a", "b"])));
}

#[tokio::test]
async fn test_fork_join_result_empty_vec_succeeds_immediately() {
    let mut joined = Vec::<source::Just<i32, String>>::new().fork_join_result();

    assert_eq!(joined.next().await, Some(Ok(vec![])));
    assert_eq!(joined.next().await, None);
}

#[tokio::test]
async fn test_fork_join_result_values_follow_declaration_order() -> anyhow::Result<()> {
    // Arrange
    let (first_tx, first) = test_channel::<&'static str, String>();
    let (second_tx, second) = test_channel::<&'static str, String>();
    let mut joined = vec![first, second].fork_join_result();

    // Act: the second source resolves first
    second_tx.send(Ok("second"))?;
    assert_no_element_emitted(&mut joined, 50).await;
    assert_eq!(joined.pending(), 1);

    first_tx.send(Ok("first"))?;

    // Assert
    assert_eq!(unwrap_stream(&mut joined, 500).await, Ok(vec!["first", "second"]));
    assert_stream_ended(&mut joined, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_fork_join_result_order_independent_with_timers() {
    // Arrange
    let sources = vec![
        delayed_ok::<_, String>(1, 60),
        delayed_ok(2, 10),
        delayed_ok(3, 30),
    ];

    // Act
    let mut joined = sources.fork_join_result();

    // Assert
    assert_eq!(unwrap_stream(&mut joined, 1000).await, Ok(vec![1, 2, 3]));
}

#[tokio::test]
async fn test_fork_join_result_failure_after_partial_success() -> anyhow::Result<()> {
    // Arrange
    let (first_tx, first) = test_channel::<i32, String>();
    let (second_tx, second) = test_channel::<i32, String>();
    let mut joined = vec![first, second].fork_join_result();

    // Act
    first_tx.send(Ok(1))?;
    assert_no_element_emitted(&mut joined, 50).await;
    second_tx.send(Err("second failed".to_string()))?;

    // Assert
    assert_eq!(
        unwrap_stream(&mut joined, 500).await,
        Err("second failed".to_string())
    );
    assert_stream_ended(&mut joined, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_fork_join_result_earliest_failure_in_time_wins() {
    // Arrange
    let sources = vec![
        delayed_err::<i32, _>("slow", 80),
        delayed_err("fast", 10),
    ];

    // Act
    let mut joined = sources.fork_join_result();

    // Assert
    assert_eq!(unwrap_stream(&mut joined, 1000).await, Err("fast"));
}

#[tokio::test]
async fn test_fork_join_result_simultaneous_failures_pick_declaration_order() {
    // Arrange
    let sources = vec![
        source::ok::<i32, _>(1),
        source::err("first"),
        source::err("second"),
    ];

    // Act
    let mut joined = sources.fork_join_result();

    // Assert
    assert_eq!(joined.next().await, Some(Err("first")));
    assert_eq!(joined.next().await, None);
}

#[tokio::test]
async fn test_fork_join_result_takes_first_item_of_each_source() {
    // Arrange
    let sources = vec![
        stream::iter(vec![Ok(1), Ok(2), Err("late")]),
        stream::iter(vec![Ok(3)]),
    ];

    // Act
    let mut joined = sources.fork_join_result();

    // Assert
    assert_eq!(joined.next().await, Some(Ok(vec![1, 3])));
    assert_eq!(joined.next().await, None);
}

#[tokio::test]
async fn test_fork_join_result_source_ending_empty_ends_without_emitting() {
    // Arrange
    let sources = vec![stream::iter(vec![Ok::<i32, String>(1)]), stream::iter(vec![])];

    // Act
    let mut joined = sources.fork_join_result();

    // Assert
    assert_eq!(joined.next().await, None);
    assert!(joined.is_terminated());
}

#[tokio::test]
async fn test_fork_join_result_is_fused_after_emission() {
    let mut joined = vec![source::ok::<_, String>(1)].fork_join_result();

    assert!(!joined.is_terminated());
    assert_eq!(joined.size_hint(), (0, Some(1)));

    assert_eq!(joined.next().await, Some(Ok(vec![1])));

    assert!(joined.is_terminated());
    assert_eq!(joined.size_hint(), (0, Some(0)));
    assert_eq!(joined.next().await, None);
    assert_eq!(joined.next().await, None);
}

#[tokio::test]
async fn test_fork_join_result_each_join_runs_its_sources_again() {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let build = || {
        vec![
            counted(Arc::clone(&calls), 1),
            counted(Arc::clone(&calls), 2),
        ]
        .fork_join_result()
    };
    let mut first = build();
    let mut second = build();

    // Assert: nothing runs before the joins are polled
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // Act
    let first_result = first.next().await;
    let second_result = second.next().await;

    // Assert
    assert_eq!(first_result, Some(Ok(vec![1, 2])));
    assert_eq!(second_result, Some(Ok(vec![1, 2])));
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}
