// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use resflux_stream::ForkJoinResultExt;
use resflux_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel, unwrap_stream, Probe,
};

#[tokio::test]
async fn test_fork_join_result_is_lazy_until_polled() {
    // Arrange
    let probes = [Probe::new(), Probe::new()];
    let (_tx_a, a) = test_channel::<i32, String>();
    let (_tx_b, b) = test_channel::<i32, String>();

    // Act
    let mut joined = vec![probes[0].wrap(a), probes[1].wrap(b)].fork_join_result();

    // Assert: building the join subscribes to nothing
    assert!(probes.iter().all(|p| !p.was_polled()));

    assert_no_element_emitted(&mut joined, 20).await;
    assert!(probes.iter().all(Probe::was_polled));
}

#[tokio::test]
async fn test_fork_join_result_releases_resolved_source_immediately() -> anyhow::Result<()> {
    // Arrange
    let resolved = Probe::new();
    let waiting = Probe::new();
    let (tx_a, a) = test_channel::<i32, String>();
    let (_tx_b, b) = test_channel::<i32, String>();
    let mut joined = vec![resolved.wrap(a), waiting.wrap(b)].fork_join_result();

    // Act
    tx_a.send(Ok(1))?;
    assert_no_element_emitted(&mut joined, 50).await;

    // Assert
    assert!(resolved.is_dropped());
    assert!(!waiting.is_dropped());
    assert!(tx_a.send(Ok(2)).is_err());
    assert_eq!(joined.pending(), 1);

    Ok(())
}

#[tokio::test]
async fn test_fork_join_result_failure_drops_pending_siblings() -> anyhow::Result<()> {
    // Arrange
    let sibling = Probe::new();
    let failing = Probe::new();
    let (tx_a, a) = test_channel::<i32, String>();
    let (tx_b, b) = test_channel::<i32, String>();
    let mut joined = vec![sibling.wrap(a), failing.wrap(b)].fork_join_result();
    assert_no_element_emitted(&mut joined, 20).await;

    // Act
    tx_b.send(Err("b failed".to_string()))?;

    // Assert
    assert_eq!(unwrap_stream(&mut joined, 500).await, Err("b failed".to_string()));
    assert!(sibling.is_dropped());
    assert!(failing.is_dropped());

    // Late results have nowhere to go
    assert!(tx_a.send(Ok(1)).is_err());
    assert_eq!(sibling.items(), 0);
    assert_stream_ended(&mut joined, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_fork_join_result_sources_after_failure_are_never_polled() -> anyhow::Result<()> {
    // Arrange
    let probes = [Probe::new(), Probe::new(), Probe::new()];
    let (_tx_a, a) = test_channel::<i32, String>();
    let (tx_b, b) = test_channel::<i32, String>();
    let (tx_c, c) = test_channel::<i32, String>();
    tx_b.send(Err("b failed".to_string()))?;
    tx_c.send(Err("c failed".to_string()))?;
    let mut joined = vec![probes[0].wrap(a), probes[1].wrap(b), probes[2].wrap(c)].fork_join_result();

    // Act
    let result = unwrap_stream(&mut joined, 500).await;

    // Assert
    assert_eq!(result, Err("b failed".to_string()));
    assert!(probes[0].was_polled());
    assert!(probes[1].was_polled());
    assert!(!probes[2].was_polled());
    assert!(probes.iter().all(Probe::is_dropped));

    Ok(())
}

#[tokio::test]
async fn test_fork_join_result_drop_releases_every_source() {
    // Arrange
    let probes = [Probe::new(), Probe::new()];
    let (_tx_a, a) = test_channel::<i32, String>();
    let (_tx_b, b) = test_channel::<i32, String>();
    let mut joined = (probes[0].wrap(a), probes[1].wrap(b)).fork_join_result();
    assert_no_element_emitted(&mut joined, 20).await;

    // Act
    drop(joined);

    // Assert
    assert!(probes.iter().all(Probe::is_dropped));
}

#[tokio::test]
async fn test_fork_join_result_tuple_failure_drops_pending_siblings() -> anyhow::Result<()> {
    // Arrange
    let sibling = Probe::new();
    let (tx_a, a) = test_channel::<String, String>();
    let (tx_b, b) = test_channel::<u64, String>();
    let mut joined = (sibling.wrap(a), b).fork_join_result();

    // Act
    tx_b.send(Err("b failed".to_string()))?;

    // Assert
    assert_eq!(unwrap_stream(&mut joined, 500).await, Err("b failed".to_string()));
    assert!(sibling.is_dropped());
    assert!(tx_a.send(Ok("late".to_string())).is_err());

    Ok(())
}
