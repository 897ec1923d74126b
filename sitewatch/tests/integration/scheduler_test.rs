//! Integration Test: 定期チェック
//!
//! バックグラウンドループが一定間隔で再チェックし、停止要求で終了すること

use crate::support::{mock_site, site_of};
use sitewatch::health::{startup::run_startup_check, SiteChecker};
use sitewatch::registry::AvailabilityStore;
use std::time::{Duration, Instant};

async fn received(server: &wiremock::MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}

#[tokio::test]
async fn test_periodic_cycles_after_startup_check() {
    let server = mock_site(200, Duration::ZERO).await;
    let site = site_of(&server);
    let availability = AvailabilityStore::new();
    let checker = SiteChecker::new(vec![site.clone()], availability.clone(), Duration::from_secs(1))
        .unwrap()
        .with_interval(Duration::from_millis(50));

    run_startup_check(&checker).await;
    assert!(availability.get(&site).await.unwrap().is_available());
    assert_eq!(received(&server).await, 1);

    let handle = checker.start();

    let deadline = tokio::time::Instant::now() + Duration::from_secs(3);
    while received(&server).await < 3 {
        assert!(
            tokio::time::Instant::now() < deadline,
            "periodic checks did not run"
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    tokio::time::timeout(Duration::from_secs(2), handle.stop())
        .await
        .expect("checker did not stop");

    // 停止後はチェックが走らない
    tokio::time::sleep(Duration::from_millis(50)).await;
    let after_stop = received(&server).await;
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(received(&server).await, after_stop);
}

#[tokio::test]
async fn test_first_periodic_cycle_waits_one_interval() {
    let server = mock_site(200, Duration::ZERO).await;
    let site = site_of(&server);
    let checker = SiteChecker::new(vec![site], AvailabilityStore::new(), Duration::from_secs(1))
        .unwrap()
        .with_interval(Duration::from_secs(3600));

    let handle = checker.start();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(received(&server).await, 0);
    assert!(!handle.is_finished());

    handle.stop().await;
}

#[tokio::test]
async fn test_cancellation_token_stops_loop() {
    let checker = SiteChecker::new(vec![], AvailabilityStore::new(), Duration::from_secs(1))
        .unwrap()
        .with_interval(Duration::from_millis(10));

    let handle = checker.start();
    handle.cancellation_token().cancel();

    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !handle.is_finished() {
        assert!(tokio::time::Instant::now() < deadline, "loop kept running");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn test_stop_abandons_in_flight_cycle() {
    let server = mock_site(200, Duration::from_millis(1500)).await;
    let site = site_of(&server);
    let availability = AvailabilityStore::new();
    let checker = SiteChecker::new(vec![site.clone()], availability.clone(), Duration::from_secs(5))
        .unwrap()
        .with_interval(Duration::from_millis(50));

    let handle = checker.start();
    // 最初のサイクルがレスポンス待ちになるまで待つ
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(received(&server).await, 1);

    let started = Instant::now();
    handle.stop().await;
    let elapsed = started.elapsed();
    assert!(elapsed < Duration::from_millis(500), "stop took {:?}", elapsed);

    // 破棄されたサイクルの結果は記録されない
    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert_eq!(availability.get(&site).await, None);
}
