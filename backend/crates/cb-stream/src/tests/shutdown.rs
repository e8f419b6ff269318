use crate::{ShutdownCoordinator, ShutdownGuard};

use tokio::time::{Duration, timeout};

#[tokio::test]
async fn given_coordinator_when_shutdown_triggered_then_subscribers_notified() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();

    let coord_clone = coordinator.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        coord_clone.shutdown();
    });

    let result = timeout(Duration::from_millis(500), guard.wait()).await;
    assert!(result.is_ok(), "Shutdown signal should be received");
}

#[tokio::test]
async fn given_multiple_subscribers_when_shutdown_then_all_notified() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard1 = ShutdownGuard::new(&coordinator);
    let mut guard2 = ShutdownGuard::new(&coordinator);

    coordinator.shutdown();

    assert!(timeout(Duration::from_millis(50), guard1.wait()).await.is_ok());
    assert!(timeout(Duration::from_millis(50), guard2.wait()).await.is_ok());
}

#[test]
fn given_new_coordinator_when_polled_then_not_shutdown() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = ShutdownGuard::new(&coordinator);

    assert!(!guard.poll_shutdown());
}
