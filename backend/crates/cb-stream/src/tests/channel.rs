use crate::tests::{decode_frame, event};
use crate::ChannelRegistry;

use futures::StreamExt;
use googletest::prelude::*;
use serde_json::json;
use tokio::time::{Duration, sleep};

#[tokio::test]
async fn given_channel_when_polled_as_stream_then_yields_frames() {
    let registry = ChannelRegistry::default();
    let mut channel = registry.subscribe().await.unwrap();

    registry.publish(&event("streamed")).await.unwrap();

    let frame = channel.next().await.unwrap();
    assert_that!(decode_frame(&frame)["message"], eq(&json!("streamed")));
}

#[tokio::test]
async fn given_channel_when_dropped_then_only_that_channel_leaves_registry() {
    let registry = ChannelRegistry::default();
    let keep = registry.subscribe().await.unwrap();
    let gone = registry.subscribe().await.unwrap();
    let gone_id = gone.id();

    drop(gone);
    for _ in 0..50 {
        if !registry.contains(gone_id).await {
            break;
        }
        sleep(Duration::from_millis(5)).await;
    }

    assert!(!registry.contains(gone_id).await);
    assert!(registry.contains(keep.id()).await);
    assert_that!(registry.count().await, eq(1));
}

#[test]
fn given_frame_when_encoded_then_sse_data_line() {
    let frame = crate::encode_frame(&event("hi")).unwrap();

    assert_eq!(&frame[..], b"data: {\"message\":\"hi\"}\n\n");
}
