use super::*;
use crate::service::gateway::SendOutcome;

/// Tests sending to a resolved channel.
///
/// Expected: Delivered with exactly one message recorded for that channel
#[tokio::test]
async fn delivers_to_resolved_channel() {
    let channel_id = ChannelId::new(101);
    let sink = Arc::new(RecordingSink::with_channels(&[channel_id]));
    let gateway = gateway_over(&sink);

    let channel = gateway.resolve(channel_id).await;
    let outcome = gateway.send(channel.as_ref(), "hello").await;

    assert_eq!(outcome, SendOutcome::Delivered);
    assert_eq!(sink.sent(), vec![(channel_id, "hello".to_string())]);
}

/// Tests sending to an absent channel handle.
///
/// Expected: ChannelNotFound and zero outbound messages
#[tokio::test]
async fn absent_channel_is_not_found() {
    let sink = Arc::new(RecordingSink::default());
    let gateway = gateway_over(&sink);

    let outcome = gateway.send(None, "hello").await;

    assert_eq!(outcome, SendOutcome::ChannelNotFound);
    assert!(sink.sent().is_empty());
}

/// Tests resolving and sending to an unknown channel ID.
///
/// Expected: ChannelNotFound and zero outbound messages
#[tokio::test]
async fn send_to_unknown_channel_is_not_found() {
    let sink = Arc::new(RecordingSink::with_channels(&[ChannelId::new(101)]));
    let gateway = gateway_over(&sink);

    let outcome = gateway.send_to(ChannelId::new(555), "hello").await;

    assert_eq!(outcome, SendOutcome::ChannelNotFound);
    assert!(sink.sent().is_empty());
}

/// Tests a delivery rejected by Discord.
///
/// Expected: DeliveryFailed returned instead of an error
#[tokio::test]
async fn delivery_failure_is_swallowed() {
    let channel_id = ChannelId::new(101);
    let sink = Arc::new(RecordingSink::with_channels(&[channel_id]).failing());
    let gateway = gateway_over(&sink);

    let outcome = gateway.send_to(channel_id, "hello").await;

    assert_eq!(outcome, SendOutcome::DeliveryFailed);
    assert!(sink.sent().is_empty());
}
