use futures::StreamExt;
use pearl::{
    chat::{thread_id, ChatWindow, LocalMessageStore, MessageStream},
    error::chat::ChatError,
    model::chat::ChatPartner,
    session::Identity,
};
use pearl_test_utils::prelude::*;

fn partner(id: i64, name: &str) -> ChatPartner {
    ChatPartner {
        id: id.to_string(),
        name: name.to_string(),
        details: None,
    }
}

#[tokio::test]
/// Expect a tourist and a guide to share one thread and see each other's messages in order
async fn tourist_and_guide_share_thread() {
    let store = LocalMessageStore::new();

    let mut tourist = ChatWindow::new(
        &Identity::from_token(Some(&token::tourist())),
        vec![partner(TEST_GUIDE_ID, "Nimal Perera")],
    )
    .unwrap();
    let mut guide = ChatWindow::new(
        &Identity::from_token(Some(&token::tour_guide())),
        vec![partner(TEST_TOURIST_ID, "Peter Maxwell")],
    )
    .unwrap();

    let thread = tourist.thread_id().unwrap();
    assert_eq!(Some(thread.clone()), guide.thread_id());
    assert_eq!(thread, thread_id("1", "7"));

    let mut tourist_feed = store.subscribe(&thread).unwrap();
    let mut guide_feed = store.subscribe(&thread).unwrap();

    let (participants, message) = tourist.compose("  Hello, are you free in June?  ").unwrap();
    store
        .send([participants[0].as_str(), participants[1].as_str()], message)
        .await
        .unwrap();
    let (participants, message) = guide.compose("Yes, from the 1st").unwrap();
    store
        .send([participants[0].as_str(), participants[1].as_str()], message)
        .await
        .unwrap();

    for _ in 0..2 {
        tourist.receive(tourist_feed.next().await.unwrap());
        guide.receive(guide_feed.next().await.unwrap());
    }

    assert_eq!(tourist.messages(), guide.messages());
    assert_eq!(tourist.messages()[0].text, "Hello, are you free in June?");
    assert_eq!(tourist.messages()[0].sender_name, "Peter Maxwell");
    assert!(tourist.is_own(&tourist.messages()[0]));
    assert!(!guide.is_own(&guide.messages()[0]));
    assert!(tourist.messages()[0].order_key() < tourist.messages()[1].order_key());

    let summary = store.thread(&thread).unwrap();
    assert_eq!(summary.last_message.as_deref(), Some("Yes, from the 1st"));
    assert_eq!(summary.participants.len(), 2);
}

#[tokio::test]
/// Expect a late subscriber to receive the thread history
async fn late_subscriber_gets_history() {
    let store = LocalMessageStore::new();
    let window = ChatWindow::new(
        &Identity::from_token(Some(&token::tourist())),
        vec![partner(TEST_GUIDE_ID, "Nimal Perera")],
    )
    .unwrap();

    for text in ["one", "two", "three"] {
        let (participants, message) = window.compose(text).unwrap();
        store
            .send([participants[0].as_str(), participants[1].as_str()], message)
            .await
            .unwrap();
    }

    let feed = store.subscribe(&window.thread_id().unwrap()).unwrap();
    let history: Vec<String> = feed.take(3).map(|m| m.text).collect().await;

    assert_eq!(history, vec!["one", "two", "three"]);
}

#[tokio::test]
/// Expect blank messages and anonymous users to be refused
async fn refuses_blank_and_anonymous() {
    let window = ChatWindow::new(
        &Identity::from_token(Some(&token::tourist())),
        vec![partner(TEST_GUIDE_ID, "Nimal Perera")],
    )
    .unwrap();

    assert_eq!(window.compose("   ").err(), Some(ChatError::BlankMessage));
    assert_eq!(
        ChatWindow::new(&Identity::Anonymous, vec![]).err(),
        Some(ChatError::NotSignedIn)
    );

    let empty = ChatWindow::new(&Identity::from_token(Some(&token::tourist())), vec![]).unwrap();
    assert_eq!(empty.compose("hi").err(), Some(ChatError::NoPartnerSelected));
}
