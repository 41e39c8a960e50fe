use std::{sync::Arc, time::Duration};

use faker_server::Config;
use idl_editor::{ClientError, EditorSession, EditorState, HttpIdlClient, IdlClient, SchemaName, SAVED_STATUS};
use idl_store::InMemoryIdlStore;
use indoc::indoc;
use schema_composer::Composer;
use tokio::net::TcpListener;
use url::Url;

const HELLO: &str = "type Query { hello: String }";

async fn spawn_server(config: Config) -> Url {
    let store = Arc::new(InMemoryIdlStore::default().with_document(SchemaName::default_slot(), HELLO));
    let router = faker_server::router(&config, store).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    format!("http://{address}").parse().unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_and_persist() {
    let client = HttpIdlClient::new(spawn_server(Config::default()).await);

    let idl = client.fetch(&SchemaName::default_slot()).await.unwrap();
    assert_eq!(idl.schema_idl, HELLO);
    assert_eq!(idl.extension_idl, None);
    assert_eq!(idl.edit_mode, None);

    let pets: SchemaName = "pets".parse().unwrap();
    client.persist(&pets, "type Query { pets: [String] }").await.unwrap();

    let idl = client.fetch(&pets).await.unwrap();
    assert_eq!(idl.schema_idl, "type Query { pets: [String] }");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_schemas() {
    let client = HttpIdlClient::new(spawn_server(Config::default()).await);

    let error = client.fetch(&"unknown-schema".parse().unwrap()).await.unwrap_err();

    assert!(matches!(error, ClientError::NotFound(_)));
    assert_eq!(error.to_string(), "Schema \"unknown-schema\" not found...");
}

#[tokio::test(flavor = "multi_thread")]
async fn read_only_server() {
    let client = HttpIdlClient::new(
        spawn_server(Config {
            edit_mode: false,
            ..Config::default()
        })
        .await,
    );

    let idl = client.fetch(&SchemaName::default_slot()).await.unwrap();
    assert_eq!(idl.edit_mode, Some(false));

    let error = client.persist(&SchemaName::default_slot(), HELLO).await.unwrap_err();
    assert_eq!(error.to_string(), "Schema not editable. ENABLE_EDIT_MODE is false");
}

#[tokio::test(flavor = "multi_thread")]
async fn a_session_against_the_server() {
    let base_url = spawn_server(Config::default()).await;
    let client = Arc::new(HttpIdlClient::new(base_url.clone()));
    let session = EditorSession::start(client.clone(), Composer::default(), "missing".parse().unwrap());
    let states = session.subscribe();

    let wait = |states: &tokio::sync::watch::Receiver<EditorState>, condition: fn(&EditorState) -> bool| {
        let mut states = states.clone();
        async move {
            let state = tokio::time::timeout(Duration::from_secs(10), states.wait_for(condition))
                .await
                .unwrap()
                .unwrap()
                .clone();

            state
        }
    };

    let state = wait(&states, EditorState::is_loaded).await;
    assert!(state.schema_name().is_default());
    assert_eq!(state.value(), HELLO);

    let edited = indoc! {"
        type Query {
          hello: String
          count: Int @fake(type: number, options: { minNumber: 3, maxNumber: 3 })
        }
    "};

    session.edit(edited);
    session.save();
    let state = wait(&states, |state| state.status() == Some(SAVED_STATUS)).await;
    assert!(!state.is_dirty());

    assert_eq!(client.fetch(&SchemaName::default_slot()).await.unwrap().schema_idl, edited);

    let response: serde_json::Value = reqwest::Client::new()
        .post(base_url.join("graphql").unwrap())
        .json(&serde_json::json!({ "query": "{ count }" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response, serde_json::json!({ "data": { "count": 3 } }));
}
