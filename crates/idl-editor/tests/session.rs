use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use idl_editor::{
    ClientError, EditorSession, EditorState, IdlClient, SchemaName, UserIdl, View, SAVED_STATUS, STATUS_DELAY,
};
use schema_composer::Composer;
use tokio::sync::{watch, Semaphore};

const VALID: &str = "type Query { hello: String }";
const EDITED: &str = "type Query { hello: String world: Int }";
const NEWER: &str = "type Query { hello: String world: Int again: Boolean }";

/// Documents in memory. Saves wait for a permit when gated.
#[derive(Default)]
struct FakeClient {
    documents: Mutex<HashMap<SchemaName, String>>,
    persisted: Mutex<Vec<(SchemaName, String)>>,
    reject_with: Option<String>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeClient {
    fn with_document(self, name: SchemaName, idl: &str) -> Self {
        self.documents.lock().unwrap().insert(name, idl.to_owned());
        self
    }

    fn persisted(&self) -> Vec<(SchemaName, String)> {
        self.persisted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IdlClient for FakeClient {
    async fn fetch(&self, name: &SchemaName) -> Result<UserIdl, ClientError> {
        let documents = self.documents.lock().unwrap();

        documents
            .get(name)
            .map(|idl| UserIdl {
                schema_idl: idl.clone(),
                ..Default::default()
            })
            .ok_or_else(|| ClientError::NotFound(format!("Schema \"{name}\" not found...")))
    }

    async fn persist(&self, name: &SchemaName, idl: &str) -> Result<(), ClientError> {
        self.persisted.lock().unwrap().push((name.clone(), idl.to_owned()));

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        if let Some(message) = &self.reject_with {
            return Err(ClientError::Rejected(message.clone()));
        }

        self.documents.lock().unwrap().insert(name.clone(), idl.to_owned());
        Ok(())
    }
}

async fn until(states: &mut watch::Receiver<EditorState>, condition: impl FnMut(&EditorState) -> bool) -> EditorState {
    let state = tokio::time::timeout(Duration::from_secs(10), states.wait_for(condition))
        .await
        .expect("state never reached")
        .unwrap()
        .clone();

    state
}

fn start(client: Arc<FakeClient>, name: &str) -> (EditorSession, watch::Receiver<EditorState>) {
    let session = EditorSession::start(client, Composer::default(), name.parse().unwrap());
    let states = session.subscribe();

    (session, states)
}

#[tokio::test]
async fn loads_the_named_document() {
    let client = Arc::new(FakeClient::default().with_document("pets".parse().unwrap(), VALID));
    let (session, mut states) = start(client, "pets");

    let state = until(&mut states, EditorState::is_loaded).await;

    assert_eq!(state.schema_name().as_str(), "pets");
    assert_eq!(state.value(), VALID);
    assert!(state.clean().is_some());
    assert!(!state.is_dirty());
    assert!(session.state().is_loaded());
}

#[tokio::test]
async fn unknown_names_fall_back_to_the_default_slot() {
    let client = Arc::new(FakeClient::default().with_document(SchemaName::default_slot(), VALID));
    let (_session, mut states) = start(client, "unknown-schema");

    let state = until(&mut states, EditorState::is_loaded).await;

    assert!(state.schema_name().is_default());
    assert_eq!(state.value(), VALID);
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn edit_and_save() {
    let client = Arc::new(FakeClient::default().with_document(SchemaName::default_slot(), VALID));
    let (session, mut states) = start(client.clone(), "default");
    until(&mut states, EditorState::is_loaded).await;

    session.edit(EDITED);
    let state = until(&mut states, |state| state.value() == EDITED).await;
    assert!(state.is_dirty());
    assert!(state.dirty_schema().is_some());

    session.save();
    let state = until(&mut states, |state| state.status() == Some(SAVED_STATUS)).await;

    assert!(!state.is_dirty());
    assert_eq!(state.cached_value(), EDITED);
    assert_eq!(client.persisted(), vec![(SchemaName::default_slot(), EDITED.to_owned())]);

    session.switch_view(View::Console);
    let state = until(&mut states, |state| state.active_view() == View::Console).await;
    assert!(state.console_schema().unwrap().sdl().contains("world: Int"));
}

#[tokio::test]
async fn invalid_buffers_are_never_sent() {
    let client = Arc::new(FakeClient::default().with_document(SchemaName::default_slot(), VALID));
    let (session, mut states) = start(client.clone(), "default");
    until(&mut states, EditorState::is_loaded).await;

    session.edit("type Query { hello: Foo }");
    session.save();

    let state = until(&mut states, |state| state.error().is_some()).await;

    assert_eq!(state.error(), Some("Unknown type \"Foo\"."));
    assert!(state.is_dirty());
    assert!(client.persisted().is_empty());
}

#[tokio::test]
async fn rejected_saves_stay_dirty() {
    let client = Arc::new(FakeClient {
        reject_with: Some("Schema not editable. ENABLE_EDIT_MODE is false".to_owned()),
        ..FakeClient::default().with_document(SchemaName::default_slot(), VALID)
    });
    let (session, mut states) = start(client.clone(), "default");
    until(&mut states, EditorState::is_loaded).await;

    session.edit(EDITED);
    session.save();

    let state = until(&mut states, |state| state.error().is_some()).await;

    assert_eq!(state.error(), Some("Schema not editable. ENABLE_EDIT_MODE is false"));
    assert!(state.is_dirty());
    assert_eq!(state.value(), EDITED);
    assert_eq!(client.persisted().len(), 1);
}

#[tokio::test]
async fn confirmations_overtaken_by_edits_are_dropped() {
    let gate = Arc::new(Semaphore::new(0));
    let client = Arc::new(FakeClient {
        gate: Some(gate.clone()),
        ..FakeClient::default().with_document(SchemaName::default_slot(), VALID)
    });
    let (session, mut states) = start(client.clone(), "default");
    until(&mut states, EditorState::is_loaded).await;

    session.edit(EDITED);
    session.save();
    session.edit(NEWER);
    let state = until(&mut states, |state| state.value() == NEWER).await;
    assert!(state.unsaved_changes_prompt().is_some());

    // The confirmation of EDITED is stale whether it arrives before or after this second save.
    session.save();
    gate.add_permits(2);

    let state = until(&mut states, |state| state.status() == Some(SAVED_STATUS)).await;

    assert!(!state.is_dirty());
    assert_eq!(state.value(), NEWER);
    assert_eq!(state.cached_value(), NEWER);

    let persisted = client.persisted();
    assert_eq!(persisted.len(), 2);
    assert!(persisted.contains(&(SchemaName::default_slot(), EDITED.to_owned())));
    assert!(persisted.contains(&(SchemaName::default_slot(), NEWER.to_owned())));
}

#[tokio::test(start_paused = true)]
async fn saved_status_clears_after_a_delay() {
    let client = Arc::new(FakeClient::default().with_document(SchemaName::default_slot(), VALID));
    let (session, mut states) = start(client, "default");
    until(&mut states, EditorState::is_loaded).await;

    session.edit(EDITED);
    session.save();
    until(&mut states, |state| state.status() == Some(SAVED_STATUS)).await;
    let saved_at = tokio::time::Instant::now();

    let state = until(&mut states, |state| state.status().is_none()).await;

    assert!(saved_at.elapsed() >= STATUS_DELAY);
    assert!(!state.is_dirty());
}
