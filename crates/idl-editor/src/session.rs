use std::sync::Arc;

use idl_store::SchemaName;
use schema_composer::Composer;
use tokio::{
    sync::{mpsc, watch},
    task::{JoinHandle, JoinSet},
};

use crate::{Command, EditorState, Event, IdlClient, View};

/// An editing session of one schema.
///
/// The state lives on a background task. User input goes in as events, every resulting state is
/// published on a watch channel. Network calls and timers run concurrently with further input, so
/// a save confirmation may well arrive after newer edits.
///
/// Dropping the session stops the task and everything it has in flight.
pub struct EditorSession {
    events: mpsc::UnboundedSender<Event>,
    state: watch::Receiver<EditorState>,
    task: JoinHandle<()>,
}

impl EditorSession {
    /// Start editing `name`. Must be called within a tokio runtime.
    pub fn start(client: Arc<dyn IdlClient>, composer: Composer, name: SchemaName) -> Self {
        let (state, commands) = EditorState::init(name);
        let (state_sender, state_receiver) = watch::channel(state.clone());
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        let task = tokio::spawn(run(state, commands, event_receiver, state_sender, client, composer));

        Self {
            events: event_sender,
            state: state_receiver,
            task,
        }
    }

    pub fn edit(&self, text: impl Into<String>) {
        self.send(Event::Edit(text.into()));
    }

    pub fn save(&self) {
        self.send(Event::Save);
    }

    pub fn switch_view(&self, view: View) {
        self.send(Event::SwitchView(view));
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> EditorState {
        self.state.borrow().clone()
    }

    /// Follows every state change.
    pub fn subscribe(&self) -> watch::Receiver<EditorState> {
        self.state.clone()
    }

    fn send(&self, event: Event) {
        if self.events.send(event).is_err() {
            tracing::warn!("editor session is no longer running");
        }
    }
}

impl Drop for EditorSession {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    mut state: EditorState,
    initial_commands: Vec<Command>,
    mut events: mpsc::UnboundedReceiver<Event>,
    publisher: watch::Sender<EditorState>,
    client: Arc<dyn IdlClient>,
    composer: Composer,
) {
    let mut in_flight = JoinSet::new();

    for command in initial_commands {
        in_flight.spawn(execute(command, client.clone()));
    }

    loop {
        let event = tokio::select! {
            event = events.recv() => match event {
                Some(event) => event,
                None => break,
            },
            Some(finished) = in_flight.join_next(), if !in_flight.is_empty() => match finished {
                Ok(event) => event,
                Err(error) => {
                    tracing::error!("editor command failed: {error}");
                    continue;
                }
            },
        };

        let (next, commands) = state.update(event, &composer);
        state = next;

        for command in commands {
            in_flight.spawn(execute(command, client.clone()));
        }

        publisher.send_replace(state.clone());
    }
}

async fn execute(command: Command, client: Arc<dyn IdlClient>) -> Event {
    match command {
        Command::Fetch(name) => {
            let result = client.fetch(&name).await;
            Event::Loaded { name, result }
        }
        Command::Persist { name, idl } => {
            let result = client.persist(&name, &idl).await.map_err(|error| error.to_string());
            Event::SaveCompleted { sent: idl, result }
        }
        Command::ClearStatusAfter { token, delay } => {
            tokio::time::sleep(delay).await;
            Event::StatusExpired(token)
        }
    }
}
