use std::time::Duration;

use idl_store::SchemaName;
use schema_composer::{ComposedSchema, Composer};

use crate::{ClientError, UserIdl};

/// Shown once a save went through.
pub const SAVED_STATUS: &str = "Saved!";

/// How long a status stays visible.
pub const STATUS_DELAY: Duration = Duration::from_secs(2);

/// Asked before leaving a session with unsaved changes.
pub const UNSAVED_CHANGES_PROMPT: &str = "You have unsaved changes. Exit?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Editor,
    Console,
}

/// Something that happened to the session, from the user or from a finished [`Command`].
#[derive(Debug)]
pub enum Event {
    Loaded {
        name: SchemaName,
        result: Result<UserIdl, ClientError>,
    },
    Edit(String),
    Save,
    SwitchView(View),
    /// The answer to a [`Command::Persist`] of `sent`.
    SaveCompleted {
        sent: String,
        result: Result<(), String>,
    },
    StatusExpired(u64),
}

/// Work for the session driver. Each one eventually comes back as an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch(SchemaName),
    Persist { name: SchemaName, idl: String },
    ClearStatusAfter { token: u64, delay: Duration },
}

/// Everything the editor shows.
///
/// `clean` only ever advances on a successful composition. `dirty` compares the buffer with what
/// was last saved and is unrelated to whether the buffer composes.
#[derive(Debug, Clone)]
pub struct EditorState {
    schema_name: SchemaName,
    value: String,
    cached_value: String,
    base_idl: Option<String>,
    clean: Option<ComposedSchema>,
    dirty_schema: Option<ComposedSchema>,
    dirty: bool,
    error: Option<String>,
    status: Option<String>,
    status_token: u64,
    active_view: View,
    edit_mode: bool,
    loaded: bool,
}

impl EditorState {
    /// A session for `name`, still waiting for its document.
    pub fn init(schema_name: SchemaName) -> (Self, Vec<Command>) {
        let state = Self {
            schema_name: schema_name.clone(),
            value: String::new(),
            cached_value: String::new(),
            base_idl: None,
            clean: None,
            dirty_schema: None,
            dirty: false,
            error: None,
            status: None,
            status_token: 0,
            active_view: View::Editor,
            edit_mode: true,
            loaded: false,
        };

        (state, vec![Command::Fetch(schema_name)])
    }

    pub fn update(mut self, event: Event, composer: &Composer) -> (Self, Vec<Command>) {
        let commands = match event {
            Event::Loaded { name, result } => self.on_loaded(name, result, composer),
            Event::Edit(text) => {
                self.on_edit(text, composer);
                Vec::new()
            }
            Event::Save => self.on_save(composer),
            Event::SwitchView(view) => {
                self.on_switch_view(view);
                Vec::new()
            }
            Event::SaveCompleted { sent, result } => self.on_save_completed(sent, result),
            Event::StatusExpired(token) => {
                if token == self.status_token {
                    self.status = None;
                }
                Vec::new()
            }
        };

        (self, commands)
    }

    fn compose(&self, composer: &Composer) -> Result<ComposedSchema, String> {
        composer
            .compose(&self.value, self.base_idl.as_deref())
            .map_err(|error| error.to_string())
    }

    fn on_loaded(
        &mut self,
        name: SchemaName,
        result: Result<UserIdl, ClientError>,
        composer: &Composer,
    ) -> Vec<Command> {
        if name != self.schema_name {
            return Vec::new();
        }

        let idl = match result {
            Ok(idl) => idl,
            Err(ClientError::NotFound(message)) if !name.is_default() => {
                tracing::warn!("{message} Opening the default schema instead.");
                self.schema_name = SchemaName::default_slot();
                return vec![Command::Fetch(SchemaName::default_slot())];
            }
            Err(error) => {
                self.error = Some(error.to_string());
                return Vec::new();
            }
        };

        // In extension mode the editable text is the overlay, the served schema is its base.
        let (value, base_idl) = match idl.extension_idl {
            Some(extension) => (extension, Some(idl.schema_idl)),
            None => (idl.schema_idl, None),
        };

        self.value.clone_from(&value);
        self.cached_value = value;
        self.base_idl = base_idl;
        self.edit_mode = idl.edit_mode.unwrap_or(true);
        self.dirty = false;
        self.dirty_schema = None;
        self.error = None;
        self.loaded = true;

        self.clean = match self.compose(composer) {
            Ok(schema) => Some(schema),
            Err(error) => {
                tracing::debug!("initial schema does not compose: {error}");
                None
            }
        };

        if !self.edit_mode && self.clean.is_some() {
            self.active_view = View::Console;
        }

        Vec::new()
    }

    fn on_edit(&mut self, text: String, composer: &Composer) {
        if !self.accepts_edits() {
            return;
        }

        self.value = text;
        self.dirty = self.value != self.cached_value;

        let composed = self.compose(composer);

        // Live feedback only once an error is already on screen.
        if self.error.is_some() {
            match &composed {
                Ok(schema) => {
                    self.clean = Some(schema.clone());
                    self.error = None;
                }
                Err(error) => self.error = Some(error.clone()),
            }
        }

        self.dirty_schema = composed.ok();
    }

    fn on_save(&mut self, composer: &Composer) -> Vec<Command> {
        if !self.accepts_edits() || !self.dirty {
            return Vec::new();
        }

        match self.compose(composer) {
            Ok(schema) => {
                self.clean = Some(schema);
                self.error = None;

                vec![Command::Persist {
                    name: self.schema_name.clone(),
                    idl: self.value.clone(),
                }]
            }
            Err(error) => {
                self.error = Some(error);
                Vec::new()
            }
        }
    }

    fn on_save_completed(&mut self, sent: String, result: Result<(), String>) -> Vec<Command> {
        if let Err(error) = result {
            self.error = Some(error);
            return Vec::new();
        }

        if self.value != sent {
            tracing::debug!("dropping the confirmation of a save the buffer has moved past");
            return Vec::new();
        }

        self.cached_value = sent;
        self.dirty = false;
        self.dirty_schema = None;
        self.error = None;
        self.status = Some(SAVED_STATUS.to_owned());
        self.status_token += 1;

        vec![Command::ClearStatusAfter {
            token: self.status_token,
            delay: STATUS_DELAY,
        }]
    }

    fn on_switch_view(&mut self, view: View) {
        let allowed = match view {
            View::Editor => self.edit_mode,
            View::Console => self.clean.is_some(),
        };

        if allowed {
            self.active_view = view;
        }
    }

    fn accepts_edits(&self) -> bool {
        self.loaded && self.edit_mode
    }

    pub fn schema_name(&self) -> &SchemaName {
        &self.schema_name
    }

    /// The edit buffer.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The text last loaded from or saved to the server.
    pub fn cached_value(&self) -> &str {
        &self.cached_value
    }

    /// The read-only base schema, in extension mode.
    pub fn base_idl(&self) -> Option<&str> {
        self.base_idl.as_deref()
    }

    pub fn is_extension_mode(&self) -> bool {
        self.base_idl.is_some()
    }

    pub fn clean(&self) -> Option<&ComposedSchema> {
        self.clean.as_ref()
    }

    pub fn dirty_schema(&self) -> Option<&ComposedSchema> {
        self.dirty_schema.as_ref()
    }

    /// The schema the console runs against: the buffer when it composes, the last clean one otherwise.
    pub fn console_schema(&self) -> Option<&ComposedSchema> {
        self.dirty_schema.as_ref().or(self.clean.as_ref())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether the console tab can be opened.
    pub fn console_enabled(&self) -> bool {
        self.clean.is_some()
    }

    /// The confirmation to ask for before leaving, if anything would be lost.
    pub fn unsaved_changes_prompt(&self) -> Option<&'static str> {
        self.dirty.then_some(UNSAVED_CHANGES_PROMPT)
    }
}
