//! The live IDL editor: a reducer over the editing state, a client for the `/user-idl` endpoints
//! and a session driving both.
//!
//! [`EditorState::update`] is the only place the state changes. It never performs IO, it returns
//! [`Command`]s instead, which [`EditorSession`] executes on spawned tasks and feeds back as
//! [`Event`]s.

#![deny(unsafe_code)]

mod client;
mod session;
mod state;

pub use self::{
    client::{ClientError, HttpIdlClient, IdlClient, UserIdl},
    session::EditorSession,
    state::{Command, EditorState, Event, View, SAVED_STATUS, STATUS_DELAY, UNSAVED_CHANGES_PROMPT},
};
pub use idl_store::SchemaName;
