use std::{path::PathBuf, sync::Arc};

use http::HeaderName;
use idl_store::IdlStore;
use schema_composer::Composer;

use crate::Config;

pub(crate) struct ServerStateInner {
    /// Where schema documents are read from and saved to.
    pub store: Arc<dyn IdlStore>,

    pub composer: Composer,

    /// If false, saving is rejected and clients are told the schema is read-only.
    pub edit_mode: bool,

    /// Lowercased names of the request headers handed to resolvers.
    pub forward_headers: Vec<HeaderName>,

    /// The editor page, if a bundle was configured.
    pub editor_index: Option<PathBuf>,
}

#[derive(Clone)]
pub(crate) struct ServerState {
    inner: Arc<ServerStateInner>,
}

impl ServerState {
    pub(crate) fn new(config: &Config, store: Arc<dyn IdlStore>) -> crate::Result<Self> {
        let forward_headers = config
            .forward_headers
            .iter()
            .map(|name| {
                HeaderName::from_bytes(name.to_ascii_lowercase().as_bytes())
                    .map_err(|_| crate::Error::InvalidHeaderName(name.clone()))
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self {
            inner: Arc::new(ServerStateInner {
                store,
                composer: Composer::default(),
                edit_mode: config.edit_mode,
                forward_headers,
                editor_index: config.editor.assets_dir.as_ref().map(|dir| dir.join("index.html")),
            }),
        })
    }
}

impl std::ops::Deref for ServerState {
    type Target = ServerStateInner;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}
