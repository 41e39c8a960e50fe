use faker_server::ServerRuntime;

/// Opens the editor in a browser once the server listens, if asked to.
pub(crate) struct BrowserOpener {
    open: bool,
}

pub(crate) fn build(open: bool) -> BrowserOpener {
    BrowserOpener { open }
}

impl ServerRuntime for BrowserOpener {
    fn on_ready(&self, editor_url: &str) {
        if !self.open {
            return;
        }

        if let Err(error) = webbrowser::open(editor_url) {
            tracing::warn!("could not open {editor_url} in a browser: {error}");
        }
    }
}
