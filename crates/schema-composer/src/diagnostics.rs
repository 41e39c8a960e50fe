use crate::CompositionError;

/// Errors collected while ingesting and validating a document.
#[derive(Default, Debug)]
pub(crate) struct Diagnostics(Vec<String>);

impl Diagnostics {
    pub(crate) fn push(&mut self, message: String) {
        self.0.push(message);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_result(self) -> Result<(), CompositionError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CompositionError::new(self.0.join("\n")))
        }
    }
}
