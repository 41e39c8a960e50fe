/// Why an IDL document could not be composed.
///
/// Syntax errors and type-system errors are reported the same way: one human readable message,
/// with one line per problem found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CompositionError {
    message: String,
}

impl CompositionError {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    pub(crate) fn from_syntax(error: async_graphql_parser::Error) -> Self {
        let position = error
            .positions()
            .next()
            .map(|pos| format!(" at {pos}"))
            .unwrap_or_default();

        Self::new(format!("Syntax Error: {error}{position}"))
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
