/// Why a composed schema could not be turned into an executable one.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Invalid @{directive} on {coordinate}: {message}")]
    InvalidDirective {
        directive: &'static str,
        coordinate: String,
        message: String,
    },
    #[error("{0}")]
    Schema(String),
}
