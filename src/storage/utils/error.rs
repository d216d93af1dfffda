// Context wrapping for operation failures
use crate::error::Error;

/// Anything an operation can fail with, lifted into the crate error.
pub trait IntoSwiftfsError {
    fn into_error(self) -> Error;
}

impl IntoSwiftfsError for Error {
    fn into_error(self) -> Error {
        self
    }
}

impl IntoSwiftfsError for opendal::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

/// Wrap the error of a Result-producing expression into a context variant
/// carrying `source: Box<Error>`, logging the failure at debug level.
///
/// The wrapped error keeps its [`ErrorKind`](crate::error::ErrorKind), since
/// classification looks through the box.
///
/// Example:
/// wrap_err!(op.await, DeleteFailed { key: key.to_string() })?
#[macro_export]
macro_rules! wrap_err {
    ($expr:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {{
        $expr.map_err(|e| {
            let src: $crate::error::Error = $crate::storage::utils::error::IntoSwiftfsError::into_error(e);
            log::debug!("{} ({:?})", stringify!($variant), src.kind());
            $crate::error::Error::$variant { $($field: $value),*, source: Box::new(src) }
        })
    }};
}
