use std::fmt::Display;

use crate::error::DataPlaneError;

pub type DataPlaneResult<R> = Result<R, DataPlaneError>;

pub trait DataPlaneResultHelper<T> {
    fn context(self, context: &str) -> DataPlaneResult<T>;
    fn with_context<D, O>(self, op: O) -> DataPlaneResult<T>
    where
        D: Display + Send + Sync + 'static,
        O: FnOnce() -> D;
}

impl<T, E> DataPlaneResultHelper<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn context(self, context: &str) -> DataPlaneResult<T> {
        self.map_err(|e| DataPlaneError::Default(format!("{context}: {e}")))
    }

    fn with_context<D, O>(self, op: O) -> DataPlaneResult<T>
    where
        D: Display + Send + Sync + 'static,
        O: FnOnce() -> D,
    {
        self.map_err(|e| DataPlaneError::Default(format!("{}: {e}", op())))
    }
}

impl<T> DataPlaneResultHelper<T> for Option<T> {
    fn context(self, context: &str) -> DataPlaneResult<T> {
        self.ok_or_else(|| DataPlaneError::Default(context.to_owned()))
    }

    fn with_context<D, O>(self, op: O) -> DataPlaneResult<T>
    where
        D: Display + Send + Sync + 'static,
        O: FnOnce() -> D,
    {
        self.ok_or_else(|| DataPlaneError::Default(format!("{}", op())))
    }
}
