//! Request trait for per-request values.

/// A marker trait for the per-request value that traverses a pipeline.
///
/// Requests must be `Send + 'static` so traversals can run on any task.
/// One traversal owns one request exclusively (handlers and hooks receive
/// `&mut`), so `Sync` is not required.
///
/// # Example
///
/// ```rust,ignore
/// struct HttpExchange {
///     path: String,
///     status: Option<u16>,
/// }
///
/// impl Request for HttpExchange {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Request",
    label = "must be `Send + 'static`",
    note = "Per-request values must be safe to move onto the task running the traversal."
)]
pub trait Request: Send + 'static {}

// Common Request implementations
impl Request for () {}
impl Request for String {}
impl<T: Request> Request for Box<T> {}
impl<T: Request> Request for Option<T> {}
