// ABOUTME: Context module - the request model conditions evaluate against.
// ABOUTME: Method, actor, route captures, and the combined request context.

mod actor;
mod method;
mod request;
mod route;

pub use actor::*;
pub use method::*;
pub use request::*;
pub use route::*;
