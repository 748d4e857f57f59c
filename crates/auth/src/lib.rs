pub mod api;
pub mod flow;
pub mod interceptor;
pub mod session;

pub use api::{AuthClient, TokenRefresher};
pub use flow::{login, logout};
pub use interceptor::Interceptor;
pub use session::{SessionState, SessionStore, SharedSession};
