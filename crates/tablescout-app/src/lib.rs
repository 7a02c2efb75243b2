pub mod context;
pub mod engine;
pub mod session;

pub use context::AppContext;
pub use engine::{Outcome, SelectionEngine, ViewState};
pub use session::SessionHolder;
