mod handlers;
mod models;

pub use handlers::{app, run_server};

use crate::translator::Translator;

#[derive(Clone)]
pub(crate) struct ServerState {
    pub(crate) translator: Translator,
}
