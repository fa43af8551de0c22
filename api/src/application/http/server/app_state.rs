use std::sync::Arc;

use erudite_core::application::EruditeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: EruditeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: EruditeService) -> Self {
        Self { args, service }
    }
}
