use crate::modules::demo::core::flavor::Flavor;

#[derive(Clone, Copy, Debug, Default)]
pub struct AppState {
    pub flavor: Flavor,
}

impl AppState {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }
}
