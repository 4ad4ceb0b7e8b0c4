use ens_apt_application::use_cases::{GetProfileUseCase, ListOwnedNamesUseCase};
use ens_apt_infrastructure::CcipReadHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub ccip: Arc<CcipReadHandler>,
    pub get_profile: Arc<GetProfileUseCase>,
    pub list_names: Arc<ListOwnedNamesUseCase>,
}
