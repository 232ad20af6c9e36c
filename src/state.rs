use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{BookingRepository, Clock, ReviewRepository, SpotRepository, UserRepository};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub spot_repo: Arc<dyn SpotRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub auth_service: Arc<AuthService>,
    pub clock: Arc<dyn Clock>,
}
