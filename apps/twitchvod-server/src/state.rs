use twitchvod_gql::VideoResolver;

/// Shared by every request. Nothing in here changes after start-up.
#[derive(Debug)]
pub struct AppState {
    pub resolver: VideoResolver,
    pub secret: String,
}
