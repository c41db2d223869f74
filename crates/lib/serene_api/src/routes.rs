//! Route paths.

pub const GET_INDEX: &str = "/";
pub const POST_CHAT: &str = "/chat";
pub const GET_API_HEALTH: &str = "/api/health";
pub const GET_API_HISTORY: &str = "/api/history";
/// `GET` reads, `PUT` updates.
pub const API_PROFILE: &str = "/api/profile";
pub const PUT_API_STRESS_INFO: &str = "/api/stress-info";
pub const POST_API_PROFILE_SAVE: &str = "/api/profile/save";
pub const POST_API_PROFILE_LOAD: &str = "/api/profile/load";
