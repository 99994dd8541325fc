mod auth_messages;
mod ensure_profile;
mod http;
