use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;

lazy_static! {
    pub static ref APP_ADDRESS: String =
        load_or_default(env::APP_ADDRESS_ENV_VAR, prod::APP_ADDRESS);
    pub static ref ASSETS_DIR: String =
        load_or_default(env::ASSETS_DIR_ENV_VAR, DEFAULT_ASSETS_DIR);
}

fn load_env() {
    dotenv().ok();
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const ASSETS_DIR_ENV_VAR: &str = "ASSETS_DIR";
}

pub const DEFAULT_ASSETS_DIR: &str = "assets";

// The only account the login page accepts.
pub const MOCK_LOGIN_EMAIL: &str = "teste@crossjungle.com";
pub const MOCK_LOGIN_PASSWORD: &str = "123456";

pub const LOGOUT_REDIRECT: &str = "/?logout=true";

/// How long a success notice stays up before the page moves on.
pub mod delays {
    use std::time::Duration;

    pub const LOGIN: Duration = Duration::from_millis(1500);
    pub const EDIT_TEAM: Duration = Duration::from_millis(1500);
    pub const SIGN_UP: Duration = Duration::from_millis(2000);
    pub const TOURNAMENT_SIGN_UP: Duration = Duration::from_millis(2000);
    pub const PAYMENT: Duration = Duration::from_millis(2000);
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
