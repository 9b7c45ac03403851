use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const USER_ID_KEY: &str = "auth_user_id";
const COMPANY_ID_KEY: &str = "auth_company_id";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.trim().is_empty())
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

/// Get id of the signed-in user from localStorage
pub fn get_user_id() -> Option<String> {
    get_item(USER_ID_KEY)
}

/// Get company id of the signed-in user from localStorage
pub fn get_company_id() -> Option<String> {
    get_item(COMPANY_ID_KEY)
}
