use serde::Deserialize;

pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

pub(super) const LOGIN_PATH: &str = "/auth/login";
pub(super) const STATUS_PAGE_PATH: &str = "/user";
pub(super) const CHECK_IN_PATH: &str = "/user/checkin";

pub(super) const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";
pub(super) const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
pub(super) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Check-in endpoint response body
#[derive(Debug, Deserialize)]
pub(super) struct CheckInResponse {
    pub msg: Option<String>,
}

/// Login form body, fields in the order the portal's own form posts them
pub(super) fn login_form_body(email: &str, passwd: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("email", email)
        .append_pair("passwd", passwd)
        .append_pair("code", "")
        .append_pair("remember_me", "on")
        .finish()
}
