//! Session-aware API client shared by every screen.
//!
//! One `ApiClient` is built at startup and handed to the pages through a
//! context provider. It owns the bearer token lifecycle (adopt on login,
//! persist to local storage, drop on logout) and normalizes every failure
//! into a message the UI can show directly.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    AdviceResponse, CategoryAmount, ExpenseGraph, Goal, InvestmentAdvice, LoginResponse,
    MessageResponse, Overview, Profile, RecentTransaction, Recommendation, RegisterResponse,
    TaxAdvice, TrendGraphs,
};

const DEFAULT_API_URL: &str = "http://localhost:5000";
const TOKEN_STORAGE_KEY: &str = "token";

/// Everything a call can fail with, flattened for the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Blocked locally: an authenticated call was made with no session.
    NotLoggedIn,
    /// The request never produced a response.
    Network,
    /// The server answered with a non-2xx status and this message.
    Server(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotLoggedIn => write!(f, "Please login first."),
            ApiError::Network => write!(f, "Could not reach the server."),
            ApiError::Server(msg) => write!(f, "{}", msg),
        }
    }
}

/// What to do with a token returned by the register endpoint.
///
/// The backend may or may not include one, and different app revisions
/// disagreed on whether that means the user is logged in. The caller picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterBehavior {
    /// Treat a token in the register response as an implicit login.
    AdoptToken,
    /// Ignore any token and send the user to the login screen.
    RequireLogin,
}

fn token_to_adopt(behavior: RegisterBehavior, token: Option<&str>) -> Option<&str> {
    match behavior {
        RegisterBehavior::AdoptToken => token,
        RegisterBehavior::RequireLogin => None,
    }
}

/// The client-held credential state: absent, or a bearer token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn adopt(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn clear(&mut self) {
        self.token = None;
    }

    fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn failure_message(status: u16, payload: Option<&serde_json::Value>) -> String {
    if let Some(json) = payload {
        for field in ["error", "message"] {
            if let Some(msg) = json.get(field).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    format!("Request failed with status {}", status)
}

fn load_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_STORAGE_KEY).ok()?
}

fn save_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }
}

fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if resp.ok() {
        resp.json::<T>()
            .await
            .map_err(|_| ApiError::Server("Unexpected response from server.".to_string()))
    } else {
        Err(read_failure(resp).await)
    }
}

async fn read_failure(resp: Response) -> ApiError {
    let status = resp.status();
    let payload = resp.json::<serde_json::Value>().await.ok();
    let msg = failure_message(status, payload.as_ref());
    log::warn!("request failed ({}): {}", status, msg);
    ApiError::Server(msg)
}

/// The facade itself. Cloning shares the session, so every page holding a
/// clone sees the same token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    register_behavior: RegisterBehavior,
    session: Rc<RefCell<Session>>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.session, &other.session)
    }
}

impl ApiClient {
    pub fn new(base_url: &str, register_behavior: RegisterBehavior) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            register_behavior,
            session: Rc::new(RefCell::new(Session::default())),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            option_env!("API_URL").unwrap_or(DEFAULT_API_URL),
            RegisterBehavior::RequireLogin,
        )
    }

    /// Adopts a previously persisted token, if any. Idempotent; a token
    /// already held in memory wins over storage.
    pub fn restore_session(&self) {
        if self.session.borrow().is_authenticated() {
            return;
        }
        if let Some(token) = load_token() {
            if !token.is_empty() {
                self.session.borrow_mut().adopt(&token);
                log::debug!("restored persisted session");
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    /// Drops the session locally. No network call is made.
    pub fn logout(&self) {
        self.session.borrow_mut().clear();
        clear_token();
        log::debug!("session cleared");
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session.borrow().bearer().ok_or(ApiError::NotLoggedIn)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn adopt_token(&self, token: &str) {
        self.session.borrow_mut().adopt(token);
        save_token(token);
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({ "username": username, "password": password });
        let resp = Request::post(&self.url("/api/login"))
            .json(&body)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        let payload: LoginResponse = read_json(resp).await?;
        if let Some(token) = payload.token.as_deref() {
            self.adopt_token(token);
        }
        Ok(payload)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let body = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let resp = Request::post(&self.url("/api/register"))
            .json(&body)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        let payload: RegisterResponse = read_json(resp).await?;
        if let Some(token) = token_to_adopt(self.register_behavior, payload.token.as_deref()) {
            self.adopt_token(token);
        }
        Ok(payload)
    }

    pub async fn authed_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.authed_get_query(path, &[]).await
    }

    pub async fn authed_get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let bearer = self.bearer()?;
        let resp = Request::get(&self.url(path))
            .header("Authorization", &bearer)
            .query(query.iter().copied())
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        read_json(resp).await
    }

    pub async fn authed_get_text(&self, path: &str) -> Result<String, ApiError> {
        let bearer = self.bearer()?;
        let resp = Request::get(&self.url(path))
            .header("Authorization", &bearer)
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        if resp.ok() {
            resp.text()
                .await
                .map_err(|_| ApiError::Server("Unexpected response from server.".to_string()))
        } else {
            Err(read_failure(resp).await)
        }
    }

    pub async fn authed_post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let bearer = self.bearer()?;
        let resp = Request::post(&self.url(path))
            .header("Authorization", &bearer)
            .json(body)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        read_json(resp).await
    }

    pub async fn authed_put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let bearer = self.bearer()?;
        let resp = Request::put(&self.url(path))
            .header("Authorization", &bearer)
            .json(body)
            .map_err(|_| ApiError::Network)?
            .send()
            .await
            .map_err(|_| ApiError::Network)?;
        read_json(resp).await
    }

    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.authed_get("/api/profile").await
    }

    pub async fn update_profile(
        &self,
        username: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = serde_json::json!({ "username": username, "email": email });
        self.authed_put("/api/profile", &body).await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = serde_json::json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        self.authed_put("/api/profile/password", &body).await
    }

    pub async fn add_income(
        &self,
        amount: f64,
        source: &str,
        city: &str,
        date: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = serde_json::json!({
            "amount": amount,
            "source": source,
            "city": city,
            "date": date,
        });
        self.authed_post("/api/incomes", &body).await
    }

    pub async fn add_expense(
        &self,
        amount: f64,
        category: &str,
        payment_type: &str,
        description: &str,
        date: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = serde_json::json!({
            "amount": amount,
            "category": category,
            "payment_type": payment_type,
            "description": description,
            "date": date,
        });
        self.authed_post("/api/expenses", &body).await
    }

    pub async fn overview(&self) -> Result<Overview, ApiError> {
        self.authed_get("/api/analytics_overview").await
    }

    pub async fn advice(&self) -> Result<Vec<Recommendation>, ApiError> {
        let payload: AdviceResponse = self.authed_get("/api/advice").await?;
        Ok(payload.recommendations)
    }

    pub async fn tax_advice(&self) -> Result<TaxAdvice, ApiError> {
        self.authed_get("/api/tax_advice").await
    }

    pub async fn investment_advice(&self, risk: &str) -> Result<InvestmentAdvice, ApiError> {
        self.authed_get_query("/api/investment_advice", &[("risk", risk)])
            .await
    }

    pub async fn expense_graph(&self) -> Result<ExpenseGraph, ApiError> {
        self.authed_get("/api/expenses/graph").await
    }

    pub async fn expense_chart(&self) -> Result<Vec<CategoryAmount>, ApiError> {
        self.authed_get("/api/expenses/chart").await
    }

    pub async fn trend_graphs(&self) -> Result<TrendGraphs, ApiError> {
        self.authed_get("/api/expenses_income_trend").await
    }

    pub async fn recent_transactions(&self) -> Result<Vec<RecentTransaction>, ApiError> {
        self.authed_get("/api/transactions/recent").await
    }

    pub async fn goals(&self) -> Result<Vec<Goal>, ApiError> {
        self.authed_get("/api/goals").await
    }

    pub async fn download_expenses_csv(&self) -> Result<String, ApiError> {
        self.authed_get_text("/api/expenses/download").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn session_adopt_and_clear() {
        let mut session = Session::default();
        session.adopt("abc");
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc"));
        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn bearer_fails_fast_without_session() {
        let client = ApiClient::new("http://localhost:5000", RegisterBehavior::RequireLogin);
        assert_eq!(client.bearer(), Err(ApiError::NotLoggedIn));
    }

    #[test]
    fn bearer_carries_adopted_token() {
        let client = ApiClient::new("http://localhost:5000", RegisterBehavior::RequireLogin);
        client.session.borrow_mut().adopt("abc");
        assert_eq!(client.bearer().as_deref(), Ok("Bearer abc"));
    }

    #[test]
    fn clones_share_one_session() {
        let client = ApiClient::new("http://localhost:5000", RegisterBehavior::RequireLogin);
        let other = client.clone();
        client.session.borrow_mut().adopt("abc");
        assert!(other.is_logged_in());
        assert_eq!(client, other);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000/", RegisterBehavior::RequireLogin);
        assert_eq!(client.url("/api/login"), "http://localhost:5000/api/login");
    }

    #[test]
    fn failure_message_prefers_error_field() {
        let payload = serde_json::json!({ "error": "Invalid Token!", "message": "other" });
        assert_eq!(failure_message(401, Some(&payload)), "Invalid Token!");
    }

    #[test]
    fn failure_message_falls_back_to_message_field() {
        let payload = serde_json::json!({ "message": "Token has expired!" });
        assert_eq!(failure_message(401, Some(&payload)), "Token has expired!");
    }

    #[test]
    fn failure_message_generic_fallback() {
        assert_eq!(failure_message(500, None), "Request failed with status 500");
        let payload = serde_json::json!({ "detail": 42 });
        assert_eq!(
            failure_message(503, Some(&payload)),
            "Request failed with status 503"
        );
    }

    #[test]
    fn register_token_adoption_is_configurable() {
        assert_eq!(
            token_to_adopt(RegisterBehavior::AdoptToken, Some("abc")),
            Some("abc")
        );
        assert_eq!(
            token_to_adopt(RegisterBehavior::RequireLogin, Some("abc")),
            None
        );
        assert_eq!(token_to_adopt(RegisterBehavior::AdoptToken, None), None);
    }

    #[test]
    fn api_error_messages_read_like_alerts() {
        assert_eq!(ApiError::NotLoggedIn.to_string(), "Please login first.");
        assert_eq!(ApiError::Network.to_string(), "Could not reach the server.");
        assert_eq!(
            ApiError::Server("Username already taken".to_string()).to_string(),
            "Username already taken"
        );
    }
}
