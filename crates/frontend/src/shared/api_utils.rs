//! Helpers for talking to the sales backend.
//!
//! Every endpoint is guarded by the CSRF middleware and by an "is ajax"
//! check, so each request carries the token (as body field and header) and
//! the `X-Requested-With` header. Bodies are urlencoded forms except for the
//! status toggle, which posts JSON.

use contracts::shared::form_body::FormBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// Endpoint base and CSRF token, provided as context at the app root
#[derive(Debug, Clone, PartialEq)]
pub struct ApiContext {
    base: String,
    csrf_field: String,
    csrf_token: Option<String>,
}

impl ApiContext {
    pub fn new(
        base: impl Into<String>,
        csrf_field: impl Into<String>,
        csrf_token: Option<String>,
    ) -> Self {
        Self {
            base: base.into(),
            csrf_field: csrf_field.into(),
            csrf_token,
        }
    }

    /// Build a full URL from an endpoint path
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = ctx.api_url("/adm/sales/search");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Form body with the CSRF field appended, as the middleware expects
    pub fn sign(&self, mut form: FormBody) -> FormBody {
        if let Some(token) = &self.csrf_token {
            form.push(self.csrf_field.clone(), token.clone());
        }
        form
    }

    /// JSON body with the CSRF field merged in next to the payload fields
    pub fn sign_json<'a, B: Serialize>(&'a self, body: &'a B) -> SignedJson<'a, B> {
        let csrf = self
            .csrf_token
            .as_deref()
            .map(|token| (self.csrf_field.as_str(), token))
            .into_iter()
            .collect();
        SignedJson { body, csrf }
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let mut builder = Request::post(&self.api_url(path))
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(token) = &self.csrf_token {
            builder = builder.header("X-CSRFToken", token);
        }
        builder
    }
}

#[derive(Serialize)]
pub struct SignedJson<'a, B> {
    #[serde(flatten)]
    body: &'a B,
    #[serde(flatten)]
    csrf: HashMap<&'a str, &'a str>,
}

/// POST a form to `path` and decode the JSON answer
pub async fn post_form<T>(ctx: &ApiContext, path: &str, form: FormBody) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let body = ctx
        .sign(form)
        .encode()
        .map_err(|e| format!("Failed to encode form: {}", e))?;

    let response = ctx
        .post(path)
        .header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=UTF-8",
        )
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    decode_response(path, response).await
}

/// POST a JSON body to `path` and decode the JSON answer
pub async fn post_json<B, T>(ctx: &ApiContext, path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = ctx
        .post(path)
        .json(&ctx.sign_json(body))
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    decode_response(path, response).await
}

async fn decode_response<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("POST {} failed: {}", path, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_account::AccountId;
    use contracts::usecases::u004_toggle_status::ToggleStatusRequest;

    #[test]
    fn sign_appends_csrf_field() {
        let ctx = ApiContext::new("", "csrfmiddlewaretoken", Some("tok".to_string()));
        let form = ctx.sign(FormBody::new().with("data", "T1"));

        assert_eq!(form.get("data"), Some("T1"));
        assert_eq!(form.get("csrfmiddlewaretoken"), Some("tok"));
    }

    #[test]
    fn missing_token_sends_body_untouched() {
        let ctx = ApiContext::new("http://localhost:3000", "csrfmiddlewaretoken", None);
        let form = ctx.sign(FormBody::new().with("page", "1"));

        assert_eq!(form.pairs().len(), 1);
        assert_eq!(
            ctx.api_url("/adm/sales/search"),
            "http://localhost:3000/adm/sales/search"
        );
    }

    #[test]
    fn json_body_gets_csrf_field_beside_payload() {
        let ctx = ApiContext::new("", "csrfmiddlewaretoken", Some("tok".to_string()));
        let request = ToggleStatusRequest::new(AccountId(12));

        let body = serde_json::to_value(ctx.sign_json(&request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"account_id": 12, "csrfmiddlewaretoken": "tok"})
        );
    }

    #[test]
    fn json_body_without_token_is_the_payload() {
        let ctx = ApiContext::new("", "csrfmiddlewaretoken", None);
        let request = ToggleStatusRequest::new(AccountId(3));

        let body = serde_json::to_value(ctx.sign_json(&request)).unwrap();
        assert_eq!(body, serde_json::json!({"account_id": 3}));
    }
}
