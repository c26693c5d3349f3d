use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login` and `POST /auth/admin/login`.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
///
/// `company_document` and `company_phone` carry unformatted digit strings and
/// are omitted entirely when empty.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RegisterRequest {
    pub user_name: String,
    pub user_email: String,
    pub user_password: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_omits_empty_optionals_and_uses_camel_case() {
        let request = RegisterRequest {
            user_name: "Ana Lima".to_owned(),
            user_email: "ana@empresa.com.br".to_owned(),
            user_password: "secret-enough".to_owned(),
            company_name: "Lima Acabamentos".to_owned(),
            company_document: None,
            company_phone: Some("1133334444".to_owned()),
        };

        let value = serde_json::to_value(&request).expect("serializable");
        let object = value.as_object().expect("an object");

        assert!(object.contains_key("userName"));
        assert!(object.contains_key("userEmail"));
        assert!(object.contains_key("companyName"));
        assert!(!object.contains_key("companyDocument"));
        assert_eq!(
            object.get("companyPhone").and_then(|v| v.as_str()),
            Some("1133334444")
        );
    }
}
