//! Record types posted to the catalog API.
//!
//! Field names serialize to the camelCase keys the tRPC procedures expect.
//! Optional fields are left out of the body entirely when unset.

use serde::{Deserialize, Serialize};

/// Whether a catalog entry is a physical product or a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Product,
    Service,
}

/// Roles accepted by `auth.signup`: `USER`, `ADMIN`, `MODERATOR` or `OWNER`.
/// The server assigns `USER` when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    Moderator,
    Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
}

impl ProductRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        product_type: ProductType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            product_type,
            brand_id: None,
        }
    }
}

/// A user account. The email doubles as the user's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: None,
        }
    }

    /// Signin body for this user.
    pub fn signin(&self) -> SigninRecord {
        SigninRecord {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninRecord {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRecord {
    pub name: String,
}

impl BrandRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A brand together with the user (by email) who creates and owns it.
///
/// Serializes to the plain brand body; the owner only selects the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAssignment {
    #[serde(skip_serializing)]
    pub owner: String,
    #[serde(flatten)]
    pub brand: BrandRecord,
}

impl BrandAssignment {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            brand: BrandRecord::new(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_body_uses_type_key() {
        let product = ProductRecord::new("Mechanical Keyboard", "RGB", ProductType::Product);
        let body = serde_json::to_value(&product).unwrap();

        assert_eq!(
            body,
            json!({"name": "Mechanical Keyboard", "description": "RGB", "type": "PRODUCT"})
        );
    }

    #[test]
    fn test_product_brand_id_is_camel_case() {
        let mut product = ProductRecord::new("Legal Consultation", "", ProductType::Service);
        product.brand_id = Some("b-1".to_string());
        let body = serde_json::to_value(&product).unwrap();

        assert_eq!(body["brandId"], "b-1");
        assert_eq!(body["type"], "SERVICE");
    }

    #[test]
    fn test_user_role_omitted_when_unset() {
        let user = UserRecord::new("Ava Mitchell", "ava@example.com", "qwerty123");
        let body = serde_json::to_string(&user).unwrap();
        assert!(!body.contains("role"));

        let admin = UserRecord {
            role: Some(Role::Admin),
            ..user
        };
        assert_eq!(serde_json::to_value(&admin).unwrap()["role"], "ADMIN");
    }

    #[test]
    fn test_moderator_role_reads_and_writes() {
        let moderator: UserRecord = serde_json::from_value(json!({
            "name": "Henry Murphy",
            "email": "henry.murphy@example.com",
            "password": "dragon456",
            "role": "MODERATOR"
        }))
        .unwrap();

        assert_eq!(moderator.role, Some(Role::Moderator));
        assert_eq!(serde_json::to_value(&moderator).unwrap()["role"], "MODERATOR");
    }

    #[test]
    fn test_signin_copies_credentials() {
        let user = UserRecord::new("Liam Parker", "liam@example.com", "securepass");
        let signin = user.signin();
        assert_eq!(signin.email, "liam@example.com");
        assert_eq!(signin.password, "securepass");
    }

    #[test]
    fn test_brand_assignment_reads_flat_json() {
        let assignment: BrandAssignment =
            serde_json::from_value(json!({"owner": "mia@example.com", "name": "Lumos Tech"}))
                .unwrap();
        assert_eq!(assignment, BrandAssignment::new("mia@example.com", "Lumos Tech"));
    }

    #[test]
    fn test_brand_assignment_body_is_brand_only() {
        let assignment = BrandAssignment::new("mia@example.com", "Lumos Tech");
        assert_eq!(
            serde_json::to_string(&assignment).unwrap(),
            r#"{"name":"Lumos Tech"}"#
        );
    }
}
