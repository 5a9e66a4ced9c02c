use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A product record. `id == 0` means it has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Overwrite the fields that are `Some`; `None` leaves the field unchanged.
    pub fn apply_update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
    }
}

/// List filters. An empty `name` matches everything; otherwise products whose
/// name contains it (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub name: String,
}

impl Filters {
    pub fn matches(&self, product: &Product) -> bool {
        self.name.is_empty() || product.name.contains(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetReq {
    pub id: i64,
}

/// Query string of `GET /products`. Zero, empty or absent `limit`/`page`
/// select the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetAllReq {
    /// Substring of the product name
    #[serde(default)]
    pub name: String,
    /// Page size
    #[serde(default, deserialize_with = "empty_as_zero")]
    pub limit: i64,
    /// 1-based page number
    #[serde(default, deserialize_with = "empty_as_zero")]
    pub page: i64,
}

/// `limit=` and `page=` carry no value; read them as 0.
fn empty_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(de::Error::custom)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct StoreReq {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

/// Partial update. Absent fields are left unchanged; `id` comes from the path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateReq {
    #[serde(skip)]
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReq {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: 1,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
        }
    }

    #[test]
    fn test_apply_update_without_fields_is_noop() {
        let mut product = widget();
        product.apply_update(None, None, None);
        assert_eq!(product, widget());
    }

    #[test]
    fn test_apply_update_partial() {
        let mut product = widget();
        product.apply_update(None, Some(String::new()), Some(12.5));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "");
        assert_eq!(product.price, 12.5);
    }

    #[test]
    fn test_filters_match_substring() {
        let product = widget();
        assert!(Filters::default().matches(&product));
        assert!(Filters { name: "idg".into() }.matches(&product));
        assert!(!Filters { name: "widget".into() }.matches(&product));
    }

    #[test]
    fn test_get_all_req_empty_numbers_are_zero() {
        let req: GetAllReq =
            serde_json::from_str(r#"{"name": "", "limit": "", "page": " 3 "}"#).unwrap();
        assert_eq!(req.limit, 0);
        assert_eq!(req.page, 3);

        let err = serde_json::from_str::<GetAllReq>(r#"{"limit": "ten"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_update_req_ignores_id_in_body() {
        let req: UpdateReq = serde_json::from_str(r#"{"id": 99, "price": 3.5}"#).unwrap();
        assert_eq!(req.id, 0);
        assert_eq!(req.name, None);
        assert_eq!(req.price, Some(3.5));
    }

    #[test]
    fn test_store_req_missing_fields_default() {
        let req: StoreReq = serde_json::from_str("{}").unwrap();
        assert_eq!(req, StoreReq::default());
    }
}
