use serde::{Deserialize, Serialize};

/// Collections are always denominated in CFA francs.
pub const XAF_CURRENCY_CODE: &str = "XAF";

/// Wire format for a collection request, as expected by the `/collect/` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CollectRequest {
    pub amount: String,
    pub currency: String,
    pub from: String,
    pub description: String,
}

impl CollectRequest {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(from: S1, amount: S2, description: S3) -> Self {
        Self {
            amount: amount.into(),
            currency: XAF_CURRENCY_CODE.to_string(),
            from: from.into(),
            description: description.into(),
        }
    }
}

/// The only field we care about in the provider's response.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectResponse {
    pub reference: String,
}
