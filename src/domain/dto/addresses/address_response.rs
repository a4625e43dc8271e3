use serde::{Deserialize, Serialize};

use crate::domain::entities::patients::Address;

/// 주소 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub street: String,
    pub neighborhood: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        let Address {
            street,
            neighborhood,
            zip_code,
            city,
            state,
            number,
            complement,
        } = address;

        Self {
            street,
            neighborhood,
            zip_code,
            city,
            state,
            number,
            complement,
        }
    }
}
