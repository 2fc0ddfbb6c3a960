use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::address::models::Address;
use crate::domain::address::models::CreateAddressCommand;
use crate::domain::address::ports::AddressServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_address(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateAddressRequestBody>,
) -> Result<ApiSuccess<AddressData>, ApiError> {
    state
        .address_service
        .create_address_for_user(body.into_command(), &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref address| ApiSuccess::new(StatusCode::OK, address.into()))
}

/// HTTP request body for creating an address (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAddressRequestBody {
    address1: String,
    address2: Option<String>,
    apt_num: Option<String>,
    city: String,
    state: String,
    country: String,
    postalcode: String,
}

impl CreateAddressRequestBody {
    fn into_command(self) -> CreateAddressCommand {
        CreateAddressCommand {
            address1: self.address1,
            address2: self.address2,
            apt_num: self.apt_num,
            city: self.city,
            state: self.state,
            country: self.country,
            postalcode: self.postalcode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressData {
    pub id: i64,
    pub address1: String,
    pub address2: Option<String>,
    pub apt_num: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postalcode: String,
}

impl From<&Address> for AddressData {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.as_i64(),
            address1: address.address1.clone(),
            address2: address.address2.clone(),
            apt_num: address.apt_num.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            country: address.country.clone(),
            postalcode: address.postalcode.clone(),
        }
    }
}
