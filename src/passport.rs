//! Passport identity derivation.
//!
//! Given a style's descriptive snapshot, derives everything that makes a
//! digital passport addressable: a fresh random identifier, a one-way digest
//! of that identifier, and the public URL encoded into the passport's QR
//! code. Construction is pure apart from drawing the random id; persistence
//! belongs to the caller.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::qr::{self, QrError};

/// Descriptive snapshot of a style at the moment its passport is minted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductData {
    pub code: String,
    pub name: String,
    pub collection: String,
    pub materials: Vec<String>,
    pub production_location: String,
    pub carbon_footprint: f64,
    pub certificates: Vec<String>,
    pub supplier: String,
    pub additional_info: String,
}

/// A fully derived passport: identity fields plus the echoed product
/// snapshot. Persisted exactly once by the caller, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct MintedPassport {
    pub id: Uuid,
    /// Hex SHA-256 of the passport id string. Despite the name this is a
    /// locally computed display hash over the identifier, not a ledger entry,
    /// and carries no tamper evidence over the product data.
    pub blockchain_hash: String,
    /// The URL the QR code resolves to: `{base}/passport/{id}`.
    pub qr_url: String,
    /// Rendered QR image as a base64 PNG data URI.
    pub qr_code: String,
    pub product: ProductData,
}

/// Derives a new passport identity for `product`.
///
/// Every call generates a fresh id, so two passports minted from identical
/// product data are distinct and unlinked. `base_url` is the
/// deployment-specific public host, taken from configuration.
pub fn build_passport(product: ProductData, base_url: &str) -> Result<MintedPassport, QrError> {
    let id = Uuid::new_v4();
    let qr_url = passport_url(base_url, id);
    let qr_code = qr::render_data_uri(&qr_url)?;

    Ok(MintedPassport {
        id,
        blockchain_hash: hash_passport_id(id),
        qr_url,
        qr_code,
        product,
    })
}

/// Public passport URL for a given id.
pub fn passport_url(base_url: &str, id: Uuid) -> String {
    format!("{}/passport/{}", base_url.trim_end_matches('/'), id)
}

/// Lowercase hex SHA-256 of the hyphenated id string.
fn hash_passport_id(id: Uuid) -> String {
    let digest = Sha256::digest(id.to_string().as_bytes());
    hex::encode(digest)
}
