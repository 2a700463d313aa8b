//! KYC verification queue models.

use chrono::{DateTime, Utc};
use kirazee_core::params::ParamChoice;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Kind of entity submitting documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum KycSubjectType {
    Business,
    DeliveryPartner,
}

/// Queue filter accepted by `/api/kyc/pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KycTypeFilter {
    Business,
    DeliveryPartner,
    #[default]
    All,
}

impl KycTypeFilter {
    pub fn matches(self, subject: KycSubjectType) -> bool {
        match self {
            KycTypeFilter::All => true,
            KycTypeFilter::Business => subject == KycSubjectType::Business,
            KycTypeFilter::DeliveryPartner => subject == KycSubjectType::DeliveryPartner,
        }
    }
}

impl ParamChoice for KycTypeFilter {
    const ALL: &'static [Self] = &[
        KycTypeFilter::Business,
        KycTypeFilter::DeliveryPartner,
        KycTypeFilter::All,
    ];

    fn as_str(self) -> &'static str {
        match self {
            KycTypeFilter::Business => "business",
            KycTypeFilter::DeliveryPartner => "delivery_partner",
            KycTypeFilter::All => "all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KycDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Verification {
    pub id: String,
    #[serde(rename = "type")]
    pub subject_type: KycSubjectType,
    pub name: String,
    pub documents: Vec<KycDocument>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PendingVerificationsResponse {
    pub verifications: Vec<Verification>,
}

/// Raw query string for `/api/kyc/pending`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KycPendingQuery {
    /// business, delivery_partner or all (default all)
    #[serde(rename = "type")]
    pub kyc_type: Option<String>,
}

/// Approve or reject a pending verification.
///
/// Fields are checked by the handler rather than by `validator` so each
/// failure gets its own message.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct KycVerifyRequest {
    /// "approve" or "reject"
    #[serde(default)]
    #[schema(example = "reject")]
    pub action: String,
    /// Required when rejecting; at most 500 characters
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum KycDecision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KycVerifyResponse {
    pub message: String,
    pub verification_id: String,
    pub status: KycDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_matches() {
        assert!(KycTypeFilter::All.matches(KycSubjectType::Business));
        assert!(KycTypeFilter::All.matches(KycSubjectType::DeliveryPartner));
        assert!(KycTypeFilter::Business.matches(KycSubjectType::Business));
        assert!(!KycTypeFilter::Business.matches(KycSubjectType::DeliveryPartner));
    }

    #[test]
    fn test_verification_uses_type_key() {
        let v = Verification {
            id: "KYC-2001".to_string(),
            subject_type: KycSubjectType::DeliveryPartner,
            name: "Partner 1".to_string(),
            documents: vec![],
            submitted_at: Utc::now(),
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "delivery_partner");
    }

    #[test]
    fn test_verify_request_defaults() {
        let request: KycVerifyRequest = serde_json::from_str("{}").unwrap();
        assert!(request.action.is_empty());
        assert!(request.reason.is_none());
    }

    #[test]
    fn test_verify_response_omits_reason_on_approve() {
        let response = KycVerifyResponse {
            message: "Verification processed successfully".to_string(),
            verification_id: "KYC-2000".to_string(),
            status: KycDecision::Approved,
            reason: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "approved");
        assert!(json.get("reason").is_none());
    }
}
