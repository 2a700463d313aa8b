use anyhow::anyhow;
use chrono::{Duration, Utc};
use tracing::{info, instrument};

use kirazee_core::AppError;
use kirazee_core::sanitize::sanitize_string;
use kirazee_models::kyc::{
    KycDecision, KycDocument, KycSubjectType, KycTypeFilter, KycVerifyRequest, KycVerifyResponse,
    Verification,
};
use kirazee_observability::track_kyc_decision;

const SAMPLE_QUEUE_SIZE: u32 = 13;
const MAX_VERIFICATION_ID_LENGTH: usize = 100;
const MAX_REASON_LENGTH: usize = 500;

fn pending_queue() -> Vec<Verification> {
    let now = Utc::now();
    (0..SAMPLE_QUEUE_SIZE)
        .map(|i| {
            let submitted_at = now - Duration::days(i64::from(i));
            let (subject_type, name) = if i % 2 == 0 {
                (KycSubjectType::Business, format!("Business {i}"))
            } else {
                (KycSubjectType::DeliveryPartner, format!("Partner {i}"))
            };

            Verification {
                id: format!("KYC-{}", 2000 + i),
                subject_type,
                name,
                documents: vec![KycDocument {
                    doc_type: "id_proof".to_string(),
                    url: format!("/documents/id_{i}.pdf"),
                    uploaded_at: submitted_at,
                }],
                submitted_at,
            }
        })
        .collect()
}

pub struct KycService;

impl KycService {
    pub fn pending(filter: KycTypeFilter) -> Vec<Verification> {
        pending_queue()
            .into_iter()
            .filter(|v| filter.matches(v.subject_type))
            .collect()
    }

    /// Validates and records an approve/reject decision.
    ///
    /// Checks run in order: verification id, action, reason format, then
    /// reason presence for rejections.
    #[instrument(skip(request))]
    pub fn decide(
        verification_id: &str,
        request: KycVerifyRequest,
    ) -> Result<KycVerifyResponse, AppError> {
        let verification_id = sanitize_string(verification_id, MAX_VERIFICATION_ID_LENGTH)
            .map_err(|_| AppError::bad_request(anyhow!("Invalid verification ID")))?;

        let decision = match request.action.as_str() {
            "approve" => KycDecision::Approved,
            "reject" => KycDecision::Rejected,
            _ => {
                return Err(AppError::bad_request(anyhow!(
                    r#"Invalid action. Must be "approve" or "reject""#
                )));
            }
        };

        let reason = match request.reason.as_deref().filter(|r| !r.is_empty()) {
            Some(raw) => Some(
                sanitize_string(raw, MAX_REASON_LENGTH)
                    .map_err(|_| AppError::bad_request(anyhow!("Invalid reason format")))?,
            )
            .filter(|r| !r.is_empty()),
            None => None,
        };

        let (status, reason) = match decision {
            KycDecision::Approved => ("approved", None),
            KycDecision::Rejected => {
                let reason = reason.ok_or_else(|| {
                    AppError::bad_request(anyhow!("Reason is required for rejection"))
                })?;
                ("rejected", Some(reason))
            }
        };

        track_kyc_decision(status);
        info!(verification_id = %verification_id, status, "KYC verification processed");

        Ok(KycVerifyResponse {
            message: "Verification processed successfully".to_string(),
            verification_id,
            status: decision,
            reason,
        })
    }
}
