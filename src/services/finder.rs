use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{CompanySearchParams, DomainResult, EmailResult, PersonSearchParams};

use super::{
    company_domain_prompt, extract_sources, parse_model_json, person_email_prompt, GroundedModel,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupKind {
    Domain,
    Email,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Domain => f.write_str("domain"),
            LookupKind::Email => f.write_str("email"),
        }
    }
}

/// What the user gets told. Upstream details only go to the log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinderError {
    #[error("Received malformed data from AI. Please try again.")]
    MalformedResponse,

    #[error("Failed to retrieve {0} information. Please try again.")]
    RequestFailed(LookupKind),
}

pub struct Finder {
    model: Box<dyn GroundedModel>,
}

impl Finder {
    pub fn new(model: impl GroundedModel + 'static) -> Self {
        Finder {
            model: Box::new(model),
        }
    }

    pub async fn find_company_domain(
        &self,
        params: &CompanySearchParams,
    ) -> Result<DomainResult, FinderError> {
        let request_id = Uuid::new_v4();
        log::info!(
            "[{}] Finding domain for company: {}",
            request_id,
            params.company_name
        );

        let prompt = company_domain_prompt(params);
        let response = self.model.generate_grounded(&prompt).await.map_err(|e| {
            log::error!("[{}] Error finding domain: {}", request_id, e);
            FinderError::RequestFailed(LookupKind::Domain)
        })?;

        let mut result: DomainResult = parse_model_json(&response).map_err(|(e, text)| {
            log::error!("[{}] JSON parse error: {}, text: {}", request_id, e, text);
            FinderError::MalformedResponse
        })?;
        result.sources = extract_sources(&response);

        log::info!(
            "[{}] Found domain {} with {} confidence",
            request_id,
            result.domain,
            result.confidence
        );
        Ok(result)
    }

    pub async fn find_person_email(
        &self,
        params: &PersonSearchParams,
    ) -> Result<EmailResult, FinderError> {
        let request_id = Uuid::new_v4();
        log::info!(
            "[{}] Finding email for {} at {}",
            request_id,
            params.person_name,
            params.company_name
        );

        let prompt = person_email_prompt(params);
        let response = self.model.generate_grounded(&prompt).await.map_err(|e| {
            log::error!("[{}] Error finding email: {}", request_id, e);
            FinderError::RequestFailed(LookupKind::Email)
        })?;

        let mut result: EmailResult = parse_model_json(&response).map_err(|(e, text)| {
            log::error!("[{}] JSON parse error: {}, text: {}", request_id, e, text);
            FinderError::MalformedResponse
        })?;
        result.sources = extract_sources(&response);

        log::info!(
            "[{}] Found email {} with {} confidence",
            request_id,
            result.email,
            result.confidence
        );
        Ok(result)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::StubModel;
    use super::*;
    use crate::domain::Confidence;

    fn company() -> CompanySearchParams {
        CompanySearchParams {
            company_name: "Kroger".to_string(),
            industry: None,
            location: None,
        }
    }

    fn person() -> PersonSearchParams {
        PersonSearchParams {
            person_name: "Jane Doe".to_string(),
            company_name: "Acme Corp".to_string(),
            job_title: None,
            location: None,
        }
    }

    #[tokio::test]
    async fn domain_lookup_attaches_sources() {
        let model = StubModel::replying(
            "```json\n{\"domain\": \"thekrogerco.com\", \"confidence\": \"High\", \"reasoning\": \"Corporate site\", \"alternatives\": [\"kroger.com\"]}\n```",
        );
        let finder = Finder::new(model.clone());

        let result = finder.find_company_domain(&company()).await.unwrap();

        assert_eq!(result.domain, "thekrogerco.com");
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources[0].uri, "https://example.com/about");
        assert_eq!(model.call_count(), 1);
        assert!(model.prompts.lock().unwrap()[0].contains("\"Kroger\""));
    }

    #[tokio::test]
    async fn email_lookup_keeps_pattern() {
        let model = StubModel::replying(
            r#"{"email": "jane.doe@acme.com", "confidence": "Medium", "reasoning": "Deduced from pattern", "pattern": "{first}.{last}@acme.com"}"#,
        );
        let finder = Finder::new(model);

        let result = finder.find_person_email(&person()).await.unwrap();

        assert_eq!(result.email, "jane.doe@acme.com");
        assert_eq!(result.deduced_pattern(), Some("{first}.{last}@acme.com"));
    }

    #[tokio::test]
    async fn unknown_confidence_label_still_yields_result() {
        let finder = Finder::new(StubModel::replying(
            r#"{"domain": "acme.com", "confidence": "Very High", "reasoning": "Only match"}"#,
        ));

        let result = finder.find_company_domain(&company()).await.unwrap();

        assert_eq!(result.domain, "acme.com");
        assert_eq!(result.confidence, Confidence::Other("Very High".to_string()));
    }

    #[tokio::test]
    async fn invalid_json_is_malformed() {
        let finder = Finder::new(StubModel::replying("Sorry, I could not find it."));

        let err = finder.find_company_domain(&company()).await.unwrap_err();

        assert_eq!(err, FinderError::MalformedResponse);
        assert_eq!(
            err.to_string(),
            "Received malformed data from AI. Please try again."
        );
    }

    #[tokio::test]
    async fn transport_failure_is_request_failed() {
        let finder = Finder::new(StubModel::failing());

        let domain_err = finder.find_company_domain(&company()).await.unwrap_err();
        let email_err = finder.find_person_email(&person()).await.unwrap_err();

        assert_eq!(
            domain_err.to_string(),
            "Failed to retrieve domain information. Please try again."
        );
        assert_eq!(
            email_err.to_string(),
            "Failed to retrieve email information. Please try again."
        );
    }
}
