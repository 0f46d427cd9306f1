use serde::{Deserialize, Serialize};

pub const COMPANY_NAME_REQUIRED: &str = "Company name is required";
pub const PERSON_NAME_REQUIRED: &str = "Person name is required";

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Company,
    Person,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Company => "company",
            SearchMode::Person => "person",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanySearchParams {
    pub company_name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonSearchParams {
    pub person_name: String,
    pub company_name: String,
    pub job_title: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
}

/// Raw company form state, exactly as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompanyForm {
    pub company_name: String,
    pub industry: String,
    pub location: String,
}

/// Raw person form state, exactly as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonForm {
    pub person_name: String,
    pub company_name: String,
    pub job_title: String,
    pub location: String,
}

impl CompanyForm {
    pub fn validate(&self) -> Result<CompanySearchParams, FormErrors> {
        let mut errors = FormErrors::default();
        let company_name = non_blank(&self.company_name);
        if company_name.is_none() {
            errors.company_name = Some(COMPANY_NAME_REQUIRED.to_string());
        }

        match company_name {
            Some(company_name) => Ok(CompanySearchParams {
                company_name,
                industry: non_blank(&self.industry),
                location: non_blank(&self.location),
            }),
            None => Err(errors),
        }
    }
}

impl PersonForm {
    pub fn validate(&self) -> Result<PersonSearchParams, FormErrors> {
        let mut errors = FormErrors::default();
        let person_name = non_blank(&self.person_name);
        let company_name = non_blank(&self.company_name);

        if person_name.is_none() {
            errors.person_name = Some(PERSON_NAME_REQUIRED.to_string());
        }
        if company_name.is_none() {
            errors.company_name = Some(COMPANY_NAME_REQUIRED.to_string());
        }

        match (person_name, company_name) {
            (Some(person_name), Some(company_name)) => Ok(PersonSearchParams {
                person_name,
                company_name,
                job_title: non_blank(&self.job_title),
                location: non_blank(&self.location),
            }),
            _ => Err(errors),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    match value.trim() {
        "" => None,
        v => Some(v.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_form_requires_name() {
        let form = CompanyForm {
            company_name: "   ".to_string(),
            industry: "Retail".to_string(),
            location: "".to_string(),
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.company_name.as_deref(), Some(COMPANY_NAME_REQUIRED));
        assert_eq!(errors.person_name, None);
    }

    #[test]
    fn company_form_trims_and_drops_blank_optionals() {
        let form = CompanyForm {
            company_name: "  Kroger ".to_string(),
            industry: "".to_string(),
            location: " Cincinnati, OH ".to_string(),
        };

        let params = form.validate().unwrap();

        assert_eq!(
            params,
            CompanySearchParams {
                company_name: "Kroger".to_string(),
                industry: None,
                location: Some("Cincinnati, OH".to_string()),
            }
        );
    }

    #[test]
    fn person_form_requires_person_and_company() {
        let errors = PersonForm::default().validate().unwrap_err();

        assert_eq!(errors.person_name.as_deref(), Some(PERSON_NAME_REQUIRED));
        assert_eq!(errors.company_name.as_deref(), Some(COMPANY_NAME_REQUIRED));
    }

    #[test]
    fn person_form_rejects_missing_company_only() {
        let form = PersonForm {
            person_name: "Jane Doe".to_string(),
            ..Default::default()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.person_name, None);
        assert_eq!(errors.company_name.as_deref(), Some(COMPANY_NAME_REQUIRED));
    }

    #[test]
    fn person_form_valid() {
        let form = PersonForm {
            person_name: "Jane Doe".to_string(),
            company_name: "Acme Corp".to_string(),
            job_title: "CTO".to_string(),
            location: "".to_string(),
        };

        let params = form.validate().unwrap();

        assert_eq!(params.job_title.as_deref(), Some("CTO"));
        assert_eq!(params.location, None);
    }
}
