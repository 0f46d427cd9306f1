use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use askama::Template;
use url::Url;

use crate::domain::{
    CompanyForm, Confidence, FormErrors, PersonForm, SearchMode, SearchResult, Source,
};

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub mode: &'static str,
    pub is_person: bool,
    pub person_name: String,
    pub company_name: String,
    pub industry: String,
    pub job_title: String,
    pub location: String,
    pub person_name_error: String,
    pub company_name_error: String,
    pub error: String,
}

impl SearchTemplate {
    pub fn empty(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Company => Self::company(&CompanyForm::default(), FormErrors::default(), None),
            SearchMode::Person => Self::person(&PersonForm::default(), FormErrors::default(), None),
        }
    }

    pub fn company(form: &CompanyForm, errors: FormErrors, error: Option<String>) -> Self {
        SearchTemplate {
            mode: SearchMode::Company.as_str(),
            is_person: false,
            person_name: String::new(),
            company_name: form.company_name.clone(),
            industry: form.industry.clone(),
            job_title: String::new(),
            location: form.location.clone(),
            person_name_error: String::new(),
            company_name_error: errors.company_name.unwrap_or_default(),
            error: error.unwrap_or_default(),
        }
    }

    pub fn person(form: &PersonForm, errors: FormErrors, error: Option<String>) -> Self {
        SearchTemplate {
            mode: SearchMode::Person.as_str(),
            is_person: true,
            person_name: form.person_name.clone(),
            company_name: form.company_name.clone(),
            industry: String::new(),
            job_title: form.job_title.clone(),
            location: form.location.clone(),
            person_name_error: errors.person_name.unwrap_or_default(),
            company_name_error: errors.company_name.unwrap_or_default(),
            error: error.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub mode: &'static str,
    pub is_email: bool,
    pub value: String,
    pub href: String,
    pub confidence: String,
    pub confidence_class: &'static str,
    pub reasoning: String,
    pub pattern: String,
    pub alternatives: Vec<String>,
    pub sources: Vec<Source>,
}

impl From<SearchResult> for ResultTemplate {
    fn from(result: SearchResult) -> Self {
        let confidence = result.confidence().to_string();
        let confidence_class = confidence_class(result.confidence());
        let sources = result.sources().to_vec();

        match result {
            SearchResult::Domain(domain) => ResultTemplate {
                mode: SearchMode::Company.as_str(),
                is_email: false,
                href: website_url(&domain.domain).unwrap_or_default(),
                value: domain.domain,
                confidence,
                confidence_class,
                reasoning: domain.reasoning,
                pattern: String::new(),
                alternatives: domain.alternatives,
                sources,
            },
            SearchResult::Email(email) => ResultTemplate {
                mode: SearchMode::Person.as_str(),
                is_email: true,
                href: format!("mailto:{}", email.email),
                pattern: email.deduced_pattern().unwrap_or_default().to_string(),
                value: email.email,
                confidence,
                confidence_class,
                reasoning: email.reasoning,
                alternatives: vec![],
                sources,
            },
        }
    }
}

fn confidence_class(confidence: &Confidence) -> &'static str {
    match confidence {
        Confidence::High => "high",
        Confidence::Medium => "medium",
        Confidence::Low => "low",
        Confidence::Other(_) => "unknown",
    }
}

/// Link for the returned domain. Bare hosts get `https://`; values that
/// already carry an http(s) scheme are used as given.
fn website_url(domain: &str) -> Option<String> {
    let domain = domain.trim();
    let url = match domain.contains("://") {
        true => Url::parse(domain).ok()?,
        false => Url::parse(&format!("https://{}", domain)).ok()?,
    };

    match url.scheme() {
        "http" | "https" => {
            url.host_str()?;
            Some(url.to_string())
        }
        _ => None,
    }
}

pub fn render<T: Template>(status: StatusCode, template: T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body),
        Err(e) => {
            log::error!("Failed to render template: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
