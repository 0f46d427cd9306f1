use actix_web::{http::StatusCode, post, web, HttpResponse};

use crate::{
    domain::{CompanyForm, FormErrors, PersonForm, SearchResult},
    services::Finder,
};

use super::views::{render, ResultTemplate, SearchTemplate};

#[post("/company")]
pub async fn search_company(
    finder: web::Data<Finder>,
    form: web::Form<CompanyForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let params = match form.validate() {
        Ok(params) => params,
        Err(errors) => {
            return render(
                StatusCode::BAD_REQUEST,
                SearchTemplate::company(&form, errors, None),
            )
        }
    };

    match finder.find_company_domain(&params).await {
        Ok(result) => render(
            StatusCode::OK,
            ResultTemplate::from(SearchResult::from(result)),
        ),
        Err(e) => render(
            StatusCode::BAD_GATEWAY,
            SearchTemplate::company(&form, FormErrors::default(), Some(e.to_string())),
        ),
    }
}

#[post("/person")]
pub async fn search_person(
    finder: web::Data<Finder>,
    form: web::Form<PersonForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let params = match form.validate() {
        Ok(params) => params,
        Err(errors) => {
            return render(
                StatusCode::BAD_REQUEST,
                SearchTemplate::person(&form, errors, None),
            )
        }
    };

    match finder.find_person_email(&params).await {
        Ok(result) => render(
            StatusCode::OK,
            ResultTemplate::from(SearchResult::from(result)),
        ),
        Err(e) => render(
            StatusCode::BAD_GATEWAY,
            SearchTemplate::person(&form, FormErrors::default(), Some(e.to_string())),
        ),
    }
}
