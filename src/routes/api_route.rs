use actix_web::{post, web, HttpResponse};
use serde::Serialize;

use crate::{
    domain::{CompanyForm, FormErrors, PersonForm, SearchResult},
    services::{Finder, FinderError},
};

#[derive(Serialize)]
struct ValidationErrorBody {
    errors: FormErrors,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn lookup_response<T: Into<SearchResult>>(result: Result<T, FinderError>) -> HttpResponse {
    match result {
        Ok(result) => {
            let result: SearchResult = result.into();
            HttpResponse::Ok().json(result)
        }
        Err(e) => HttpResponse::BadGateway().json(ErrorBody {
            error: e.to_string(),
        }),
    }
}

#[post("/company-domain")]
pub async fn company_domain(
    finder: web::Data<Finder>,
    body: web::Json<CompanyForm>,
) -> HttpResponse {
    match body.validate() {
        Ok(params) => lookup_response(finder.find_company_domain(&params).await),
        Err(errors) => HttpResponse::BadRequest().json(ValidationErrorBody { errors }),
    }
}

#[post("/person-email")]
pub async fn person_email(
    finder: web::Data<Finder>,
    body: web::Json<PersonForm>,
) -> HttpResponse {
    match body.validate() {
        Ok(params) => lookup_response(finder.find_person_email(&params).await),
        Err(errors) => HttpResponse::BadRequest().json(ValidationErrorBody { errors }),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web::Data, App};
    use serde_json::{json, Value};

    use crate::{
        services::{finder::test_support::StubModel, Finder},
        startup::routes,
    };

    async fn post_json(model: &StubModel, uri: &str, body: Value) -> (u16, Value) {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(Finder::new(model.clone())))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status().as_u16();

        (status, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn company_domain_returns_tagged_result() {
        let model = StubModel::replying(
            r#"{"domain": "aboutamazon.com", "confidence": "high", "reasoning": "Corporate site", "alternatives": ["amazon.com"]}"#,
        );

        let (status, body) = post_json(
            &model,
            "/api/company-domain",
            json!({"company_name": "Amazon"}),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["type"], "domain");
        assert_eq!(body["domain"], "aboutamazon.com");
        assert_eq!(body["confidence"], "High");
        assert_eq!(body["alternatives"], json!(["amazon.com"]));
        assert_eq!(
            body["sources"],
            json!([{"title": "example.com", "uri": "https://example.com/about"}])
        );
        assert!(body.get("pattern").is_none());
    }

    #[actix_web::test]
    async fn person_email_validation_errors_are_listed() {
        let model = StubModel::replying("{}");

        let (status, body) = post_json(&model, "/api/person-email", json!({})).await;

        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({"errors": {
                "company_name": "Company name is required",
                "person_name": "Person name is required"
            }})
        );
        assert_eq!(model.call_count(), 0);
    }

    #[actix_web::test]
    async fn person_email_malformed_reply() {
        let model = StubModel::replying("{\"email\": ");

        let (status, body) = post_json(
            &model,
            "/api/person-email",
            json!({"person_name": "Jane Doe", "company_name": "Acme Corp"}),
        )
        .await;

        assert_eq!(status, 502);
        assert_eq!(
            body,
            json!({"error": "Received malformed data from AI. Please try again."})
        );
    }
}
