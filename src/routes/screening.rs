use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{ScreenError, Screener};
use crate::models::{
    Disease, ErrorResponse, FieldView, FormResponse, FormSummary, FormsResponse, HealthResponse,
    PredictRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub screener: Screener,
    pub model_names: Vec<String>,
}

/// Configure all screening-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/forms", web::get().to(list_forms))
        .route("/forms/{disease}", web::get().to(form_schema))
        .route("/predict/{disease}", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        models: state.model_names.clone(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the available screening forms
///
/// GET /api/v1/forms
async fn list_forms() -> impl Responder {
    let forms = Disease::ALL
        .iter()
        .map(|disease| FormSummary {
            disease: *disease,
            slug: disease.slug().to_string(),
            menu_label: disease.menu_label().to_string(),
            field_count: disease.fields().len(),
        })
        .collect();

    HttpResponse::Ok().json(FormsResponse { forms })
}

/// Return the ordered field schema for one form
///
/// GET /api/v1/forms/{disease}
async fn form_schema(path: web::Path<String>) -> impl Responder {
    let disease = match parse_disease(&path) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    HttpResponse::Ok().json(FormResponse {
        disease,
        slug: disease.slug().to_string(),
        title: disease.title().to_string(),
        fields: disease
            .fields()
            .iter()
            .map(|f| FieldView {
                name: f.name.to_string(),
                prompt: f.prompt.to_string(),
            })
            .collect(),
    })
}

/// Run one screening
///
/// POST /api/v1/predict/{disease}
///
/// Request body:
/// ```json
/// {
///   "values": ["6", "148", "72", ...]
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    let disease = match parse_disease(&path) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    if let Err(errors) = req.validate() {
        tracing::info!(disease = %disease.slug(), "Validation failed for predict request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.screener.screen(disease, &req.values) {
        Ok(screening) => {
            tracing::info!(
                disease = %disease.slug(),
                label = screening.label,
                "Screening complete"
            );
            HttpResponse::Ok().json(screening)
        }
        Err(err) if err.is_user_error() => {
            tracing::info!(disease = %disease.slug(), "Rejected screening input: {}", err);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: error_kind(&err).to_string(),
                message: err.to_string(),
                status_code: 400,
            })
        }
        Err(err) => {
            tracing::error!(disease = %disease.slug(), "Screening failed: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "prediction_failed".to_string(),
                message: "Unexpected error during prediction".to_string(),
                status_code: 500,
            })
        }
    }
}

fn parse_disease(slug: &str) -> Result<Disease, HttpResponse> {
    Disease::from_slug(slug).ok_or_else(|| {
        HttpResponse::NotFound().json(ErrorResponse {
            error: "unknown_disease".to_string(),
            message: format!("Unknown disease form: {}", slug),
            status_code: 404,
        })
    })
}

fn error_kind(err: &ScreenError) -> &'static str {
    match err {
        ScreenError::FieldCountMismatch { .. } => "field_count_mismatch",
        ScreenError::EmptyFields(_) => "empty_fields",
        ScreenError::NotNumeric { .. } => "not_numeric",
        ScreenError::UnexpectedLabel(_) | ScreenError::Inference(_) => "prediction_failed",
    }
}
