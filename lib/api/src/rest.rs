use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use symptomdx_core::{Error, Metric, PredictRequest, DEFAULT_K};
use symptomdx_storage::DataStore;
use tracing::{debug, warn};

const MAX_PAGE_SIZE: usize = 1000;

/// Request defaults applied when a body omits `k` or `metric`
#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    pub default_k: usize,
    pub default_metric: Metric,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_k: DEFAULT_K,
            default_metric: Metric::Hamming,
        }
    }
}

#[derive(Deserialize)]
struct PredictBody {
    symptoms: Vec<String>,
    k: Option<i64>,
    metric: Option<String>,
}

impl PredictBody {
    fn to_request(&self, config: &ApiConfig) -> symptomdx_core::Result<PredictRequest> {
        let metric = match self.metric.as_deref() {
            Some(name) => name.parse()?,
            None => config.default_metric,
        };
        let k = self
            .k
            .map(|k| usize::try_from(k.max(1)).unwrap_or(usize::MAX))
            .unwrap_or(config.default_k);
        Ok(PredictRequest {
            symptoms: self.symptoms.clone(),
            k,
            metric,
        })
    }
}

#[derive(Deserialize)]
struct BatchBody {
    requests: Vec<PredictBody>,
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<usize>,
    page_size: Option<usize>,
}

#[derive(Serialize)]
struct SymptomList<'a> {
    count: usize,
    symptoms: &'a [String],
    /// Sorted by symptom for stable output
    severity: BTreeMap<&'a str, i64>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        store: Arc<DataStore>,
        config: ApiConfig,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(store.clone()))
                .app_data(web::Data::new(config))
                .configure(RestApi::routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Route table, shared by the server and handler tests
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .route("/symptoms", web::get().to(list_symptoms))
            .route("/predict", web::post().to(predict))
            .route("/predict/batch", web::post().to(predict_batch))
            .route("/dataset/paginated", web::get().to(dataset_paginated))
            .route("/diseases/{name}", web::get().to(get_disease));
    }
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        Error::InvalidMetric(_) | Error::NoRecognizedSymptoms => HttpResponse::BadRequest().json(body),
        _ => {
            warn!("Prediction failed: {}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}

async fn list_symptoms(store: web::Data<Arc<DataStore>>) -> ActixResult<HttpResponse> {
    let vocabulary = store.dataset().vocabulary();
    Ok(HttpResponse::Ok().json(SymptomList {
        count: vocabulary.len(),
        symptoms: vocabulary.as_slice(),
        severity: store
            .knowledge()
            .severity_map()
            .iter()
            .map(|(symptom, weight)| (symptom.as_str(), *weight))
            .collect(),
    }))
}

async fn predict(
    store: web::Data<Arc<DataStore>>,
    config: web::Data<ApiConfig>,
    req: web::Json<PredictBody>,
) -> ActixResult<HttpResponse> {
    let request = match req.to_request(&config) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(&e)),
    };

    match store.predict(&request) {
        Ok(prediction) => {
            debug!(
                "Predicted {} from {} symptoms ({} ignored)",
                prediction.predicted,
                prediction.used.len(),
                prediction.ignored.len()
            );
            Ok(HttpResponse::Ok().json(prediction))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

async fn predict_batch(
    store: web::Data<Arc<DataStore>>,
    config: web::Data<ApiConfig>,
    req: web::Json<BatchBody>,
) -> ActixResult<HttpResponse> {
    let parsed: Vec<symptomdx_core::Result<PredictRequest>> = req
        .requests
        .iter()
        .map(|body| body.to_request(&config))
        .collect();
    let valid: Vec<PredictRequest> = parsed
        .iter()
        .filter_map(|r| r.as_ref().ok().cloned())
        .collect();
    let mut predictions = store.predict_batch(&valid).into_iter();

    let results: Vec<serde_json::Value> = parsed
        .into_iter()
        .map(|parsed| {
            let outcome = parsed.and_then(|_| {
                predictions
                    .next()
                    .unwrap_or(Err(Error::InvalidDataset("batch result missing".to_string())))
            });
            match outcome {
                Ok(prediction) => serde_json::to_value(prediction)
                    .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() })),
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({ "results": results })))
}

async fn dataset_paginated(
    store: web::Data<Arc<DataStore>>,
    query: web::Query<PageQuery>,
) -> ActixResult<HttpResponse> {
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(50);

    if page < 1 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "page must be >= 1"
        })));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("page_size must be between 1 and {}", MAX_PAGE_SIZE)
        })));
    }

    Ok(HttpResponse::Ok().json(store.table().paginate(page, page_size)))
}

async fn get_disease(
    store: web::Data<Arc<DataStore>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();

    match store.knowledge().info(&name) {
        Some(info) => Ok(HttpResponse::Ok().json(info)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Disease not found"
        }))),
    }
}
