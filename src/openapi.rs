use crate::{
    api::routes::docs::{donate_docs, health_docs},
    constants::DEFAULT_DONATE_BASE_PATH,
    models,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    tags((name = "Donate"), (name = "Health")),
    info(description = "Solana donate action API", version = "0.1.0", title = "Solana Donate Action API"),
    paths(
        donate_docs::doc_list_donate_actions,
        donate_docs::doc_get_donate_action,
        donate_docs::doc_create_default_donate_transaction,
        donate_docs::doc_create_donate_transaction,
        health_docs::doc_health,
    ),
    components(schemas(
        models::ActionGetResponse,
        models::ActionLinks,
        models::LinkedAction,
        models::ActionParameter,
        models::ActionPostRequest,
        models::ActionPostResponse,
        models::ActionError
    ))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Builds the document with the donate paths moved from the default
    /// mount point to `base_path`.
    pub fn for_base_path(base_path: &str) -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        let paths = std::mem::take(&mut doc.paths.paths);
        doc.paths.paths = paths
            .into_iter()
            .map(|(path, item)| (rebase_path(&path, base_path), item))
            .collect();
        doc
    }
}

fn rebase_path(path: &str, base_path: &str) -> String {
    match path.strip_prefix(DEFAULT_DONATE_BASE_PATH) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let rebased = format!("{}{}", base_path, rest);
            if rebased.is_empty() {
                "/".to_string()
            } else {
                rebased
            }
        }
        _ => path.to_string(),
    }
}
