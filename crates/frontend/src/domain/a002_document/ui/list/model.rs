//! Documents - Model (API functions)

use crate::domain::a001_chat_session::ChatContext;
use crate::shared::error::ApiError;
use contracts::domain::a002_document::{
    DocumentListResponse, DOCUMENTS_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use contracts::shared::{ActionOutcome, ActionResponse};
use gloo_net::http::{Request, Response};
use web_sys::FormData;

/// `/documents/{name}` with the name escaped as one path segment.
pub fn document_path(name: &str) -> String {
    format!("{}/{}", DOCUMENTS_PATH, urlencoding::encode(name))
}

async fn read_action(response: Response) -> Result<ActionOutcome, ApiError> {
    // the server answers {"error": ...} with 4xx/5xx, so the body is read regardless
    let data: ActionResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(data.outcome())
}

/// Получить список документов
pub async fn fetch_documents(ctx: &ChatContext) -> Result<Vec<String>, ApiError> {
    let response = Request::get(&ctx.url(DOCUMENTS_PATH)).send().await?;
    let data: DocumentListResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(data.documents)
}

/// Удалить документ
pub async fn delete_document(ctx: &ChatContext, name: &str) -> Result<ActionOutcome, ApiError> {
    let response = Request::delete(&ctx.url(&document_path(name)))
        .send()
        .await?;
    read_action(response).await
}

/// Загрузить файл
pub async fn upload_document(ctx: &ChatContext, file: &web_sys::File) -> Result<ActionOutcome, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let response = Request::post(&ctx.url(UPLOAD_PATH))
        .body(form_data)?
        .send()
        .await?;
    read_action(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path_escapes_segment() {
        assert_eq!(document_path("report.pdf"), "/documents/report.pdf");
        assert_eq!(document_path("a b/c?.txt"), "/documents/a%20b%2Fc%3F.txt");
        assert_eq!(
            document_path("안내.pdf"),
            "/documents/%EC%95%88%EB%82%B4.pdf"
        );
    }
}
