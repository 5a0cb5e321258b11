//! Скачивание отчётов: ответ сервера заворачивается в Blob и сохраняется
//! через временную ссылку
use crate::shared::api_utils::fetch_bytes;
use crate::shared::config::app_config;
use contracts::shared::api_error::ApiError;
use contracts::shared::reports::ReportKind;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Запрашивает отчёт и инициирует скачивание файла
pub async fn download_report(kind: &ReportKind) -> Result<(), ApiError> {
    let url = kind.url(&app_config().endpoints.reports);
    log::debug!("Requesting report {}", url);

    let bytes = fetch_bytes(&url).await?;
    let blob = create_blob(&bytes).map_err(ApiError::Decode)?;
    download_blob(&blob, kind.file_name()).map_err(ApiError::Decode)?;

    log::info!("Report '{}' downloaded ({} bytes)", kind.file_name(), bytes.len());
    Ok(())
}

fn create_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/octet-stream");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
