/// Read the response body as text, rejecting unsuccessful statuses first.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, crate::core::FxError> {
    if !resp.status().is_success() {
        return Err(crate::core::FxError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    Ok(resp.text().await?)
}
