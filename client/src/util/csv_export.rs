//! CSV export of the currently filtered table rows.
//!
//! Rows are encoded with the `csv` writer so commas and quotes inside cells
//! survive, then handed to the browser as a `text/csv` download.

#[cfg(test)]
#[path = "csv_export_test.rs"]
mod csv_export_test;

/// Failure building or delivering an export.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Encode(String),
    #[error("download failed: {0}")]
    Download(String),
}

/// Encode a header row plus data rows.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] if the writer rejects a record.
pub fn to_csv<R, C>(headers: &[&str], rows: R) -> Result<String, ExportError>
where
    R: IntoIterator<Item = Vec<C>>,
    C: AsRef<str>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers).map_err(|e| ExportError::Encode(e.to_string()))?;
    for row in rows {
        let record: Vec<&str> = row.iter().map(AsRef::<str>::as_ref).collect();
        writer.write_record(&record).map_err(|e| ExportError::Encode(e.to_string()))?;
    }
    let bytes = writer.into_inner().map_err(|e| ExportError::Encode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Encode(e.to_string()))
}

/// `{prefix}-{YYYY-MM-DD}.csv` for the given ISO date.
pub fn export_filename(prefix: &str, iso_date: &str) -> String {
    let day = iso_date.split('T').next().unwrap_or(iso_date);
    format!("{prefix}-{day}.csv")
}

/// Today's date in ISO form, or an empty string outside the browser.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Offer `content` to the user as a file download.
///
/// # Errors
///
/// Returns [`ExportError::Download`] when the browser refuses any step.
pub fn download(filename: &str, content: &str) -> Result<(), ExportError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let fail = |e: wasm_bindgen::JsValue| ExportError::Download(format!("{e:?}"));
        let window = web_sys::window().ok_or_else(|| ExportError::Download("no window".to_owned()))?;
        let document = window.document().ok_or_else(|| ExportError::Download("no document".to_owned()))?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(fail)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(fail)?;

        let anchor = document
            .create_element("a")
            .map_err(fail)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Download("anchor cast failed".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, content);
        Err(ExportError::Download("not available on server".to_owned()))
    }
}

/// Encode and download in one step. Returns the number of exported rows.
///
/// # Errors
///
/// Propagates encoding and download failures.
pub fn export_rows(prefix: &str, headers: &[&str], rows: Vec<Vec<String>>) -> Result<usize, ExportError> {
    let count = rows.len();
    let content = to_csv(headers, rows)?;
    download(&export_filename(prefix, &today_iso()), &content)?;
    Ok(count)
}
