//! File Commands
//!
//! Single-shot `FileReader` wrapper for turning a picked file into a data-URL.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Blob, FileReader, ProgressEvent};

use super::js_error_text;
use crate::error::FormError;

type ReadSender = Rc<RefCell<Option<oneshot::Sender<Result<String, String>>>>>;

fn finish(sender: &ReadSender, outcome: Result<String, String>) {
    if let Some(tx) = sender.borrow_mut().take() {
        let _ = tx.send(outcome);
    }
}

/// Read `blob` as `data:<mime>;base64,...`
pub async fn read_as_data_url(blob: &Blob) -> Result<String, FormError> {
    let reader = FileReader::new().map_err(|e| FormError::PhotoRead(js_error_text(&e)))?;
    let (tx, rx) = oneshot::channel();
    let sender: ReadSender = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let sender = sender.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
            let outcome = match reader.result() {
                Ok(value) => value.as_string().ok_or_else(|| "reader returned no text".to_string()),
                Err(e) => Err(js_error_text(&e)),
            };
            finish(&sender, outcome);
        })
    };
    let onerror = {
        let reader = reader.clone();
        let sender = sender.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
            let reason = reader
                .error()
                .map(|e| e.message())
                .unwrap_or_else(|| "unknown read error".to_string());
            finish(&sender, Err(reason));
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(blob)
        .map_err(|e| FormError::PhotoRead(js_error_text(&e)))?;

    let outcome = rx.await;

    // Closures must outlive the read; detach them before they drop
    reader.set_onload(None);
    reader.set_onerror(None);
    drop((onload, onerror));

    match outcome {
        Ok(Ok(url)) => Ok(url),
        Ok(Err(reason)) => Err(FormError::PhotoRead(reason)),
        Err(_) => Err(FormError::PhotoRead("read abandoned".to_string())),
    }
}

/// MIME type embedded in a data-URL
pub fn data_url_mime(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    let header = rest.split(',').next()?;
    let mime = header.split(';').next()?;
    (!mime.is_empty()).then_some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_mime() {
        assert_eq!(data_url_mime("data:image/png;base64,iVBORw0KGgo="), Some("image/png"));
        assert_eq!(data_url_mime("data:image/jpeg;base64,/9j/"), Some("image/jpeg"));
        assert_eq!(data_url_mime("data:;base64,AAAA"), None);
        assert_eq!(data_url_mime("/asset/news/img-1.jpeg"), None);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::BlobPropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn wasm_reads_blob_as_data_url() {
        let parts = js_sys::Array::of1(&JsValue::from_str("fake-png-bytes"));
        let options = BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).expect("blob");

        let url = read_as_data_url(&blob).await.expect("read");
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(data_url_mime(&url), Some("image/png"));
    }
}
