//! Descarga CSV (WASM)
//!
//! Arma el CSV en Rust y lo entrega al navegador como descarga de un Blob.

use catastro_common::export::{csv_file_name, record_to_csv, CSV_MIME};
use catastro_common::FormRecord;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Blob con `csv` y el tipo MIME de CSV.
pub fn csv_blob(csv: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Blob creation failed: {:?}", e))
}

/// Guarda `record` como `Orden_Trabajo_<clave>.csv` desde el navegador.
pub fn download_csv(record: &FormRecord) -> Result<String, String> {
    let file_name = csv_file_name(record);
    let blob = csv_blob(&record_to_csv(record))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Object URL failed: {:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "Anchor cast failed".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&file_name);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(file_name)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_csv_blob_has_csv_type_and_size() {
        let csv = "nombre,clave\n\"Casa A\",\"AB-12\"";
        let blob = csv_blob(csv).expect("blob");
        assert_eq!(blob.size() as usize, csv.len());
        assert!(blob.type_().starts_with("text/csv"));
    }
}
