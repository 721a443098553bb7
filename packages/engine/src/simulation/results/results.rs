use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Summary handed to the results overlay when a run ends
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResults {
    pub(crate) average_fps: f64,
    pub(crate) min_fps: f64,
    pub(crate) object_count: u32,
    pub(crate) elapsed_seconds: u32,
    pub(crate) score: u32,
}

impl RunResults {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[wasm_bindgen]
impl RunResults {
    #[wasm_bindgen(getter)]
    pub fn average_fps(&self) -> f64 { self.average_fps }
    #[wasm_bindgen(getter)]
    pub fn min_fps(&self) -> f64 { self.min_fps }
    #[wasm_bindgen(getter)]
    pub fn object_count(&self) -> u32 { self.object_count }
    #[wasm_bindgen(getter)]
    pub fn elapsed_seconds(&self) -> u32 { self.elapsed_seconds }
    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 { self.score }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json_js(&self) -> String {
        self.to_json()
    }
}
