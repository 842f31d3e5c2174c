mod utils;
use js_sys::Float64Array;

use wasm_bindgen::prelude::*;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
  JsValue::from_str(&e.to_string())
}

fn parse_config(config_json: &str) -> Result<svgpi_svg::Config, JsValue> {
  if config_json.trim().is_empty() {
    return Ok(svgpi_svg::Config::default());
  }

  svgpi_svg::Config::from_json(config_json).map_err(to_js_error)
}

/// Samples all paths of a document and returns the JSON result.
///
/// An empty config string uses defaults.
#[wasm_bindgen]
pub fn js_process_svg(svg: &str, config_json: &str) -> Result<String, JsValue> {
  let config = parse_config(config_json)?;
  svgpi_svg::process_svg_str_to_json(svg, &config).map_err(to_js_error)
}

/// Samples a single path data string into `[x0, y0, x1, y1, ...]`.
///
/// Only sampling keys of the config are used.
#[wasm_bindgen]
pub fn js_interpolate_path(data: &str, config_json: &str) -> Result<Float64Array, JsValue> {
  let config = parse_config(config_json)?;
  let cfg = config.to_options().sample_config().map_err(to_js_error)?;
  let values = pathinterp::interpolate_path(data, &cfg);
  Ok(Float64Array::from(&values[..]))
}

#[wasm_bindgen]
pub fn js_init(){
  utils::set_panic_hook();
}
