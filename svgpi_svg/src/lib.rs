use pathinterp::{Interpolator, Options, PathSampleResult};
use serde::Serialize;

mod error;

pub use crate::error::Error;

/// A JSON job config.
///
/// Keys are camelCase. Missing keys take `pathinterp::Options` defaults.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub trim: bool,
    pub min_distance: f64,
    pub round_to_nearest: f64,
    pub sample_frequency: f64,
    pub join_path_data: bool,
    /// Indent the output JSON.
    pub pretty: bool,
    /// Spaces per level when `pretty` is set. Zero disables indentation.
    pub pretty_indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        let opt = Options::default();
        Config {
            trim: opt.trim,
            min_distance: opt.min_distance,
            round_to_nearest: opt.round_to_nearest,
            sample_frequency: opt.sample_frequency,
            join_path_data: opt.join_path_data,
            pretty: false,
            pretty_indent: 0,
        }
    }
}

impl Config {
    /// Parses a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns the sampling part of the config.
    pub fn to_options(&self) -> Options {
        Options {
            trim: self.trim,
            min_distance: self.min_distance,
            round_to_nearest: self.round_to_nearest,
            sample_frequency: self.sample_frequency,
            join_path_data: self.join_path_data,
        }
    }
}

/// Samples all `path` elements of an SVG document.
///
/// Elements are visited in document order, so results keep the order
/// of `path` elements.
pub fn process_svg_str(svg_str: &str, opt: &Options) -> Result<PathSampleResult, Error> {
    let mut interp = Interpolator::new(opt)?;

    let doc = roxmltree::Document::parse(svg_str)?;
    feed_element(doc.root_element(), &mut interp)?;

    Ok(interp.finish())
}

fn feed_element(node: roxmltree::Node, interp: &mut Interpolator) -> Result<(), Error> {
    let attrs: Vec<(&str, &str)> = node
        .attributes()
        .iter()
        .map(|a| (a.name(), a.value()))
        .collect();

    let name = node.tag_name().name();
    interp.element_start(name, &attrs);

    for child in node.children().filter(|n| n.is_element()) {
        feed_element(child, interp)?;
    }

    interp.element_end(name)?;
    Ok(())
}

/// Serializes a result to JSON text.
///
/// `indent` is used only when `pretty` is set and is not zero.
pub fn to_json(result: &PathSampleResult, pretty: bool, indent: usize) -> Result<String, Error> {
    if !pretty || indent == 0 {
        return Ok(serde_json::to_string(result)?);
    }

    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    result.serialize(&mut ser)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Processes a document with a config and returns the JSON output.
pub fn process_svg_str_to_json(svg_str: &str, config: &Config) -> Result<String, Error> {
    let result = process_svg_str(svg_str, &config.to_options())?;
    log::debug!("Sampled a document. Empty: {}.", result.is_empty());
    to_json(&result, config.pretty, config.pretty_indent)
}
