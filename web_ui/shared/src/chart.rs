//! The sentiment pie chart, drawn by the Chart.js global the host page loads.

use js_sys::{Array, Reflect};
use sentiment_proto::v1::Summary;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(item: &JsValue, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn data(this: &JsChart) -> JsValue;

    #[wasm_bindgen(method)]
    fn update(this: &JsChart);

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct PieConfig {
    #[serde(rename = "type")]
    kind: &'static str,
    data: PieData,
    options: PieOptions,
}

#[derive(Serialize, Debug, PartialEq)]
struct PieData {
    labels: [&'static str; 3],
    datasets: [PieDataset; 1],
}

#[derive(Serialize, Debug, PartialEq)]
struct PieDataset {
    data: [u64; 3],
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct PieOptions {
    responsive: bool,
    maintain_aspect_ratio: bool,
    plugins: PiePlugins,
}

#[derive(Serialize, Debug, PartialEq)]
struct PiePlugins {
    legend: PieLegend,
}

#[derive(Serialize, Debug, PartialEq)]
struct PieLegend {
    position: &'static str,
}

impl PieConfig {
    pub(crate) fn new(summary: &Summary) -> Self {
        PieConfig {
            kind: "pie",
            data: PieData {
                labels: Summary::LABELS,
                datasets: [PieDataset {
                    data: summary.counts(),
                }],
            },
            options: PieOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: PiePlugins {
                    legend: PieLegend { position: "bottom" },
                },
            },
        }
    }
}

/// A live pie chart bound to one canvas.
pub struct SentimentChart {
    inner: JsChart,
}

impl SentimentChart {
    pub fn new(canvas: &HtmlCanvasElement, summary: &Summary) -> Result<Self, JsValue> {
        let config = PieConfig::new(summary)
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(JsValue::from)?;
        let inner = JsChart::new(canvas.as_ref(), &config)?;
        Ok(SentimentChart { inner })
    }

    /// Swap in fresh counts and redraw.
    pub fn set_summary(&self, summary: &Summary) -> Result<(), JsValue> {
        let datasets = Reflect::get(&self.inner.data(), &JsValue::from_str("datasets"))?;
        let first = Reflect::get_u32(&datasets, 0)?;
        let values: Array = summary
            .counts()
            .iter()
            .map(|count| JsValue::from_f64(*count as f64))
            .collect();
        Reflect::set(&first, &JsValue::from_str("data"), &values)?;
        self.inner.update();
        Ok(())
    }
}

impl Drop for SentimentChart {
    fn drop(&mut self) {
        self.inner.destroy();
    }
}

#[cfg(test)]
mod tests {
    use sentiment_proto::v1::Summary;

    use super::PieConfig;

    #[test]
    fn pie_config_shape() {
        let summary = Summary {
            positive: 4,
            negative: 1,
            neutral: 2,
        };
        let v = serde_json::to_value(PieConfig::new(&summary)).expect("JSON failure");
        assert_eq!(v["type"], "pie");
        assert_eq!(
            v["data"]["labels"],
            serde_json::json!(["Positive", "Negative", "Neutral"])
        );
        assert_eq!(v["data"]["datasets"][0]["data"], serde_json::json!([4, 1, 2]));
        assert_eq!(v["options"]["maintainAspectRatio"], false);
        assert_eq!(v["options"]["plugins"]["legend"]["position"], "bottom");
    }
}
