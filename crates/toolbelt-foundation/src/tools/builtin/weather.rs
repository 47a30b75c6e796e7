//! 天气预报工具
//! Weather forecast tool
//!
//! Descriptor-driven: the schema is declared by hand and the handler reads
//! fields straight from the invocation payload.

use crate::tools::adapters::DescriptorTool;
use serde_json::{Value, json};
use toolbelt_kernel::{InvocationContext, ToolDescriptor, ToolInvocation, ToolResponse};

pub const WEATHER_TOOL_NAME: &str = "weather_module";

/// Forecast length used when the payload has no `days`.
pub const DEFAULT_FORECAST_DAYS: i64 = 3;

pub type WeatherHandler = fn(&ToolInvocation, &InvocationContext) -> ToolResponse;

/// Concrete type of the registered weather tool
pub type WeatherTool = DescriptorTool<WeatherHandler>;

/// Descriptor of the weather tool
pub fn weather_descriptor() -> ToolDescriptor {
    ToolDescriptor::new(
        WEATHER_TOOL_NAME,
        "Get weather forecast for a city.",
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city"
                },
                "days": {
                    "type": "integer",
                    "description": "Number of days for the forecast",
                    "default": DEFAULT_FORECAST_DAYS
                }
            },
            "required": ["city"]
        }),
    )
}

/// Build a forecast for the requested city.
///
/// A missing `city` reads as the empty string; the registry decides whether such
/// a request ever gets here.
pub fn weather_module(invocation: &ToolInvocation, _ctx: &InvocationContext) -> ToolResponse {
    let city = invocation.get_str("city").unwrap_or_default();
    let days = match invocation.get("days") {
        Some(Value::String(days)) => days.clone(),
        Some(days) => days.to_string(),
        None => DEFAULT_FORECAST_DAYS.to_string(),
    };

    ToolResponse::success_text(
        &invocation.tool_use_id,
        format!("Weather forecast for {city} for the next {days} days..."),
    )
}

/// 创建天气工具
/// Create the weather tool
pub fn weather_tool() -> WeatherTool {
    DescriptorTool::new(weather_descriptor(), weather_module as WeatherHandler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbelt_kernel::{Tool, ToolStatus};

    fn run(id: &str, input: Value) -> ToolResponse {
        weather_module(&ToolInvocation::new(id, input), &InvocationContext::default())
    }

    #[test]
    fn test_default_days() {
        let response = run("w-1", json!({ "city": "Paris" }));
        assert_eq!(response.status, ToolStatus::Success);
        assert_eq!(response.tool_use_id, "w-1");
        assert_eq!(
            response.text(),
            Some("Weather forecast for Paris for the next 3 days...")
        );
    }

    #[test]
    fn test_explicit_days() {
        let response = run("w-2", json!({ "city": "Tokyo", "days": 5 }));
        assert_eq!(
            response.text(),
            Some("Weather forecast for Tokyo for the next 5 days...")
        );
    }

    #[test]
    fn test_missing_city_reads_empty() {
        let response = run("w-3", json!({ "days": 2 }));
        assert_eq!(
            response.text(),
            Some("Weather forecast for  for the next 2 days...")
        );
    }

    #[test]
    fn test_descriptor_wire_shape() {
        let descriptor = weather_descriptor();
        let wire = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(wire["name"], "weather_module");
        assert_eq!(wire["description"], "Get weather forecast for a city.");
        assert_eq!(wire["inputSchema"]["json"]["required"], json!(["city"]));
        assert_eq!(
            wire["inputSchema"]["json"]["properties"]["days"]["default"],
            json!(3)
        );
        assert_eq!(descriptor.required_fields(), vec!["city"]);
    }

    #[tokio::test]
    async fn test_tool_echoes_id() {
        let tool = weather_tool();
        assert_eq!(tool.name(), WEATHER_TOOL_NAME);
        for id in ["a", "call-42", ""] {
            let response = tool
                .invoke(
                    ToolInvocation::new(id, json!({ "city": "Oslo" })),
                    &InvocationContext::default(),
                )
                .await;
            assert_eq!(response.tool_use_id, id);
        }
    }
}
