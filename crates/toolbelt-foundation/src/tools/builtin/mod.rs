//! 内置工具
//! Built-in tools
//!
//! - `hello_test` - direct-parameter greeting
//! - `weather_module` - descriptor-driven forecast

pub mod greeting;
pub mod weather;

pub use greeting::{HELLO_TOOL_NAME, HelloArgs, HelloTool, hello, hello_tool};
pub use weather::{
    DEFAULT_FORECAST_DAYS, WEATHER_TOOL_NAME, WeatherTool, weather_descriptor, weather_module,
    weather_tool,
};

use super::registry::ToolRegistry;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use toolbelt_kernel::{Tool, ToolExt, ToolResult, ToolbeltConfig};

static BUILTIN_REGISTRY: OnceCell<ToolRegistry> = OnceCell::new();

/// All built-in tools
pub fn builtin_tools() -> Vec<Arc<dyn Tool>> {
    vec![hello_tool().into_dynamic(), weather_tool().into_dynamic()]
}

/// Build a fresh registry holding the built-in tools.
pub fn build_builtin_registry(config: ToolbeltConfig) -> ToolResult<ToolRegistry> {
    Ok(ToolRegistry::builder()
        .with_config(config)
        .register_all(builtin_tools())?
        .build())
}

/// Process-wide registry of the built-in tools with the default configuration.
///
/// Built on first use and never mutated afterwards.
pub fn builtin_registry() -> ToolResult<&'static ToolRegistry> {
    BUILTIN_REGISTRY.get_or_try_init(|| build_builtin_registry(ToolbeltConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolbelt_kernel::{
        InvocationContext, MissingFieldPolicy, ToolInvocation, ToolRegistry as _, ToolStatus,
    };

    #[test]
    fn test_builtin_registry_contents() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.list_names(), vec!["hello_test", "weather_module"]);
        assert!(std::ptr::eq(registry, builtin_registry().unwrap()));
    }

    #[test]
    fn test_duplicate_builtin_registration_fails() {
        let result = ToolRegistry::builder()
            .register_all(builtin_tools())
            .and_then(|b| b.register(weather_tool().into_dynamic()));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_hello_through_registry() {
        let registry = builtin_registry().unwrap();
        let response = registry
            .invoke(
                HELLO_TOOL_NAME,
                ToolInvocation::new("h-1", json!({ "name": "Ada" })),
                &InvocationContext::default(),
            )
            .await;
        assert_eq!(response.status, ToolStatus::Success);
        assert_eq!(response.text(), Some("Hello, Ada!"));
    }

    #[tokio::test]
    async fn test_weather_default_days_through_registry() {
        let registry = builtin_registry().unwrap();
        let response = registry
            .invoke(
                WEATHER_TOOL_NAME,
                ToolInvocation::new("w-1", json!({ "city": "Paris" })),
                &InvocationContext::default(),
            )
            .await;
        assert_eq!(response.status, ToolStatus::Success);
        assert_eq!(
            response.text(),
            Some("Weather forecast for Paris for the next 3 days...")
        );
    }

    #[tokio::test]
    async fn test_weather_missing_city_rejected_by_default() {
        let registry = builtin_registry().unwrap();
        let response = registry
            .invoke(
                WEATHER_TOOL_NAME,
                ToolInvocation::new("w-2", json!({ "days": 2 })),
                &InvocationContext::default(),
            )
            .await;
        assert_eq!(response.status, ToolStatus::Error);
        assert_eq!(response.tool_use_id, "w-2");
        assert!(response.text().unwrap().contains("city"));
    }

    #[tokio::test]
    async fn test_weather_missing_city_substituted() {
        let config = ToolbeltConfig::default().with_missing_fields(MissingFieldPolicy::Substitute);
        let registry = build_builtin_registry(config).unwrap();
        let response = registry
            .invoke(
                WEATHER_TOOL_NAME,
                ToolInvocation::new("w-3", json!({ "days": 2 })),
                &InvocationContext::default(),
            )
            .await;
        assert_eq!(response.status, ToolStatus::Success);
        assert_eq!(
            response.text(),
            Some("Weather forecast for  for the next 2 days...")
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_echoes_id() {
        let registry = builtin_registry().unwrap();
        let response = registry
            .invoke(
                "forecast",
                ToolInvocation::new("x-1", json!({})),
                &InvocationContext::default(),
            )
            .await;
        assert_eq!(response.status, ToolStatus::Error);
        assert_eq!(response.tool_use_id, "x-1");
        assert_eq!(response.text(), Some("Error: Tool not found: forecast"));
    }

    #[tokio::test]
    async fn test_dispatch_by_name() {
        let registry = builtin_registry().unwrap();
        let invocation: ToolInvocation = serde_json::from_value(json!({
            "toolUseId": "d-1",
            "name": "weather_module",
            "input": { "city": "Tokyo", "days": 5 }
        }))
        .unwrap();

        let response = registry.dispatch(invocation, &InvocationContext::default()).await;
        assert_eq!(response.tool_use_id, "d-1");
        assert_eq!(
            response.text(),
            Some("Weather forecast for Tokyo for the next 5 days...")
        );
    }
}
