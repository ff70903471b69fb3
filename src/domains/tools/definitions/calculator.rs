//! Calculator tool.
//!
//! Performs one of four arithmetic operations on two numbers.

use std::str::FromStr;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::schema_for_type,
    model::JsonObject,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domains::tools::{ToolError, ToolHandler, decode_arguments};

/// Arithmetic operations supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[schemars(inline)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Apply the operation to `a` and `b`.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalculatorError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(CalculatorError::UnknownOperation(other.to_string())),
        }
    }
}

/// Domain errors raised by the calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl From<CalculatorError> for ToolError {
    fn from(err: CalculatorError) -> Self {
        ToolError::execution(err.to_string())
    }
}

/// Parameters for the calculator tool.
///
/// `operation` stays a plain string on the wire so that values outside the
/// advertised enum reach [`CalculatorTool::execute`] and are reported as
/// unknown operations.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculatorParams {
    #[schemars(with = "Operation", description = "The arithmetic operation to perform")]
    pub operation: String,

    #[schemars(description = "First number")]
    pub a: f64,

    #[schemars(description = "Second number")]
    pub b: f64,
}

impl CalculatorParams {
    pub fn new(operation: impl Into<String>, a: f64, b: f64) -> Self {
        Self {
            operation: operation.into(),
            a,
            b,
        }
    }
}

/// Calculator tool implementation.
#[derive(Debug, Clone, Default)]
pub struct CalculatorTool;

impl CalculatorTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculator";

    /// Prefix used for error messages returned to clients.
    pub const DISPLAY_NAME: &'static str = "Calculator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Perform basic arithmetic operations: add, subtract, multiply, divide";

    pub fn new() -> Self {
        Self
    }

    /// Execute the calculation.
    pub fn execute(params: &CalculatorParams) -> Result<f64, CalculatorError> {
        let operation: Operation = params.operation.parse()?;
        operation.apply(params.a, params.b)
    }
}

#[async_trait::async_trait]
impl ToolHandler for CalculatorTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Arc<JsonObject> {
        schema_for_type::<CalculatorParams>().into()
    }

    async fn call(&self, arguments: JsonObject) -> Result<String, ToolError> {
        let params: CalculatorParams = decode_arguments(arguments)?;
        debug!(
            "Calculating {} with a={} b={}",
            params.operation, params.a, params.b
        );
        let value = Self::execute(&params)?;
        Ok(format_number(value))
    }
}

/// Render a result the way JSON-speaking clients expect: no negative zero,
/// and non-finite values spelled `Infinity` / `-Infinity` / `NaN`.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 8] = [0.0, 1.0, -1.0, 2.5, -7.25, 100.0, 1e-3, 123456.789];

    fn calc(operation: &str, a: f64, b: f64) -> Result<f64, CalculatorError> {
        CalculatorTool::execute(&CalculatorParams::new(operation, a, b))
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_addition() {
        assert_eq!(calc("add", 5.0, 3.0), Ok(8.0));
        assert_eq!(calc("add", -1.0, 1.0), Ok(0.0));
        assert_eq!(calc("add", 0.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(calc("subtract", 10.0, 4.0), Ok(6.0));
        assert_eq!(calc("subtract", 5.0, 10.0), Ok(-5.0));
        assert_eq!(calc("subtract", 0.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(calc("multiply", 6.0, 7.0), Ok(42.0));
        assert_eq!(calc("multiply", -3.0, 4.0), Ok(-12.0));
        assert_eq!(calc("multiply", 0.0, 100.0), Ok(0.0));
    }

    #[test]
    fn test_division() {
        assert_eq!(calc("divide", 15.0, 3.0), Ok(5.0));
        assert_eq!(calc("divide", 7.0, 2.0), Ok(3.5));
        assert_eq!(calc("divide", -10.0, 2.0), Ok(-5.0));
    }

    #[test]
    fn test_operations_match_native_arithmetic() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(calc("add", a, b), Ok(a + b));
                assert_eq!(calc("subtract", a, b), Ok(a - b));
                assert_eq!(calc("multiply", a, b), Ok(a * b));
                if b != 0.0 {
                    assert_eq!(calc("divide", a, b), Ok(a / b));
                }
            }
        }
    }

    #[test]
    fn test_division_by_zero() {
        for a in SAMPLES {
            let err = calc("divide", a, 0.0).unwrap_err();
            assert_eq!(err.to_string(), "Division by zero is not allowed");
        }
        // -0.0 == 0.0
        assert_eq!(calc("divide", 1.0, -0.0), Err(CalculatorError::DivisionByZero));
    }

    #[test]
    fn test_unknown_operation() {
        let err = calc("modulo", 10.0, 3.0).unwrap_err();
        assert_eq!(err.to_string(), "Unknown operation: modulo");

        // Matching is case-sensitive
        let err = calc("Add", 1.0, 2.0).unwrap_err();
        assert_eq!(err.to_string(), "Unknown operation: Add");

        let err = calc("", 1.0, 2.0).unwrap_err();
        assert_eq!(err.to_string(), "Unknown operation: ");
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("subtract".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("multiply".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("divide".parse::<Operation>(), Ok(Operation::Divide));
    }

    #[test]
    fn test_calculator_error_into_tool_error() {
        let err: ToolError = CalculatorError::DivisionByZero.into();
        assert!(matches!(err, ToolError::Execution(_)));
        assert_eq!(err.to_string(), "Division by zero is not allowed");
    }

    #[test]
    fn test_descriptor() {
        let tool = CalculatorTool.to_tool();
        assert_eq!(tool.name, "calculator");
        assert_eq!(tool.description.as_deref(), Some(CalculatorTool::DESCRIPTION));

        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["type"], "object");
        for field in ["operation", "a", "b"] {
            assert!(schema["properties"].get(field).is_some(), "missing {field}");
        }

        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required.len(), 3);
        for field in ["operation", "a", "b"] {
            assert!(required.contains(&field));
        }

        let rendered = schema.to_string();
        for op in ["\"add\"", "\"subtract\"", "\"multiply\"", "\"divide\""] {
            assert!(rendered.contains(op), "schema is missing {op}");
        }
        assert!(rendered.contains("The arithmetic operation to perform"));
        assert!(rendered.contains("First number"));
        assert!(rendered.contains("Second number"));
    }

    #[test]
    fn test_call_renders_value() {
        let tool = CalculatorTool::new();
        let out = tokio_test::block_on(
            tool.call(args(serde_json::json!({ "operation": "divide", "a": 7, "b": 2 }))),
        );
        assert_eq!(out.unwrap(), "3.5");

        let out = tokio_test::block_on(
            tool.call(args(serde_json::json!({ "operation": "add", "a": 5, "b": 3 }))),
        );
        assert_eq!(out.unwrap(), "8");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_call_normalises_negative_zero_and_overflow() {
        let tool = CalculatorTool::new();
        let out = tokio_test::block_on(
            tool.call(args(serde_json::json!({ "operation": "multiply", "a": -1, "b": 0 }))),
        );
        assert_eq!(out.unwrap(), "0");

        let out = tokio_test::block_on(
            tool.call(args(serde_json::json!({ "operation": "multiply", "a": 1e308, "b": 10 }))),
        );
        assert_eq!(out.unwrap(), "Infinity");

        let out = tokio_test::block_on(
            tool.call(args(serde_json::json!({ "operation": "subtract", "a": -1e308, "b": 1e308 }))),
        );
        assert_eq!(out.unwrap(), "-Infinity");
    }

    #[test]
    fn test_call_missing_argument() {
        let tool = CalculatorTool::new();
        let err = tokio_test::block_on(
            tool.call(args(serde_json::json!({ "operation": "add", "a": 5 }))),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
