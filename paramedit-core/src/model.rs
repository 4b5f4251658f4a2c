use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RenderError;
use crate::state::ParamValue;

/// Exportable snapshot: current values plus opaque `colors` carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default)]
    pub param_values: Vec<ParamValue>,
    #[serde(default)]
    pub colors: Vec<Value>,
}

/// Borrowed view with the same field order as `Model`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelView<'a> {
    param_values: &'a [ParamValue],
    colors: &'a [Value],
}

/// Serialize the values and colors as pretty JSON (2-space indent).
///
/// Validation runs here regardless of any cached trigger state: a single
/// blank value yields `RenderError::Validation`.
pub fn render(values: &[ParamValue], colors: &[Value]) -> Result<String, RenderError> {
    if values.iter().any(ParamValue::is_blank) {
        return Err(RenderError::Validation);
    }
    let view = ModelView {
        param_values: values,
        colors,
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_pretty_json_in_field_order() {
        let values = vec![ParamValue::new(1, "повседневное"), ParamValue::new(2, "макси")];
        let out = render(&values, &[]).unwrap();
        let expected = r#"{
  "paramValues": [
    {
      "paramId": 1,
      "value": "повседневное"
    },
    {
      "paramId": 2,
      "value": "макси"
    }
  ],
  "colors": []
}"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn blank_value_fails_validation() {
        let values = vec![ParamValue::new(1, "a"), ParamValue::new(2, " ")];
        assert!(matches!(render(&values, &[]), Err(RenderError::Validation)));
    }

    #[test]
    fn empty_values_render() {
        let out = render(&[], &[]).unwrap();
        assert_eq!(out, "{\n  \"paramValues\": [],\n  \"colors\": []\n}");
    }

    #[test]
    fn colors_pass_through_in_order() {
        let colors = vec![
            json!({"z": 1, "a": "red"}),
            json!("blue"),
            json!([3, 2, 1]),
        ];
        let out = render(&[ParamValue::new(1, "x")], &colors).unwrap();
        let parsed: Model = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.colors, colors);
        // object key order inside a color survives
        assert!(out.find("\"z\"").unwrap() < out.find("\"a\"").unwrap());
    }

    #[test]
    fn color_number_text_survives() {
        let colors: Vec<Value> =
            serde_json::from_str("[1e2, 12345678901234567890123, 0.10, -0.0]").unwrap();
        let out = render(&[ParamValue::new(1, "x")], &colors).unwrap();
        for literal in ["1e2", "12345678901234567890123", "0.10", "-0.0"] {
            assert!(out.contains(literal), "missing {literal} in\n{out}");
        }
        assert!(!out.contains("100.0"));
        assert!(!out.contains("e+22"));
    }

    #[test]
    fn value_text_is_not_trimmed_in_output() {
        let out = render(&[ParamValue::new(1, " x ")], &[]).unwrap();
        assert!(out.contains("\"value\": \" x \""));
    }
}
