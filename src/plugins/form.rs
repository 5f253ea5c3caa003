//! Declarative settings form handed to the host's rendering layer.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue, json};

/// One component in the form tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormNode {
    pub component: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<FormNode>,
}

impl FormNode {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: Map::new(),
            content: Vec::new(),
        }
    }

    pub fn prop(mut self, key: &str, value: JsonValue) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }

    pub fn child(mut self, node: FormNode) -> Self {
        self.content.push(node);
        self
    }

    /// Depth-first search for the component bound to `model`
    pub fn find_model(&self, model: &str) -> Option<&FormNode> {
        if self.props.get("model").and_then(JsonValue::as_str) == Some(model) {
            return Some(self);
        }
        self.content.iter().find_map(|node| node.find_model(model))
    }
}

fn row(col: FormNode) -> FormNode {
    FormNode::new("VRow").child(col)
}

/// Form for the media notification plugin: a switch, a URL field and a type select.
pub fn media_notification_form() -> Vec<FormNode> {
    let enabled = FormNode::new("VCol")
        .prop("cols", json!(12))
        .prop("md", json!(6))
        .child(
            FormNode::new("VSwitch")
                .prop("model", json!("enabled"))
                .prop("label", json!("启用插件")),
        );

    let webhook_url = FormNode::new("VCol").prop("cols", json!(12)).child(
        FormNode::new("VTextField")
            .prop("model", json!("webhook_url"))
            .prop("label", json!("Webhook地址"))
            .prop("placeholder", json!("http://your-server/webhook")),
    );

    let notify_type = FormNode::new("VCol").prop("cols", json!(12)).child(
        FormNode::new("VSelect")
            .prop("model", json!("notify_type"))
            .prop("label", json!("通知类型"))
            .prop(
                "items",
                json!([
                    {"title": "全部", "value": "ALL"},
                    {"title": "仅电影", "value": "MOVIE"},
                    {"title": "仅剧集", "value": "TV"}
                ]),
            ),
    );

    vec![
        FormNode::new("VForm")
            .child(row(enabled))
            .child(row(webhook_url))
            .child(row(notify_type)),
    ]
}

/// Default values rendered into the form
pub fn media_notification_defaults() -> Map<String, JsonValue> {
    let mut defaults = Map::new();
    defaults.insert("enabled".to_string(), json!(false));
    defaults.insert("webhook_url".to_string(), json!(""));
    defaults.insert("notify_type".to_string(), json!("ALL"));
    defaults
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_binds_three_models() {
        let form = media_notification_form();
        assert_eq!(form.len(), 1);
        let root = &form[0];
        assert_eq!(root.component, "VForm");
        assert_eq!(root.content.len(), 3);

        assert_eq!(root.find_model("enabled").unwrap().component, "VSwitch");
        assert_eq!(root.find_model("webhook_url").unwrap().component, "VTextField");
        assert_eq!(root.find_model("notify_type").unwrap().component, "VSelect");
        assert!(root.find_model("missing").is_none());
    }

    #[test]
    fn test_select_offers_all_notify_types() {
        let form = media_notification_form();
        let select = form[0].find_model("notify_type").unwrap();
        let values: Vec<&str> = select.props["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|item| item["value"].as_str())
            .collect();
        assert_eq!(values, vec!["ALL", "MOVIE", "TV"]);
    }

    #[test]
    fn test_form_serialization_skips_empty_fields() {
        let value = serde_json::to_value(&media_notification_form()).unwrap();
        let root = &value[0];
        assert!(root.get("props").is_none());
        assert_eq!(root["content"][0]["component"], "VRow");
        assert_eq!(
            root["content"][1]["content"][0]["content"][0]["props"]["placeholder"],
            "http://your-server/webhook"
        );
    }

    #[test]
    fn test_defaults() {
        let defaults = media_notification_defaults();
        assert_eq!(defaults["enabled"], json!(false));
        assert_eq!(defaults["webhook_url"], json!(""));
        assert_eq!(defaults["notify_type"], json!("ALL"));
    }
}
