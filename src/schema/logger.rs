use async_graphql::parser::parse_query;
use async_graphql::{Request, Response, Value};

/// What a request asked for, captured before the schema consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSummary {
    pub kind: String,
    pub name: Option<String>,
}

impl OperationSummary {
    pub fn of(request: &Request) -> Self {
        let name = request.operation_name.clone();
        let kind = parse_query(&request.query)
            .ok()
            .and_then(|document| {
                document
                    .operations
                    .iter()
                    .find(|(op_name, _)| match (&name, op_name) {
                        (Some(wanted), Some(op_name)) => wanted.as_str() == op_name.as_str(),
                        (Some(_), None) => false,
                        (None, _) => true,
                    })
                    .map(|(_, operation)| operation.node.ty.to_string())
            })
            .unwrap_or_else(|| "unknown".to_string());

        Self { kind, name }
    }
}

/// `_id` for objects that carry one, the length for lists.
fn render(value: &Value) -> String {
    match value {
        Value::Object(fields) => match fields.get("_id") {
            Some(Value::String(id)) => id.clone(),
            _ => "{..}".to_string(),
        },
        Value::List(items) => format!("[{}]", items.len()),
        other => other.to_string(),
    }
}

pub fn render_fields(data: &Value) -> Vec<String> {
    match data {
        Value::Object(fields) => fields
            .iter()
            .map(|(field, value)| format!("{} {}", field, render(value)))
            .collect(),
        _ => vec![],
    }
}

pub fn log_operation(operation: &OperationSummary, response: &Response) {
    let fields = render_fields(&response.data).join(", ");

    if response.errors.is_empty() {
        tracing::info!(
            kind = %operation.kind,
            name = ?operation.name,
            "GraphQL {} {}",
            operation.kind,
            fields
        );
    } else {
        let errors: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        tracing::warn!(
            kind = %operation.kind,
            name = ?operation.name,
            "GraphQL {} {} failed: {}",
            operation.kind,
            fields,
            errors.join("; ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_detects_mutation() {
        let request = Request::new(
            "mutation { createProduct(product: {name: \"a\", price: 1, category: TECH}) { _id } }",
        );
        assert_eq!("mutation", OperationSummary::of(&request).kind);
    }

    #[test]
    fn summary_picks_named_operation() {
        let request = Request::new("query A { products { _id } } mutation B { createComment }")
            .operation_name("B");
        let summary = OperationSummary::of(&request);

        assert_eq!("mutation", summary.kind);
        assert_eq!(Some("B".to_string()), summary.name);
    }

    #[test]
    fn unparsable_query_is_unknown() {
        let request = Request::new("{ broken");
        assert_eq!("unknown", OperationSummary::of(&request).kind);
    }

    #[test]
    fn fields_render_ids_and_lengths() {
        let data = Value::from_json(serde_json::json!({
            "createProduct": { "_id": "abc123", "name": "Kettle" },
            "products": [null, null],
            "dummy": null,
        }))
        .unwrap();

        let mut fields = render_fields(&data);
        fields.sort();

        assert_eq!(
            vec![
                "createProduct abc123".to_string(),
                "dummy null".to_string(),
                "products [2]".to_string(),
            ],
            fields
        );
    }
}
