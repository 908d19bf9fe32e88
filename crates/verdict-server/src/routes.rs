use serde_json::Value;
use verdict_http::RouteResolver;

/// Named routes this application can resolve for deferred `Location` targets
#[derive(Debug, Default)]
pub struct ActionRoutes;

impl RouteResolver for ActionRoutes {
    fn resolve(&self, name: &str, params: Option<&Value>) -> Option<String> {
        match name {
            "get_user" => {
                let id = scalar(params?.get("id")?)?;
                Some(format!("/users/{id}"))
            }
            "list_users" => Some("/users".to_owned()),
            _ => None,
        }
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn get_user_resolves_with_an_id_param() {
        let routes = ActionRoutes;
        assert_eq!(routes.resolve("get_user", Some(&json!({"id": 5}))), Some("/users/5".to_owned()));
    }

    #[test]
    fn unknown_names_and_missing_params_do_not_resolve() {
        let routes = ActionRoutes;
        assert_eq!(routes.resolve("get_user", None), None);
        assert_eq!(routes.resolve("nope", Some(&json!({"id": 5}))), None);
    }
}
