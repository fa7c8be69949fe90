//! OpenAPI 3.0 document generated from route metadata.
//!
//! [`USER_ROUTES`] describes every `/users` operation the router serves.
//! [`openapi_document`] turns that table into the JSON document served at
//! [`router::OPENAPI_JSON`](crate::router::OPENAPI_JSON) and rendered by the
//! Swagger UI page at [`router::DOCS`](crate::router::DOCS).
//!
//! The document declares bearer and basic security schemes. No route
//! enforces either of them.

use serde_json::{json, Map, Value};

use crate::router::{USERS, USER_BY_ID};

/// HTTP method of a documented operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Lower-case key used in an OpenAPI path item.
    pub fn as_key(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
        }
    }
}

/// Shape of a JSON body in a request or response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    User,
    UserList,
}

impl Body {
    fn schema(self) -> Value {
        match self {
            Body::User => json!({ "$ref": "#/components/schemas/User" }),
            Body::UserList => json!({
                "type": "array",
                "items": { "$ref": "#/components/schemas/User" }
            }),
        }
    }

    fn content(self) -> Value {
        json!({ "application/json": { "schema": self.schema() } })
    }
}

/// One documented response of an operation.
#[derive(Debug, Clone, Copy)]
pub struct ResponseDoc {
    pub status: u16,
    pub description: &'static str,
    pub body: Option<Body>,
}

/// Metadata for one routed operation.
#[derive(Debug, Clone, Copy)]
pub struct RouteDoc {
    pub method: Method,
    pub path: &'static str,
    pub summary: &'static str,
    /// Description of the `{id}` path parameter, if the path has one.
    pub id_param: Option<&'static str>,
    pub request_body: Option<Body>,
    pub responses: &'static [ResponseDoc],
}

pub const TAG: &str = "Users";

/// Every `/users` operation served by the router.
pub const USER_ROUTES: &[RouteDoc] = &[
    RouteDoc {
        method: Method::Get,
        path: USERS,
        summary: "Get all users",
        id_param: None,
        request_body: None,
        responses: &[ResponseDoc {
            status: 200,
            description: "The list of all users",
            body: Some(Body::UserList),
        }],
    },
    RouteDoc {
        method: Method::Get,
        path: USER_BY_ID,
        summary: "Get user by id",
        id_param: Some("The user id"),
        request_body: None,
        responses: &[
            ResponseDoc {
                status: 200,
                description: "The user description by id",
                body: Some(Body::User),
            },
            ResponseDoc {
                status: 404,
                description: "User not found",
                body: None,
            },
        ],
    },
    RouteDoc {
        method: Method::Post,
        path: USERS,
        summary: "Create a new user",
        id_param: None,
        request_body: Some(Body::User),
        responses: &[
            ResponseDoc {
                status: 200,
                description: "The user was successfully created",
                body: Some(Body::User),
            },
            ResponseDoc {
                status: 400,
                description: "The body is not valid JSON",
                body: None,
            },
            ResponseDoc {
                status: 415,
                description: "The body is not sent as application/json",
                body: None,
            },
        ],
    },
    RouteDoc {
        method: Method::Put,
        path: USER_BY_ID,
        summary: "Update the user by the id",
        id_param: Some("The user id"),
        request_body: Some(Body::User),
        responses: &[
            ResponseDoc {
                status: 200,
                description: "The user was updated",
                body: Some(Body::User),
            },
            ResponseDoc {
                status: 404,
                description: "The user was not found",
                body: None,
            },
            ResponseDoc {
                status: 400,
                description: "The body is not valid JSON",
                body: None,
            },
            ResponseDoc {
                status: 415,
                description: "The body is not sent as application/json",
                body: None,
            },
        ],
    },
    RouteDoc {
        method: Method::Delete,
        path: USER_BY_ID,
        summary: "Remove the user by id",
        id_param: Some("The user id"),
        request_body: None,
        responses: &[
            ResponseDoc {
                status: 200,
                description: "The user was deleted; the remaining users are returned",
                body: Some(Body::UserList),
            },
            ResponseDoc {
                status: 404,
                description: "The user was not found",
                body: None,
            },
        ],
    },
];

fn user_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name", "email"],
        "properties": {
            "id": {
                "type": "integer",
                "description": "The id of the user, supplied by the caller"
            },
            "name": {
                "type": "string",
                "description": "The name of the user"
            },
            "email": {
                "type": "string",
                "format": "email",
                "description": "The email of the user"
            }
        },
        "example": {
            "id": 3,
            "name": "user3",
            "email": "user@gmail.com"
        }
    })
}

fn security_schemes() -> Value {
    json!({
        "access_token": {
            "type": "http",
            "scheme": "bearer",
            "description": "Please input your JWT",
            "bearerFormat": "JWT"
        },
        "basic": {
            "type": "http",
            "scheme": "basic"
        }
    })
}

fn operation(route: &RouteDoc) -> Value {
    let mut op = Map::new();
    op.insert("summary".into(), json!(route.summary));
    op.insert("tags".into(), json!([TAG]));

    if let Some(description) = route.id_param {
        op.insert(
            "parameters".into(),
            json!([{
                "in": "path",
                "name": "id",
                "schema": { "type": "integer" },
                "required": true,
                "description": description
            }]),
        );
    }

    if let Some(body) = route.request_body {
        op.insert(
            "requestBody".into(),
            json!({ "required": true, "content": body.content() }),
        );
    }

    let mut responses = Map::new();
    for resp in route.responses {
        let mut entry = Map::new();
        entry.insert("description".into(), json!(resp.description));
        if let Some(body) = resp.body {
            entry.insert("content".into(), body.content());
        }
        responses.insert(resp.status.to_string(), Value::Object(entry));
    }
    op.insert("responses".into(), Value::Object(responses));

    Value::Object(op)
}

/// Builds the OpenAPI document for `routes`.
pub fn build_document(routes: &[RouteDoc]) -> Value {
    let mut paths = Map::new();
    for route in routes {
        let item = paths
            .entry(route.path)
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(item) = item {
            item.insert(route.method.as_key().into(), operation(route));
        }
    }

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "User API",
            "version": "1.0",
            "description": "OpenAPI for Users"
        },
        "tags": [{ "name": TAG }],
        "paths": paths,
        "components": {
            "schemas": { "User": user_schema() },
            "securitySchemes": security_schemes()
        }
    })
}

/// The document for every route the server exposes.
pub fn openapi_document() -> Value {
    build_document(USER_ROUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_user_operation() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 2);

        let collection = paths["/users"].as_object().unwrap();
        assert!(collection.contains_key("get"));
        assert!(collection.contains_key("post"));

        let item = paths["/users/{id}"].as_object().unwrap();
        for method in ["get", "put", "delete"] {
            assert!(item.contains_key(method), "missing {}", method);
        }
    }

    #[test]
    fn document_declares_security_schemes() {
        let doc = openapi_document();
        let schemes = &doc["components"]["securitySchemes"];
        assert_eq!(schemes["access_token"]["scheme"], "bearer");
        assert_eq!(schemes["access_token"]["bearerFormat"], "JWT");
        assert_eq!(schemes["basic"]["scheme"], "basic");
    }

    #[test]
    fn user_schema_requires_name_and_email() {
        let doc = openapi_document();
        let user = &doc["components"]["schemas"]["User"];
        assert_eq!(user["required"], json!(["name", "email"]));
        assert_eq!(user["properties"]["email"]["format"], "email");
    }

    #[test]
    fn id_routes_declare_integer_path_parameter() {
        let doc = openapi_document();
        let param = &doc["paths"]["/users/{id}"]["get"]["parameters"][0];
        assert_eq!(param["in"], "path");
        assert_eq!(param["name"], "id");
        assert_eq!(param["schema"]["type"], "integer");
        assert_eq!(param["required"], true);
    }

    #[test]
    fn responses_reference_user_schema() {
        let doc = openapi_document();
        let list = &doc["paths"]["/users"]["get"]["responses"]["200"];
        assert_eq!(
            list["content"]["application/json"]["schema"]["items"]["$ref"],
            "#/components/schemas/User"
        );
        let not_found = &doc["paths"]["/users/{id}"]["delete"]["responses"]["404"];
        assert!(not_found.get("content").is_none());
    }

    #[test]
    fn body_routes_document_extractor_rejections() {
        let doc = openapi_document();
        for (path, method) in [("/users", "post"), ("/users/{id}", "put")] {
            let responses = doc["paths"][path][method]["responses"].as_object().unwrap();
            assert!(responses.contains_key("400"), "{} {} lacks 400", method, path);
            assert!(responses.contains_key("415"), "{} {} lacks 415", method, path);
            assert!(!responses.contains_key("422"), "{} {} documents 422", method, path);
        }
    }

    #[test]
    fn build_document_with_no_routes_has_empty_paths() {
        let doc = build_document(&[]);
        assert_eq!(doc["paths"], json!({}));
        assert_eq!(doc["info"]["title"], "User API");
    }
}
