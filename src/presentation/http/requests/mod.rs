use poem_openapi::Object;
use serde_json::Value;

// Fields are optional here so missing input reaches the use cases and fails
// there with a validation error rather than a deserialization error.

#[derive(Object, Debug)]
pub struct ResolveUserRequestDto {
    pub name: Option<String>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateMealRequestDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<String>,
    /// Any JSON value; only `true` and `false` are meaningful.
    pub is_inside_diet: Option<Value>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct UpdateMealRequestDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<String>,
    /// Non-boolean values are ignored.
    pub is_inside_diet: Option<Value>,
}
